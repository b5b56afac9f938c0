//! Log output on stderr
//!
//! `RUST_LOG` wins over the `-v`/`-q` flags when it is set.

use crate::config::CliConfig;
use tracing_subscriber::EnvFilter;

/// Installs the global subscriber; a second call is a no-op
pub fn init(config: &CliConfig) {
    let filter = EnvFilter::try_from_default_env()
        .unwrap_or_else(|_| EnvFilter::new(config.verbosity.filter_directive()));

    let builder = tracing_subscriber::fmt()
        .with_env_filter(filter)
        .with_writer(std::io::stderr)
        .with_target(false);

    let installed = if config.log_json {
        builder.json().try_init()
    } else {
        builder.with_ansi(config.color.should_color()).try_init()
    };

    if installed.is_ok() {
        tracing::debug!(verbosity = ?config.verbosity, "logging initialised");
    }
}
