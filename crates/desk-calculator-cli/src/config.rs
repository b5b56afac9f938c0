//! CLI configuration

use crate::error::CliResult;
use desk_calculator::config::DesktopConfig;
use serde::{Deserialize, Serialize};
use std::path::PathBuf;

/// CLI verbosity level
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default, Serialize, Deserialize)]
pub enum Verbosity {
    /// Quiet - errors only
    Quiet,
    /// Normal - warnings and errors
    #[default]
    Normal,
    /// Verbose - lifecycle events
    Verbose,
    /// Debug - every calculator action
    Debug,
}

impl Verbosity {
    /// Builds the level from `-v` count and `-q`
    #[must_use]
    pub const fn from_flags(verbose: u8, quiet: bool) -> Self {
        if quiet {
            return Self::Quiet;
        }
        match verbose {
            0 => Self::Normal,
            1 => Self::Verbose,
            _ => Self::Debug,
        }
    }

    /// Check if quiet mode
    #[must_use]
    pub const fn is_quiet(self) -> bool {
        matches!(self, Self::Quiet)
    }

    /// Check if verbose or higher
    #[must_use]
    pub const fn is_verbose(self) -> bool {
        matches!(self, Self::Verbose | Self::Debug)
    }

    /// Log filter used when `RUST_LOG` is not set
    #[must_use]
    pub const fn filter_directive(self) -> &'static str {
        match self {
            Self::Quiet => "error",
            Self::Normal => "warn",
            Self::Verbose => "info",
            Self::Debug => "debug",
        }
    }
}

/// Color output choice
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default, Serialize, Deserialize)]
pub enum ColorChoice {
    /// Always use colors
    Always,
    /// Use colors when output is a terminal
    #[default]
    Auto,
    /// Never use colors
    Never,
}

impl ColorChoice {
    /// Should use colors based on output detection
    #[must_use]
    pub fn should_color(self) -> bool {
        match self {
            Self::Always => true,
            Self::Never => false,
            Self::Auto => console::colors_enabled(),
        }
    }
}

/// CLI configuration
#[derive(Debug, Clone, Default, Serialize, Deserialize)]
pub struct CliConfig {
    /// Verbosity level
    pub verbosity: Verbosity,
    /// Color output choice
    pub color: ColorChoice,
    /// JSON log lines on stderr
    pub log_json: bool,
    /// Desktop configuration file, if any
    pub desktop_config: Option<PathBuf>,
}

impl CliConfig {
    /// Create new default configuration
    #[must_use]
    pub fn new() -> Self {
        Self::default()
    }

    /// Set verbosity
    #[must_use]
    pub const fn with_verbosity(mut self, verbosity: Verbosity) -> Self {
        self.verbosity = verbosity;
        self
    }

    /// Set color choice
    #[must_use]
    pub const fn with_color(mut self, color: ColorChoice) -> Self {
        self.color = color;
        self
    }

    /// Set JSON logging
    #[must_use]
    pub const fn with_log_json(mut self, log_json: bool) -> Self {
        self.log_json = log_json;
        self
    }

    /// Set the desktop configuration file
    #[must_use]
    pub fn with_desktop_config(mut self, path: Option<PathBuf>) -> Self {
        self.desktop_config = path;
        self
    }

    /// Loads the desktop configuration, or defaults when no file was given
    pub fn load_desktop_config(&self) -> CliResult<DesktopConfig> {
        match &self.desktop_config {
            Some(path) => Ok(DesktopConfig::load(path)?),
            None => Ok(DesktopConfig::default()),
        }
    }
}

#[cfg(test)]
#[allow(clippy::unwrap_used, clippy::expect_used)]
mod tests {
    use super::*;
    use crate::error::CliError;
    use std::io::Write;

    #[test]
    fn test_verbosity_from_flags() {
        assert_eq!(Verbosity::from_flags(0, false), Verbosity::Normal);
        assert_eq!(Verbosity::from_flags(1, false), Verbosity::Verbose);
        assert_eq!(Verbosity::from_flags(3, false), Verbosity::Debug);
        assert_eq!(Verbosity::from_flags(2, true), Verbosity::Quiet);
    }

    #[test]
    fn test_verbosity_predicates() {
        assert!(Verbosity::Quiet.is_quiet());
        assert!(!Verbosity::Normal.is_verbose());
        assert!(Verbosity::Verbose.is_verbose());
        assert!(Verbosity::Debug.is_verbose());
    }

    #[test]
    fn test_filter_directive() {
        assert_eq!(Verbosity::Quiet.filter_directive(), "error");
        assert_eq!(Verbosity::Normal.filter_directive(), "warn");
        assert_eq!(Verbosity::Verbose.filter_directive(), "info");
        assert_eq!(Verbosity::Debug.filter_directive(), "debug");
    }

    #[test]
    fn test_color_choice() {
        assert!(ColorChoice::Always.should_color());
        assert!(!ColorChoice::Never.should_color());
        assert_eq!(ColorChoice::default(), ColorChoice::Auto);
    }

    #[test]
    fn test_builder() {
        let config = CliConfig::new()
            .with_verbosity(Verbosity::Debug)
            .with_color(ColorChoice::Never)
            .with_log_json(true)
            .with_desktop_config(Some(PathBuf::from("desk.yaml")));
        assert_eq!(config.verbosity, Verbosity::Debug);
        assert_eq!(config.color, ColorChoice::Never);
        assert!(config.log_json);
        assert_eq!(config.desktop_config, Some(PathBuf::from("desk.yaml")));
    }

    #[test]
    fn test_load_desktop_config_default() {
        let config = CliConfig::new().load_desktop_config().unwrap();
        assert_eq!(config, DesktopConfig::default());
    }

    #[test]
    fn test_load_desktop_config_file() {
        let mut file = tempfile::NamedTempFile::new().unwrap();
        writeln!(file, "open_calculator: true").unwrap();
        let config = CliConfig::new()
            .with_desktop_config(Some(file.path().to_path_buf()))
            .load_desktop_config()
            .unwrap();
        assert!(config.open_calculator);
    }

    #[test]
    fn test_load_desktop_config_missing_file() {
        let err = CliConfig::new()
            .with_desktop_config(Some(PathBuf::from("/nonexistent/desk.yaml")))
            .load_desktop_config()
            .unwrap_err();
        assert!(matches!(err, CliError::Desk(_)));
    }
}
