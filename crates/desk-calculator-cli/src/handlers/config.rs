//! Config command handler

use crate::config::CliConfig;
use crate::error::CliResult;
use crate::ConfigArgs;
use desk_calculator::config::DesktopConfig;
use std::io::Write;

/// Execute the config command
pub fn execute_config<W: Write>(
    config: &CliConfig,
    args: &ConfigArgs,
    mut out: W,
) -> CliResult<()> {
    let desktop_config = if args.default {
        DesktopConfig::default()
    } else {
        config.load_desktop_config()?
    };
    if config.verbosity.is_verbose() {
        match &config.desktop_config {
            Some(path) => writeln!(out, "# source: {}", path.display())?,
            None => writeln!(out, "# source: built-in defaults")?,
        }
    }
    write!(out, "{}", desktop_config.to_yaml()?)?;
    Ok(())
}

#[cfg(test)]
#[allow(clippy::unwrap_used, clippy::expect_used)]
mod tests {
    use super::*;
    use crate::config::Verbosity;
    use std::io::Write as _;

    fn run(config: &CliConfig, default: bool) -> String {
        let mut out = Vec::new();
        execute_config(config, &ConfigArgs { default }, &mut out).unwrap();
        String::from_utf8(out).unwrap()
    }

    #[test]
    fn test_defaults() {
        let yaml = run(&CliConfig::new(), false);
        let parsed = DesktopConfig::from_yaml_str(&yaml).unwrap();
        assert_eq!(parsed, DesktopConfig::default());
        assert!(!yaml.starts_with('#'));
    }

    #[test]
    fn test_loaded_file_with_source_comment() {
        let mut file = tempfile::NamedTempFile::new().unwrap();
        writeln!(file, "control_center:\n  volume: 5").unwrap();
        let config = CliConfig::new()
            .with_verbosity(Verbosity::Verbose)
            .with_desktop_config(Some(file.path().to_path_buf()));
        let yaml = run(&config, false);
        assert!(yaml.starts_with("# source: "));
        assert!(yaml.contains("volume: 5"));
        assert!(yaml.contains("brightness: 70"));
    }

    #[test]
    fn test_default_flag_ignores_file() {
        let config = CliConfig::new()
            .with_desktop_config(Some(std::path::PathBuf::from("/nonexistent.yaml")));
        let yaml = run(&config, true);
        assert!(yaml.contains("open_calculator: false"));
    }
}
