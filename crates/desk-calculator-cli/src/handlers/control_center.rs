//! Control-center command handler

use crate::config::CliConfig;
use crate::error::{CliError, CliResult};
use crate::ControlCenterArgs;
use desk_calculator::config::ControlCenterSettings;
use desk_calculator::error::DeskError;
use desk_calculator::shell::{ControlCenter, Toggle};
use std::io::Write;

/// Applies slider values and toggle flips in the order given
///
/// Every toggle name is checked before anything changes, so an unknown
/// name leaves the control center untouched.
pub fn apply_changes(
    control_center: &mut ControlCenter,
    args: &ControlCenterArgs,
) -> CliResult<()> {
    let toggles = args
        .toggles
        .iter()
        .map(|name| name.parse::<Toggle>())
        .collect::<Result<Vec<_>, _>>()?;

    if let Some(brightness) = args.brightness {
        control_center.set_brightness(brightness);
    }
    if let Some(volume) = args.volume {
        control_center.set_volume(volume);
    }
    for toggle in toggles {
        control_center.toggle(toggle);
    }
    Ok(())
}

/// Renders settings as YAML
pub fn settings_yaml(settings: &ControlCenterSettings) -> CliResult<String> {
    serde_yaml_ng::to_string(settings)
        .map_err(|e| CliError::from(DeskError::config(e.to_string())))
}

/// Execute the control-center command
pub fn execute_control_center<W: Write>(
    config: &CliConfig,
    args: &ControlCenterArgs,
    mut out: W,
) -> CliResult<()> {
    let desktop_config = config.load_desktop_config()?;
    let mut control_center = ControlCenter::with_settings(desktop_config.control_center);
    apply_changes(&mut control_center, args)?;
    write!(out, "{}", settings_yaml(control_center.settings())?)?;
    Ok(())
}
