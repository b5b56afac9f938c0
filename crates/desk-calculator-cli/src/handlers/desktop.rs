//! Desktop command handler

use crate::config::CliConfig;
use crate::error::CliResult;
use crate::DesktopArgs;
use desk_calculator::overlay::KeyOutcome;
use desk_calculator::shell::{Desktop, Panel};
use std::io::Write;

/// Opens the requested panels, then routes each key through the desktop
///
/// Panel names are checked before the desktop is touched.
pub fn drive_desktop(desktop: &mut Desktop, args: &DesktopArgs) -> CliResult<()> {
    let panels = args
        .open
        .iter()
        .map(|name| name.parse::<Panel>())
        .collect::<Result<Vec<_>, _>>()?;

    for panel in panels {
        desktop.open(panel);
    }
    for key in &args.keys {
        if let KeyOutcome::Ignored = desktop.handle_key(key) {
            tracing::debug!(%key, "key ignored");
        }
    }
    Ok(())
}

/// Writes which panels are open and what the open ones show
pub fn write_desktop<W: Write>(desktop: &Desktop, out: &mut W) -> CliResult<()> {
    for panel in Panel::ALL {
        let state = if desktop.is_open(panel) {
            "open"
        } else {
            "closed"
        };
        writeln!(out, "{panel}: {state}")?;
    }
    if let Some(frame) = desktop.calculator().frame() {
        writeln!(out, "display: {}", frame.display)?;
        if !frame.trace.is_empty() {
            writeln!(out, "trace: {}", frame.trace)?;
        }
    }
    if desktop.is_open(Panel::Finder) {
        let finder = desktop.finder();
        writeln!(out, "view: {}", finder.view_mode())?;
        writeln!(out, "path: {}", finder.current_path())?;
    }
    Ok(())
}

/// Execute the desktop command
pub fn execute_desktop<W: Write>(
    config: &CliConfig,
    args: &DesktopArgs,
    mut out: W,
) -> CliResult<()> {
    let desktop_config = config.load_desktop_config()?;
    let mut desktop = Desktop::from_config(&desktop_config);
    drive_desktop(&mut desktop, args)?;
    write_desktop(&desktop, &mut out)?;
    out.flush()?;
    Ok(())
}
