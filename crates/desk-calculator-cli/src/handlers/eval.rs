//! Eval command handler

use crate::config::CliConfig;
use crate::error::{CliError, CliResult};
use crate::output::{EvalReport, EvalStep, TerminalRenderer};
use crate::EvalArgs;
use desk_calculator::core::Action;
use desk_calculator::driver::{CalculatorDriver, HeadlessDriver};
use desk_calculator::keypad::parse_key_sequence;
use desk_calculator::render::{OwnedFrame, RenderSink};
use std::io::Write;

/// Parses every sequence up front, so a bad key fails before any press
pub fn collect_actions(sequences: &[String]) -> CliResult<Vec<Action>> {
    let mut actions = Vec::new();
    for sequence in sequences {
        actions.extend(parse_key_sequence(sequence)?);
    }
    Ok(actions)
}

/// Execute the eval command
pub fn execute_eval<W: Write>(config: &CliConfig, args: &EvalArgs, out: W) -> CliResult<()> {
    let actions = collect_actions(&args.keys)?;
    if actions.is_empty() {
        return Err(CliError::invalid_argument("no keys to press"));
    }

    let mut driver = HeadlessDriver::new();
    for action in &actions {
        driver.press(*action);
    }
    tracing::info!(presses = actions.len(), display = %driver.display(), "evaluated");

    if args.json {
        write_json(&driver, &actions, args.steps, out)
    } else {
        write_text(config, &driver, &actions, args.steps, out)
    }
}

fn write_json<W: Write>(
    driver: &HeadlessDriver,
    actions: &[Action],
    steps: bool,
    mut out: W,
) -> CliResult<()> {
    let steps = if steps {
        actions
            .iter()
            .zip(driver.frames())
            .map(|(action, frame)| EvalStep {
                key: action.label(),
                frame: frame.clone(),
            })
            .collect()
    } else {
        Vec::new()
    };
    let report = EvalReport {
        display: driver.display(),
        trace: driver.trace(),
        steps,
    };
    serde_json::to_writer_pretty(&mut out, &report)?;
    writeln!(out)?;
    Ok(())
}

fn write_text<W: Write>(
    config: &CliConfig,
    driver: &HeadlessDriver,
    actions: &[Action],
    steps: bool,
    out: W,
) -> CliResult<()> {
    let mut renderer = TerminalRenderer::new(out, config.color.should_color());
    if steps {
        for (action, frame) in actions.iter().zip(driver.frames()) {
            renderer.render_step(&action.label(), frame.as_frame());
        }
    } else {
        let last = OwnedFrame {
            display: driver.display(),
            trace: driver.trace(),
        };
        renderer.render(last.as_frame());
    }
    renderer.finish()?;
    Ok(())
}
