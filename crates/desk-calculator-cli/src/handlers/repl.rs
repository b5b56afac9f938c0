//! Repl command handler
//!
//! Each input line is a key sequence pressed on the calculator overlay. The
//! frame is rendered after every line. `q`, `quit`, `Escape` or end of input
//! close the overlay and end the session.

use crate::config::CliConfig;
use crate::error::CliResult;
use crate::output::TerminalRenderer;
use desk_calculator::keypad::parse_key_sequence;
use desk_calculator::overlay::KeyOutcome;
use desk_calculator::shell::{Desktop, Panel};
use std::io::{BufRead, Write};

const PROMPT: &str = "> ";

/// Whether a line ends the session
#[must_use]
pub fn is_exit_command(line: &str) -> bool {
    matches!(line, "q" | "quit" | "Escape")
}

/// Execute the repl command
///
/// Bad key sequences are reported on `err` and the session continues.
pub fn execute_repl<R, W, E>(
    config: &CliConfig,
    input: R,
    out: W,
    mut err: E,
    prompt: bool,
) -> CliResult<()>
where
    R: BufRead,
    W: Write,
    E: Write,
{
    let desktop_config = config.load_desktop_config()?;
    let mut desktop = Desktop::from_config(&desktop_config);
    desktop.open(Panel::Calculator);

    let mut renderer = TerminalRenderer::new(out, config.color.should_color());
    desktop.calculator().render_to(&mut renderer);

    let mut lines = input.lines();
    loop {
        if prompt {
            renderer.prompt(PROMPT);
        }
        let Some(line) = lines.next() else {
            break;
        };
        let line = line?;
        let line = line.trim();
        if line.is_empty() {
            continue;
        }
        if is_exit_command(line) {
            break;
        }

        match parse_key_sequence(line) {
            Ok(actions) => {
                for action in actions {
                    desktop.calculator_mut().press(action);
                }
                desktop.calculator().render_to(&mut renderer);
            }
            Err(e) => writeln!(err, "error: {e}")?,
        }
    }

    if desktop.handle_key("Escape") == KeyOutcome::Closed {
        tracing::debug!("repl session ended");
    }
    renderer.finish()?;
    Ok(())
}

#[cfg(test)]
#[allow(clippy::unwrap_used, clippy::expect_used)]
mod tests {
    use super::*;
    use crate::config::ColorChoice;

    fn session(input: &str) -> (String, String) {
        let config = CliConfig::new().with_color(ColorChoice::Never);
        let mut out = Vec::new();
        let mut err = Vec::new();
        execute_repl(&config, input.as_bytes(), &mut out, &mut err, false).unwrap();
        (
            String::from_utf8(out).unwrap(),
            String::from_utf8(err).unwrap(),
        )
    }

    #[test]
    fn test_exit_commands() {
        assert!(is_exit_command("q"));
        assert!(is_exit_command("quit"));
        assert!(is_exit_command("Escape"));
        assert!(!is_exit_command("7"));
    }

    #[test]
    fn test_session_renders_each_line() {
        let (out, err) = session("7+\n3=\n");
        assert_eq!(out, "0\n7\n7 +\n10\n7 + 3 = 10\n");
        assert!(err.is_empty());
    }

    #[test]
    fn test_session_state_carries_across_lines() {
        let (out, _) = session("9\n*\n9\n=\n");
        assert!(out.ends_with("81\n9 × 9 = 81\n"));
    }

    #[test]
    fn test_quit_stops_reading() {
        let (out, _) = session("5\nq\n6\n");
        assert_eq!(out, "0\n5\n");
    }

    #[test]
    fn test_blank_lines_skipped() {
        let (out, _) = session("\n   \n1\n");
        assert_eq!(out, "0\n1\n");
    }

    #[test]
    fn test_bad_line_reported_and_session_continues() {
        let (out, err) = session("2?\n2\n");
        assert!(err.contains("Unknown key \"?\" at position 1"));
        assert_eq!(out, "0\n2\n");
    }

    #[test]
    fn test_prompt_written() {
        let config = CliConfig::new().with_color(ColorChoice::Never);
        let mut out = Vec::new();
        execute_repl(&config, "1\n".as_bytes(), &mut out, std::io::sink(), true).unwrap();
        assert_eq!(String::from_utf8(out).unwrap(), "0\n> 1\n> ");
    }
}
