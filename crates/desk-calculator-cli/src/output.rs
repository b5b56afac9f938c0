//! Terminal presentation of calculator frames

use console::Style;
use desk_calculator::render::{Frame, OwnedFrame, RenderSink};
use serde::Serialize;
use std::io::{self, Write};

/// Writes frames to a terminal: the readout in bold, the trace dimmed below it
///
/// [`RenderSink`] cannot fail, so the first write error is held until
/// [`TerminalRenderer::finish`].
#[derive(Debug)]
pub struct TerminalRenderer<W> {
    out: W,
    display_style: Style,
    trace_style: Style,
    error: Option<io::Error>,
}

impl<W: Write> TerminalRenderer<W> {
    /// Creates a renderer; `color` forces styling on or off
    pub fn new(out: W, color: bool) -> Self {
        Self {
            out,
            display_style: Style::new().bold().force_styling(color),
            trace_style: Style::new().dim().force_styling(color),
            error: None,
        }
    }

    /// One line per key press: key, readout and trace
    pub fn render_step(&mut self, key: &str, frame: Frame<'_>) {
        let display = self.display_style.apply_to(frame.display);
        let result = if frame.trace.is_empty() {
            writeln!(self.out, "{key:>3} | {display}")
        } else {
            let trace = self.trace_style.apply_to(frame.trace);
            writeln!(self.out, "{key:>3} | {display} | {trace}")
        };
        self.record(result);
    }

    /// Writes a prompt without a newline and flushes it
    pub fn prompt(&mut self, text: &str) {
        let result = write!(self.out, "{text}").and_then(|()| self.out.flush());
        self.record(result);
    }

    /// Flushes and reports the first write error, if any
    pub fn finish(mut self) -> io::Result<W> {
        if let Some(err) = self.error.take() {
            return Err(err);
        }
        self.out.flush()?;
        Ok(self.out)
    }

    fn record(&mut self, result: io::Result<()>) {
        if let Err(err) = result {
            self.error.get_or_insert(err);
        }
    }
}

impl<W: Write> RenderSink for TerminalRenderer<W> {
    fn render(&mut self, frame: Frame<'_>) {
        let display = self.display_style.apply_to(frame.display);
        let mut result = writeln!(self.out, "{display}");
        if result.is_ok() && !frame.trace.is_empty() {
            let trace = self.trace_style.apply_to(frame.trace);
            result = writeln!(self.out, "{trace}");
        }
        self.record(result);
    }
}

/// One key press in an `eval --json` report
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
pub struct EvalStep {
    /// Keypad label of the pressed key
    pub key: String,
    /// Frame after the press
    #[serde(flatten)]
    pub frame: OwnedFrame,
}

/// JSON output of `eval`
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
pub struct EvalReport {
    /// Final readout
    pub display: String,
    /// Final trace line
    pub trace: String,
    /// Every intermediate frame, when requested
    #[serde(skip_serializing_if = "Vec::is_empty")]
    pub steps: Vec<EvalStep>,
}
