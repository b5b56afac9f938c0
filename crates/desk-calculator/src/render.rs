//! Rendering contract between the engine and a presentation layer
//!
//! A presentation layer implements [`RenderSink`] and is handed a [`Frame`]
//! after every state change. The engine never calls back into it.

use serde::{Deserialize, Serialize};

/// What the calculator shows: the primary readout and the trace line above it
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct Frame<'a> {
    /// Primary numeral
    pub display: &'a str,
    /// Secondary trace text, empty when hidden
    pub trace: &'a str,
}

impl Frame<'_> {
    /// Copies the frame out of the state it borrows
    #[must_use]
    pub fn to_owned_frame(&self) -> OwnedFrame {
        OwnedFrame {
            display: self.display.to_string(),
            trace: self.trace.to_string(),
        }
    }
}

/// Owned copy of a [`Frame`], for recording and serialisation
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
pub struct OwnedFrame {
    /// Primary numeral
    pub display: String,
    /// Secondary trace text
    pub trace: String,
}

impl OwnedFrame {
    /// Borrows this frame
    #[must_use]
    pub fn as_frame(&self) -> Frame<'_> {
        Frame {
            display: &self.display,
            trace: &self.trace,
        }
    }
}

/// Consumer of calculator frames
pub trait RenderSink {
    /// Called after every state change
    fn render(&mut self, frame: Frame<'_>);
}

/// Records every frame; handy in tests and for step-by-step output
impl RenderSink for Vec<OwnedFrame> {
    fn render(&mut self, frame: Frame<'_>) {
        self.push(frame.to_owned_frame());
    }
}

impl<S: RenderSink + ?Sized> RenderSink for &mut S {
    fn render(&mut self, frame: Frame<'_>) {
        (**self).render(frame);
    }
}
