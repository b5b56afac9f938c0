//! Unified calculator driver
//!
//! Scenarios are written once against [`CalculatorDriver`] and run against
//! every presentation path: the bare engine ([`HeadlessDriver`]) and the
//! mock-DOM overlay ([`WasmDriver`](crate::wasm::WasmDriver)).
//!
//! ```rust
//! use desk_calculator::prelude::*;
//!
//! fn add_three_and_seven<D: CalculatorDriver>(driver: &mut D) {
//!     driver.press_keys("7+3=").unwrap();
//!     assert_eq!(driver.display(), "10");
//!     assert_eq!(driver.trace(), "7 + 3 = 10");
//! }
//!
//! add_three_and_seven(&mut HeadlessDriver::new());
//! add_three_and_seven(&mut WasmDriver::new());
//! ```

use crate::core::{Action, CalculatorState};
use crate::error::DeskResult;
use crate::keypad::parse_key_sequence;
use crate::render::{OwnedFrame, RenderSink};

/// Abstract driver for calculator interactions
pub trait CalculatorDriver {
    /// Presses one keypad action
    fn press(&mut self, action: Action);

    /// Text of the primary readout
    fn display(&self) -> String;

    /// Text of the trace line; empty when hidden
    fn trace(&self) -> String;

    /// Presses every key of a typed sequence such as `"7+3="`
    fn press_keys(&mut self, keys: &str) -> DeskResult<()> {
        for action in parse_key_sequence(keys)? {
            self.press(action);
        }
        Ok(())
    }
}

/// Drives the engine directly and records every frame
#[derive(Debug, Clone, Default)]
pub struct HeadlessDriver {
    state: CalculatorState,
    frames: Vec<OwnedFrame>,
}

impl HeadlessDriver {
    /// Creates a driver over a fresh state
    #[must_use]
    pub fn new() -> Self {
        Self::default()
    }

    /// The engine state
    #[must_use]
    pub fn state(&self) -> &CalculatorState {
        &self.state
    }

    /// Every frame rendered so far, one per press
    #[must_use]
    pub fn frames(&self) -> &[OwnedFrame] {
        &self.frames
    }
}

impl CalculatorDriver for HeadlessDriver {
    fn press(&mut self, action: Action) {
        self.state.apply(action);
        self.frames.render(self.state.frame());
    }

    fn display(&self) -> String {
        self.state.display().to_string()
    }

    fn trace(&self) -> String {
        self.state.expression_trace().to_string()
    }
}
