//! Desk Calculator - immediate-execution calculator for a desktop shell
//!
//! The engine is a pure reducer over [`CalculatorState`](core::CalculatorState):
//! every keypad press is an [`Action`](core::Action) and produces the next
//! state. Presentation layers (the mock DOM, the browser bindings, the CLI)
//! only read frames off the state and forward input.
//!
//! # Example
//!
//! ```rust
//! use desk_calculator::prelude::*;
//!
//! let state = parse_key_sequence("9+3*")
//!     .unwrap()
//!     .into_iter()
//!     .fold(CalculatorState::new(), reduce);
//!
//! // No precedence: 9 + 3 is folded before the multiply
//! assert_eq!(state.display(), "12");
//! assert_eq!(state.expression_trace(), "12 ×");
//!
//! // Division by zero yields zero instead of an error
//! let mut driver = HeadlessDriver::new();
//! driver.press_keys("5/0=").unwrap();
//! assert_eq!(driver.display(), "0");
//! ```

#![cfg_attr(
    test,
    allow(
        clippy::unwrap_used,
        clippy::expect_used,
        clippy::panic,
        clippy::float_cmp
    )
)]
#![deny(missing_docs)]
#![deny(missing_debug_implementations)]

pub mod config;
pub mod core;
pub mod driver;
pub mod error;
pub mod keypad;
pub mod overlay;
pub mod render;
pub mod shell;

/// WASM module - always available for testing
/// (Mock DOM allows testing without actual browser bindings)
pub mod wasm;

/// Prelude for convenient imports
pub mod prelude {
    pub use crate::config::{ControlCenterSettings, DesktopConfig};
    pub use crate::core::{
        evaluate, evaluate_symbol, format_number, parse_numeral, reduce, Action, CalculatorState,
        Digit, Operator,
    };
    pub use crate::driver::{CalculatorDriver, HeadlessDriver};
    pub use crate::error::{DeskError, DeskResult};
    pub use crate::keypad::{parse_key_sequence, ButtonKind, Keypad, KeypadButtonDef};
    pub use crate::overlay::{CalculatorOverlay, KeyOutcome};
    pub use crate::render::{Frame, OwnedFrame, RenderSink};
    pub use crate::shell::{ControlCenter, Desktop, Finder, Panel, Toggle, ViewMode};

    #[cfg(feature = "wasm")]
    pub use crate::wasm::BrowserCalculator;

    pub use crate::wasm::{DomElement, DomEvent, MockDom, WasmDriver};
}

#[cfg(test)]
mod tests {
    use super::prelude::*;

    #[test]
    fn test_prelude_imports() {
        let state = reduce(CalculatorState::new(), Action::Digit(Digit::new(4).unwrap()));
        assert_eq!(state.display(), "4");
    }

    #[test]
    fn test_operator_symbols() {
        let symbols: Vec<&str> = Operator::ALL.iter().map(|op| op.symbol()).collect();
        assert_eq!(symbols, vec!["÷", "×", "−", "+"]);
    }

    #[test]
    fn test_evaluate_direct() {
        assert_eq!(evaluate(6.0, 7.0, Operator::Multiply), 42.0);
        assert_eq!(evaluate(1.0, 0.0, Operator::Divide), 0.0);
        assert_eq!(evaluate_symbol(2.0, 9.0, "?"), 9.0);
    }

    #[test]
    fn test_desktop_routes_escape() {
        let mut desktop = Desktop::new();
        desktop.open(Panel::Calculator);
        assert_eq!(desktop.handle_key("Escape"), KeyOutcome::Closed);
        assert!(!desktop.is_open(Panel::Calculator));
    }

    #[test]
    fn test_number_helpers() {
        assert_eq!(format_number(parse_numeral("2.50")), "2.5");
        assert_eq!(format_number(1e21), "1e+21");
    }
}
