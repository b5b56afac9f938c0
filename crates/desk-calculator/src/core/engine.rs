//! Calculator state machine
//!
//! One [`CalculatorState`] per open overlay. Every keypad press is an
//! [`Action`]; [`reduce`] folds an action into a state. Nothing here knows how
//! the state is drawn: presentation layers read [`CalculatorState::frame`]
//! after each action.

use super::number::{format_number, parse_numeral};
use super::{evaluate, Digit, Operator};
use crate::render::Frame;
use serde::{Deserialize, Serialize};
use std::fmt;

/// Everything a user can press on the calculator
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(tag = "type", content = "value", rename_all = "snake_case")]
pub enum Action {
    /// Enter a digit
    Digit(Digit),
    /// Enter the decimal point
    DecimalPoint,
    /// Press a binary operator
    Operator(Operator),
    /// Press `=`
    Equals,
    /// Press `C`
    Clear,
    /// Press `+/−`
    ToggleSign,
    /// Press `%`
    Percent,
}

impl Action {
    /// Keypad label for this action
    #[must_use]
    pub fn label(&self) -> String {
        match self {
            Self::Digit(d) => d.to_string(),
            Self::DecimalPoint => ".".to_string(),
            Self::Operator(op) => op.symbol().to_string(),
            Self::Equals => "=".to_string(),
            Self::Clear => "C".to_string(),
            Self::ToggleSign => "+/−".to_string(),
            Self::Percent => "%".to_string(),
        }
    }
}

impl fmt::Display for Action {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(&self.label())
    }
}

impl From<Digit> for Action {
    fn from(digit: Digit) -> Self {
        Self::Digit(digit)
    }
}

impl From<Operator> for Action {
    fn from(op: Operator) -> Self {
        Self::Operator(op)
    }
}

/// Calculator state: entry buffer, pending operation and the trace line
///
/// Invariants:
/// - `display` holds at most one decimal point
/// - `previous_operand` is `Some` exactly while an operation is pending
#[derive(Debug, Clone, PartialEq, Serialize)]
pub struct CalculatorState {
    display: String,
    previous_operand: Option<f64>,
    pending_operator: Option<Operator>,
    awaiting_new_operand: bool,
    expression_trace: String,
}

impl Default for CalculatorState {
    fn default() -> Self {
        Self::new()
    }
}

impl CalculatorState {
    /// Fresh state: display `0`, nothing pending, empty trace
    #[must_use]
    pub fn new() -> Self {
        Self {
            display: "0".to_string(),
            previous_operand: None,
            pending_operator: None,
            awaiting_new_operand: false,
            expression_trace: String::new(),
        }
    }

    /// The entry buffer or last result
    #[must_use]
    pub fn display(&self) -> &str {
        &self.display
    }

    /// Secondary trace line; empty when nothing has been traced
    #[must_use]
    pub fn expression_trace(&self) -> &str {
        &self.expression_trace
    }

    /// Left operand waiting for the next entry
    #[must_use]
    pub fn previous_operand(&self) -> Option<f64> {
        self.previous_operand
    }

    /// Operator waiting for the next entry
    #[must_use]
    pub fn pending_operator(&self) -> Option<Operator> {
        self.pending_operator
    }

    /// Whether the next digit starts a new number
    #[must_use]
    pub fn awaiting_new_operand(&self) -> bool {
        self.awaiting_new_operand
    }

    /// Numeric value of the display
    #[must_use]
    pub fn value(&self) -> f64 {
        parse_numeral(&self.display)
    }

    /// Borrowed view for a render sink
    #[must_use]
    pub fn frame(&self) -> Frame<'_> {
        Frame {
            display: &self.display,
            trace: &self.expression_trace,
        }
    }

    /// Applies one action in place
    pub fn apply(&mut self, action: Action) {
        match action {
            Action::Digit(d) => self.input_digit(d),
            Action::DecimalPoint => self.input_decimal_point(),
            Action::Operator(op) => self.apply_operator(op),
            Action::Equals => self.evaluate_result(),
            Action::Clear => self.clear(),
            Action::ToggleSign => self.toggle_sign(),
            Action::Percent => self.percent(),
        }
        tracing::debug!(
            %action,
            display = %self.display,
            trace = %self.expression_trace,
            "calculator action"
        );
    }

    /// Appends a digit, or starts a new entry after an operator or `=`
    pub fn input_digit(&mut self, digit: Digit) {
        if self.awaiting_new_operand {
            self.display = digit.as_char().to_string();
            self.awaiting_new_operand = false;
        } else if self.display == "0" {
            self.display = digit.as_char().to_string();
        } else {
            self.display.push(digit.as_char());
        }
    }

    /// Adds a decimal point unless the entry already has one
    pub fn input_decimal_point(&mut self) {
        if self.awaiting_new_operand {
            self.display = "0.".to_string();
            self.awaiting_new_operand = false;
        } else if !self.display.contains('.') {
            self.display.push('.');
        }
    }

    /// Resets everything
    pub fn clear(&mut self) {
        *self = Self::new();
    }

    /// Negates the entry; only touches the trace if one is showing
    pub fn toggle_sign(&mut self) {
        let value = self.value();
        let result = -value;
        self.display = format_number(result);
        if !self.expression_trace.is_empty() {
            self.expression_trace = format!(
                "-({}) = {}",
                format_number(value.abs()),
                format_number(result)
            );
        }
    }

    /// Divides the entry by 100
    pub fn percent(&mut self) {
        let value = self.value();
        let result = value / 100.0;
        self.display = format_number(result);
        self.expression_trace = format!("{}% = {}", format_number(value), format_number(result));
    }

    /// Presses a binary operator
    ///
    /// With a second operand entered, the pending operation runs first and
    /// its result becomes the new left operand. Pressing operators back to
    /// back only swaps the pending operator.
    pub fn apply_operator(&mut self, op: Operator) {
        let input = self.value();

        match (self.previous_operand, self.pending_operator) {
            (None, _) => {
                self.previous_operand = Some(input);
                self.expression_trace = format!("{} {}", format_number(input), op);
            }
            (Some(previous), Some(pending)) if !self.awaiting_new_operand => {
                let result = evaluate(previous, input, pending);
                self.display = format_number(result);
                self.previous_operand = Some(result);
                self.expression_trace = format!("{} {}", format_number(result), op);
            }
            (Some(previous), _) => {
                self.expression_trace = format!("{} {}", format_number(previous), op);
            }
        }

        self.pending_operator = Some(op);
        self.awaiting_new_operand = true;
    }

    /// Presses `=`; a no-op unless an operation is pending
    pub fn evaluate_result(&mut self) {
        let (Some(previous), Some(op)) = (self.previous_operand, self.pending_operator) else {
            return;
        };

        let input = self.value();
        let result = evaluate(previous, input, op);
        self.expression_trace = format!(
            "{} {} {} = {}",
            format_number(previous),
            op,
            format_number(input),
            format_number(result)
        );
        self.display = format_number(result);
        self.previous_operand = None;
        self.pending_operator = None;
        self.awaiting_new_operand = true;
    }
}

/// Folds one action into a state
#[must_use]
pub fn reduce(mut state: CalculatorState, action: Action) -> CalculatorState {
    state.apply(action);
    state
}

#[cfg(test)]
mod tests {
    use super::*;

    fn digit(d: u8) -> Action {
        Action::Digit(Digit::new(d).unwrap())
    }

    fn run(actions: &[Action]) -> CalculatorState {
        actions
            .iter()
            .copied()
            .fold(CalculatorState::new(), reduce)
    }

    // ===== Construction =====

    #[test]
    fn test_new_state_identity_values() {
        let state = CalculatorState::new();
        assert_eq!(state.display(), "0");
        assert_eq!(state.previous_operand(), None);
        assert_eq!(state.pending_operator(), None);
        assert!(!state.awaiting_new_operand());
        assert_eq!(state.expression_trace(), "");
    }

    #[test]
    fn test_default_matches_new() {
        assert_eq!(CalculatorState::default(), CalculatorState::new());
    }

    // ===== Digit entry =====

    #[test]
    fn test_digits_concatenate() {
        let state = run(&[digit(1), digit(2), digit(3)]);
        assert_eq!(state.display(), "123");
    }

    #[test]
    fn test_leading_zero_replaced() {
        let state = run(&[digit(0), digit(0), digit(7)]);
        assert_eq!(state.display(), "7");
    }

    #[test]
    fn test_zero_after_point_kept() {
        let state = run(&[digit(0), Action::DecimalPoint, digit(0), digit(5)]);
        assert_eq!(state.display(), "0.05");
    }

    #[test]
    fn test_digit_after_operator_starts_new_entry() {
        let state = run(&[digit(4), Action::Operator(Operator::Add), digit(2)]);
        assert_eq!(state.display(), "2");
        assert!(!state.awaiting_new_operand());
    }

    // ===== Decimal point =====

    #[test]
    fn test_decimal_point_once() {
        let state = run(&[digit(1), Action::DecimalPoint, Action::DecimalPoint, digit(5)]);
        assert_eq!(state.display(), "1.5");
    }

    #[test]
    fn test_decimal_point_after_operator() {
        let state = run(&[digit(9), Action::Operator(Operator::Multiply), Action::DecimalPoint]);
        assert_eq!(state.display(), "0.");
        assert!(!state.awaiting_new_operand());
    }

    #[test]
    fn test_decimal_point_on_fresh_state() {
        let state = run(&[Action::DecimalPoint, digit(5)]);
        assert_eq!(state.display(), "0.5");
    }

    // ===== Clear =====

    #[test]
    fn test_clear_resets() {
        let state = run(&[digit(8), Action::Operator(Operator::Subtract), digit(3), Action::Clear]);
        assert_eq!(state, CalculatorState::new());
    }

    #[test]
    fn test_clear_idempotent() {
        let once = run(&[digit(5), Action::Clear]);
        let twice = run(&[digit(5), Action::Clear, Action::Clear]);
        assert_eq!(once, twice);
    }

    // ===== Sign toggle =====

    #[test]
    fn test_toggle_sign_without_trace() {
        let state = run(&[digit(5), Action::ToggleSign]);
        assert_eq!(state.display(), "-5");
        assert_eq!(state.expression_trace(), "");
    }

    #[test]
    fn test_toggle_sign_with_trace() {
        let state = run(&[
            digit(2),
            Action::Operator(Operator::Add),
            digit(3),
            Action::Equals,
            Action::ToggleSign,
        ]);
        assert_eq!(state.display(), "-5");
        assert_eq!(state.expression_trace(), "-(5) = -5");
    }

    #[test]
    fn test_toggle_sign_of_zero() {
        let state = run(&[Action::ToggleSign]);
        assert_eq!(state.display(), "0");
    }

    #[test]
    fn test_toggle_sign_twice() {
        let state = run(&[digit(7), Action::ToggleSign, Action::ToggleSign]);
        assert_eq!(state.display(), "7");
    }

    // ===== Percent =====

    #[test]
    fn test_percent() {
        let state = run(&[digit(4), Action::Percent]);
        assert_eq!(state.display(), "0.04");
        assert_eq!(state.expression_trace(), "4% = 0.04");
    }

    #[test]
    fn test_percent_then_digit_appends() {
        let state = run(&[digit(4), Action::Percent, digit(5)]);
        assert_eq!(state.display(), "0.045");
    }

    // ===== Operators =====

    #[test]
    fn test_first_operator_stores_operand() {
        let state = run(&[digit(3), Action::Operator(Operator::Add)]);
        assert_eq!(state.previous_operand(), Some(3.0));
        assert_eq!(state.pending_operator(), Some(Operator::Add));
        assert_eq!(state.expression_trace(), "3 +");
        assert!(state.awaiting_new_operand());
    }

    #[test]
    fn test_trailing_point_traced_as_number() {
        let state = run(&[digit(3), Action::DecimalPoint, Action::Operator(Operator::Add)]);
        assert_eq!(state.expression_trace(), "3 +");
    }

    #[test]
    fn test_chained_operator_evaluates() {
        let state = run(&[
            digit(6),
            Action::Operator(Operator::Multiply),
            digit(7),
            Action::Operator(Operator::Subtract),
        ]);
        assert_eq!(state.display(), "42");
        assert_eq!(state.previous_operand(), Some(42.0));
        assert_eq!(state.pending_operator(), Some(Operator::Subtract));
        assert_eq!(state.expression_trace(), "42 −");
    }

    #[test]
    fn test_operator_swap() {
        let state = run(&[
            digit(9),
            Action::Operator(Operator::Add),
            Action::Operator(Operator::Multiply),
        ]);
        assert_eq!(state.pending_operator(), Some(Operator::Multiply));
        assert_eq!(state.previous_operand(), Some(9.0));
        assert_eq!(state.display(), "9");
        assert_eq!(state.expression_trace(), "9 ×");
    }

    #[test]
    fn test_no_precedence() {
        // 2 + 3 × 4 runs left to right: (2 + 3) × 4
        let state = run(&[
            digit(2),
            Action::Operator(Operator::Add),
            digit(3),
            Action::Operator(Operator::Multiply),
            digit(4),
            Action::Equals,
        ]);
        assert_eq!(state.display(), "20");
    }

    // ===== Equals =====

    #[test]
    fn test_equals_scenario() {
        let state = run(&[digit(7), Action::Operator(Operator::Add), digit(3), Action::Equals]);
        assert_eq!(state.display(), "10");
        assert_eq!(state.expression_trace(), "7 + 3 = 10");
        assert_eq!(state.previous_operand(), None);
        assert_eq!(state.pending_operator(), None);
        assert!(state.awaiting_new_operand());
    }

    #[test]
    fn test_equals_divide_by_zero() {
        let state = run(&[digit(5), Action::Operator(Operator::Divide), digit(0), Action::Equals]);
        assert_eq!(state.display(), "0");
        assert_eq!(state.expression_trace(), "5 ÷ 0 = 0");
    }

    #[test]
    fn test_equals_without_pending_is_noop() {
        let before = run(&[digit(5)]);
        let after = reduce(before.clone(), Action::Equals);
        assert_eq!(before, after);
    }

    #[test]
    fn test_equals_twice_is_noop() {
        let once = run(&[digit(2), Action::Operator(Operator::Add), digit(2), Action::Equals]);
        let twice = reduce(once.clone(), Action::Equals);
        assert_eq!(once, twice);
    }

    #[test]
    fn test_equals_right_after_operator_uses_display() {
        // 5 + = uses the display (still 5) as right operand
        let state = run(&[digit(5), Action::Operator(Operator::Add), Action::Equals]);
        assert_eq!(state.display(), "10");
        assert_eq!(state.expression_trace(), "5 + 5 = 10");
    }

    #[test]
    fn test_digit_after_equals_starts_fresh() {
        let state = run(&[
            digit(1),
            Action::Operator(Operator::Add),
            digit(1),
            Action::Equals,
            digit(9),
        ]);
        assert_eq!(state.display(), "9");
        assert_eq!(state.previous_operand(), None);
    }

    #[test]
    fn test_result_feeds_next_operation() {
        let state = run(&[
            digit(1),
            Action::Operator(Operator::Add),
            digit(2),
            Action::Equals,
            Action::Operator(Operator::Multiply),
            digit(5),
            Action::Equals,
        ]);
        assert_eq!(state.display(), "15");
        assert_eq!(state.expression_trace(), "3 × 5 = 15");
    }

    #[test]
    fn test_float_semantics() {
        let state = run(&[
            digit(0),
            Action::DecimalPoint,
            digit(1),
            Action::Operator(Operator::Add),
            digit(0),
            Action::DecimalPoint,
            digit(2),
            Action::Equals,
        ]);
        assert_eq!(state.display(), "0.30000000000000004");
    }

    // ===== Frame / Action =====

    #[test]
    fn test_frame_borrows_state() {
        let state = run(&[digit(4), Action::Percent]);
        let frame = state.frame();
        assert_eq!(frame.display, "0.04");
        assert_eq!(frame.trace, "4% = 0.04");
    }

    #[test]
    fn test_action_labels() {
        assert_eq!(digit(3).label(), "3");
        assert_eq!(Action::DecimalPoint.label(), ".");
        assert_eq!(Action::Operator(Operator::Divide).label(), "÷");
        assert_eq!(Action::ToggleSign.label(), "+/−");
        assert_eq!(Action::Clear.to_string(), "C");
    }

    #[test]
    fn test_action_serde() {
        let json = serde_json::to_string(&Action::Operator(Operator::Add)).unwrap();
        assert_eq!(json, r#"{"type":"operator","value":"add"}"#);
        let back: Action = serde_json::from_str(r#"{"type":"digit","value":7}"#).unwrap();
        assert_eq!(back, digit(7));
        let unit: Action = serde_json::from_str(r#"{"type":"equals"}"#).unwrap();
        assert_eq!(unit, Action::Equals);
    }
}
