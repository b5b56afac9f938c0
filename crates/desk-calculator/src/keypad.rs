//! Calculator keypad: button grid and keyboard bindings
//!
//! Layout (macOS style):
//! ```text
//! [ C ] [+/−] [ % ] [ ÷ ]
//! [ 7 ] [ 8 ] [ 9 ] [ × ]
//! [ 4 ] [ 5 ] [ 6 ] [ − ]
//! [ 1 ] [ 2 ] [ 3 ] [ + ]
//! [    0    ] [ . ] [ = ]
//! ```

use crate::core::{Action, Digit, Operator};
use crate::error::{DeskError, DeskResult};

/// Visual role of a button; presentation layers pick styling from it
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum ButtonKind {
    /// Clear, sign toggle, percent
    Function,
    /// Digits and the decimal point
    Number,
    /// Binary operators and equals
    Operator,
}

impl ButtonKind {
    /// CSS class used by the browser layer
    #[must_use]
    pub const fn css_class(self) -> &'static str {
        match self {
            Self::Function => "calc-function",
            Self::Number => "calc-number",
            Self::Operator => "calc-operator",
        }
    }
}

/// A single keypad button definition
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct KeypadButtonDef {
    /// The action this button performs
    pub action: Action,
    /// The DOM element ID for this button
    pub id: String,
    /// Grid row (0-indexed)
    pub row: usize,
    /// Grid column (0-indexed)
    pub col: usize,
    /// Number of columns the button covers
    pub span: usize,
    /// Visual role
    pub kind: ButtonKind,
}

impl KeypadButtonDef {
    /// Creates a single-column button definition
    #[must_use]
    pub fn new(action: Action, row: usize, col: usize) -> Self {
        Self {
            action,
            id: button_id(action),
            row,
            col,
            span: 1,
            kind: button_kind(action),
        }
    }

    /// Widens the button to cover `span` columns
    #[must_use]
    pub fn with_span(mut self, span: usize) -> Self {
        self.span = span;
        self
    }

    /// Label printed on the button
    #[must_use]
    pub fn label(&self) -> String {
        self.action.label()
    }

    /// Whether the button covers grid cell `(row, col)`
    #[must_use]
    pub fn covers(&self, row: usize, col: usize) -> bool {
        self.row == row && (self.col..self.col + self.span).contains(&col)
    }
}

/// Element ID for the button bound to `action`
#[must_use]
pub fn button_id(action: Action) -> String {
    match action {
        Action::Digit(d) => format!("btn-{d}"),
        Action::DecimalPoint => "btn-decimal".to_string(),
        Action::Operator(op) => format!("btn-{}", op.name()),
        Action::Equals => "btn-equals".to_string(),
        Action::Clear => "btn-clear".to_string(),
        Action::ToggleSign => "btn-sign".to_string(),
        Action::Percent => "btn-percent".to_string(),
    }
}

fn button_kind(action: Action) -> ButtonKind {
    match action {
        Action::Digit(_) | Action::DecimalPoint => ButtonKind::Number,
        Action::Operator(_) | Action::Equals => ButtonKind::Operator,
        Action::Clear | Action::ToggleSign | Action::Percent => ButtonKind::Function,
    }
}

/// Keypad layout definition
#[derive(Debug, Clone)]
pub struct Keypad {
    buttons: Vec<KeypadButtonDef>,
    cols: usize,
    rows: usize,
}

impl Default for Keypad {
    fn default() -> Self {
        Self::new()
    }
}

impl Keypad {
    /// Creates the standard desk calculator keypad
    #[must_use]
    pub fn new() -> Self {
        let digits: Vec<Digit> = Digit::all().collect();
        let digit = |d: usize| Action::Digit(digits[d]);
        let buttons = vec![
            // Row 0: C +/− % ÷
            KeypadButtonDef::new(Action::Clear, 0, 0),
            KeypadButtonDef::new(Action::ToggleSign, 0, 1),
            KeypadButtonDef::new(Action::Percent, 0, 2),
            KeypadButtonDef::new(Action::Operator(Operator::Divide), 0, 3),
            // Row 1: 7 8 9 ×
            KeypadButtonDef::new(digit(7), 1, 0),
            KeypadButtonDef::new(digit(8), 1, 1),
            KeypadButtonDef::new(digit(9), 1, 2),
            KeypadButtonDef::new(Action::Operator(Operator::Multiply), 1, 3),
            // Row 2: 4 5 6 −
            KeypadButtonDef::new(digit(4), 2, 0),
            KeypadButtonDef::new(digit(5), 2, 1),
            KeypadButtonDef::new(digit(6), 2, 2),
            KeypadButtonDef::new(Action::Operator(Operator::Subtract), 2, 3),
            // Row 3: 1 2 3 +
            KeypadButtonDef::new(digit(1), 3, 0),
            KeypadButtonDef::new(digit(2), 3, 1),
            KeypadButtonDef::new(digit(3), 3, 2),
            KeypadButtonDef::new(Action::Operator(Operator::Add), 3, 3),
            // Row 4: 0 (wide) . =
            KeypadButtonDef::new(digit(0), 4, 0).with_span(2),
            KeypadButtonDef::new(Action::DecimalPoint, 4, 2),
            KeypadButtonDef::new(Action::Equals, 4, 3),
        ];

        Self {
            buttons,
            cols: 4,
            rows: 5,
        }
    }

    /// Returns the number of buttons
    #[must_use]
    pub fn button_count(&self) -> usize {
        self.buttons.len()
    }

    /// Returns the grid dimensions (rows, cols)
    #[must_use]
    pub fn dimensions(&self) -> (usize, usize) {
        (self.rows, self.cols)
    }

    /// Gets all button definitions
    #[must_use]
    pub fn buttons(&self) -> &[KeypadButtonDef] {
        &self.buttons
    }

    /// Gets the button covering a grid cell
    #[must_use]
    pub fn get_button_at(&self, row: usize, col: usize) -> Option<&KeypadButtonDef> {
        if row >= self.rows || col >= self.cols {
            return None;
        }
        self.buttons.iter().find(|b| b.covers(row, col))
    }

    /// Finds a button by element ID
    #[must_use]
    pub fn find_button_by_id(&self, id: &str) -> Option<&KeypadButtonDef> {
        self.buttons.iter().find(|b| b.id == id)
    }

    /// Finds the button bound to an action
    #[must_use]
    pub fn find_button_by_action(&self, action: Action) -> Option<&KeypadButtonDef> {
        self.buttons.iter().find(|b| b.action == action)
    }

    /// Processes a button click and returns the action
    #[must_use]
    pub fn handle_click(&self, element_id: &str) -> Option<Action> {
        self.find_button_by_id(element_id).map(|btn| btn.action)
    }

    /// Maps a keyboard key name to a keypad action
    ///
    /// `Escape` is left unbound; the overlay treats it as close.
    #[must_use]
    pub fn key_to_action(key: &str) -> Option<Action> {
        let mut chars = key.chars();
        if let (Some(ch), None) = (chars.next(), chars.next()) {
            if let Ok(d) = Digit::try_from(ch) {
                return Some(Action::Digit(d));
            }
        }

        if let Some(op) = Operator::from_symbol(key) {
            return Some(Action::Operator(op));
        }

        match key {
            "." | "," => Some(Action::DecimalPoint),
            "=" | "Enter" => Some(Action::Equals),
            "c" | "C" | "Delete" | "Clear" => Some(Action::Clear),
            "%" => Some(Action::Percent),
            "±" | "~" | "n" => Some(Action::ToggleSign),
            _ => None,
        }
    }
}

/// Turns a typed key sequence such as `"7+3="` into actions
///
/// Whitespace is skipped. Any other unbound character is an error carrying
/// its position.
pub fn parse_key_sequence(keys: &str) -> DeskResult<Vec<Action>> {
    let mut buf = [0u8; 4];
    keys.chars()
        .enumerate()
        .filter(|(_, ch)| !ch.is_whitespace())
        .map(|(position, ch)| {
            let key: &str = ch.encode_utf8(&mut buf);
            Keypad::key_to_action(key).ok_or_else(|| DeskError::UnknownKey {
                key: key.to_string(),
                position,
            })
        })
        .collect()
}
