//! Calculator overlay lifecycle
//!
//! The overlay owns a [`CalculatorState`] only while it is open. Opening
//! starts from a fresh state; closing drops it.

use crate::core::{Action, CalculatorState};
use crate::keypad::Keypad;
use crate::render::{Frame, RenderSink};

/// What a key press did
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum KeyOutcome {
    /// The key mapped to an action and was applied
    Applied(Action),
    /// `Escape` closed the overlay
    Closed,
    /// Overlay closed or key unbound; nothing changed
    Ignored,
}

/// Calculator window on the desktop
#[derive(Debug, Clone, Default)]
pub struct CalculatorOverlay {
    state: Option<CalculatorState>,
    keypad: Keypad,
}

impl CalculatorOverlay {
    /// Creates a closed overlay
    #[must_use]
    pub fn new() -> Self {
        Self::default()
    }

    /// Whether the overlay is showing
    #[must_use]
    pub fn is_open(&self) -> bool {
        self.state.is_some()
    }

    /// Opens the overlay; an already-open overlay keeps its state
    pub fn open(&mut self) {
        if self.state.is_none() {
            tracing::info!("calculator opened");
            self.state = Some(CalculatorState::new());
        }
    }

    /// Closes the overlay and discards its state
    pub fn close(&mut self) {
        if self.state.take().is_some() {
            tracing::info!("calculator closed");
        }
    }

    /// Current state while open
    #[must_use]
    pub fn state(&self) -> Option<&CalculatorState> {
        self.state.as_ref()
    }

    /// Current frame while open
    #[must_use]
    pub fn frame(&self) -> Option<Frame<'_>> {
        self.state.as_ref().map(CalculatorState::frame)
    }

    /// The keypad layout the overlay responds to
    #[must_use]
    pub fn keypad(&self) -> &Keypad {
        &self.keypad
    }

    /// Applies an action; returns false when the overlay is closed
    pub fn press(&mut self, action: Action) -> bool {
        match self.state.as_mut() {
            Some(state) => {
                state.apply(action);
                true
            }
            None => false,
        }
    }

    /// Handles a click on a keypad button by element ID
    pub fn click(&mut self, button_id: &str) -> Option<Action> {
        if !self.is_open() {
            return None;
        }
        let action = self.keypad.handle_click(button_id)?;
        self.press(action);
        Some(action)
    }

    /// Handles a keyboard key by name
    pub fn handle_key(&mut self, key: &str) -> KeyOutcome {
        if !self.is_open() {
            return KeyOutcome::Ignored;
        }
        if key == "Escape" {
            self.close();
            return KeyOutcome::Closed;
        }
        match Keypad::key_to_action(key) {
            Some(action) => {
                self.press(action);
                KeyOutcome::Applied(action)
            }
            None => {
                tracing::trace!(key, "unbound key");
                KeyOutcome::Ignored
            }
        }
    }

    /// Pushes the current frame to a sink; nothing when closed
    pub fn render_to<S: RenderSink + ?Sized>(&self, sink: &mut S) {
        if let Some(frame) = self.frame() {
            sink.render(frame);
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::core::{Digit, Operator};
    use crate::render::OwnedFrame;

    #[test]
    fn test_starts_closed() {
        let overlay = CalculatorOverlay::new();
        assert!(!overlay.is_open());
        assert!(overlay.state().is_none());
        assert!(overlay.frame().is_none());
    }

    #[test]
    fn test_open_creates_fresh_state() {
        let mut overlay = CalculatorOverlay::new();
        overlay.open();
        assert_eq!(overlay.state(), Some(&CalculatorState::new()));
    }

    #[test]
    fn test_reopen_keeps_state() {
        let mut overlay = CalculatorOverlay::new();
        overlay.open();
        overlay.handle_key("8");
        overlay.open();
        assert_eq!(overlay.frame().unwrap().display, "8");
    }

    #[test]
    fn test_close_discards_state() {
        let mut overlay = CalculatorOverlay::new();
        overlay.open();
        overlay.handle_key("8");
        overlay.close();
        overlay.open();
        assert_eq!(overlay.frame().unwrap().display, "0");
    }

    #[test]
    fn test_press_while_closed() {
        let mut overlay = CalculatorOverlay::new();
        assert!(!overlay.press(Action::Clear));
    }

    #[test]
    fn test_click_buttons() {
        let mut overlay = CalculatorOverlay::new();
        overlay.open();
        overlay.click("btn-7");
        overlay.click("btn-plus");
        overlay.click("btn-3");
        assert_eq!(overlay.click("btn-equals"), Some(Action::Equals));
        let frame = overlay.frame().unwrap();
        assert_eq!(frame.display, "10");
        assert_eq!(frame.trace, "7 + 3 = 10");
    }

    #[test]
    fn test_click_unknown_button() {
        let mut overlay = CalculatorOverlay::new();
        overlay.open();
        assert_eq!(overlay.click("btn-sqrt"), None);
    }

    #[test]
    fn test_click_while_closed() {
        let mut overlay = CalculatorOverlay::new();
        assert_eq!(overlay.click("btn-7"), None);
    }

    #[test]
    fn test_handle_key_applies() {
        let mut overlay = CalculatorOverlay::new();
        overlay.open();
        assert_eq!(
            overlay.handle_key("5"),
            KeyOutcome::Applied(Action::Digit(Digit::new(5).unwrap()))
        );
        assert_eq!(
            overlay.handle_key("/"),
            KeyOutcome::Applied(Action::Operator(Operator::Divide))
        );
    }

    #[test]
    fn test_escape_closes() {
        let mut overlay = CalculatorOverlay::new();
        overlay.open();
        assert_eq!(overlay.handle_key("Escape"), KeyOutcome::Closed);
        assert!(!overlay.is_open());
    }

    #[test]
    fn test_keys_ignored_while_closed() {
        let mut overlay = CalculatorOverlay::new();
        assert_eq!(overlay.handle_key("5"), KeyOutcome::Ignored);
        assert_eq!(overlay.handle_key("Escape"), KeyOutcome::Ignored);
    }

    #[test]
    fn test_unbound_key_ignored() {
        let mut overlay = CalculatorOverlay::new();
        overlay.open();
        assert_eq!(overlay.handle_key("F5"), KeyOutcome::Ignored);
    }

    #[test]
    fn test_render_to() {
        let mut overlay = CalculatorOverlay::new();
        let mut frames: Vec<OwnedFrame> = Vec::new();
        overlay.render_to(&mut frames);
        assert!(frames.is_empty());

        overlay.open();
        overlay.handle_key("4");
        overlay.handle_key("%");
        overlay.render_to(&mut frames);
        assert_eq!(frames.len(), 1);
        assert_eq!(frames[0].display, "0.04");
        assert_eq!(frames[0].trace, "4% = 0.04");
    }
}
