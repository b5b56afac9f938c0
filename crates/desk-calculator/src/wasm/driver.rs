//! WASM driver: calculator overlay wired to the mock DOM
//!
//! Every interaction goes through the DOM the way a user would: a click on
//! a button element or a key-down event. The DOM is re-rendered after each.

use super::dom::{DomEvent, MockDom, DISPLAY_ID, TRACE_ID, WINDOW_ID};
use crate::core::Action;
use crate::driver::CalculatorDriver;
use crate::overlay::{CalculatorOverlay, KeyOutcome};

/// WASM driver wrapping the overlay and mock DOM
#[derive(Debug)]
pub struct WasmDriver {
    overlay: CalculatorOverlay,
    dom: MockDom,
}

impl Default for WasmDriver {
    fn default() -> Self {
        Self::new()
    }
}

impl WasmDriver {
    /// Creates a driver with the overlay open
    #[must_use]
    pub fn new() -> Self {
        let mut overlay = CalculatorOverlay::new();
        overlay.open();
        let dom = MockDom::calculator(overlay.keypad());
        let mut driver = Self { overlay, dom };
        driver.sync_dom();
        driver
    }

    /// Returns a reference to the overlay
    #[must_use]
    pub fn overlay(&self) -> &CalculatorOverlay {
        &self.overlay
    }

    /// Returns a reference to the DOM
    #[must_use]
    pub fn dom(&self) -> &MockDom {
        &self.dom
    }

    /// Reopens the overlay after it was closed
    pub fn open(&mut self) {
        self.overlay.open();
        self.sync_dom();
    }

    /// Simulates a click on an element
    pub fn click(&mut self, element_id: &str) -> Option<Action> {
        self.dom.dispatch_event(DomEvent::click(element_id));
        let action = self.overlay.click(element_id);
        self.sync_dom();
        action
    }

    /// Simulates a key press
    pub fn press_key(&mut self, key: &str) -> KeyOutcome {
        self.dom.dispatch_event(DomEvent::key_down(key));
        let outcome = self.overlay.handle_key(key);
        self.sync_dom();
        outcome
    }

    /// Whether the calculator window is shown
    #[must_use]
    pub fn window_visible(&self) -> bool {
        self.dom.is_visible(WINDOW_ID)
    }

    fn sync_dom(&mut self) {
        let open = self.overlay.is_open();
        if let Some(window) = self.dom.get_element_mut(WINDOW_ID) {
            window.set_visible(open);
        }
        self.overlay.render_to(&mut self.dom);
    }
}

impl CalculatorDriver for WasmDriver {
    fn press(&mut self, action: Action) {
        let id = self
            .overlay
            .keypad()
            .find_button_by_action(action)
            .map(|btn| btn.id.clone());
        if let Some(id) = id {
            self.click(&id);
        }
    }

    fn display(&self) -> String {
        self.dom
            .get_element_text(DISPLAY_ID)
            .unwrap_or_default()
            .to_string()
    }

    fn trace(&self) -> String {
        if self.dom.is_visible(TRACE_ID) {
            self.dom
                .get_element_text(TRACE_ID)
                .unwrap_or_default()
                .to_string()
        } else {
            String::new()
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_new_driver_renders_zero() {
        let driver = WasmDriver::new();
        assert!(driver.window_visible());
        assert_eq!(driver.display(), "0");
        assert_eq!(driver.trace(), "");
    }

    #[test]
    fn test_click_sequence() {
        let mut driver = WasmDriver::new();
        for id in ["btn-7", "btn-plus", "btn-3", "btn-equals"] {
            driver.click(id);
        }
        assert_eq!(driver.display(), "10");
        assert_eq!(driver.trace(), "7 + 3 = 10");
        assert_eq!(driver.dom().event_history().len(), 4);
    }

    #[test]
    fn test_click_non_button() {
        let mut driver = WasmDriver::new();
        assert_eq!(driver.click("calc-display"), None);
        assert_eq!(driver.display(), "0");
    }

    #[test]
    fn test_press_goes_through_dom() {
        let mut driver = WasmDriver::new();
        driver.press(Action::Percent);
        assert_eq!(
            driver.dom().event_history(),
            &[DomEvent::click("btn-percent")]
        );
    }

    #[test]
    fn test_keyboard_entry() {
        let mut driver = WasmDriver::new();
        for key in ["9", "/", "3", "Enter"] {
            driver.press_key(key);
        }
        assert_eq!(driver.display(), "3");
    }

    #[test]
    fn test_escape_hides_window_and_reopen_is_fresh() {
        let mut driver = WasmDriver::new();
        driver.press_key("5");
        assert_eq!(driver.press_key("Escape"), KeyOutcome::Closed);
        assert!(!driver.window_visible());
        assert!(!driver.overlay().is_open());

        driver.open();
        assert!(driver.window_visible());
        assert_eq!(driver.display(), "0");
    }

    #[test]
    fn test_trace_hidden_after_clear() {
        let mut driver = WasmDriver::new();
        driver.press_keys("4%").unwrap();
        assert_eq!(driver.trace(), "4% = 0.04");
        driver.press_keys("C").unwrap();
        assert_eq!(driver.trace(), "");
    }
}
