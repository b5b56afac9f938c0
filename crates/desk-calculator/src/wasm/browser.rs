//! Browser bindings for the calculator overlay
//!
//! The page owns the markup and forwards clicks and key-downs here; after
//! each call it repaints from `display()` and `trace()`.

use wasm_bindgen::prelude::*;
use web_sys::console;

use crate::overlay::{CalculatorOverlay, KeyOutcome};

/// Browser calculator - the main WASM entry point
#[derive(Debug, Default)]
#[wasm_bindgen]
pub struct BrowserCalculator {
    overlay: CalculatorOverlay,
}

#[wasm_bindgen]
impl BrowserCalculator {
    /// Create a closed calculator overlay
    #[wasm_bindgen(constructor)]
    pub fn new() -> Self {
        console_error_panic_hook::set_once();
        Self {
            overlay: CalculatorOverlay::new(),
        }
    }

    /// Open the overlay with a fresh state
    pub fn open(&mut self) {
        self.overlay.open();
    }

    /// Close the overlay and drop its state
    pub fn close(&mut self) {
        self.overlay.close();
    }

    /// Whether the overlay is showing
    #[wasm_bindgen(getter, js_name = isOpen)]
    pub fn is_open(&self) -> bool {
        self.overlay.is_open()
    }

    /// Primary readout; empty while closed
    #[wasm_bindgen(getter)]
    pub fn display(&self) -> String {
        self.overlay
            .frame()
            .map(|f| f.display.to_string())
            .unwrap_or_default()
    }

    /// Trace line; empty while closed or hidden
    #[wasm_bindgen(getter)]
    pub fn trace(&self) -> String {
        self.overlay
            .frame()
            .map(|f| f.trace.to_string())
            .unwrap_or_default()
    }

    /// Handle a keypad button click by element ID; returns whether it applied
    #[wasm_bindgen(js_name = handleButton)]
    pub fn handle_button(&mut self, button_id: &str) -> bool {
        self.overlay.click(button_id).is_some()
    }

    /// Handle a keyboard key; returns whether the page should repaint
    #[wasm_bindgen(js_name = handleKey)]
    pub fn handle_key(&mut self, key: &str) -> bool {
        match self.overlay.handle_key(key) {
            KeyOutcome::Applied(_) | KeyOutcome::Closed => true,
            KeyOutcome::Ignored => false,
        }
    }
}

/// Initialize the calculator module in the browser
#[wasm_bindgen(start)]
pub fn init() {
    console_error_panic_hook::set_once();
    console::log_1(&"desk calculator initialized".into());
}
