//! Browser presentation layer
//!
//! The mock DOM and its driver are always compiled so the presentation path
//! is testable without a browser; the real `wasm-bindgen` export sits behind
//! the `wasm` feature.

#[cfg(feature = "wasm")]
mod browser;
mod dom;
mod driver;

#[cfg(feature = "wasm")]
pub use browser::BrowserCalculator;
pub use dom::{DomElement, DomEvent, MockDom, DISPLAY_ID, KEYPAD_ID, TRACE_ID, WINDOW_ID};
pub use driver::WasmDriver;
