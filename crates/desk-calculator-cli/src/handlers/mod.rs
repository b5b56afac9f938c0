//! Command handlers - extracted from main.rs for testability
//!
//! Handlers write to any `Write`/`BufRead` so tests can run them against
//! in-memory buffers.

pub mod config;
pub mod control_center;
pub mod desktop;
pub mod eval;
pub mod repl;

pub use config::execute_config;
pub use control_center::execute_control_center;
pub use desktop::execute_desktop;
pub use eval::execute_eval;
pub use repl::execute_repl;
