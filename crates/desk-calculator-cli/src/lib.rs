//! deskcalc CLI library
//!
//! Terminal front end for the desk calculator: one-shot key sequences,
//! an interactive session, the control center settings and the desktop panels.

#![warn(missing_docs)]
#![warn(clippy::all)]
#![warn(clippy::pedantic)]
#![allow(clippy::module_name_repetitions)]
#![allow(clippy::missing_errors_doc)]

mod commands;
mod config;
mod error;
pub mod handlers;
pub mod logging;
mod output;

pub use commands::{
    Cli, ColorArg, Commands, ConfigArgs, ControlCenterArgs, DesktopArgs, EvalArgs, ReplArgs,
};
pub use config::{CliConfig, ColorChoice, Verbosity};
pub use error::{CliError, CliResult};
pub use output::{EvalReport, EvalStep, TerminalRenderer};
