//! CLI command definitions using clap

use clap::{Parser, Subcommand, ValueEnum};
use std::path::PathBuf;

/// deskcalc: immediate-execution desk calculator and control center
#[derive(Parser, Debug)]
#[command(name = "deskcalc")]
#[command(author, version, about, long_about = None)]
#[command(propagate_version = true)]
pub struct Cli {
    /// Verbosity level (-v, -vv)
    #[arg(short, long, action = clap::ArgAction::Count, global = true)]
    pub verbose: u8,

    /// Quiet mode (errors only)
    #[arg(short, long, global = true)]
    pub quiet: bool,

    /// Color output (auto, always, never)
    #[arg(long, default_value = "auto", global = true)]
    pub color: ColorArg,

    /// Emit log lines as JSON
    #[arg(long, global = true)]
    pub log_json: bool,

    /// Desktop configuration file (YAML)
    #[arg(long, global = true, env = "DESKCALC_CONFIG")]
    pub config: Option<PathBuf>,

    /// Subcommand to run
    #[command(subcommand)]
    pub command: Commands,
}

/// CLI subcommands
#[derive(Subcommand, Debug)]
pub enum Commands {
    /// Press a key sequence and print the result
    Eval(EvalArgs),

    /// Interactive calculator session over stdin
    Repl(ReplArgs),

    /// Adjust control center sliders and toggles
    ControlCenter(ControlCenterArgs),

    /// Open panels, send keys and show what the desktop ends up showing
    Desktop(DesktopArgs),

    /// Show the effective desktop configuration
    Config(ConfigArgs),
}

/// Arguments for the eval command
#[derive(Parser, Debug)]
pub struct EvalArgs {
    /// Key sequences, pressed in order (e.g. "7+3=")
    #[arg(required = true)]
    pub keys: Vec<String>,

    /// Print the frame after every key
    #[arg(short, long)]
    pub steps: bool,

    /// Print JSON instead of text
    #[arg(long)]
    pub json: bool,
}

/// Arguments for the repl command
#[derive(Parser, Debug)]
pub struct ReplArgs {
    /// Never print the prompt
    #[arg(long)]
    pub no_prompt: bool,
}

/// Arguments for the control-center command
#[derive(Parser, Debug)]
pub struct ControlCenterArgs {
    /// Set brightness (clamped to 0-100)
    #[arg(long, allow_negative_numbers = true)]
    pub brightness: Option<i64>,

    /// Set volume (clamped to 0-100)
    #[arg(long, allow_negative_numbers = true)]
    pub volume: Option<i64>,

    /// Flip a toggle (wifi, bluetooth, focus); may be repeated
    #[arg(long = "toggle", value_name = "TOGGLE")]
    pub toggles: Vec<String>,
}

/// Arguments for the desktop command
#[derive(Parser, Debug)]
pub struct DesktopArgs {
    /// Open a panel (control-center, calculator, finder); may be repeated
    #[arg(long = "open", value_name = "PANEL")]
    pub open: Vec<String>,

    /// Send a key to the desktop after opening panels (e.g. 7, Enter, Escape)
    #[arg(long = "key", value_name = "KEY", allow_hyphen_values = true)]
    pub keys: Vec<String>,
}

/// Arguments for the config command
#[derive(Parser, Debug)]
pub struct ConfigArgs {
    /// Print built-in defaults instead of the loaded file
    #[arg(long)]
    pub default: bool,
}

/// Color argument for CLI
#[derive(ValueEnum, Clone, Debug, Default)]
pub enum ColorArg {
    /// Automatic color detection
    #[default]
    Auto,
    /// Always use colors
    Always,
    /// Never use colors
    Never,
}

impl From<ColorArg> for crate::config::ColorChoice {
    fn from(arg: ColorArg) -> Self {
        match arg {
            ColorArg::Auto => Self::Auto,
            ColorArg::Always => Self::Always,
            ColorArg::Never => Self::Never,
        }
    }
}
