//! deskcalc: command-line desk calculator
//!
//! ## Usage
//!
//! ```bash
//! deskcalc eval "7+3="            # Prints 10 and the trace 7 + 3 = 10
//! deskcalc eval --steps "12*3="   # One line per key press
//! deskcalc repl                   # Interactive session, q to quit
//! deskcalc control-center --brightness 40 --toggle wifi
//! deskcalc desktop --open calculator --key 7 --key Enter
//! deskcalc --config desk.yaml config
//! ```

use clap::Parser;
use desk_calculator_cli::{
    handlers, logging, Cli, CliConfig, CliError, CliResult, ColorChoice, Commands, Verbosity,
};
use std::io;
use std::process::ExitCode;

fn main() -> ExitCode {
    let cli = match Cli::try_parse() {
        Ok(cli) => cli,
        // --help and --version land here too and are not failures
        Err(e) if !e.use_stderr() => {
            let _ = e.print();
            return ExitCode::SUCCESS;
        }
        Err(e) => {
            eprintln!("Error: {}", CliError::usage(&e));
            return ExitCode::FAILURE;
        }
    };

    match run(cli) {
        Ok(()) => ExitCode::SUCCESS,
        Err(e) => {
            eprintln!("Error: {e}");
            ExitCode::FAILURE
        }
    }
}

fn run(cli: Cli) -> CliResult<()> {
    let config = build_config(&cli);
    logging::init(&config);

    match cli.command {
        Commands::Eval(args) => handlers::execute_eval(&config, &args, io::stdout().lock()),
        Commands::Repl(args) => {
            let prompt = !args.no_prompt && console::user_attended();
            handlers::execute_repl(
                &config,
                io::stdin().lock(),
                io::stdout().lock(),
                io::stderr().lock(),
                prompt,
            )
        }
        Commands::ControlCenter(args) => {
            handlers::execute_control_center(&config, &args, io::stdout().lock())
        }
        Commands::Desktop(args) => handlers::execute_desktop(&config, &args, io::stdout().lock()),
        Commands::Config(args) => handlers::execute_config(&config, &args, io::stdout().lock()),
    }
}

fn build_config(cli: &Cli) -> CliConfig {
    let verbosity = Verbosity::from_flags(cli.verbose, cli.quiet);
    let color: ColorChoice = cli.color.clone().into();

    CliConfig::new()
        .with_verbosity(verbosity)
        .with_color(color)
        .with_log_json(cli.log_json)
        .with_desktop_config(cli.config.clone())
}
