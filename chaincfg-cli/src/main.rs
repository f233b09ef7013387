//! Main entry point for the chaincfg CLI.
//!
//! This is the command-line interface for inspecting the configuration handed
//! to the smart-contract toolchain:
//! - `show`: Print the assembled configuration
//! - `check`: Validate it and report missing secrets for a task
//! - `networks`: List configured networks
//! - `vars`: List the environment variables that feed it

mod cli;
mod commands;
mod error;
mod utils;

use clap::Parser;
use cli::Cli;
use utils::GlobalOptions;

fn main() {
    let cli = Cli::parse();

    // Route library `log` output through the stderr logger
    let logger = chaincfg::init_logger(cli.verbose, cli.quiet);
    if let Err(e) = logger.install() {
        eprintln!("Warning: logger already installed: {e}");
    }

    let global = GlobalOptions {
        quiet: cli.quiet,
        dir: cli.dir,
        env_file: cli.env_file,
        no_env_file: cli.no_env_file,
    };

    let result = match cli.command {
        cli::Command::Show(cmd) => cmd.execute(&global),
        cli::Command::Check(cmd) => cmd.execute(&global),
        cli::Command::Networks(cmd) => cmd.execute(&global),
        cli::Command::Vars(cmd) => cmd.execute(&global),
        cli::Command::Completions(cmd) => cmd.execute(&global),
    };

    match result {
        Ok(()) => std::process::exit(0),
        Err(e) => {
            eprintln!("Error: {e}");
            std::process::exit(e.exit_code());
        }
    }
}
