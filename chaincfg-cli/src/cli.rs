//! CLI structure and command definitions.
//!
//! This module defines the main CLI structure using clap's derive macros,
//! including global options and subcommands.

use crate::commands::{
    CheckCommand, CompletionsCommand, NetworksCommand, ShowCommand, VarsCommand,
};
use clap::{Parser, Subcommand};
use std::path::PathBuf;

/// Command-line tool for inspecting smart-contract toolchain configuration.
#[derive(Parser)]
#[command(name = "chaincfg")]
#[command(version, about = "Assemble and check smart-contract toolchain configuration", long_about = None)]
pub struct Cli {
    /// Enable verbose output
    #[arg(long, global = true)]
    pub verbose: bool,

    /// Suppress non-essential output
    #[arg(long, global = true)]
    pub quiet: bool,

    /// Project directory searched for a .env file
    #[arg(long, value_name = "PATH", global = true)]
    pub dir: Option<PathBuf>,

    /// Read variables from this file instead of <dir>/.env
    #[arg(long, value_name = "PATH", global = true, env = "CHAINCFG_ENV_FILE")]
    pub env_file: Option<PathBuf>,

    /// Do not read any .env file
    #[arg(long, global = true)]
    pub no_env_file: bool,

    #[command(subcommand)]
    pub command: Command,
}

/// Available CLI commands.
#[derive(Subcommand)]
pub enum Command {
    /// Print the assembled configuration
    Show(ShowCommand),

    /// Validate the configuration and report missing secrets
    Check(CheckCommand),

    /// List configured networks
    Networks(NetworksCommand),

    /// List the environment variables the configuration reads
    Vars(VarsCommand),

    /// Generate shell completion scripts
    Completions(CompletionsCommand),
}
