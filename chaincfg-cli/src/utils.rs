//! Utility functions for CLI operations.
//!
//! This module provides common utility functions used across CLI commands,
//! chiefly turning the global options into a configured builder.

use crate::error::CliError;
use chaincfg::{ConfigBuilder, RootConfiguration, StaticLiterals};
use std::path::PathBuf;

/// Global CLI options shared across all commands.
///
/// Verbosity is consumed by the logger in `main` and not carried here.
#[derive(Debug, Clone)]
pub struct GlobalOptions {
    /// Suppress non-essential output.
    pub quiet: bool,

    /// Project directory searched for `.env`.
    pub dir: Option<PathBuf>,

    /// Explicit environment file.
    pub env_file: Option<PathBuf>,

    /// Skip environment files entirely.
    pub no_env_file: bool,
}

/// Create a configuration builder from the global options.
///
/// Sources, highest precedence first:
/// 1. Process environment
/// 2. Environment file (`--env-file`, or `.env` in `--dir` / the CWD)
pub fn configuration_builder(global: &GlobalOptions) -> ConfigBuilder {
    let mut builder = ConfigBuilder::new();

    if let Some(ref dir) = global.dir {
        builder = builder.with_working_dir(dir);
    }

    if global.no_env_file {
        builder = builder.skip_env_file();
    } else if let Some(ref path) = global.env_file {
        builder = builder.with_env_file(path);
    }

    builder
}

/// Load the assembled configuration together with the literals behind it.
pub fn load_configuration(
    global: &GlobalOptions,
) -> Result<(RootConfiguration, StaticLiterals), CliError> {
    let builder = configuration_builder(global);
    let config = builder.build().map_err(CliError::from)?;
    Ok((config, builder.literals()))
}

/// Render a secret's presence without revealing it.
pub fn presence(value: Option<&str>) -> &'static str {
    match value {
        None => "unset",
        Some("") => "empty",
        Some(_) => "set",
    }
}
