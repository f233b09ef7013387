//! Configuration system for chaincfg.
//!
//! This module assembles the settings object a smart-contract toolchain
//! consumes: compiler profiles, networks, test runner, documentation, gas
//! reporting and explorer verification.
//!
//! # Sources
//!
//! Environment variables are gathered once into an [`EnvironmentSnapshot`]
//! (highest precedence first):
//!
//! 1. Programmatic overrides (via `ConfigBuilder::with_var`)
//! 2. Process environment
//! 3. `.env` file in the working directory
//!
//! Everything else comes from [`StaticLiterals`].
//!
//! # Missing secrets
//!
//! Assembly never fails on an unset variable. Secrets default to an empty
//! string and the consuming tool reports the problem when it needs the value.
//! [`ConfigValidator::missing_secrets`] runs the same check ahead of time for
//! a given [`ToolchainTask`].
//!
//! # Examples
//!
//! ```
//! use chaincfg::config::{ConfigAssembler, EnvironmentSnapshot, StaticLiterals};
//!
//! let env = EnvironmentSnapshot::from_pairs([("API_BNB_SCAN", "key")]);
//! let config = ConfigAssembler::new(&env, &StaticLiterals::default()).assemble();
//!
//! assert_eq!(config.gas_reporter.gas_price_api_key.as_deref(), Some("key"));
//! assert_eq!(config.explorer.api_keys_by_network["bsc"], "key");
//! ```
//!
//! Loading from a project directory:
//!
//! ```no_run
//! use chaincfg::config::ConfigBuilder;
//! use std::path::Path;
//!
//! let config = ConfigBuilder::new()
//!     .with_working_dir(Path::new("/path/to/project"))
//!     .build()
//!     .unwrap();
//! ```

pub mod assembler;
pub mod builder;
pub mod environment;
pub mod loader;
pub mod schema;
pub mod validator;

#[cfg(test)]
mod proptests;

pub use assembler::{vars, ConfigAssembler, NetworkSpec, StaticLiterals};
pub use builder::ConfigBuilder;
pub use environment::EnvironmentSnapshot;
pub use loader::EnvFileLoader;
pub use schema::{
    CompilerProfile, DocGenSettings, ExplorerVerificationSettings, GasReporterSettings,
    NetworkProfile, PageGranularity, RootConfiguration, TestRunnerSettings, REDACTED,
};
pub use validator::{ConfigValidator, ToolchainTask};
