#![deny(missing_docs, unsafe_code)]
#![warn(clippy::all, clippy::pedantic)]
#![allow(clippy::module_name_repetitions)]

//! # chaincfg
//!
//! A library for assembling smart-contract toolchain configuration.
//!
//! The toolchain (compiler, test runner, documentation generator, gas
//! reporter, explorer verifier) reads one settings object. This crate builds
//! that object from environment variables and fixed literals, checks it, and
//! renders it.
//!
//! ## Core Types
//!
//! - [`RootConfiguration`]: the assembled settings
//! - [`ConfigAssembler`] and [`ConfigBuilder`]: assembly from an environment
//! - [`ConfigValidator`]: structural and missing-secret checks
//! - [`Error`] and [`Result`]: Error handling types
//! - [`Logger`] and [`LogLevel`]: Logging infrastructure
//!
//! ## Examples
//!
//! ```
//! use chaincfg::{ConfigAssembler, EnvironmentSnapshot, StaticLiterals};
//!
//! let env = EnvironmentSnapshot::from_pairs([
//!     ("BNB_MAINNET_URL", "https://x"),
//!     ("PRIVATE_KEY", "abc"),
//! ]);
//! let config = ConfigAssembler::new(&env, &StaticLiterals::default()).assemble();
//!
//! assert_eq!(config.networks["bnb"].chain_id, 56);
//! assert_eq!(config.compilers[0].optimizer_runs, 200);
//! ```

pub mod config;
pub mod error;
pub mod logging;
pub mod output;

// Re-export key types at crate root for convenience
pub use config::{
    ConfigAssembler, ConfigBuilder, ConfigValidator, EnvironmentSnapshot, RootConfiguration,
    StaticLiterals, ToolchainTask,
};
pub use error::{Error, MissingSecret, Result};
pub use logging::{init_logger, LogLevel, Logger};
pub use output::{OutputFormat, OutputFormatter};
