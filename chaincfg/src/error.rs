//! Error types for the chaincfg library.
//!
//! This module provides the error hierarchy for loading, validating, and
//! rendering toolchain configuration, using `thiserror` for ergonomic error
//! handling.

use std::fmt;
use std::path::PathBuf;

use thiserror::Error;

/// Result type alias for operations that may fail with a chaincfg error.
///
/// # Examples
///
/// ```
/// use chaincfg::{Error, Result};
///
/// fn example_operation() -> Result<u64> {
///     Ok(56)
/// }
/// ```
pub type Result<T> = std::result::Result<T, Error>;

/// The main error type for the chaincfg library.
///
/// Assembly itself never fails; these errors come from the surrounding
/// layers (environment files, validation, rendering).
#[derive(Debug, Error)]
pub enum Error {
    /// An I/O error occurred.
    #[error("I/O error: {0}")]
    Io(#[from] std::io::Error),

    /// YAML serialization failed.
    #[error("configuration error: {0}")]
    Configuration(#[from] serde_yaml::Error),

    /// JSON serialization failed.
    #[error("JSON error: {0}")]
    Json(#[from] serde_json::Error),

    /// An environment file could not be read or parsed.
    #[error("invalid environment file {}: {reason}", path.display())]
    EnvFile {
        /// The offending file.
        path: PathBuf,
        /// The reason the file was rejected.
        reason: String,
    },

    /// A validation error occurred.
    #[error("validation error for '{field}': {message}")]
    Validation {
        /// The field that failed validation.
        field: String,
        /// A description of the validation failure.
        message: String,
    },

    /// One or more secrets required by a toolchain task are unset or empty.
    #[error("missing secrets for {task}: {}", join_missing(.missing))]
    MissingSecrets {
        /// The task that would fail.
        task: String,
        /// Every secret the task needs but does not have.
        missing: Vec<MissingSecret>,
    },

    /// The named network is not part of the configuration.
    #[error("unknown network: {name}")]
    UnknownNetwork {
        /// The requested network name.
        name: String,
    },
}

/// A secret needed by a downstream consumer that was empty or undefined.
///
/// # Examples
///
/// ```
/// use chaincfg::MissingSecret;
///
/// let missing = MissingSecret::new("PRIVATE_KEY", "networks.bnb.accounts");
/// assert_eq!(missing.to_string(), "PRIVATE_KEY (networks.bnb.accounts)");
/// ```
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct MissingSecret {
    /// The environment variable that should carry the secret.
    pub variable: String,
    /// The configuration field that consumes it.
    pub consumer: String,
}

impl MissingSecret {
    /// Creates a new missing-secret record.
    #[must_use]
    pub fn new(variable: impl Into<String>, consumer: impl Into<String>) -> Self {
        Self {
            variable: variable.into(),
            consumer: consumer.into(),
        }
    }
}

impl fmt::Display for MissingSecret {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{} ({})", self.variable, self.consumer)
    }
}

fn join_missing(missing: &[MissingSecret]) -> String {
    missing
        .iter()
        .map(ToString::to_string)
        .collect::<Vec<_>>()
        .join(", ")
}
