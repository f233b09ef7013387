//! Output formatting module for assembled configuration.
//!
//! This module renders a [`RootConfiguration`] as human-readable text, as a
//! JSON or YAML dump of the schema, or in the JSON layout the contract
//! toolchain reads. Secret handling is the caller's job: pass
//! [`RootConfiguration::redacted`] unless secrets should be shown.

mod formatters;

use std::fmt;
use std::str::FromStr;

use crate::config::RootConfiguration;
use crate::Result;

pub use formatters::{HumanFormatter, JsonFormatter, ToolchainFormatter, YamlFormatter};

/// Trait for formatting configuration into different output formats.
pub trait OutputFormatter {
    /// Format the given configuration into a string.
    ///
    /// # Errors
    ///
    /// Returns an error if serialization fails.
    fn format(&self, config: &RootConfiguration) -> Result<String>;
}

/// Available output formats.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
pub enum OutputFormat {
    /// Human-readable summary.
    #[default]
    Human,
    /// JSON dump of the configuration schema.
    Json,
    /// YAML dump of the configuration schema.
    Yaml,
    /// JSON in the toolchain's own configuration layout.
    Toolchain,
}

impl OutputFormat {
    /// Create a formatter for this output format.
    #[must_use]
    pub fn create_formatter(&self) -> Box<dyn OutputFormatter> {
        match self {
            Self::Human => Box::new(HumanFormatter),
            Self::Json => Box::new(JsonFormatter),
            Self::Yaml => Box::new(YamlFormatter),
            Self::Toolchain => Box::new(ToolchainFormatter),
        }
    }
}

impl fmt::Display for OutputFormat {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Self::Human => write!(f, "human"),
            Self::Json => write!(f, "json"),
            Self::Yaml => write!(f, "yaml"),
            Self::Toolchain => write!(f, "toolchain"),
        }
    }
}

impl FromStr for OutputFormat {
    type Err = String;

    fn from_str(s: &str) -> std::result::Result<Self, Self::Err> {
        match s.to_lowercase().as_str() {
            "human" => Ok(Self::Human),
            "json" => Ok(Self::Json),
            "yaml" | "yml" => Ok(Self::Yaml),
            "toolchain" => Ok(Self::Toolchain),
            _ => Err(format!(
                "invalid output format '{s}' (expected human, json, yaml or toolchain)"
            )),
        }
    }
}
