//! Configuration validation.
//!
//! Two kinds of checks live here. Structural validation rejects settings the
//! toolchain could never accept (malformed versions, clashing chain ids).
//! Readiness checks answer a narrower question: would a given toolchain task
//! trip over an unset secret? Assembly itself tolerates missing secrets, so
//! this is where they surface.

use crate::config::assembler::StaticLiterals;
use crate::config::schema::RootConfiguration;
use crate::error::{Error, MissingSecret, Result};
use std::collections::{HashMap, HashSet};
use std::fmt;

/// A toolchain operation that consumes the configuration.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum ToolchainTask {
    /// Compile contracts.
    Compile,
    /// Run the test suite on the in-process network.
    Test,
    /// Deploy to a named network.
    Deploy(String),
    /// Submit sources to the block explorer.
    Verify,
    /// Produce a gas report.
    GasReport,
}

impl fmt::Display for ToolchainTask {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Self::Compile => write!(f, "compile"),
            Self::Test => write!(f, "test"),
            Self::Deploy(network) => write!(f, "deploy to {network}"),
            Self::Verify => write!(f, "verify"),
            Self::GasReport => write!(f, "gas report"),
        }
    }
}

/// Validates assembled configuration.
///
/// # Examples
///
/// ```
/// use chaincfg::config::{
///     ConfigAssembler, ConfigValidator, EnvironmentSnapshot, StaticLiterals, ToolchainTask,
/// };
///
/// let env = EnvironmentSnapshot::new();
/// let literals = StaticLiterals::default();
/// let config = ConfigAssembler::new(&env, &literals).assemble();
///
/// ConfigValidator::validate(&config).unwrap();
///
/// let missing =
///     ConfigValidator::missing_secrets(&config, &literals, &ToolchainTask::Deploy("bnb".into()))
///         .unwrap();
/// assert_eq!(missing.len(), 2);
/// ```
pub struct ConfigValidator;

impl ConfigValidator {
    /// Validate the structure of a configuration.
    ///
    /// Duplicate compiler versions are not an error; see
    /// [`ConfigValidator::duplicate_compiler_versions`].
    ///
    /// # Errors
    ///
    /// Returns the first validation failure found.
    pub fn validate(config: &RootConfiguration) -> Result<()> {
        for (i, profile) in config.compilers.iter().enumerate() {
            Self::validate_version(&format!("compilers[{i}].version"), &profile.version)?;
        }

        Self::validate_networks(config)?;

        if config.test_runner.timeout_millis == 0 {
            return Err(Error::Validation {
                field: "testRunner.timeoutMillis".into(),
                message: "Timeout must be greater than 0".into(),
            });
        }

        if config.docgen.output_dir.trim().is_empty() {
            return Err(Error::Validation {
                field: "docgen.outputDir".into(),
                message: "Cannot be empty or only whitespace".into(),
            });
        }

        let currency = &config.gas_reporter.currency;
        if currency.len() != 3 || !currency.chars().all(|c| c.is_ascii_uppercase()) {
            return Err(Error::Validation {
                field: "gasReporter.currency".into(),
                message: format!("Expected a three-letter ISO code, got '{currency}'"),
            });
        }

        if config.gas_reporter.reference_token.trim().is_empty() {
            return Err(Error::Validation {
                field: "gasReporter.referenceToken".into(),
                message: "Cannot be empty or only whitespace".into(),
            });
        }

        Ok(())
    }

    /// Compiler versions that appear more than once, in first-seen order.
    #[must_use]
    pub fn duplicate_compiler_versions(config: &RootConfiguration) -> Vec<&str> {
        let mut seen = HashSet::new();
        let mut reported = HashSet::new();
        let mut duplicates = Vec::new();

        for profile in &config.compilers {
            let version = profile.version.as_str();
            if !seen.insert(version) && reported.insert(version) {
                duplicates.push(version);
            }
        }

        duplicates
    }

    /// List the secrets `task` needs but the configuration lacks.
    ///
    /// A secret counts as missing when it is undefined or empty.
    ///
    /// # Errors
    ///
    /// Returns [`Error::UnknownNetwork`] when deploying to a network that is
    /// not configured.
    pub fn missing_secrets(
        config: &RootConfiguration,
        literals: &StaticLiterals,
        task: &ToolchainTask,
    ) -> Result<Vec<MissingSecret>> {
        let mut missing = Vec::new();

        match task {
            ToolchainTask::Compile | ToolchainTask::Test => {}
            ToolchainTask::Deploy(name) => {
                let (Some(network), Some(spec)) = (config.network(name), literals.network(name))
                else {
                    return Err(Error::UnknownNetwork { name: name.clone() });
                };

                if network.rpc_url.is_empty() {
                    missing.push(MissingSecret::new(
                        &spec.url_var,
                        format!("networks.{name}.url"),
                    ));
                }
                if network.account_keys.iter().all(String::is_empty) {
                    missing.push(MissingSecret::new(
                        &spec.key_var,
                        format!("networks.{name}.accounts"),
                    ));
                }
            }
            ToolchainTask::Verify => {
                let network = &literals.explorer_network;
                let key = config.explorer.api_keys_by_network.get(network);
                if key.map_or(true, String::is_empty) {
                    missing.push(MissingSecret::new(
                        &literals.explorer_key_var,
                        format!("etherscan.apiKey.{network}"),
                    ));
                }
            }
            ToolchainTask::GasReport => {
                let gas = &config.gas_reporter;
                if gas.enabled {
                    if is_unset(gas.pricing_api_key.as_deref()) {
                        missing.push(MissingSecret::new(
                            &literals.pricing_key_var,
                            "gasReporter.coinmarketcap",
                        ));
                    }
                    if is_unset(gas.gas_price_api_key.as_deref()) {
                        missing.push(MissingSecret::new(
                            &literals.explorer_key_var,
                            "gasReporter.gasPriceApi",
                        ));
                    }
                }
            }
        }

        Ok(missing)
    }

    /// Like [`ConfigValidator::missing_secrets`] but fails when anything is
    /// missing.
    ///
    /// # Errors
    ///
    /// Returns [`Error::MissingSecrets`] listing every missing secret, or
    /// [`Error::UnknownNetwork`].
    pub fn require_secrets(
        config: &RootConfiguration,
        literals: &StaticLiterals,
        task: &ToolchainTask,
    ) -> Result<()> {
        let missing = Self::missing_secrets(config, literals, task)?;
        if missing.is_empty() {
            Ok(())
        } else {
            Err(Error::MissingSecrets {
                task: task.to_string(),
                missing,
            })
        }
    }

    /// Validate a `MAJOR.MINOR.PATCH` version identifier.
    fn validate_version(field: &str, version: &str) -> Result<()> {
        let parts: Vec<&str> = version.split('.').collect();
        let well_formed = parts.len() == 3
            && parts
                .iter()
                .all(|p| !p.is_empty() && p.chars().all(|c| c.is_ascii_digit()));

        if well_formed {
            Ok(())
        } else {
            Err(Error::Validation {
                field: field.into(),
                message: format!("Invalid compiler version: '{version}'"),
            })
        }
    }

    /// Chain ids must be positive and unique across networks.
    fn validate_networks(config: &RootConfiguration) -> Result<()> {
        let mut by_chain: HashMap<u64, &str> = HashMap::new();

        for (name, network) in &config.networks {
            if name.trim().is_empty() {
                return Err(Error::Validation {
                    field: "networks".into(),
                    message: "Network name cannot be empty".into(),
                });
            }

            if network.chain_id == 0 {
                return Err(Error::Validation {
                    field: format!("networks.{name}.chainId"),
                    message: "Chain id must be greater than 0".into(),
                });
            }

            if let Some(other) = by_chain.insert(network.chain_id, name.as_str()) {
                return Err(Error::Validation {
                    field: format!("networks.{name}.chainId"),
                    message: format!(
                        "Chain id {} is already used by network '{other}'",
                        network.chain_id
                    ),
                });
            }
        }

        Ok(())
    }
}

fn is_unset(value: Option<&str>) -> bool {
    value.map_or(true, str::is_empty)
}
