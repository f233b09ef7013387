//! Configuration schema definitions.
//!
//! This module defines the settings object handed to the contract toolchain:
//! compiler profiles, networks, test runner, documentation generator, gas
//! reporter and explorer verification. Every type here is a plain value
//! record, built once by the assembler and never mutated afterwards.

use serde::{Deserialize, Serialize};
use std::collections::BTreeMap;

/// Placeholder written over secret values when rendering for humans.
pub const REDACTED: &str = "<redacted>";

/// Complete toolchain configuration.
///
/// Owns every nested settings record. Networks and explorer keys are kept in
/// ordered maps so repeated assembly yields identical output.
#[derive(Debug, Clone, Deserialize, Serialize, PartialEq, Eq)]
#[serde(rename_all = "camelCase")]
pub struct RootConfiguration {
    /// Compiler profiles, one per supported compiler version.
    pub compilers: Vec<CompilerProfile>,

    /// Networks keyed by name.
    pub networks: BTreeMap<String, NetworkProfile>,

    /// Test runner settings.
    pub test_runner: TestRunnerSettings,

    /// Documentation generator settings.
    pub docgen: DocGenSettings,

    /// Gas reporter settings.
    pub gas_reporter: GasReporterSettings,

    /// Block-explorer verification settings.
    pub explorer: ExplorerVerificationSettings,
}

impl RootConfiguration {
    /// Looks up a network by name.
    #[must_use]
    pub fn network(&self, name: &str) -> Option<&NetworkProfile> {
        self.networks.get(name)
    }

    /// Returns a copy with every non-empty secret replaced by [`REDACTED`].
    ///
    /// Empty and absent secrets are left as they are so that unset values
    /// stay visible.
    ///
    /// # Examples
    ///
    /// ```
    /// use chaincfg::config::{ConfigAssembler, EnvironmentSnapshot, StaticLiterals, REDACTED};
    ///
    /// let env = EnvironmentSnapshot::from_pairs([("PRIVATE_KEY", "abc")]);
    /// let config = ConfigAssembler::new(&env, &StaticLiterals::default()).assemble();
    ///
    /// let redacted = config.redacted();
    /// assert_eq!(redacted.networks["bnb"].account_keys, vec![REDACTED.to_string()]);
    /// assert_eq!(redacted.networks["bnb"].rpc_url, "");
    /// ```
    #[must_use]
    pub fn redacted(&self) -> Self {
        let mut copy = self.clone();

        for network in copy.networks.values_mut() {
            redact(&mut network.rpc_url);
            network.account_keys.iter_mut().for_each(redact);
        }

        if let Some(key) = copy.gas_reporter.pricing_api_key.as_mut() {
            redact(key);
        }
        if let Some(key) = copy.gas_reporter.gas_price_api_key.as_mut() {
            redact(key);
        }

        copy.explorer.api_keys_by_network.values_mut().for_each(redact);

        copy
    }
}

fn redact(value: &mut String) {
    if !value.is_empty() {
        REDACTED.clone_into(value);
    }
}

/// Compiler profile for one compiler version.
///
/// # Examples
///
/// ```
/// use chaincfg::config::ConfigAssembler;
///
/// let profiles = ConfigAssembler::build_compiler_profiles(&["0.8.24"]);
/// assert_eq!(profiles[0].version, "0.8.24");
/// assert!(profiles[0].via_ir);
/// ```
#[derive(Debug, Clone, Deserialize, Serialize, PartialEq, Eq)]
#[serde(rename_all = "camelCase")]
pub struct CompilerProfile {
    /// Compiler version identifier (e.g. `0.8.24`).
    pub version: String,

    /// Whether the optimizer runs.
    pub optimizer_enabled: bool,

    /// Expected number of contract executions the optimizer tunes for.
    pub optimizer_runs: u32,

    /// Compile through the intermediate representation pipeline.
    #[serde(rename = "viaIR")]
    pub via_ir: bool,

    /// Step preset for the intermediate representation optimizer.
    pub extra_optimizer_detail: String,
}

/// Connection settings for one network.
#[derive(Debug, Clone, Deserialize, Serialize, PartialEq, Eq)]
#[serde(rename_all = "camelCase")]
pub struct NetworkProfile {
    /// Unique network name.
    pub name: String,

    /// RPC endpoint, empty when unset.
    pub rpc_url: String,

    /// Signing keys. Always exactly one entry; may be empty when unset.
    pub account_keys: Vec<String>,

    /// Chain identifier.
    pub chain_id: u64,
}

/// Test runner settings.
#[derive(Debug, Clone, Copy, Deserialize, Serialize, PartialEq, Eq)]
#[serde(rename_all = "camelCase")]
pub struct TestRunnerSettings {
    /// Per-test timeout in milliseconds.
    pub timeout_millis: u64,
}

/// How the documentation generator splits its output.
#[derive(Debug, Clone, Copy, Deserialize, Serialize, PartialEq, Eq, Default)]
pub enum PageGranularity {
    /// One page per source file.
    #[default]
    #[serde(rename = "files")]
    PerFile,
    /// One page per contract.
    #[serde(rename = "items")]
    PerContract,
    /// Everything on a single page.
    #[serde(rename = "single")]
    SinglePage,
}

impl PageGranularity {
    /// The toolchain's spelling of this granularity.
    #[must_use]
    pub const fn as_str(self) -> &'static str {
        match self {
            Self::PerFile => "files",
            Self::PerContract => "items",
            Self::SinglePage => "single",
        }
    }
}

/// Documentation generator settings.
#[derive(Debug, Clone, Deserialize, Serialize, PartialEq, Eq)]
#[serde(rename_all = "camelCase")]
pub struct DocGenSettings {
    /// Output directory for generated pages.
    pub output_dir: String,

    /// Page splitting mode.
    pub page_granularity: PageGranularity,
}

/// Gas reporter settings.
#[derive(Debug, Clone, Deserialize, Serialize, PartialEq, Eq)]
#[serde(rename_all = "camelCase")]
pub struct GasReporterSettings {
    /// Whether gas reporting is on.
    pub enabled: bool,

    /// ISO currency code for fiat estimates.
    pub currency: String,

    /// Ticker of the native token used for pricing.
    pub reference_token: String,

    /// Market-data API key. `None` when the variable is not defined.
    pub pricing_api_key: Option<String>,

    /// Gas-price API key. `None` when the variable is not defined.
    pub gas_price_api_key: Option<String>,
}

/// Block-explorer verification settings.
#[derive(Debug, Clone, Deserialize, Serialize, PartialEq, Eq, Default)]
#[serde(rename_all = "camelCase")]
pub struct ExplorerVerificationSettings {
    /// API keys keyed by explorer network name.
    pub api_keys_by_network: BTreeMap<String, String>,
}
