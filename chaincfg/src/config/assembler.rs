//! Configuration assembly.
//!
//! Turns an [`EnvironmentSnapshot`] plus a set of [`StaticLiterals`] into a
//! [`RootConfiguration`] in one straight pass. Assembly never fails: an unset
//! secret becomes an empty string (or `None` for the optional gas-reporter
//! keys) and whichever tool consumes it reports the problem at the point of
//! use. [`ConfigValidator::missing_secrets`] exposes that check up front.
//!
//! [`ConfigValidator::missing_secrets`]: crate::config::ConfigValidator::missing_secrets

use crate::config::environment::EnvironmentSnapshot;
use crate::config::schema::{
    CompilerProfile, DocGenSettings, ExplorerVerificationSettings, GasReporterSettings,
    NetworkProfile, PageGranularity, RootConfiguration, TestRunnerSettings,
};
use std::collections::BTreeMap;

/// Names of the environment variables read during assembly.
pub mod vars {
    /// RPC endpoint for BNB Smart Chain mainnet.
    pub const BNB_MAINNET_URL: &str = "BNB_MAINNET_URL";
    /// RPC endpoint for BNB Smart Chain testnet.
    pub const BNB_TESTNET_URL: &str = "BNB_TESTNET_URL";
    /// Deployer private key, shared by every network.
    pub const PRIVATE_KEY: &str = "PRIVATE_KEY";
    /// Market-data key used by the gas reporter for fiat pricing.
    pub const API_COINMARKETCAP: &str = "API_COINMARKETCAP";
    /// Explorer key, used for both gas-price lookup and verification.
    pub const API_BNB_SCAN: &str = "API_BNB_SCAN";
}

/// Optimizer run target applied to every compiler profile.
pub const OPTIMIZER_RUNS: u32 = 200;

/// Yul optimizer step preset applied to every compiler profile.
pub const OPTIMIZER_STEPS: &str = "u";

/// Default test timeout: ten minutes.
pub const DEFAULT_TEST_TIMEOUT_MILLIS: u64 = 10 * 60 * 1000;

/// Static description of one network: where its secrets come from and which
/// chain it targets.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct NetworkSpec {
    /// Network name used as the configuration key.
    pub name: String,
    /// Variable holding the RPC endpoint.
    pub url_var: String,
    /// Variable holding the signing key.
    pub key_var: String,
    /// Chain identifier.
    pub chain_id: u64,
}

impl NetworkSpec {
    /// Creates a network spec.
    pub fn new(
        name: impl Into<String>,
        url_var: impl Into<String>,
        key_var: impl Into<String>,
        chain_id: u64,
    ) -> Self {
        Self {
            name: name.into(),
            url_var: url_var.into(),
            key_var: key_var.into(),
            chain_id,
        }
    }
}

/// Fixed inputs to assembly that do not come from the environment.
///
/// The default value describes the BNB Smart Chain project layout.
///
/// # Examples
///
/// ```
/// use chaincfg::config::StaticLiterals;
///
/// let literals = StaticLiterals::default();
/// assert_eq!(literals.compiler_versions, vec!["0.8.24".to_string()]);
/// assert_eq!(literals.networks.len(), 2);
/// ```
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct StaticLiterals {
    /// Supported compiler versions, in profile order.
    pub compiler_versions: Vec<String>,
    /// Networks to configure.
    pub networks: Vec<NetworkSpec>,
    /// Test timeout in milliseconds.
    pub test_timeout_millis: u64,
    /// Documentation output directory.
    pub docs_output_dir: String,
    /// Documentation page granularity.
    pub page_granularity: PageGranularity,
    /// Gas reporter on/off.
    pub gas_reporter_enabled: bool,
    /// Fiat currency for gas estimates.
    pub gas_currency: String,
    /// Native token ticker for gas estimates.
    pub gas_token: String,
    /// Variable holding the gas reporter's market-data key.
    pub pricing_key_var: String,
    /// Variable holding the explorer key.
    pub explorer_key_var: String,
    /// Explorer network name the explorer key is registered under.
    pub explorer_network: String,
}

impl Default for StaticLiterals {
    fn default() -> Self {
        Self {
            compiler_versions: vec!["0.8.24".to_string()],
            networks: vec![
                NetworkSpec::new("bnb", vars::BNB_MAINNET_URL, vars::PRIVATE_KEY, 56),
                NetworkSpec::new("bnbtest", vars::BNB_TESTNET_URL, vars::PRIVATE_KEY, 97),
            ],
            test_timeout_millis: DEFAULT_TEST_TIMEOUT_MILLIS,
            docs_output_dir: "./docs".to_string(),
            page_granularity: PageGranularity::PerFile,
            gas_reporter_enabled: true,
            gas_currency: "USD".to_string(),
            gas_token: "BNB".to_string(),
            pricing_key_var: vars::API_COINMARKETCAP.to_string(),
            explorer_key_var: vars::API_BNB_SCAN.to_string(),
            explorer_network: "bsc".to_string(),
        }
    }
}

impl StaticLiterals {
    /// Looks up a network spec by name.
    #[must_use]
    pub fn network(&self, name: &str) -> Option<&NetworkSpec> {
        self.networks.iter().find(|spec| spec.name == name)
    }

    /// Every variable assembly reads, with the field it feeds, in a stable
    /// order and without repeats of the same (variable, consumer) pair.
    #[must_use]
    pub fn consumed_variables(&self) -> Vec<(String, String)> {
        let mut out: Vec<(String, String)> = Vec::new();
        let mut push = |var: &str, consumer: String| {
            if !out.iter().any(|(v, c)| v == var && *c == consumer) {
                out.push((var.to_string(), consumer));
            }
        };

        for spec in &self.networks {
            push(&spec.url_var, format!("networks.{}.url", spec.name));
            push(&spec.key_var, format!("networks.{}.accounts", spec.name));
        }
        push(&self.pricing_key_var, "gasReporter.coinmarketcap".to_string());
        push(&self.explorer_key_var, "gasReporter.gasPriceApi".to_string());
        push(
            &self.explorer_key_var,
            format!("etherscan.apiKey.{}", self.explorer_network),
        );

        out
    }
}

/// Builds a [`RootConfiguration`] from an environment snapshot.
///
/// # Examples
///
/// ```
/// use chaincfg::config::{ConfigAssembler, EnvironmentSnapshot, StaticLiterals};
///
/// let env = EnvironmentSnapshot::from_pairs([
///     ("BNB_MAINNET_URL", "https://x"),
///     ("PRIVATE_KEY", "abc"),
/// ]);
/// let literals = StaticLiterals::default();
/// let config = ConfigAssembler::new(&env, &literals).assemble();
///
/// let bnb = &config.networks["bnb"];
/// assert_eq!(bnb.rpc_url, "https://x");
/// assert_eq!(bnb.account_keys, vec!["abc".to_string()]);
/// assert_eq!(bnb.chain_id, 56);
/// ```
pub struct ConfigAssembler<'a> {
    env: &'a EnvironmentSnapshot,
    literals: &'a StaticLiterals,
}

impl<'a> ConfigAssembler<'a> {
    /// Creates an assembler over the given inputs.
    #[must_use]
    pub const fn new(env: &'a EnvironmentSnapshot, literals: &'a StaticLiterals) -> Self {
        Self { env, literals }
    }

    /// Reads a secret, yielding an empty string when the variable is unset.
    #[must_use]
    pub fn load_secret(&self, name: &str) -> String {
        match self.env.get(name) {
            Some(value) => value.to_string(),
            None => {
                log::debug!("{name} is not set; leaving it empty");
                String::new()
            }
        }
    }

    /// Reads a secret that stays undefined when the variable is unset.
    #[must_use]
    pub fn load_optional_secret(&self, name: &str) -> Option<String> {
        let value = self.env.get(name).map(str::to_string);
        if value.is_none() {
            log::debug!("{name} is not set; leaving it undefined");
        }
        value
    }

    /// Maps each version to a profile with the shared optimizer template.
    ///
    /// Order follows the input; duplicates are kept.
    #[must_use]
    pub fn build_compiler_profiles<S: AsRef<str>>(versions: &[S]) -> Vec<CompilerProfile> {
        versions
            .iter()
            .map(|version| CompilerProfile {
                version: version.as_ref().to_string(),
                optimizer_enabled: true,
                optimizer_runs: OPTIMIZER_RUNS,
                via_ir: true,
                extra_optimizer_detail: OPTIMIZER_STEPS.to_string(),
            })
            .collect()
    }

    /// Pairs a network's endpoint and key with its chain id.
    ///
    /// The account list always holds exactly one entry, empty if the key is
    /// unset.
    #[must_use]
    pub fn build_network_profile(
        &self,
        name: &str,
        url_var: &str,
        key_var: &str,
        chain_id: u64,
    ) -> NetworkProfile {
        NetworkProfile {
            name: name.to_string(),
            rpc_url: self.load_secret(url_var),
            account_keys: vec![self.load_secret(key_var)],
            chain_id,
        }
    }

    /// Assembles the complete configuration.
    #[must_use]
    pub fn assemble(&self) -> RootConfiguration {
        let literals = self.literals;

        let networks: BTreeMap<String, NetworkProfile> = literals
            .networks
            .iter()
            .map(|spec| {
                let profile =
                    self.build_network_profile(&spec.name, &spec.url_var, &spec.key_var, spec.chain_id);
                (spec.name.clone(), profile)
            })
            .collect();

        let explorer_key = self.load_secret(&literals.explorer_key_var);
        let mut api_keys_by_network = BTreeMap::new();
        api_keys_by_network.insert(literals.explorer_network.clone(), explorer_key);

        let config = RootConfiguration {
            compilers: Self::build_compiler_profiles(&literals.compiler_versions),
            networks,
            test_runner: TestRunnerSettings {
                timeout_millis: literals.test_timeout_millis,
            },
            docgen: DocGenSettings {
                output_dir: literals.docs_output_dir.clone(),
                page_granularity: literals.page_granularity,
            },
            gas_reporter: GasReporterSettings {
                enabled: literals.gas_reporter_enabled,
                currency: literals.gas_currency.clone(),
                reference_token: literals.gas_token.clone(),
                pricing_api_key: self.load_optional_secret(&literals.pricing_key_var),
                gas_price_api_key: self.load_optional_secret(&literals.explorer_key_var),
            },
            explorer: ExplorerVerificationSettings {
                api_keys_by_network,
            },
        };

        log::debug!(
            "assembled {} compiler profile(s) and {} network(s)",
            config.compilers.len(),
            config.networks.len()
        );

        config
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn assemble(env: &EnvironmentSnapshot) -> RootConfiguration {
        ConfigAssembler::new(env, &StaticLiterals::default()).assemble()
    }

    #[test]
    fn test_build_compiler_profiles_single() {
        let profiles = ConfigAssembler::build_compiler_profiles(&["0.8.24"]);
        assert_eq!(profiles.len(), 1);
        assert_eq!(profiles[0].version, "0.8.24");
        assert!(profiles[0].optimizer_enabled);
        assert_eq!(profiles[0].optimizer_runs, 200);
        assert!(profiles[0].via_ir);
        assert_eq!(profiles[0].extra_optimizer_detail, "u");
    }

    #[test]
    fn test_build_compiler_profiles_empty() {
        let versions: [&str; 0] = [];
        assert!(ConfigAssembler::build_compiler_profiles(&versions).is_empty());
    }

    #[test]
    fn test_build_compiler_profiles_keeps_order_and_duplicates() {
        let profiles = ConfigAssembler::build_compiler_profiles(&["0.8.24", "0.7.6", "0.8.24"]);
        let versions: Vec<_> = profiles.iter().map(|p| p.version.as_str()).collect();
        assert_eq!(versions, vec!["0.8.24", "0.7.6", "0.8.24"]);
    }

    #[test]
    fn test_load_secret_absent_is_empty() {
        let env = EnvironmentSnapshot::new();
        let literals = StaticLiterals::default();
        let assembler = ConfigAssembler::new(&env, &literals);
        assert_eq!(assembler.load_secret(vars::PRIVATE_KEY), "");
        assert_eq!(assembler.load_optional_secret(vars::API_COINMARKETCAP), None);
    }

    #[test]
    fn test_load_optional_secret_keeps_empty_string() {
        let env = EnvironmentSnapshot::from_pairs([(vars::API_COINMARKETCAP, "")]);
        let literals = StaticLiterals::default();
        let assembler = ConfigAssembler::new(&env, &literals);
        assert_eq!(
            assembler.load_optional_secret(vars::API_COINMARKETCAP),
            Some(String::new())
        );
    }

    #[test]
    fn test_mainnet_profile_from_env() {
        let env = EnvironmentSnapshot::from_pairs([
            (vars::BNB_MAINNET_URL, "https://x"),
            (vars::PRIVATE_KEY, "abc"),
        ]);
        let config = assemble(&env);

        let bnb = &config.networks["bnb"];
        assert_eq!(bnb.name, "bnb");
        assert_eq!(bnb.rpc_url, "https://x");
        assert_eq!(bnb.account_keys, vec!["abc".to_string()]);
        assert_eq!(bnb.chain_id, 56);
    }

    #[test]
    fn test_missing_private_key_is_single_empty_entry() {
        let config = assemble(&EnvironmentSnapshot::new());
        for network in config.networks.values() {
            assert_eq!(network.account_keys, vec![String::new()]);
        }
    }

    #[test]
    fn test_private_key_shared_by_both_networks() {
        let env = EnvironmentSnapshot::from_pairs([(vars::PRIVATE_KEY, "k")]);
        let config = assemble(&env);
        assert_eq!(config.networks["bnb"].account_keys, vec!["k".to_string()]);
        assert_eq!(config.networks["bnbtest"].account_keys, vec!["k".to_string()]);
    }

    #[test]
    fn test_testnet_profile() {
        let env = EnvironmentSnapshot::from_pairs([(vars::BNB_TESTNET_URL, "https://t")]);
        let config = assemble(&env);
        let test = &config.networks["bnbtest"];
        assert_eq!(test.rpc_url, "https://t");
        assert_eq!(test.chain_id, 97);
        assert_eq!(config.networks["bnb"].rpc_url, "");
    }

    #[test]
    fn test_fixed_settings() {
        let config = assemble(&EnvironmentSnapshot::new());
        assert_eq!(config.test_runner.timeout_millis, 600_000);
        assert_eq!(config.docgen.output_dir, "./docs");
        assert_eq!(config.docgen.page_granularity, PageGranularity::PerFile);
        assert!(config.gas_reporter.enabled);
        assert_eq!(config.gas_reporter.currency, "USD");
        assert_eq!(config.gas_reporter.reference_token, "BNB");
        assert_eq!(config.compilers.len(), 1);
    }

    #[test]
    fn test_explorer_key_single_source() {
        let env = EnvironmentSnapshot::from_pairs([(vars::API_BNB_SCAN, "scan-key")]);
        let config = assemble(&env);
        assert_eq!(
            config.gas_reporter.gas_price_api_key.as_deref(),
            Some("scan-key")
        );
        assert_eq!(config.explorer.api_keys_by_network["bsc"], "scan-key");
    }

    #[test]
    fn test_missing_explorer_key() {
        let config = assemble(&EnvironmentSnapshot::new());
        assert_eq!(config.gas_reporter.gas_price_api_key, None);
        assert_eq!(config.gas_reporter.pricing_api_key, None);
        assert_eq!(config.explorer.api_keys_by_network["bsc"], "");
    }

    #[test]
    fn test_assemble_is_idempotent() {
        let env = EnvironmentSnapshot::from_pairs([
            (vars::PRIVATE_KEY, "abc"),
            (vars::API_BNB_SCAN, "scan"),
        ]);
        let literals = StaticLiterals::default();
        let assembler = ConfigAssembler::new(&env, &literals);
        assert_eq!(assembler.assemble(), assembler.assemble());
    }

    #[test]
    fn test_custom_literals() {
        let literals = StaticLiterals {
            compiler_versions: vec!["0.8.20".into(), "0.8.24".into()],
            networks: vec![NetworkSpec::new("local", "LOCAL_URL", "LOCAL_KEY", 31337)],
            ..StaticLiterals::default()
        };
        let env = EnvironmentSnapshot::from_pairs([("LOCAL_URL", "http://127.0.0.1:8545")]);
        let config = ConfigAssembler::new(&env, &literals).assemble();

        assert_eq!(config.compilers.len(), 2);
        assert_eq!(config.networks.len(), 1);
        assert_eq!(config.networks["local"].rpc_url, "http://127.0.0.1:8545");
        assert_eq!(config.networks["local"].chain_id, 31337);
    }

    #[test]
    fn test_consumed_variables() {
        let vars_list = StaticLiterals::default().consumed_variables();
        let names: Vec<_> = vars_list.iter().map(|(v, _)| v.as_str()).collect();
        assert_eq!(
            names,
            vec![
                vars::BNB_MAINNET_URL,
                vars::PRIVATE_KEY,
                vars::BNB_TESTNET_URL,
                vars::PRIVATE_KEY,
                vars::API_COINMARKETCAP,
                vars::API_BNB_SCAN,
                vars::API_BNB_SCAN,
            ]
        );
        assert!(vars_list
            .iter()
            .any(|(v, c)| v == vars::API_BNB_SCAN && c == "etherscan.apiKey.bsc"));
    }

    #[test]
    fn test_literals_network_lookup() {
        let literals = StaticLiterals::default();
        assert_eq!(literals.network("bnbtest").map(|n| n.chain_id), Some(97));
        assert!(literals.network("eth").is_none());
    }
}
