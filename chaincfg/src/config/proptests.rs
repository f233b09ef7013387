//! Property-based tests for configuration assembly.

use super::assembler::{vars, ConfigAssembler, StaticLiterals};
use super::environment::EnvironmentSnapshot;
use super::schema::REDACTED;
use super::validator::ConfigValidator;
use proptest::prelude::*;

// Strategy for generating MAJOR.MINOR.PATCH version strings
fn version_strategy() -> impl Strategy<Value = String> {
    (0u32..=1, 0u32..=30, 0u32..=40).prop_map(|(a, b, c)| format!("{a}.{b}.{c}"))
}

// Strategy for generating environments over the variables assembly reads
fn env_strategy() -> impl Strategy<Value = EnvironmentSnapshot> {
    let names = vec![
        vars::BNB_MAINNET_URL,
        vars::BNB_TESTNET_URL,
        vars::PRIVATE_KEY,
        vars::API_COINMARKETCAP,
        vars::API_BNB_SCAN,
    ];
    prop::collection::vec(prop::option::of("[a-zA-Z0-9:/._-]{0,24}"), names.len()).prop_map(
        move |values| {
            EnvironmentSnapshot::from_pairs(
                names
                    .iter()
                    .zip(values)
                    .filter_map(|(name, value)| value.map(|v| (*name, v))),
            )
        },
    )
}

proptest! {
    #![proptest_config(ProptestConfig {
        cases: 512,
        .. ProptestConfig::default()
    })]

    // Every profile carries the shared optimizer template
    #[test]
    fn compiler_profiles_follow_template(versions in prop::collection::vec(version_strategy(), 0..8)) {
        let profiles = ConfigAssembler::build_compiler_profiles(&versions);

        prop_assert_eq!(profiles.len(), versions.len());
        for (profile, version) in profiles.iter().zip(&versions) {
            prop_assert_eq!(&profile.version, version);
            prop_assert!(profile.optimizer_enabled);
            prop_assert_eq!(profile.optimizer_runs, 200);
            prop_assert!(profile.via_ir);
        }
    }

    // Assembly is a pure function of its inputs
    #[test]
    fn assemble_is_idempotent(env in env_strategy()) {
        let literals = StaticLiterals::default();
        let assembler = ConfigAssembler::new(&env, &literals);
        prop_assert_eq!(assembler.assemble(), assembler.assemble());
    }

    // The explorer key feeds both consumers identically
    #[test]
    fn explorer_key_has_single_source(env in env_strategy(), key in "[a-zA-Z0-9]{0,32}") {
        let literals = StaticLiterals::default();
        let env = env.with(vars::API_BNB_SCAN, key.clone());
        let config = ConfigAssembler::new(&env, &literals).assemble();

        prop_assert_eq!(config.gas_reporter.gas_price_api_key.as_deref(), Some(key.as_str()));
        prop_assert_eq!(&config.explorer.api_keys_by_network["bsc"], &key);
    }

    // Every network always has exactly one account entry
    #[test]
    fn networks_have_one_account(env in env_strategy()) {
        let config = ConfigAssembler::new(&env, &StaticLiterals::default()).assemble();
        for network in config.networks.values() {
            prop_assert_eq!(network.account_keys.len(), 1);
        }
    }

    // Default literals always produce a structurally valid configuration
    #[test]
    fn default_literals_always_validate(env in env_strategy()) {
        let config = ConfigAssembler::new(&env, &StaticLiterals::default()).assemble();
        prop_assert!(ConfigValidator::validate(&config).is_ok());
    }

    // Redaction never leaks a non-empty secret
    #[test]
    fn redaction_hides_set_secrets(env in env_strategy()) {
        let config = ConfigAssembler::new(&env, &StaticLiterals::default()).assemble();
        let redacted = config.redacted();

        for network in redacted.networks.values() {
            prop_assert!(network.rpc_url.is_empty() || network.rpc_url == REDACTED);
            for key in &network.account_keys {
                prop_assert!(key.is_empty() || key == REDACTED);
            }
        }
        for key in redacted.explorer.api_keys_by_network.values() {
            prop_assert!(key.is_empty() || key == REDACTED);
        }
    }
}
