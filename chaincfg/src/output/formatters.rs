//! Output formatter implementations.

use serde_json::{json, Map, Value};

use crate::config::RootConfiguration;
use crate::Result;

use super::OutputFormatter;

/// Formatter for a JSON dump of the configuration schema.
pub struct JsonFormatter;

impl OutputFormatter for JsonFormatter {
    fn format(&self, config: &RootConfiguration) -> Result<String> {
        Ok(serde_json::to_string_pretty(config)?)
    }
}

/// Formatter for a YAML dump of the configuration schema.
pub struct YamlFormatter;

impl OutputFormatter for YamlFormatter {
    fn format(&self, config: &RootConfiguration) -> Result<String> {
        Ok(serde_yaml::to_string(config)?)
    }
}

/// Formatter for the toolchain's configuration layout.
///
/// Unset endpoints and gas-reporter keys are omitted, matching how the
/// toolchain sees an undefined variable. An endpoint variable set to the
/// empty string is omitted too, since `rpc_url` holds `""` for both. Account
/// keys and the explorer key are emitted even when empty.
pub struct ToolchainFormatter;

impl ToolchainFormatter {
    /// Build the toolchain layout as a JSON value.
    #[must_use]
    pub fn to_value(config: &RootConfiguration) -> Value {
        let compilers: Vec<Value> = config
            .compilers
            .iter()
            .map(|profile| {
                json!({
                    "version": profile.version,
                    "settings": {
                        "viaIR": profile.via_ir,
                        "optimizer": {
                            "enabled": profile.optimizer_enabled,
                            "details": {
                                "yulDetails": {
                                    "optimizerSteps": profile.extra_optimizer_detail,
                                },
                            },
                            "runs": profile.optimizer_runs,
                        },
                    },
                })
            })
            .collect();

        let mut networks = Map::new();
        for (name, network) in &config.networks {
            let mut entry = Map::new();
            if !network.rpc_url.is_empty() {
                entry.insert("url".into(), json!(network.rpc_url));
            }
            entry.insert("accounts".into(), json!(network.account_keys));
            entry.insert("chainId".into(), json!(network.chain_id));
            networks.insert(name.clone(), Value::Object(entry));
        }

        let gas = &config.gas_reporter;
        let mut gas_reporter = Map::new();
        gas_reporter.insert("enabled".into(), json!(gas.enabled));
        gas_reporter.insert("currency".into(), json!(gas.currency));
        gas_reporter.insert("token".into(), json!(gas.reference_token));
        if let Some(ref key) = gas.pricing_api_key {
            gas_reporter.insert("coinmarketcap".into(), json!(key));
        }
        if let Some(ref key) = gas.gas_price_api_key {
            gas_reporter.insert("gasPriceApi".into(), json!(key));
        }

        json!({
            "solidity": { "compilers": compilers },
            "networks": networks,
            "mocha": { "timeout": config.test_runner.timeout_millis },
            "docgen": {
                "outputDir": config.docgen.output_dir,
                "pages": config.docgen.page_granularity.as_str(),
            },
            "gasReporter": gas_reporter,
            "etherscan": { "apiKey": config.explorer.api_keys_by_network },
        })
    }
}

impl OutputFormatter for ToolchainFormatter {
    fn format(&self, config: &RootConfiguration) -> Result<String> {
        Ok(serde_json::to_string_pretty(&Self::to_value(config))?)
    }
}

/// Formatter for human-readable output.
pub struct HumanFormatter;

impl OutputFormatter for HumanFormatter {
    fn format(&self, config: &RootConfiguration) -> Result<String> {
        let mut lines = vec!["Compilers:".to_string()];
        if config.compilers.is_empty() {
            lines.push("  (none)".to_string());
        }
        for profile in &config.compilers {
            lines.push(format!(
                "  {}: optimizer {} ({} runs), viaIR {}, steps '{}'",
                profile.version,
                on_off(profile.optimizer_enabled),
                profile.optimizer_runs,
                on_off(profile.via_ir),
                profile.extra_optimizer_detail,
            ));
        }

        lines.push("Networks:".to_string());
        for (name, network) in &config.networks {
            lines.push(format!(
                "  {name}: chain {}, url {}, accounts [{}]",
                network.chain_id,
                show(&network.rpc_url),
                network
                    .account_keys
                    .iter()
                    .map(|k| show(k))
                    .collect::<Vec<_>>()
                    .join(", "),
            ));
        }

        lines.push(format!(
            "Tests: timeout {} ms",
            config.test_runner.timeout_millis
        ));
        lines.push(format!(
            "Docs: {} ({})",
            config.docgen.output_dir,
            config.docgen.page_granularity.as_str()
        ));

        let gas = &config.gas_reporter;
        lines.push(format!(
            "Gas reporter: {}, {} / {}, pricing key {}, gas price key {}",
            on_off(gas.enabled),
            gas.currency,
            gas.reference_token,
            show_optional(gas.pricing_api_key.as_deref()),
            show_optional(gas.gas_price_api_key.as_deref()),
        ));

        lines.push("Explorer keys:".to_string());
        for (network, key) in &config.explorer.api_keys_by_network {
            lines.push(format!("  {network}: {}", show(key)));
        }

        Ok(lines.join("\n"))
    }
}

const fn on_off(flag: bool) -> &'static str {
    if flag {
        "on"
    } else {
        "off"
    }
}

fn show(value: &str) -> &str {
    if value.is_empty() {
        "(empty)"
    } else {
        value
    }
}

fn show_optional(value: Option<&str>) -> &str {
    value.map_or("(unset)", show)
}
