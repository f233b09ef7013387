//! Networks command implementation.
//!
//! Lists configured networks with their chain ids and whether their secrets
//! are present. Secret values are never printed.

use crate::error::CliError;
use crate::utils::{load_configuration, presence, GlobalOptions};
use clap::Args;
use std::io::Write;

/// List configured networks.
#[derive(Args)]
pub struct NetworksCommand {}

impl NetworksCommand {
    /// Execute the networks command.
    pub fn execute(self, global: &GlobalOptions) -> Result<(), CliError> {
        let (config, _) = load_configuration(global)?;

        let mut stdout = std::io::stdout().lock();
        writeln!(stdout, "NAME\tCHAIN ID\tURL\tACCOUNT")?;

        for (name, network) in &config.networks {
            let key = network.account_keys.first().map(String::as_str);
            writeln!(
                stdout,
                "{name}\t{}\t{}\t{}",
                network.chain_id,
                presence(Some(network.rpc_url.as_str())),
                presence(key),
            )?;
        }

        Ok(())
    }
}
