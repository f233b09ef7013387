//! Vars command implementation.
//!
//! Lists every environment variable the configuration reads, the field it
//! feeds, and whether it is currently set.

use crate::error::CliError;
use crate::utils::{configuration_builder, presence, GlobalOptions};
use clap::Args;
use std::io::Write;

/// List the environment variables the configuration reads.
#[derive(Args)]
pub struct VarsCommand {
    /// Only list variables that are unset or empty
    #[arg(long)]
    pub missing: bool,
}

impl VarsCommand {
    /// Execute the vars command.
    pub fn execute(self, global: &GlobalOptions) -> Result<(), CliError> {
        let builder = configuration_builder(global);
        let snapshot = builder.snapshot()?;
        let literals = builder.literals();

        let mut stdout = std::io::stdout().lock();
        writeln!(stdout, "VARIABLE\tSTATUS\tCONSUMER")?;

        for (variable, consumer) in literals.consumed_variables() {
            let status = presence(snapshot.get(&variable));
            if self.missing && status == "set" {
                continue;
            }
            writeln!(stdout, "{variable}\t{status}\t{consumer}")?;
        }

        Ok(())
    }
}
