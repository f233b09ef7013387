//! Show command implementation.
//!
//! Prints the assembled configuration. Secrets are masked unless
//! `--reveal-secrets` is given.

use crate::error::CliError;
use crate::utils::{load_configuration, GlobalOptions};
use chaincfg::OutputFormat;
use clap::{Args, ValueEnum};

/// Print the assembled configuration.
#[derive(Args)]
pub struct ShowCommand {
    /// Output format
    #[arg(
        long,
        value_enum,
        default_value = "human",
        env = "CHAINCFG_OUTPUT_FORMAT",
        ignore_case = true
    )]
    pub format: ShowFormat,

    /// Print secrets in clear text
    #[arg(long)]
    pub reveal_secrets: bool,
}

/// Output format for the show command.
#[derive(Clone, Copy, ValueEnum)]
#[value(rename_all = "lowercase")]
pub enum ShowFormat {
    /// Human-readable summary
    Human,
    /// JSON dump of the configuration
    Json,
    /// YAML dump of the configuration
    Yaml,
    /// JSON in the toolchain's configuration layout
    Toolchain,
}

impl From<ShowFormat> for OutputFormat {
    fn from(format: ShowFormat) -> Self {
        match format {
            ShowFormat::Human => OutputFormat::Human,
            ShowFormat::Json => OutputFormat::Json,
            ShowFormat::Yaml => OutputFormat::Yaml,
            ShowFormat::Toolchain => OutputFormat::Toolchain,
        }
    }
}

impl ShowCommand {
    /// Execute the show command.
    pub fn execute(self, global: &GlobalOptions) -> Result<(), CliError> {
        let (config, _) = load_configuration(global)?;

        let config = if self.reveal_secrets {
            log::warn!("printing secrets in clear text");
            config
        } else {
            config.redacted()
        };

        let formatter = OutputFormat::from(self.format).create_formatter();
        let output = formatter.format(&config)?;
        println!("{}", output.trim_end());

        Ok(())
    }
}
