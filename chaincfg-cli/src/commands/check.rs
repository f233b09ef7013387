//! Check command implementation.
//!
//! Runs structural validation, then reports which secrets a toolchain task
//! would find missing. Exits with status 1 when any are missing.

use crate::error::CliError;
use crate::utils::{load_configuration, GlobalOptions};
use chaincfg::{ConfigValidator, ToolchainTask};
use clap::{Args, ValueEnum};

/// Validate the configuration and report missing secrets.
#[derive(Args)]
pub struct CheckCommand {
    /// Task whose secrets should be checked
    #[arg(long, value_enum, default_value = "compile", ignore_case = true)]
    pub task: TaskArg,

    /// Network to deploy to (required with --task deploy)
    #[arg(long, value_name = "NAME")]
    pub network: Option<String>,
}

/// Toolchain task selector.
#[derive(Clone, Copy, ValueEnum)]
#[value(rename_all = "kebab-case")]
pub enum TaskArg {
    /// Compile contracts
    Compile,
    /// Run tests
    Test,
    /// Deploy to a network
    Deploy,
    /// Verify sources on the block explorer
    Verify,
    /// Produce a gas report
    GasReport,
}

impl CheckCommand {
    /// Execute the check command.
    pub fn execute(self, global: &GlobalOptions) -> Result<(), CliError> {
        let task = self.resolve_task()?;
        let (config, literals) = load_configuration(global)?;

        for version in ConfigValidator::duplicate_compiler_versions(&config) {
            log::warn!("compiler version {version} is listed more than once");
        }

        let missing = ConfigValidator::missing_secrets(&config, &literals, &task)?;
        if missing.is_empty() {
            if !global.quiet {
                println!("Configuration is ready for {task}");
            }
            return Ok(());
        }

        for secret in &missing {
            println!("missing: {secret}");
        }

        Err(CliError::SemanticFailure(format!(
            "{} secret(s) missing for {task}",
            missing.len()
        )))
    }

    fn resolve_task(&self) -> Result<ToolchainTask, CliError> {
        if self.network.is_some() && !matches!(self.task, TaskArg::Deploy) {
            return Err(CliError::InvalidArguments(
                "--network is only valid with --task deploy".to_string(),
            ));
        }

        Ok(match self.task {
            TaskArg::Compile => ToolchainTask::Compile,
            TaskArg::Test => ToolchainTask::Test,
            TaskArg::Verify => ToolchainTask::Verify,
            TaskArg::GasReport => ToolchainTask::GasReport,
            TaskArg::Deploy => {
                let network = self.network.clone().ok_or_else(|| {
                    CliError::InvalidArguments("--task deploy requires --network".to_string())
                })?;
                ToolchainTask::Deploy(network)
            }
        })
    }
}
