//! CLI command implementations.
//!
//! This module contains the implementations of all CLI commands:
//! - `show`: Print the assembled configuration
//! - `check`: Validate the configuration and report missing secrets
//! - `networks`: List configured networks
//! - `vars`: List the environment variables the configuration reads
//! - `completions`: Generate shell completion scripts

pub mod check;
pub mod completions;
pub mod networks;
pub mod show;
pub mod vars;

pub use check::CheckCommand;
pub use completions::CompletionsCommand;
pub use networks::NetworksCommand;
pub use show::ShowCommand;
pub use vars::VarsCommand;
