//! Build script for chaincfg-cli.
//!
//! This script generates man pages at build time using clap_mangen.
//! The generated man page is placed in OUT_DIR for inclusion in release builds.
//!
//! Note: We build a minimal command structure here rather than importing from
//! the main crate, since build scripts cannot depend on the crate being built.

use clap::{Arg, Command};
use clap_mangen::Man;
use std::fs;
use std::path::PathBuf;

/// Build the CLI command structure for man page generation.
///
/// IMPORTANT: Keep this structure synchronized with src/cli.rs
/// When adding/removing/modifying commands, update both files.
fn build_cli() -> Command {
    Command::new("chaincfg")
        .version(env!("CARGO_PKG_VERSION"))
        .about("Assemble and check smart-contract toolchain configuration")
        .long_about(
            "Command-line tool for assembling, inspecting and checking the configuration \
             consumed by a smart-contract build, test and deploy toolchain",
        )
        .arg(
            Arg::new("verbose")
                .long("verbose")
                .help("Enable verbose output")
                .global(true)
                .action(clap::ArgAction::SetTrue),
        )
        .arg(
            Arg::new("quiet")
                .long("quiet")
                .help("Suppress non-essential output")
                .global(true)
                .action(clap::ArgAction::SetTrue),
        )
        .arg(
            Arg::new("dir")
                .long("dir")
                .help("Project directory searched for a .env file")
                .value_name("PATH")
                .global(true),
        )
        .arg(
            Arg::new("env-file")
                .long("env-file")
                .help("Read variables from this file instead of <dir>/.env")
                .value_name("PATH")
                .global(true)
                .env("CHAINCFG_ENV_FILE"),
        )
        .arg(
            Arg::new("no-env-file")
                .long("no-env-file")
                .help("Do not read any .env file")
                .global(true)
                .action(clap::ArgAction::SetTrue),
        )
        .subcommands(vec![
            Command::new("show")
                .about("Print the assembled configuration")
                .long_about("Print the assembled configuration with secrets masked"),
            Command::new("check")
                .about("Validate the configuration and report missing secrets")
                .long_about(
                    "Validate the configuration and list the secrets a toolchain task would miss",
                ),
            Command::new("networks")
                .about("List configured networks")
                .long_about("Show each network's chain id and whether its secrets are set"),
            Command::new("vars")
                .about("List the environment variables the configuration reads")
                .long_about("Show each consumed variable, its status and the field it feeds"),
            Command::new("completions")
                .about("Generate shell completion scripts")
                .long_about("Generate shell completion scripts for bash, zsh, fish, or PowerShell"),
        ])
}

fn main() {
    // Generate man pages at build time
    let out_dir = PathBuf::from(std::env::var("OUT_DIR").unwrap());
    let man_dir = out_dir.join("man");
    fs::create_dir_all(&man_dir).unwrap();

    let app = build_cli();
    let man = Man::new(app);
    let mut buffer = Vec::new();
    man.render(&mut buffer).unwrap();

    fs::write(man_dir.join("chaincfg.1"), buffer).unwrap();

    println!("cargo:rerun-if-changed=src/cli.rs");
    println!("cargo:rerun-if-changed=src/commands/");
}
