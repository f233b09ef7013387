//! Integration tests for the `check` command.

mod common;

use common::TestEnv;
use predicates::prelude::*;

#[test]
fn test_check_compile_needs_no_secrets() {
    TestEnv::new()
        .command()
        .arg("check")
        .assert()
        .success()
        .stdout(predicate::str::contains("Configuration is ready for compile"));
}

#[test]
fn test_check_deploy_lists_missing_secrets() {
    TestEnv::new()
        .command()
        .args(["check", "--task", "deploy", "--network", "bnb"])
        .assert()
        .code(1)
        .stdout(predicate::str::contains("missing: BNB_MAINNET_URL (networks.bnb.url)"))
        .stdout(predicate::str::contains("missing: PRIVATE_KEY (networks.bnb.accounts)"))
        .stderr(predicate::str::contains("2 secret(s) missing for deploy to bnb"));
}

#[test]
fn test_check_deploy_ready() {
    TestEnv::fully_configured()
        .command()
        .args(["check", "--task", "deploy", "--network", "bnbtest"])
        .assert()
        .success()
        .stdout(predicate::str::contains("ready for deploy to bnbtest"));
}

#[test]
fn test_check_empty_private_key_counts_as_missing() {
    TestEnv::new()
        .with_var("BNB_TESTNET_URL", "https://t")
        .with_var("PRIVATE_KEY", "")
        .command()
        .args(["check", "--task", "deploy", "--network", "bnbtest"])
        .assert()
        .code(1)
        .stdout(predicate::str::contains("missing: PRIVATE_KEY"))
        .stdout(predicate::str::contains("BNB_TESTNET_URL").not());
}

#[test]
fn test_check_deploy_unknown_network() {
    TestEnv::fully_configured()
        .command()
        .args(["check", "--task", "deploy", "--network", "ethereum"])
        .assert()
        .code(4)
        .stderr(predicate::str::contains("unknown network: ethereum"));
}

#[test]
fn test_check_deploy_requires_network() {
    TestEnv::new()
        .command()
        .args(["check", "--task", "deploy"])
        .assert()
        .code(4)
        .stderr(predicate::str::contains("requires --network"));
}

#[test]
fn test_check_verify() {
    TestEnv::new()
        .command()
        .args(["check", "--task", "verify"])
        .assert()
        .code(1)
        .stdout(predicate::str::contains("missing: API_BNB_SCAN (etherscan.apiKey.bsc)"));

    TestEnv::new()
        .with_var("API_BNB_SCAN", "scan")
        .command()
        .args(["check", "--task", "verify"])
        .assert()
        .success();
}

#[test]
fn test_check_gas_report() {
    TestEnv::new()
        .with_var("API_BNB_SCAN", "scan")
        .command()
        .args(["check", "--task", "gas-report"])
        .assert()
        .code(1)
        .stdout(predicate::str::contains("missing: API_COINMARKETCAP"))
        .stdout(predicate::str::contains("gasPriceApi").not());
}

#[test]
fn test_check_reads_env_file() {
    let env = TestEnv::new();
    env.write_env_file("API_COINMARKETCAP=cmc\nAPI_BNB_SCAN=scan\n");

    env.command()
        .args(["check", "--task", "gas-report"])
        .assert()
        .success();
}

#[test]
fn test_check_quiet_prints_nothing_on_success() {
    TestEnv::new()
        .command()
        .args(["--quiet", "check", "--task", "test"])
        .assert()
        .success()
        .stdout(predicate::str::is_empty());
}

#[test]
fn test_check_verbose_logs_unset_variables() {
    TestEnv::new()
        .command()
        .args(["--verbose", "check"])
        .assert()
        .success()
        .stderr(predicate::str::contains(
            "BNB_MAINNET_URL is not set; leaving it empty",
        ));
}

#[test]
fn test_check_default_verbosity_hides_debug_lines() {
    TestEnv::new()
        .command()
        .arg("check")
        .assert()
        .success()
        .stderr(predicate::str::contains("is not set").not());
}
