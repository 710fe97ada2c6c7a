//! CLI help output integration tests

use assert_cmd::prelude::*;
use predicates::prelude::*;
use std::process::Command;

#[test]
fn test_root_help() {
    Command::cargo_bin("sgal")
        .unwrap()
        .arg("--help")
        .assert()
        .success()
        .stdout(predicate::str::contains("Sample Gallery CLI"))
        .stdout(predicate::str::contains("browse"));
}

#[test]
fn test_list_help() {
    Command::cargo_bin("sgal")
        .unwrap()
        .args(["list", "--help"])
        .assert()
        .success()
        .stdout(predicate::str::contains("OUTPUT FORMATS"));
}

#[test]
fn test_search_help() {
    Command::cargo_bin("sgal")
        .unwrap()
        .args(["search", "--help"])
        .assert()
        .success()
        .stdout(predicate::str::contains("MATCHING"));
}

#[test]
fn test_info_help() {
    Command::cargo_bin("sgal")
        .unwrap()
        .args(["info", "--help"])
        .assert()
        .success()
        .stdout(predicate::str::contains("SECTIONS DISPLAYED"));
}

#[test]
fn test_run_help() {
    Command::cargo_bin("sgal")
        .unwrap()
        .args(["run", "--help"])
        .assert()
        .success()
        .stdout(predicate::str::contains("--skip-data"));
}

#[test]
fn test_browse_help() {
    Command::cargo_bin("sgal")
        .unwrap()
        .args(["browse", "--help"])
        .assert()
        .success()
        .stdout(predicate::str::contains("KEYS"));
}
