//! Catalog command integration tests

use assert_cmd::prelude::*;
use predicates::prelude::*;
use std::process::Command;
use tempfile::TempDir;

fn sgal(home: &TempDir) -> Command {
    let mut cmd = Command::cargo_bin("sgal").unwrap();
    cmd.env("HOME", home.path())
        .env("SGAL_DATA_DIR", home.path().join("data"))
        .env_remove("SGAL_PORTAL_URL");
    cmd
}

#[test]
fn test_list_simple_shows_qualified_names() {
    let home = TempDir::new().unwrap();
    sgal(&home)
        .args(["list", "--simple"])
        .assert()
        .success()
        .stdout(predicate::str::contains("GeometryEngine/Convex Hull"))
        .stdout(predicate::str::contains("Layers/WMTS Layer"));
}

#[test]
fn test_list_unknown_category_reports_no_match() {
    let home = TempDir::new().unwrap();
    sgal(&home)
        .args(["list", "--simple", "-c", "Nonexistent"])
        .assert()
        .success()
        .stdout(predicate::str::contains("No samples matched"));
}

#[test]
fn test_search_prints_filtered_tree() {
    let home = TempDir::new().unwrap();
    sgal(&home)
        .args(["search", "convex"])
        .assert()
        .success()
        .stdout(predicate::str::contains("Convex Hull"))
        .stdout(predicate::str::contains("WMTS").not());
}

#[test]
fn test_search_without_match() {
    let home = TempDir::new().unwrap();
    sgal(&home)
        .args(["search", "zzzz-no-such-sample"])
        .assert()
        .success()
        .stdout(predicate::str::contains("No samples matched"));
}

#[test]
fn test_info_json() {
    let home = TempDir::new().unwrap();
    sgal(&home)
        .args(["info", "Convex Hull", "-f", "json"])
        .assert()
        .success()
        .stdout(predicate::str::contains("\"name\": \"Convex Hull\""))
        .stdout(predicate::str::contains("\"category\": \"GeometryEngine\""));
}

#[test]
fn test_run_sample_without_offline_data() {
    let home = TempDir::new().unwrap();
    sgal(&home)
        .args(["run", "geometryengine/convex hull"])
        .assert()
        .success()
        .stdout(predicate::str::contains("Hull vertices"));
}

#[test]
fn test_run_missing_offline_data_with_skip_data_fails() {
    let home = TempDir::new().unwrap();
    sgal(&home)
        .args(["run", "Edit and Sync Features", "--skip-data"])
        .assert()
        .failure()
        .stderr(predicate::str::contains("offline data not found"));
}

#[test]
fn test_run_unknown_sample_fails() {
    let home = TempDir::new().unwrap();
    sgal(&home)
        .args(["run", "No Such Sample"])
        .assert()
        .failure()
        .stderr(predicate::str::contains("No Such Sample"));
}
