//! Command-line tests for the css-splitter binary.

use std::fs;
use std::path::{Path, PathBuf};

use assert_cmd::Command;
use predicates::prelude::*;
use tempfile::tempdir;

fn fixture_path(name: &str) -> PathBuf {
    Path::new(env!("CARGO_MANIFEST_DIR"))
        .join("tests")
        .join("fixtures")
        .join(name)
}

fn splitter() -> Command {
    Command::cargo_bin("css-splitter").unwrap()
}

#[test]
fn test_cli_help() {
    splitter()
        .arg("--help")
        .assert()
        .success()
        .stdout(predicate::str::contains("Usage:"))
        .stdout(predicate::str::contains("split"));
}

#[test]
fn test_cli_default_reports_styles_css() {
    let dir = tempdir().unwrap();
    fs::write(
        dir.path().join("styles.css"),
        "a /* Base Reset */ b /* Container */ c",
    )
    .unwrap();

    splitter()
        .current_dir(dir.path())
        .assert()
        .success()
        .stdout("Found 5 sections\n\n1: /* Base Reset */\n3: /* Container */\n");
}

#[test]
fn test_cli_missing_input_fails() {
    let dir = tempdir().unwrap();

    splitter()
        .current_dir(dir.path())
        .arg("report")
        .assert()
        .failure()
        .code(1)
        .stderr(predicate::str::contains("Error: Failed to read styles.css"));
}

#[test]
fn test_cli_report_fixture() {
    splitter()
        .args(["report", "--input"])
        .arg(fixture_path("styles.css"))
        .assert()
        .success()
        .stdout(predicate::str::starts_with("Found 25 sections\n\n"))
        .stdout(predicate::str::contains("19: /* Modal */"))
        .stdout(predicate::str::contains("Footer").not());
}

#[test]
fn test_cli_report_lexer() {
    splitter()
        .args(["report", "--lexer", "--input"])
        .arg(fixture_path("styles.css"))
        .assert()
        .success()
        .stdout(predicate::str::starts_with("Found 27 sections\n"));
}

#[test]
fn test_cli_classify() {
    splitter()
        .env("NO_COLOR", "1")
        .args(["classify", "--input"])
        .arg(fixture_path("styles.css"))
        .assert()
        .success()
        .stdout(predicate::str::contains(
            "1: /* Base Reset */ -> css/base/reset.css",
        ))
        .stdout(predicate::str::contains("/* Print Styles */ -> unclassified"))
        .stdout(predicate::str::contains("12 headers, 1 unclassified"));
}

#[test]
fn test_cli_classify_invalid_mapping() {
    let dir = tempdir().unwrap();
    let mapping = dir.path().join("mapping.yaml");
    fs::write(
        &mapping,
        "mappings:\n  - pattern: '(broken'\n    destination: a.css\n",
    )
    .unwrap();

    splitter()
        .args(["classify", "--input"])
        .arg(fixture_path("styles.css"))
        .arg("--mapping")
        .arg(&mapping)
        .assert()
        .failure()
        .stderr(predicate::str::contains("Invalid mapping pattern '(broken'"));
}

#[test]
fn test_cli_split_dry_run_writes_nothing() {
    let dir = tempdir().unwrap();
    let out = dir.path().join("out");

    splitter()
        .env("NO_COLOR", "1")
        .args(["split", "--dry-run", "--input"])
        .arg(fixture_path("styles.css"))
        .arg("--output")
        .arg(&out)
        .assert()
        .success()
        .stdout(predicate::str::contains("into 12 files"))
        .stdout(predicate::str::contains("css/layout/footer.css (1 sections"));

    assert!(!out.exists());
}

#[test]
fn test_cli_split_writes_files() {
    let dir = tempdir().unwrap();
    let out = dir.path().join("out");

    splitter()
        .args(["split", "--input"])
        .arg(fixture_path("styles.css"))
        .arg("--output")
        .arg(&out)
        .arg("--mapping")
        .arg(fixture_path("mapping.yaml"))
        .assert()
        .success()
        .stdout(predicate::str::contains("Wrote:"));

    assert!(out.join("css/layout.css").is_file());
    assert!(out.join("css/components.css").is_file());
    assert!(out.join("css/other.css").is_file());
}

#[test]
fn test_cli_split_output_is_file() {
    let dir = tempdir().unwrap();
    let out = dir.path().join("not-a-dir");
    fs::write(&out, "").unwrap();

    splitter()
        .args(["split", "--input"])
        .arg(fixture_path("styles.css"))
        .arg("--output")
        .arg(&out)
        .assert()
        .failure()
        .stderr(predicate::str::contains("Error: Output path is not a directory"))
        .stderr(predicate::str::contains("IO error").not());
}

#[test]
fn test_cli_missing_mapping_names_file() {
    let dir = tempdir().unwrap();

    splitter()
        .args(["classify", "--input"])
        .arg(fixture_path("styles.css"))
        .arg("--mapping")
        .arg(dir.path().join("absent-mapping.yaml"))
        .assert()
        .failure()
        .code(1)
        .stderr(predicate::str::contains("Failed to read mapping file"))
        .stderr(predicate::str::contains("absent-mapping.yaml"));
}
