use assert_cmd::Command;
use predicates::prelude::*;
use std::fs;

fn fixture(name: &str) -> String {
    format!("{}/tests/fixtures/{name}", env!("CARGO_MANIFEST_DIR"))
}

fn guidegen() -> Command {
    Command::cargo_bin("guidegen").unwrap()
}

#[test]
fn validate_clean_spec_succeeds() {
    guidegen()
        .args(["validate", &fixture("financial_crm.yml")])
        .assert()
        .success()
        .stdout(predicate::str::contains("All validations passed"));
}

#[test]
fn validate_reports_warnings_without_failing() {
    guidegen()
        .args(["validate", &fixture("payment_api.yml")])
        .assert()
        .success()
        .stdout(predicate::str::contains("warning"))
        .stdout(predicate::str::contains("compliance.tenantIsolation"));
}

#[test]
fn validate_fails_on_fatal_findings() {
    let dir = tempfile::tempdir().unwrap();
    let path = dir.path().join("broken.yml");
    let mut content = fs::read_to_string(fixture("validation_library.yml")).unwrap();
    content = content.replace("systemSubType: utility", "systemSubType: rest-api");
    fs::write(&path, content).unwrap();

    guidegen()
        .args(["validate", path.to_str().unwrap()])
        .assert()
        .failure()
        .stdout(predicate::str::contains("systemSubType"))
        .stderr(predicate::str::contains("fatal finding"));
}

#[test]
fn validate_fails_on_malformed_yaml() {
    let dir = tempfile::tempdir().unwrap();
    let path = dir.path().join("garbage.yml");
    fs::write(&path, "projectName: [unclosed").unwrap();

    guidegen()
        .args(["validate", path.to_str().unwrap()])
        .assert()
        .failure()
        .stderr(predicate::str::contains("Structural validation failed"));
}

#[test]
fn validate_rejects_unknown_extension() {
    let dir = tempfile::tempdir().unwrap();
    let path = dir.path().join("spec.toml");
    fs::write(&path, "x = 1").unwrap();

    guidegen()
        .args(["validate", path.to_str().unwrap()])
        .assert()
        .failure()
        .stderr(predicate::str::contains("Unsupported spec file extension"));
}

#[test]
fn inspect_prints_parsed_model() {
    guidegen()
        .args(["inspect", &fixture("order_worker.yml")])
        .assert()
        .success()
        .stdout(predicate::str::contains("ProjectSpec"));
}

#[test]
fn inspect_normalized_prints_canonical_model() {
    guidegen()
        .args(["inspect", &fixture("financial_crm.yml"), "--normalized"])
        .assert()
        .success()
        .stdout(predicate::str::contains("NormalizedProject"));
}

#[test]
fn validate_accepts_json_input() {
    let spec = guidegen::models::ProjectSpec::from_yaml(
        &fs::read_to_string(fixture("order_worker.yml")).unwrap(),
    )
    .unwrap();

    let dir = tempfile::tempdir().unwrap();
    let path = dir.path().join("spec.json");
    fs::write(&path, serde_json::to_string_pretty(&spec).unwrap()).unwrap();

    guidegen()
        .args(["validate", path.to_str().unwrap()])
        .assert()
        .success()
        .stdout(predicate::str::contains("All validations passed"));
}
