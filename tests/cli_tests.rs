//! CLI interface tests

use assert_cmd::Command;
use predicates::prelude::*;
use std::fs;
use std::path::PathBuf;
use tempfile::TempDir;

fn forms_dir() -> PathBuf {
    PathBuf::from(env!("CARGO_MANIFEST_DIR")).join("forms")
}

fn dynform() -> Command {
    let mut cmd = Command::cargo_bin("dynform").unwrap();
    cmd.env_remove("RUST_LOG")
        .env_remove("DYNFORM_CONFIG")
        .arg("--schema")
        .arg(forms_dir().join("userSchema.json"))
        .arg("--ui-config")
        .arg(forms_dir().join("userUIConfig.json"));
    cmd
}

fn valid_fields(cmd: &mut Command) -> &mut Command {
    cmd.arg("--submit")
        .args(["--field", "username=jane_doe"])
        .args(["--field", "email=jane@example.com"])
        .args(["--field", "password=Secret123!"])
        .args(["--field", "confirmPassword=Secret123!"])
        .args(["--field", "firstName=Jane"])
        .args(["--field", "lastName=Doe"])
        .args(["--field", "age=30"])
        .args(["--field", "country=DE"])
        .args(["--field", "interests=music"])
        .args(["--field", "interests=travel"])
        .args(["--field", "terms=true"])
}

#[test]
fn test_version_flag() {
    let mut cmd = Command::cargo_bin("dynform").unwrap();
    cmd.arg("--version")
        .assert()
        .success()
        .stdout(predicate::str::contains("dynform"));
}

#[test]
fn test_help_flag() {
    let mut cmd = Command::cargo_bin("dynform").unwrap();
    cmd.arg("--help")
        .assert()
        .success()
        .stdout(predicate::str::contains("A CLI tool for rendering HTML forms"));
}

#[test]
fn test_missing_config_error() {
    let mut cmd = Command::cargo_bin("dynform").unwrap();
    cmd.env_remove("RUST_LOG")
        .arg("--config")
        .arg("nonexistent.yaml")
        .assert()
        .failure()
        .code(1) // Configuration error
        .stderr(predicate::str::contains("Configuration file not found"));
}

#[test]
fn test_render_fields_fragment() {
    dynform()
        .assert()
        .success()
        .stdout(predicate::str::starts_with("<div class=\"form-container\">"))
        .stdout(predicate::str::contains("<label for=\"username\" class=\"field-label required\">"))
        .stdout(predicate::str::contains("id=\"strength-password\""))
        .stdout(predicate::str::contains("<!DOCTYPE html>").not());
}

#[test]
fn test_render_full_page() {
    dynform()
        .arg("--page")
        .assert()
        .success()
        .stdout(predicate::str::contains("<!DOCTYPE html>"))
        .stdout(predicate::str::contains("<h1>Create Your Account</h1>"))
        .stdout(predicate::str::contains(
            "<form id=\"dynamicForm\" method=\"post\" action=\"submitForm\">",
        ))
        .stdout(predicate::str::contains(">Create Account</button>"));
}

#[test]
fn test_page_conflicts_with_submit() {
    dynform().arg("--page").arg("--submit").assert().failure();
}

#[test]
fn test_field_requires_submit() {
    dynform().args(["--field", "a=b"]).assert().failure();
}

#[test]
fn test_valid_submission_html() {
    valid_fields(&mut dynform())
        .assert()
        .success()
        .stdout(predicate::str::contains("<h1>Form submitted successfully!</h1>"))
        .stdout(predicate::str::contains("<p>Username: jane_doe</p>"))
        .stdout(predicate::str::contains("Secret123!").not());
}

#[test]
fn test_valid_submission_json() {
    let output = valid_fields(&mut dynform())
        .args(["--output-format", "json"])
        .output()
        .unwrap();

    assert!(output.status.success());
    let value: serde_json::Value = serde_json::from_slice(&output.stdout).unwrap();
    assert_eq!(value["status"], "accepted");
    assert_eq!(value["data"]["age"], 30);
    assert_eq!(value["data"]["interests"], serde_json::json!(["music", "travel"]));
    assert_eq!(value["data"]["newsletter"], false);
    assert!(value["data"].get("password").is_none());
}

#[test]
fn test_rejected_submission_exit_code() {
    dynform()
        .arg("--submit")
        .args(["--form-data", "username=jane+doe&age=abc&password=abc123&confirmPassword=abc124"])
        .assert()
        .failure()
        .code(3) // Validation error
        .stdout(predicate::str::contains("<h2>Error: age must be a valid number</h2>"))
        .stdout(predicate::str::contains("<h2>Error: Passwords do not match</h2>"))
        .stdout(predicate::str::contains("<a href=\"dynamicForm\">Go Back</a>"));
}

#[test]
fn test_rejected_submission_json() {
    let output = dynform()
        .arg("--submit")
        .args(["--field", "age=15"])
        .args(["--output-format", "json"])
        .output()
        .unwrap();

    assert_eq!(output.status.code(), Some(3));
    let value: serde_json::Value = serde_json::from_slice(&output.stdout).unwrap();
    assert_eq!(value["status"], "rejected");
    assert_eq!(value["errors"]["age"], "age must be at least 13");
    assert_eq!(value["errors"]["username"], "username is required");
}

#[test]
fn test_invalid_output_format() {
    dynform()
        .arg("--submit")
        .args(["--output-format", "xml"])
        .assert()
        .failure()
        .code(1);
}

#[test]
fn test_invalid_field_argument() {
    dynform()
        .arg("--submit")
        .args(["--field", "no-equals-sign"])
        .assert()
        .failure()
        .code(1)
        .stderr(predicate::str::contains("Expected KEY=VALUE"));
}

#[test]
fn test_config_file_resolves_relative_documents() {
    let temp_dir = TempDir::new().unwrap();
    let forms = temp_dir.path().join("forms");
    fs::create_dir(&forms).unwrap();
    fs::copy(forms_dir().join("userSchema.json"), forms.join("schema.json")).unwrap();
    fs::copy(forms_dir().join("userUIConfig.json"), forms.join("ui.json")).unwrap();

    let config_path = temp_dir.path().join("dynform.yaml");
    fs::write(
        &config_path,
        "schema: forms/schema.json\nuiConfig: forms/ui.json\nformAction: /register\n",
    )
    .unwrap();

    let mut cmd = Command::cargo_bin("dynform").unwrap();
    cmd.env_remove("RUST_LOG")
        .arg("--config")
        .arg(&config_path)
        .arg("--page")
        .assert()
        .success()
        .stdout(predicate::str::contains("action=\"/register\""));
}

#[test]
fn test_config_from_environment() {
    let temp_dir = TempDir::new().unwrap();
    let config_path = temp_dir.path().join("custom.yaml");
    fs::write(
        &config_path,
        format!(
            "schema: {}\nuiConfig: {}\n",
            forms_dir().join("userSchema.json").display(),
            forms_dir().join("userUIConfig.json").display()
        ),
    )
    .unwrap();

    let mut cmd = Command::cargo_bin("dynform").unwrap();
    cmd.env_remove("RUST_LOG")
        .env("DYNFORM_CONFIG", &config_path)
        .assert()
        .success()
        .stdout(predicate::str::contains("form-container"));
}

#[test]
fn test_malformed_document_exit_code() {
    let temp_dir = TempDir::new().unwrap();
    let schema_path = temp_dir.path().join("schema.json");
    fs::write(&schema_path, "{ not json").unwrap();

    let mut cmd = Command::cargo_bin("dynform").unwrap();
    cmd.env_remove("RUST_LOG")
        .env_remove("DYNFORM_CONFIG")
        .current_dir(temp_dir.path())
        .arg("--schema")
        .arg(&schema_path)
        .arg("--ui-config")
        .arg(forms_dir().join("userUIConfig.json"))
        .assert()
        .failure()
        .code(2) // Document error
        .stderr(predicate::str::contains("Failed to parse schema document"));
}

#[test]
fn test_missing_document_exit_code() {
    let temp_dir = TempDir::new().unwrap();

    let mut cmd = Command::cargo_bin("dynform").unwrap();
    cmd.env_remove("RUST_LOG")
        .env_remove("DYNFORM_CONFIG")
        .current_dir(temp_dir.path())
        .arg("--schema")
        .arg(temp_dir.path().join("missing.json"))
        .arg("--ui-config")
        .arg(forms_dir().join("userUIConfig.json"))
        .assert()
        .failure()
        .code(4) // Filesystem error
        .stderr(predicate::str::contains("not found"));
}

#[test]
fn test_logs_do_not_pollute_stdout() {
    dynform()
        .arg("--verbose")
        .assert()
        .success()
        .stdout(predicate::str::starts_with("<div"))
        .stderr(predicate::str::contains("Loaded"));
}
