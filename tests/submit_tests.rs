//! Tests for the submit flow: validation followed by typed extraction

use dynform::form::FormDocuments;
use dynform::submit::{SECRET_FIELDS, Submission, SubmissionValidator, SubmitOutcome, submit};
use serde_json::{Value, json};
use std::path::PathBuf;

fn registration_form() -> FormDocuments {
    let root = PathBuf::from(env!("CARGO_MANIFEST_DIR")).join("forms");
    let schema: Value =
        serde_json::from_str(&std::fs::read_to_string(root.join("userSchema.json")).unwrap()).unwrap();
    let ui: Value =
        serde_json::from_str(&std::fs::read_to_string(root.join("userUIConfig.json")).unwrap()).unwrap();
    FormDocuments::from_values(schema, ui).unwrap()
}

fn valid_registration() -> Submission {
    Submission::new()
        .with_value("username", "jane_doe")
        .with_value("email", "jane@example.com")
        .with_value("password", "correct-horse")
        .with_value("confirmPassword", "correct-horse")
        .with_value("firstName", "Jane")
        .with_value("lastName", "Doe")
        .with_value("age", "34")
        .with_value("birthDate", "1990-04-12")
        .with_value("country", "CA")
        .with_value("interests", "music")
        .with_value("interests", "travel")
        .with_value("newsletter", "true")
        .with_value("terms", "true")
}

#[test]
fn test_valid_registration_is_accepted() {
    let docs = registration_form();
    let validator = SubmissionValidator::new(&docs).unwrap();

    let outcome = submit(&validator, &valid_registration());

    let SubmitOutcome::Accepted(data) = outcome else {
        panic!("expected acceptance, got {outcome:?}");
    };
    assert_eq!(data.get("age"), Some(&json!(34)));
    assert_eq!(data.get("interests"), Some(&json!(["music", "travel"])));
    assert_eq!(data.get("newsletter"), Some(&json!(true)));
    assert_eq!(data.get("gender"), Some(&Value::Null));
    assert_eq!(data.get("bio"), Some(&Value::Null));
}

#[test]
fn test_extracted_data_follows_schema_order() {
    let docs = registration_form();
    let validator = SubmissionValidator::new(&docs).unwrap();

    let SubmitOutcome::Accepted(data) = submit(&validator, &valid_registration()) else {
        panic!("expected acceptance");
    };
    let extracted: Vec<&str> = data.iter().map(|(name, _)| name).collect();
    let declared: Vec<&str> = docs.schema().properties.keys().map(String::as_str).collect();

    assert_eq!(extracted, declared);
}

#[test]
fn test_display_never_contains_passwords() {
    let docs = registration_form();
    let validator = SubmissionValidator::new(&docs).unwrap();

    let SubmitOutcome::Accepted(data) = submit(&validator, &valid_registration()) else {
        panic!("expected acceptance");
    };
    assert!(data.get("password").is_some());

    let display = data.for_display();
    for secret in SECRET_FIELDS {
        assert!(!display.contains_key(secret));
    }

    let serialized = serde_json::to_string(&display).unwrap();
    assert!(!serialized.contains("password"));
    assert!(!serialized.contains("confirmPassword"));
    assert!(!serialized.contains("correct-horse"));
}

#[test]
fn test_outcome_json_views() {
    let docs = registration_form();
    let validator = SubmissionValidator::new(&docs).unwrap();

    let accepted = submit(&validator, &valid_registration()).to_display_json();
    assert_eq!(accepted["status"], "accepted");
    assert_eq!(accepted["data"]["username"], "jane_doe");
    assert!(accepted["data"].get("password").is_none());

    let rejected = submit(&validator, &Submission::new().with_value("username", "x")).to_display_json();
    assert_eq!(rejected["status"], "rejected");
    assert_eq!(rejected["errors"]["username"], "username must be at least 3 characters long");
    assert_eq!(rejected["errors"]["email"], "email is required");
}

#[test]
fn test_rejected_registration_collects_every_field() {
    let docs = registration_form();
    let validator = SubmissionValidator::new(&docs).unwrap();
    let submission: Submission = [
        ("username", "jane doe"),
        ("email", "jane@example.com"),
        ("password", "correct-horse"),
        ("confirmPassword", "correct-horsE"),
        ("firstName", "Jane"),
        ("lastName", "Doe"),
        ("age", "12"),
        ("country", "MX"),
        ("interests", "music"),
        ("interests", "gardening"),
        ("terms", "false"),
    ]
    .into_iter()
    .collect();

    let SubmitOutcome::Rejected(errors) = submit(&validator, &submission) else {
        panic!("expected rejection");
    };
    let fields: Vec<&str> = errors.iter().map(|(field, _)| field).collect();

    assert_eq!(
        fields,
        ["username", "age", "country", "interests", "terms", "confirmPassword"]
    );
    assert_eq!(errors.get("age"), Some("age must be at least 13"));
    assert_eq!(errors.get("interests"), Some("interests contains invalid value: gardening"));
    assert_eq!(errors.get("terms"), Some("terms must be accepted"));
    assert_eq!(errors.get("confirmPassword"), Some("Passwords do not match"));
}
