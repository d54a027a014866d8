//! JSON Schema validation against the embedded schemas in `docs/`

use anyhow::{Result, anyhow};
use serde_json::Value;

/// Schema for `dynform.yaml`
pub const CONFIG_SCHEMA: &str = include_str!("../../docs/config-schema.json");

/// Meta-schema for form schema documents
pub const FORM_SCHEMA: &str = include_str!("../../docs/form-schema.json");

/// Meta-schema for UI-configuration documents
pub const UI_CONFIG_SCHEMA: &str = include_str!("../../docs/ui-config-schema.json");

/// Validate `instance` against an embedded draft-7 schema
///
/// Returns the list of violations; an empty list means the instance is valid.
///
/// # Errors
///
/// Returns an error if:
/// - The embedded schema is not valid JSON or does not compile
#[inline]
pub fn schema_violations(schema_source: &str, instance: &Value) -> Result<Vec<String>> {
    let schema: Value = serde_json::from_str(schema_source)
        .map_err(|e| anyhow!("Failed to parse embedded JSON schema: {e}"))?;

    let validator = jsonschema::draft7::new(&schema)
        .map_err(|e| anyhow!("Failed to compile JSON schema: {e}"))?;

    Ok(validator
        .iter_errors(instance)
        .map(|e| format!("  - {e}"))
        .collect())
}

/// Validate a configuration value against the config schema
///
/// # Errors
///
/// Returns an error if:
/// - The configuration does not satisfy `docs/config-schema.json`
#[inline]
pub fn validate_against_schema(config: &Value) -> Result<()> {
    let violations = schema_violations(CONFIG_SCHEMA, config)?;

    if !violations.is_empty() {
        return Err(anyhow!(
            "Configuration validation failed:\n{}",
            violations.join("\n")
        ));
    }

    Ok(())
}
