//! Loading of schema and UI-configuration documents
//!
//! Documents are read through the `System` trait, parsed as JSON or YAML by
//! file extension, checked against the embedded meta-schemas and only then
//! deserialized into their typed models.

use crate::config::schema::{FORM_SCHEMA, UI_CONFIG_SCHEMA, schema_violations};
use crate::error::FormError;
use crate::form::schema::SchemaDocument;
use crate::form::ui_config::UiConfig;
use crate::system::System;
use anyhow::{Context as _, Result};
use serde::de::DeserializeOwned;
use serde_json::Value;
use std::path::Path;
use tracing::debug;

/// Which of the two form documents is being handled
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
#[non_exhaustive]
pub enum DocumentKind {
    Schema,
    UiConfig,
}

impl DocumentKind {
    const fn meta_schema(self) -> &'static str {
        match self {
            Self::Schema => FORM_SCHEMA,
            Self::UiConfig => UI_CONFIG_SCHEMA,
        }
    }

    const fn describe(self) -> &'static str {
        match self {
            Self::Schema => "schema document",
            Self::UiConfig => "UI configuration",
        }
    }
}

/// Read a document from disk into an untyped JSON value
///
/// `.yaml` and `.yml` files are parsed as YAML, everything else as JSON.
///
/// # Errors
///
/// Returns an error if:
/// - The file does not exist or cannot be read
/// - The content is not valid JSON/YAML
#[inline]
pub fn read_document(system: &dyn System, path: &Path, kind: DocumentKind) -> Result<Value> {
    if !system.is_file(path) {
        return Err(FormError::filesystem(format!(
            "{} not found: {}",
            kind.describe(),
            path.display()
        ))
        .into());
    }

    let content = system
        .read_to_string(path)
        .with_context(|| format!("Failed to read {}: {}", kind.describe(), path.display()))?;

    let is_yaml = path
        .extension()
        .and_then(|ext| ext.to_str())
        .is_some_and(|ext| ext.eq_ignore_ascii_case("yaml") || ext.eq_ignore_ascii_case("yml"));

    debug!(
        "Parsing {} as {}: {}",
        kind.describe(),
        if is_yaml { "YAML" } else { "JSON" },
        path.display()
    );

    let parsed = if is_yaml {
        serde_yaml::from_str::<Value>(&content).map_err(|e| e.to_string())
    } else {
        serde_json::from_str::<Value>(&content).map_err(|e| e.to_string())
    };

    parsed.map_err(|e| {
        return FormError::document(format!(
            "Failed to parse {} {}: {e}",
            kind.describe(),
            path.display()
        ))
        .into();
    })
}

/// Check a parsed document against its meta-schema and deserialize it
///
/// # Errors
///
/// Returns an error if:
/// - The document violates its meta-schema
/// - The document cannot be deserialized into its typed model
#[inline]
pub fn parse_document<T: DeserializeOwned>(value: Value, kind: DocumentKind) -> Result<T> {
    let violations = schema_violations(kind.meta_schema(), &value)?;
    if !violations.is_empty() {
        return Err(FormError::document(format!(
            "Invalid {}:\n{}",
            kind.describe(),
            violations.join("\n")
        ))
        .into());
    }

    serde_json::from_value(value).map_err(|e| {
        return FormError::document(format!("Invalid {}: {e}", kind.describe())).into();
    })
}

/// Load and validate the schema document
///
/// # Errors
///
/// See [`read_document`] and [`parse_document`].
#[inline]
pub fn load_schema(system: &dyn System, path: &Path) -> Result<SchemaDocument> {
    let value = read_document(system, path, DocumentKind::Schema)?;
    parse_document(value, DocumentKind::Schema)
}

/// Load and validate the UI-configuration document
///
/// # Errors
///
/// See [`read_document`] and [`parse_document`].
#[inline]
pub fn load_ui_config(system: &dyn System, path: &Path) -> Result<UiConfig> {
    let value = read_document(system, path, DocumentKind::UiConfig)?;
    parse_document(value, DocumentKind::UiConfig)
}
