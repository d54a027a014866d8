//! Typed model of the schema document
//!
//! Only the subset of JSON Schema keywords that forms use is modelled; unknown
//! keywords are ignored.

use indexmap::IndexMap;
use serde::{Deserialize, Serialize};
use serde_json::Value;

/// Top-level schema document
#[derive(Debug, Clone, Default, Serialize, Deserialize)]
#[non_exhaustive]
pub struct SchemaDocument {
    /// Field schemas in declaration order
    #[serde(default)]
    pub properties: IndexMap<String, FieldSchema>,

    /// Names of fields that must be submitted
    #[serde(default, skip_serializing_if = "Vec::is_empty")]
    pub required: Vec<String>,
}

impl SchemaDocument {
    /// Look up the schema for a field
    #[must_use]
    #[inline]
    pub fn field(&self, name: &str) -> Option<&FieldSchema> {
        self.properties.get(name)
    }

    /// Whether the field is listed in `required`
    #[must_use]
    #[inline]
    pub fn is_required(&self, name: &str) -> bool {
        self.required.iter().any(|required| required == name)
    }
}

/// Declared data type of a field
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
#[non_exhaustive]
pub enum FieldType {
    String,
    Integer,
    Boolean,
    Array,
    /// Missing or unrecognised `type`; values pass through unchecked
    Untyped,
}

impl From<&str> for FieldType {
    #[inline]
    fn from(value: &str) -> Self {
        match value {
            "string" => Self::String,
            "integer" => Self::Integer,
            "boolean" => Self::Boolean,
            "array" => Self::Array,
            _ => Self::Untyped,
        }
    }
}

/// Supported values of the `format` keyword
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
#[non_exhaustive]
pub enum FieldFormat {
    Email,
    Date,
}

/// Schema of a single field
#[derive(Debug, Clone, Default, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
#[non_exhaustive]
pub struct FieldSchema {
    #[serde(rename = "type", skip_serializing_if = "Option::is_none")]
    pub type_name: Option<String>,

    #[serde(skip_serializing_if = "Option::is_none")]
    pub min_length: Option<usize>,

    #[serde(skip_serializing_if = "Option::is_none")]
    pub max_length: Option<usize>,

    #[serde(skip_serializing_if = "Option::is_none")]
    pub minimum: Option<i64>,

    #[serde(skip_serializing_if = "Option::is_none")]
    pub maximum: Option<i64>,

    /// Regular expression the whole value must match
    #[serde(skip_serializing_if = "Option::is_none")]
    pub pattern: Option<String>,

    #[serde(skip_serializing_if = "Option::is_none")]
    pub format: Option<String>,

    /// Allowed string values
    #[serde(rename = "enum", skip_serializing_if = "Option::is_none")]
    pub allowed: Option<Vec<String>>,

    /// Exact value the submission must carry (`true` models a must-accept checkbox)
    #[serde(rename = "const", skip_serializing_if = "Option::is_none")]
    pub constant: Option<Value>,

    #[serde(skip_serializing_if = "Option::is_none")]
    pub min_items: Option<usize>,

    #[serde(skip_serializing_if = "Option::is_none")]
    pub max_items: Option<usize>,

    #[serde(skip_serializing_if = "Option::is_none")]
    pub items: Option<ItemsSchema>,
}

impl FieldSchema {
    /// Declared type of the field
    #[must_use]
    #[inline]
    pub fn field_type(&self) -> FieldType {
        self.type_name
            .as_deref()
            .map_or(FieldType::Untyped, FieldType::from)
    }

    /// Recognised `format`, if any
    #[must_use]
    #[inline]
    pub fn field_format(&self) -> Option<FieldFormat> {
        match self.format.as_deref() {
            Some("email") => Some(FieldFormat::Email),
            Some("date") => Some(FieldFormat::Date),
            _ => None,
        }
    }

    /// Allowed values for array items
    #[must_use]
    #[inline]
    pub fn item_enum(&self) -> Option<&[String]> {
        self.items.as_ref()?.allowed.as_deref()
    }

    /// The literal string a `const` requires, if it is one we enforce
    #[must_use]
    #[inline]
    pub fn required_literal(&self) -> Option<String> {
        match self.constant.as_ref()? {
            Value::Bool(b) => Some(b.to_string()),
            Value::String(s) => Some(s.clone()),
            Value::Null | Value::Number(_) | Value::Array(_) | Value::Object(_) => None,
        }
    }
}

/// Schema for the items of an array field
#[derive(Debug, Clone, Default, Serialize, Deserialize)]
#[non_exhaustive]
pub struct ItemsSchema {
    #[serde(rename = "enum", skip_serializing_if = "Option::is_none")]
    pub allowed: Option<Vec<String>>,
}
