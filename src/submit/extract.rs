//! Typed extraction of accepted submissions

use crate::form::{FieldType, SchemaDocument};
use crate::submit::Submission;
use crate::submit::validator::{CONFIRM_PASSWORD_FIELD, PASSWORD_FIELD};
use serde::Serialize;
use serde_json::{Map, Value};

/// Fields that are never echoed back to the user
pub const SECRET_FIELDS: [&str; 2] = [PASSWORD_FIELD, CONFIRM_PASSWORD_FIELD];

/// Typed values of an accepted submission, in schema declaration order
#[derive(Debug, Clone, Default, PartialEq, Serialize)]
#[serde(transparent)]
pub struct FormData(Map<String, Value>);

impl FormData {
    #[must_use]
    #[inline]
    pub fn get(&self, field: &str) -> Option<&Value> {
        self.0.get(field)
    }

    #[inline]
    pub fn iter(&self) -> impl Iterator<Item = (&str, &Value)> {
        self.0.iter().map(|(field, value)| (field.as_str(), value))
    }

    /// Copy of the data that is safe to show: secret fields removed
    #[must_use]
    #[inline]
    pub fn for_display(&self) -> Map<String, Value> {
        self.0
            .iter()
            .filter(|&(field, _)| !SECRET_FIELDS.contains(&field.as_str()))
            .map(|(field, value)| (field.clone(), value.clone()))
            .collect()
    }
}

/// Coerce submitted strings into typed values using the schema's `type`
///
/// Arrays become string lists without blank entries, booleans are `true` only
/// for the literal `"true"`, integers that fail to parse become `null`, and
/// everything else is kept as the submitted string (`null` when absent).
#[must_use]
#[inline]
pub fn extract_form_data(schema: &SchemaDocument, submission: &Submission) -> FormData {
    let mut data = Map::new();

    for (name, field) in &schema.properties {
        let value = match field.field_type() {
            FieldType::Array => Value::Array(
                submission
                    .filled_values(name)
                    .map(|value| Value::String(value.to_owned()))
                    .collect(),
            ),
            FieldType::Boolean => Value::Bool(submission.first(name) == Some("true")),
            FieldType::Integer => submission
                .first(name)
                .and_then(|raw| raw.parse::<i64>().ok())
                .map_or(Value::Null, Value::from),
            FieldType::String | FieldType::Untyped => submission
                .first(name)
                .map_or(Value::Null, |raw| Value::String(raw.to_owned())),
        };
        data.insert(name.clone(), value);
    }

    FormData(data)
}
