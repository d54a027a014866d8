//! Server-side validation of submitted form data

use crate::error::FormError;
use crate::form::{FieldFormat, FieldSchema, FieldType, FormDocuments};
use crate::submit::Submission;
use anyhow::Result;
use indexmap::IndexMap;
use regex::Regex;
use serde::Serialize;
use std::collections::HashMap;
use thiserror::Error;
use tracing::debug;

/// Field that must repeat the value of [`PASSWORD_FIELD`]
pub const CONFIRM_PASSWORD_FIELD: &str = "confirmPassword";

pub const PASSWORD_FIELD: &str = "password";

const EMAIL_PATTERN: &str = r"^[^\s@]+@[^\s@]+\.[^\s@]+$";
const DATE_PATTERN: &str = r"^\d{4}-\d{2}-\d{2}$";

/// Field-keyed error messages, in the order they were found
#[derive(Error, Debug, Clone, Default, PartialEq, Eq, Serialize)]
#[error("{} field(s) failed validation", .0.len())]
#[serde(transparent)]
pub struct ValidationErrors(IndexMap<String, String>);

impl ValidationErrors {
    #[must_use]
    #[inline]
    pub fn is_empty(&self) -> bool {
        self.0.is_empty()
    }

    #[must_use]
    #[inline]
    pub fn len(&self) -> usize {
        self.0.len()
    }

    /// Message recorded for a field
    #[must_use]
    #[inline]
    pub fn get(&self, field: &str) -> Option<&str> {
        self.0.get(field).map(String::as_str)
    }

    #[inline]
    pub fn iter(&self) -> impl Iterator<Item = (&str, &str)> {
        self.0.iter().map(|(field, message)| (field.as_str(), message.as_str()))
    }

    /// Record a message, moving the field to the end if it already had one
    fn insert_last(&mut self, field: &str, message: String) {
        self.0.shift_remove(field);
        self.0.insert(field.to_owned(), message);
    }
}

/// Validates submissions against a loaded schema document
///
/// Construction compiles every `pattern` in the schema once, so an invalid
/// expression surfaces at startup instead of on the first submission.
#[derive(Debug, Clone)]
pub struct SubmissionValidator<'doc> {
    documents: &'doc FormDocuments,
    patterns: HashMap<String, fancy_regex::Regex>,
    email: Regex,
    date: Regex,
}

impl<'doc> SubmissionValidator<'doc> {
    /// Create a validator for the given documents
    ///
    /// # Errors
    ///
    /// Returns an error if:
    /// - A field's `pattern` is not a valid regular expression
    #[inline]
    pub fn new(documents: &'doc FormDocuments) -> Result<Self> {
        let mut patterns = HashMap::new();
        for (name, field) in &documents.schema().properties {
            if let Some(pattern) = field.pattern.as_ref() {
                let anchored = format!("^(?:{pattern})$");
                let regex = fancy_regex::Regex::new(&anchored).map_err(|e| {
                    FormError::document(format!("Invalid pattern for field '{name}': {e}"))
                })?;
                patterns.insert(name.clone(), regex);
            }
        }

        Ok(Self {
            documents,
            patterns,
            email: Regex::new(EMAIL_PATTERN)?,
            date: Regex::new(DATE_PATTERN)?,
        })
    }

    #[must_use]
    #[inline]
    pub const fn documents(&self) -> &'doc FormDocuments {
        self.documents
    }

    /// Validate a submission
    ///
    /// Every schema property is checked in declaration order and at most one
    /// message is kept per field. The password confirmation rule runs last.
    ///
    /// # Errors
    ///
    /// Returns the collected messages when any check fails.
    #[inline]
    pub fn validate(&self, submission: &Submission) -> Result<(), ValidationErrors> {
        let schema = self.documents.schema();
        let mut errors = ValidationErrors::default();

        for (name, field) in &schema.properties {
            if let Some(message) = self.check_field(name, field, schema.is_required(name), submission)
            {
                debug!("Field '{name}' rejected: {message}");
                errors.insert_last(name, message);
            }
        }

        if let (Some(password), Some(confirmation)) = (
            submission.first(PASSWORD_FIELD),
            submission.first(CONFIRM_PASSWORD_FIELD),
        ) && password != confirmation
        {
            errors.insert_last(CONFIRM_PASSWORD_FIELD, "Passwords do not match".to_owned());
        }

        if errors.is_empty() {
            Ok(())
        } else {
            Err(errors)
        }
    }

    fn check_field(
        &self,
        name: &str,
        field: &FieldSchema,
        required: bool,
        submission: &Submission,
    ) -> Option<String> {
        let field_type = field.field_type();
        let blank = if field_type == FieldType::Array {
            submission.filled_values(name).next().is_none()
        } else {
            submission.is_blank(name)
        };

        if blank {
            if required {
                return Some(format!("{name} is required"));
            }
            debug!("Skipping empty optional field: {name}");
            return None;
        }

        let value = submission.first(name).unwrap_or_default();
        match field_type {
            FieldType::String => self.check_string(name, field, value),
            FieldType::Integer => check_integer(name, field, value),
            FieldType::Boolean => check_boolean(name, value),
            FieldType::Array => {
                let values: Vec<&str> = submission.filled_values(name).collect();
                check_array(name, field, &values)
            }
            FieldType::Untyped => None,
        }
    }

    fn check_string(&self, name: &str, field: &FieldSchema, value: &str) -> Option<String> {
        let length = value.chars().count();

        if let Some(min_length) = field.min_length
            && length < min_length
        {
            return Some(format!(
                "{name} must be at least {min_length} characters long"
            ));
        }

        if let Some(max_length) = field.max_length
            && length > max_length
        {
            return Some(format!(
                "{name} must be at most {max_length} characters long"
            ));
        }

        // Exceeding the backtrack limit counts as a mismatch
        if let Some(pattern) = self.patterns.get(name)
            && !pattern.is_match(value).unwrap_or(false)
        {
            return Some(format!("{name} has an invalid format"));
        }

        match field.field_format() {
            Some(FieldFormat::Email) if !self.email.is_match(value) => {
                return Some(format!("{name} must be a valid email address"));
            }
            Some(FieldFormat::Date) if !self.date.is_match(value) => {
                return Some(format!("{name} must be a valid date (YYYY-MM-DD)"));
            }
            _ => {}
        }

        if let Some(allowed) = field.allowed.as_ref()
            && !allowed.iter().any(|candidate| candidate == value)
        {
            return Some(format!("{name} must be one of: {}", allowed.join(", ")));
        }

        if let Some(literal) = field.required_literal()
            && value != literal
        {
            if literal == "true" {
                return Some(format!("{name} must be accepted"));
            }
            return Some(format!("{name} must be {literal}"));
        }

        None
    }
}

fn check_integer(name: &str, field: &FieldSchema, value: &str) -> Option<String> {
    let Ok(number) = value.parse::<i64>() else {
        return Some(format!("{name} must be a valid number"));
    };

    if let Some(minimum) = field.minimum
        && number < minimum
    {
        return Some(format!("{name} must be at least {minimum}"));
    }

    if let Some(maximum) = field.maximum
        && number > maximum
    {
        return Some(format!("{name} must be at most {maximum}"));
    }

    None
}

fn check_boolean(name: &str, value: &str) -> Option<String> {
    if matches!(value, "true" | "false") {
        None
    } else {
        Some(format!("{name} must be true or false"))
    }
}

fn check_array(name: &str, field: &FieldSchema, values: &[&str]) -> Option<String> {
    if let Some(min_items) = field.min_items
        && values.len() < min_items
    {
        return Some(format!("{name} must have at least {min_items} item(s)"));
    }

    if let Some(max_items) = field.max_items
        && values.len() > max_items
    {
        return Some(format!("{name} must have at most {max_items} item(s)"));
    }

    if let Some(allowed) = field.item_enum()
        && let Some(invalid) = values
            .iter()
            .find(|&&value| !allowed.iter().any(|candidate| candidate == value))
    {
        return Some(format!("{name} contains invalid value: {invalid}"));
    }

    None
}
