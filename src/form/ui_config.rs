//! Typed model of the UI-configuration document

use indexmap::IndexMap;
use serde::{Deserialize, Serialize};

/// Top-level UI configuration
#[derive(Debug, Clone, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
#[non_exhaustive]
pub struct UiConfig {
    #[serde(default = "default_form_title")]
    pub form_title: String,

    #[serde(default = "default_submit_button_label")]
    pub submit_button_label: String,

    /// Field descriptors in declaration order
    #[serde(default)]
    pub fields: IndexMap<String, FieldDescriptor>,
}

impl Default for UiConfig {
    fn default() -> Self {
        Self {
            form_title: default_form_title(),
            submit_button_label: default_submit_button_label(),
            fields: IndexMap::new(),
        }
    }
}

fn default_form_title() -> String {
    return "Dynamic Form".to_owned();
}

fn default_submit_button_label() -> String {
    return "Submit".to_owned();
}

/// Presentation metadata for one field
#[derive(Debug, Clone, Default, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
#[non_exhaustive]
pub struct FieldDescriptor {
    #[serde(skip_serializing_if = "Option::is_none")]
    pub label: Option<String>,

    #[serde(skip_serializing_if = "Option::is_none")]
    pub control_type: Option<String>,

    #[serde(skip_serializing_if = "Option::is_none")]
    pub placeholder: Option<String>,

    #[serde(skip_serializing_if = "Option::is_none")]
    pub help_text: Option<String>,

    #[serde(skip_serializing_if = "Option::is_none")]
    pub width: Option<String>,

    #[serde(skip_serializing_if = "Option::is_none")]
    pub icon: Option<String>,

    /// Sort position; fields without one render last
    #[serde(skip_serializing_if = "Option::is_none")]
    pub order: Option<i64>,

    #[serde(skip_serializing_if = "Option::is_none")]
    pub options: Option<Vec<FieldOption>>,

    #[serde(skip_serializing_if = "Option::is_none")]
    pub layout: Option<String>,

    #[serde(skip_serializing_if = "Option::is_none")]
    pub columns: Option<u32>,

    #[serde(skip_serializing_if = "Option::is_none")]
    pub rows: Option<u32>,

    #[serde(default)]
    pub show_strength_indicator: bool,
}

impl FieldDescriptor {
    /// Label text, defaulting to the field name
    #[must_use]
    #[inline]
    pub fn label_or<'a>(&'a self, field_name: &'a str) -> &'a str {
        self.label.as_deref().unwrap_or(field_name)
    }

    #[must_use]
    #[inline]
    pub fn control(&self) -> ControlType {
        self.control_type
            .as_deref()
            .map_or_else(|| ControlType::Input("text".to_owned()), ControlType::from)
    }

    /// Placeholder text; empty when absent
    #[must_use]
    #[inline]
    pub fn placeholder(&self) -> &str {
        self.placeholder.as_deref().unwrap_or_default()
    }

    #[must_use]
    #[inline]
    pub fn help_text(&self) -> &str {
        self.help_text.as_deref().unwrap_or_default()
    }

    #[must_use]
    #[inline]
    pub fn icon(&self) -> &str {
        self.icon.as_deref().unwrap_or_default()
    }

    #[must_use]
    #[inline]
    pub fn width(&self) -> &str {
        self.width.as_deref().unwrap_or("full")
    }

    #[must_use]
    #[inline]
    pub fn layout(&self) -> &str {
        self.layout.as_deref().unwrap_or("vertical")
    }

    #[must_use]
    #[inline]
    pub fn columns(&self) -> u32 {
        self.columns.unwrap_or(1)
    }

    #[must_use]
    #[inline]
    pub fn rows(&self) -> u32 {
        self.rows.unwrap_or(4)
    }

    /// Key used to sort fields for rendering; unordered fields sort last
    #[must_use]
    #[inline]
    pub fn sort_key(&self) -> (bool, i64) {
        (self.order.is_none(), self.order.unwrap_or_default())
    }
}

/// Choice for select, radio and checkbox-group controls
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(untagged)]
#[non_exhaustive]
pub enum FieldOption {
    /// Bare string used as both value and label
    Plain(String),
    Labeled { value: String, label: String },
}

impl FieldOption {
    #[must_use]
    #[inline]
    pub fn value(&self) -> &str {
        match *self {
            Self::Plain(ref value) | Self::Labeled { ref value, .. } => value,
        }
    }

    #[must_use]
    #[inline]
    pub fn label(&self) -> &str {
        match *self {
            Self::Plain(ref label) | Self::Labeled { ref label, .. } => label,
        }
    }
}

/// Widget kind used to render a field
#[derive(Debug, Clone, PartialEq, Eq)]
#[non_exhaustive]
pub enum ControlType {
    Select,
    Radio,
    Checkbox,
    Textarea,
    /// Generic `<input>` of the given type (text, password, email, number, ...),
    /// kept as written in the UI configuration
    Input(String),
}

impl From<&str> for ControlType {
    #[inline]
    fn from(value: &str) -> Self {
        match value.to_lowercase().as_str() {
            "select" => Self::Select,
            "radio" => Self::Radio,
            "checkbox" => Self::Checkbox,
            "textarea" => Self::Textarea,
            _ => Self::Input(value.to_owned()),
        }
    }
}

impl ControlType {
    #[must_use]
    #[inline]
    pub fn is_password(&self) -> bool {
        matches!(*self, Self::Input(ref kind) if kind.eq_ignore_ascii_case("password"))
    }
}

#[cfg(test)]
#[expect(clippy::unwrap_used)]
mod tests {
    use super::*;
    use serde_json::json;

    #[test]
    fn descriptor_defaults() {
        let descriptor: FieldDescriptor = serde_json::from_value(json!({})).unwrap();

        assert_eq!(descriptor.label_or("email"), "email");
        assert_eq!(descriptor.control(), ControlType::Input("text".to_owned()));
        assert_eq!(descriptor.width(), "full");
        assert_eq!(descriptor.layout(), "vertical");
        assert_eq!(descriptor.rows(), 4);
        assert_eq!(descriptor.columns(), 1);
        assert_eq!(descriptor.sort_key(), (true, 0));
        assert!(!descriptor.show_strength_indicator);
    }

    #[test]
    fn control_type_is_case_insensitive() {
        assert_eq!(ControlType::from("Select"), ControlType::Select);
        assert_eq!(ControlType::from("TEXTAREA"), ControlType::Textarea);
        assert!(ControlType::from("Password").is_password());
        assert_eq!(ControlType::from("date"), ControlType::Input("date".to_owned()));
    }

    #[test]
    fn generic_input_type_keeps_its_spelling() {
        assert_eq!(
            ControlType::from("DateTime-Local"),
            ControlType::Input("DateTime-Local".to_owned())
        );
        assert!(ControlType::from("PASSWORD").is_password());
        assert!(!ControlType::from("text").is_password());
    }

    #[test]
    fn options_accept_strings_and_objects() {
        let descriptor: FieldDescriptor = serde_json::from_value(json!({
            "options": ["us", {"value": "ca", "label": "Canada"}]
        }))
        .unwrap();
        let options = descriptor.options.unwrap();

        assert_eq!(options[0].value(), "us");
        assert_eq!(options[0].label(), "us");
        assert_eq!(options[1].value(), "ca");
        assert_eq!(options[1].label(), "Canada");
    }

    #[test]
    fn top_level_defaults() {
        let ui: UiConfig = serde_json::from_value(json!({"fields": {}})).unwrap();
        assert_eq!(ui.form_title, "Dynamic Form");
        assert_eq!(ui.submit_button_label, "Submit");
    }
}
