//! Markup for the individual control types

use super::escape_html;
use crate::form::{FieldDescriptor, FieldOption, FieldSchema};

/// Generic `<input>` carrying the schema's constraint attributes
pub(super) fn input_field(
    name: &str,
    input_type: &str,
    schema: &FieldSchema,
    descriptor: &FieldDescriptor,
    is_password: bool,
) -> String {
    let name = escape_html(name);
    let mut html = format!(
        "  <input type=\"{}\" name=\"{name}\" id=\"{name}\" class=\"form-input\"",
        escape_html(input_type)
    );

    let placeholder = descriptor.placeholder();
    if !placeholder.is_empty() {
        html.push_str(&format!(" placeholder=\"{}\"", escape_html(placeholder)));
    }

    if let Some(min_length) = schema.min_length {
        html.push_str(&format!(" minlength=\"{min_length}\""));
    }
    if let Some(max_length) = schema.max_length {
        html.push_str(&format!(" maxlength=\"{max_length}\""));
    }
    if let Some(minimum) = schema.minimum {
        html.push_str(&format!(" min=\"{minimum}\""));
    }
    if let Some(maximum) = schema.maximum {
        html.push_str(&format!(" max=\"{maximum}\""));
    }
    if let Some(pattern) = schema.pattern.as_ref() {
        html.push_str(&format!(" pattern=\"{}\"", escape_html(pattern)));
    }

    html.push_str(" />\n");

    if is_password && descriptor.show_strength_indicator {
        html.push_str(&format!(
            "  <div class=\"password-strength\" id=\"strength-{name}\"></div>\n"
        ));
    }

    html
}

/// Dropdown with an optional empty placeholder option
pub(super) fn select_field(name: &str, descriptor: &FieldDescriptor) -> String {
    let name = escape_html(name);
    let mut html = format!("  <select name=\"{name}\" id=\"{name}\" class=\"form-select\">\n");

    let placeholder = descriptor.placeholder();
    if !placeholder.is_empty() {
        html.push_str(&format!(
            "    <option value=\"\">{}</option>\n",
            escape_html(placeholder)
        ));
    }

    for option in options(descriptor) {
        html.push_str(&format!(
            "    <option value=\"{}\">{}</option>\n",
            escape_html(option.value()),
            escape_html(option.label())
        ));
    }

    html.push_str("  </select>\n");
    html
}

pub(super) fn radio_group(name: &str, descriptor: &FieldDescriptor) -> String {
    let mut html = format!(
        "  <div class=\"radio-group {}\">\n",
        escape_html(descriptor.layout())
    );
    for option in options(descriptor) {
        html.push_str(&choice_item("radio", name, option));
    }
    html.push_str("  </div>\n");
    html
}

/// Checkbox per option; grid layouts also get a column-count class
pub(super) fn checkbox_group(name: &str, descriptor: &FieldDescriptor) -> String {
    let layout = descriptor.layout();
    let mut html = format!("  <div class=\"checkbox-group {}", escape_html(layout));
    if layout == "grid" {
        html.push_str(&format!(" columns-{}", descriptor.columns()));
    }
    html.push_str("\">\n");

    for option in options(descriptor) {
        html.push_str(&choice_item("checkbox", name, option));
    }

    html.push_str("  </div>\n");
    html
}

/// Lone boolean checkbox submitting `"true"` when ticked
pub(super) fn single_checkbox(name: &str, descriptor: &FieldDescriptor) -> String {
    let label = escape_html(descriptor.label_or(name));
    let name = escape_html(name);
    format!(
        "  <div class=\"checkbox-single\">\n\
         \x20   <input type=\"checkbox\" name=\"{name}\" id=\"{name}\" value=\"true\" />\n\
         \x20   <label for=\"{name}\">{label}</label>\n\
         \x20 </div>\n"
    )
}

pub(super) fn textarea(name: &str, descriptor: &FieldDescriptor) -> String {
    let name = escape_html(name);
    let mut html = format!(
        "  <textarea name=\"{name}\" id=\"{name}\" class=\"form-textarea\" rows=\"{}\"",
        descriptor.rows()
    );

    let placeholder = descriptor.placeholder();
    if !placeholder.is_empty() {
        html.push_str(&format!(" placeholder=\"{}\"", escape_html(placeholder)));
    }

    html.push_str("></textarea>\n");
    html
}

fn options(descriptor: &FieldDescriptor) -> &[FieldOption] {
    descriptor.options.as_deref().unwrap_or_default()
}

/// One labelled radio or checkbox input inside a group
fn choice_item(kind: &str, name: &str, option: &FieldOption) -> String {
    let name = escape_html(name);
    let value = escape_html(option.value());
    let label = escape_html(option.label());
    format!(
        "    <div class=\"{kind}-item\">\n\
         \x20     <input type=\"{kind}\" name=\"{name}\" id=\"{name}_{value}\" value=\"{value}\" />\n\
         \x20     <label for=\"{name}_{value}\">{label}</label>\n\
         \x20   </div>\n"
    )
}
