//! HTML rendering of form fields and result views

mod controls;
pub mod page;

use crate::form::{ControlType, FormDocuments, RenderableField};
use tracing::debug;

/// Render every configured field into one HTML fragment
///
/// Fields are emitted in `order` sequence. A field configured in the UI
/// document but absent from the schema is skipped.
#[must_use]
#[inline]
pub fn render_fields(documents: &FormDocuments) -> String {
    let mut html = String::from("<div class=\"form-container\">\n");

    for (name, field) in documents.ordered_fields() {
        match field {
            Some(field) => html.push_str(&render_field(&field)),
            None => debug!("Skipping field without schema: {name}"),
        }
    }

    html.push_str("</div>\n");
    html
}

/// Render the wrapper, label, control, help text and error slot of one field
#[must_use]
#[inline]
pub fn render_field(field: &RenderableField<'_>) -> String {
    let descriptor = field.descriptor;
    let name = escape_html(field.name);

    let mut html = format!(
        "<div class=\"field-wrapper {}\">\n",
        escape_html(descriptor.width())
    );

    html.push_str(&format!("  <label for=\"{name}\" class=\"field-label"));
    if field.required {
        html.push_str(" required");
    }
    html.push_str("\">");
    let icon = descriptor.icon();
    if !icon.is_empty() {
        html.push_str(&format!("<i class=\"icon-{}\"></i> ", escape_html(icon)));
    }
    html.push_str(&escape_html(descriptor.label_or(field.name)));
    if field.required {
        html.push_str(" *");
    }
    html.push_str("</label>\n");

    let control_type = descriptor.control();
    let control = match control_type {
        ControlType::Select => controls::select_field(field.name, descriptor),
        ControlType::Radio => controls::radio_group(field.name, descriptor),
        ControlType::Checkbox if descriptor.options.is_some() => {
            controls::checkbox_group(field.name, descriptor)
        }
        ControlType::Checkbox => controls::single_checkbox(field.name, descriptor),
        ControlType::Textarea => controls::textarea(field.name, descriptor),
        ControlType::Input(ref input_type) => controls::input_field(
            field.name,
            input_type,
            field.schema,
            descriptor,
            control_type.is_password(),
        ),
    };
    html.push_str(&control);

    let help_text = descriptor.help_text();
    if !help_text.is_empty() {
        html.push_str(&format!(
            "  <div class=\"help-text\">{}</div>\n",
            escape_html(help_text)
        ));
    }

    html.push_str(&format!(
        "  <div class=\"error-message\" id=\"error-{name}\"></div>\n"
    ));
    html.push_str("</div>\n\n");
    html
}

/// Escape text for use in HTML content and double-quoted attributes
#[must_use]
#[inline]
pub fn escape_html(input: &str) -> String {
    let mut out = String::with_capacity(input.len());
    for ch in input.chars() {
        match ch {
            '&' => out.push_str("&amp;"),
            '<' => out.push_str("&lt;"),
            '>' => out.push_str("&gt;"),
            '"' => out.push_str("&quot;"),
            '\'' => out.push_str("&#39;"),
            _ => out.push(ch),
        }
    }
    out
}
