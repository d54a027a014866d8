//! Complete HTML pages: the form itself and the submission result views

use super::{escape_html, render_fields};
use crate::form::FormDocuments;
use crate::submit::{FormData, ValidationErrors};
use serde_json::Value;

/// Full HTML document wrapping the rendered fields in a `<form>`
#[must_use]
#[inline]
pub fn render_form_page(documents: &FormDocuments, form_action: &str) -> String {
    let ui = documents.ui();
    let title = escape_html(&ui.form_title);

    let mut html = page_head(&title);
    html.push_str(&format!("<h1>{title}</h1>\n"));
    html.push_str(&format!(
        "<form id=\"dynamicForm\" method=\"post\" action=\"{}\">\n",
        escape_html(form_action)
    ));
    html.push_str(&render_fields(documents));
    html.push_str(&format!(
        "<button type=\"submit\" id=\"submitBtn\" class=\"submit-button\">{}</button>\n",
        escape_html(&ui.submit_button_label)
    ));
    html.push_str("</form>\n");
    html.push_str(PAGE_TAIL);
    html
}

/// Confirmation page listing the accepted values
///
/// Password fields are never shown.
#[must_use]
#[inline]
pub fn render_success_page(documents: &FormDocuments, data: &FormData) -> String {
    let mut html = page_head("Form submitted");
    html.push_str("<h1>Form submitted successfully!</h1>\n");

    for (field, value) in &data.for_display() {
        html.push_str(&format!(
            "<p>{}: {}</p>\n",
            escape_html(documents.label_for(field)),
            escape_html(&display_value(value))
        ));
    }

    html.push_str(PAGE_TAIL);
    html
}

/// Error page listing one message per rejected field
#[must_use]
#[inline]
pub fn render_error_page(errors: &ValidationErrors, back_link: &str) -> String {
    let mut html = page_head("Form errors");

    for (_, message) in errors.iter() {
        html.push_str(&format!("<h2>Error: {}</h2>\n", escape_html(message)));
    }

    html.push_str(&format!(
        "<a href=\"{}\">Go Back</a>\n",
        escape_html(back_link)
    ));
    html.push_str(PAGE_TAIL);
    html
}

const PAGE_TAIL: &str = "</body>\n</html>\n";

fn page_head(title: &str) -> String {
    format!(
        "<!DOCTYPE html>\n<html>\n<head>\n<meta charset=\"utf-8\" />\n<title>{title}</title>\n</head>\n<body>\n"
    )
}

/// Human-readable rendering of an extracted value
fn display_value(value: &Value) -> String {
    match *value {
        Value::Null => String::new(),
        Value::String(ref s) => s.clone(),
        Value::Bool(b) => b.to_string(),
        Value::Number(ref n) => n.to_string(),
        Value::Array(ref items) => items
            .iter()
            .map(display_value)
            .collect::<Vec<_>>()
            .join(", "),
        Value::Object(_) => value.to_string(),
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use serde_json::json;

    #[test]
    fn display_value_joins_arrays() {
        assert_eq!(display_value(&json!(["a", "b"])), "a, b");
        assert_eq!(display_value(&Value::Null), "");
        assert_eq!(display_value(&json!(7)), "7");
    }
}
