//! Configuration validation logic

use crate::config::Config;
use crate::error::FormError;
use anyhow::Result;
use std::path::Path;

/// Extensions a form document may have
const DOCUMENT_EXTENSIONS: [&str; 3] = ["json", "yaml", "yml"];

/// Validate a complete configuration
///
/// # Errors
///
/// Returns an error if:
/// - A document path is empty or has an unsupported extension
/// - The form action or back link is not a usable URL
#[inline]
pub fn validate_config(config: &Config) -> Result<()> {
    validate_document_path("schema", &config.schema)?;
    validate_document_path("uiConfig", &config.ui_config)?;
    validate_link("formAction", &config.form_action)?;
    validate_link("backLink", &config.back_link)?;
    Ok(())
}

/// Validate the path of a form document
///
/// # Errors
///
/// Returns an error if:
/// - The path is empty
/// - The extension is not `.json`, `.yaml` or `.yml`
#[inline]
pub fn validate_document_path(key: &str, path: &str) -> Result<()> {
    if path.trim().is_empty() {
        return Err(FormError::configuration(format!("{key}: Document path cannot be empty")).into());
    }

    let supported = Path::new(path)
        .extension()
        .and_then(|ext| ext.to_str())
        .is_some_and(|ext| {
            DOCUMENT_EXTENSIONS
                .iter()
                .any(|candidate| ext.eq_ignore_ascii_case(candidate))
        });

    if !supported {
        return Err(FormError::configuration(format!(
            "{key}: Unsupported document type '{path}'. Use a .json, .yaml or .yml file"
        ))
        .into());
    }

    Ok(())
}

/// Validate a URL that is written into an HTML attribute
///
/// # Errors
///
/// Returns an error if:
/// - The link is empty
/// - The link contains whitespace, quotes or angle brackets
#[inline]
pub fn validate_link(key: &str, link: &str) -> Result<()> {
    if link.is_empty() {
        return Err(FormError::configuration(format!("{key}: Link cannot be empty")).into());
    }

    if link
        .chars()
        .any(|c| c.is_whitespace() || matches!(c, '"' | '\'' | '<' | '>'))
    {
        return Err(FormError::configuration(format!(
            "{key}: Invalid link '{link}'. Links cannot contain whitespace, quotes or angle brackets"
        ))
        .into());
    }

    Ok(())
}
