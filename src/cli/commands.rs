//! CLI command implementations

use crate::cli::Args;
use crate::config::validation::validate_document_path;
use crate::config::{Config, DEFAULT_CONFIG_PATH};
use crate::error::FormError;
use crate::form::FormDocuments;
use crate::render::page::{render_error_page, render_form_page, render_success_page};
use crate::render::render_fields;
use crate::submit::{SubmissionValidator, SubmitOutcome, submit};
use crate::system::System;
use anyhow::{Context as _, Result};
use core::str::FromStr;
use std::path::{Path, PathBuf};
use tracing::{debug, info};

/// Output format for submission results
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
#[non_exhaustive]
pub enum OutputFormat {
    /// Success or error page
    Html,
    /// JSON object with the accepted data or the field errors
    Json,
}

impl FromStr for OutputFormat {
    type Err = String;

    #[inline]
    fn from_str(s: &str) -> Result<Self, Self::Err> {
        match s.to_lowercase().as_str() {
            "html" => Ok(Self::Html),
            "json" => Ok(Self::Json),
            _ => Err(format!("Invalid format: {s}. Use 'html' or 'json'")),
        }
    }
}

/// Load the configuration selected by `--config`
///
/// A missing file at the default location falls back to built-in defaults;
/// a missing file anywhere else is an error.
///
/// # Errors
///
/// Returns an error if:
/// - An explicitly named configuration file does not exist
/// - The configuration file cannot be parsed or is invalid
#[inline]
pub fn load_config(args: &Args, system: &dyn System) -> Result<Config> {
    if system.exists(Path::new(&args.config)) {
        return Config::load_from_file(system, &args.config);
    }

    if args.config != DEFAULT_CONFIG_PATH {
        return Err(FormError::configuration(format!(
            "Configuration file not found: {}",
            args.config
        ))
        .into());
    }

    debug!("No configuration file at {DEFAULT_CONFIG_PATH}, using defaults");
    let config = Config::default();
    config.validate()?;
    Ok(config)
}

/// Load configuration and both form documents, honouring CLI overrides
///
/// # Errors
///
/// Returns an error if the configuration or either document cannot be loaded.
#[inline]
pub fn load_form(args: &Args, system: &dyn System) -> Result<(Config, FormDocuments)> {
    let config = load_config(args, system)?;

    let schema_path = document_path("--schema", args.schema.as_deref(), || config.schema_path())?;
    let ui_path = document_path("--ui-config", args.ui_config.as_deref(), || {
        config.ui_config_path()
    })?;

    info!(
        "Loading form documents: {} and {}",
        schema_path.display(),
        ui_path.display()
    );
    let documents = FormDocuments::load(system, &schema_path, &ui_path)
        .context("Failed to load form documents")?;

    Ok((config, documents))
}

fn document_path(
    flag: &str,
    cli_override: Option<&str>,
    from_config: impl FnOnce() -> PathBuf,
) -> Result<PathBuf> {
    match cli_override {
        Some(path) => {
            validate_document_path(flag, path)?;
            Ok(PathBuf::from(path))
        }
        None => Ok(from_config()),
    }
}

/// Render the form as a fragment, or as a full page with `--page`
///
/// # Errors
///
/// Returns an error if the form cannot be loaded.
#[inline]
pub fn execute_render(args: &Args, system: &dyn System) -> Result<String> {
    let (config, documents) = load_form(args, system)?;

    if args.page {
        Ok(render_form_page(&documents, &config.form_action))
    } else {
        Ok(render_fields(&documents))
    }
}

/// Validate the submitted data and format the outcome
///
/// A rejected submission is not an error here; callers inspect the outcome.
///
/// # Errors
///
/// Returns an error if:
/// - The form cannot be loaded
/// - The submitted data cannot be parsed
/// - A schema pattern is invalid
#[inline]
pub fn execute_submit(
    args: &Args,
    system: &dyn System,
    format: OutputFormat,
) -> Result<(String, SubmitOutcome)> {
    let (config, documents) = load_form(args, system)?;
    let submission = args.submission()?;
    debug!(
        "Submitted fields: {}",
        submission.field_names().collect::<Vec<_>>().join(", ")
    );

    let validator = SubmissionValidator::new(&documents)?;
    let outcome = submit(&validator, &submission);

    let output = match format {
        OutputFormat::Json => serde_json::to_string_pretty(&outcome.to_display_json())
            .context("Failed to serialize submission result")?,
        OutputFormat::Html => match outcome {
            SubmitOutcome::Accepted(ref data) => render_success_page(&documents, data),
            SubmitOutcome::Rejected(ref errors) => render_error_page(errors, &config.back_link),
        },
    };

    Ok((output, outcome))
}
