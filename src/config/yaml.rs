//! YAML configuration loading and parsing

use crate::config::Config;
use crate::error::FormError;
use crate::system::System;
use anyhow::{Context as _, Result};
use serde_json::Value;
use std::path::Path;

/// Load and parse YAML configuration from file
///
/// # Errors
///
/// Returns an error if:
/// - The file does not exist or cannot be read
/// - The YAML is malformed or violates the configuration schema
/// - A configured value fails validation
pub fn load_config(system: &dyn System, path: &str) -> Result<Config> {
    let path_obj = Path::new(path);

    if !system.exists(path_obj) {
        return Err(FormError::configuration(format!(
            "Configuration file not found: {path}\n\
            Create a dynform.yaml file or specify a different path with --config"
        ))
        .into());
    }

    let content = system
        .read_to_string(path_obj)
        .with_context(|| format!("Failed to read configuration file: {path}"))?;

    let mut value: Value = serde_yaml::from_str(&content).map_err(|e| {
        FormError::configuration(format!(
            "Failed to parse YAML configuration in file: {path}\n{e}"
        ))
    })?;

    // An empty file means "all defaults"
    if value.is_null() {
        value = Value::Object(serde_json::Map::new());
    }

    crate::config::schema::validate_against_schema(&value)
        .map_err(|e| FormError::configuration(format!("{path}: {e}")))?;

    let mut config: Config = serde_json::from_value(value)
        .map_err(|e| FormError::configuration(format!("{path}: {e}")))?;

    config.base_dir = path_obj
        .parent()
        .map(Path::to_path_buf)
        .unwrap_or_default();

    crate::config::validation::validate_config(&config)
        .with_context(|| format!("Configuration validation failed: {path}"))?;

    Ok(config)
}
