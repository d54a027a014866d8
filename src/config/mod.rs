//! Configuration management module
//!
//! Handles YAML configuration parsing, JSON schema validation, and resolution
//! of the form document paths

pub mod schema;
pub mod validation;
pub mod yaml;

use crate::system::System;
use serde::{Deserialize, Serialize};
use std::path::{Path, PathBuf};

/// Default location of the configuration file
pub const DEFAULT_CONFIG_PATH: &str = "./dynform.yaml";

/// Main configuration structure
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct Config {
    /// Path of the schema document
    #[serde(default = "default_schema_path")]
    pub schema: String,

    /// Path of the UI-configuration document
    #[serde(default = "default_ui_config_path")]
    pub ui_config: String,

    /// `action` attribute of the rendered `<form>`
    #[serde(default = "default_form_action")]
    pub form_action: String,

    /// Target of the "Go Back" link on the error page
    #[serde(default = "default_back_link")]
    pub back_link: String,

    /// Directory relative document paths are resolved against
    #[serde(skip)]
    pub base_dir: PathBuf,
}

impl Default for Config {
    fn default() -> Self {
        Self {
            schema: default_schema_path(),
            ui_config: default_ui_config_path(),
            form_action: default_form_action(),
            back_link: default_back_link(),
            base_dir: PathBuf::new(),
        }
    }
}

impl Config {
    /// Load configuration from file
    pub fn load_from_file(system: &dyn System, path: &str) -> anyhow::Result<Self> {
        yaml::load_config(system, path)
    }

    /// Validate configuration values
    pub fn validate(&self) -> anyhow::Result<()> {
        validation::validate_config(self)
    }

    /// Resolved path of the schema document
    #[must_use]
    pub fn schema_path(&self) -> PathBuf {
        self.resolve(&self.schema)
    }

    /// Resolved path of the UI-configuration document
    #[must_use]
    pub fn ui_config_path(&self) -> PathBuf {
        self.resolve(&self.ui_config)
    }

    fn resolve(&self, raw: &str) -> PathBuf {
        let path = Path::new(raw);
        if path.is_absolute() {
            path.to_path_buf()
        } else {
            self.base_dir.join(path)
        }
    }
}

fn default_schema_path() -> String {
    return "userSchema.json".to_owned();
}

fn default_ui_config_path() -> String {
    return "userUIConfig.json".to_owned();
}

fn default_form_action() -> String {
    return "submitForm".to_owned();
}

fn default_back_link() -> String {
    return "dynamicForm".to_owned();
}
