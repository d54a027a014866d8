//! Form documents
//!
//! The schema document and the UI configuration are loaded once into a
//! [`FormDocuments`] value that the renderer and the submission validator
//! borrow. Nothing mutates it after construction.

pub mod loader;
pub mod schema;
pub mod ui_config;

pub use schema::{FieldFormat, FieldSchema, FieldType, ItemsSchema, SchemaDocument};
pub use ui_config::{ControlType, FieldDescriptor, FieldOption, UiConfig};

use crate::system::System;
use anyhow::Result;
use loader::DocumentKind;
use serde_json::Value;
use std::path::Path;
use tracing::info;

/// A field that is both declared in the schema and configured for display
#[derive(Debug, Clone, Copy)]
pub struct RenderableField<'doc> {
    pub name: &'doc str,
    pub schema: &'doc FieldSchema,
    pub descriptor: &'doc FieldDescriptor,
    pub required: bool,
}

/// The two read-only documents a form is built from
#[derive(Debug, Clone, Default)]
pub struct FormDocuments {
    schema: SchemaDocument,
    ui: UiConfig,
}

impl FormDocuments {
    /// Create form documents from already typed parts
    #[must_use]
    #[inline]
    pub const fn new(schema: SchemaDocument, ui: UiConfig) -> Self {
        Self { schema, ui }
    }

    /// Load both documents from disk
    ///
    /// # Errors
    ///
    /// Returns an error if:
    /// - Either file is missing or unreadable
    /// - Either document cannot be parsed or violates its meta-schema
    #[inline]
    pub fn load(system: &dyn System, schema_path: &Path, ui_path: &Path) -> Result<Self> {
        let schema = loader::load_schema(system, schema_path)?;
        let ui = loader::load_ui_config(system, ui_path)?;

        info!(
            "Loaded form '{}' ({} schema properties, {} UI fields)",
            ui.form_title,
            schema.properties.len(),
            ui.fields.len()
        );

        Ok(Self::new(schema, ui))
    }

    /// Build form documents from untyped JSON values
    ///
    /// # Errors
    ///
    /// Returns an error if either value violates its meta-schema.
    #[inline]
    pub fn from_values(schema: Value, ui: Value) -> Result<Self> {
        Ok(Self::new(
            loader::parse_document(schema, DocumentKind::Schema)?,
            loader::parse_document(ui, DocumentKind::UiConfig)?,
        ))
    }

    #[must_use]
    #[inline]
    pub const fn schema(&self) -> &SchemaDocument {
        &self.schema
    }

    #[must_use]
    #[inline]
    pub const fn ui(&self) -> &UiConfig {
        &self.ui
    }

    /// Display label of a field: its UI label, else the field name
    #[must_use]
    #[inline]
    pub fn label_for<'a>(&'a self, name: &'a str) -> &'a str {
        self.ui
            .fields
            .get(name)
            .map_or(name, |descriptor| descriptor.label_or(name))
    }

    /// UI-configured fields sorted for rendering
    ///
    /// Fields are ordered by `order` ascending; fields without an `order` come
    /// last. The sort is stable, so ties keep their declaration order. Fields
    /// missing from the schema are returned as `None` so callers can log them.
    #[must_use]
    #[inline]
    pub fn ordered_fields(&self) -> Vec<(&str, Option<RenderableField<'_>>)> {
        let mut descriptors: Vec<(&String, &FieldDescriptor)> = self.ui.fields.iter().collect();
        descriptors.sort_by_key(|&(_, descriptor)| descriptor.sort_key());

        descriptors
            .into_iter()
            .map(|(name, descriptor)| {
                let field = self.schema.field(name).map(|schema| RenderableField {
                    name,
                    schema,
                    descriptor,
                    required: self.schema.is_required(name),
                });
                (name.as_str(), field)
            })
            .collect()
    }
}
