//! # Model Catalog Error Types
//!
//! Errors raised while registering table models and while resolving their
//! metadata into qualified names.
//!
//! ## Error Categories
//!
//! - **Resolution Errors**: a model is missing the schema name, table name or
//!   location prefix needed by the caller. These are raised lazily, at the
//!   point of use, never at declaration time.
//! - **Catalog Errors**: unknown or duplicate models and broken `extends`
//!   relations found while building a [`ModelRegistry`](super::ModelRegistry).
//! - **Configuration Errors**: file I/O and YAML parsing issues while loading
//!   a model catalog file.

use thiserror::Error;

#[derive(Debug, Clone, Error, PartialEq)]
pub enum ModelError {
    #[error("Schema name is not set on model `{model}` (set `schema_name`)")]
    SchemaNameNotSet { model: String },
    #[error("Table name is not set on model `{model}` (set `table_name`)")]
    TableNameNotSet { model: String },
    #[error("Location prefix is not set on model `{model}` (set `location_prefix`)")]
    LocationPrefixNotSet { model: String },
    #[error("No model named `{model}` is registered")]
    UnknownModel { model: String },
    #[error("Model `{model}` is registered more than once")]
    DuplicateModel { model: String },
    #[error("Model `{model}` extends `{parent}`, which is not registered")]
    UnknownParent { model: String, parent: String },
    #[error("Cyclic `extends` relation: {}", cycle.join(" -> "))]
    CyclicInheritance { cycle: Vec<String> },
    #[error("Failed to read model catalog: {error}")]
    ConfigReadError { error: String },
    #[error("Failed to parse model catalog: {error}")]
    ConfigParseError { error: String },
}

impl ModelError {
    /// True for the three lazily raised "not set" errors.
    pub fn is_not_set(&self) -> bool {
        matches!(
            self,
            ModelError::SchemaNameNotSet { .. }
                | ModelError::TableNameNotSet { .. }
                | ModelError::LocationPrefixNotSet { .. }
        )
    }
}
