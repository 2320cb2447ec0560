//! Model catalog files.
//!
//! Table models are declared once, statically, in a YAML catalog:
//!
//! ```yaml
//! models:
//!   - name: Audited              # Model name, unique in the catalog
//!     grants:
//!       - { action: select, principal: auditors }
//!   - name: Events
//!     extends: [Audited]         # Grants merge from every parent
//!     catalog_name: main         # Only used inside the platform runtime
//!     schema_name: raw
//!     table_name: events
//!     location_prefix: s3://lake # Needed for external tables only
//!     table_properties:          # Rendered in declaration order
//!       delta.appendOnly: "true"
//!     fields:
//!       - { name: id, type: int }
//!       - { name: at, type: datetime }
//! ```
//!
//! Models may appear in any order; parents are registered first.

use log::info;
use serde::{Deserialize, Serialize};
use std::fs;
use std::path::Path;

use super::errors::ModelError;
use super::model::ModelDefinition;
use super::registry::ModelRegistry;

/// Parsed model catalog file
#[derive(Debug, Clone, Default, Serialize, Deserialize)]
pub struct ModelCatalogConfig {
    /// Optional catalog file name, for logging
    #[serde(default)]
    pub name: Option<String>,
    #[serde(default)]
    pub models: Vec<ModelDefinition>,
}

impl ModelCatalogConfig {
    pub fn from_yaml_str(yaml: &str) -> Result<Self, ModelError> {
        serde_yaml::from_str(yaml).map_err(|e| ModelError::ConfigParseError {
            error: e.to_string(),
        })
    }

    pub fn from_yaml_file<P: AsRef<Path>>(path: P) -> Result<Self, ModelError> {
        let path = path.as_ref();
        let content = fs::read_to_string(path).map_err(|e| ModelError::ConfigReadError {
            error: format!("{}: {}", path.display(), e),
        })?;
        Self::from_yaml_str(&content)
    }

    /// Validate the `extends` relation and build the registry
    pub fn into_registry(self) -> Result<ModelRegistry, ModelError> {
        let name = self.name.unwrap_or_else(|| "<unnamed>".to_string());
        let registry = ModelRegistry::from_models(self.models)?;
        info!(
            "Loaded model catalog {} with {} model(s)",
            name,
            registry.len()
        );
        Ok(registry)
    }
}

/// Load a catalog file straight into a registry
pub fn load_registry<P: AsRef<Path>>(path: P) -> Result<ModelRegistry, ModelError> {
    ModelCatalogConfig::from_yaml_file(path)?.into_registry()
}
