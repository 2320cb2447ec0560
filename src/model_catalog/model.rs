use indexmap::IndexMap;
use serde::{Deserialize, Serialize};

use super::grant::Grant;

/// Table properties in declaration order (rendered into `TBLPROPERTIES`)
pub type TableProperties = IndexMap<String, String>;

/// One declared field of a model
#[derive(Debug, Clone, Serialize, Deserialize, PartialEq, Eq)]
pub struct FieldDefinition {
    /// Column name
    pub name: String,
    /// Declared type, e.g. `str`, `int`, `Optional[datetime]`.
    /// Interpreted by the field-schema engine only.
    #[serde(rename = "type")]
    pub declared_type: String,
}

impl FieldDefinition {
    pub fn new(name: impl Into<String>, declared_type: impl Into<String>) -> Self {
        Self {
            name: name.into(),
            declared_type: declared_type.into(),
        }
    }
}

/// Declarative description of a single table.
///
/// Every metadata attribute is optional at declaration time. Missing values
/// only become errors when a caller needs them, see
/// [`ResolvedModel`](super::ResolvedModel).
///
/// Only `grants` merge across the `extends` relation. Catalog, schema, table,
/// location and properties belong to the model that declares them.
#[derive(Debug, Clone, Default, Serialize, Deserialize, PartialEq)]
pub struct ModelDefinition {
    /// Model name, unique within a registry
    pub name: String,
    /// Parent models, by name
    #[serde(default)]
    pub extends: Vec<String>,
    /// Optional catalog; absent means no catalog qualification
    #[serde(default)]
    pub catalog_name: Option<String>,
    #[serde(default)]
    pub schema_name: Option<String>,
    #[serde(default)]
    pub table_name: Option<String>,
    /// Storage prefix for external tables, e.g. `s3://bucket`
    #[serde(default)]
    pub location_prefix: Option<String>,
    /// Grants declared directly on this model
    #[serde(default)]
    pub grants: Vec<Grant>,
    #[serde(default)]
    pub table_properties: TableProperties,
    #[serde(default)]
    pub fields: Vec<FieldDefinition>,
}

impl ModelDefinition {
    pub fn new(name: impl Into<String>) -> Self {
        Self {
            name: name.into(),
            ..Default::default()
        }
    }

    pub fn extends(mut self, parent: impl Into<String>) -> Self {
        self.extends.push(parent.into());
        self
    }

    pub fn catalog(mut self, catalog_name: impl Into<String>) -> Self {
        self.catalog_name = Some(catalog_name.into());
        self
    }

    pub fn schema(mut self, schema_name: impl Into<String>) -> Self {
        self.schema_name = Some(schema_name.into());
        self
    }

    pub fn table(mut self, table_name: impl Into<String>) -> Self {
        self.table_name = Some(table_name.into());
        self
    }

    pub fn location(mut self, location_prefix: impl Into<String>) -> Self {
        self.location_prefix = Some(location_prefix.into());
        self
    }

    pub fn grant(mut self, grant: Grant) -> Self {
        self.grants.push(grant);
        self
    }

    pub fn property(mut self, key: impl Into<String>, value: impl Into<String>) -> Self {
        self.table_properties.insert(key.into(), value.into());
        self
    }

    pub fn field(mut self, name: impl Into<String>, declared_type: impl Into<String>) -> Self {
        self.fields.push(FieldDefinition::new(name, declared_type));
        self
    }
}
