//! Field-schema engines.
//!
//! An engine turns a model's declared fields into an ordered list of
//! `{name, type}` columns. The DDL generator renders whatever the engine
//! returns, upper-casing the type, and never reorders columns.

pub mod column_info;
pub mod errors;
pub mod spark_types;

pub use column_info::ColumnInfo;
pub use errors::FieldSchemaError;
pub use spark_types::{spark_type, SparkTypeEngine};

use crate::model_catalog::ModelDefinition;

pub trait FieldSchemaEngine {
    /// Columns of `model` in field declaration order
    fn schema_of(&self, model: &ModelDefinition) -> Result<Vec<ColumnInfo>, FieldSchemaError>;
}

impl<F> FieldSchemaEngine for F
where
    F: Fn(&ModelDefinition) -> Result<Vec<ColumnInfo>, FieldSchemaError>,
{
    fn schema_of(&self, model: &ModelDefinition) -> Result<Vec<ColumnInfo>, FieldSchemaError> {
        self(model)
    }
}
