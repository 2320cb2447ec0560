//! delta-ddl - Declarative table models to Delta Lake DDL
//!
//! This crate turns declared table models into DDL through:
//! - A model catalog with explicit `extends` relations and grant merging
//! - Environment-sensitive qualification of schema and table names
//! - A pluggable field-schema engine for column types
//! - Managed and external `CREATE TABLE` statement generation

pub mod config;
pub mod ddl_generator;
pub mod field_schema;
pub mod model_catalog;

pub use ddl_generator::{DdlGenerator, DdlGeneratorError, DdlOptions, TableStatement};
pub use field_schema::{ColumnInfo, FieldSchemaEngine, SparkTypeEngine};
pub use model_catalog::{
    ExecutionContext, Grant, GrantAction, ModelDefinition, ModelError, ModelRegistry,
    ResolvedModel,
};
