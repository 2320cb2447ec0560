//! Delta table DDL generation.
//!
//! Statements are assembled from a [`ResolvedModel`](crate::model_catalog::ResolvedModel)
//! and the columns reported by a [`FieldSchemaEngine`](crate::field_schema::FieldSchemaEngine):
//!
//! ```text
//! CREATE TABLE IF NOT EXISTS {full_table_name} ({columns})
//! CREATE OR REPLACE TABLE {full_table_name} ({columns})
//! CREATE EXTERNAL TABLE IF NOT EXISTS {full_table_name} ({columns}) USING DELTA LOCATION '{prefix}/{full_table_name}'
//! CREATE OR REPLACE EXTERNAL TABLE {full_table_name} ({columns}) USING DELTA LOCATION '{prefix}/{full_table_name}'
//! ```
//!
//! each followed by ` TBLPROPERTIES(k = v, ...)` when the model declares
//! table properties. Output is a single line and byte-exact; names are not
//! quoted unless [`Quoting::Strict`] is requested.

mod errors;
mod quoting;
mod statement;
mod table_ddl;

pub use errors::DdlGeneratorError;
pub use quoting::{DdlOptions, Quoting};
pub use statement::TableStatement;
pub use table_ddl::DdlGenerator;
