use thiserror::Error;

use crate::field_schema::FieldSchemaError;
use crate::model_catalog::ModelError;

/// Errors surfaced by the statement builders.
///
/// Resolver and engine errors pass through unchanged.
#[derive(Debug, Clone, Error, PartialEq)]
pub enum DdlGeneratorError {
    #[error(transparent)]
    Model(#[from] ModelError),
    #[error(transparent)]
    FieldSchema(#[from] FieldSchemaError),
    #[error("Unknown statement kind `{0}` (expected one of: {1})")]
    UnknownStatement(String, String),
}

impl DdlGeneratorError {
    /// The resolver error behind this failure, if any
    pub fn model_error(&self) -> Option<&ModelError> {
        match self {
            DdlGeneratorError::Model(err) => Some(err),
            _ => None,
        }
    }
}
