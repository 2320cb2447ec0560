use thiserror::Error;

#[derive(Debug, Clone, Error, PartialEq)]
pub enum FieldSchemaError {
    #[error("Field `{field}` has unsupported type `{declared_type}`")]
    UnsupportedType {
        field: String,
        declared_type: String,
    },
    #[error("Field `{field}` has an empty type")]
    EmptyTypeName { field: String },
}
