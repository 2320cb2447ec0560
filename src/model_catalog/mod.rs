pub mod config;
pub mod environment;
pub mod errors;
pub mod grant;
pub mod model;
pub mod registry;

// Re-export commonly used types
pub use config::{load_registry, ModelCatalogConfig};
pub use environment::{ExecutionContext, FixedContext, RuntimeEnvProbe, DEFAULT_RUNTIME_ENV_VAR};
pub use errors::ModelError;
pub use grant::{Grant, GrantAction};
pub use model::{FieldDefinition, ModelDefinition, TableProperties};
pub use registry::{ModelRegistry, ResolvedModel, ABSENT_CATALOG_SEGMENT};
