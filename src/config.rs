use serde::{Deserialize, Serialize};
use std::env;
use thiserror::Error;
use validator::Validate;

use crate::ddl_generator::{DdlOptions, Quoting};
use crate::model_catalog::{ExecutionContext, FixedContext, RuntimeEnvProbe, DEFAULT_RUNTIME_ENV_VAR};

/// Configuration errors
#[derive(Error, Debug)]
pub enum ConfigError {
    #[error("Environment variable error: {0}")]
    EnvVar(#[from] std::env::VarError),

    #[error("Parse error for {field}: {value} - {source}")]
    Parse {
        field: String,
        value: String,
        source: Box<dyn std::error::Error + Send + Sync>,
    },

    #[error("Validation error: {0}")]
    Validation(#[from] validator::ValidationErrors),
}

/// Generator configuration with validation
#[derive(Clone, Debug, Validate, Serialize, Deserialize, PartialEq)]
pub struct GeneratorConfig {
    /// Environment variable whose presence marks the platform runtime
    #[validate(length(min = 1, message = "Runtime environment variable name cannot be empty"))]
    #[serde(default = "default_runtime_env_var")]
    pub runtime_env_var: String,

    /// Overrides the runtime probe when set
    #[serde(default)]
    pub force_platform_runtime: Option<bool>,

    /// Quote identifiers and property literals (deviates from the default format)
    #[serde(default)]
    pub strict_quoting: bool,
}

fn default_runtime_env_var() -> String {
    DEFAULT_RUNTIME_ENV_VAR.to_string()
}

impl Default for GeneratorConfig {
    fn default() -> Self {
        Self {
            runtime_env_var: default_runtime_env_var(),
            force_platform_runtime: None,
            strict_quoting: false,
        }
    }
}

impl GeneratorConfig {
    /// Create configuration from environment variables with validation
    pub fn from_env() -> Result<Self, ConfigError> {
        let config = Self {
            runtime_env_var: env::var("DELTA_DDL_RUNTIME_ENV_VAR")
                .unwrap_or_else(|_| default_runtime_env_var()),
            force_platform_runtime: parse_optional_env_var("DELTA_DDL_FORCE_PLATFORM_RUNTIME")?,
            strict_quoting: parse_env_var("DELTA_DDL_STRICT_QUOTING", "false")?,
        };

        config.validate()?;
        Ok(config)
    }

    /// Create configuration from YAML file
    pub fn from_yaml_file<P: AsRef<std::path::Path>>(path: P) -> Result<Self, ConfigError> {
        let content = std::fs::read_to_string(path).map_err(|e| ConfigError::Parse {
            field: "yaml_file".to_string(),
            value: "file read failed".to_string(),
            source: Box::new(e),
        })?;

        let config: Self = serde_yaml::from_str(&content).map_err(|e| ConfigError::Parse {
            field: "yaml_content".to_string(),
            value: content,
            source: Box::new(e),
        })?;

        config.validate()?;
        Ok(config)
    }

    /// Layered configuration: YAML file if given, else environment, then CLI overrides
    pub fn from_sources<P: AsRef<std::path::Path>>(
        config_file: Option<P>,
        cli: CliConfig,
    ) -> Result<Self, ConfigError> {
        let mut config = match config_file {
            Some(path) => Self::from_yaml_file(path)?,
            None => Self::from_env()?,
        };
        config.merge(cli);

        config.validate()?;
        Ok(config)
    }

    /// Apply CLI overrides; only flags the user actually passed win
    pub fn merge(&mut self, cli: CliConfig) {
        if let Some(runtime_env_var) = cli.runtime_env_var {
            self.runtime_env_var = runtime_env_var;
        }
        if cli.force_platform_runtime.is_some() {
            self.force_platform_runtime = cli.force_platform_runtime;
        }
        self.strict_quoting |= cli.strict_quoting;
    }

    /// The execution context described by this configuration
    pub fn execution_context(&self) -> Box<dyn ExecutionContext> {
        match self.force_platform_runtime {
            Some(forced) => Box::new(FixedContext(forced)),
            None => Box::new(RuntimeEnvProbe::new(self.runtime_env_var.clone())),
        }
    }

    pub fn ddl_options(&self) -> DdlOptions {
        DdlOptions {
            quoting: if self.strict_quoting {
                Quoting::Strict
            } else {
                Quoting::Verbatim
            },
        }
    }
}

/// CLI configuration (parsed from command line arguments)
#[derive(Clone, Debug)]
pub struct CliConfig {
    pub runtime_env_var: Option<String>,
    pub force_platform_runtime: Option<bool>,
    pub strict_quoting: bool,
}

/// Parse an environment variable with a default value
fn parse_env_var<T: std::str::FromStr>(key: &str, default: &str) -> Result<T, ConfigError>
where
    T::Err: std::error::Error + Send + Sync + 'static,
{
    let value = env::var(key).unwrap_or_else(|_| default.to_string());
    value.parse().map_err(|e| ConfigError::Parse {
        field: key.to_string(),
        value,
        source: Box::new(e),
    })
}

/// Parse an environment variable that may be unset
fn parse_optional_env_var<T: std::str::FromStr>(key: &str) -> Result<Option<T>, ConfigError>
where
    T::Err: std::error::Error + Send + Sync + 'static,
{
    match env::var(key) {
        Ok(value) => value.parse().map(Some).map_err(|e| ConfigError::Parse {
            field: key.to_string(),
            value,
            source: Box::new(e),
        }),
        Err(env::VarError::NotPresent) => Ok(None),
        Err(e) => Err(e.into()),
    }
}
