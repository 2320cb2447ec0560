//! Execution environment detection
//!
//! Catalog qualification only exists inside the target platform runtime.
//! Whether we are running there is the one piece of environment state the
//! resolver reads, so it sits behind [`ExecutionContext`] and tests can pin it
//! with [`FixedContext`] instead of touching the process environment.

use log::debug;
use std::env;

/// Environment variable set by the platform runtime
pub const DEFAULT_RUNTIME_ENV_VAR: &str = "DATABRICKS_RUNTIME_VERSION";

/// Reports whether the code runs inside the target platform
pub trait ExecutionContext {
    fn is_platform_runtime(&self) -> bool;
}

/// Probes the process environment; only the variable's presence matters
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct RuntimeEnvProbe {
    env_var: String,
}

impl RuntimeEnvProbe {
    pub fn new(env_var: impl Into<String>) -> Self {
        Self {
            env_var: env_var.into(),
        }
    }

    pub fn env_var(&self) -> &str {
        &self.env_var
    }
}

impl Default for RuntimeEnvProbe {
    fn default() -> Self {
        Self::new(DEFAULT_RUNTIME_ENV_VAR)
    }
}

impl ExecutionContext for RuntimeEnvProbe {
    fn is_platform_runtime(&self) -> bool {
        let present = env::var_os(&self.env_var).is_some();
        debug!("Runtime probe {} present: {}", self.env_var, present);
        present
    }
}

/// A context with a fixed answer
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct FixedContext(pub bool);

impl FixedContext {
    pub const PLATFORM: FixedContext = FixedContext(true);
    pub const LOCAL: FixedContext = FixedContext(false);
}

impl ExecutionContext for FixedContext {
    fn is_platform_runtime(&self) -> bool {
        self.0
    }
}

impl<T: ExecutionContext + ?Sized> ExecutionContext for &T {
    fn is_platform_runtime(&self) -> bool {
        (**self).is_platform_runtime()
    }
}

impl<T: ExecutionContext + ?Sized> ExecutionContext for Box<T> {
    fn is_platform_runtime(&self) -> bool {
        (**self).is_platform_runtime()
    }
}
