//! Generator configuration

use crate::error::{ScalegenError, ScalegenResult};
use serde::{Deserialize, Serialize};

/// Options controlling one generation run
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct GeneratorConfig {
    /// Emit per-step debug events from every pipeline stage
    #[serde(default)]
    pub debug: bool,

    /// Prepend the import header to the generated text
    #[serde(default)]
    pub prelude: bool,

    /// RPC namespace; stubs call `"<namespace>_<method>"`
    #[serde(default = "default_rpc_namespace")]
    pub rpc_namespace: String,

    /// Name of the leading call-target parameter of every stub
    #[serde(default = "default_target_param")]
    pub target_param: String,

    /// Log level used by the CLI when `RUST_LOG` is unset
    #[serde(default = "default_log_level")]
    pub log_level: String,
}

fn default_rpc_namespace() -> String {
    "nucleus".to_string()
}

fn default_target_param() -> String {
    "nucleusId".to_string()
}

fn default_log_level() -> String {
    "info".to_string()
}

impl Default for GeneratorConfig {
    fn default() -> Self {
        Self {
            debug: false,
            prelude: false,
            rpc_namespace: default_rpc_namespace(),
            target_param: default_target_param(),
            log_level: default_log_level(),
        }
    }
}

impl GeneratorConfig {
    /// Create a configuration with default values
    pub fn new() -> Self {
        Self::default()
    }

    /// Create configuration from JSON bytes
    ///
    /// Empty input yields the default configuration.
    pub fn from_json(bytes: &[u8]) -> ScalegenResult<Self> {
        if bytes.is_empty() {
            return Ok(Self::default());
        }
        serde_json::from_slice(bytes).map_err(|e| ScalegenError::InvalidConfig(e.to_string()))
    }

    /// Create configuration from TOML text
    pub fn from_toml(text: &str) -> ScalegenResult<Self> {
        Ok(toml::from_str(text)?)
    }

    /// Enable or disable debug events
    pub fn with_debug(mut self, debug: bool) -> Self {
        self.debug = debug;
        self
    }

    /// Enable or disable the import header
    pub fn with_prelude(mut self, prelude: bool) -> Self {
        self.prelude = prelude;
        self
    }

    pub fn with_rpc_namespace(mut self, namespace: impl Into<String>) -> Self {
        self.rpc_namespace = namespace.into();
        self
    }
}
