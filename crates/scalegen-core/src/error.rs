//! Error types for scalegen

use thiserror::Error;

/// Result type alias for scalegen operations
pub type ScalegenResult<T> = Result<T, ScalegenError>;

/// Error type for scalegen operations
///
/// Code generation itself never fails; these errors cover reading input,
/// loading configuration, and strict validation in the CLI.
#[derive(Error, Debug)]
pub enum ScalegenError {
    /// Schema text could not be deserialized
    #[error("invalid schema: {0}")]
    InvalidSchema(String),

    /// Configuration could not be parsed
    #[error("invalid configuration: {0}")]
    InvalidConfig(String),

    /// Reading input or writing output failed
    #[error("I/O error: {0}")]
    Io(String),

    /// Strict validation found problems in the schema
    #[error("validation failed: {0}")]
    ValidationFailed(String),

    /// Internal error
    #[error("internal error: {0}")]
    Internal(String),
}

impl ScalegenError {
    /// Returns a stable error code, used by the CLI as its exit status
    pub fn error_code(&self) -> u8 {
        match self {
            ScalegenError::InvalidSchema(_) => 2,
            ScalegenError::InvalidConfig(_) => 3,
            ScalegenError::Io(_) => 4,
            ScalegenError::ValidationFailed(_) => 5,
            ScalegenError::Internal(_) => 70,
        }
    }
}

impl From<serde_json::Error> for ScalegenError {
    fn from(err: serde_json::Error) -> Self {
        ScalegenError::InvalidSchema(err.to_string())
    }
}

impl From<toml::de::Error> for ScalegenError {
    fn from(err: toml::de::Error) -> Self {
        ScalegenError::InvalidConfig(err.to_string())
    }
}

impl From<std::io::Error> for ScalegenError {
    fn from(err: std::io::Error) -> Self {
        ScalegenError::Io(err.to_string())
    }
}
