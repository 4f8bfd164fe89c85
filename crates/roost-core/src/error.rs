use thiserror::Error;

/// Top-level error type for the Roost system.
///
/// Each variant wraps a subsystem-specific error. Subsystem crates define
/// their own error types and convert into `RoostError` at crate boundaries
/// so that the `?` operator works seamlessly across the workspace.
#[derive(Debug, Error)]
#[non_exhaustive]
pub enum RoostError {
    #[error("Configuration error: {0}")]
    Config(String),

    #[error("Storage error: {0}")]
    Storage(String),

    #[error("Classifier error: {0}")]
    Classifier(String),

    #[error("API error: {0}")]
    Api(String),

    #[error("I/O error: {0}")]
    Io(#[from] std::io::Error),

    #[error("Serialization error: {0}")]
    Serialization(String),
}

impl From<toml::de::Error> for RoostError {
    fn from(err: toml::de::Error) -> Self {
        RoostError::Config(err.to_string())
    }
}

impl From<toml::ser::Error> for RoostError {
    fn from(err: toml::ser::Error) -> Self {
        RoostError::Config(err.to_string())
    }
}

impl From<serde_json::Error> for RoostError {
    fn from(err: serde_json::Error) -> Self {
        RoostError::Serialization(err.to_string())
    }
}

/// A specialized `Result` type for Roost operations.
pub type Result<T> = std::result::Result<T, RoostError>;
