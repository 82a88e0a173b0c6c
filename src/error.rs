use thiserror::Error;

/// Main error type for the projection engine
#[derive(Error, Debug)]
pub enum PropcastError {
    // Configuration errors
    #[error("Configuration error: {0}")]
    Config(#[from] config::ConfigError),

    // Serialization errors
    #[error("JSON serialization error: {0}")]
    Json(#[from] serde_json::Error),

    // Caller-side validation errors
    #[error("Validation failed: {0}")]
    Validation(String),

    #[error("Unknown stat key: {0}")]
    UnknownStatKey(String),

    // Generic errors
    #[error("Internal error: {0}")]
    Internal(String),

    #[error("{0}")]
    Other(#[from] anyhow::Error),
}

/// Result type alias for PropcastError
pub type Result<T> = std::result::Result<T, PropcastError>;
