use thiserror::Error;

/// Errors that can occur while loading or saving the board configuration
#[derive(Debug, Error)]
pub enum ConfigError {
    #[error("Failed to access config file: {0}")]
    Io(#[from] std::io::Error),

    #[error("Failed to parse config: {0}")]
    Json(#[from] serde_json::Error),

    #[error("Invalid config value: {0}")]
    InvalidValue(String),
}

/// Result type for configuration operations
pub type ConfigResult<T> = Result<T, ConfigError>;
