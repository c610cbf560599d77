use thiserror::Error;

#[derive(Debug, Error)]
pub enum PrecinctError {
    #[error("Configuration error: {0}")]
    Config(String),

    #[error("Network error: {0}")]
    Network(String),

    #[error("HTTP {status}: {}", .message.as_deref().unwrap_or("no server message"))]
    Http { status: u16, message: Option<String> },

    #[error("Validation failed for '{field}': {message}")]
    Validation { field: String, message: String },

    #[error("Store rejected write: {0}")]
    Persistence(String),

    #[error("Not found: {0}")]
    NotFound(String),

    #[error("IO error: {0}")]
    Io(#[from] std::io::Error),

    #[error("JSON error: {0}")]
    Json(#[from] serde_json::Error),

    #[error("YAML error: {0}")]
    Yaml(#[from] serde_yaml::Error),

    #[error("Internal error: {0}")]
    Internal(String),
}

impl PrecinctError {
    pub fn validation(field: impl Into<String>, message: impl Into<String>) -> Self {
        PrecinctError::Validation {
            field: field.into(),
            message: message.into(),
        }
    }
}
