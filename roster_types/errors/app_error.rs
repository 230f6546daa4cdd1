use thiserror::Error;

/// Errors for malformed requests reaching the app layer.
#[derive(Debug, Error)]
pub enum AppError {
    #[error("Invalid player id '{0}': must be a positive integer")]
    InvalidPlayerId(String),

    #[error("Invalid value '{value}' for parameter '{key}'")]
    InvalidParam { key: String, value: String },

    #[error("Invalid request body: {0}")]
    InvalidBody(String),
}
