use thiserror::Error;
use serde::Serialize;

use crate::core::resolver::ConversionError;

#[derive(Error, Debug, Serialize)]
pub enum AppError {
    #[error("I/O Error: {0}")]
    Io(String),

    #[error("Configuration Error: {0}")]
    Config(String),

    #[error("Calculation Error: {0}")]
    Calculation(String),

    #[error("Validation Error: {0}")]
    Validation(String),

    #[error("Unknown Error: {0}")]
    Unknown(String),
}

impl AppError {
    /// Message suitable for showing to the end user
    pub fn user_message(&self) -> String {
        match self {
            AppError::Calculation(msg) | AppError::Validation(msg) => msg.clone(),
            other => other.to_string(),
        }
    }
}

// Implement conversion from standard errors
impl From<std::io::Error> for AppError {
    fn from(err: std::io::Error) -> Self {
        AppError::Io(err.to_string())
    }
}

impl From<serde_json::Error> for AppError {
    fn from(err: serde_json::Error) -> Self {
        AppError::Config(format!("Serialization error: {}", err))
    }
}

// The reason stays in the logs; the user only ever sees the fixed message
impl From<ConversionError> for AppError {
    fn from(err: ConversionError) -> Self {
        tracing::warn!(reason = err.reason(), "conversion rejected");
        AppError::Calculation(err.to_string())
    }
}

pub type AppResult<T> = Result<T, AppError>;
