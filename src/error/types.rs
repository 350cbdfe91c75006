// src/error/types.rs
use crate::domain::DomainError;
use serde::Serialize;
use thiserror::Error;

#[derive(Debug, Error)]
pub enum AppError {
    /// The movie service answered with a non-success HTTP status
    #[error("HTTP error! Status: {status_code}")]
    Transport { status_code: u16 },

    /// The movie service answered, but reported a logical failure in the payload
    #[error("{message}")]
    Api { message: String },

    #[error("Request failed: {0}")]
    Http(#[from] reqwest::Error),

    #[error("Serialization error: {0}")]
    Serialization(#[from] serde_json::Error),

    #[error("Malformed response: {0}")]
    Payload(String),

    #[error("Domain error: {0}")]
    Domain(#[from] DomainError),

    #[error("IO error: {0}")]
    Io(#[from] std::io::Error),

    #[error("Configuration error: {0}")]
    Config(String),
}

impl AppError {
    pub fn api(message: impl Into<String>) -> Self {
        AppError::Api {
            message: message.into(),
        }
    }
}

impl Serialize for AppError {
    fn serialize<S>(&self, serializer: S) -> Result<S::Ok, S::Error>
    where
        S: serde::Serializer,
    {
        serializer.serialize_str(&self.to_string())
    }
}

impl From<std::num::ParseIntError> for AppError {
    fn from(err: std::num::ParseIntError) -> Self {
        AppError::Payload(format!("Invalid integer: {}", err))
    }
}

pub type AppResult<T> = Result<T, AppError>;
