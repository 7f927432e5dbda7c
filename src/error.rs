use std::path::PathBuf;
use thiserror::Error;

#[derive(Debug, Error)]
pub enum ShrinkError {
    #[error("ConfigurationError: API key is required and must be non-empty")]
    MissingKey,

    #[error("InvalidArgument: {0}")]
    InvalidArgument(String),

    #[error("File not found: {0}")]
    FileNotFound(PathBuf),

    #[error("File too large: {0} bytes. Maximum allowed: {1} bytes")]
    FileTooLarge(u64, u64),

    #[error("{kind}: {message}")]
    Service { kind: String, message: String },

    #[error("Transport error: {0}")]
    Transport(#[from] reqwest::Error),

    #[error("Malformed response: {0}")]
    MalformedResponse(#[from] serde_json::Error),

    #[error("I/O error: {0}")]
    Io(#[from] std::io::Error),
}

impl ShrinkError {
    /// Error kind as reported by the remote service, when the failure came
    /// from the service's error envelope.
    pub fn service_kind(&self) -> Option<&str> {
        match self {
            ShrinkError::Service { kind, .. } => Some(kind),
            _ => None,
        }
    }
}

pub type Result<T> = std::result::Result<T, ShrinkError>;
