use reqwest::StatusCode;
use thiserror::Error;

use crate::config::REQUIRED_ENV_VARS;

pub type Result<T, E = PersistenceError> = std::result::Result<T, E>;

#[derive(Debug, Error)]
pub enum PersistenceError {
    #[error(
        "Missing env vars. Need: {} (missing: {})",
        REQUIRED_ENV_VARS.join(", "),
        .missing.join(", ")
    )]
    ConfigurationMissing { missing: Vec<&'static str> },

    #[error("Pica passthrough failed: {status}")]
    Provider { status: StatusCode, body: String },

    #[error("Pica passthrough request failed: {0}")]
    Transport(#[from] reqwest::Error),

    #[error("Invalid passthrough response: {0}")]
    InvalidResponse(#[from] serde_json::Error),

    #[error("Invalid passthrough URL: {0}")]
    InvalidUrl(#[from] url::ParseError),
}

impl PersistenceError {
    /// Raw upstream body, kept for diagnostics.
    pub fn details(&self) -> Option<&str> {
        match self {
            PersistenceError::Provider { body, .. } => Some(body),
            _ => None,
        }
    }
}
