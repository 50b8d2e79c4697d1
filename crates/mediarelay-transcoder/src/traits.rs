use async_trait::async_trait;
use serde_json::Value;
use std::collections::HashMap;
use thiserror::Error;

/// Transcoding service errors
#[derive(Debug, Error)]
pub enum TranscoderError {
    #[error("Job rejected ({status}): {error_type}: {message}")]
    Rejected {
        status: u16,
        error_type: String,
        message: String,
    },

    #[error("Transport error: {0}")]
    Transport(String),

    #[error("Credentials unavailable: {0}")]
    Credentials(String),

    #[error("Request signing failed: {0}")]
    Signing(String),

    #[error("Invalid response: {0}")]
    InvalidResponse(String),

    #[error("Configuration error: {0}")]
    ConfigError(String),
}

pub type TranscoderResult<T> = Result<T, TranscoderError>;

/// What the service returned for an accepted job.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct JobHandle {
    pub id: String,
    pub arn: Option<String>,
    pub status: Option<String>,
}

/// Managed transcoding service.
///
/// `settings` is the specialized job settings document, passed through opaquely.
#[async_trait]
pub trait Transcoder: Send + Sync {
    async fn submit(
        &self,
        role: &str,
        user_metadata: &HashMap<String, String>,
        settings: &Value,
    ) -> TranscoderResult<JobHandle>;
}
