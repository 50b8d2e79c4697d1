//! Error types module
//!
//! `DispatchError` is the taxonomy every stage of the dispatch loop reports in.
//! Each variant describes how far its failure reaches through [`ErrorMetadata`]:
//! record-scoped errors abandon a single notification, batch-scoped errors fail
//! the whole invocation so the queue's own redelivery policy applies.

/// Log level for error reporting
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum LogLevel {
    /// Warning level - for records that were skipped
    Warn,
    /// Error level - for unexpected failures
    Error,
}

/// How far a failure propagates.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum ErrorScope {
    /// Abandon this notification record, continue with the rest of the batch.
    Record,
    /// Abort the batch and fail the invocation.
    Batch,
}

/// Metadata for error reporting - defines how an error is classified and logged
pub trait ErrorMetadata {
    /// Machine-readable error code (e.g., "DECODE_ERROR")
    fn error_code(&self) -> &'static str;

    /// Whether this error abandons one record or the whole batch
    fn scope(&self) -> ErrorScope;

    /// Log level for this error
    fn log_level(&self) -> LogLevel;
}

#[derive(Debug, thiserror::Error)]
pub enum DispatchError {
    #[error("Decode error: {0}")]
    Decode(String),

    #[error("Missing field: {0}")]
    MissingField(String),

    #[error("Not found: {0}")]
    NotFound(String),

    #[error("Template unavailable: {0}")]
    TemplateUnavailable(String),

    #[error("Unknown Output Group Type: {0}")]
    UnknownOutputGroupType(String),

    #[error("Job submission failed: {0}")]
    Submission(String),

    #[error("Unexpected error: {message}")]
    Fatal {
        message: String,
        #[source]
        source: anyhow::Error,
    },
}

impl DispatchError {
    pub fn fatal(source: anyhow::Error) -> Self {
        DispatchError::Fatal {
            message: source.to_string(),
            source,
        }
    }

    pub fn is_record_scoped(&self) -> bool {
        self.scope() == ErrorScope::Record
    }
}

impl From<serde_json::Error> for DispatchError {
    fn from(err: serde_json::Error) -> Self {
        DispatchError::Decode(format!("JSON parsing error: {}", err))
    }
}

impl From<std::str::Utf8Error> for DispatchError {
    fn from(err: std::str::Utf8Error) -> Self {
        DispatchError::Decode(format!("UTF-8 decoding error: {}", err))
    }
}

impl From<anyhow::Error> for DispatchError {
    fn from(err: anyhow::Error) -> Self {
        DispatchError::fatal(err)
    }
}

impl ErrorMetadata for DispatchError {
    fn error_code(&self) -> &'static str {
        match self {
            DispatchError::Decode(_) => "DECODE_ERROR",
            DispatchError::MissingField(_) => "MISSING_FIELD",
            DispatchError::NotFound(_) => "NOT_FOUND",
            DispatchError::TemplateUnavailable(_) => "TEMPLATE_UNAVAILABLE",
            DispatchError::UnknownOutputGroupType(_) => "UNKNOWN_OUTPUT_GROUP_TYPE",
            DispatchError::Submission(_) => "SUBMISSION_ERROR",
            DispatchError::Fatal { .. } => "FATAL_ERROR",
        }
    }

    fn scope(&self) -> ErrorScope {
        match self {
            DispatchError::Fatal { .. } => ErrorScope::Batch,
            _ => ErrorScope::Record,
        }
    }

    fn log_level(&self) -> LogLevel {
        match self {
            DispatchError::MissingField(_)
            | DispatchError::Decode(_)
            | DispatchError::NotFound(_)
            | DispatchError::TemplateUnavailable(_)
            | DispatchError::UnknownOutputGroupType(_) => LogLevel::Warn,
            DispatchError::Submission(_) | DispatchError::Fatal { .. } => LogLevel::Error,
        }
    }
}
