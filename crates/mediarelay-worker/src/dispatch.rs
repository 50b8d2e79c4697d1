//! Dispatch loop: one job submission per storage notification.
//!
//! Records in a batch are processed one after another. A record moves through
//! `Unwrapped -> ConfigResolved -> TemplateLoaded -> Specialized -> Submitted`;
//! a record-scoped failure at any step skips that record and the loop moves on.
//! A batch-scoped failure stops the loop and is returned to the caller, which
//! fails the invocation so the queue redelivers the batch.
//!
//! Nothing is deduplicated: a redelivered notification submits another job
//! with a new asset id.

use std::sync::Arc;

use tracing::Instrument;

use mediarelay_core::{
    specialize, Config, DispatchError, ErrorMetadata, JobMetadata, LogLevel, NotificationEnvelope,
    SourceObject,
};
use mediarelay_storage::ObjectSource;
use mediarelay_transcoder::{Transcoder, TranscoderError};

use crate::loader::TemplateLoader;
use crate::report::{BatchReport, RecordOutcome, RecordStage};

/// One queue message as delivered to the function.
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct QueueMessage {
    pub message_id: Option<String>,
    pub body: Option<String>,
}

impl QueueMessage {
    pub fn new(message_id: impl Into<String>, body: impl Into<String>) -> Self {
        Self {
            message_id: Some(message_id.into()),
            body: Some(body.into()),
        }
    }
}

/// Values fixed for the lifetime of the process.
#[derive(Debug, Clone)]
pub struct DispatcherConfig {
    pub destination_bucket: String,
    pub role: String,
    pub template_prefix: String,
    pub application_label: String,
}

impl From<&Config> for DispatcherConfig {
    fn from(config: &Config) -> Self {
        Self {
            destination_bucket: config.destination_bucket.clone(),
            role: config.mediaconvert_role.clone(),
            template_prefix: config.template_prefix.clone(),
            application_label: config.job_application_label.clone(),
        }
    }
}

pub struct Dispatcher {
    loader: TemplateLoader,
    transcoder: Arc<dyn Transcoder>,
    config: DispatcherConfig,
}

struct Submitted {
    job_id: String,
    asset_id: uuid::Uuid,
}

impl Dispatcher {
    pub fn new(
        storage: Arc<dyn ObjectSource>,
        transcoder: Arc<dyn Transcoder>,
        config: DispatcherConfig,
    ) -> Self {
        Self {
            loader: TemplateLoader::new(storage),
            transcoder,
            config,
        }
    }

    /// Process every record of a batch in order.
    ///
    /// Returns the per-record outcomes once all records are submitted or
    /// skipped, or the first batch-scoped error.
    pub async fn dispatch_batch(
        &self,
        messages: &[QueueMessage],
    ) -> Result<BatchReport, DispatchError> {
        let mut report = BatchReport::default();

        for message in messages {
            let span = tracing::info_span!(
                "dispatch_record",
                message_id = message.message_id.as_deref().unwrap_or("-")
            );
            let outcome = self.dispatch_record(message).instrument(span).await?;
            report.outcomes.push(outcome);
        }

        tracing::info!(
            records = messages.len(),
            submitted = report.submitted(),
            skipped = report.skipped(),
            "Batch dispatched"
        );

        Ok(report)
    }

    /// Run one record to a terminal state.
    ///
    /// Record-scoped errors become `Skipped`; batch-scoped errors are returned.
    pub async fn dispatch_record(
        &self,
        message: &QueueMessage,
    ) -> Result<RecordOutcome, DispatchError> {
        let mut stage = RecordStage::Received;

        match self.submit_record(message, &mut stage).await {
            Ok(submitted) => Ok(RecordOutcome::Submitted {
                message_id: message.message_id.clone(),
                job_id: submitted.job_id,
                asset_id: submitted.asset_id,
            }),
            Err(err) if err.is_record_scoped() => {
                log_skipped(&err, stage);
                Ok(RecordOutcome::Skipped {
                    message_id: message.message_id.clone(),
                    stage,
                    error_code: err.error_code(),
                    reason: err.to_string(),
                })
            }
            Err(err) => {
                tracing::error!(
                    error = %err,
                    error_code = err.error_code(),
                    stage = ?stage,
                    "Record failed, aborting batch"
                );
                Err(err)
            }
        }
    }

    async fn submit_record(
        &self,
        message: &QueueMessage,
        stage: &mut RecordStage,
    ) -> Result<Submitted, DispatchError> {
        let body = message
            .body
            .as_deref()
            .ok_or_else(|| DispatchError::MissingField("body".to_string()))?;
        let envelope = NotificationEnvelope::parse(body)?;
        let object = envelope.object_ref()?;
        *stage = RecordStage::Unwrapped;

        let source = SourceObject::from_event(&object)?;
        let config_key = source.config_key(&self.config.template_prefix);
        tracing::info!(
            bucket = %source.bucket,
            key = %source.key,
            config_key = %config_key,
            "Resolved template for uploaded object"
        );
        *stage = RecordStage::ConfigResolved;

        let mut template = self.loader.load(&source.bucket, &config_key).await?;
        *stage = RecordStage::TemplateLoaded;

        let source_path = source.source_path();
        specialize(
            &mut template,
            &source_path,
            &source.output_folder_name,
            &self.config.destination_bucket,
        )?;
        *stage = RecordStage::Specialized;

        let metadata = JobMetadata::new(
            &self.config.application_label,
            &source_path,
            &source.folder_name,
        );
        let settings = template.to_settings()?;
        tracing::debug!(asset_id = %metadata.asset_id, settings = %settings, "Specialized job settings");

        let handle = self
            .transcoder
            .submit(&self.config.role, &metadata.to_user_metadata(), &settings)
            .await
            .map_err(submission_error)?;

        tracing::info!(
            job_id = %handle.id,
            asset_id = %metadata.asset_id,
            input = %source_path,
            "Transcoding job submitted"
        );

        Ok(Submitted {
            job_id: handle.id,
            asset_id: metadata.asset_id,
        })
    }
}

/// Failures that would repeat for every record (no credentials, unsignable
/// request) fail the batch; everything else skips the record.
fn submission_error(err: TranscoderError) -> DispatchError {
    match err {
        TranscoderError::Credentials(_) | TranscoderError::Signing(_) => {
            DispatchError::fatal(anyhow::Error::new(err))
        }
        other => DispatchError::Submission(other.to_string()),
    }
}

fn log_skipped(err: &DispatchError, stage: RecordStage) {
    match err.log_level() {
        LogLevel::Warn => tracing::warn!(
            error = %err,
            error_code = err.error_code(),
            stage = ?stage,
            "Record skipped"
        ),
        LogLevel::Error => tracing::error!(
            error = %err,
            error_code = err.error_code(),
            stage = ?stage,
            "Record skipped"
        ),
    }
}
