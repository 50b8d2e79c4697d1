//! Template loader
//!
//! Every call re-fetches the template object; nothing is cached, so template
//! edits take effect on the next notification.

use std::sync::Arc;

use mediarelay_core::{DispatchError, JobTemplate};
use mediarelay_storage::{ObjectSource, StorageError};

#[derive(Clone)]
pub struct TemplateLoader {
    storage: Arc<dyn ObjectSource>,
}

impl TemplateLoader {
    pub fn new(storage: Arc<dyn ObjectSource>) -> Self {
        Self { storage }
    }

    /// Fetch `key` from `bucket` and parse it as a job template.
    #[tracing::instrument(skip(self))]
    pub async fn load(&self, bucket: &str, key: &str) -> Result<JobTemplate, DispatchError> {
        let body = self
            .storage
            .get(bucket, key)
            .await
            .map_err(|e| storage_error(bucket, key, e))?;

        let template = JobTemplate::from_slice(&body).map_err(|e| match e {
            DispatchError::Decode(reason) => {
                DispatchError::Decode(format!("template {}/{}: {}", bucket, key, reason))
            }
            other => other,
        })?;

        tracing::debug!(
            inputs = template.inputs.len(),
            output_groups = template.output_groups.len(),
            size_bytes = body.len(),
            "Template loaded"
        );

        Ok(template)
    }
}

fn storage_error(bucket: &str, key: &str, err: StorageError) -> DispatchError {
    match err {
        StorageError::NotFound(_) => DispatchError::NotFound(format!("{}/{}", bucket, key)),
        other => DispatchError::TemplateUnavailable(format!("{}/{}: {}", bucket, key, other)),
    }
}
