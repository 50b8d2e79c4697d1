//! Test helpers: in-memory storage, a recording transcoder and a dispatcher
//! wired to both.
//!
//! Run from workspace root: `cargo test -p mediarelay-worker`.

pub mod fixtures;

use async_trait::async_trait;
use mediarelay_storage::MemoryStorage;
use mediarelay_transcoder::{JobHandle, Transcoder, TranscoderError, TranscoderResult};
use mediarelay_worker::{Dispatcher, DispatcherConfig};
use serde_json::Value;
use std::collections::HashMap;
use std::sync::atomic::{AtomicBool, AtomicUsize, Ordering};
use std::sync::{Arc, Mutex};

pub const DESTINATION_BUCKET: &str = "vod-output";
pub const ROLE: &str = "arn:aws:iam::123456789012:role/MediaConvert_Default_Role";
pub const UPLOAD_BUCKET: &str = "uploads";

/// One captured `submit` call.
#[derive(Debug, Clone)]
pub struct SubmittedJob {
    pub role: String,
    pub user_metadata: HashMap<String, String>,
    pub settings: Value,
}

/// Transcoder that records submissions and can be told to reject them.
#[derive(Default)]
pub struct RecordingTranscoder {
    jobs: Mutex<Vec<SubmittedJob>>,
    reject_inputs: Mutex<Vec<String>>,
    credentials_unavailable: AtomicBool,
    counter: AtomicUsize,
}

impl RecordingTranscoder {
    pub fn new() -> Self {
        Self::default()
    }

    /// Reject any job whose first input is `input`.
    pub fn reject_input(&self, input: &str) {
        self.reject_inputs.lock().unwrap().push(input.to_string());
    }

    /// Fail every submission as if no AWS credentials could be resolved.
    pub fn lose_credentials(&self) {
        self.credentials_unavailable.store(true, Ordering::SeqCst);
    }

    pub fn jobs(&self) -> Vec<SubmittedJob> {
        self.jobs.lock().unwrap().clone()
    }
}

#[async_trait]
impl Transcoder for RecordingTranscoder {
    async fn submit(
        &self,
        role: &str,
        user_metadata: &HashMap<String, String>,
        settings: &Value,
    ) -> TranscoderResult<JobHandle> {
        if self.credentials_unavailable.load(Ordering::SeqCst) {
            return Err(TranscoderError::Credentials(
                "no providers in chain provided credentials".to_string(),
            ));
        }

        let input = settings["Inputs"][0]["FileInput"].as_str().unwrap_or_default();
        if self.reject_inputs.lock().unwrap().iter().any(|i| i == input) {
            return Err(TranscoderError::Rejected {
                status: 400,
                error_type: "BadRequestException".to_string(),
                message: format!("input {} rejected", input),
            });
        }

        self.jobs.lock().unwrap().push(SubmittedJob {
            role: role.to_string(),
            user_metadata: user_metadata.clone(),
            settings: settings.clone(),
        });

        let n = self.counter.fetch_add(1, Ordering::SeqCst) + 1;
        Ok(JobHandle {
            id: format!("job-{}", n),
            arn: None,
            status: Some("SUBMITTED".to_string()),
        })
    }
}

pub struct TestDispatcher {
    pub dispatcher: Dispatcher,
    pub storage: MemoryStorage,
    pub transcoder: Arc<RecordingTranscoder>,
}

pub fn dispatcher_config() -> DispatcherConfig {
    DispatcherConfig {
        destination_bucket: DESTINATION_BUCKET.to_string(),
        role: ROLE.to_string(),
        template_prefix: "transcoder_config".to_string(),
        application_label: "MediaConvertApp".to_string(),
    }
}

pub fn setup_dispatcher() -> TestDispatcher {
    let storage = MemoryStorage::new();
    let transcoder = Arc::new(RecordingTranscoder::new());
    let dispatcher = Dispatcher::new(
        Arc::new(storage.clone()),
        transcoder.clone(),
        dispatcher_config(),
    );

    TestDispatcher {
        dispatcher,
        storage,
        transcoder,
    }
}

/// Store `template` as the template of tenant folder `folder`.
pub fn put_template(storage: &MemoryStorage, folder: &str, template: &Value) {
    storage.put(
        UPLOAD_BUCKET,
        &format!("transcoder_config/{}.json", folder),
        serde_json::to_vec(template).unwrap(),
    );
}
