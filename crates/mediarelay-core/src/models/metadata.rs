use std::collections::HashMap;

use uuid::Uuid;

/// Tags attached to a submitted job for traceability. Lives until submission.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct JobMetadata {
    pub asset_id: Uuid,
    pub application: String,
    pub input: String,
    pub settings: String,
}

impl JobMetadata {
    /// Fresh metadata with a newly generated asset identifier.
    pub fn new(application: &str, input: &str, folder_name: &str) -> Self {
        Self {
            asset_id: Uuid::new_v4(),
            application: application.to_string(),
            input: input.to_string(),
            settings: format!("{}.json", folder_name),
        }
    }

    /// The `UserMetadata` map sent with the job.
    pub fn to_user_metadata(&self) -> HashMap<String, String> {
        HashMap::from([
            ("assetID".to_string(), self.asset_id.to_string()),
            ("application".to_string(), self.application.clone()),
            ("input".to_string(), self.input.clone()),
            ("settings".to_string(), self.settings.clone()),
        ])
    }
}
