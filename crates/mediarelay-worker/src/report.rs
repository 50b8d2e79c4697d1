//! Outcomes of a dispatched batch

use serde::Serialize;
use uuid::Uuid;

/// Message returned when every record reached a terminal state.
pub const BATCH_COMPLETED_MESSAGE: &str = "SQS processing completed successfully!";

/// Last state a record reached before it was submitted or skipped.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize)]
#[serde(rename_all = "snake_case")]
pub enum RecordStage {
    Received,
    Unwrapped,
    ConfigResolved,
    TemplateLoaded,
    Specialized,
}

#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
#[serde(tag = "outcome", rename_all = "snake_case")]
pub enum RecordOutcome {
    Submitted {
        message_id: Option<String>,
        job_id: String,
        asset_id: Uuid,
    },
    Skipped {
        message_id: Option<String>,
        stage: RecordStage,
        error_code: &'static str,
        reason: String,
    },
}

impl RecordOutcome {
    pub fn is_submitted(&self) -> bool {
        matches!(self, RecordOutcome::Submitted { .. })
    }
}

/// Per-record outcomes in delivery order.
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize)]
pub struct BatchReport {
    pub outcomes: Vec<RecordOutcome>,
}

impl BatchReport {
    pub fn submitted(&self) -> usize {
        self.outcomes.iter().filter(|o| o.is_submitted()).count()
    }

    pub fn skipped(&self) -> usize {
        self.outcomes.len() - self.submitted()
    }

    pub fn status(&self) -> StatusResult {
        StatusResult {
            status_code: 200,
            message: BATCH_COMPLETED_MESSAGE.to_string(),
        }
    }
}

/// Invocation result: `{"statusCode": 200, "body": "..."}`
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
pub struct StatusResult {
    #[serde(rename = "statusCode")]
    pub status_code: u16,
    #[serde(rename = "body")]
    pub message: String,
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn counts_and_status() {
        let report = BatchReport {
            outcomes: vec![
                RecordOutcome::Submitted {
                    message_id: Some("m-1".to_string()),
                    job_id: "job-1".to_string(),
                    asset_id: Uuid::new_v4(),
                },
                RecordOutcome::Skipped {
                    message_id: Some("m-2".to_string()),
                    stage: RecordStage::Received,
                    error_code: "DECODE_ERROR",
                    reason: "JSON parsing error".to_string(),
                },
            ],
        };

        assert_eq!(report.submitted(), 1);
        assert_eq!(report.skipped(), 1);

        let status = serde_json::to_value(report.status()).unwrap();
        assert_eq!(
            status,
            serde_json::json!({"statusCode": 200, "body": "SQS processing completed successfully!"})
        );
    }
}
