//! Storage "object created" notifications as delivered in a queue message body.
//!
//! The body is itself JSON: `{"Records":[{"s3":{"bucket":{"name":..},"object":{"key":..}}}]}`.
//! Every nested field is optional at parse time so that a structurally valid
//! but incomplete body reports `MissingField` rather than `Decode`.

use serde::Deserialize;

use crate::error::DispatchError;

#[derive(Debug, Clone, Default, Deserialize)]
pub struct NotificationEnvelope {
    #[serde(rename = "Records", default)]
    pub records: Vec<StorageEventRecord>,
}

#[derive(Debug, Clone, Default, Deserialize)]
pub struct StorageEventRecord {
    #[serde(rename = "eventName", default)]
    pub event_name: Option<String>,
    #[serde(default)]
    pub s3: Option<S3Entity>,
}

#[derive(Debug, Clone, Default, Deserialize)]
pub struct S3Entity {
    #[serde(default)]
    pub bucket: Option<S3Bucket>,
    #[serde(default)]
    pub object: Option<S3Object>,
}

#[derive(Debug, Clone, Default, Deserialize)]
pub struct S3Bucket {
    #[serde(default)]
    pub name: Option<String>,
}

#[derive(Debug, Clone, Default, Deserialize)]
pub struct S3Object {
    #[serde(default)]
    pub key: Option<String>,
}

/// Bucket and (still URL-encoded) key of the object a notification refers to.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct StorageObjectRef {
    pub bucket: String,
    pub key: String,
}

impl NotificationEnvelope {
    /// Parse a queue message body.
    pub fn parse(body: &str) -> Result<Self, DispatchError> {
        Ok(serde_json::from_str(body)?)
    }

    /// The object named by the first storage event in the envelope.
    ///
    /// Storage services publish one event per notification; test events carry
    /// no `Records` at all and report `MissingField`.
    pub fn object_ref(&self) -> Result<StorageObjectRef, DispatchError> {
        let s3 = self
            .records
            .first()
            .ok_or_else(|| DispatchError::MissingField("Records[0]".to_string()))?
            .s3
            .as_ref()
            .ok_or_else(|| DispatchError::MissingField("Records[0].s3".to_string()))?;

        let bucket = s3
            .bucket
            .as_ref()
            .and_then(|b| b.name.as_deref())
            .filter(|name| !name.is_empty())
            .ok_or_else(|| DispatchError::MissingField("Records[0].s3.bucket.name".to_string()))?;

        let key = s3
            .object
            .as_ref()
            .and_then(|o| o.key.as_deref())
            .filter(|key| !key.is_empty())
            .ok_or_else(|| DispatchError::MissingField("Records[0].s3.object.key".to_string()))?;

        Ok(StorageObjectRef {
            bucket: bucket.to_string(),
            key: key.to_string(),
        })
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::error::ErrorMetadata;

    #[test]
    fn extracts_bucket_and_key() {
        let body = r#"{"Records":[{"eventName":"ObjectCreated:Put","s3":{"bucket":{"name":"uploads"},"object":{"key":"videos/clip.mp4","size":1024}}}]}"#;
        let object = NotificationEnvelope::parse(body).unwrap().object_ref().unwrap();
        assert_eq!(object.bucket, "uploads");
        assert_eq!(object.key, "videos/clip.mp4");
    }

    #[test]
    fn malformed_body_is_a_decode_error() {
        let err = NotificationEnvelope::parse("{\"Records\": [").unwrap_err();
        assert_eq!(err.error_code(), "DECODE_ERROR");
    }

    #[test]
    fn test_event_without_records_is_missing_field() {
        let body = r#"{"Service":"Amazon S3","Event":"s3:TestEvent","Bucket":"uploads"}"#;
        let err = NotificationEnvelope::parse(body)
            .unwrap()
            .object_ref()
            .unwrap_err();
        assert_eq!(err.error_code(), "MISSING_FIELD");
    }

    #[test]
    fn missing_key_names_the_path() {
        let body = r#"{"Records":[{"s3":{"bucket":{"name":"uploads"},"object":{}}}]}"#;
        let err = NotificationEnvelope::parse(body)
            .unwrap()
            .object_ref()
            .unwrap_err();
        assert!(err.to_string().contains("Records[0].s3.object.key"));
    }
}
