//! Test fixtures: job templates and queue message bodies.

use mediarelay_worker::QueueMessage;
use serde_json::{json, Value};

/// A template with one HLS and one file output group, as exported from the console.
pub fn hls_and_file_template() -> Value {
    json!({
        "TimecodeConfig": {"Source": "ZEROBASED"},
        "Inputs": [{
            "FileInput": "s3://authoring-bucket/sample.mp4",
            "AudioSelectors": {"Audio Selector 1": {"DefaultSelection": "DEFAULT"}}
        }],
        "OutputGroups": [
            {
                "Name": "Apple HLS",
                "Outputs": [{"NameModifier": "_720p"}],
                "OutputGroupSettings": {
                    "Type": "HLS_GROUP_SETTINGS",
                    "HlsGroupSettings": {"SegmentLength": 6, "Destination": "s3://authoring-bucket/hls/"}
                }
            },
            {
                "Name": "File Group",
                "Outputs": [{"NameModifier": "_thumb"}],
                "OutputGroupSettings": {
                    "Type": "FILE_GROUP_SETTINGS",
                    "FileGroupSettings": {"Destination": "s3://authoring-bucket/thumbs/"}
                }
            }
        ]
    })
}

pub fn unsupported_group_template() -> Value {
    json!({
        "Inputs": [{"FileInput": "s3://authoring-bucket/sample.mp4"}],
        "OutputGroups": [{
            "OutputGroupSettings": {
                "Type": "UNSUPPORTED_X",
                "UnsupportedSettings": {"Destination": "s3://authoring-bucket/x/"}
            }
        }]
    })
}

/// Queue message body wrapping an object-created event for `bucket`/`key`.
pub fn notification_body(bucket: &str, key: &str) -> String {
    json!({
        "Records": [{
            "eventVersion": "2.1",
            "eventSource": "aws:s3",
            "eventName": "ObjectCreated:Put",
            "s3": {
                "bucket": {"name": bucket, "arn": format!("arn:aws:s3:::{}", bucket)},
                "object": {"key": key, "size": 1048576}
            }
        }]
    })
    .to_string()
}

pub fn notification(message_id: &str, bucket: &str, key: &str) -> QueueMessage {
    QueueMessage::new(message_id, notification_body(bucket, key))
}
