//! MediaConvert wire casing
//!
//! Job templates are authored with the service's PascalCase member names, the
//! form the console exports and the SDKs accept. The REST API takes the same
//! members in lowerCamelCase. Map-typed members hold user-chosen names
//! (`"Audio Selector 1"`) as keys; those keys are sent as written.

use serde_json::{Map, Value};

/// Members whose object keys are user-chosen names rather than member names.
const NAMED_MAP_MEMBERS: &[&str] = &[
    "AudioSelectors",
    "AudioSelectorGroups",
    "CaptionSelectors",
    "DynamicAudioSelectors",
];

/// Convert a settings document to REST wire casing.
pub fn to_wire_casing(value: &Value) -> Value {
    match value {
        Value::Object(members) => Value::Object(
            members
                .iter()
                .map(|(name, member)| {
                    let converted = if is_named_map(name) {
                        convert_named_map(member)
                    } else {
                        to_wire_casing(member)
                    };
                    (lower_first(name), converted)
                })
                .collect(),
        ),
        Value::Array(items) => Value::Array(items.iter().map(to_wire_casing).collect()),
        other => other.clone(),
    }
}

fn is_named_map(name: &str) -> bool {
    NAMED_MAP_MEMBERS
        .iter()
        .any(|member| member.eq_ignore_ascii_case(name))
}

fn convert_named_map(value: &Value) -> Value {
    match value {
        Value::Object(entries) => Value::Object(
            entries
                .iter()
                .map(|(entry_name, entry)| (entry_name.clone(), to_wire_casing(entry)))
                .collect::<Map<String, Value>>(),
        ),
        other => to_wire_casing(other),
    }
}

fn lower_first(name: &str) -> String {
    let mut chars = name.chars();
    match chars.next() {
        Some(first) => first.to_lowercase().chain(chars).collect(),
        None => String::new(),
    }
}
