//! Names derived from the key of an uploaded object.
//!
//! For `videos/clip.mp4` uploaded to `uploads`:
//! folder `videos`, output folder `clip`, source `s3://uploads/videos/clip.mp4`.

use crate::error::DispatchError;
use crate::models::StorageObjectRef;

#[derive(Debug, Clone, PartialEq, Eq)]
pub struct SourceObject {
    pub bucket: String,
    /// Decoded object key
    pub key: String,
    /// First path segment of the key; selects the tenant's template
    pub folder_name: String,
    /// File name of the key without its extension; names the output folder
    pub output_folder_name: String,
}

impl SourceObject {
    /// Derive names from a notification's object reference.
    ///
    /// Event keys are URL-encoded (`+` for space); they are decoded first.
    pub fn from_event(object: &StorageObjectRef) -> Result<Self, DispatchError> {
        let key = decode_event_key(&object.key)?;
        Self::new(&object.bucket, &key)
    }

    pub fn new(bucket: &str, key: &str) -> Result<Self, DispatchError> {
        let file_name = key.rsplit('/').next().unwrap_or_default();
        if file_name.is_empty() {
            return Err(DispatchError::MissingField(format!(
                "object key {:?} names a folder, not a file",
                key
            )));
        }

        let folder_name = key.split('/').next().unwrap_or_default();

        Ok(Self {
            bucket: bucket.to_string(),
            key: key.to_string(),
            folder_name: folder_name.to_string(),
            output_folder_name: file_stem(file_name).to_string(),
        })
    }

    /// `s3://{bucket}/{key}`
    pub fn source_path(&self) -> String {
        format!("s3://{}/{}", self.bucket, self.key)
    }

    /// `{prefix}/{folder_name}.json`
    pub fn config_key(&self, template_prefix: &str) -> String {
        format!("{}/{}.json", template_prefix, self.folder_name)
    }
}

fn decode_event_key(raw: &str) -> Result<String, DispatchError> {
    let plus_decoded = raw.replace('+', " ");
    urlencoding::decode(&plus_decoded)
        .map(|key| key.into_owned())
        .map_err(|e| DispatchError::Decode(format!("object key {:?}: {}", raw, e)))
}

/// File name without its last extension. Leading dots do not start an extension.
fn file_stem(file_name: &str) -> &str {
    let leading_dots = file_name.len() - file_name.trim_start_matches('.').len();
    match file_name[leading_dots..].rfind('.') {
        Some(idx) => &file_name[..leading_dots + idx],
        None => file_name,
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn event(bucket: &str, key: &str) -> StorageObjectRef {
        StorageObjectRef {
            bucket: bucket.to_string(),
            key: key.to_string(),
        }
    }

    #[test]
    fn derives_names_from_key() {
        let source = SourceObject::from_event(&event("uploads", "videos/clip.mp4")).unwrap();
        assert_eq!(source.folder_name, "videos");
        assert_eq!(source.output_folder_name, "clip");
        assert_eq!(source.config_key("transcoder_config"), "transcoder_config/videos.json");
        assert_eq!(source.source_path(), "s3://uploads/videos/clip.mp4");
    }

    #[test]
    fn nested_keys_use_first_segment_and_file_name() {
        let source = SourceObject::new("uploads", "music/2024/live.set.mov").unwrap();
        assert_eq!(source.folder_name, "music");
        assert_eq!(source.output_folder_name, "live.set");
    }

    #[test]
    fn keys_without_folder_use_whole_key_as_folder() {
        let source = SourceObject::new("uploads", "clip.mp4").unwrap();
        assert_eq!(source.folder_name, "clip.mp4");
        assert_eq!(source.output_folder_name, "clip");
    }

    #[test]
    fn event_keys_are_url_decoded() {
        let source =
            SourceObject::from_event(&event("uploads", "videos/my+clip%281%29.mp4")).unwrap();
        assert_eq!(source.key, "videos/my clip(1).mp4");
        assert_eq!(source.output_folder_name, "my clip(1)");
    }

    #[test]
    fn folder_markers_are_rejected() {
        assert!(SourceObject::new("uploads", "videos/").is_err());
    }

    #[test]
    fn file_stem_matches_extension_rules() {
        assert_eq!(file_stem("clip.mp4"), "clip");
        assert_eq!(file_stem("clip"), "clip");
        assert_eq!(file_stem(".hidden"), ".hidden");
        assert_eq!(file_stem("archive.tar.gz"), "archive.tar");
    }
}
