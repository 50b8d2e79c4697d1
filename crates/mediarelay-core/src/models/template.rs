//! Job template schema
//!
//! Only the fields the specializer rewrites are typed. Everything else a
//! template author writes (codec settings, outputs, selectors...) is kept in
//! `extra` maps and serialized back unchanged, so the submitted settings are the
//! authored template with its input and destinations replaced.

use serde::{Deserialize, Serialize};
use serde_json::{Map, Value};

use crate::error::DispatchError;
use crate::output_group::OutputGroupType;

#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct JobTemplate {
    #[serde(rename = "Inputs")]
    pub inputs: Vec<JobInput>,
    #[serde(rename = "OutputGroups")]
    pub output_groups: Vec<OutputGroup>,
    #[serde(flatten)]
    pub extra: Map<String, Value>,
}

#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct JobInput {
    #[serde(rename = "FileInput", default, skip_serializing_if = "Option::is_none")]
    pub file_input: Option<String>,
    #[serde(flatten)]
    pub extra: Map<String, Value>,
}

#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct OutputGroup {
    #[serde(rename = "OutputGroupSettings")]
    pub output_group_settings: OutputGroupSettings,
    #[serde(flatten)]
    pub extra: Map<String, Value>,
}

/// Variant-tagged settings of one output group.
///
/// `group_type` stays a plain string so that templates with unsupported
/// variants still load; the specializer rejects them.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct OutputGroupSettings {
    #[serde(rename = "Type")]
    pub group_type: String,
    #[serde(rename = "HlsGroupSettings", default, skip_serializing_if = "Option::is_none")]
    pub hls_group_settings: Option<DestinationSettings>,
    #[serde(rename = "FileGroupSettings", default, skip_serializing_if = "Option::is_none")]
    pub file_group_settings: Option<DestinationSettings>,
    #[serde(rename = "CmafGroupSettings", default, skip_serializing_if = "Option::is_none")]
    pub cmaf_group_settings: Option<DestinationSettings>,
    #[serde(rename = "DashIsoGroupSettings", default, skip_serializing_if = "Option::is_none")]
    pub dash_iso_group_settings: Option<DestinationSettings>,
    #[serde(rename = "MsSmoothGroupSettings", default, skip_serializing_if = "Option::is_none")]
    pub ms_smooth_group_settings: Option<DestinationSettings>,
    #[serde(flatten)]
    pub extra: Map<String, Value>,
}

/// A variant settings block; every variant carries a `Destination`.
#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
pub struct DestinationSettings {
    #[serde(rename = "Destination", default, skip_serializing_if = "Option::is_none")]
    pub destination: Option<String>,
    #[serde(flatten)]
    pub extra: Map<String, Value>,
}

impl JobTemplate {
    /// Parse a template object body.
    pub fn from_slice(bytes: &[u8]) -> Result<Self, DispatchError> {
        let text = std::str::from_utf8(bytes)?;
        Ok(serde_json::from_str(text)?)
    }

    /// The settings document submitted to the transcoding service.
    pub fn to_settings(&self) -> Result<Value, DispatchError> {
        serde_json::to_value(self).map_err(|e| DispatchError::fatal(e.into()))
    }
}

impl OutputGroupSettings {
    pub fn destination_settings(&self, kind: OutputGroupType) -> Option<&DestinationSettings> {
        match kind {
            OutputGroupType::Hls => self.hls_group_settings.as_ref(),
            OutputGroupType::File => self.file_group_settings.as_ref(),
            OutputGroupType::Cmaf => self.cmaf_group_settings.as_ref(),
            OutputGroupType::DashIso => self.dash_iso_group_settings.as_ref(),
            OutputGroupType::MsSmooth => self.ms_smooth_group_settings.as_ref(),
        }
    }

    pub fn destination_settings_mut(
        &mut self,
        kind: OutputGroupType,
    ) -> Option<&mut DestinationSettings> {
        match kind {
            OutputGroupType::Hls => self.hls_group_settings.as_mut(),
            OutputGroupType::File => self.file_group_settings.as_mut(),
            OutputGroupType::Cmaf => self.cmaf_group_settings.as_mut(),
            OutputGroupType::DashIso => self.dash_iso_group_settings.as_mut(),
            OutputGroupType::MsSmooth => self.ms_smooth_group_settings.as_mut(),
        }
    }
}
