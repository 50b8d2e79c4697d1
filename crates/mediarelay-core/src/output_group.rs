//! Output group variants and the settings block each one keeps its destination in.

use std::fmt::{Display, Formatter, Result as FmtResult};

#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum OutputGroupType {
    Hls,
    File,
    Cmaf,
    DashIso,
    MsSmooth,
}

impl OutputGroupType {
    pub const ALL: [OutputGroupType; 5] = [
        OutputGroupType::Hls,
        OutputGroupType::File,
        OutputGroupType::Cmaf,
        OutputGroupType::DashIso,
        OutputGroupType::MsSmooth,
    ];

    /// Parse the `OutputGroupSettings.Type` tag. Unknown tags return `None`.
    pub fn from_type_tag(tag: &str) -> Option<Self> {
        match tag {
            "HLS_GROUP_SETTINGS" => Some(OutputGroupType::Hls),
            "FILE_GROUP_SETTINGS" => Some(OutputGroupType::File),
            "CMAF_GROUP_SETTINGS" => Some(OutputGroupType::Cmaf),
            "DASH_ISO_GROUP_SETTINGS" => Some(OutputGroupType::DashIso),
            "MS_SMOOTH_GROUP_SETTINGS" => Some(OutputGroupType::MsSmooth),
            _ => None,
        }
    }

    pub fn type_tag(self) -> &'static str {
        match self {
            OutputGroupType::Hls => "HLS_GROUP_SETTINGS",
            OutputGroupType::File => "FILE_GROUP_SETTINGS",
            OutputGroupType::Cmaf => "CMAF_GROUP_SETTINGS",
            OutputGroupType::DashIso => "DASH_ISO_GROUP_SETTINGS",
            OutputGroupType::MsSmooth => "MS_SMOOTH_GROUP_SETTINGS",
        }
    }

    /// Name of the settings block holding this variant's `Destination`.
    pub fn settings_key(self) -> &'static str {
        match self {
            OutputGroupType::Hls => "HlsGroupSettings",
            OutputGroupType::File => "FileGroupSettings",
            OutputGroupType::Cmaf => "CmafGroupSettings",
            OutputGroupType::DashIso => "DashIsoGroupSettings",
            OutputGroupType::MsSmooth => "MsSmoothGroupSettings",
        }
    }
}

impl Display for OutputGroupType {
    fn fmt(&self, f: &mut Formatter<'_>) -> FmtResult {
        f.write_str(self.type_tag())
    }
}

/// Map an output group type tag to its settings block name.
///
/// Callers must treat `None` as a hard error: skipping the group would submit
/// a job that still writes to the template's original destination.
pub fn resolve_settings_key(tag: &str) -> Option<&'static str> {
    OutputGroupType::from_type_tag(tag).map(OutputGroupType::settings_key)
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn resolves_all_five_variants() {
        assert_eq!(resolve_settings_key("HLS_GROUP_SETTINGS"), Some("HlsGroupSettings"));
        assert_eq!(resolve_settings_key("FILE_GROUP_SETTINGS"), Some("FileGroupSettings"));
        assert_eq!(resolve_settings_key("CMAF_GROUP_SETTINGS"), Some("CmafGroupSettings"));
        assert_eq!(
            resolve_settings_key("DASH_ISO_GROUP_SETTINGS"),
            Some("DashIsoGroupSettings")
        );
        assert_eq!(
            resolve_settings_key("MS_SMOOTH_GROUP_SETTINGS"),
            Some("MsSmoothGroupSettings")
        );
    }

    #[test]
    fn anything_else_is_absent() {
        for tag in [
            "",
            "UNSUPPORTED_X",
            "hls_group_settings",
            "HLS_GROUP_SETTINGS ",
            "HlsGroupSettings",
        ] {
            assert_eq!(resolve_settings_key(tag), None, "tag {:?}", tag);
        }
    }

    #[test]
    fn type_tags_round_trip() {
        for kind in OutputGroupType::ALL {
            assert_eq!(OutputGroupType::from_type_tag(kind.type_tag()), Some(kind));
        }
    }
}
