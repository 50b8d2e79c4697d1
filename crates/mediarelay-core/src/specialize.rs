//! Job settings specialization
//!
//! Binds a generic job template to one uploaded file: the first input reads
//! the uploaded object, and every output group writes below
//! `s3://{destination_bucket}/{output_folder_name}/`, keeping whatever path the
//! template author put after the bucket in the original destination.
//!
//! Groups are rewritten in order. When a group has an unsupported type the
//! function returns at that group, leaving earlier groups already rewritten;
//! callers discard the template on any error.

use crate::error::DispatchError;
use crate::models::JobTemplate;
use crate::output_group::OutputGroupType;

/// `s3://{destination_bucket}/{output_folder_name}/`
pub fn output_base(destination_bucket: &str, output_folder_name: &str) -> String {
    format!("s3://{}/{}/", destination_bucket, output_folder_name)
}

/// Rewrite the template's input and every output group destination in place.
///
/// Only `Inputs[0]` is rewritten; additional inputs keep their authored paths.
pub fn specialize(
    template: &mut JobTemplate,
    source_path: &str,
    output_folder_name: &str,
    destination_bucket: &str,
) -> Result<(), DispatchError> {
    let input = template
        .inputs
        .first_mut()
        .ok_or_else(|| DispatchError::MissingField("Inputs[0]".to_string()))?;
    input.file_input = Some(source_path.to_string());

    let base = output_base(destination_bucket, output_folder_name);

    for (index, group) in template.output_groups.iter_mut().enumerate() {
        let settings = &mut group.output_group_settings;
        let kind = OutputGroupType::from_type_tag(&settings.group_type)
            .ok_or_else(|| DispatchError::UnknownOutputGroupType(settings.group_type.clone()))?;

        let block = settings.destination_settings_mut(kind).ok_or_else(|| {
            DispatchError::MissingField(format!(
                "OutputGroups[{}].OutputGroupSettings.{}",
                index,
                kind.settings_key()
            ))
        })?;

        let original = block.destination.as_deref().ok_or_else(|| {
            DispatchError::MissingField(format!(
                "OutputGroups[{}].OutputGroupSettings.{}.Destination",
                index,
                kind.settings_key()
            ))
        })?;

        let rewritten = relocate(&base, original);
        block.destination = Some(rewritten);
    }

    Ok(())
}

/// Join the path component of `destination` onto `base`.
fn relocate(base: &str, destination: &str) -> String {
    format!(
        "{}{}",
        base,
        destination_path(destination).trim_start_matches('/')
    )
}

/// Path component of a destination URI, without scheme, bucket, query or fragment.
///
/// A destination without a scheme is already a bare path.
pub fn destination_path(destination: &str) -> &str {
    let path = match destination.split_once("://") {
        Some((_scheme, rest)) => match rest.find('/') {
            Some(idx) => &rest[idx..],
            None => "",
        },
        None => destination,
    };

    match path.find(['?', '#']) {
        Some(idx) => &path[..idx],
        None => path,
    }
}
