use crate::domain::{FirmwareIdentity, GroupRegion};
use crate::regions::RegionTable;
use thiserror::Error;

const GROUP_PROJECT_TAG: &str = "LGRP";
const MIN_VERSION_SEGMENTS: usize = 4;

/// Decomposes a raw firmware identifier such as
/// `DCO-AL00-LGRP4 12.0.0.200(C185E6R5P3)` into a [`FirmwareIdentity`].
///
/// The identifier carries two tokens: the firmware name (`prefix-model-project`)
/// and the version with its parenthesized variant. The variant encodes region,
/// cust version, preload sub and patch version behind the literal `E`, `R` and
/// `P` separators, in that order.
pub fn parse_identifier(raw: &str, regions: &RegionTable) -> Result<FirmwareIdentity, ParseError> {
    let malformed = || ParseError::MalformedIdentifier { raw: raw.to_string() };

    let mut tokens = raw.split_whitespace();
    let fw_name = tokens.next().ok_or_else(malformed)?;
    let fw_version = tokens.next().ok_or_else(malformed)?;

    let mut components = fw_name.split('-');
    let (Some(prefix), Some(model), Some(project)) = (components.next(), components.next(), components.next()) else {
        return Err(malformed());
    };

    let (version, variant) = match fw_version.split_once('(') {
        Some((version, rest)) => (version, rest.strip_suffix(')').unwrap_or(rest)),
        None => (fw_version, ""),
    };

    let (region, remainder) = split_variant(variant, 'E')?;
    let (cust_version, remainder) = split_variant(remainder, 'R')?;
    let (preload_sub, patch_ver) = split_variant(remainder, 'P')?;

    let group_region = derive_group_region(project)?;

    if version.split('.').count() < MIN_VERSION_SEGMENTS {
        return Err(ParseError::MalformedVersion { version: version.to_string() });
    }

    Ok(FirmwareIdentity {
        prefix: prefix.to_string(),
        model: model.to_string(),
        project: project.to_string(),
        version: version.to_string(),
        region: region.to_string(),
        cust_version: cust_version.to_string(),
        preload_sub: preload_sub.to_string(),
        patch_ver: patch_ver.to_string(),
        group_region,
        vendor_country: regions.vendor_country(region).to_string(),
    })
}

// Even group numbers are overseas builds, odd ones are China builds. A project
// without the tag is not an error; its group is simply unknown.
fn derive_group_region(project: &str) -> Result<GroupRegion, ParseError> {
    let Some(suffix) = project.strip_prefix(GROUP_PROJECT_TAG) else {
        return Ok(GroupRegion::Unknown);
    };

    let group_number = suffix.parse::<i64>().map_err(|_| ParseError::MalformedProject { project: project.to_string() })?;
    if group_number % 2 == 0 {
        Ok(GroupRegion::Ovs)
    } else {
        Ok(GroupRegion::Chn)
    }
}

fn split_variant(variant: &str, separator: char) -> Result<(&str, &str), ParseError> {
    variant.split_once(separator).ok_or_else(|| ParseError::MalformedVariant {
        variant: variant.to_string(),
        separator,
    })
}

#[derive(Error, Debug, PartialEq)]
pub enum ParseError {
    #[error("expected '<prefix>-<model>-<project> <version>(<variant>)', got '{raw}'")]
    MalformedIdentifier { raw: String },
    #[error("variant '{variant}' is missing the '{separator}' separator")]
    MalformedVariant { variant: String, separator: char },
    #[error("version '{version}' has fewer than 4 dot-separated segments")]
    MalformedVersion { version: String },
    #[error("project '{project}' has a non-numeric group suffix")]
    MalformedProject { project: String },
}
