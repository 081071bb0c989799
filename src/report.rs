use crate::domain::{FirmwareIdentity, VersionCheckResult};
use crate::update::map_versions;

/// Renders a check outcome as plain text: the parsed fields first, then one
/// line per available package.
pub fn render(identity: &FirmwareIdentity, result: &VersionCheckResult) -> Vec<String> {
    let mut lines = vec![
        format!("Region: {}", identity.region),
        format!("VendorCountry: {}", identity.vendor_country),
        format!("Base: {}", identity.base()),
        format!("Cust: {}", identity.cust()),
        format!("Preload: {}", identity.preload()),
    ];

    lines.extend(
        map_versions(&result.packages)
            .into_iter()
            .map(|line| format!("{}: {}", line.label, line.url)),
    );

    lines
}
