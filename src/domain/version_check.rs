/// Packages the update service reported for one identity, in the order they
/// were received. That order is the display order.
#[derive(PartialEq, Debug, Default)]
pub struct VersionCheckResult {
    pub packages: Vec<VersionPackage>,
}

#[derive(PartialEq, Clone, Debug)]
pub struct VersionPackage {
    pub version_number: String,
    pub url: String,
}
