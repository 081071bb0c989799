mod version_check_request;
mod version_check_response;

pub use version_check_request::{CommonRules, CotaInfo, DeviceInfo, VersionCheckRequest, VersionPackageRule};
pub use version_check_response::{CheckResult, VersionCheckResponse, VersionEntry};
