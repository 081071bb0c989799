use serde::Serialize;

// Wire shape of the version-check request body. Field names are fixed by the
// update service.
#[derive(Debug, Serialize)]
#[serde(rename_all = "camelCase")]
pub struct VersionCheckRequest {
    pub common_rules: CommonRules,
    pub cota_info: CotaInfo,
    pub device_certificate: String,
    pub device_info: DeviceInfo,
    pub key_attestation: String,
    pub version_package_rules: Vec<VersionPackageRule>,
}

#[derive(Debug, Serialize)]
#[serde(rename_all = "camelCase")]
pub struct CommonRules {
    pub dev_model: String,
    pub plmn: String,
    pub sub_group: String,
    pub update_action: String,
    pub vendor_country: String,
    pub ver_group: String,
}

#[derive(Debug, Serialize)]
#[serde(rename_all = "camelCase")]
pub struct CotaInfo {
    pub country: String,
    pub vendor_cota: String,
    pub vendor_expired_time: String,
}

#[derive(Debug, Serialize)]
#[serde(rename_all = "camelCase")]
pub struct DeviceInfo {
    pub device_id: String,
}

#[derive(Debug, Serialize)]
#[serde(rename_all = "camelCase")]
pub struct VersionPackageRule {
    pub version_number: String,
    pub version_package_type: u8,
}
