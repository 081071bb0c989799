use crate::domain::{DeviceCredentials, FirmwareIdentity};
use crate::update::domain::{CommonRules, CotaInfo, DeviceInfo, VersionCheckRequest, VersionPackageRule};

const UPDATE_ACTION: &str = "recovery";
const PLMN: &str = "-";
const COTA_COUNTRY: &str = "DEFAULT";

const BASE_PACKAGE_TYPE: u8 = 2;
const CUST_PACKAGE_TYPE: u8 = 3;
const PRELOAD_PACKAGE_TYPE: u8 = 4;

/// Assembles the version-check payload for one identity. Pure assembly: the
/// credentials pass through verbatim and empty fields stay empty.
pub fn build_request(identity: &FirmwareIdentity, credentials: &DeviceCredentials) -> VersionCheckRequest {
    VersionCheckRequest {
        common_rules: CommonRules {
            dev_model: identity.full_model(),
            plmn: PLMN.to_string(),
            sub_group: String::new(),
            update_action: UPDATE_ACTION.to_string(),
            vendor_country: identity.vendor_country.clone(),
            ver_group: String::new(),
        },
        cota_info: CotaInfo {
            country: COTA_COUNTRY.to_string(),
            vendor_cota: String::new(),
            vendor_expired_time: String::new(),
        },
        device_certificate: credentials.certificate.clone(),
        device_info: DeviceInfo {
            device_id: credentials.device_id.clone(),
        },
        key_attestation: credentials.key_attestation.clone(),
        version_package_rules: vec![
            VersionPackageRule {
                version_number: identity.base(),
                version_package_type: BASE_PACKAGE_TYPE,
            },
            VersionPackageRule {
                version_number: identity.cust(),
                version_package_type: CUST_PACKAGE_TYPE,
            },
            VersionPackageRule {
                version_number: identity.preload(),
                version_package_type: PRELOAD_PACKAGE_TYPE,
            },
        ],
    }
}
