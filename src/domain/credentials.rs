use serde::Deserialize;

/// Opaque device credentials forwarded verbatim to the update service.
#[derive(PartialEq, Clone, Debug, Deserialize)]
pub struct DeviceCredentials {
    pub certificate: String,
    pub device_id: String,
    pub key_attestation: String,
}
