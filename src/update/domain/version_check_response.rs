use serde::Deserialize;

// Only `result.versionList[]` is consumed; everything else in the response is
// ignored. Any absent part of that path decodes to an empty list.
#[derive(Debug, Deserialize)]
pub struct VersionCheckResponse {
    #[serde(default)]
    pub result: Option<CheckResult>,
}

#[derive(Debug, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct CheckResult {
    #[serde(default)]
    pub version_list: Vec<VersionEntry>,
}

#[derive(Debug, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct VersionEntry {
    #[serde(default)]
    pub version_number: String,
    #[serde(default)]
    pub url: String,
}
