use crate::domain::GroupRegion;

/// Structured decomposition of one raw firmware identifier, produced once per
/// request and never mutated afterwards.
#[derive(PartialEq, Clone, Debug)]
pub struct FirmwareIdentity {
    pub prefix: String,
    pub model: String,
    pub project: String,
    pub version: String,
    pub region: String,
    pub cust_version: String,
    pub preload_sub: String,
    pub patch_ver: String,
    pub group_region: GroupRegion,
    pub vendor_country: String,
}

impl FirmwareIdentity {
    /// The base package identifier, e.g. `DCO-LGRP4-OVS 12.0.0.200`.
    pub fn base(&self) -> String {
        format!("{}-{}-{} {}", self.prefix, self.project, self.group_region, self.version)
    }

    /// The cust package identifier, e.g. `DCO-AL00-CUST 12.0.0.6(C185)`.
    pub fn cust(&self) -> String {
        format!("{}-{}-CUST {}.{}({})", self.prefix, self.model, self.version_triplet(), self.cust_version, self.region)
    }

    /// The preload package identifier, e.g. `DCO-AL00-PRELOAD 12.0.0.3(C185R5)`.
    pub fn preload(&self) -> String {
        format!(
            "{}-{}-PRELOAD {}.{}({}R{})",
            self.prefix,
            self.model,
            self.version_triplet(),
            self.patch_ver,
            self.region,
            self.preload_sub
        )
    }

    pub fn full_model(&self) -> String {
        format!("{}-{}", self.prefix, self.model)
    }

    // First three dot-separated version segments; the segment count is validated when the identity is parsed.
    fn version_triplet(&self) -> String {
        self.version.split('.').take(3).collect::<Vec<_>>().join(".")
    }
}
