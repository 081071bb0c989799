use crate::domain::DeviceCredentials;
use config::Config;
use serde::Deserialize;
use std::time::Duration;

#[derive(Debug, Deserialize)]
pub struct AppConfig {
    update: Update,
    regions: Regions,
    device: DeviceCredentials,
}

impl AppConfig {
    pub fn load() -> Self {
        Config::builder()
            .add_source(config::File::with_name("config").required(true))
            .add_source(config::File::with_name("config_local").required(false))
            .add_source(config::Environment::default())
            .build()
            .unwrap()
            .try_deserialize()
            .unwrap()
    }

    pub fn update(&self) -> &Update {
        &self.update
    }

    pub fn regions(&self) -> &Regions {
        &self.regions
    }

    pub fn device(&self) -> &DeviceCredentials {
        &self.device
    }
}

#[derive(Debug, Deserialize)]
pub struct Update {
    url: String,
    timeout_ms: Option<u64>,
}

impl Update {
    pub fn url(&self) -> &str {
        &self.url
    }

    // No timeout unless one is configured; there is no hidden default.
    pub fn timeout(&self) -> Option<Duration> {
        self.timeout_ms.map(Duration::from_millis)
    }
}

#[derive(Debug, Deserialize)]
pub struct Regions {
    file: String,
}

impl Regions {
    pub fn file(&self) -> &str {
        &self.file
    }
}

#[cfg(test)]
pub struct AppConfigBuilder {
    config: AppConfig,
}

#[cfg(test)]
impl AppConfigBuilder {
    pub fn new() -> Self {
        AppConfigBuilder {
            config: AppConfig {
                update: Update {
                    url: "https://update.url/".to_string(),
                    timeout_ms: None,
                },
                regions: Regions {
                    file: "regions.txt".to_string(),
                },
                device: DeviceCredentials {
                    certificate: "CERT".to_string(),
                    device_id: "SN123".to_string(),
                    key_attestation: "ATT".to_string(),
                },
            },
        }
    }

    pub fn update_url(mut self, url: String) -> Self {
        self.config.update.url = url;
        self
    }

    pub fn build(self) -> AppConfig {
        self.config
    }
}
