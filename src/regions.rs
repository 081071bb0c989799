use std::collections::HashMap;
use tokio::fs;
use tracing::{info, instrument, warn};

const UNKNOWN_VENDOR_COUNTRY: &str = "Unknown";

/// Mapping from region code to vendor/country code, loaded once at startup and
/// read-only afterwards.
#[derive(Debug, Default)]
pub struct RegionTable {
    entries: HashMap<String, String>,
}

impl RegionTable {
    /// Loads the table from a line-oriented `REGION:VENDOR_COUNTRY` file. A
    /// missing or unreadable file is not fatal; every lookup then resolves to
    /// the unknown sentinel.
    #[instrument]
    pub async fn load(path: &str) -> Self {
        info!("🗺️ Loading region table...");

        match fs::read_to_string(path).await {
            Ok(content) => {
                let table = Self::from_lines(&content);
                info!("🗺️ Loading region table... OK, {} regions", table.entries.len());
                table
            }
            Err(err) => {
                warn!("⚠️ Unable to read '{}': {}. Region lookups will resolve to '{}'", path, err, UNKNOWN_VENDOR_COUNTRY);
                RegionTable::default()
            }
        }
    }

    /// Parses table content; lines without a `:` separator are ignored.
    pub fn from_lines(content: &str) -> Self {
        let entries = content
            .lines()
            .filter_map(|line| {
                line.trim()
                    .split_once(':')
                    .map(|(region, vendor_country)| (region.to_string(), vendor_country.to_string()))
            })
            .collect();

        RegionTable { entries }
    }

    pub fn vendor_country(&self, region: &str) -> &str {
        self.entries.get(region).map(String::as_str).unwrap_or(UNKNOWN_VENDOR_COUNTRY)
    }
}
