use crate::app_config::AppConfig;
use crate::execute_check::execute_check;
use crate::regions::RegionTable;
use std::env;
use tokio::io::{AsyncBufReadExt, BufReader};
use tracing::{info, warn};

mod app_config;
mod domain;
mod execute_check;
mod identifier;
mod regions;
mod report;
mod update;

#[tokio::main]
async fn main() -> Result<(), Box<dyn std::error::Error>> {
    tracing_subscriber::fmt().with_max_level(tracing::Level::INFO).init();

    info!("🔎 Starting {} v{}", env!("CARGO_PKG_NAME"), env!("CARGO_PKG_VERSION"));

    let config = AppConfig::load();
    info!("✅  Loaded configuration");

    let regions = RegionTable::load(config.regions().file()).await;
    let client = update::new_client(&config)?;
    info!("✅  Built update client for {}", config.update().url());

    let args = env::args().skip(1).collect::<Vec<_>>();
    if !args.is_empty() {
        process(&args.join(" "), &regions, &client, &config).await;
        return Ok(());
    }

    info!("Reading identifiers from stdin, one per line");
    let mut lines = BufReader::new(tokio::io::stdin()).lines();
    while let Some(line) = lines.next_line().await? {
        if line.trim().is_empty() {
            continue;
        }
        process(&line, &regions, &client, &config).await;
    }

    Ok(())
}

// One request per identifier; a failure is reported and the next identifier is unaffected.
async fn process(raw: &str, regions: &RegionTable, client: &reqwest::Client, config: &AppConfig) {
    match execute_check(raw, regions, client, config).await {
        Ok((identity, result)) => {
            for line in report::render(&identity, &result) {
                println!("{}", line);
            }
        }
        Err(err) => {
            warn!("⚠️ Check failed for '{}': {}", raw, err);
            println!("Error: {}", err);
        }
    }
}
