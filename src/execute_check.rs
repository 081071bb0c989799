use crate::app_config::AppConfig;
use crate::domain::{FirmwareIdentity, VersionCheckResult};
use crate::identifier::{ParseError, parse_identifier};
use crate::regions::RegionTable;
use crate::update;
use crate::update::QueryError;
use reqwest::Client;
use thiserror::Error;
use tracing::{info, instrument};

/// Runs the whole pipeline for one raw identifier: parse, build the query,
/// ask the update service. Parsing happens first; a request is never sent for
/// an identifier that did not parse.
#[instrument(skip(regions, client, config))]
pub async fn execute_check(
    raw: &str,
    regions: &RegionTable,
    client: &Client,
    config: &AppConfig,
) -> Result<(FirmwareIdentity, VersionCheckResult), CheckError> {
    let identity = parse_identifier(raw, regions)?;
    info!("Parsed '{}' as {} {}", raw, identity.full_model(), identity.version);

    let request = update::build_request(&identity, config.device());
    let result = update::check(client, config, &request).await?;

    Ok((identity, result))
}

#[derive(Error, Debug)]
pub enum CheckError {
    #[error(transparent)]
    Parse(#[from] ParseError),
    #[error(transparent)]
    Query(#[from] QueryError),
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::app_config::AppConfigBuilder;
    use crate::domain::GroupRegion;
    use pretty_assertions::assert_eq;
    use test_log::test;

    #[test(tokio::test)]
    async fn execute_check_parses_and_queries_in_one_pass() -> Result<(), CheckError> {
        let mut server = mockito::Server::new_async().await;

        let mock = server
            .mock("POST", "/")
            .with_status(200)
            .with_header("content-type", "application/json")
            .with_body(include_str!("../tests/resources/version_check_response.json"))
            .match_body(mockito::Matcher::PartialJsonString(
                r#"{"commonRules": {"devModel": "DCO-AL00", "vendorCountry": "MEA"}}"#.to_string(),
            ))
            .create_async()
            .await;

        let config = AppConfigBuilder::new().update_url(format!("{}/", server.url())).build();
        let regions = RegionTable::from_lines("C185:MEA");
        let client = Client::new();

        let (identity, result) = execute_check("DCO-AL00-LGRP4 12.0.0.200(C185E6R5P3)", &regions, &client, &config).await?;

        mock.assert();
        assert_eq!(identity.group_region, GroupRegion::Ovs);
        assert_eq!(result.packages.len(), 2);

        Ok(())
    }

    #[test(tokio::test)]
    async fn a_malformed_identifier_fails_before_any_request_is_sent() {
        let mut server = mockito::Server::new_async().await;

        let mock = server.mock("POST", "/").expect(0).create_async().await;

        let config = AppConfigBuilder::new().update_url(format!("{}/", server.url())).build();
        let regions = RegionTable::default();

        let result = execute_check("ONLYTOKEN", &regions, &Client::new(), &config).await;

        mock.assert();
        assert!(matches!(result, Err(CheckError::Parse(ParseError::MalformedIdentifier { .. }))));
    }
}
