use crate::app_config::AppConfig;
use crate::domain::{VersionCheckResult, VersionPackage};
use crate::update::domain::{VersionCheckRequest, VersionCheckResponse};
use reqwest::{Client, header};
use thiserror::Error;
use tracing::{info, instrument};

/// Sends one version-check request and maps the response into the ordered
/// package list. Transport failures, HTTP error statuses and undecodable
/// bodies all surface as [`QueryError`]; a response without a
/// `result.versionList` path is an empty result, not a failure.
#[instrument(skip(client, config, request))]
pub async fn check(client: &Client, config: &AppConfig, request: &VersionCheckRequest) -> Result<VersionCheckResult, QueryError> {
    info!("Checking available versions...");

    let response = client
        .post(config.update().url())
        .header(header::CONTENT_TYPE, "application/json;charset=UTF-8")
        .json(request)
        .send()
        .await?
        .error_for_status()?;

    let body = response.json::<VersionCheckResponse>().await?;

    let packages = body
        .result
        .map(|result| result.version_list)
        .unwrap_or_default()
        .into_iter()
        .map(|entry| VersionPackage {
            version_number: entry.version_number,
            url: entry.url,
        })
        .collect::<Vec<_>>();

    info!("Checking available versions... OK, {} found", packages.len());
    Ok(VersionCheckResult { packages })
}

#[derive(Error, Debug)]
pub enum QueryError {
    #[error("version check failed: {0}")]
    RequestError(#[from] reqwest::Error),
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::app_config::AppConfigBuilder;
    use crate::domain::{DeviceCredentials, FirmwareIdentity, GroupRegion};
    use crate::update::query::build_request;
    use pretty_assertions::assert_eq;
    use test_log::test;

    fn request() -> VersionCheckRequest {
        let identity = FirmwareIdentity {
            prefix: "DCO".to_string(),
            model: "AL00".to_string(),
            project: "LGRP4".to_string(),
            version: "12.0.0.200".to_string(),
            region: "C185".to_string(),
            cust_version: "6".to_string(),
            preload_sub: "5".to_string(),
            patch_ver: "3".to_string(),
            group_region: GroupRegion::Ovs,
            vendor_country: "MEA".to_string(),
        };
        let credentials = DeviceCredentials {
            certificate: "CERT".to_string(),
            device_id: "SN123".to_string(),
            key_attestation: "ATT".to_string(),
        };

        build_request(&identity, &credentials)
    }

    #[test(tokio::test)]
    async fn check_maps_the_version_list_in_order() -> Result<(), QueryError> {
        let mut server = mockito::Server::new_async().await;

        let mock = server
            .mock("POST", "/blversion/v1/version/check")
            .with_status(200)
            .with_header("content-type", "application/json")
            .with_body(include_str!("../../tests/resources/version_check_response.json"))
            .match_header("content-type", "application/json;charset=UTF-8")
            .create_async()
            .await;

        let config = AppConfigBuilder::new()
            .update_url(format!("{}/blversion/v1/version/check", server.url()))
            .build();
        let client = Client::new();

        let result = check(&client, &config, &request()).await?;

        mock.assert();
        assert_eq!(
            result,
            VersionCheckResult {
                packages: vec![
                    VersionPackage {
                        version_number: "253950528".to_string(),
                        url: "https://update.dbankcdn.com/TDS/data/files/p3/s15/G6025/g104/v553123".to_string(),
                    },
                    VersionPackage {
                        version_number: "12.0.0.123(C185E3R2P1)".to_string(),
                        url: "https://update.dbankcdn.com/TDS/data/files/p3/s15/G6025/g104/v553124/f1/".to_string(),
                    },
                ],
            }
        );

        Ok(())
    }

    #[test(tokio::test)]
    async fn a_response_without_a_version_list_is_an_empty_result() -> Result<(), QueryError> {
        let mut server = mockito::Server::new_async().await;

        server
            .mock("POST", "/")
            .with_status(200)
            .with_header("content-type", "application/json")
            .with_body(r#"{"status": "0"}"#)
            .create_async()
            .await;

        let config = AppConfigBuilder::new().update_url(format!("{}/", server.url())).build();
        let result = check(&Client::new(), &config, &request()).await?;

        assert_eq!(result, VersionCheckResult::default());

        Ok(())
    }

    #[test(tokio::test)]
    async fn an_undecodable_body_surfaces_as_a_query_error() {
        let mut server = mockito::Server::new_async().await;

        server
            .mock("POST", "/")
            .with_status(200)
            .with_header("content-type", "text/html")
            .with_body("<html>not json</html>")
            .create_async()
            .await;

        let config = AppConfigBuilder::new().update_url(format!("{}/", server.url())).build();
        let result = check(&Client::new(), &config, &request()).await;

        assert!(matches!(result, Err(QueryError::RequestError(_))));
    }

    #[test(tokio::test)]
    async fn an_http_error_status_surfaces_as_a_query_error() {
        let mut server = mockito::Server::new_async().await;

        server.mock("POST", "/").with_status(503).create_async().await;

        let config = AppConfigBuilder::new().update_url(format!("{}/", server.url())).build();
        let result = check(&Client::new(), &config, &request()).await;

        assert!(matches!(result, Err(QueryError::RequestError(_))));
    }

    #[test(tokio::test)]
    async fn an_unreachable_host_surfaces_as_a_query_error_with_the_cause() {
        let config = AppConfigBuilder::new().update_url("http://127.0.0.1:9/version/check".to_string()).build();

        let result = check(&Client::new(), &config, &request()).await;

        let Err(QueryError::RequestError(err)) = result else {
            panic!("expected a transport error");
        };
        assert!(err.is_connect());
    }
}
