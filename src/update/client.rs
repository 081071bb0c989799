use crate::app_config::AppConfig;
use reqwest::header::HeaderValue;
use reqwest::{Client, header};
use thiserror::Error;

/// Builds the client used for every version check. The update service expects
/// this fixed header set on each request; `Host` and `Content-Length` are
/// derived by the transport.
pub fn new_client(config: &AppConfig) -> Result<Client, UpdateClientError> {
    let mut headers = header::HeaderMap::new();
    headers.insert(header::ACCEPT, HeaderValue::from_static("*/*"));
    headers.insert(header::CACHE_CONTROL, HeaderValue::from_static("no-cache"));
    headers.insert(header::PRAGMA, HeaderValue::from_static("no-cache"));
    headers.insert("x-requestid", HeaderValue::from_static("-"));

    let mut builder = Client::builder().default_headers(headers);
    if let Some(timeout) = config.update().timeout() {
        builder = builder.timeout(timeout);
    }

    Ok(builder.build()?)
}

#[derive(Error, Debug)]
pub enum UpdateClientError {
    #[error("request error: {0}")]
    RequestError(#[from] reqwest::Error),
}
