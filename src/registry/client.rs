//! HTTP client shared foundation
//!
//! This module provides a shared HTTP client with:
//! - Configurable timeout and User-Agent
//! - Status code classification into `RegistryError`
//! - JSON decoding of registry responses
//!
//! Requests are attempted once. A failed lookup is reported to the caller,
//! which treats it as "no data" for that package.

use crate::error::RegistryError;
use reqwest::{Client, StatusCode, Url};
use std::time::Duration;

/// Default timeout for HTTP requests (30 seconds)
const DEFAULT_TIMEOUT: Duration = Duration::from_secs(30);

/// Default User-Agent header
const DEFAULT_USER_AGENT: &str = concat!("pacfresh/", env!("CARGO_PKG_VERSION"));

/// HTTP client wrapper
#[derive(Clone)]
pub struct HttpClient {
    client: Client,
}

impl HttpClient {
    /// Create a new HTTP client with default settings
    pub fn new() -> Result<Self, RegistryError> {
        Self::with_config(DEFAULT_TIMEOUT, DEFAULT_USER_AGENT)
    }

    fn with_config(timeout: Duration, user_agent: &str) -> Result<Self, RegistryError> {
        let client = Client::builder()
            .timeout(timeout)
            .user_agent(user_agent)
            .build()
            .map_err(|e| RegistryError::ClientBuild {
                message: e.to_string(),
            })?;

        Ok(Self { client })
    }

    /// Perform a GET request, mapping transport failures and non-success statuses
    pub async fn get_with_context(
        &self,
        url: Url,
        package: &str,
        registry: &str,
    ) -> Result<reqwest::Response, RegistryError> {
        let response = self.client.get(url).send().await.map_err(|e| {
            if e.is_timeout() {
                RegistryError::timeout(package, registry)
            } else {
                RegistryError::network_error(package, registry, e.to_string())
            }
        })?;

        let status = response.status();
        if status == StatusCode::TOO_MANY_REQUESTS {
            return Err(RegistryError::rate_limit_exceeded(registry));
        }
        if !status.is_success() {
            return Err(RegistryError::http_status(package, registry, status.as_u16()));
        }

        Ok(response)
    }

    /// Perform a GET request and parse the JSON response body
    pub async fn get_json<T: serde::de::DeserializeOwned>(
        &self,
        url: Url,
        package: &str,
        registry: &str,
    ) -> Result<T, RegistryError> {
        let response = self.get_with_context(url, package, registry).await?;

        response.json::<T>().await.map_err(|e| {
            if e.is_timeout() {
                RegistryError::timeout(package, registry)
            } else {
                RegistryError::invalid_response(
                    package,
                    registry,
                    format!("failed to parse JSON: {}", e),
                )
            }
        })
    }
}

/// Builds `base` with URL-encoded query parameters
pub fn build_url(base: &str, params: &[(&str, &str)]) -> Result<Url, RegistryError> {
    Url::parse_with_params(base, params).map_err(|e| RegistryError::ClientBuild {
        message: format!("invalid registry URL '{}': {}", base, e),
    })
}
