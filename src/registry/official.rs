//! Arch Linux official repository adapter
//!
//! Looks packages up with the exact-name search of the package website.
//! API endpoint: https://archlinux.org/packages/search/json/?name={package}

use crate::domain::Source;
use crate::error::RegistryError;
use crate::registry::{build_url, HttpClient, RegistryAdapter};
use async_trait::async_trait;
use serde::Deserialize;

/// Arch Linux package search base URL
const ARCH_PACKAGES_URL: &str = "https://archlinux.org";

/// Official repository adapter
pub struct OfficialRepoAdapter {
    client: HttpClient,
    base_url: String,
}

/// Package search response
#[derive(Debug, Deserialize)]
struct SearchResponse {
    results: Vec<SearchResult>,
}

/// One package in the search results
#[derive(Debug, Deserialize)]
struct SearchResult {
    pkgver: String,
    pkgrel: String,
}

impl OfficialRepoAdapter {
    /// Create a new official repository adapter
    pub fn new(client: HttpClient) -> Self {
        Self::with_base_url(client, ARCH_PACKAGES_URL)
    }

    /// Create an adapter against a different host (mirrors, tests)
    pub fn with_base_url(client: HttpClient, base_url: impl Into<String>) -> Self {
        Self {
            client,
            base_url: base_url.into(),
        }
    }

    fn build_url(&self, package: &str) -> Result<reqwest::Url, RegistryError> {
        build_url(
            &format!("{}/packages/search/json/", self.base_url),
            &[("name", package)],
        )
    }
}

#[async_trait]
impl RegistryAdapter for OfficialRepoAdapter {
    fn source(&self) -> Source {
        Source::Official
    }

    fn registry_name(&self) -> &'static str {
        "archlinux.org"
    }

    async fn fetch_latest(&self, package: &str) -> Result<Option<String>, RegistryError> {
        let url = self.build_url(package)?;
        let response: SearchResponse = self
            .client
            .get_json(url, package, self.registry_name())
            .await?;

        Ok(response
            .results
            .into_iter()
            .next()
            .map(|info| format!("{}-{}", info.pkgver, info.pkgrel)))
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use mockito::{Matcher, Server};

    fn adapter_for(server: &Server) -> OfficialRepoAdapter {
        OfficialRepoAdapter::with_base_url(HttpClient::new().unwrap(), server.url())
    }

    #[test]
    fn test_official_adapter_source() {
        let adapter = OfficialRepoAdapter::new(HttpClient::new().unwrap());
        assert_eq!(adapter.source(), Source::Official);
        assert_eq!(adapter.registry_name(), "archlinux.org");
    }

    #[test]
    fn test_build_url() {
        let adapter = OfficialRepoAdapter::new(HttpClient::new().unwrap());
        assert_eq!(
            adapter.build_url("linux").unwrap().as_str(),
            "https://archlinux.org/packages/search/json/?name=linux"
        );
    }

    #[tokio::test]
    async fn test_fetch_latest_joins_pkgver_and_pkgrel() {
        let mut server = Server::new_async().await;
        let mock = server
            .mock("GET", "/packages/search/json/")
            .match_query(Matcher::UrlEncoded("name".into(), "linux".into()))
            .with_status(200)
            .with_header("content-type", "application/json")
            .with_body(
                r#"{
                    "version": 2,
                    "limit": 250,
                    "valid": true,
                    "results": [
                        {"pkgname": "linux", "repo": "core", "pkgver": "6.6.8.arch1", "pkgrel": "1", "epoch": 0},
                        {"pkgname": "linux", "repo": "testing", "pkgver": "6.7.arch1", "pkgrel": "2", "epoch": 0}
                    ]
                }"#,
            )
            .create_async()
            .await;

        let result = adapter_for(&server).fetch_latest("linux").await.unwrap();

        mock.assert_async().await;
        assert_eq!(result, Some("6.6.8.arch1-1".to_string()));
    }

    #[tokio::test]
    async fn test_fetch_latest_no_results() {
        let mut server = Server::new_async().await;
        let _mock = server
            .mock("GET", "/packages/search/json/")
            .match_query(Matcher::Any)
            .with_status(200)
            .with_body(r#"{"results": []}"#)
            .create_async()
            .await;

        let result = adapter_for(&server).fetch_latest("nonexistent").await.unwrap();
        assert_eq!(result, None);
    }

    #[tokio::test]
    async fn test_resolve_server_error_is_absent() {
        let mut server = Server::new_async().await;
        let _mock = server
            .mock("GET", "/packages/search/json/")
            .match_query(Matcher::Any)
            .with_status(500)
            .create_async()
            .await;

        let adapter = adapter_for(&server);
        assert!(adapter.fetch_latest("linux").await.is_err());
        assert_eq!(adapter.resolve("linux").await, None);
    }

    #[tokio::test]
    async fn test_resolve_network_error_is_absent() {
        let adapter = OfficialRepoAdapter::with_base_url(
            HttpClient::new().unwrap(),
            "http://invalid.localhost.test:1",
        );
        assert_eq!(adapter.resolve("linux").await, None);
    }
}
