//! AUR RPC adapter
//!
//! Fetches package versions from the Arch User Repository search endpoint.
//! API endpoint: https://aur.archlinux.org/rpc/?v=5&type=search&arg={package}

use crate::domain::Source;
use crate::error::RegistryError;
use crate::registry::{build_url, HttpClient, RegistryAdapter};
use async_trait::async_trait;
use serde::Deserialize;

/// AUR base URL
const AUR_URL: &str = "https://aur.archlinux.org";

/// AUR RPC interface version
const AUR_RPC_VERSION: &str = "5";

/// AUR adapter
pub struct AurAdapter {
    client: HttpClient,
    base_url: String,
}

/// RPC search response
#[derive(Debug, Deserialize)]
struct RpcResponse {
    #[serde(default)]
    results: Vec<RpcResult>,
}

/// One package in the RPC results
#[derive(Debug, Deserialize)]
struct RpcResult {
    #[serde(rename = "Version")]
    version: String,
}

impl AurAdapter {
    /// Create a new AUR adapter
    pub fn new(client: HttpClient) -> Self {
        Self::with_base_url(client, AUR_URL)
    }

    /// Create an adapter against a different host (tests)
    pub fn with_base_url(client: HttpClient, base_url: impl Into<String>) -> Self {
        Self {
            client,
            base_url: base_url.into(),
        }
    }

    fn build_url(&self, package: &str) -> Result<reqwest::Url, RegistryError> {
        build_url(
            &format!("{}/rpc/", self.base_url),
            &[("v", AUR_RPC_VERSION), ("type", "search"), ("arg", package)],
        )
    }
}

#[async_trait]
impl RegistryAdapter for AurAdapter {
    fn source(&self) -> Source {
        Source::Aur
    }

    fn registry_name(&self) -> &'static str {
        "aur"
    }

    async fn fetch_latest(&self, package: &str) -> Result<Option<String>, RegistryError> {
        let url = self.build_url(package)?;
        let response: RpcResponse = self
            .client
            .get_json(url, package, self.registry_name())
            .await?;

        Ok(response.results.into_iter().next().map(|info| info.version))
    }
}
