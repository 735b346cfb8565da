//! Registry adapters for fetching the latest published package versions
//!
//! This module provides:
//! - HTTP client shared foundation
//! - Arch Linux official repository adapter (exact-name search)
//! - AUR RPC adapter (search by name)
//!
//! Adapters report failures through `fetch_latest`; callers that only care
//! about "is there a version" go through `resolve`, which never fails.

mod aur;
mod client;
mod official;

pub use aur::AurAdapter;
pub use client::{build_url, HttpClient};
pub use official::OfficialRepoAdapter;

use crate::domain::Source;
use crate::error::RegistryError;
use async_trait::async_trait;
use tracing::debug;

/// Trait for registry adapters
#[async_trait]
pub trait RegistryAdapter: Send + Sync {
    /// Get the source this adapter serves
    fn source(&self) -> Source;

    /// Get the registry name
    fn registry_name(&self) -> &'static str;

    /// Fetch the latest published version; Ok(None) when the registry has no match
    async fn fetch_latest(&self, package: &str) -> Result<Option<String>, RegistryError>;

    /// Latest published version, with every failure and empty version collapsed into None
    async fn resolve(&self, package: &str) -> Option<String> {
        match self.fetch_latest(package).await {
            Ok(Some(version)) if !version.trim().is_empty() => Some(version),
            Ok(_) => {
                debug!("{}: no results for {}", self.registry_name(), package);
                None
            }
            Err(e) => {
                debug!("{}: lookup failed: {}", self.registry_name(), e);
                None
            }
        }
    }
}

/// Create the registry adapter for the given source
pub fn create_adapter(source: Source, client: HttpClient) -> Box<dyn RegistryAdapter> {
    match source {
        Source::Official => Box::new(OfficialRepoAdapter::new(client)),
        Source::Aur => Box::new(AurAdapter::new(client)),
    }
}
