//! Concurrent reconciliation of installed packages with their registries
//!
//! Every descriptor is looked up in the registry selected by its source.
//! At most `concurrency` lookups are in flight at once; the rest wait for a
//! permit in list order. Results come back in input order whatever order the
//! lookups finish in.

use crate::domain::{PackageDescriptor, Source};
use crate::progress::Progress;
use crate::registry::{create_adapter, HttpClient, RegistryAdapter};
use futures::future::join_all;
use std::sync::Arc;
use tokio::sync::Semaphore;

/// Default concurrency limit for registry requests
pub const DEFAULT_CONCURRENCY: usize = 10;

/// Attaches remote versions to package descriptors
pub struct Reconciler {
    /// Resolver for official repository packages
    primary: Arc<dyn RegistryAdapter>,
    /// Resolver for AUR packages
    secondary: Arc<dyn RegistryAdapter>,
    /// Maximum number of lookups in flight
    concurrency: usize,
}

impl Reconciler {
    /// Create a reconciler querying archlinux.org and the AUR
    pub fn new(client: HttpClient) -> Self {
        Self::with_adapters(
            Arc::from(create_adapter(Source::Official, client.clone())),
            Arc::from(create_adapter(Source::Aur, client)),
        )
    }

    /// Create a reconciler with custom resolvers
    pub fn with_adapters(
        primary: Arc<dyn RegistryAdapter>,
        secondary: Arc<dyn RegistryAdapter>,
    ) -> Self {
        Self {
            primary,
            secondary,
            concurrency: DEFAULT_CONCURRENCY,
        }
    }

    /// Set the maximum number of concurrent lookups (at least one)
    pub fn with_concurrency(mut self, concurrency: usize) -> Self {
        self.concurrency = concurrency.max(1);
        self
    }

    /// Get the configured concurrency limit
    pub fn concurrency(&self) -> usize {
        self.concurrency
    }

    /// Resolve the remote version of every descriptor, preserving input order
    pub async fn reconcile(
        &self,
        descriptors: Vec<PackageDescriptor>,
        progress: &Progress,
    ) -> Vec<PackageDescriptor> {
        let semaphore = Semaphore::new(self.concurrency);

        let lookups = descriptors.into_iter().map(|descriptor| {
            let semaphore = &semaphore;
            async move {
                // Only fails on a closed semaphore
                let _permit = semaphore.acquire().await.ok();
                self.resolve_one(descriptor, progress).await
            }
        });

        join_all(lookups).await
    }

    /// Look up a single descriptor in the registry matching its source
    async fn resolve_one(
        &self,
        mut descriptor: PackageDescriptor,
        progress: &Progress,
    ) -> PackageDescriptor {
        progress.checking(&descriptor.name);

        descriptor.remote_version = self
            .adapter_for(descriptor.source)
            .resolve(&descriptor.name)
            .await;

        progress.checked();
        descriptor
    }

    fn adapter_for(&self, source: Source) -> &dyn RegistryAdapter {
        match source {
            Source::Official => self.primary.as_ref(),
            Source::Aur => self.secondary.as_ref(),
        }
    }
}
