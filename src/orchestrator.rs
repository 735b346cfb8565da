//! Check orchestrator coordinating the whole freshness workflow
//!
//! This module provides:
//! - Workflow coordination: normalize → reconcile → diff & sort
//! - Progress display around the remote lookups
//! - The `CheckReport` handed to the output formatter

use crate::domain::{PackageDescriptor, PackageList};
use crate::error::RegistryError;
use crate::local::{LocalState, PacmanDatabase};
use crate::normalize::normalize;
use crate::progress::Progress;
use crate::reconcile::Reconciler;
use crate::registry::HttpClient;
use crate::report::pending_updates;
use tracing::debug;

/// Result of a freshness check
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct CheckReport {
    /// Outdated packages in report order
    pub pending: Vec<PackageDescriptor>,
    /// Number of listed packages found installed
    pub installed: usize,
    /// Number of entries in the package list
    pub listed: usize,
}

/// Orchestrator for coordinating the check workflow
pub struct Orchestrator<L = PacmanDatabase> {
    /// Installed version lookup
    local: L,
    /// Remote version lookup
    reconciler: Reconciler,
}

impl Orchestrator {
    /// Create an orchestrator using pacman and the public registries
    pub fn new() -> Result<Self, RegistryError> {
        let client = HttpClient::new()?;
        Ok(Self::with_parts(PacmanDatabase::new(), Reconciler::new(client)))
    }
}

impl<L: LocalState> Orchestrator<L> {
    /// Create an orchestrator from custom parts (for testing)
    pub fn with_parts(local: L, reconciler: Reconciler) -> Self {
        Self { local, reconciler }
    }

    /// Run the check workflow for a package list
    pub async fn run(&self, list: &PackageList, progress: &mut Progress) -> CheckReport {
        // Step 1: Installed versions (synchronous, before any network traffic)
        let descriptors = normalize(list, &self.local);

        let listed = list.entry_count();
        let installed = descriptors.len();
        debug!("{} of {} listed packages are installed", installed, listed);

        // Step 2: Remote versions
        progress.begin(installed);
        let reconciled = self.reconciler.reconcile(descriptors, progress).await;
        progress.finish();

        // Step 3: Outdated packages in report order
        let pending = pending_updates(reconciled);
        debug!("{} packages have a different remote version", pending.len());
        for pkg in &pending {
            debug!("outdated: {}", pkg);
        }

        CheckReport {
            pending,
            installed,
            listed,
        }
    }
}
