//! Package descriptor tracked through a freshness check

use super::Source;
use std::fmt;

/// One tracked package: identity, group, source and versions
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct PackageDescriptor {
    /// Package name
    pub name: String,
    /// Package list group this package was declared under
    pub group: String,
    /// Registry used for the remote lookup
    pub source: Source,
    /// Installed version, if the package is installed
    pub version: Option<String>,
    /// Latest published version, filled in by reconciliation
    pub remote_version: Option<String>,
}

impl PackageDescriptor {
    /// Creates a descriptor with no version information
    pub fn new(name: impl Into<String>, group: impl Into<String>, source: Source) -> Self {
        Self {
            name: name.into(),
            group: group.into(),
            source,
            version: None,
            remote_version: None,
        }
    }

    /// Sets the installed version (builder pattern)
    pub fn with_version(mut self, version: impl Into<String>) -> Self {
        self.version = Some(version.into());
        self
    }

    /// Sets the remote version (builder pattern)
    pub fn with_remote_version(mut self, remote_version: impl Into<String>) -> Self {
        self.remote_version = Some(remote_version.into());
        self
    }

    /// Returns true if a remote version was found and it differs from the installed one
    pub fn needs_update(&self) -> bool {
        match &self.remote_version {
            Some(remote) => self.version.as_deref() != Some(remote.as_str()),
            None => false,
        }
    }
}

impl fmt::Display for PackageDescriptor {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(
            f,
            "{}/{} ({}) {}",
            self.group,
            self.name,
            self.source,
            self.version.as_deref().unwrap_or("-")
        )?;
        if let Some(remote) = &self.remote_version {
            write!(f, " -> {}", remote)?;
        }
        Ok(())
    }
}
