//! Raw package list entries as written in the package list document

use super::Source;
use indexmap::IndexMap;
use serde::Deserialize;

/// A single entry of a package list group
///
/// Either a bare package name or a record carrying the name and the `aur`
/// flag (also accepted as `useSecondarySource`).
#[derive(Debug, Clone, PartialEq, Eq, Deserialize)]
#[serde(untagged)]
pub enum PackageEntry {
    /// Shorthand form: `- firefox`
    Name(String),
    /// Record form: `- { name: yay, aur: true }`
    Detailed {
        name: String,
        #[serde(default, alias = "useSecondarySource")]
        aur: bool,
    },
}

impl PackageEntry {
    /// Returns the package name
    pub fn name(&self) -> &str {
        match self {
            PackageEntry::Name(name) => name,
            PackageEntry::Detailed { name, .. } => name,
        }
    }

    /// Returns the registry this entry is looked up in
    pub fn source(&self) -> Source {
        match self {
            PackageEntry::Name(_) => Source::Official,
            PackageEntry::Detailed { aur, .. } => Source::from_aur_flag(*aur),
        }
    }
}

/// Package list: group name to ordered entries, in document order
#[derive(Debug, Clone, Default, PartialEq, Eq, Deserialize)]
#[serde(transparent)]
pub struct PackageList {
    // A group declared with no entries (`group:` in YAML) deserializes as None
    groups: IndexMap<String, Option<Vec<PackageEntry>>>,
}

impl PackageList {
    /// Creates an empty package list
    pub fn new() -> Self {
        Self::default()
    }

    /// Appends a group (builder pattern)
    pub fn with_group(mut self, group: impl Into<String>, entries: Vec<PackageEntry>) -> Self {
        self.groups.insert(group.into(), Some(entries));
        self
    }

    /// Iterates groups in document order
    pub fn groups(&self) -> impl Iterator<Item = (&str, &[PackageEntry])> {
        self.groups
            .iter()
            .map(|(group, entries)| (group.as_str(), entries.as_deref().unwrap_or_default()))
    }

    /// Total number of entries across all groups
    pub fn entry_count(&self) -> usize {
        self.groups().map(|(_, entries)| entries.len()).sum()
    }

    /// Returns true if no group declares any entry
    pub fn is_empty(&self) -> bool {
        self.entry_count() == 0
    }
}
