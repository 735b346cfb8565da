//! Remote source selection for a tracked package

use std::fmt;

/// Which remote registry publishes a package
///
/// Ordering follows declaration order, so official packages sort before
/// AUR packages.
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq, PartialOrd, Ord, Hash)]
pub enum Source {
    /// Official Arch Linux repositories (core, extra, ...)
    #[default]
    Official,
    /// Arch User Repository
    Aur,
}

impl Source {
    /// Maps the `aur` flag of a package list entry to a source
    pub fn from_aur_flag(aur: bool) -> Self {
        if aur {
            Source::Aur
        } else {
            Source::Official
        }
    }

    /// Short label used in the report table
    pub fn label(&self) -> &'static str {
        match self {
            Source::Official => "repo",
            Source::Aur => "aur",
        }
    }
}

impl fmt::Display for Source {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{}", self.label())
    }
}
