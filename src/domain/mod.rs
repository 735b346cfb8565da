//! Core domain models for pacfresh
//!
//! This module contains the fundamental types used throughout the application:
//! - Source selection (official repositories or AUR)
//! - Raw package list entries and the grouped package list
//! - Package descriptors carried through the freshness check

mod entry;
mod package;
mod source;

pub use entry::{PackageEntry, PackageList};
pub use package::PackageDescriptor;
pub use source::Source;
