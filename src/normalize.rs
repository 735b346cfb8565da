//! Flattening of the grouped package list into package descriptors

use crate::domain::{PackageDescriptor, PackageList};
use crate::local::LocalState;
use tracing::debug;

/// Builds one descriptor per installed entry, in package list order
///
/// Groups are visited in document order and entries in declaration order.
/// Entries that `local` does not report as installed are dropped. The same
/// name under two groups yields two descriptors.
pub fn normalize(list: &PackageList, local: &dyn LocalState) -> Vec<PackageDescriptor> {
    let mut descriptors = Vec::with_capacity(list.entry_count());

    for (group, entries) in list.groups() {
        for entry in entries {
            let Some(version) = local.installed_version(entry.name()) else {
                debug!("Skipping {} ({}): not installed", entry.name(), group);
                continue;
            };

            descriptors.push(
                PackageDescriptor::new(entry.name(), group, entry.source()).with_version(version),
            );
        }
    }

    descriptors
}
