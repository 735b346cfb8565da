//! Selection and ordering of outdated packages
//!
//! This module provides:
//! - A composite comparator builder over (key extractor, direction) pairs
//! - `pending_updates`, which keeps descriptors whose remote version differs
//!   from the installed one and orders them by group, source and name

use crate::domain::PackageDescriptor;
use std::cmp::Ordering;

/// Sort direction of a single key
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
pub enum Direction {
    #[default]
    Ascending,
    Descending,
}

/// One level of a composite sort: how to compare two items on a single key
pub struct SortKey<T> {
    compare: Box<dyn Fn(&T, &T) -> Ordering + Send + Sync>,
    direction: Direction,
}

impl<T: 'static> SortKey<T> {
    /// Key compared in ascending order
    pub fn ascending<K: Ord + ?Sized + 'static>(extract: fn(&T) -> &K) -> Self {
        Self::new(extract, Direction::Ascending)
    }

    /// Key compared in descending order
    pub fn descending<K: Ord + ?Sized + 'static>(extract: fn(&T) -> &K) -> Self {
        Self::new(extract, Direction::Descending)
    }

    /// Key compared in the given direction
    pub fn new<K: Ord + ?Sized + 'static>(extract: fn(&T) -> &K, direction: Direction) -> Self {
        Self {
            compare: Box::new(move |a: &T, b: &T| extract(a).cmp(extract(b))),
            direction,
        }
    }
}

impl<T> SortKey<T> {
    fn apply(&self, a: &T, b: &T) -> Ordering {
        let ordering = (self.compare)(a, b);
        match self.direction {
            Direction::Ascending => ordering,
            Direction::Descending => ordering.reverse(),
        }
    }
}

/// Builds a comparator that tries each key in turn until one is not equal
pub fn compare_by<T>(keys: Vec<SortKey<T>>) -> impl Fn(&T, &T) -> Ordering {
    move |a: &T, b: &T| {
        keys.iter()
            .map(|key| key.apply(a, b))
            .find(|ordering| ordering.is_ne())
            .unwrap_or(Ordering::Equal)
    }
}

/// Report ordering: group, then official before AUR, then name
pub fn report_order() -> impl Fn(&PackageDescriptor, &PackageDescriptor) -> Ordering {
    compare_by(vec![
        SortKey::ascending(|d: &PackageDescriptor| d.group.as_str()),
        SortKey::ascending(|d: &PackageDescriptor| &d.source),
        SortKey::ascending(|d: &PackageDescriptor| d.name.as_str()),
    ])
}

/// Keeps descriptors needing an update, sorted for the report
///
/// The sort is stable, so descriptors equal on every key keep their
/// reconciliation order.
pub fn pending_updates(descriptors: Vec<PackageDescriptor>) -> Vec<PackageDescriptor> {
    let mut pending: Vec<PackageDescriptor> = descriptors
        .into_iter()
        .filter(PackageDescriptor::needs_update)
        .collect();
    pending.sort_by(report_order());
    pending
}
