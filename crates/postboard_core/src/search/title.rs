//! Case-insensitive title search over in-memory records.
//!
//! # Responsibility
//! - Filter already-loaded records by title substring containment.
//!
//! # Invariants
//! - Output preserves input order and never copies record data.
//! - A blank query selects every record.

use crate::model::Titled;

/// Returns the records whose title contains `query`, case-insensitively.
///
/// The result is an order-preserving view into `records`; a blank or
/// whitespace-only query returns all of them. Applying the same query to
/// its own output yields the same selection.
pub fn filter_by_title<'a, T: Titled>(records: &'a [T], query: &str) -> Vec<&'a T> {
    let needle = query.trim().to_lowercase();
    if needle.is_empty() {
        return records.iter().collect();
    }

    records
        .iter()
        .filter(|record| record.title().to_lowercase().contains(&needle))
        .collect()
}
