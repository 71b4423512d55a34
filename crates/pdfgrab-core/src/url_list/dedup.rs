//! Order-preserving duplicate removal.

use std::collections::HashSet;

/// Keeps the first occurrence of each entry. Comparison is exact: no case,
/// whitespace or trailing-slash normalization.
pub fn dedup_preserving_order(entries: Vec<String>) -> Vec<String> {
    let mut seen = HashSet::with_capacity(entries.len());
    entries
        .into_iter()
        .filter(|entry| seen.insert(entry.clone()))
        .collect()
}
