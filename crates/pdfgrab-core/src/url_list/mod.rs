//! URL list input: reading the entries file and dropping repeated entries.

mod dedup;
mod read;

pub use dedup::dedup_preserving_order;
pub use read::{read_entries, read_entries_from};

use std::path::Path;

/// Reads `path` and returns its entries with duplicates removed, first occurrence kept.
pub fn load_unique_entries(path: &Path) -> Vec<String> {
    let entries = read_entries(path);
    let read = entries.len();
    let unique = dedup_preserving_order(entries);
    tracing::debug!(
        path = %path.display(),
        read,
        unique = unique.len(),
        "loaded URL list"
    );
    unique
}
