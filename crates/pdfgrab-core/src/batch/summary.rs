//! Per-run tally of URL outcomes.

use std::fmt;

/// Counts for one batch run. Every deduplicated entry lands in exactly one bucket.
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq)]
pub struct BatchSummary {
    /// Entries after deduplication.
    pub total: usize,
    pub downloaded: usize,
    /// Target file was already on disk.
    pub skipped_existing: usize,
    /// Empty, malformed, or unnameable entries skipped before any request.
    pub invalid: usize,
    /// Network, content or filesystem failures.
    pub failed: usize,
    /// Bytes written across all downloaded files.
    pub bytes: u64,
}

impl BatchSummary {
    /// Entries that ended in a failure of any kind.
    pub fn unsuccessful(&self) -> usize {
        self.invalid + self.failed
    }
}

impl fmt::Display for BatchSummary {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(
            f,
            "{} URL(s): {} downloaded ({} bytes), {} already present, {} invalid, {} failed",
            self.total, self.downloaded, self.bytes, self.skipped_existing, self.invalid, self.failed
        )
    }
}
