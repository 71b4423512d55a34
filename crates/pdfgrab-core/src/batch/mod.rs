//! Sequential batch run: read list → dedup → per URL resolve, validate, name, download.
//!
//! One URL is fully processed before the next; no failure stops the batch.

mod summary;

pub use summary::BatchSummary;

use crate::config::PdfgrabConfig;
use crate::downloader::{Downloader, Outcome};
use crate::fetch::Transport;
use crate::storage;
use crate::url_list;
use crate::url_model;

/// Runs the whole batch described by `cfg` using `transport` for every GET.
pub fn run_batch<T: Transport>(cfg: &PdfgrabConfig, transport: T) -> BatchSummary {
    if let Err(e) = storage::ensure_output_dir(&cfg.output_dir) {
        tracing::error!("{:#}", e);
    }

    let entries = url_list::load_unique_entries(&cfg.input_path);
    let downloader = Downloader::new(transport, &cfg.output_dir);
    let summary = run_entries(&downloader, &entries, &cfg.base_domain);
    tracing::info!("batch finished: {}", summary);
    summary
}

/// Processes already-deduplicated `entries` in order.
pub fn run_entries<T: Transport>(
    downloader: &Downloader<T>,
    entries: &[String],
    base_domain: &str,
) -> BatchSummary {
    let mut summary = BatchSummary {
        total: entries.len(),
        ..BatchSummary::default()
    };

    for entry in entries {
        let Some((url, filename)) = url_model::prepare_entry(entry, base_domain) else {
            summary.invalid += 1;
            continue;
        };

        match downloader.download_as(&url, &filename) {
            Ok(Outcome::Downloaded { path, bytes }) => {
                tracing::info!(url = %url, path = %path.display(), bytes, "downloaded");
                summary.downloaded += 1;
                summary.bytes += bytes;
            }
            Ok(Outcome::SkippedExisting { path }) => {
                tracing::info!(url = %url, path = %path.display(), "file already exists, skipping");
                summary.skipped_existing += 1;
            }
            Err(e) => {
                tracing::warn!(url = %url, "download failed: {}", e);
                summary.failed += 1;
            }
        }
    }

    summary
}
