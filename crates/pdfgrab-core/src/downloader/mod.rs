//! Validated single-document downloader.
//!
//! For each URL: derive the target path, skip if a file is already there,
//! GET through a [`Transport`], accept only a non-empty `200` PDF response,
//! and persist it atomically. Nothing is retried.

mod response;

pub use response::{check_response, PDF_CONTENT_TYPE};

use std::path::PathBuf;
use thiserror::Error;

use crate::fetch::{Transport, TransportError};
use crate::storage;
use crate::url_model::{sanitize_url_filename, FilenameError};

/// What happened to a URL that did not fail.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum Outcome {
    Downloaded { path: PathBuf, bytes: u64 },
    /// A regular file already exists at the target path; no request was made.
    SkippedExisting { path: PathBuf },
}

/// Why a URL was abandoned.
#[derive(Debug, Error)]
pub enum DownloadError {
    #[error("cannot name file: {0}")]
    Filename(#[from] FilenameError),
    #[error("request failed: {0}")]
    Transport(#[from] TransportError),
    #[error("HTTP {0}")]
    HttpStatus(u32),
    #[error("invalid content type {content_type:?} (expected application/pdf)")]
    ContentType { content_type: String },
    #[error("empty response body")]
    EmptyBody,
    #[error("storage: {0:#}")]
    Storage(anyhow::Error),
}

/// Downloads URLs into a single output directory.
pub struct Downloader<T> {
    transport: T,
    output_dir: PathBuf,
}

impl<T: Transport> Downloader<T> {
    pub fn new(transport: T, output_dir: impl Into<PathBuf>) -> Self {
        Self {
            transport,
            output_dir: output_dir.into(),
        }
    }

    /// Target path for `filename` inside the output directory (always lowercase).
    pub fn target_path(&self, filename: &str) -> PathBuf {
        self.output_dir.join(filename.to_lowercase())
    }

    /// Downloads `url` under its sanitized filename.
    pub fn download(&self, url: &str) -> Result<Outcome, DownloadError> {
        let filename = sanitize_url_filename(url)?;
        self.download_as(url, &filename)
    }

    /// Downloads `url` to `filename` inside the output directory.
    pub fn download_as(&self, url: &str, filename: &str) -> Result<Outcome, DownloadError> {
        let path = self.target_path(filename);
        if storage::is_existing_file(&path) {
            return Ok(Outcome::SkippedExisting { path });
        }

        let response = self.transport.get(url)?;
        let body = check_response(response)?;

        let bytes = storage::write_atomic(&path, &body).map_err(DownloadError::Storage)?;
        Ok(Outcome::Downloaded { path, bytes })
    }
}
