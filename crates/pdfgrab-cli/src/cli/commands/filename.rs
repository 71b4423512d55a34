//! `pdfgrab filename <url>` – show the on-disk name for a URL.

use anyhow::{Context, Result};
use pdfgrab_core::url_model;

pub fn run_filename(url: &str) -> Result<()> {
    let name = url_model::sanitize_url_filename(url)
        .with_context(|| format!("no usable filename for {url}"))?;
    println!("{name}");
    Ok(())
}
