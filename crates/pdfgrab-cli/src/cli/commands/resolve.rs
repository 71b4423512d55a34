//! `pdfgrab resolve <entry>` – show how a list entry is resolved.

use anyhow::{Context, Result};
use pdfgrab_core::config::PdfgrabConfig;
use pdfgrab_core::url_model;

pub fn run_resolve(cfg: &PdfgrabConfig, entry: &str) -> Result<()> {
    let url = url_model::resolve_entry(entry, &cfg.base_domain)
        .with_context(|| format!("cannot resolve {entry:?}"))?;
    println!("{url}");
    Ok(())
}
