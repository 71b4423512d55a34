//! `pdfgrab run` – download every PDF in the URL list.

use anyhow::Result;
use pdfgrab_core::batch;
use pdfgrab_core::config::PdfgrabConfig;
use pdfgrab_core::fetch::CurlTransport;
use std::path::PathBuf;

/// Command-line values that replace config file fields for this run.
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct RunOverrides {
    pub input: Option<PathBuf>,
    pub output_dir: Option<PathBuf>,
    pub base_domain: Option<String>,
    pub timeout_secs: Option<u64>,
}

impl RunOverrides {
    pub fn apply(self, mut cfg: PdfgrabConfig) -> PdfgrabConfig {
        if let Some(input) = self.input {
            cfg.input_path = input;
        }
        if let Some(dir) = self.output_dir {
            cfg.output_dir = dir;
        }
        if let Some(base) = self.base_domain {
            cfg.base_domain = base;
        }
        if let Some(secs) = self.timeout_secs {
            cfg.request_timeout_secs = secs;
        }
        cfg
    }
}

/// Per-URL failures are logged and counted; they never make the command fail.
pub fn run_batch(cfg: PdfgrabConfig) -> Result<()> {
    cfg.validate()?;
    tracing::info!(
        input = %cfg.input_path.display(),
        output = %cfg.output_dir.display(),
        base_domain = %cfg.base_domain,
        "starting batch"
    );
    let transport = CurlTransport::from_config(&cfg);
    let summary = batch::run_batch(&cfg, transport);
    println!("{}", summary);
    Ok(())
}
