//! CLI for the pdfgrab batch downloader.

mod commands;

use anyhow::Result;
use clap::{Parser, Subcommand};
use pdfgrab_core::config::{self, PdfgrabConfig};
use std::path::PathBuf;

use commands::{run_batch, run_filename, run_resolve, RunOverrides};

/// Top-level CLI for pdfgrab.
#[derive(Debug, Parser)]
#[command(name = "pdfgrab")]
#[command(about = "pdfgrab: download the PDFs listed in a URL file", long_about = None)]
pub struct Cli {
    /// Config file to use instead of ~/.config/pdfgrab/config.toml.
    #[arg(long, global = true, value_name = "PATH")]
    pub config: Option<PathBuf>,

    /// Append logs to ~/.local/state/pdfgrab/pdfgrab.log instead of stderr.
    #[arg(long, global = true)]
    pub log_file: bool,

    /// Defaults to `run` when omitted.
    #[command(subcommand)]
    pub command: Option<CliCommand>,
}

#[derive(Debug, Subcommand)]
pub enum CliCommand {
    /// Download every PDF in the URL list (the default command).
    Run {
        /// URL list to read (one URL or root-relative path per line).
        #[arg(long, value_name = "PATH")]
        input: Option<PathBuf>,
        /// Directory that receives the PDFs.
        #[arg(long, value_name = "DIR")]
        output_dir: Option<PathBuf>,
        /// Scheme + host prepended to relative entries, e.g. https://example.com.
        #[arg(long, value_name = "URL")]
        base_domain: Option<String>,
        /// Per-request timeout in seconds (at least 1).
        #[arg(long, value_name = "SECS", value_parser = clap::value_parser!(u64).range(1..))]
        timeout_secs: Option<u64>,
    },

    /// Print the filename a URL would be saved under.
    Filename {
        /// Absolute URL.
        url: String,
    },

    /// Print the absolute URL a list entry resolves to.
    Resolve {
        /// Entry as it would appear in the URL list.
        entry: String,
    },
}

impl Cli {
    pub fn run(self) -> Result<()> {
        let cfg = self.load_config()?;
        tracing::debug!("loaded config: {:?}", cfg);

        let command = self.command.unwrap_or(CliCommand::Run {
            input: None,
            output_dir: None,
            base_domain: None,
            timeout_secs: None,
        });

        match command {
            CliCommand::Run {
                input,
                output_dir,
                base_domain,
                timeout_secs,
            } => {
                let overrides = RunOverrides {
                    input,
                    output_dir,
                    base_domain,
                    timeout_secs,
                };
                run_batch(overrides.apply(cfg))?;
            }
            CliCommand::Filename { url } => run_filename(&url)?,
            CliCommand::Resolve { entry } => run_resolve(&cfg, &entry)?,
        }

        Ok(())
    }

    fn load_config(&self) -> Result<PdfgrabConfig> {
        match &self.config {
            Some(path) => config::load_from_path(path),
            None => Ok(config::load_or_init().unwrap_or_else(|e| {
                tracing::warn!("using built-in defaults, config unavailable: {:#}", e);
                PdfgrabConfig::default()
            })),
        }
    }
}

#[cfg(test)]
mod tests;
