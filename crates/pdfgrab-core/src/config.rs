use anyhow::{bail, Context, Result};
use serde::{Deserialize, Serialize};
use std::fs;
use std::path::{Path, PathBuf};
use std::time::Duration;

/// Global configuration loaded from `~/.config/pdfgrab/config.toml`.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(default)]
pub struct PdfgrabConfig {
    /// Newline-delimited list of URLs (absolute or root-relative).
    pub input_path: PathBuf,
    /// Directory that receives the downloaded PDFs; created if missing.
    pub output_dir: PathBuf,
    /// Scheme + host prepended to relative entries.
    pub base_domain: String,
    /// Whole-request timeout in seconds (connect + transfer).
    pub request_timeout_secs: u64,
    /// Connection establishment timeout in seconds.
    pub connect_timeout_secs: u64,
}

impl Default for PdfgrabConfig {
    fn default() -> Self {
        Self {
            input_path: PathBuf::from("valid_pdf.txt"),
            output_dir: PathBuf::from("PDFs"),
            base_domain: "https://www.klnsh-usaueber.com".to_string(),
            request_timeout_secs: 180,
            connect_timeout_secs: 30,
        }
    }
}

impl PdfgrabConfig {
    pub fn request_timeout(&self) -> Duration {
        Duration::from_secs(self.request_timeout_secs)
    }

    pub fn connect_timeout(&self) -> Duration {
        Duration::from_secs(self.connect_timeout_secs)
    }

    /// Rejects values the transport cannot honor. curl treats a zero timeout
    /// as "wait forever".
    pub fn validate(&self) -> Result<()> {
        if self.request_timeout_secs == 0 {
            bail!("request_timeout_secs must be at least 1");
        }
        if self.connect_timeout_secs == 0 {
            bail!("connect_timeout_secs must be at least 1");
        }
        Ok(())
    }
}

pub fn config_path() -> Result<PathBuf> {
    let xdg_dirs = xdg::BaseDirectories::with_prefix("pdfgrab")?;
    Ok(xdg_dirs.place_config_file("config.toml")?)
}

/// Load configuration from disk, creating a default file if none exists.
pub fn load_or_init() -> Result<PdfgrabConfig> {
    let path = config_path()?;
    if !path.exists() {
        let default_cfg = PdfgrabConfig::default();
        let toml = toml::to_string_pretty(&default_cfg)?;
        if let Some(parent) = path.parent() {
            fs::create_dir_all(parent)?;
        }
        fs::write(&path, toml)?;
        tracing::info!("created default config at {}", path.display());
        return Ok(default_cfg);
    }
    load_from_path(&path)
}

/// Load configuration from an explicit file. The file must exist; missing keys take defaults.
pub fn load_from_path(path: &Path) -> Result<PdfgrabConfig> {
    let data = fs::read_to_string(path)
        .with_context(|| format!("read config {}", path.display()))?;
    let cfg: PdfgrabConfig =
        toml::from_str(&data).with_context(|| format!("parse config {}", path.display()))?;
    cfg.validate().with_context(|| format!("invalid config {}", path.display()))?;
    Ok(cfg)
}
