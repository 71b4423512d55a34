//! Output directory and file lifecycle.
//!
//! Bodies are written to `<target>.part`, synced, then renamed onto the target
//! so an interrupted write never leaves a truncated document under its final name.

mod writer;

pub use writer::PartFile;

use anyhow::{Context, Result};
use std::path::{Path, PathBuf};

/// Temporary file suffix used before atomic rename.
pub const TEMP_SUFFIX: &str = ".part";

/// Path for the temp file: appends `.part` to the final path (e.g. `a.pdf` → `a.pdf.part`).
pub fn temp_path(final_path: &Path) -> PathBuf {
    let mut o = final_path.as_os_str().to_owned();
    o.push(TEMP_SUFFIX);
    PathBuf::from(o)
}

/// Creates `dir` (and parents) if it does not exist yet.
pub fn ensure_output_dir(dir: &Path) -> Result<()> {
    if dir.is_dir() {
        return Ok(());
    }
    std::fs::create_dir_all(dir)
        .with_context(|| format!("failed to create output directory {}", dir.display()))?;
    tracing::info!("created output directory {}", dir.display());
    Ok(())
}

/// True if `path` exists and is not a directory.
pub fn is_existing_file(path: &Path) -> bool {
    std::fs::metadata(path).is_ok_and(|m| !m.is_dir())
}

/// Writes `data` to `final_path` via a synced temp file and rename.
/// On failure the temp file is removed and `final_path` is untouched.
pub fn write_atomic(final_path: &Path, data: &[u8]) -> Result<u64> {
    let mut part = PartFile::create(final_path)?;
    if let Err(e) = part.write_all(data).and_then(|()| part.sync()) {
        part.discard();
        return Err(e);
    }
    part.finalize(final_path)?;
    Ok(data.len() as u64)
}
