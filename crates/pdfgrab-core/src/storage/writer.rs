//! Temp file that becomes the final document on `finalize`.

use anyhow::{Context, Result};
use std::fs::File;
use std::io::Write;
use std::path::{Path, PathBuf};

use super::temp_path;

/// Open `.part` file next to a download target.
pub struct PartFile {
    file: File,
    temp_path: PathBuf,
}

impl PartFile {
    /// Create (or truncate a stale) `<final_path>.part`.
    pub fn create(final_path: &Path) -> Result<Self> {
        let temp_path = temp_path(final_path);
        let file = File::options()
            .write(true)
            .create(true)
            .truncate(true)
            .open(&temp_path)
            .with_context(|| format!("failed to create temp file: {}", temp_path.display()))?;
        Ok(PartFile { file, temp_path })
    }

    pub fn write_all(&mut self, data: &[u8]) -> Result<()> {
        self.file
            .write_all(data)
            .with_context(|| format!("failed to write {}", self.temp_path.display()))
    }

    /// Sync file data to disk. Call before `finalize` for durability.
    pub fn sync(&self) -> Result<()> {
        self.file.sync_all().context("storage sync failed")?;
        Ok(())
    }

    /// Path to the current temp file.
    pub fn temp_path(&self) -> &Path {
        &self.temp_path
    }

    /// Close and delete the temp file, e.g. after a failed write.
    pub fn discard(self) {
        let temp_path = self.temp_path;
        drop(self.file);
        if let Err(e) = std::fs::remove_file(&temp_path) {
            tracing::warn!("could not remove {}: {}", temp_path.display(), e);
        }
    }

    /// Atomically rename the temp file to the final path. Consumes the writer and closes the file.
    /// Fails if `final_path` is on a different filesystem; the temp file is removed in that case.
    pub fn finalize(self, final_path: &Path) -> Result<()> {
        let temp_path = self.temp_path;
        drop(self.file);

        if let Err(e) = std::fs::rename(&temp_path, final_path) {
            let _ = std::fs::remove_file(&temp_path);
            return Err(e).with_context(|| {
                format!(
                    "failed to rename {} to {}",
                    temp_path.display(),
                    final_path.display()
                )
            });
        }
        Ok(())
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn create_write_finalize() {
        let dir = tempfile::tempdir().unwrap();
        let final_path = dir.path().join("output.pdf");

        let mut part = PartFile::create(&final_path).unwrap();
        assert_eq!(part.temp_path(), dir.path().join("output.pdf.part"));
        part.write_all(b"%PDF-").unwrap();
        part.write_all(b"1.4").unwrap();
        part.sync().unwrap();
        part.finalize(&final_path).unwrap();

        assert!(!dir.path().join("output.pdf.part").exists());
        assert_eq!(std::fs::read(&final_path).unwrap(), b"%PDF-1.4");
    }

    #[test]
    fn create_truncates_stale_part() {
        let dir = tempfile::tempdir().unwrap();
        let final_path = dir.path().join("output.pdf");
        std::fs::write(dir.path().join("output.pdf.part"), b"stale leftovers").unwrap();

        let mut part = PartFile::create(&final_path).unwrap();
        part.write_all(b"new").unwrap();
        part.finalize(&final_path).unwrap();
        assert_eq!(std::fs::read(&final_path).unwrap(), b"new");
    }

    #[test]
    fn discard_removes_temp_and_keeps_target_absent() {
        let dir = tempfile::tempdir().unwrap();
        let final_path = dir.path().join("output.pdf");
        let mut part = PartFile::create(&final_path).unwrap();
        part.write_all(b"half").unwrap();
        let tp = part.temp_path().to_path_buf();
        part.discard();
        assert!(!tp.exists());
        assert!(!final_path.exists());
    }

    #[test]
    fn finalize_onto_directory_fails_and_cleans_up() {
        let dir = tempfile::tempdir().unwrap();
        let final_path = dir.path().join("taken.pdf");
        std::fs::create_dir(&final_path).unwrap();
        std::fs::write(final_path.join("inner"), b"x").unwrap();

        let mut part = PartFile::create(&final_path).unwrap();
        part.write_all(b"%PDF").unwrap();
        let tp = part.temp_path().to_path_buf();
        assert!(part.finalize(&final_path).is_err());
        assert!(!tp.exists());
        assert!(final_path.is_dir());
    }
}
