//! Newline-delimited URL list reader.
//!
//! Failures never propagate: whatever was read before the error is returned.

use std::fs::File;
use std::io::{BufRead, BufReader};
use std::path::Path;

/// Reads one entry per line from `path`. Empty lines are kept as empty entries.
///
/// A missing or unreadable file is logged and yields an empty list; a read
/// error part-way through keeps the lines read so far.
pub fn read_entries(path: &Path) -> Vec<String> {
    match File::open(path) {
        Ok(file) => read_entries_from(BufReader::new(file), path),
        Err(e) => {
            tracing::warn!(path = %path.display(), "cannot open URL list: {}", e);
            Vec::new()
        }
    }
}

/// Reads entries from any buffered reader; `origin` is only used for log context.
pub fn read_entries_from<R: BufRead>(reader: R, origin: &Path) -> Vec<String> {
    let mut entries = Vec::new();
    for (index, line) in reader.lines().enumerate() {
        match line {
            Ok(mut line) => {
                if line.ends_with('\r') {
                    line.pop();
                }
                entries.push(line);
            }
            Err(e) => {
                tracing::warn!(
                    path = %origin.display(),
                    line = index + 1,
                    "stopped reading URL list: {}",
                    e
                );
                break;
            }
        }
    }
    entries
}

#[cfg(test)]
mod tests {
    use super::*;
    use std::io::{Cursor, Write};

    #[test]
    fn reads_lines_including_empty_ones() {
        let input = Cursor::new("/a.pdf\n\nhttps://x.test/b.pdf\n");
        let entries = read_entries_from(input, Path::new("list.txt"));
        assert_eq!(entries, vec!["/a.pdf", "", "https://x.test/b.pdf"]);
    }

    #[test]
    fn strips_carriage_returns() {
        let input = Cursor::new("/a.pdf\r\n/b.pdf\r\n");
        let entries = read_entries_from(input, Path::new("list.txt"));
        assert_eq!(entries, vec!["/a.pdf", "/b.pdf"]);
    }

    #[test]
    fn invalid_utf8_keeps_earlier_lines() {
        let input = Cursor::new(b"/a.pdf\n\xff\xfe\n/c.pdf\n".to_vec());
        let entries = read_entries_from(input, Path::new("list.txt"));
        assert_eq!(entries, vec!["/a.pdf"]);
    }

    #[test]
    fn missing_file_is_empty_list() {
        let dir = tempfile::tempdir().unwrap();
        assert!(read_entries(&dir.path().join("nope.txt")).is_empty());
    }

    #[test]
    fn reads_from_disk() {
        let mut f = tempfile::NamedTempFile::new().unwrap();
        f.write_all(b"/a/Report.PDF\n/a/Report.PDF\nhttps://other.test/x/doc.ZIP?v=1")
            .unwrap();
        f.flush().unwrap();
        let entries = read_entries(f.path());
        assert_eq!(entries.len(), 3);
        assert_eq!(entries[2], "https://other.test/x/doc.ZIP?v=1");
    }
}
