//! Filename sanitization for downloaded documents.

use thiserror::Error;

use super::path::last_path_segment;

/// Linux NAME_MAX in bytes.
const NAME_MAX: usize = 255;

/// Longest suffix (dot included) still treated as an extension. Anything
/// longer is part of the stem, so the cap below always leaves room for a stem.
const MAX_EXT_LEN: usize = 16;

/// Substrings stripped from the stem (the extension is re-appended afterwards).
const REDUNDANT_MARKERS: [&str; 2] = ["_pdf", "_zip"];

/// Why a URL could not be turned into a usable filename.
#[derive(Debug, Clone, PartialEq, Eq, Error)]
pub enum FilenameError {
    /// The URL has no parseable path to take a basename from.
    #[error("URL has no path segment to name the file after")]
    NoPath,
    /// Nothing alphanumeric survived sanitization.
    #[error("basename {basename:?} sanitizes to an empty name")]
    EmptyStem { basename: String },
}

/// Derives the on-disk filename for `url`.
///
/// The URL is lowercased and its last path segment, taken from the raw text,
/// is split into stem and extension. Every run of characters outside `[a-z0-9]` in the whole segment
/// becomes a single `_`, one leading `_` is dropped, and every `_pdf` / `_zip`
/// is removed before the extension is appended again. Query and fragment never
/// contribute to the name.
///
/// # Examples
///
/// - `https://site.test/a/Report.PDF` → `report.pdf`
/// - `https://other.test/x/doc.ZIP?v=1` → `doc.zip`
/// - `https://site.test/files/Annual%20Report-2023.pdf` → `annual_20report_2023.pdf`
/// - `https://site.test/files/Annual Report.pdf` → `annual_report.pdf`
pub fn sanitize_url_filename(url: &str) -> Result<String, FilenameError> {
    let lowered = url.to_lowercase();
    let basename = last_path_segment(&lowered).ok_or(FilenameError::NoPath)?;
    let ext = extension(&basename);

    let mut stem = replace_non_alnum_runs(&basename);
    stem = collapse_underscores(&stem);
    if let Some(rest) = stem.strip_prefix('_') {
        stem = rest.to_string();
    }
    for marker in REDUNDANT_MARKERS {
        stem = stem.replace(marker, "");
    }

    if stem.is_empty() {
        return Err(FilenameError::EmptyStem { basename });
    }

    truncate_stem(&mut stem, NAME_MAX - ext.len());
    stem.push_str(ext);
    Ok(stem)
}

/// Extension of a basename including the dot, or `""`. A bare trailing dot or
/// an over-long suffix is not an extension.
fn extension(basename: &str) -> &str {
    match basename.rfind('.') {
        Some(idx) if idx + 1 < basename.len() && basename.len() - idx <= MAX_EXT_LEN => {
            &basename[idx..]
        }
        _ => "",
    }
}

fn replace_non_alnum_runs(s: &str) -> String {
    let mut out = String::with_capacity(s.len());
    let mut in_run = false;
    for c in s.chars() {
        if c.is_ascii_lowercase() || c.is_ascii_digit() {
            out.push(c);
            in_run = false;
        } else if !in_run {
            out.push('_');
            in_run = true;
        }
    }
    out
}

fn collapse_underscores(s: &str) -> String {
    let mut out = String::with_capacity(s.len());
    let mut prev_underscore = false;
    for c in s.chars() {
        if c == '_' {
            if !prev_underscore {
                out.push(c);
            }
            prev_underscore = true;
        } else {
            out.push(c);
            prev_underscore = false;
        }
    }
    out
}

fn truncate_stem(stem: &mut String, max: usize) {
    if stem.len() <= max {
        return;
    }
    let mut take = max;
    while take > 0 && !stem.is_char_boundary(take) {
        take -= 1;
    }
    stem.truncate(take);
}
