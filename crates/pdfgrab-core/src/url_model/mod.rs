//! URL modeling and filename derivation.
//!
//! Resolves URL list entries against the base domain, validates them, and
//! derives the lowercase on-disk filename for each document.

mod path;
mod resolve;
mod sanitize;
mod validate;

pub use path::last_path_segment;
pub use resolve::{resolve_entry, ResolveError};
pub use sanitize::{sanitize_url_filename, FilenameError};
pub use validate::validate_request_uri;

/// Resolves, validates and names one entry in a single step.
///
/// Returns the request URL (parsed form) and its filename, or `None` (with the
/// reason logged) if the entry must be skipped before any network call.
pub fn prepare_entry(entry: &str, base_domain: &str) -> Option<(String, String)> {
    let url = match resolve_entry(entry, base_domain) {
        Ok(url) => url,
        Err(ResolveError::Empty) => {
            tracing::debug!("skipping empty entry");
            return None;
        }
        Err(e) => {
            tracing::warn!(entry = %entry, "skipping entry: {}", e);
            return None;
        }
    };

    let request_url = match validate_request_uri(&url) {
        Ok(parsed) => parsed,
        Err(e) => {
            tracing::warn!(url = %url, "skipping invalid URL: {}", e);
            return None;
        }
    };

    match sanitize_url_filename(&url) {
        Ok(name) => Some((request_url.into(), name)),
        Err(e) => {
            tracing::warn!(url = %url, "skipping URL: {}", e);
            None
        }
    }
}
