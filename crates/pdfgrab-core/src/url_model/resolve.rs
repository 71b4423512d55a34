//! Turns URL list entries into absolute URLs using the configured base domain.

use thiserror::Error;
use url::Url;

/// Why an entry could not be resolved to an absolute URL.
#[derive(Debug, Clone, PartialEq, Eq, Error)]
pub enum ResolveError {
    #[error("empty entry")]
    Empty,
    /// The entry looks absolute but does not parse. It is skipped rather than
    /// prefixed with the base domain.
    #[error("malformed URL {entry:?}: {source}")]
    Malformed {
        entry: String,
        #[source]
        source: url::ParseError,
    },
}

/// Resolves one entry against `base_domain` (scheme + host, e.g. `https://site.test`).
///
/// Entries with a host are returned as-is (surrounding whitespace trimmed).
/// Relative entries and host-less URLs get the base domain prepended with
/// exactly one `/` in between. Protocol-relative entries (`//host/path`)
/// borrow the base domain's scheme.
pub fn resolve_entry(entry: &str, base_domain: &str) -> Result<String, ResolveError> {
    let entry = entry.trim();
    if entry.is_empty() {
        return Err(ResolveError::Empty);
    }

    match Url::parse(entry) {
        Ok(parsed) if parsed.host_str().is_some_and(|h| !h.is_empty()) => Ok(entry.to_string()),
        Ok(_) => Ok(join(base_domain, entry)),
        Err(url::ParseError::RelativeUrlWithoutBase) => {
            if entry.starts_with("//") {
                Ok(format!("{}:{}", base_scheme(base_domain), entry))
            } else {
                Ok(join(base_domain, entry))
            }
        }
        Err(source) => Err(ResolveError::Malformed {
            entry: entry.to_string(),
            source,
        }),
    }
}

fn join(base_domain: &str, relative: &str) -> String {
    format!(
        "{}/{}",
        base_domain.trim_end_matches('/'),
        relative.trim_start_matches('/')
    )
}

fn base_scheme(base_domain: &str) -> &str {
    base_domain
        .split_once("://")
        .map(|(scheme, _)| scheme)
        .unwrap_or("https")
}
