//! Basename extraction from URL paths.

/// Returns the last non-empty path segment of `url`, taken verbatim from the
/// input (no percent-encoding or decoding is applied).
///
/// Query and fragment are cut off first. For `scheme://authority` URLs the
/// path starts at the first `/` after the authority; a URL with an empty or
/// root path yields `None`. Trailing slashes are skipped, so `/docs/` names
/// `docs`.
pub fn last_path_segment(url: &str) -> Option<String> {
    let end = url.find(|c: char| c == '?' || c == '#').unwrap_or(url.len());
    let without_query = &url[..end];
    let path = match without_query.split_once("://") {
        Some((_, rest)) => rest.find('/').map_or("", |idx| &rest[idx..]),
        None => without_query,
    };
    let segment = path.split('/').filter(|s| !s.is_empty()).last()?;
    Some(segment.to_string())
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn normal() {
        assert_eq!(
            last_path_segment("https://example.com/a/b/report.pdf").as_deref(),
            Some("report.pdf")
        );
        assert_eq!(
            last_path_segment("https://example.com/single").as_deref(),
            Some("single")
        );
    }

    #[test]
    fn trailing_slash_uses_directory_name() {
        assert_eq!(
            last_path_segment("https://example.com/docs/").as_deref(),
            Some("docs")
        );
        assert_eq!(
            last_path_segment("https://example.com/docs//").as_deref(),
            Some("docs")
        );
    }

    #[test]
    fn root_or_empty() {
        assert_eq!(last_path_segment("https://example.com/"), None);
        assert_eq!(last_path_segment("https://example.com"), None);
        assert_eq!(last_path_segment("https://example.com?page=/a.pdf"), None);
    }

    #[test]
    fn raw_characters_are_kept() {
        assert_eq!(
            last_path_segment("https://example.com/my docs/annual report.pdf").as_deref(),
            Some("annual report.pdf")
        );
        assert_eq!(
            last_path_segment("https://example.com/überblick.pdf").as_deref(),
            Some("überblick.pdf")
        );
        assert_eq!(
            last_path_segment("https://example.com/a%20b.pdf").as_deref(),
            Some("a%20b.pdf")
        );
    }

    #[test]
    fn path_without_scheme() {
        assert_eq!(
            last_path_segment("/relative/only.pdf").as_deref(),
            Some("only.pdf")
        );
    }

    #[test]
    fn with_query_and_fragment() {
        assert_eq!(
            last_path_segment("https://example.com/file.zip?token=abc#top").as_deref(),
            Some("file.zip")
        );
        assert_eq!(
            last_path_segment("https://example.com/dir/#frag/x.pdf").as_deref(),
            Some("dir")
        );
    }
}
