//! Syntactic request-URI check run before any network call.

use url::Url;

/// Checks that `candidate` parses as an absolute URI. No scheme, host or
/// reachability checks beyond what parsing implies.
///
/// The parsed form is what goes on the wire: characters such as spaces come
/// back percent-encoded.
pub fn validate_request_uri(candidate: &str) -> Result<Url, url::ParseError> {
    Url::parse(candidate)
}
