//! Acceptance checks on a finished GET.

use super::DownloadError;
use crate::fetch::HttpResponse;

/// Media type a response must carry to be saved.
pub const PDF_CONTENT_TYPE: &str = "application/pdf";

/// Accepts `200` responses whose `Content-Type` contains `application/pdf`
/// (case-insensitive, parameters allowed) and whose body is non-empty.
/// Returns the body on success; otherwise the body is dropped.
pub fn check_response(response: HttpResponse) -> Result<Vec<u8>, DownloadError> {
    if response.status != 200 {
        return Err(DownloadError::HttpStatus(response.status));
    }

    let content_type = response.content_type.unwrap_or_default();
    if !content_type.to_ascii_lowercase().contains(PDF_CONTENT_TYPE) {
        return Err(DownloadError::ContentType { content_type });
    }

    if response.body.is_empty() {
        return Err(DownloadError::EmptyBody);
    }
    Ok(response.body)
}
