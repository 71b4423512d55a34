//! libcurl-backed GET with redirect following and timeouts.

use std::time::Duration;

use super::{HttpResponse, Transport, TransportError};
use crate::config::PdfgrabConfig;

const MAX_REDIRECTIONS: u32 = 10;

/// Blocking curl transport. One `Easy` handle per request; no custom headers.
#[derive(Debug, Clone, Copy)]
pub struct CurlTransport {
    request_timeout: Duration,
    connect_timeout: Duration,
}

impl CurlTransport {
    pub fn new(request_timeout: Duration, connect_timeout: Duration) -> Self {
        Self {
            request_timeout,
            connect_timeout,
        }
    }

    pub fn from_config(cfg: &PdfgrabConfig) -> Self {
        Self::new(cfg.request_timeout(), cfg.connect_timeout())
    }

    pub fn request_timeout(&self) -> Duration {
        self.request_timeout
    }
}

impl Transport for CurlTransport {
    fn get(&self, url: &str) -> Result<HttpResponse, TransportError> {
        let mut body = Vec::new();

        let mut easy = curl::easy::Easy::new();
        easy.url(url)?;
        easy.get(true)?;
        easy.follow_location(true)?;
        easy.max_redirections(MAX_REDIRECTIONS)?;
        easy.connect_timeout(self.connect_timeout)?;
        easy.timeout(self.request_timeout)?;

        {
            let mut transfer = easy.transfer();
            transfer.write_function(|data| {
                body.extend_from_slice(data);
                Ok(data.len())
            })?;
            transfer.perform()?;
        }

        let status = easy.response_code()?;
        let content_type = easy.content_type()?.map(str::to_string);
        tracing::debug!(
            url,
            status,
            content_type = content_type.as_deref().unwrap_or("-"),
            bytes = body.len(),
            "GET finished"
        );

        Ok(HttpResponse {
            status,
            content_type,
            body,
        })
    }
}
