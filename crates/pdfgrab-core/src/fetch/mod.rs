//! HTTP GET transport.
//!
//! The downloader only depends on the [`Transport`] trait; [`CurlTransport`]
//! is the libcurl-backed implementation used by the CLI.

mod curl_transport;

pub use curl_transport::CurlTransport;

use thiserror::Error;

/// Final response of a GET after redirects have been followed.
#[derive(Debug, Clone, PartialEq, Eq, Default)]
pub struct HttpResponse {
    pub status: u32,
    /// `Content-Type` of the final response, if the server sent one.
    pub content_type: Option<String>,
    pub body: Vec<u8>,
}

/// The request could not be completed (DNS, connect, TLS, timeout, ...).
#[derive(Debug, Error)]
pub enum TransportError {
    #[error("{0}")]
    Curl(#[from] curl::Error),
    /// Failure reported by a non-curl transport.
    #[error("{0}")]
    Connection(String),
}

impl TransportError {
    pub fn is_timeout(&self) -> bool {
        match self {
            TransportError::Curl(e) => e.is_operation_timedout(),
            TransportError::Connection(_) => false,
        }
    }
}

/// Performs a single blocking GET and buffers the whole body.
pub trait Transport {
    fn get(&self, url: &str) -> Result<HttpResponse, TransportError>;
}

impl<T: Transport + ?Sized> Transport for &T {
    fn get(&self, url: &str) -> Result<HttpResponse, TransportError> {
        (**self).get(url)
    }
}
