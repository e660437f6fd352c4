//! HTTP Transport Layer
//!
//! Abstracts the HTTP round-trip for components that talk to GitHub or Gerrit,
//! so tests can substitute a deterministic transport instead of the network.
//! A request moves through two states: pending (built, nothing sent) and
//! executed; `PendingRequest::execute` consumes the request, so a request can
//! only be executed once.

mod mock;

pub use mock::MockHttpTransport;

use std::collections::BTreeMap;
use std::io;

/// Content type stamped on every fabricated response
pub const JSON_MEDIA_TYPE: &str = "application/json; charset=UTF-8";

/// Transport errors
#[derive(Debug, thiserror::Error)]
pub enum TransportError {
    #[error("I/O error: {0}")]
    Io(#[from] io::Error),

    #[error("Protocol error: {0}")]
    Protocol(String),
}

/// HTTP transport seam
pub trait HttpTransport: Send + Sync + std::fmt::Debug {
    /// Build a pending request bound to a method/url pair. No I/O happens
    /// until the returned request is executed.
    fn build_request(&self, method: &str, url: &str) -> Result<PendingRequest, TransportError>;
}

/// An HTTP request that has not been sent yet
#[derive(Debug, Clone)]
pub struct HttpRequest {
    pub method: String,
    pub url: String,
    pub headers: BTreeMap<String, String>,
    pub body: Option<Vec<u8>>,
}

impl HttpRequest {
    pub fn new(method: &str, url: &str) -> Self {
        Self {
            method: method.to_string(),
            url: url.to_string(),
            headers: BTreeMap::new(),
            body: None,
        }
    }
}

/// A fabricated or received HTTP response
#[derive(Debug, Clone)]
pub struct HttpResponse {
    pub status: u16,
    pub content_type: String,
    pub body: Vec<u8>,
}

impl HttpResponse {
    /// Response body decoded as UTF-8
    pub fn body_utf8(&self) -> Result<&str, TransportError> {
        std::str::from_utf8(&self.body)
            .map_err(|e| TransportError::Protocol(format!("response body is not UTF-8: {e}")))
    }
}

type Responder = Box<dyn FnOnce(HttpRequest) -> Result<HttpResponse, TransportError> + Send>;

/// A request in the pending state
///
/// Headers and body may still be attached; `execute` consumes the request and
/// produces the response.
pub struct PendingRequest {
    request: HttpRequest,
    responder: Responder,
}

impl PendingRequest {
    pub fn new(request: HttpRequest, responder: Responder) -> Self {
        Self { request, responder }
    }

    /// Attach a header
    pub fn header(mut self, name: &str, value: &str) -> Self {
        self.request
            .headers
            .insert(name.to_string(), value.to_string());
        self
    }

    /// Attach a request body
    pub fn body(mut self, body: Vec<u8>) -> Self {
        self.request.body = Some(body);
        self
    }

    /// The request as built so far
    pub fn request(&self) -> &HttpRequest {
        &self.request
    }

    /// Execute the request, transitioning it to the executed state
    pub fn execute(self) -> Result<HttpResponse, TransportError> {
        (self.responder)(self.request)
    }
}
