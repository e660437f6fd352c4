//! Mock HTTP Transport
//!
//! Fabricates responses from a test-supplied generator instead of performing
//! network I/O. The generator sees the method, url, and the request as built
//! (headers and body included) and returns the response payload; the
//! transport stamps the JSON media type on the result and nothing else. A
//! generator failure propagates to the caller of `execute` untranslated.

use std::io;
use std::sync::Arc;

use super::{HttpRequest, HttpResponse, HttpTransport, PendingRequest, TransportError,
            JSON_MEDIA_TYPE};

type ContentGenerator = dyn Fn(&str, &str, &HttpRequest) -> io::Result<Vec<u8>> + Send + Sync;

/// Deterministic transport backed by a content generator
pub struct MockHttpTransport {
    generator: Arc<ContentGenerator>,
}

impl MockHttpTransport {
    /// Create a mock transport delegating payload fabrication to `generator`
    pub fn new<F>(generator: F) -> Self
    where
        F: Fn(&str, &str, &HttpRequest) -> io::Result<Vec<u8>> + Send + Sync + 'static,
    {
        Self {
            generator: Arc::new(generator),
        }
    }
}

impl std::fmt::Debug for MockHttpTransport {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.debug_struct("MockHttpTransport").finish_non_exhaustive()
    }
}

impl HttpTransport for MockHttpTransport {
    fn build_request(&self, method: &str, url: &str) -> Result<PendingRequest, TransportError> {
        let generator = Arc::clone(&self.generator);
        Ok(PendingRequest::new(
            HttpRequest::new(method, url),
            Box::new(move |request| {
                let body = generator(&request.method, &request.url, &request)?;
                Ok(HttpResponse {
                    status: 200,
                    content_type: JSON_MEDIA_TYPE.to_string(),
                    body,
                })
            }),
        ))
    }
}
