use reqwest::StatusCode;
use reqwest::blocking::{Client as HttpClient, Request};

/// Failure to complete a round trip (connect, TLS, timeout, body read).
pub type TransportError = Box<dyn std::error::Error + Send + Sync>;

/// A fully read HTTP response.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct HttpResponse {
    pub status: StatusCode,
    pub body: Vec<u8>,
}

impl HttpResponse {
    pub fn new(status: StatusCode, body: impl Into<Vec<u8>>) -> Self {
        Self {
            status,
            body: body.into(),
        }
    }
}

/// Performs one HTTP round trip.
///
/// The [`Client`](crate::Client) holds its transport behind an `Arc` and may be
/// shared between threads, so implementations must be safe for concurrent use.
/// Implement this to route requests through a proxy layer or to return canned
/// responses in tests.
pub trait Transport: Send + Sync {
    fn send(&self, request: Request) -> Result<HttpResponse, TransportError>;
}

impl Transport for HttpClient {
    fn send(&self, request: Request) -> Result<HttpResponse, TransportError> {
        let response = self.execute(request)?;
        let status = response.status();
        let body = response.bytes()?.to_vec();
        Ok(HttpResponse { status, body })
    }
}
