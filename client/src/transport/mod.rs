//! The HTTP capability a [crate::blockservice::BlockClient] sends its
//! requests through.
//!
//! [ReqwestTransport] talks to a real service, [MemoryTransport] fakes one
//! in-process.

use async_trait::async_trait;
use bytes::Bytes;
use http::{HeaderMap, Method, StatusCode};
use url::Url;

mod memory;
mod remote;

pub use self::memory::MemoryTransport;
pub use self::remote::ReqwestTransport;

/// Any failure to get a [Response] at all.
pub type TransportError = Box<dyn std::error::Error + Send + Sync + 'static>;

#[derive(Debug, Clone)]
pub struct Request {
    pub method: Method,
    pub url: Url,
    pub headers: HeaderMap,
    pub body: Option<Bytes>,
}

impl Request {
    pub fn new(method: Method, url: Url) -> Self {
        Self {
            method,
            url,
            headers: HeaderMap::new(),
            body: None,
        }
    }

    pub fn with_headers(mut self, headers: HeaderMap) -> Self {
        self.headers = headers;
        self
    }

    pub fn with_body(mut self, body: Bytes) -> Self {
        self.body = Some(body);
        self
    }
}

/// A response, with the body fully read.
#[derive(Debug, Clone)]
pub struct Response {
    pub status: StatusCode,
    pub headers: HeaderMap,
    pub body: Bytes,
}

impl Response {
    pub fn new(status: StatusCode) -> Self {
        Self {
            status,
            headers: HeaderMap::new(),
            body: Bytes::new(),
        }
    }

    pub fn with_body(mut self, body: impl Into<Bytes>) -> Self {
        self.body = body.into();
        self
    }
}

/// Sends a single request and returns its response.
/// Any status code is a successful send, interpreting it is up to the caller.
#[async_trait]
pub trait Transport: Send + Sync {
    async fn send(&self, request: Request) -> Result<Response, TransportError>;
}

#[async_trait]
impl<A> Transport for A
where
    A: AsRef<dyn Transport> + Send + Sync,
{
    async fn send(&self, request: Request) -> Result<Response, TransportError> {
        self.as_ref().send(request).await
    }
}
