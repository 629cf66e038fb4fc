use std::{collections::HashMap, sync::Arc};

use async_trait::async_trait;
use bytes::Bytes;
use http::{HeaderName, HeaderValue, Method, StatusCode};
use parking_lot::{Mutex, RwLock};
use tracing::{instrument, warn};

use super::{Request, Response, Transport, TransportError};
use crate::key::{multihash_key, sha256_multihash};

/// An in-process fake of the block storage service.
///
/// - `POST /` stores the body under the key derived from its sha2-256
///   multihash, and responds with that key.
/// - `GET /{key}` responds with the block, `HEAD /{key}` with an empty body,
///   both with 404 if there's no such block.
///
/// Every request received is recorded, bodies included, see
/// [MemoryTransport::requests]. The log grows until drained with
/// [MemoryTransport::take_requests].
/// Clones share the stored blocks and the recorded requests.
#[derive(Clone, Default)]
pub struct MemoryTransport {
    blocks: Arc<RwLock<HashMap<String, Bytes>>>,
    requests: Arc<Mutex<Vec<Request>>>,

    required_header: Option<(HeaderName, HeaderValue)>,
    status: Option<StatusCode>,
}

impl MemoryTransport {
    /// Answers every request missing this header (or carrying a different
    /// value) with 401.
    pub fn with_required_header(mut self, name: HeaderName, value: HeaderValue) -> Self {
        self.required_header = Some((name, value));
        self
    }

    /// Answers every request with `status`, regardless of what's stored.
    pub fn with_status(mut self, status: StatusCode) -> Self {
        self.status = Some(status);
        self
    }

    /// Returns all requests received so far, in order.
    pub fn requests(&self) -> Vec<Request> {
        self.requests.lock().clone()
    }

    /// Returns all requests received so far, in order, and clears the log.
    pub fn take_requests(&self) -> Vec<Request> {
        std::mem::take(&mut *self.requests.lock())
    }

    /// Returns the number of blocks stored.
    pub fn len(&self) -> usize {
        self.blocks.read().len()
    }

    pub fn is_empty(&self) -> bool {
        self.blocks.read().is_empty()
    }

    /// Stores a block without going through a request, returning its key.
    pub fn insert(&self, data: Bytes) -> Result<String, TransportError> {
        let key = multihash_key(&sha256_multihash(&data)?);
        self.blocks.write().insert(key.clone(), data);
        Ok(key)
    }

    fn authorized(&self, request: &Request) -> bool {
        match &self.required_header {
            Some((name, value)) => request.headers.get(name) == Some(value),
            None => true,
        }
    }
}

#[async_trait]
impl Transport for MemoryTransport {
    #[instrument(skip_all, fields(http.method=%request.method, http.url=%request.url))]
    async fn send(&self, request: Request) -> Result<Response, TransportError> {
        self.requests.lock().push(request.clone());

        if let Some(status) = self.status {
            return Ok(Response::new(status));
        }

        if !self.authorized(&request) {
            warn!("rejecting unauthorized request");
            return Ok(Response::new(StatusCode::UNAUTHORIZED)
                .with_body("missing or invalid credentials"));
        }

        let path = request.url.path();
        if path == "/" {
            if request.method != Method::POST {
                return Ok(Response::new(StatusCode::METHOD_NOT_ALLOWED));
            }
            let key = self.insert(request.body.unwrap_or_default())?;
            return Ok(Response::new(StatusCode::OK).with_body(key));
        }

        let key = path.trim_start_matches('/');
        let Some(data) = self.blocks.read().get(key).cloned() else {
            return Ok(Response::new(StatusCode::NOT_FOUND));
        };

        if request.method == Method::GET {
            Ok(Response::new(StatusCode::OK).with_body(data))
        } else if request.method == Method::HEAD {
            Ok(Response::new(StatusCode::OK))
        } else {
            Ok(Response::new(StatusCode::METHOD_NOT_ALLOWED))
        }
    }
}
