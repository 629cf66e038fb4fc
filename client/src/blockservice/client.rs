use std::sync::Arc;

use async_trait::async_trait;
use bytes::Bytes;
use cid::Cid;
use http::{HeaderMap, Method, StatusCode};
use tracing::{debug, instrument, warn};
use url::Url;

use super::BlockService;
use crate::{
    key::{derive_block_url, derive_root_url},
    transport::{ReqwestTransport, Request, Response, Transport},
    BlockClientConfig, Error, Operation,
};

/// A [BlockService] backed by a remote HTTP block storage service.
///
/// | Operation | Request               | Result                                   |
/// |-----------|-----------------------|------------------------------------------|
/// | get       | `GET /{key}`          | 2xx: body, 404: `None`, else error        |
/// | has       | `HEAD /{key}`         | `true` on 2xx, `false` otherwise          |
/// | put       | `POST /`, body: block | 2xx: ok, else error with the body text   |
///
/// `{key}` is the base58btc encoded multihash of the CID, see [crate::key].
///
/// `has` only fails if the request couldn't be sent at all, any status
/// other than 2xx (including server errors) is reported as `false`. `get`
/// on the other hand fails on everything but 2xx and 404.
///
/// `put` does not put the CID into the URL. The service derives the
/// identifier from the uploaded bytes, and nothing here checks it matches
/// `cid`.
///
/// Cloning is cheap, clones share the transport.
pub struct BlockClient<T> {
    endpoint: Url,
    headers: HeaderMap,
    transport: Arc<T>,
}

impl<T> Clone for BlockClient<T> {
    fn clone(&self) -> Self {
        Self {
            endpoint: self.endpoint.clone(),
            headers: self.headers.clone(),
            transport: self.transport.clone(),
        }
    }
}

impl<T: Transport> BlockClient<T> {
    /// Constructs a client sending requests through `transport`.
    /// Fails if the config has an unusable endpoint or invalid headers.
    pub fn new(config: BlockClientConfig, transport: T) -> Result<Self, Error> {
        config.validate()?;
        let headers = config.header_map()?;

        Ok(Self {
            endpoint: config.endpoint,
            headers,
            transport: Arc::new(transport),
        })
    }

    pub fn endpoint(&self) -> &Url {
        &self.endpoint
    }

    pub fn transport(&self) -> &T {
        &self.transport
    }

    async fn send(&self, request: Request) -> Result<Response, Error> {
        self.transport
            .send(request.with_headers(self.headers.clone()))
            .await
            .map_err(|e| {
                warn!(err = %e, "unable to send request");
                Error::Transport(e)
            })
    }
}

impl BlockClient<ReqwestTransport> {
    /// Constructs a client talking to the configured endpoint over the
    /// network.
    pub fn from_config(config: BlockClientConfig) -> Result<Self, Error> {
        Self::new(config, ReqwestTransport::default())
    }
}

#[async_trait]
impl<T: Transport> BlockService for BlockClient<T> {
    #[instrument(skip_all, err, fields(block.cid=%cid))]
    async fn get(&self, cid: &Cid) -> Result<Option<Bytes>, Error> {
        let url = derive_block_url(&self.endpoint, cid)?;
        debug!(url = %url, "constructed block url");

        let resp = self.send(Request::new(Method::GET, url)).await?;

        if resp.status == StatusCode::NOT_FOUND {
            return Ok(None);
        }

        if !resp.status.is_success() {
            return Err(Error::Remote {
                op: Operation::Get,
                cid: *cid,
                status: resp.status,
                body: None,
            });
        }

        Ok(Some(resp.body))
    }

    #[instrument(skip_all, ret, err, fields(block.cid=%cid))]
    async fn has(&self, cid: &Cid) -> Result<bool, Error> {
        let url = derive_block_url(&self.endpoint, cid)?;
        debug!(url = %url, "constructed block url");

        let resp = self.send(Request::new(Method::HEAD, url)).await?;

        Ok(resp.status.is_success())
    }

    #[instrument(skip_all, err, fields(block.cid=%cid, block.len=data.len()))]
    async fn put(&self, cid: &Cid, data: Bytes) -> Result<(), Error> {
        let url = derive_root_url(&self.endpoint)?;

        let resp = self
            .send(Request::new(Method::POST, url).with_body(data))
            .await?;

        if !resp.status.is_success() {
            let body = String::from_utf8_lossy(&resp.body).into_owned();
            warn!(status = %resp.status, body = %body, "block rejected");

            return Err(Error::Remote {
                op: Operation::Put,
                cid: *cid,
                status: resp.status,
                body: Some(body),
            });
        }

        Ok(())
    }
}
