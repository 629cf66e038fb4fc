use async_trait::async_trait;
use reqwest_middleware::{ClientBuilder, ClientWithMiddleware};
use tracing::{instrument, trace};

use super::{Request, Response, Transport, TransportError};

/// Sends requests over the network with [reqwest].
///
/// Every request gets a span from the [minibus_tracing] middleware.
/// There are no retries, and no timeouts besides the ones configured on the
/// [reqwest::Client] passed to [ReqwestTransport::from_client].
#[derive(Clone)]
pub struct ReqwestTransport {
    client: ClientWithMiddleware,
}

impl ReqwestTransport {
    pub fn new() -> Self {
        Self::from_client(reqwest::Client::new())
    }

    pub fn from_client(client: reqwest::Client) -> Self {
        Self {
            client: ClientBuilder::new(client)
                .with(minibus_tracing::propagate::reqwest::tracing_middleware())
                .build(),
        }
    }
}

impl Default for ReqwestTransport {
    fn default() -> Self {
        Self::new()
    }
}

#[async_trait]
impl Transport for ReqwestTransport {
    #[instrument(skip_all, fields(http.method=%request.method))]
    async fn send(&self, request: Request) -> Result<Response, TransportError> {
        let mut builder = self
            .client
            .request(request.method, request.url)
            .headers(request.headers);
        if let Some(body) = request.body {
            builder = builder.body(body);
        }

        let resp = builder.send().await?;

        let status = resp.status();
        let headers = resp.headers().clone();
        let body = resp.bytes().await.map_err(|e| e.without_url())?;
        trace!(%status, body.len = body.len(), "received response");

        Ok(Response {
            status,
            headers,
            body,
        })
    }
}
