use axum::{
    extract::State,
    http::{HeaderMap, Method, StatusCode, Uri},
    response::IntoResponse,
    Router,
};
use bytes::Bytes;
use url::Url;

use crate::{
    blockservice::{BlockClient, BlockService},
    transport::{MemoryTransport, Request, Transport},
    BlockClientConfig,
};

/// How a [BlockClient] reaches the [MemoryTransport] in tests.
pub enum Backend {
    /// Directly, without any networking.
    Memory,
    /// Through [crate::transport::ReqwestTransport] and a HTTP server on
    /// localhost, forwarding to the [MemoryTransport].
    Http,
}

/// Constructs a [BlockClient] for `backend`, backed by `memory`.
/// For [Backend::Http], the endpoint in `config` is replaced with the one
/// of the spawned server.
pub async fn make_block_client(
    backend: Backend,
    memory: MemoryTransport,
    config: BlockClientConfig,
) -> Box<dyn BlockService> {
    match backend {
        Backend::Memory => Box::new(BlockClient::new(config, memory).expect("must construct")),
        Backend::Http => {
            let endpoint = spawn_block_server(memory).await;
            Box::new(
                BlockClient::from_config(BlockClientConfig { endpoint, ..config })
                    .expect("must construct"),
            )
        }
    }
}

/// Spins up a HTTP server on a random port, passing every request to
/// `memory`. Returns its url.
pub async fn spawn_block_server(memory: MemoryTransport) -> Url {
    let listener = tokio::net::TcpListener::bind("127.0.0.1:0")
        .await
        .expect("must bind");
    let addr = listener.local_addr().expect("must have addr");

    let app = Router::new().fallback(forward).with_state(memory);
    tokio::spawn(async move { axum::serve(listener, app).await });

    Url::parse(&format!("http://{}", addr)).expect("must parse")
}

/// Returns the url of a port nobody listens on.
pub async fn closed_endpoint() -> Url {
    let listener = tokio::net::TcpListener::bind("127.0.0.1:0")
        .await
        .expect("must bind");
    let addr = listener.local_addr().expect("must have addr");
    drop(listener);

    Url::parse(&format!("http://{}", addr)).expect("must parse")
}

async fn forward(
    State(memory): State<MemoryTransport>,
    method: Method,
    uri: Uri,
    headers: HeaderMap,
    body: Bytes,
) -> axum::response::Response {
    let url = Url::parse("http://localhost")
        .and_then(|base| base.join(&uri.to_string()))
        .expect("must parse");

    let mut request = Request::new(method, url).with_headers(headers);
    if !body.is_empty() {
        request = request.with_body(body);
    }

    match memory.send(request).await {
        Ok(resp) => (resp.status, resp.headers, resp.body).into_response(),
        Err(e) => (StatusCode::INTERNAL_SERVER_ERROR, e.to_string()).into_response(),
    }
}
