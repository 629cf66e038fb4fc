use reqwest_tracing::{SpanBackendWithUrl, TracingMiddleware};

/// Returns the middleware every outgoing block request is wrapped in.
/// Each request gets its own span, with the target url recorded into
/// `http.url` next to the method and the response status.
pub fn tracing_middleware() -> TracingMiddleware<SpanBackendWithUrl> {
    TracingMiddleware::<SpanBackendWithUrl>::new()
}
