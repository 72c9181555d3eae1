//! Request logging middleware.

use std::time::Instant;

use axum::{
    extract::Request,
    http::HeaderValue,
    middleware::Next,
    response::Response,
};
use tracing::{info, info_span, warn, Instrument};
use uuid::Uuid;

/// Header carrying the request ID.
pub const REQUEST_ID_HEADER: &str = "x-request-id";

/// Logs each request inside a span keyed by its request ID and echoes the
/// ID on the response.
pub async fn logging_layer(req: Request, next: Next) -> Response {
    let request_id = extract_or_generate_request_id(&req);
    let method = req.method().to_string();
    let path = req.uri().path().to_string();

    let user_agent = req
        .headers()
        .get("User-Agent")
        .and_then(|v| v.to_str().ok())
        .map(String::from);

    let span = info_span!(
        "request",
        request_id = %request_id,
        method = %method,
        path = %path,
    );

    async move {
        let start = Instant::now();
        info!(user_agent = ?user_agent, "Request started");

        let mut response = next.run(req).await;

        let duration_ms = u64::try_from(start.elapsed().as_millis()).unwrap_or(u64::MAX);
        let status = response.status().as_u16();

        if status >= 500 {
            warn!(status, duration_ms, "Request completed with server error");
        } else if status >= 400 {
            info!(status, duration_ms, "Request completed with client error");
        } else {
            info!(status, duration_ms, "Request completed");
        }

        if let Ok(value) = HeaderValue::from_str(&request_id) {
            response.headers_mut().insert(REQUEST_ID_HEADER, value);
        }

        response
    }
    .instrument(span)
    .await
}

/// Extracts or generates a request ID.
fn extract_or_generate_request_id(req: &Request) -> String {
    req.headers()
        .get(REQUEST_ID_HEADER)
        .and_then(|v| v.to_str().ok())
        .map(String::from)
        .unwrap_or_else(|| Uuid::new_v4().to_string())
}
