//! CORS middleware configuration.

use std::time::Duration;

use axum::http::{header, HeaderName, HeaderValue, Method};
use tower_http::cors::{Any, CorsLayer};

const ALLOWED_METHODS: [Method; 3] = [Method::GET, Method::POST, Method::OPTIONS];

fn allowed_headers() -> [HeaderName; 4] {
    [
        header::CONTENT_TYPE,
        header::ACCEPT,
        header::ORIGIN,
        HeaderName::from_static("x-request-id"),
    ]
}

/// Builds the CORS layer for `origins`; `*` anywhere in the list allows any.
pub fn cors_layer_for(origins: &[String]) -> CorsLayer {
    if origins.iter().any(|o| o == "*") {
        cors_layer()
    } else {
        cors_layer_with_origins(origins)
    }
}

/// Creates a CORS layer allowing any origin.
pub fn cors_layer() -> CorsLayer {
    CorsLayer::new()
        .allow_methods(ALLOWED_METHODS)
        .allow_headers(allowed_headers())
        .allow_origin(Any)
        .max_age(Duration::from_secs(3600))
}

/// Creates a CORS layer with specific allowed origins.
pub fn cors_layer_with_origins(origins: &[String]) -> CorsLayer {
    let origins: Vec<HeaderValue> = origins.iter().filter_map(|o| o.parse().ok()).collect();

    CorsLayer::new()
        .allow_methods(ALLOWED_METHODS)
        .allow_headers(allowed_headers())
        .allow_origin(origins)
        .max_age(Duration::from_secs(3600))
}
