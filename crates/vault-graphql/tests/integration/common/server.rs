//! Test app and request helpers.

use std::sync::Arc;

use axum::body::Body;
use axum::http::{Request, StatusCode};
use axum::Router;
use serde_json::{json, Value};
use tower::ServiceExt;
use vault_graphql::{create_router, AppConfig, AppState, VaultAccess, VaultSchema};

/// Builds app state over `vault` with `config`.
pub fn create_test_state(vault: Arc<dyn VaultAccess>, config: AppConfig) -> Arc<AppState> {
    Arc::new(AppState::new(vault, config))
}

/// Builds the router over `vault` with default configuration.
pub fn create_test_app(vault: Arc<dyn VaultAccess>) -> Router {
    create_router(create_test_state(vault, AppConfig::default()))
}

/// Builds the schema over `vault`.
pub fn create_test_schema(vault: Arc<dyn VaultAccess>) -> VaultSchema {
    create_test_state(vault, AppConfig::default()).schema.clone()
}

/// Runs `query` against `schema`, asserting it produced no GraphQL errors.
pub async fn execute(schema: &VaultSchema, query: &str) -> Value {
    let response = schema.execute(query).await;
    assert!(
        response.errors.is_empty(),
        "unexpected errors: {:?}",
        response.errors
    );
    response.data.into_json().expect("json data")
}

/// POSTs `query` to the router and returns status and JSON body.
pub async fn post_graphql(app: Router, query: &str) -> (StatusCode, Value) {
    let response = app
        .oneshot(
            Request::builder()
                .method("POST")
                .uri("/")
                .header("content-type", "application/json")
                .body(Body::from(json!({ "query": query }).to_string()))
                .expect("request"),
        )
        .await
        .expect("response");

    let status = response.status();
    let bytes = axum::body::to_bytes(response.into_body(), usize::MAX)
        .await
        .expect("body");
    let body = serde_json::from_slice(&bytes).unwrap_or(Value::Null);

    (status, body)
}
