//! Router tests: GraphQL over HTTP, GraphiQL, health probes.

use std::sync::Arc;

use axum::body::Body;
use axum::http::{header, Method, Request, StatusCode};
use serde_json::{json, Value};
use tower::ServiceExt;
use vault_graphql::{create_router, AppConfig};

use super::common::{create_test_app, create_test_state, post_graphql, RecordingVault};

#[tokio::test]
async fn test_post_graphql() {
    let vault = Arc::new(RecordingVault::with_rows(vec![json!({
        "skyflow_id": "id1",
        "name": "Ada"
    })]));
    let app = create_test_app(vault.clone());

    let (status, body) = post_graphql(
        app,
        r#"{ getRecords(table: "persons", ids: ["id1"]) { id fields { name } } }"#,
    )
    .await;

    assert_eq!(status, StatusCode::OK);
    assert_eq!(
        body,
        json!({ "data": { "getRecords": [{ "id": "id1", "fields": { "name": "Ada" } }] } })
    );
    assert_eq!(vault.gets().len(), 1);
}

#[tokio::test]
async fn test_post_graphql_failure_is_null_data() {
    let vault = Arc::new(RecordingVault::new());
    vault.fail_all();
    let app = create_test_app(vault);

    let (status, body) = post_graphql(app, r#"{ detokenize(tokens: ["t"]) { value } }"#).await;

    assert_eq!(status, StatusCode::OK);
    assert_eq!(body["data"]["detokenize"], Value::Null);
    assert!(body.get("errors").is_none());
}

#[tokio::test]
async fn test_graphiql_served_when_enabled() {
    let app = create_test_app(Arc::new(RecordingVault::new()));

    let response = app
        .oneshot(Request::builder().uri("/").body(Body::empty()).unwrap())
        .await
        .unwrap();

    assert_eq!(response.status(), StatusCode::OK);
    let content_type = response.headers()[header::CONTENT_TYPE].to_str().unwrap();
    assert!(content_type.starts_with("text/html"));
}

#[tokio::test]
async fn test_graphiql_disabled() {
    let config = AppConfig {
        graphiql: false,
        ..AppConfig::default()
    };
    let app = create_router(create_test_state(Arc::new(RecordingVault::new()), config));

    let response = app
        .oneshot(Request::builder().uri("/").body(Body::empty()).unwrap())
        .await
        .unwrap();

    assert_eq!(response.status(), StatusCode::METHOD_NOT_ALLOWED);
}

#[tokio::test]
async fn test_health_endpoints() {
    for uri in ["/health", "/health/live", "/health/ready", "/health/version"] {
        let app = create_test_app(Arc::new(RecordingVault::new()));
        let response = app
            .oneshot(Request::builder().uri(uri).body(Body::empty()).unwrap())
            .await
            .unwrap();

        assert_eq!(response.status(), StatusCode::OK, "GET {uri}");
    }
}

#[tokio::test]
async fn test_health_reports_service_name() {
    let config = AppConfig {
        service_name: "test-gateway".into(),
        ..AppConfig::default()
    };
    let app = create_router(create_test_state(Arc::new(RecordingVault::new()), config));

    let response = app
        .oneshot(Request::builder().uri("/health").body(Body::empty()).unwrap())
        .await
        .unwrap();
    let bytes = axum::body::to_bytes(response.into_body(), usize::MAX)
        .await
        .unwrap();
    let body: Value = serde_json::from_slice(&bytes).unwrap();

    assert_eq!(body["status"], "healthy");
    assert_eq!(body["service"], "test-gateway");
}

#[tokio::test]
async fn test_unavailable_vault_is_not_ready() {
    let vault = Arc::new(RecordingVault::new());
    vault.fail_all();

    for uri in ["/health", "/health/ready"] {
        let app = create_test_app(vault.clone());
        let response = app
            .oneshot(Request::builder().uri(uri).body(Body::empty()).unwrap())
            .await
            .unwrap();

        assert_eq!(
            response.status(),
            StatusCode::SERVICE_UNAVAILABLE,
            "GET {uri}"
        );
    }
}

#[tokio::test]
async fn test_request_id_echoed() {
    let app = create_test_app(Arc::new(RecordingVault::new()));

    let response = app
        .oneshot(
            Request::builder()
                .uri("/health/live")
                .header("x-request-id", "req-42")
                .body(Body::empty())
                .unwrap(),
        )
        .await
        .unwrap();

    assert_eq!(response.headers()["x-request-id"], "req-42");
}

#[tokio::test]
async fn test_cors_preflight() {
    let app = create_test_app(Arc::new(RecordingVault::new()));

    let response = app
        .oneshot(
            Request::builder()
                .method(Method::OPTIONS)
                .uri("/")
                .header(header::ORIGIN, "https://studio.example.com")
                .header(header::ACCESS_CONTROL_REQUEST_METHOD, "POST")
                .body(Body::empty())
                .unwrap(),
        )
        .await
        .unwrap();

    assert!(response
        .headers()
        .contains_key(header::ACCESS_CONTROL_ALLOW_ORIGIN));
}
