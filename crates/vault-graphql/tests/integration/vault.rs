//! End to end: GraphQL over HTTP through the real client to a mock vault.

use std::sync::Arc;

use axum::body::Body;
use axum::http::{Request, StatusCode};
use serde_json::json;
use tower::ServiceExt;
use vault_sdk::{auth::EnvTokenProvider, VaultClient};
use wiremock::matchers::{body_json, header, method, path, query_param};
use wiremock::{Mock, MockServer, ResponseTemplate};

use super::common::{create_test_app, post_graphql};

const VAULT_ID: &str = "vault123";

fn client_for(server: &MockServer) -> Arc<VaultClient> {
    Arc::new(
        VaultClient::builder()
            .vault_url(server.uri())
            .vault_id(VAULT_ID)
            .bearer_token("test-token")
            .build()
            .unwrap(),
    )
}

#[tokio::test]
async fn test_get_records_through_vault() {
    let server = MockServer::start().await;

    Mock::given(method("GET"))
        .and(path(format!("/v1/vaults/{VAULT_ID}/persons")))
        .and(query_param("skyflow_ids", "id1"))
        .and(query_param("redaction", "PLAIN_TEXT"))
        .and(header("authorization", "Bearer test-token"))
        .respond_with(ResponseTemplate::new(200).set_body_json(json!({
            "records": [{
                "fields": {
                    "skyflow_id": "id1",
                    "name": "Ada",
                    "ssn": "123-45-6789",
                    "email": "ada@example.com"
                }
            }]
        })))
        .expect(1)
        .mount(&server)
        .await;

    let app = create_test_app(client_for(&server));
    let (status, body) = post_graphql(
        app,
        r#"{ getRecords(table: "persons", ids: ["id1"], tokensBool: false) { id table fields { name ssn } } }"#,
    )
    .await;

    assert_eq!(status, StatusCode::OK);
    assert_eq!(
        body["data"]["getRecords"],
        json!([{
            "id": "id1",
            "table": "persons",
            "fields": { "name": "Ada", "ssn": "123-45-6789" }
        }])
    );
}

#[tokio::test]
async fn test_detokenize_through_vault() {
    let server = MockServer::start().await;

    Mock::given(method("POST"))
        .and(path(format!("/v1/vaults/{VAULT_ID}/detokenize")))
        .and(body_json(json!({
            "detokenizationParameters": [{ "token": "tok-1", "redaction": "PLAIN_TEXT" }]
        })))
        .respond_with(ResponseTemplate::new(200).set_body_json(json!({
            "records": [{ "token": "tok-1", "valueType": "STRING", "value": "Ada" }]
        })))
        .expect(1)
        .mount(&server)
        .await;

    let app = create_test_app(client_for(&server));
    let (_, body) = post_graphql(app, r#"{ detokenize(tokens: ["tok-1"]) { token value } }"#).await;

    assert_eq!(
        body["data"]["detokenize"],
        json!([{ "token": "tok-1", "value": "Ada" }])
    );
}

#[tokio::test]
async fn test_get_records_without_ids_reads_nothing() {
    let server = MockServer::start().await;
    let app = create_test_app(client_for(&server));

    let (status, body) = post_graphql(
        app,
        r#"{
            empty: getRecords(table: "persons", ids: []) { id }
            absent: getRecords(table: "persons") { id }
            users: getUsers { fields { ssn } }
        }"#,
    )
    .await;

    assert_eq!(status, StatusCode::OK);
    assert_eq!(
        body["data"],
        json!({ "empty": null, "absent": null, "users": null })
    );
    assert!(server.received_requests().await.unwrap().is_empty());
}

#[tokio::test]
async fn test_vault_error_becomes_null() {
    let server = MockServer::start().await;

    Mock::given(method("GET"))
        .and(path(format!("/v1/vaults/{VAULT_ID}/users")))
        .respond_with(ResponseTemplate::new(500).set_body_json(json!({
            "error": { "grpc_code": 13, "http_code": 500, "message": "internal", "http_status": "Internal Server Error" }
        })))
        .expect(1)
        .mount(&server)
        .await;

    let app = create_test_app(client_for(&server));
    let (status, body) = post_graphql(app, r#"{ getUsers(ids: ["u1"]) { fields { name } } }"#).await;

    assert_eq!(status, StatusCode::OK);
    assert_eq!(body["data"]["getUsers"], serde_json::Value::Null);
}

#[tokio::test]
async fn test_missing_token_env_is_not_ready() {
    let server = MockServer::start().await;
    let client = VaultClient::builder()
        .vault_url(server.uri())
        .vault_id(VAULT_ID)
        .token_provider(EnvTokenProvider::new("VAULT_GRAPHQL_TEST_UNSET_TOKEN"))
        .build()
        .unwrap();

    let response = create_test_app(Arc::new(client))
        .oneshot(
            Request::builder()
                .uri("/health/ready")
                .body(Body::empty())
                .unwrap(),
        )
        .await
        .unwrap();

    assert_eq!(response.status(), StatusCode::SERVICE_UNAVAILABLE);
    assert!(server.received_requests().await.unwrap().is_empty());
}
