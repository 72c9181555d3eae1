//! Resolver behavior against a recording vault.

use std::sync::Arc;

use serde_json::{json, Value};
use vault_sdk::{
    DetokenizeRequest, GetOptions, GetRecordGroup, GetRequest, InsertOptions, RedactionType,
};

use super::common::{create_test_schema, execute, RecordingVault};

fn person() -> Value {
    json!({
        "skyflow_id": "id1",
        "name": "Ada Lovelace",
        "ssn": "123-45-6789",
        "email": "ada@example.com"
    })
}

#[tokio::test]
async fn test_get_records_plain_text() {
    let vault = Arc::new(RecordingVault::with_rows(vec![person()]));
    let schema = create_test_schema(vault.clone());

    let data = execute(
        &schema,
        r#"{ getRecords(table: "persons", ids: ["id1"], tokensBool: false) {
            id table fields { name ssn email }
        } }"#,
    )
    .await;

    assert_eq!(
        data,
        json!({
            "getRecords": [{
                "id": "id1",
                "table": "persons",
                "fields": {
                    "name": "Ada Lovelace",
                    "ssn": "123-45-6789",
                    "email": "ada@example.com"
                }
            }]
        })
    );

    let gets = vault.gets();
    assert_eq!(gets.len(), 1);
    assert_eq!(
        gets[0].0,
        GetRequest {
            records: vec![GetRecordGroup::new("persons")
                .with_ids(vec!["id1".into()])
                .with_redaction(RedactionType::PlainText)],
        }
    );
    assert_eq!(gets[0].1, GetOptions { tokens: false });
}

#[tokio::test]
async fn test_get_records_without_tokens_bool_is_plain_text() {
    let vault = Arc::new(RecordingVault::new());
    let schema = create_test_schema(vault.clone());

    let data = execute(&schema, r#"{ getRecords(table: "persons", ids: ["id1"]) { id } }"#).await;
    assert_eq!(data, json!({ "getRecords": [] }));

    let gets = vault.gets();
    assert_eq!(gets.len(), 1);
    let group = &gets[0].0.records[0];
    assert_eq!(group.ids, Some(vec!["id1".to_string()]));
    assert_eq!(group.redaction, Some(RedactionType::PlainText));
    assert!(!gets[0].1.tokens);
}

#[tokio::test]
async fn test_get_records_with_tokens_sends_no_redaction() {
    let vault = Arc::new(RecordingVault::new());
    let schema = create_test_schema(vault.clone());

    execute(
        &schema,
        r#"{ getRecords(table: "persons", ids: ["id1", "id2"], tokensBool: true) { id } }"#,
    )
    .await;

    let gets = vault.gets();
    assert_eq!(gets.len(), 1);
    let group = &gets[0].0.records[0];
    assert_eq!(group.ids, Some(vec!["id1".to_string(), "id2".to_string()]));
    assert_eq!(group.redaction, None);
    assert!(gets[0].1.tokens);
}

#[tokio::test]
async fn test_missing_ids_yield_null() {
    let vault = Arc::new(RecordingVault::with_rows(vec![person()]));
    let schema = create_test_schema(vault.clone());

    let data = execute(
        &schema,
        r#"{
            empty: getRecords(table: "persons", ids: []) { id }
            absent: getRecords(table: "persons") { id }
            users: getUsers(tokensBool: true) { fields { ssn } }
        }"#,
    )
    .await;

    assert_eq!(
        data,
        json!({ "empty": null, "absent": null, "users": null })
    );
}

#[tokio::test]
async fn test_get_users_reads_users_table() {
    let vault = Arc::new(RecordingVault::with_rows(vec![person()]));
    let schema = create_test_schema(vault.clone());

    let data = execute(
        &schema,
        r#"{ getUsers(ids: ["id1"]) { fields { name email } } }"#,
    )
    .await;

    assert_eq!(
        data,
        json!({
            "getUsers": [{
                "fields": { "name": "Ada Lovelace", "email": "ada@example.com" }
            }]
        })
    );

    let gets = vault.gets();
    assert_eq!(gets.len(), 1);
    assert_eq!(gets[0].0.records[0].table, "users");
    assert_eq!(
        gets[0].0.records[0].redaction,
        Some(RedactionType::PlainText)
    );
}

#[tokio::test]
async fn test_detokenize_maps_each_token() {
    let vault = Arc::new(RecordingVault::new());
    let schema = create_test_schema(vault.clone());

    let data = execute(
        &schema,
        r#"{ detokenize(tokens: ["tok-a", "tok-b"]) { token value tokenGroup } }"#,
    )
    .await;

    assert_eq!(
        data,
        json!({
            "detokenize": [
                { "token": "tok-a", "value": "value-of-tok-a", "tokenGroup": null },
                { "token": "tok-b", "value": "value-of-tok-b", "tokenGroup": null }
            ]
        })
    );
    let calls = vault.detokenizes();
    assert_eq!(calls, vec![DetokenizeRequest::from_tokens(["tok-a", "tok-b"])]);
    assert!(calls[0]
        .records
        .iter()
        .all(|r| r.redaction == Some(RedactionType::PlainText)));
}

#[tokio::test]
async fn test_detokenize_empty_list_still_calls_vault() {
    let vault = Arc::new(RecordingVault::new());
    let schema = create_test_schema(vault.clone());

    let data = execute(&schema, "{ detokenize(tokens: []) { value } }").await;
    assert_eq!(data, json!({ "detokenize": [] }));

    let calls = vault.detokenizes();
    assert_eq!(calls.len(), 1);
    assert!(calls[0].records.is_empty());
}

#[tokio::test]
async fn test_detokenize_absent_tokens_is_empty() {
    let vault = Arc::new(RecordingVault::new());
    let schema = create_test_schema(vault.clone());

    execute(&schema, "{ detokenize { value } }").await;

    let calls = vault.detokenizes();
    assert_eq!(calls.len(), 1);
    assert!(calls[0].records.is_empty());
}

#[tokio::test]
async fn test_insert_record_returns_tokens() {
    let vault = Arc::new(RecordingVault::new());
    let schema = create_test_schema(vault.clone());

    let data = execute(
        &schema,
        r#"mutation { insertRecord(name: "persons", fields: "{\"name\":\"Ada\",\"email\":\"ada@example.com\"}") {
            id table fields { name ssn email }
        } }"#,
    )
    .await;

    assert_eq!(
        data,
        json!({
            "insertRecord": {
                "id": "new-1",
                "table": "persons",
                "fields": { "name": "tok-name", "ssn": null, "email": "tok-email" }
            }
        })
    );

    let inserts = vault.inserts();
    assert_eq!(inserts.len(), 1);
    assert_eq!(inserts[0].0.records[0].table, "persons");
    assert_eq!(inserts[0].0.records[0].fields["name"], json!("Ada"));
    assert_eq!(inserts[0].1, InsertOptions { tokens: true });
}

#[tokio::test]
async fn test_insert_record_rejects_non_object_fields() {
    let vault = Arc::new(RecordingVault::new());
    let schema = create_test_schema(vault.clone());

    let data = execute(
        &schema,
        r#"mutation { insertRecord(name: "persons", fields: "[1, 2]") { id } }"#,
    )
    .await;

    assert_eq!(data, json!({ "insertRecord": null }));
    assert!(vault.inserts().is_empty());
}

#[tokio::test]
async fn test_vault_failure_yields_null_not_error() {
    let vault = Arc::new(RecordingVault::with_rows(vec![person()]));
    vault.fail_all();
    let schema = create_test_schema(vault.clone());

    let data = execute(
        &schema,
        r#"{
            getRecords(table: "persons", ids: ["id1"]) { id }
            getUsers(ids: ["id1"]) { fields { name } }
            detokenize(tokens: ["tok-a"]) { value }
        }"#,
    )
    .await;

    assert_eq!(
        data,
        json!({ "getRecords": null, "getUsers": null, "detokenize": null })
    );

    let data = execute(
        &schema,
        r#"mutation { insertRecord(name: "persons", fields: "{\"name\":\"Ada\"}") { id } }"#,
    )
    .await;
    assert_eq!(data, json!({ "insertRecord": null }));

    assert_eq!(vault.gets().len(), 2);
    assert_eq!(vault.detokenizes().len(), 1);
    assert_eq!(vault.inserts().len(), 1);
}

#[tokio::test]
async fn test_schema_shape() {
    let schema = create_test_schema(Arc::new(RecordingVault::new()));
    let sdl = schema.sdl();

    assert!(sdl.contains("getRecords(table: String!, ids: [ID!], tokensBool: Boolean): [Record]"));
    assert!(sdl.contains("detokenize(tokens: [String!]): [Token]"));
    assert!(sdl.contains("getUsers(ids: [ID!], tokensBool: Boolean): [User]"));
    assert!(sdl.contains("insertRecord(name: String!, fields: String!): Record"));
    assert!(sdl.contains("tokenGroup: String"));
}
