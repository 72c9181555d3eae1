//! GraphQL object types.

use async_graphql::{SimpleObject, ID};
use vault_sdk::models::field_text;
use vault_sdk::{DetokenizedRecord, FieldMap, InsertedRecord, RecordResponse};

/// A vault record.
#[derive(Debug, Clone, PartialEq, Eq, SimpleObject)]
pub struct Record {
    /// Vault-assigned identifier.
    pub id: Option<ID>,
    /// Table the record belongs to.
    pub table: String,
    /// Column values.
    pub fields: Fields,
}

/// The result of resolving one token.
#[derive(Debug, Clone, PartialEq, Eq, SimpleObject)]
pub struct Token {
    /// The token that was resolved.
    pub token: Option<String>,
    /// Original value.
    pub value: String,
    /// Token group of the token.
    pub token_group: Option<String>,
}

/// Columns exposed for every table.
#[derive(Debug, Clone, Default, PartialEq, Eq, SimpleObject)]
pub struct Fields {
    /// Name column.
    pub name: Option<String>,
    /// Social security number column.
    pub ssn: Option<String>,
    /// Email column.
    pub email: Option<String>,
}

/// A record of the `users` table.
#[derive(Debug, Clone, PartialEq, Eq, SimpleObject)]
pub struct User {
    /// Column values.
    pub fields: Fields,
}

impl Fields {
    /// Picks the exposed columns out of a vault field map.
    ///
    /// Non-string values are rendered as JSON text; `null` becomes absent.
    pub fn from_map(fields: &FieldMap) -> Self {
        Self {
            name: field_text(fields, "name"),
            ssn: field_text(fields, "ssn"),
            email: field_text(fields, "email"),
        }
    }
}

impl From<RecordResponse> for Record {
    fn from(record: RecordResponse) -> Self {
        Self {
            id: record.id().map(|id| ID(id.to_string())),
            fields: Fields::from_map(&record.fields),
            table: record.table,
        }
    }
}

impl From<RecordResponse> for User {
    fn from(record: RecordResponse) -> Self {
        Self {
            fields: Fields::from_map(&record.fields),
        }
    }
}

impl From<InsertedRecord> for Record {
    fn from(record: InsertedRecord) -> Self {
        Self {
            id: Some(ID(record.id)),
            fields: record
                .tokens
                .as_ref()
                .map(Fields::from_map)
                .unwrap_or_default(),
            table: record.table,
        }
    }
}

impl From<DetokenizedRecord> for Token {
    fn from(record: DetokenizedRecord) -> Self {
        Self {
            token: record.token,
            value: record.value,
            token_group: record.token_group,
        }
    }
}
