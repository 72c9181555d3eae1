//! Record retrieval and insertion models.

use serde::{Deserialize, Serialize};
use serde_json::Value;

use super::common::{field_text, FieldMap, RedactionType, ID_FIELD};

/// One `(table, ids, redaction)` entry of a bulk get.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct GetRecordGroup {
    /// Record identifiers; `None` lets the vault choose.
    pub ids: Option<Vec<String>>,
    /// Table to read from.
    pub table: String,
    /// Redaction to apply; `None` when tokens are requested.
    pub redaction: Option<RedactionType>,
}

impl GetRecordGroup {
    /// Creates a group for `table` without ids or redaction.
    #[must_use]
    pub fn new(table: impl Into<String>) -> Self {
        Self {
            ids: None,
            table: table.into(),
            redaction: None,
        }
    }

    /// Sets the record identifiers.
    #[must_use]
    pub fn with_ids(mut self, ids: Vec<String>) -> Self {
        self.ids = Some(ids);
        self
    }

    /// Sets the redaction.
    #[must_use]
    pub fn with_redaction(mut self, redaction: RedactionType) -> Self {
        self.redaction = Some(redaction);
        self
    }
}

/// Bulk get request.
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
pub struct GetRequest {
    /// Record groups, fetched in order.
    pub records: Vec<GetRecordGroup>,
}

/// Options for a bulk get.
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq, Serialize, Deserialize)]
pub struct GetOptions {
    /// Return tokens instead of values.
    pub tokens: bool,
}

/// A record returned by the vault.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct RecordResponse {
    /// Table the record was read from.
    pub table: String,
    /// Column values, including the vault identifier.
    pub fields: FieldMap,
}

impl RecordResponse {
    /// Vault-assigned identifier, when the vault returned one.
    #[must_use]
    pub fn id(&self) -> Option<&str> {
        self.fields.get(ID_FIELD).and_then(Value::as_str)
    }

    /// Value of a column rendered as text. See [`field_text`].
    #[must_use]
    pub fn field_text(&self, column: &str) -> Option<String> {
        field_text(&self.fields, column)
    }
}

/// Bulk get response.
#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
pub struct GetResponse {
    /// Records of every group, in request order.
    pub records: Vec<RecordResponse>,
}

/// Wire shape of a table read.
#[derive(Debug, Deserialize)]
pub(crate) struct TableRecords {
    #[serde(default)]
    pub records: Vec<TableRecord>,
}

#[derive(Debug, Deserialize)]
pub(crate) struct TableRecord {
    #[serde(default)]
    pub fields: FieldMap,
}

/// A record to insert.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct InsertRecord {
    /// Destination table.
    pub table: String,
    /// Column values.
    pub fields: FieldMap,
}

impl InsertRecord {
    /// Creates an insert for `table`.
    #[must_use]
    pub fn new(table: impl Into<String>, fields: FieldMap) -> Self {
        Self {
            table: table.into(),
            fields,
        }
    }
}

/// Insert request.
#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
pub struct InsertRequest {
    /// Records to insert, in order.
    pub records: Vec<InsertRecord>,
}

/// Options for an insert.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
pub struct InsertOptions {
    /// Return tokens for the inserted values.
    pub tokens: bool,
}

impl Default for InsertOptions {
    fn default() -> Self {
        Self { tokens: true }
    }
}

/// A record created by an insert.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct InsertedRecord {
    /// Table the record was written to.
    pub table: String,
    /// Vault-assigned identifier.
    pub id: String,
    /// Tokens per column, when tokenization was requested.
    pub tokens: Option<FieldMap>,
}

/// Insert response.
#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
pub struct InsertResponse {
    /// Created records, in request order.
    pub records: Vec<InsertedRecord>,
}

#[derive(Debug, Serialize)]
pub(crate) struct TableInsertBody<'a> {
    pub records: Vec<TableInsertFields<'a>>,
    pub tokenization: bool,
}

#[derive(Debug, Serialize)]
pub(crate) struct TableInsertFields<'a> {
    pub fields: &'a FieldMap,
}

#[derive(Debug, Deserialize)]
pub(crate) struct TableInsertResult {
    #[serde(default)]
    pub records: Vec<TableInsertRecord>,
}

#[derive(Debug, Deserialize)]
pub(crate) struct TableInsertRecord {
    pub skyflow_id: String,
    #[serde(default)]
    pub tokens: Option<FieldMap>,
}
