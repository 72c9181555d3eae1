//! Query adapter: GraphQL arguments in, vault payloads out.
//!
//! Every operation makes its vault call, logs any failure, and reduces it to
//! `None`. Callers see `null` for both "nothing found" and "call failed".

use std::sync::Arc;

use tracing::{debug, error, instrument};
use vault_sdk::{
    DetokenizeRequest, DetokenizedRecord, FieldMap, GetOptions, GetRecordGroup, GetRequest,
    InsertOptions, InsertRecord, InsertRequest, InsertedRecord, RecordResponse, RedactionType,
};

use crate::access::VaultAccess;

/// Table read by `getUsers`.
pub const USERS_TABLE: &str = "users";

/// Builds the bulk-get payload for one table.
///
/// Values come back in plain text unless `tokens_bool` is true, in which
/// case no redaction is sent and tokens are requested instead.
pub fn records_request(
    table: impl Into<String>,
    ids: Option<Vec<String>>,
    tokens_bool: Option<bool>,
) -> (GetRequest, GetOptions) {
    let tokens = tokens_bool.unwrap_or(false);
    let group = GetRecordGroup {
        ids,
        table: table.into(),
        redaction: if tokens {
            None
        } else {
            Some(RedactionType::PlainText)
        },
    };

    (
        GetRequest {
            records: vec![group],
        },
        GetOptions { tokens },
    )
}

/// Builds the detokenize payload; values come back in plain text and an
/// absent list resolves nothing.
pub fn detokenize_request(tokens: Option<Vec<String>>) -> DetokenizeRequest {
    DetokenizeRequest::from_tokens(tokens.unwrap_or_default())
}

/// Translates resolver calls into vault calls.
#[derive(Clone)]
pub struct VaultAdapter {
    vault: Arc<dyn VaultAccess>,
}

impl VaultAdapter {
    /// Creates an adapter over `vault`.
    pub fn new(vault: Arc<dyn VaultAccess>) -> Self {
        Self { vault }
    }

    /// Records of `table` with the given ids.
    #[instrument(skip(self, ids), fields(id_count = ids.as_ref().map_or(0, Vec::len)))]
    pub async fn get_records(
        &self,
        table: String,
        ids: Option<Vec<String>>,
        tokens_bool: Option<bool>,
    ) -> Option<Vec<RecordResponse>> {
        let (request, options) = records_request(table, ids, tokens_bool);

        match self.vault.get(request, options).await {
            Ok(response) => Some(response.records),
            Err(e) => {
                error!(operation = "getRecords", error = %e, "Vault request failed");
                None
            }
        }
    }

    /// Records of the users table with the given ids.
    #[instrument(skip(self, ids), fields(id_count = ids.as_ref().map_or(0, Vec::len)))]
    pub async fn get_users(
        &self,
        ids: Option<Vec<String>>,
        tokens_bool: Option<bool>,
    ) -> Option<Vec<RecordResponse>> {
        let (request, options) = records_request(USERS_TABLE, ids, tokens_bool);

        match self.vault.get(request, options).await {
            Ok(response) => {
                debug!(count = response.records.len(), "Fetched users");
                Some(response.records)
            }
            Err(e) => {
                error!(operation = "getUsers", error = %e, "Vault request failed");
                None
            }
        }
    }

    /// Resolves each token to its value.
    #[instrument(skip_all, fields(token_count = tokens.as_ref().map_or(0, Vec::len)))]
    pub async fn detokenize(&self, tokens: Option<Vec<String>>) -> Option<Vec<DetokenizedRecord>> {
        match self.vault.detokenize(detokenize_request(tokens)).await {
            Ok(response) => Some(response.records),
            Err(e) => {
                error!(operation = "detokenize", error = %e, "Vault request failed");
                None
            }
        }
    }

    /// Inserts one record into `table`; `fields` is a JSON object.
    #[instrument(skip(self, fields))]
    pub async fn insert_record(&self, table: String, fields: &str) -> Option<InsertedRecord> {
        let fields: FieldMap = match serde_json::from_str(fields) {
            Ok(fields) => fields,
            Err(e) => {
                error!(operation = "insertRecord", error = %e, "Fields are not a JSON object");
                return None;
            }
        };

        let request = InsertRequest {
            records: vec![InsertRecord::new(table, fields)],
        };

        match self.vault.insert(request, InsertOptions { tokens: true }).await {
            Ok(response) => response.records.into_iter().next(),
            Err(e) => {
                error!(operation = "insertRecord", error = %e, "Vault request failed");
                None
            }
        }
    }
}

impl std::fmt::Debug for VaultAdapter {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.debug_struct("VaultAdapter").finish_non_exhaustive()
    }
}
