//! Records service.

use std::sync::Arc;

use tracing::debug;

use crate::error::{Error, Result};
use crate::models::{
    GetOptions, GetRecordGroup, GetRequest, GetResponse, InsertOptions, InsertRequest,
    InsertResponse, InsertedRecord, RecordResponse, TableInsertBody, TableInsertFields,
    TableInsertResult, TableRecords,
};

use super::super::http::HttpClient;

/// Service for reading and writing vault records.
#[derive(Clone)]
pub struct RecordsService {
    http: Arc<HttpClient>,
}

impl RecordsService {
    pub(crate) fn new(http: Arc<HttpClient>) -> Self {
        Self { http }
    }

    /// Fetches records by id, one vault call per record group.
    ///
    /// Records are returned in group order, each tagged with its table.
    /// A group without ids fails the whole request with
    /// [`Error::BadRequest`] before any call is made.
    ///
    /// # Example
    ///
    /// ```rust,no_run
    /// # use vault_sdk::{VaultClient, GetRecordGroup, GetRequest, GetOptions, RedactionType};
    /// # async fn example(client: VaultClient) -> Result<(), vault_sdk::Error> {
    /// let request = GetRequest {
    ///     records: vec![GetRecordGroup::new("persons")
    ///         .with_ids(vec!["f8d2".into()])
    ///         .with_redaction(RedactionType::PlainText)],
    /// };
    ///
    /// let response = client.records().get(&request, GetOptions::default()).await?;
    /// for record in response.records {
    ///     println!("{:?}", record.id());
    /// }
    /// # Ok(())
    /// # }
    /// ```
    pub async fn get(&self, request: &GetRequest, options: GetOptions) -> Result<GetResponse> {
        request.records.iter().try_for_each(require_ids)?;

        let mut records = Vec::new();

        for group in &request.records {
            let path = format!("/{}", urlencoding::encode(&group.table));
            let query = group_query(group, options);
            let response: TableRecords = self.http.get(&path, &query).await?;

            debug!(
                table = %group.table,
                count = response.records.len(),
                "Fetched record group"
            );

            records.extend(response.records.into_iter().map(|record| RecordResponse {
                table: group.table.clone(),
                fields: record.fields,
            }));
        }

        Ok(GetResponse { records })
    }

    /// Inserts records, one vault call per record.
    pub async fn insert(
        &self,
        request: &InsertRequest,
        options: InsertOptions,
    ) -> Result<InsertResponse> {
        let mut records = Vec::new();

        for record in &request.records {
            let path = format!("/{}", urlencoding::encode(&record.table));
            let body = TableInsertBody {
                records: vec![TableInsertFields {
                    fields: &record.fields,
                }],
                tokenization: options.tokens,
            };
            let response: TableInsertResult = self.http.post(&path, &body).await?;

            records.extend(response.records.into_iter().map(|created| InsertedRecord {
                table: record.table.clone(),
                id: created.skyflow_id,
                tokens: created.tokens,
            }));
        }

        Ok(InsertResponse { records })
    }
}

fn require_ids(group: &GetRecordGroup) -> Result<()> {
    match &group.ids {
        Some(ids) if !ids.is_empty() => Ok(()),
        _ => Err(Error::bad_request(format!(
            "No ids given for table {}",
            group.table
        ))),
    }
}

/// Query string for one record group.
///
/// Redaction and tokenization are mutually exclusive on the vault side, so
/// `redaction` is only sent when present and `tokenization` only when set.
fn group_query(group: &GetRecordGroup, options: GetOptions) -> Vec<(&'static str, String)> {
    let mut query: Vec<(&'static str, String)> = group
        .ids
        .iter()
        .flatten()
        .map(|id| ("skyflow_ids", id.clone()))
        .collect();

    if let Some(redaction) = group.redaction {
        query.push(("redaction", redaction.as_str().to_string()));
    }
    if options.tokens {
        query.push(("tokenization", "true".to_string()));
    }

    query
}

impl std::fmt::Debug for RecordsService {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.debug_struct("RecordsService").finish_non_exhaustive()
    }
}
