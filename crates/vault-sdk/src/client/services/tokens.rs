//! Detokenization service.

use std::sync::Arc;

use crate::error::{Error, Result};
use crate::models::{
    DetokenizeBody, DetokenizeRequest, DetokenizeResponse, DetokenizeResult,
    DetokenizeResultRecord, DetokenizedRecord,
};

use super::super::http::HttpClient;

/// Service for resolving tokens.
#[derive(Clone)]
pub struct TokensService {
    http: Arc<HttpClient>,
}

impl TokensService {
    pub(crate) fn new(http: Arc<HttpClient>) -> Self {
        Self { http }
    }

    /// Resolves tokens to their values in a single vault call.
    ///
    /// An empty request is sent as-is. If the vault reports an error for
    /// any token, or returns a token without a value, the whole call fails
    /// with [`Error::PartialFailure`].
    pub async fn detokenize(&self, request: &DetokenizeRequest) -> Result<DetokenizeResponse> {
        let body = DetokenizeBody {
            detokenization_parameters: &request.records,
        };
        let result: DetokenizeResult = self.http.post("/detokenize", &body).await?;

        let total = result.records.len();
        let mut failures = result
            .records
            .iter()
            .filter_map(DetokenizeResultRecord::failure);

        if let Some(first) = failures.next() {
            return Err(Error::PartialFailure {
                failed: 1 + failures.count(),
                total,
                message: first,
            });
        }

        let records = result
            .records
            .into_iter()
            .map(DetokenizedRecord::try_from)
            .collect::<std::result::Result<Vec<_>, _>>()
            .map_err(|message| Error::PartialFailure {
                failed: 1,
                total,
                message,
            })?;

        Ok(DetokenizeResponse { records })
    }
}

impl std::fmt::Debug for TokensService {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.debug_struct("TokensService").finish_non_exhaustive()
    }
}
