//! Detokenization models.

use serde::{Deserialize, Serialize};

use super::common::RedactionType;

/// A token to resolve.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct DetokenizeRecord {
    /// Token value.
    pub token: String,
    /// Redaction for the resolved value; the vault default when `None`.
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub redaction: Option<RedactionType>,
}

impl DetokenizeRecord {
    /// Creates a record resolving `token` to its plain-text value.
    #[must_use]
    pub fn new(token: impl Into<String>) -> Self {
        Self {
            token: token.into(),
            redaction: Some(RedactionType::PlainText),
        }
    }

    /// Sets the redaction; `None` leaves it to the column's policy.
    #[must_use]
    pub fn with_redaction(mut self, redaction: Option<RedactionType>) -> Self {
        self.redaction = redaction;
        self
    }
}

/// Detokenize request.
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
pub struct DetokenizeRequest {
    /// Tokens to resolve.
    pub records: Vec<DetokenizeRecord>,
}

impl DetokenizeRequest {
    /// Builds a request resolving each of `tokens`.
    pub fn from_tokens<I, S>(tokens: I) -> Self
    where
        I: IntoIterator<Item = S>,
        S: Into<String>,
    {
        Self {
            records: tokens.into_iter().map(DetokenizeRecord::new).collect(),
        }
    }
}

/// A resolved token.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct DetokenizedRecord {
    /// The token that was resolved.
    pub token: Option<String>,
    /// Original value.
    pub value: String,
    /// Token group the token belongs to.
    pub token_group: Option<String>,
    /// Type of the original value as reported by the vault.
    pub value_type: Option<String>,
}

/// Detokenize response.
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
pub struct DetokenizeResponse {
    /// Resolved tokens, in request order.
    pub records: Vec<DetokenizedRecord>,
}

#[derive(Debug, Serialize)]
#[serde(rename_all = "camelCase")]
pub(crate) struct DetokenizeBody<'a> {
    pub detokenization_parameters: &'a [DetokenizeRecord],
}

#[derive(Debug, Deserialize)]
pub(crate) struct DetokenizeResult {
    #[serde(default)]
    pub records: Vec<DetokenizeResultRecord>,
}

#[derive(Debug, Deserialize)]
#[serde(rename_all = "camelCase")]
pub(crate) struct DetokenizeResultRecord {
    #[serde(default)]
    pub token: Option<String>,
    #[serde(default)]
    pub value: Option<String>,
    #[serde(default, alias = "tokenGroupName")]
    pub token_group: Option<String>,
    #[serde(default)]
    pub value_type: Option<String>,
    #[serde(default)]
    pub error: Option<String>,
}

impl DetokenizeResultRecord {
    /// The vault's error for this token, or a missing value.
    pub fn failure(&self) -> Option<String> {
        match (&self.error, &self.value) {
            (Some(error), _) => Some(error.clone()),
            (None, None) => Some(missing_value(self.token.as_deref())),
            (None, Some(_)) => None,
        }
    }
}

fn missing_value(token: Option<&str>) -> String {
    format!("No value returned for token {}", token.unwrap_or("<unknown>"))
}

impl TryFrom<DetokenizeResultRecord> for DetokenizedRecord {
    type Error = String;

    fn try_from(record: DetokenizeResultRecord) -> Result<Self, Self::Error> {
        if let Some(error) = record.error {
            return Err(error);
        }

        match record.value {
            Some(value) => Ok(Self {
                token: record.token,
                value,
                token_group: record.token_group,
                value_type: record.value_type,
            }),
            None => Err(missing_value(record.token.as_deref())),
        }
    }
}
