//! Common types used across the SDK.

use serde::{Deserialize, Serialize};
use serde_json::Value;

/// Redaction applied to field values returned by the vault.
#[derive(Debug, Clone, Copy, Default, Serialize, Deserialize, PartialEq, Eq, Hash)]
#[serde(rename_all = "SCREAMING_SNAKE_CASE")]
pub enum RedactionType {
    /// The column's configured default redaction.
    #[default]
    Default,
    /// Fully redacted.
    Redacted,
    /// Partially masked.
    Masked,
    /// Original value.
    PlainText,
}

impl RedactionType {
    /// Wire name of this redaction.
    #[must_use]
    pub fn as_str(&self) -> &'static str {
        match self {
            Self::Default => "DEFAULT",
            Self::Redacted => "REDACTED",
            Self::Masked => "MASKED",
            Self::PlainText => "PLAIN_TEXT",
        }
    }
}

impl std::fmt::Display for RedactionType {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.write_str(self.as_str())
    }
}

/// Field map of a vault record, keyed by column name.
pub type FieldMap = serde_json::Map<String, Value>;

/// Column holding the vault-assigned record identifier.
pub const ID_FIELD: &str = "skyflow_id";

/// Value of `column` rendered as text.
///
/// Strings are returned as-is; other JSON values as their JSON text.
/// Missing and `null` columns yield `None`.
#[must_use]
pub fn field_text(fields: &FieldMap, column: &str) -> Option<String> {
    match fields.get(column)? {
        Value::Null => None,
        Value::String(s) => Some(s.clone()),
        other => Some(other.to_string()),
    }
}
