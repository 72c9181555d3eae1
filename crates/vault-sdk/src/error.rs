//! Error types for the vault SDK.
//!
//! Errors map both the vault's HTTP error responses and client-side
//! failures (network, configuration, token sourcing).

use serde::{Deserialize, Serialize};

/// The main error type for all SDK operations.
#[derive(Debug, thiserror::Error)]
pub enum Error {
    /// The request was malformed or contained invalid data.
    #[error("Bad request: {message}")]
    BadRequest {
        /// Error message describing what was invalid.
        message: String,
    },

    /// Authentication failed or no bearer token could be obtained.
    #[error("Unauthorized: {message}")]
    Unauthorized {
        /// Error message.
        message: String,
    },

    /// The bearer token lacks permission for this operation.
    #[error("Forbidden: {message}")]
    Forbidden {
        /// Error message describing missing permissions.
        message: String,
    },

    /// The requested table, record, or token was not found.
    #[error("Not found: {message}")]
    NotFound {
        /// Error message from the vault.
        message: String,
    },

    /// The request conflicts with existing state (e.g. a unique column).
    #[error("Conflict: {message}")]
    Conflict {
        /// Error message describing the conflict.
        message: String,
    },

    /// Too many requests.
    #[error("Rate limited: retry after {retry_after_secs} seconds")]
    RateLimited {
        /// Number of seconds to wait before retrying.
        retry_after_secs: u64,
    },

    /// Server-side error occurred.
    #[error("Server error: {message}")]
    ServerError {
        /// Error message from server.
        message: String,
        /// Optional request ID for support.
        request_id: Option<String>,
    },

    /// Service is temporarily unavailable.
    #[error("Service unavailable: {message}")]
    ServiceUnavailable {
        /// Error message.
        message: String,
    },

    /// Some records of a detokenize call failed.
    #[error("{failed} of {total} records failed: {message}")]
    PartialFailure {
        /// Number of failed records.
        failed: usize,
        /// Number of records in the request.
        total: usize,
        /// First reported failure.
        message: String,
    },

    /// Network or connection error.
    #[error("Network error: {0}")]
    Network(#[from] reqwest::Error),

    /// Error building the client configuration.
    #[error("Configuration error: {message}")]
    Configuration {
        /// Error message.
        message: String,
    },

    /// Error serializing request or deserializing response.
    #[error("Serialization error: {0}")]
    Serialization(#[from] serde_json::Error),

    /// Invalid URL provided.
    #[error("Invalid URL: {0}")]
    InvalidUrl(#[from] url::ParseError),
}

impl Error {
    /// Creates a bad request error.
    pub fn bad_request(message: impl Into<String>) -> Self {
        Self::BadRequest {
            message: message.into(),
        }
    }

    /// Creates an unauthorized error.
    pub fn unauthorized(message: impl Into<String>) -> Self {
        Self::Unauthorized {
            message: message.into(),
        }
    }

    /// Creates a forbidden error.
    pub fn forbidden(message: impl Into<String>) -> Self {
        Self::Forbidden {
            message: message.into(),
        }
    }

    /// Creates a not found error.
    pub fn not_found(message: impl Into<String>) -> Self {
        Self::NotFound {
            message: message.into(),
        }
    }

    /// Creates a conflict error.
    pub fn conflict(message: impl Into<String>) -> Self {
        Self::Conflict {
            message: message.into(),
        }
    }

    /// Creates a server error.
    pub fn server_error(message: impl Into<String>, request_id: Option<String>) -> Self {
        Self::ServerError {
            message: message.into(),
            request_id,
        }
    }

    /// Creates a configuration error.
    pub fn config(message: impl Into<String>) -> Self {
        Self::Configuration {
            message: message.into(),
        }
    }

    /// Returns true if this error is retryable.
    #[must_use]
    pub fn is_retryable(&self) -> bool {
        match self {
            Self::RateLimited { .. } | Self::ServerError { .. } | Self::ServiceUnavailable { .. } => {
                true
            }
            Self::Network(e) => e.is_timeout() || e.is_connect(),
            _ => false,
        }
    }

    /// Returns the HTTP status code if applicable.
    #[must_use]
    pub fn status_code(&self) -> Option<u16> {
        match self {
            Self::BadRequest { .. } => Some(400),
            Self::Unauthorized { .. } => Some(401),
            Self::Forbidden { .. } => Some(403),
            Self::NotFound { .. } => Some(404),
            Self::Conflict { .. } => Some(409),
            Self::RateLimited { .. } => Some(429),
            Self::ServerError { .. } => Some(500),
            Self::ServiceUnavailable { .. } => Some(503),
            Self::PartialFailure { .. } => Some(207),
            _ => None,
        }
    }

    /// Returns the request ID if available.
    #[must_use]
    pub fn request_id(&self) -> Option<&str> {
        match self {
            Self::ServerError { request_id, .. } => request_id.as_deref(),
            _ => None,
        }
    }
}

/// Error envelope returned by the vault.
///
/// ```json
/// {"error": {"grpc_code": 5, "http_code": 404, "message": "...", "http_status": "Not Found"}}
/// ```
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct ApiError {
    /// Error body.
    pub error: ApiErrorBody,
}

/// Body of a vault error envelope.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct ApiErrorBody {
    /// gRPC status code.
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub grpc_code: Option<i32>,
    /// HTTP status code.
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub http_code: Option<u16>,
    /// Human-readable message.
    #[serde(default)]
    pub message: String,
    /// HTTP status text.
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub http_status: Option<String>,
}

impl ApiError {
    /// Converts this API error to an SDK error, falling back to the
    /// transport status when the body carries no code.
    #[must_use]
    pub fn into_error(self, status: u16, request_id: Option<String>) -> Error {
        let message = self.error.message;

        match self.error.http_code.unwrap_or(status) {
            400 => Error::BadRequest { message },
            401 => Error::Unauthorized { message },
            403 => Error::Forbidden { message },
            404 => Error::NotFound { message },
            409 => Error::Conflict { message },
            429 => Error::RateLimited { retry_after_secs: 60 },
            503 => Error::ServiceUnavailable { message },
            _ => Error::ServerError {
                message,
                request_id,
            },
        }
    }
}

/// Result type alias for SDK operations.
pub type Result<T> = std::result::Result<T, Error>;
