//! Authentication handling for the vault SDK.
//!
//! The vault accepts a bearer token on every request. Where that token comes
//! from is a capability injected into the client: a fixed string, an
//! environment variable, an async closure, or a cache over any of these.

mod provider;
mod token;

pub use provider::{AuthProvider, EnvTokenProvider, FnTokenProvider, StaticTokenProvider};
pub use token::CachedTokenProvider;

use async_trait::async_trait;
use reqwest::RequestBuilder;
use secrecy::SecretString;

use crate::error::Result;

/// Source of bearer tokens for vault requests.
///
/// Implementations return [`Error::Unauthorized`](crate::Error::Unauthorized)
/// when no token can be produced.
#[async_trait]
pub trait BearerTokenProvider: Send + Sync {
    /// Returns the token to present on the next request.
    async fn bearer_token(&self) -> Result<SecretString>;
}

/// Trait for applying authentication to outgoing requests.
#[async_trait]
pub trait Authenticator: Send + Sync {
    /// Apply authentication to a request.
    async fn authenticate(&self, request: RequestBuilder) -> Result<RequestBuilder>;
}
