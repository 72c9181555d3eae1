//! Bearer token providers.

use std::future::Future;
use std::sync::Arc;

use async_trait::async_trait;
use reqwest::RequestBuilder;
use secrecy::{ExposeSecret, SecretString};

use super::{Authenticator, BearerTokenProvider};
use crate::error::{Error, Result};

/// A fixed bearer token.
#[derive(Clone)]
pub struct StaticTokenProvider {
    token: SecretString,
}

impl StaticTokenProvider {
    /// Creates a provider that always yields `token`.
    #[must_use]
    pub fn new(token: impl Into<String>) -> Self {
        Self {
            token: SecretString::new(token.into()),
        }
    }
}

#[async_trait]
impl BearerTokenProvider for StaticTokenProvider {
    async fn bearer_token(&self) -> Result<SecretString> {
        Ok(self.token.clone())
    }
}

impl std::fmt::Debug for StaticTokenProvider {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.debug_struct("StaticTokenProvider")
            .field("token", &"[REDACTED]")
            .finish()
    }
}

/// A token read from an environment variable when the provider is built.
#[derive(Clone)]
pub struct EnvTokenProvider {
    var: String,
    token: Option<SecretString>,
}

impl EnvTokenProvider {
    /// Reads `var` from the process environment.
    ///
    /// A missing or empty variable does not fail here; every later call to
    /// [`bearer_token`](BearerTokenProvider::bearer_token) reports it instead.
    #[must_use]
    pub fn new(var: impl Into<String>) -> Self {
        let var = var.into();
        let token = std::env::var(&var)
            .ok()
            .filter(|value| !value.is_empty())
            .map(SecretString::new);

        Self { var, token }
    }

    /// Name of the variable this provider reads.
    #[must_use]
    pub fn var(&self) -> &str {
        &self.var
    }

    /// Whether the variable held a value at construction.
    #[must_use]
    pub fn is_set(&self) -> bool {
        self.token.is_some()
    }
}

#[async_trait]
impl BearerTokenProvider for EnvTokenProvider {
    async fn bearer_token(&self) -> Result<SecretString> {
        self.token.clone().ok_or_else(|| {
            Error::unauthorized(format!("environment variable {} is not set", self.var))
        })
    }
}

impl std::fmt::Debug for EnvTokenProvider {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.debug_struct("EnvTokenProvider")
            .field("var", &self.var)
            .field("is_set", &self.is_set())
            .finish()
    }
}

/// A token produced by an async closure.
///
/// ```rust
/// use secrecy::SecretString;
/// use vault_sdk::auth::FnTokenProvider;
///
/// let provider = FnTokenProvider::new(|| async {
///     Ok::<_, vault_sdk::Error>(SecretString::new("token-from-signer".to_string()))
/// });
/// # let _ = provider;
/// ```
pub struct FnTokenProvider<F> {
    f: F,
}

impl<F> FnTokenProvider<F> {
    /// Wraps `f`, which is invoked once per request.
    pub fn new(f: F) -> Self {
        Self { f }
    }
}

#[async_trait]
impl<F, Fut> BearerTokenProvider for FnTokenProvider<F>
where
    F: Fn() -> Fut + Send + Sync,
    Fut: Future<Output = Result<SecretString>> + Send + 'static,
{
    async fn bearer_token(&self) -> Result<SecretString> {
        (self.f)().await
    }
}

impl<F> std::fmt::Debug for FnTokenProvider<F> {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.debug_struct("FnTokenProvider").finish_non_exhaustive()
    }
}

/// How the client authenticates against the vault.
#[derive(Clone, Default)]
pub enum AuthProvider {
    /// Bearer token from a provider.
    Bearer(Arc<dyn BearerTokenProvider>),
    /// No authentication.
    #[default]
    None,
}

impl AuthProvider {
    /// Creates bearer authentication with a fixed token.
    #[must_use]
    pub fn bearer(token: impl Into<String>) -> Self {
        Self::Bearer(Arc::new(StaticTokenProvider::new(token)))
    }

    /// Creates bearer authentication backed by `provider`.
    #[must_use]
    pub fn provider(provider: impl BearerTokenProvider + 'static) -> Self {
        Self::Bearer(Arc::new(provider))
    }

    /// Creates no authentication.
    #[must_use]
    pub fn none() -> Self {
        Self::None
    }

    /// Fails if a token is expected but cannot be produced right now.
    ///
    /// # Errors
    ///
    /// Returns the provider's error, typically [`Error::Unauthorized`](crate::Error::Unauthorized).
    pub async fn check(&self) -> Result<()> {
        match self {
            Self::Bearer(provider) => provider.bearer_token().await.map(drop),
            Self::None => Ok(()),
        }
    }
}

#[async_trait]
impl Authenticator for AuthProvider {
    async fn authenticate(&self, request: RequestBuilder) -> Result<RequestBuilder> {
        match self {
            Self::Bearer(provider) => {
                let token = provider.bearer_token().await?;
                Ok(request.bearer_auth(token.expose_secret()))
            }
            Self::None => Ok(request),
        }
    }
}

impl std::fmt::Debug for AuthProvider {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        match self {
            Self::Bearer(_) => write!(f, "AuthProvider::Bearer([REDACTED])"),
            Self::None => write!(f, "AuthProvider::None"),
        }
    }
}
