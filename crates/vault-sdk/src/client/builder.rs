//! Client builder for fluent configuration.

use std::sync::Arc;
use std::time::Duration;

use crate::auth::{AuthProvider, BearerTokenProvider};
use crate::error::{Error, Result};

use super::config::{RetryConfig, VaultConfig};
use super::VaultClient;

/// Builder for creating a [`VaultClient`].
///
/// # Example
///
/// ```rust,no_run
/// use vault_sdk::VaultClient;
/// use vault_sdk::auth::EnvTokenProvider;
/// use std::time::Duration;
///
/// let client = VaultClient::builder()
///     .vault_url("https://abc.vault.example.com")
///     .vault_id("dd32a450f74540b59d58f1a06370801d")
///     .token_provider(EnvTokenProvider::new("VAULT_API_KEY"))
///     .timeout(Duration::from_secs(60))
///     .build()?;
/// # Ok::<(), vault_sdk::Error>(())
/// ```
#[derive(Debug, Default)]
pub struct VaultClientBuilder {
    vault_url: Option<String>,
    vault_id: Option<String>,
    auth: Option<AuthProvider>,
    timeout: Option<Duration>,
    connect_timeout: Option<Duration>,
    user_agent: Option<String>,
    retry: Option<RetryConfig>,
    tls_verify: Option<bool>,
}

impl VaultClientBuilder {
    /// Creates a new builder.
    #[must_use]
    pub fn new() -> Self {
        Self::default()
    }

    /// Sets the vault URL. Required.
    #[must_use]
    pub fn vault_url(mut self, url: impl Into<String>) -> Self {
        self.vault_url = Some(url.into());
        self
    }

    /// Sets the vault identifier. Required.
    #[must_use]
    pub fn vault_id(mut self, id: impl Into<String>) -> Self {
        self.vault_id = Some(id.into());
        self
    }

    /// Authenticates with a fixed bearer token.
    #[must_use]
    pub fn bearer_token(mut self, token: impl Into<String>) -> Self {
        self.auth = Some(AuthProvider::bearer(token));
        self
    }

    /// Authenticates with tokens from `provider`.
    #[must_use]
    pub fn token_provider(mut self, provider: impl BearerTokenProvider + 'static) -> Self {
        self.auth = Some(AuthProvider::provider(provider));
        self
    }

    /// Authenticates with a shared token provider.
    #[must_use]
    pub fn shared_token_provider(mut self, provider: Arc<dyn BearerTokenProvider>) -> Self {
        self.auth = Some(AuthProvider::Bearer(provider));
        self
    }

    /// Sets a custom authentication provider.
    #[must_use]
    pub fn auth(mut self, auth: AuthProvider) -> Self {
        self.auth = Some(auth);
        self
    }

    /// Sets the request timeout.
    ///
    /// Default: 30 seconds.
    #[must_use]
    pub fn timeout(mut self, timeout: Duration) -> Self {
        self.timeout = Some(timeout);
        self
    }

    /// Sets the request timeout in seconds.
    #[must_use]
    pub fn timeout_secs(self, secs: u64) -> Self {
        self.timeout(Duration::from_secs(secs))
    }

    /// Sets the connection timeout.
    ///
    /// Default: 10 seconds.
    #[must_use]
    pub fn connect_timeout(mut self, timeout: Duration) -> Self {
        self.connect_timeout = Some(timeout);
        self
    }

    /// Sets the user agent string.
    #[must_use]
    pub fn user_agent(mut self, user_agent: impl Into<String>) -> Self {
        self.user_agent = Some(user_agent.into());
        self
    }

    /// Sets the maximum number of retries. Zero disables retries.
    ///
    /// Default: 0.
    #[must_use]
    pub fn max_retries(mut self, max: u32) -> Self {
        self.retry = Some(RetryConfig::new(max));
        self
    }

    /// Sets the retry configuration.
    #[must_use]
    pub fn retry(mut self, retry: RetryConfig) -> Self {
        self.retry = Some(retry);
        self
    }

    /// Sets whether to verify TLS certificates.
    ///
    /// Default: true. Only disable against test vaults with self-signed
    /// certificates.
    #[must_use]
    pub fn tls_verify(mut self, verify: bool) -> Self {
        self.tls_verify = Some(verify);
        self
    }

    /// Builds the client.
    ///
    /// # Errors
    ///
    /// Returns an error if the vault URL or id is missing or empty, or the
    /// URL does not parse.
    pub fn build(self) -> Result<VaultClient> {
        let vault_url = self
            .vault_url
            .filter(|url| !url.trim().is_empty())
            .ok_or_else(|| Error::config("vault_url is required"))?;
        url::Url::parse(&vault_url)?;

        let vault_id = self
            .vault_id
            .filter(|id| !id.trim().is_empty())
            .ok_or_else(|| Error::config("vault_id is required"))?;

        let defaults = VaultConfig::new(vault_url, vault_id);
        let config = VaultConfig {
            auth: self.auth.unwrap_or_default(),
            timeout: self.timeout.unwrap_or(defaults.timeout),
            connect_timeout: self.connect_timeout.unwrap_or(defaults.connect_timeout),
            user_agent: self.user_agent.unwrap_or_else(|| defaults.user_agent.clone()),
            retry: self.retry.unwrap_or(defaults.retry),
            tls_verify: self.tls_verify.unwrap_or(defaults.tls_verify),
            ..defaults
        };

        VaultClient::new(config)
    }
}
