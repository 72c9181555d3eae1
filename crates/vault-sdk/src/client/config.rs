//! Client configuration.

use std::time::Duration;

use crate::auth::AuthProvider;

/// Resolved settings of a [`VaultClient`](super::VaultClient).
///
/// Usually produced by [`VaultClientBuilder`](super::VaultClientBuilder).
#[derive(Debug, Clone)]
pub struct VaultConfig {
    /// Base URL of the vault, without a trailing slash.
    pub vault_url: String,
    /// Identifier of the vault.
    pub vault_id: String,
    /// Source of the bearer token.
    pub auth: AuthProvider,
    /// Whole-request timeout.
    pub timeout: Duration,
    /// TCP connect timeout.
    pub connect_timeout: Duration,
    /// Value of the `User-Agent` header.
    pub user_agent: String,
    /// Retry policy.
    pub retry: RetryConfig,
    /// Verify TLS certificates.
    pub tls_verify: bool,
}

impl VaultConfig {
    /// Default whole-request timeout.
    pub const DEFAULT_TIMEOUT: Duration = Duration::from_secs(30);
    /// Default connect timeout.
    pub const DEFAULT_CONNECT_TIMEOUT: Duration = Duration::from_secs(10);

    /// Settings for `vault_id` at `vault_url` with no authentication.
    #[must_use]
    pub fn new(vault_url: impl Into<String>, vault_id: impl Into<String>) -> Self {
        let mut vault_url = vault_url.into();
        while vault_url.ends_with('/') {
            vault_url.pop();
        }

        Self {
            vault_url,
            vault_id: vault_id.into(),
            auth: AuthProvider::None,
            timeout: Self::DEFAULT_TIMEOUT,
            connect_timeout: Self::DEFAULT_CONNECT_TIMEOUT,
            user_agent: crate::USER_AGENT.to_string(),
            retry: RetryConfig::disabled(),
            tls_verify: true,
        }
    }

    /// Absolute URL of `path` below `/v1/vaults/{vault_id}`.
    #[must_use]
    pub fn url(&self, path: &str) -> String {
        format!("{}/v1/vaults/{}{}", self.vault_url, self.vault_id, path)
    }
}

/// Retry policy for retryable failures (429, 5xx, timeouts, refused
/// connections).
///
/// Delays double from `initial_backoff` up to `max_backoff`. A
/// `Retry-After` header on a 429 overrides the computed delay.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct RetryConfig {
    /// Retries after the first attempt. Zero disables retrying.
    pub max_retries: u32,
    /// Delay before the first retry.
    pub initial_backoff: Duration,
    /// Upper bound on any delay.
    pub max_backoff: Duration,
}

impl RetryConfig {
    /// Up to `max_retries` retries with default delays.
    #[must_use]
    pub const fn new(max_retries: u32) -> Self {
        Self {
            max_retries,
            initial_backoff: Duration::from_millis(100),
            max_backoff: Duration::from_secs(5),
        }
    }

    /// No retries.
    #[must_use]
    pub const fn disabled() -> Self {
        Self::new(0)
    }

    /// Sets the delay before the first retry.
    #[must_use]
    pub fn with_initial_backoff(mut self, backoff: Duration) -> Self {
        self.initial_backoff = backoff;
        self
    }

    /// Sets the upper bound on delays.
    #[must_use]
    pub fn with_max_backoff(mut self, backoff: Duration) -> Self {
        self.max_backoff = backoff;
        self
    }

    /// Whether any retry is allowed.
    #[must_use]
    pub const fn is_enabled(&self) -> bool {
        self.max_retries > 0
    }

    /// Delay before retry number `retry` (1-based).
    #[must_use]
    pub fn backoff(&self, retry: u32) -> Duration {
        if retry == 0 {
            return Duration::ZERO;
        }

        let factor = 1_u32.checked_shl(retry - 1).unwrap_or(u32::MAX);
        self.initial_backoff
            .saturating_mul(factor)
            .min(self.max_backoff)
    }
}

impl Default for RetryConfig {
    fn default() -> Self {
        Self::disabled()
    }
}
