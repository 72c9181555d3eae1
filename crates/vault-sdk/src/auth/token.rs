//! Token caching over another provider.

use std::sync::Arc;
use std::time::{Duration, Instant};

use async_trait::async_trait;
use parking_lot::RwLock;
use secrecy::SecretString;

use super::BearerTokenProvider;
use crate::error::Result;

#[derive(Clone)]
struct CachedToken {
    token: SecretString,
    fetched_at: Instant,
}

impl CachedToken {
    fn is_expired(&self, ttl: Duration) -> bool {
        self.fetched_at.elapsed() >= ttl
    }
}

/// Caches the token of an inner provider for a fixed time-to-live.
///
/// Concurrent callers that find the cache stale wait on a single refresh
/// instead of each invoking the inner provider.
pub struct CachedTokenProvider {
    inner: Arc<dyn BearerTokenProvider>,
    ttl: Duration,
    cached: Arc<RwLock<Option<CachedToken>>>,
    refresh_lock: Arc<tokio::sync::Mutex<()>>,
}

impl CachedTokenProvider {
    /// Wraps `inner`, reusing each token for `ttl`.
    pub fn new(inner: Arc<dyn BearerTokenProvider>, ttl: Duration) -> Self {
        Self {
            inner,
            ttl,
            cached: Arc::new(RwLock::new(None)),
            refresh_lock: Arc::new(tokio::sync::Mutex::new(())),
        }
    }

    /// Drops the cached token so the next call refreshes.
    pub fn invalidate(&self) {
        *self.cached.write() = None;
    }

    fn fresh(&self) -> Option<SecretString> {
        self.cached
            .read()
            .as_ref()
            .filter(|cached| !cached.is_expired(self.ttl))
            .map(|cached| cached.token.clone())
    }
}

impl Clone for CachedTokenProvider {
    fn clone(&self) -> Self {
        Self {
            inner: Arc::clone(&self.inner),
            ttl: self.ttl,
            cached: Arc::clone(&self.cached),
            refresh_lock: Arc::clone(&self.refresh_lock),
        }
    }
}

#[async_trait]
impl BearerTokenProvider for CachedTokenProvider {
    async fn bearer_token(&self) -> Result<SecretString> {
        if let Some(token) = self.fresh() {
            return Ok(token);
        }

        let _lock = self.refresh_lock.lock().await;

        // Another caller may have refreshed while we waited.
        if let Some(token) = self.fresh() {
            return Ok(token);
        }

        let token = self.inner.bearer_token().await?;
        *self.cached.write() = Some(CachedToken {
            token: token.clone(),
            fetched_at: Instant::now(),
        });

        Ok(token)
    }
}

impl std::fmt::Debug for CachedTokenProvider {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.debug_struct("CachedTokenProvider")
            .field("ttl", &self.ttl)
            .field("has_token", &self.cached.read().is_some())
            .finish_non_exhaustive()
    }
}
