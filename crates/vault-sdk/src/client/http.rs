//! Transport: one authenticated JSON exchange with the vault, retried per
//! the configured policy.

use std::time::Duration;

use reqwest::header::{HeaderMap, ACCEPT, RETRY_AFTER};
use reqwest::{Client, Method, Response, StatusCode};
use serde::{de::DeserializeOwned, Serialize};
use tracing::{debug, instrument, warn};

use crate::auth::Authenticator;
use crate::error::{ApiError, Error, Result};

use super::config::VaultConfig;

/// Query string pairs; keys may repeat.
pub type Query<'a> = [(&'a str, String)];

const REQUEST_ID_HEADER: &str = "x-request-id";

pub struct HttpClient {
    client: Client,
    config: VaultConfig,
}

impl HttpClient {
    pub fn new(config: &VaultConfig) -> Result<Self> {
        let client = Client::builder()
            .timeout(config.timeout)
            .connect_timeout(config.connect_timeout)
            .user_agent(&config.user_agent)
            .gzip(true)
            .danger_accept_invalid_certs(!config.tls_verify)
            .build()
            .map_err(|e| Error::config(format!("Failed to build HTTP client: {e}")))?;

        Ok(Self {
            client,
            config: config.clone(),
        })
    }

    #[instrument(skip(self, query), fields(path = %path))]
    pub async fn get<T: DeserializeOwned>(&self, path: &str, query: &Query<'_>) -> Result<T> {
        self.send(Method::GET, path, query, None::<&()>).await
    }

    #[instrument(skip(self, body), fields(path = %path))]
    pub async fn post<T, B>(&self, path: &str, body: &B) -> Result<T>
    where
        T: DeserializeOwned,
        B: Serialize + Sync,
    {
        self.send(Method::POST, path, &[], Some(body)).await
    }

    async fn send<T, B>(
        &self,
        method: Method,
        path: &str,
        query: &Query<'_>,
        body: Option<&B>,
    ) -> Result<T>
    where
        T: DeserializeOwned,
        B: Serialize + Sync,
    {
        let url = self.config.url(path);
        let retry = self.config.retry;
        let mut retries = 0;

        let response = loop {
            let error = match self.attempt(method.clone(), &url, query, body).await {
                Ok(response) if response.status().is_success() => break response,
                Ok(response) => error_from_response(response).await,
                Err(e) => e,
            };

            if retries >= retry.max_retries || !error.is_retryable() {
                return Err(error);
            }

            retries += 1;
            let delay = match &error {
                Error::RateLimited { retry_after_secs } if *retry_after_secs > 0 => {
                    Duration::from_secs(*retry_after_secs).min(retry.max_backoff)
                }
                _ => retry.backoff(retries),
            };
            warn!(
                error = %error,
                retry = retries,
                delay_ms = u64::try_from(delay.as_millis()).unwrap_or(u64::MAX),
                "Vault request failed, retrying"
            );
            tokio::time::sleep(delay).await;
        };

        let bytes = response.bytes().await?;
        serde_json::from_slice(&bytes).map_err(|e| {
            debug!(body_len = bytes.len(), "Undecodable vault response");
            Error::Serialization(e)
        })
    }

    async fn attempt<B: Serialize + Sync>(
        &self,
        method: Method,
        url: &str,
        query: &Query<'_>,
        body: Option<&B>,
    ) -> Result<Response> {
        let mut request = self
            .client
            .request(method, url)
            .header(ACCEPT, "application/json");

        if !query.is_empty() {
            request = request.query(query);
        }
        if let Some(body) = body {
            request = request.json(body);
        }

        let request = self.config.auth.authenticate(request).await?;
        Ok(request.send().await?)
    }
}

/// Decodes a non-success response, preferring the vault's error envelope.
async fn error_from_response(response: Response) -> Error {
    let status = response.status();
    let headers = response.headers().clone();
    let request_id = headers
        .get(REQUEST_ID_HEADER)
        .and_then(|v| v.to_str().ok())
        .map(String::from);

    let body = response.bytes().await.unwrap_or_default();
    let error = match serde_json::from_slice::<ApiError>(&body) {
        Ok(api_error) => api_error.into_error(status.as_u16(), request_id),
        Err(_) => {
            let message = if body.is_empty() {
                status
                    .canonical_reason()
                    .unwrap_or("Unknown error")
                    .to_string()
            } else {
                String::from_utf8_lossy(&body).into_owned()
            };
            status_error(status, message, request_id)
        }
    };

    match error {
        Error::RateLimited { .. } => Error::RateLimited {
            retry_after_secs: retry_after(&headers).unwrap_or(0),
        },
        other => other,
    }
}

fn status_error(status: StatusCode, message: String, request_id: Option<String>) -> Error {
    match status {
        StatusCode::BAD_REQUEST => Error::bad_request(message),
        StatusCode::UNAUTHORIZED => Error::unauthorized(message),
        StatusCode::FORBIDDEN => Error::forbidden(message),
        StatusCode::NOT_FOUND => Error::not_found(message),
        StatusCode::CONFLICT => Error::conflict(message),
        StatusCode::TOO_MANY_REQUESTS => Error::RateLimited {
            retry_after_secs: 0,
        },
        StatusCode::SERVICE_UNAVAILABLE => Error::ServiceUnavailable { message },
        _ => Error::server_error(message, request_id),
    }
}

/// Seconds form of `Retry-After`; HTTP dates are ignored.
fn retry_after(headers: &HeaderMap) -> Option<u64> {
    headers
        .get(RETRY_AFTER)?
        .to_str()
        .ok()?
        .trim()
        .parse()
        .ok()
}

impl std::fmt::Debug for HttpClient {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.debug_struct("HttpClient")
            .field("vault_url", &self.config.vault_url)
            .field("vault_id", &self.config.vault_id)
            .finish_non_exhaustive()
    }
}
