//! Vault API client implementation.

mod builder;
mod config;
mod http;
mod services;

pub use builder::VaultClientBuilder;
pub use config::{RetryConfig, VaultConfig};
pub use services::{RecordsService, TokensService};

use std::sync::Arc;

use crate::error::Result;
use crate::models::{
    DetokenizeRequest, DetokenizeResponse, GetOptions, GetRequest, GetResponse, InsertOptions,
    InsertRequest, InsertResponse,
};

use self::http::HttpClient;

/// Client for a single tokenization vault.
///
/// Cheap to clone; clones share the connection pool and token provider.
///
/// # Example
///
/// ```rust,no_run
/// use vault_sdk::{DetokenizeRequest, VaultClient};
///
/// #[tokio::main]
/// async fn main() -> Result<(), vault_sdk::Error> {
///     let client = VaultClient::builder()
///         .vault_url("https://abc.vault.example.com")
///         .vault_id("dd32a450f74540b59d58f1a06370801d")
///         .bearer_token("eyJ...")
///         .build()?;
///
///     let response = client
///         .detokenize(&DetokenizeRequest::from_tokens(["4017-5ab1-..."]))
///         .await?;
///     for record in response.records {
///         println!("{}", record.value);
///     }
///
///     Ok(())
/// }
/// ```
#[derive(Clone)]
pub struct VaultClient {
    http: Arc<HttpClient>,
    config: Arc<VaultConfig>,
}

impl VaultClient {
    /// Creates a new client builder.
    #[must_use]
    pub fn builder() -> VaultClientBuilder {
        VaultClientBuilder::new()
    }

    /// Creates a new client from configuration.
    pub fn new(config: VaultConfig) -> Result<Self> {
        let http = HttpClient::new(&config)?;
        Ok(Self {
            http: Arc::new(http),
            config: Arc::new(config),
        })
    }

    /// Returns the current configuration.
    #[must_use]
    pub fn config(&self) -> &VaultConfig {
        &self.config
    }

    /// Returns the vault URL.
    #[must_use]
    pub fn vault_url(&self) -> &str {
        &self.config.vault_url
    }

    /// Returns the vault identifier.
    #[must_use]
    pub fn vault_id(&self) -> &str {
        &self.config.vault_id
    }

    /// Verifies a bearer token can be obtained, without calling the vault.
    ///
    /// # Errors
    ///
    /// Returns the token provider's error.
    pub async fn check_credentials(&self) -> Result<()> {
        self.config.auth.check().await
    }

    /// Returns the records service.
    #[must_use]
    pub fn records(&self) -> RecordsService {
        RecordsService::new(Arc::clone(&self.http))
    }

    /// Returns the detokenization service.
    #[must_use]
    pub fn tokens(&self) -> TokensService {
        TokensService::new(Arc::clone(&self.http))
    }

    /// Fetches records by id. See [`RecordsService::get`].
    pub async fn get(&self, request: &GetRequest, options: GetOptions) -> Result<GetResponse> {
        self.records().get(request, options).await
    }

    /// Resolves tokens. See [`TokensService::detokenize`].
    pub async fn detokenize(&self, request: &DetokenizeRequest) -> Result<DetokenizeResponse> {
        self.tokens().detokenize(request).await
    }

    /// Inserts records. See [`RecordsService::insert`].
    pub async fn insert(
        &self,
        request: &InsertRequest,
        options: InsertOptions,
    ) -> Result<InsertResponse> {
        self.records().insert(request, options).await
    }
}

impl std::fmt::Debug for VaultClient {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.debug_struct("VaultClient")
            .field("vault_url", &self.config.vault_url)
            .field("vault_id", &self.config.vault_id)
            .finish_non_exhaustive()
    }
}
