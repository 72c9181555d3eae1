//! Seam between resolvers and the vault client.

use async_trait::async_trait;
use vault_sdk::error::Result;
use vault_sdk::{
    DetokenizeRequest, DetokenizeResponse, GetOptions, GetRequest, GetResponse, InsertOptions,
    InsertRequest, InsertResponse, VaultClient,
};

/// Vault operations the gateway needs (allows mocking).
#[async_trait]
pub trait VaultAccess: Send + Sync {
    /// Bulk get of records.
    async fn get(&self, request: GetRequest, options: GetOptions) -> Result<GetResponse>;

    /// Resolves tokens to values.
    async fn detokenize(&self, request: DetokenizeRequest) -> Result<DetokenizeResponse>;

    /// Inserts records.
    async fn insert(&self, request: InsertRequest, options: InsertOptions)
        -> Result<InsertResponse>;

    /// Whether calls can currently be authenticated.
    async fn ready(&self) -> Result<()> {
        Ok(())
    }
}

#[async_trait]
impl VaultAccess for VaultClient {
    async fn get(&self, request: GetRequest, options: GetOptions) -> Result<GetResponse> {
        VaultClient::get(self, &request, options).await
    }

    async fn detokenize(&self, request: DetokenizeRequest) -> Result<DetokenizeResponse> {
        VaultClient::detokenize(self, &request).await
    }

    async fn insert(
        &self,
        request: InsertRequest,
        options: InsertOptions,
    ) -> Result<InsertResponse> {
        VaultClient::insert(self, &request, options).await
    }

    async fn ready(&self) -> Result<()> {
        self.check_credentials().await
    }
}
