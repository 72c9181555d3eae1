//! Application state.

use std::sync::Arc;

use crate::access::VaultAccess;
use crate::adapter::VaultAdapter;
use crate::schema::{build_schema, VaultSchema};

/// State shared by every handler.
#[derive(Clone)]
pub struct AppState {
    /// Executable schema; resolvers reach the vault through its adapter.
    pub schema: VaultSchema,
    /// Vault handle used by the health probes.
    pub vault: Arc<dyn VaultAccess>,
    /// HTTP surface settings.
    pub config: AppConfig,
}

/// HTTP surface settings.
#[derive(Debug, Clone)]
pub struct AppConfig {
    /// Name reported by `/health`.
    pub service_name: String,
    /// Serve GraphiQL on `GET /`.
    pub graphiql: bool,
    /// Allowed CORS origins; `*` allows any.
    pub cors_origins: Vec<String>,
}

impl Default for AppConfig {
    fn default() -> Self {
        Self {
            service_name: "vault-graphql-gateway".to_string(),
            graphiql: true,
            cors_origins: vec!["*".to_string()],
        }
    }
}

impl AppState {
    /// Builds the schema over `vault`.
    pub fn new(vault: Arc<dyn VaultAccess>, config: AppConfig) -> Self {
        Self {
            schema: build_schema(VaultAdapter::new(Arc::clone(&vault))),
            vault,
            config,
        }
    }
}
