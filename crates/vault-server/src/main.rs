//! Vault GraphQL Gateway
//!
//! Serves the GraphQL API in front of the tokenization vault.

mod config;
mod telemetry;

use std::net::SocketAddr;
use std::sync::Arc;
use std::time::Duration;

use anyhow::{Context, Result};
use secrecy::ExposeSecret;
use tokio::signal;
use tracing::{info, warn};

use vault_graphql::{create_router, handlers::health::init_start_time, AppConfig, AppState};
use vault_sdk::auth::{
    BearerTokenProvider, CachedTokenProvider, EnvTokenProvider, StaticTokenProvider,
};
use vault_sdk::VaultClient;

use crate::config::{ServerConfig, VaultSettings};
use crate::telemetry::init_telemetry;

#[tokio::main]
async fn main() -> Result<()> {
    dotenvy::dotenv().ok();

    let config = ServerConfig::load().context("Failed to load configuration")?;

    init_telemetry(&config.telemetry)?;

    info!(
        version = env!("CARGO_PKG_VERSION"),
        vault_id = %config.vault.vault_id,
        "Starting Vault GraphQL Gateway"
    );

    init_start_time();

    let state = build_app_state(&config)?;
    let app = create_router(state);

    let addr: SocketAddr = format!("{}:{}", config.host, config.port)
        .parse()
        .context("Invalid server address")?;

    info!(address = %addr, "Server listening");

    let listener = tokio::net::TcpListener::bind(addr).await?;

    axum::serve(listener, app)
        .with_graceful_shutdown(shutdown_signal())
        .await
        .context("Server error")?;

    info!("Server shut down gracefully");
    Ok(())
}

/// Builds the application state.
fn build_app_state(config: &ServerConfig) -> Result<Arc<AppState>> {
    let client = VaultClient::builder()
        .vault_url(&config.vault.vault_url)
        .vault_id(&config.vault.vault_id)
        .shared_token_provider(token_provider(&config.vault))
        .timeout_secs(config.vault.timeout_secs)
        .max_retries(config.vault.max_retries)
        .build()
        .context("Failed to build vault client")?;

    let state = AppState::new(
        Arc::new(client),
        AppConfig {
            service_name: config.service_name.clone(),
            graphiql: config.graphiql,
            cors_origins: config.cors_origins.clone(),
        },
    );

    Ok(Arc::new(state))
}

/// Chooses the bearer token source: a configured token, else the token
/// environment variable, optionally cached.
fn token_provider(settings: &VaultSettings) -> Arc<dyn BearerTokenProvider> {
    let provider: Arc<dyn BearerTokenProvider> = match &settings.bearer_token {
        Some(token) => Arc::new(StaticTokenProvider::new(token.expose_secret().clone())),
        None => {
            let env = EnvTokenProvider::new(&settings.token_env);
            if !env.is_set() {
                warn!(
                    var = %settings.token_env,
                    "Bearer token variable is not set; vault calls will fail"
                );
            }
            Arc::new(env)
        }
    };

    match settings.token_ttl_secs {
        Some(ttl) => Arc::new(CachedTokenProvider::new(provider, Duration::from_secs(ttl))),
        None => provider,
    }
}

/// Shutdown signal handler.
async fn shutdown_signal() {
    let ctrl_c = async {
        signal::ctrl_c()
            .await
            .expect("Failed to install Ctrl+C handler");
    };

    #[cfg(unix)]
    let terminate = async {
        signal::unix::signal(signal::unix::SignalKind::terminate())
            .expect("Failed to install SIGTERM handler")
            .recv()
            .await;
    };

    #[cfg(not(unix))]
    let terminate = std::future::pending::<()>();

    tokio::select! {
        _ = ctrl_c => {
            info!("Received Ctrl+C, shutting down");
        }
        _ = terminate => {
            info!("Received SIGTERM, shutting down");
        }
    }
}
