//! Health check handlers.

use std::sync::Arc;
use std::sync::OnceLock;
use std::time::Instant;

use axum::{
    extract::State,
    http::StatusCode,
    response::{IntoResponse, Response},
    Json,
};
use serde::Serialize;
use tracing::warn;

use crate::state::AppState;

/// Application start time for uptime calculation.
static START_TIME: OnceLock<Instant> = OnceLock::new();

/// Initializes the start time.
pub fn init_start_time() {
    START_TIME.get_or_init(Instant::now);
}

/// Returns the uptime in seconds.
pub fn uptime_seconds() -> u64 {
    START_TIME.get().map_or(0, |t| t.elapsed().as_secs())
}

/// Overall status.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize)]
#[serde(rename_all = "lowercase")]
pub enum HealthStatus {
    /// Vault calls can be authenticated.
    Healthy,
    /// No bearer token is available.
    Unhealthy,
}

/// Body of `GET /health`.
#[derive(Debug, Serialize)]
pub struct HealthResponse {
    /// Overall status.
    pub status: HealthStatus,
    /// Configured service name.
    pub service: String,
    /// Package version.
    pub version: &'static str,
    /// Seconds since start.
    pub uptime_seconds: u64,
    /// Why the gateway is unhealthy.
    #[serde(skip_serializing_if = "Option::is_none")]
    pub reason: Option<String>,
}

impl IntoResponse for HealthResponse {
    fn into_response(self) -> Response {
        let status = match self.status {
            HealthStatus::Healthy => StatusCode::OK,
            HealthStatus::Unhealthy => StatusCode::SERVICE_UNAVAILABLE,
        };

        (status, Json(self)).into_response()
    }
}

/// Health check handler.
pub async fn health_handler(State(state): State<Arc<AppState>>) -> HealthResponse {
    let (status, reason) = match state.vault.ready().await {
        Ok(()) => (HealthStatus::Healthy, None),
        Err(e) => (HealthStatus::Unhealthy, Some(e.to_string())),
    };

    HealthResponse {
        status,
        service: state.config.service_name.clone(),
        version: env!("CARGO_PKG_VERSION"),
        uptime_seconds: uptime_seconds(),
        reason,
    }
}

/// Liveness probe handler.
pub async fn liveness_handler() -> &'static str {
    "OK"
}

/// Readiness probe: ready once vault calls can be authenticated.
pub async fn readiness_handler(
    State(state): State<Arc<AppState>>,
) -> Result<&'static str, (StatusCode, String)> {
    state.vault.ready().await.map(|()| "OK").map_err(|e| {
        warn!(error = %e, "Not ready");
        (StatusCode::SERVICE_UNAVAILABLE, e.to_string())
    })
}

/// Version information response.
#[derive(Debug, Serialize)]
pub struct VersionInfo {
    /// Package name.
    pub name: &'static str,
    /// Version.
    pub version: &'static str,
    /// Git commit (if available).
    pub git_commit: Option<&'static str>,
}

/// Version handler.
pub async fn version_handler() -> Json<VersionInfo> {
    Json(VersionInfo {
        name: env!("CARGO_PKG_NAME"),
        version: env!("CARGO_PKG_VERSION"),
        git_commit: option_env!("GIT_COMMIT"),
    })
}
