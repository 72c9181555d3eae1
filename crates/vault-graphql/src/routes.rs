//! HTTP routes.

use std::sync::Arc;

use axum::{
    middleware,
    routing::{get, post, MethodRouter},
    Router,
};
use tower_http::compression::CompressionLayer;

use crate::{
    handlers::{graphql, health},
    middleware::{cors::cors_layer_for, logging::logging_layer},
    state::AppState,
};

/// Creates the gateway router.
///
/// `POST /` executes GraphQL; `GET /` serves GraphiQL when enabled.
pub fn create_router(state: Arc<AppState>) -> Router {
    let cors = cors_layer_for(&state.config.cors_origins);

    Router::new()
        .route("/", graphql_route(state.config.graphiql))
        .nest("/health", health_routes())
        .layer(CompressionLayer::new())
        .layer(cors)
        .layer(middleware::from_fn(logging_layer))
        .with_state(state)
}

fn graphql_route(graphiql: bool) -> MethodRouter<Arc<AppState>> {
    let route = post(graphql::graphql_handler);
    if graphiql {
        route.get(graphql::graphiql_handler)
    } else {
        route
    }
}

/// Health routes.
fn health_routes() -> Router<Arc<AppState>> {
    Router::new()
        .route("/", get(health::health_handler))
        .route("/live", get(health::liveness_handler))
        .route("/ready", get(health::readiness_handler))
        .route("/version", get(health::version_handler))
}
