//! GraphQL gateway in front of a tokenization vault.
//!
//! This crate provides:
//! - The schema (`Record`, `Token`, `Fields`, `User`) and its resolvers
//! - The query adapter that shapes vault payloads
//! - An Axum router serving GraphQL, GraphiQL and health probes

pub mod access;
pub mod adapter;
pub mod handlers;
pub mod middleware;
pub mod routes;
pub mod schema;
pub mod state;
pub mod types;

pub use access::VaultAccess;
pub use adapter::VaultAdapter;
pub use routes::create_router;
pub use schema::{build_schema, VaultSchema};
pub use state::{AppConfig, AppState};
