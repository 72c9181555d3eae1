//! # Vault SDK
//!
//! Async Rust client for a tokenization vault: bulk record reads with a
//! chosen redaction, token resolution, and record inserts.
//!
//! ## Quick Start
//!
//! ```rust,no_run
//! use vault_sdk::{GetOptions, GetRecordGroup, GetRequest, RedactionType, VaultClient};
//!
//! #[tokio::main]
//! async fn main() -> Result<(), vault_sdk::Error> {
//!     let client = VaultClient::builder()
//!         .vault_url("https://abc.vault.example.com")
//!         .vault_id("dd32a450f74540b59d58f1a06370801d")
//!         .bearer_token("eyJ...")
//!         .build()?;
//!
//!     let request = GetRequest {
//!         records: vec![GetRecordGroup::new("persons")
//!             .with_ids(vec!["f8d2".into()])
//!             .with_redaction(RedactionType::PlainText)],
//!     };
//!     let response = client.get(&request, GetOptions { tokens: false }).await?;
//!
//!     for record in response.records {
//!         println!("{}: {:?}", record.table, record.field_text("name"));
//!     }
//!
//!     Ok(())
//! }
//! ```
//!
//! ## Authentication
//!
//! Bearer tokens come from a [`BearerTokenProvider`](auth::BearerTokenProvider).
//! The SDK ships a fixed token, an environment variable reader, an async
//! closure adapter, and a caching wrapper:
//!
//! ```rust,no_run
//! # use std::{sync::Arc, time::Duration};
//! use vault_sdk::auth::{CachedTokenProvider, EnvTokenProvider};
//! # use vault_sdk::VaultClient;
//!
//! let provider = CachedTokenProvider::new(
//!     Arc::new(EnvTokenProvider::new("VAULT_API_KEY")),
//!     Duration::from_secs(3000),
//! );
//! let client = VaultClient::builder()
//!     .vault_url("https://abc.vault.example.com")
//!     .vault_id("dd32a450f74540b59d58f1a06370801d")
//!     .token_provider(provider)
//!     .build()?;
//! # Ok::<(), vault_sdk::Error>(())
//! ```

#![forbid(unsafe_code)]
#![warn(missing_docs)]
#![warn(clippy::all)]
#![warn(clippy::pedantic)]
#![allow(clippy::module_name_repetitions)]

pub mod auth;
pub mod client;
pub mod error;
pub mod models;

pub use client::{RetryConfig, VaultClient, VaultClientBuilder, VaultConfig};
pub use error::Error;

pub use models::{
    DetokenizeRecord, DetokenizeRequest, DetokenizeResponse, DetokenizedRecord, FieldMap,
    GetOptions, GetRecordGroup, GetRequest, GetResponse, InsertOptions, InsertRecord,
    InsertRequest, InsertResponse, InsertedRecord, RecordResponse, RedactionType,
};

/// User agent string for API requests
pub const USER_AGENT: &str = concat!("vault-sdk-rust/", env!("CARGO_PKG_VERSION"));
