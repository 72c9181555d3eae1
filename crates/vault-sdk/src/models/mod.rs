//! Data models for the vault SDK.
//!
//! Request types mirror the shape callers build; response types are what
//! the SDK hands back after unwrapping the vault's wire format.

mod common;
mod records;
mod tokens;

pub use common::*;
pub use records::*;
pub use tokens::*;
