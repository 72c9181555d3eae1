//! Integration test modules.

pub mod http;
pub mod resolvers;
pub mod vault;
