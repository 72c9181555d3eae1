//! API service implementations.

mod records;
mod tokens;

pub use records::RecordsService;
pub use tokens::TokensService;
