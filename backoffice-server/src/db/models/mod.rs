//! Database row models
//!
//! SurrealDB row shapes for the two raw record tables. These mirror the
//! API-facing types in `shared::models` but carry the native `RecordId`;
//! conversions to the shared shapes happen at the repository boundary.

pub mod register_close;
pub mod transaction_line;

pub use register_close::RegisterCloseRow;
pub use transaction_line::TransactionLineRow;
