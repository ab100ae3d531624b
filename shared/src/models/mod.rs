//! Data models
//!
//! Shared between the back-office server and dashboard clients (via API).
//! All record dates are canonical `YYYY-MM-DD` strings in the business
//! timezone; lexicographic order on them equals chronological order.

pub mod analytics;
pub mod register_close;
pub mod transaction_line;

// Re-exports
pub use analytics::*;
pub use register_close::*;
pub use transaction_line::*;
