//! Shared types for the back-office platform
//!
//! Common types used across the server and API clients: raw sales record
//! models and analytics report shapes.

pub mod models;

// Re-exports
pub use serde::{Deserialize, Serialize};
