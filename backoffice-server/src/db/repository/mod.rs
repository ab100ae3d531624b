//! Repository Module
//!
//! Read access to the raw sales record tables. The analytics engine never
//! touches the database directly — it goes through the
//! [`SalesRecordSource`](crate::analytics::SalesRecordSource) trait, which
//! [`SalesRecordRepository`] implements on top of the per-table repositories.

pub mod register_close;
pub mod sales_record;
pub mod transaction_line;

// Re-exports
pub use register_close::RegisterCloseRepository;
pub use sales_record::SalesRecordRepository;
pub use transaction_line::TransactionLineRepository;

use surrealdb::Surreal;
use surrealdb::engine::local::Db;
use thiserror::Error;

/// Repository error types
#[derive(Debug, Error)]
pub enum RepoError {
    #[error("Not found: {0}")]
    NotFound(String),

    #[error("Duplicate: {0}")]
    Duplicate(String),

    #[error("Database error: {0}")]
    Database(String),

    #[error("Validation error: {0}")]
    Validation(String),
}

impl From<surrealdb::Error> for RepoError {
    fn from(err: surrealdb::Error) -> Self {
        RepoError::Database(err.to_string())
    }
}

/// Result type for repository operations
pub type RepoResult<T> = Result<T, RepoError>;

/// Base repository with database reference
#[derive(Clone)]
pub struct BaseRepository {
    db: Surreal<Db>,
}

impl BaseRepository {
    pub fn new(db: Surreal<Db>) -> Self {
        Self { db }
    }

    pub fn db(&self) -> &Surreal<Db> {
        &self.db
    }
}
