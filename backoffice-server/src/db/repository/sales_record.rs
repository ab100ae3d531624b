//! Sales Record Source
//!
//! Bundles the two raw-record repositories behind the analytics engine's
//! [`SalesRecordSource`] port, so the engine only ever sees boundary-scoped
//! fetches and can be unit tested against in-memory fixtures.

use surrealdb::Surreal;
use surrealdb::engine::local::Db;

use super::{RegisterCloseRepository, RepoResult, TransactionLineRepository};
use crate::analytics::{PeriodBoundary, SalesRecordSource};
use shared::models::{RegisterCloseSummary, TransactionLine};

#[derive(Clone)]
pub struct SalesRecordRepository {
    lines: TransactionLineRepository,
    closes: RegisterCloseRepository,
}

impl SalesRecordRepository {
    pub fn new(db: Surreal<Db>) -> Self {
        Self {
            lines: TransactionLineRepository::new(db.clone()),
            closes: RegisterCloseRepository::new(db),
        }
    }
}

impl SalesRecordSource for SalesRecordRepository {
    async fn fetch_transaction_lines(
        &self,
        boundary: &PeriodBoundary,
        store_id: Option<i64>,
    ) -> RepoResult<Vec<TransactionLine>> {
        self.lines
            .find_in_range(&boundary.start_string(), &boundary.end_string(), store_id)
            .await
    }

    async fn fetch_register_closes(
        &self,
        boundary: &PeriodBoundary,
        store_id: Option<i64>,
    ) -> RepoResult<Vec<RegisterCloseSummary>> {
        self.closes
            .find_in_range(&boundary.start_string(), &boundary.end_string(), store_id)
            .await
    }
}
