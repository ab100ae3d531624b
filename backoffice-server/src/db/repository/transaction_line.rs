//! Transaction Line Repository

use super::{BaseRepository, RepoError, RepoResult};
use crate::db::models::TransactionLineRow;
use shared::models::{TransactionLine, TransactionLineCreate};
use surrealdb::Surreal;
use surrealdb::engine::local::Db;

const TABLE: &str = "transaction_line";

#[derive(Clone)]
pub struct TransactionLineRepository {
    base: BaseRepository,
}

impl TransactionLineRepository {
    pub fn new(db: Surreal<Db>) -> Self {
        Self {
            base: BaseRepository::new(db),
        }
    }

    /// Find all lines with `start <= date <= end` (inclusive), optionally
    /// filtered to one store.
    ///
    /// Dates are canonical `YYYY-MM-DD` strings, so the string comparison
    /// below is a correct chronological range filter.
    pub async fn find_in_range(
        &self,
        start: &str,
        end: &str,
        store_id: Option<i64>,
    ) -> RepoResult<Vec<TransactionLine>> {
        let mut result = if let Some(store) = store_id {
            self.base
                .db()
                .query(
                    r#"
                    SELECT * FROM transaction_line
                    WHERE date >= $start AND date <= $end AND store_id = $store
                    ORDER BY date
                "#,
                )
                .bind(("start", start.to_string()))
                .bind(("end", end.to_string()))
                .bind(("store", store))
                .await?
        } else {
            self.base
                .db()
                .query(
                    r#"
                    SELECT * FROM transaction_line
                    WHERE date >= $start AND date <= $end
                    ORDER BY date
                "#,
                )
                .bind(("start", start.to_string()))
                .bind(("end", end.to_string()))
                .await?
        };

        let rows: Vec<TransactionLineRow> = result.take(0)?;
        Ok(rows.into_iter().map(Into::into).collect())
    }

    /// Create a new transaction line (import jobs and test fixtures)
    pub async fn create(&self, data: TransactionLineCreate) -> RepoResult<TransactionLine> {
        if data.sales_amount < 0.0 || !data.sales_amount.is_finite() {
            return Err(RepoError::Validation(format!(
                "sales_amount must be a non-negative finite number, got {}",
                data.sales_amount
            )));
        }

        let row = TransactionLineRow {
            id: None,
            date: data.date,
            store_id: data.store_id,
            product_name: data.product_name,
            category_name: data.category_name,
            quantity: data.quantity,
            unit_price: data.unit_price,
            sales_amount: data.sales_amount,
        };

        let created: Option<TransactionLineRow> =
            self.base.db().create(TABLE).content(row).await?;
        created
            .map(Into::into)
            .ok_or_else(|| RepoError::Database("Failed to create transaction line".to_string()))
    }
}
