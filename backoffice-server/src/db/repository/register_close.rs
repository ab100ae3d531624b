//! Register Close Repository

use super::{BaseRepository, RepoError, RepoResult};
use crate::db::models::RegisterCloseRow;
use shared::models::{RegisterCloseSummary, RegisterCloseSummaryCreate};
use surrealdb::Surreal;
use surrealdb::engine::local::Db;

const TABLE: &str = "register_close";

#[derive(Clone)]
pub struct RegisterCloseRepository {
    base: BaseRepository,
}

impl RegisterCloseRepository {
    pub fn new(db: Surreal<Db>) -> Self {
        Self {
            base: BaseRepository::new(db),
        }
    }

    /// Find all register closes with `start <= date <= end` (inclusive),
    /// optionally filtered to one store. Dates are canonical `YYYY-MM-DD`
    /// strings (see [`TransactionLineRepository::find_in_range`]).
    ///
    /// [`TransactionLineRepository::find_in_range`]: super::TransactionLineRepository::find_in_range
    pub async fn find_in_range(
        &self,
        start: &str,
        end: &str,
        store_id: Option<i64>,
    ) -> RepoResult<Vec<RegisterCloseSummary>> {
        let mut result = if let Some(store) = store_id {
            self.base
                .db()
                .query(
                    r#"
                    SELECT * FROM register_close
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
                    SELECT * FROM register_close
                    WHERE date >= $start AND date <= $end
                    ORDER BY date
                "#,
                )
                .bind(("start", start.to_string()))
                .bind(("end", end.to_string()))
                .await?
        };

        let rows: Vec<RegisterCloseRow> = result.take(0)?;
        Ok(rows.into_iter().map(Into::into).collect())
    }

    /// Find the close-out for one (store, date) pair
    pub async fn find_by_store_and_date(
        &self,
        store_id: i64,
        date: &str,
    ) -> RepoResult<Option<RegisterCloseSummary>> {
        let mut result = self
            .base
            .db()
            .query("SELECT * FROM register_close WHERE store_id = $store AND date = $date LIMIT 1")
            .bind(("store", store_id))
            .bind(("date", date.to_string()))
            .await?;

        let rows: Vec<RegisterCloseRow> = result.take(0)?;
        Ok(rows.into_iter().next().map(Into::into))
    }

    /// Create a register close-out. At most one per (store, date).
    pub async fn create(&self, data: RegisterCloseSummaryCreate) -> RepoResult<RegisterCloseSummary> {
        if self
            .find_by_store_and_date(data.store_id, &data.date)
            .await?
            .is_some()
        {
            return Err(RepoError::Duplicate(format!(
                "Register close for store {} on {} already exists",
                data.store_id, data.date
            )));
        }

        let row = RegisterCloseRow {
            id: None,
            date: data.date,
            store_id: data.store_id,
            groups_count: data.groups_count,
            customer_count: data.customer_count,
            male_count: data.male_count,
            female_count: data.female_count,
            unspecified_count: data.unspecified_count,
            total_sales: data.total_sales,
            net_sales: data.net_sales,
            cash_amount: data.cash_amount,
            credit_amount: data.credit_amount,
            point_amount: data.point_amount,
            electronic_money_amount: data.electronic_money_amount,
        };

        let created: Option<RegisterCloseRow> = self.base.db().create(TABLE).content(row).await?;
        created
            .map(Into::into)
            .ok_or_else(|| RepoError::Database("Failed to create register close".to_string()))
    }
}
