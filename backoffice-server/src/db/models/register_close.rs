//! Register Close Row Model

use serde::{Deserialize, Serialize};
use surrealdb::RecordId;

use shared::models::RegisterCloseSummary;

/// Row shape for the `register_close` table.
///
/// One row per (store, date); the repository rejects duplicates on create.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct RegisterCloseRow {
    pub id: Option<RecordId>,
    /// Calendar date (`YYYY-MM-DD`)
    pub date: String,
    pub store_id: i64,
    pub groups_count: i64,
    pub customer_count: i64,
    pub male_count: i64,
    pub female_count: i64,
    pub unspecified_count: i64,
    pub total_sales: f64,
    pub net_sales: f64,
    pub cash_amount: f64,
    pub credit_amount: f64,
    pub point_amount: f64,
    pub electronic_money_amount: f64,
}

impl From<RegisterCloseRow> for RegisterCloseSummary {
    fn from(row: RegisterCloseRow) -> Self {
        RegisterCloseSummary {
            id: row.id.map(|id| id.to_string()),
            date: row.date,
            store_id: row.store_id,
            groups_count: row.groups_count,
            customer_count: row.customer_count,
            male_count: row.male_count,
            female_count: row.female_count,
            unspecified_count: row.unspecified_count,
            total_sales: row.total_sales,
            net_sales: row.net_sales,
            cash_amount: row.cash_amount,
            credit_amount: row.credit_amount,
            point_amount: row.point_amount,
            electronic_money_amount: row.electronic_money_amount,
        }
    }
}
