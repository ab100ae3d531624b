//! Transaction Line Row Model

use serde::{Deserialize, Serialize};
use surrealdb::RecordId;

use shared::models::TransactionLine;

/// Row shape for the `transaction_line` table
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct TransactionLineRow {
    pub id: Option<RecordId>,
    /// Calendar date (`YYYY-MM-DD`) — range queries rely on lexicographic order
    pub date: String,
    pub store_id: i64,
    pub product_name: String,
    pub category_name: Option<String>,
    pub quantity: i32,
    pub unit_price: f64,
    pub sales_amount: f64,
}

impl From<TransactionLineRow> for TransactionLine {
    fn from(row: TransactionLineRow) -> Self {
        TransactionLine {
            id: row.id.map(|id| id.to_string()),
            date: row.date,
            store_id: row.store_id,
            product_name: row.product_name,
            category_name: row.category_name,
            quantity: row.quantity,
            unit_price: row.unit_price,
            sales_amount: row.sales_amount,
        }
    }
}
