//! Transaction Line Model

use serde::{Deserialize, Serialize};

/// One sold-product record from the point-of-sale transaction log.
///
/// Multiple lines may share a calendar date (several products sold the same
/// day) and a date may have no lines at all. `sales_amount` is the recorded
/// line total, non-negative by storage-layer invariant.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct TransactionLine {
    pub id: Option<String>,
    /// Calendar date (`YYYY-MM-DD`), no time component
    pub date: String,
    /// Store reference
    pub store_id: i64,
    pub product_name: String,
    /// Category reference (nullable — uncategorized products exist)
    pub category_name: Option<String>,
    pub quantity: i32,
    pub unit_price: f64,
    /// Line total as recorded at sale time
    pub sales_amount: f64,
}

/// Create transaction line payload (CSV import / fixtures)
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct TransactionLineCreate {
    pub date: String,
    pub store_id: i64,
    pub product_name: String,
    pub category_name: Option<String>,
    pub quantity: i32,
    pub unit_price: f64,
    pub sales_amount: f64,
}
