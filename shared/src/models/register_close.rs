//! Register Close Model (レジ締め)

use serde::{Deserialize, Serialize};

/// End-of-day register close-out — one record per (store, calendar date).
///
/// Recorded independently of the transaction log, so the two sources can and
/// do disagree; the analytics engine reconciles them. Uniqueness per
/// (store, date) is enforced by the storage layer, not re-checked here.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct RegisterCloseSummary {
    pub id: Option<String>,
    /// Calendar date (`YYYY-MM-DD`)
    pub date: String,
    /// Store reference
    pub store_id: i64,
    /// Number of customer groups served
    pub groups_count: i64,
    pub customer_count: i64,
    // -- Gender breakdown as entered at the register --
    pub male_count: i64,
    pub female_count: i64,
    pub unspecified_count: i64,
    pub total_sales: f64,
    pub net_sales: f64,
    // -- Payment method amounts --
    pub cash_amount: f64,
    pub credit_amount: f64,
    pub point_amount: f64,
    pub electronic_money_amount: f64,
}

/// Create register close payload
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct RegisterCloseSummaryCreate {
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
