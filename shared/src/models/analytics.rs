//! Analytics Report Models
//!
//! Response shapes for the sales analytics endpoint. Built fresh per request
//! by the server's analytics engine and discarded after serialization —
//! nothing here is ever persisted.
//!
//! Monetary fields are integer currency units (rounded once, at assembly);
//! percentages stay `f64` and are rounded only for display by clients.

use serde::{Deserialize, Serialize};

/// One entry of a ranked composition breakdown (per product or per category)
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct CompositionEntry {
    pub name: String,
    pub sales: i64,
    /// Share of the source total in percent (0.0 when the total is 0)
    pub percentage: f64,
}

/// One day of the daily sales series
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct DailySalesPoint {
    /// Calendar date (`YYYY-MM-DD`)
    pub date: String,
    pub sales: i64,
}

/// Payment method totals summed across register closes
#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct PaymentMethodTotals {
    pub cash: i64,
    pub credit: i64,
    pub point: i64,
    pub electronic_money: i64,
}

/// Register-close side of the report: counts, demographics, payments
#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct RegisterCloseTotals {
    pub total_customers: i64,
    pub total_sales: i64,
    pub average_customer_value: i64,
    pub male_count: i64,
    pub female_count: i64,
    pub unspecified_count: i64,
    pub payment_methods: PaymentMethodTotals,
}

/// Customer-count disagreement between the two record sources.
///
/// The headline numbers hide disagreement behind the max() reconciliation
/// policy; this view keeps it visible to downstream consumers.
#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct CustomerCountComparison {
    /// Distinct visit days derived from transaction lines
    pub sales_record_customers: i64,
    /// Sum of customer counts across register closes
    pub register_close_customers: i64,
    /// register_close_customers - sales_record_customers
    pub difference: i64,
}

/// Headline metrics as integer currency / counts
#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct MetricTotals {
    pub total_customers: i64,
    pub total_sales: i64,
    pub average_customer_value: i64,
}

/// Headline metric deltas in percent (unclamped, 0.0 when previous was 0)
#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct MetricPercents {
    pub total_customers: f64,
    pub total_sales: f64,
    pub average_customer_value: f64,
}

/// Period-over-period comparison block.
///
/// Omitted from the report entirely when the caller supplied an explicit
/// start/end range, since no previous period is defined then.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct PeriodComparison {
    /// "day-over-day" | "week-over-week" | "month-over-month" | "year-over-year",
    /// derived from the period kind only
    pub label: String,
    pub prev: MetricTotals,
    pub diff: MetricTotals,
    pub percent: MetricPercents,
}

/// Full analytics report returned by `GET /api/analytics/sales`
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct AnalyticsReport {
    pub total_customers: i64,
    pub average_customer_value: i64,
    pub total_sales: i64,
    /// Placeholder constant, always 100. Not a computed value; kept explicit
    /// until a real purchase-rate definition lands upstream.
    pub purchase_rate: i64,
    /// Per-product sales share, sorted descending by sales (stable on ties)
    pub product_composition: Vec<CompositionEntry>,
    /// Per-day sales, sorted ascending by date
    pub daily_sales: Vec<DailySalesPoint>,
    /// Per-category sales share, sorted descending by sales
    pub category_sales: Vec<CompositionEntry>,
    pub register_close_summary: RegisterCloseTotals,
    pub comparison: CustomerCountComparison,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub comparison_detail: Option<PeriodComparison>,
}

impl AnalyticsReport {
    /// Canonical zeroed report, returned verbatim when both record sources
    /// are empty for the requested period (the arithmetic paths would
    /// otherwise divide by zero).
    pub fn empty() -> Self {
        Self {
            total_customers: 0,
            average_customer_value: 0,
            total_sales: 0,
            purchase_rate: PURCHASE_RATE_PLACEHOLDER,
            product_composition: Vec::new(),
            daily_sales: Vec::new(),
            category_sales: Vec::new(),
            register_close_summary: RegisterCloseTotals::default(),
            comparison: CustomerCountComparison::default(),
            comparison_detail: None,
        }
    }
}

/// `purchaseRate` placeholder value (see [`AnalyticsReport::purchase_rate`])
pub const PURCHASE_RATE_PLACEHOLDER: i64 = 100;
