//! Source Reconciler
//!
//! Derives an independent customer-count/sales-total view from each of the
//! two record sources, then merges them into one authoritative figure per
//! metric. Sums run in `Decimal` and are rounded to integer currency only
//! at the edge, matching the platform's money-precision convention.

use std::collections::BTreeSet;

use rust_decimal::prelude::*;

use shared::models::{
    CustomerCountComparison, MetricTotals, PaymentMethodTotals, RegisterCloseSummary,
    RegisterCloseTotals, TransactionLine,
};

/// Lossless-enough f64 → Decimal conversion for recorded amounts
pub(crate) fn to_decimal(value: f64) -> Decimal {
    Decimal::from_f64_retain(value).unwrap_or(Decimal::ZERO)
}

/// Round to whole currency units, half away from zero
pub(crate) fn round_currency(value: Decimal) -> i64 {
    value
        .round_dp_with_strategy(0, RoundingStrategy::MidpointAwayFromZero)
        .to_i64()
        .unwrap_or(0)
}

/// Per-source customer/sales view, before reconciliation
#[derive(Debug, Clone, PartialEq)]
pub struct SourceMetrics {
    pub total_customers: i64,
    pub total_sales: Decimal,
}

impl SourceMetrics {
    /// Transaction-line view: one visit day per distinct calendar date
    /// (several lines on the same day count once), sales summed per line.
    pub fn from_lines(lines: &[TransactionLine]) -> Self {
        let visit_days: BTreeSet<&str> = lines.iter().map(|l| l.date.as_str()).collect();
        let total_sales = lines
            .iter()
            .map(|l| to_decimal(l.sales_amount))
            .sum::<Decimal>();

        Self {
            total_customers: visit_days.len() as i64,
            total_sales,
        }
    }

    /// Register-close view: customer counts and sales totals as entered at
    /// the register, summed across close-outs.
    pub fn from_closes(closes: &[RegisterCloseSummary]) -> Self {
        let total_customers = closes.iter().map(|c| c.customer_count).sum();
        let total_sales = closes
            .iter()
            .map(|c| to_decimal(c.total_sales))
            .sum::<Decimal>();

        Self {
            total_customers,
            total_sales,
        }
    }
}

/// Merge the two per-source views into the headline metrics.
///
/// Either source may under-report when data entry lags, so the authoritative
/// figure per metric is the max of the two. The average customer value is
/// recomputed from the reconciled totals — averaging the per-source averages
/// would weight them wrongly.
pub fn reconcile(lines: &SourceMetrics, closes: &SourceMetrics) -> MetricTotals {
    let total_customers = lines.total_customers.max(closes.total_customers);
    let total_sales = lines.total_sales.max(closes.total_sales);

    let average_customer_value = if total_customers > 0 {
        round_currency(total_sales / Decimal::from(total_customers))
    } else {
        0
    };

    MetricTotals {
        total_customers,
        total_sales: round_currency(total_sales),
        average_customer_value,
    }
}

/// Customer-count disagreement view. The max() policy above hides which
/// source won; this keeps the raw counts and their difference visible.
pub fn customer_count_comparison(
    lines: &SourceMetrics,
    closes: &SourceMetrics,
) -> CustomerCountComparison {
    CustomerCountComparison {
        sales_record_customers: lines.total_customers,
        register_close_customers: closes.total_customers,
        difference: closes.total_customers - lines.total_customers,
    }
}

/// Register-close block of the report: totals, demographics, payment methods
pub fn register_close_totals(closes: &[RegisterCloseSummary]) -> RegisterCloseTotals {
    let total_customers: i64 = closes.iter().map(|c| c.customer_count).sum();
    let total_sales = closes
        .iter()
        .map(|c| to_decimal(c.total_sales))
        .sum::<Decimal>();

    let average_customer_value = if total_customers > 0 {
        round_currency(total_sales / Decimal::from(total_customers))
    } else {
        0
    };

    let sum_amount = |f: fn(&RegisterCloseSummary) -> f64| -> i64 {
        round_currency(closes.iter().map(|c| to_decimal(f(c))).sum::<Decimal>())
    };

    RegisterCloseTotals {
        total_customers,
        total_sales: round_currency(total_sales),
        average_customer_value,
        male_count: closes.iter().map(|c| c.male_count).sum(),
        female_count: closes.iter().map(|c| c.female_count).sum(),
        unspecified_count: closes.iter().map(|c| c.unspecified_count).sum(),
        payment_methods: PaymentMethodTotals {
            cash: sum_amount(|c| c.cash_amount),
            credit: sum_amount(|c| c.credit_amount),
            point: sum_amount(|c| c.point_amount),
            electronic_money: sum_amount(|c| c.electronic_money_amount),
        },
    }
}
