//! Comparison Engine
//!
//! Period-over-period deltas for the headline metrics. Percentages are
//! unclamped — a quiet previous month followed by a busy one can legitimately
//! exceed +100% — and fall back to 0 when the previous value was 0.

use super::period::PeriodKind;
use shared::models::{MetricPercents, MetricTotals, PeriodComparison};

/// Percent delta, 0.0 when there is no previous value to compare against
fn percent_delta(diff: i64, previous: i64) -> f64 {
    if previous > 0 {
        diff as f64 / previous as f64 * 100.0
    } else {
        0.0
    }
}

/// Diff the current period's reconciled metrics against the previous
/// period's. The label comes from the period kind alone.
pub fn period_comparison(
    kind: PeriodKind,
    current: &MetricTotals,
    previous: &MetricTotals,
) -> PeriodComparison {
    let diff = MetricTotals {
        total_customers: current.total_customers - previous.total_customers,
        total_sales: current.total_sales - previous.total_sales,
        average_customer_value: current.average_customer_value - previous.average_customer_value,
    };

    let percent = MetricPercents {
        total_customers: percent_delta(diff.total_customers, previous.total_customers),
        total_sales: percent_delta(diff.total_sales, previous.total_sales),
        average_customer_value: percent_delta(
            diff.average_customer_value,
            previous.average_customer_value,
        ),
    };

    PeriodComparison {
        label: kind.comparison_label().to_string(),
        prev: previous.clone(),
        diff,
        percent,
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn totals(customers: i64, sales: i64, avg: i64) -> MetricTotals {
        MetricTotals {
            total_customers: customers,
            total_sales: sales,
            average_customer_value: avg,
        }
    }

    #[test]
    fn test_positive_growth() {
        let cmp = period_comparison(
            PeriodKind::Month,
            &totals(20, 3000, 150),
            &totals(10, 2000, 200),
        );
        assert_eq!(cmp.label, "month-over-month");
        assert_eq!(cmp.diff, totals(10, 1000, -50));
        assert_eq!(cmp.percent.total_customers, 100.0);
        assert_eq!(cmp.percent.total_sales, 50.0);
        assert_eq!(cmp.percent.average_customer_value, -25.0);
    }

    #[test]
    fn test_zero_previous_gives_zero_percent() {
        let cmp = period_comparison(PeriodKind::Day, &totals(5, 500, 100), &totals(0, 0, 0));
        assert_eq!(cmp.diff, totals(5, 500, 100));
        assert_eq!(cmp.percent.total_customers, 0.0);
        assert_eq!(cmp.percent.total_sales, 0.0);
        assert_eq!(cmp.percent.average_customer_value, 0.0);
    }

    #[test]
    fn test_percent_is_unclamped() {
        let cmp = period_comparison(PeriodKind::Week, &totals(30, 3000, 100), &totals(2, 200, 100));
        assert_eq!(cmp.percent.total_customers, 1400.0);
        assert_eq!(cmp.percent.total_sales, 1400.0);
    }

    #[test]
    fn test_negative_deltas_pass_through() {
        let cmp = period_comparison(PeriodKind::Year, &totals(0, 0, 0), &totals(10, 1000, 100));
        assert_eq!(cmp.diff, totals(-10, -1000, -100));
        assert_eq!(cmp.percent.total_customers, -100.0);
    }
}
