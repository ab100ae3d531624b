//! Composition Aggregator
//!
//! Ranked breakdowns over the current period's transaction lines: sales
//! share per product, sales per day, sales share per category. Grouping is
//! exact string equality on names — upstream import jobs normalize names,
//! nothing is case-folded or trimmed here.

use std::collections::HashMap;

use rust_decimal::prelude::*;

use super::reconcile::{round_currency, to_decimal};
use shared::models::{CompositionEntry, DailySalesPoint, TransactionLine};

/// Bucket label for lines whose product has no category
pub const UNCATEGORIZED: &str = "uncategorized";

/// Group-and-sum preserving first-encounter order of keys.
///
/// The stable order matters: composition entries with equal sales keep the
/// order their groups were first seen in, and tests rely on that.
fn group_sums<F>(lines: &[TransactionLine], key_fn: F) -> Vec<(String, Decimal)>
where
    F: Fn(&TransactionLine) -> String,
{
    let mut order: Vec<String> = Vec::new();
    let mut sums: HashMap<String, Decimal> = HashMap::new();

    for line in lines {
        let key = key_fn(line);
        match sums.get_mut(&key) {
            Some(sum) => *sum += to_decimal(line.sales_amount),
            None => {
                sums.insert(key.clone(), to_decimal(line.sales_amount));
                order.push(key);
            }
        }
    }

    order
        .into_iter()
        .map(|key| {
            let sum = sums.remove(&key).unwrap_or(Decimal::ZERO);
            (key, sum)
        })
        .collect()
}

/// Percentage share of `part` in `total` (0.0 when the total is 0)
fn percentage_of(part: Decimal, total: Decimal) -> f64 {
    if total > Decimal::ZERO {
        (part / total * Decimal::ONE_HUNDRED)
            .to_f64()
            .unwrap_or(0.0)
    } else {
        0.0
    }
}

/// Ranked share entries, sorted descending by sales.
///
/// `sort_by` is stable, so equal sums retain encounter order — no secondary
/// sort key is defined for ties.
fn ranked_shares(groups: Vec<(String, Decimal)>, total_sales: Decimal) -> Vec<CompositionEntry> {
    let mut groups = groups;
    groups.sort_by(|a, b| b.1.cmp(&a.1));

    groups
        .into_iter()
        .map(|(name, sum)| CompositionEntry {
            name,
            sales: round_currency(sum),
            percentage: percentage_of(sum, total_sales),
        })
        .collect()
}

/// Per-product sales share of the period total
pub fn product_composition(
    lines: &[TransactionLine],
    total_sales: Decimal,
) -> Vec<CompositionEntry> {
    ranked_shares(
        group_sums(lines, |l| l.product_name.clone()),
        total_sales,
    )
}

/// Per-category sales share; uncategorized products bucket under a sentinel
pub fn category_composition(
    lines: &[TransactionLine],
    total_sales: Decimal,
) -> Vec<CompositionEntry> {
    ranked_shares(
        group_sums(lines, |l| {
            l.category_name
                .clone()
                .unwrap_or_else(|| UNCATEGORIZED.to_string())
        }),
        total_sales,
    )
}

/// Per-day sales series, ascending by date.
///
/// Dates are canonical `YYYY-MM-DD` strings, so the lexicographic sort is
/// chronological.
pub fn daily_series(lines: &[TransactionLine]) -> Vec<DailySalesPoint> {
    let mut groups = group_sums(lines, |l| l.date.clone());
    groups.sort_by(|a, b| a.0.cmp(&b.0));

    groups
        .into_iter()
        .map(|(date, sum)| DailySalesPoint {
            date,
            sales: round_currency(sum),
        })
        .collect()
}

#[cfg(test)]
mod tests {
    use super::*;

    fn line(date: &str, product: &str, category: Option<&str>, amount: f64) -> TransactionLine {
        TransactionLine {
            id: None,
            date: date.to_string(),
            store_id: 1,
            product_name: product.to_string(),
            category_name: category.map(|c| c.to_string()),
            quantity: 1,
            unit_price: amount,
            sales_amount: amount,
        }
    }

    fn fixture() -> Vec<TransactionLine> {
        vec![
            line("2024-05-01", "A", Some("food"), 100.0),
            line("2024-05-01", "B", Some("drink"), 50.0),
            line("2024-05-02", "A", Some("food"), 75.0),
        ]
    }

    #[test]
    fn test_product_composition_ranks_descending() {
        let lines = fixture();
        let total = Decimal::from(225);
        let comp = product_composition(&lines, total);

        assert_eq!(comp.len(), 2);
        assert_eq!(comp[0].name, "A");
        assert_eq!(comp[0].sales, 175);
        assert!((comp[0].percentage - 77.777).abs() < 0.01);
        assert_eq!(comp[1].name, "B");
        assert_eq!(comp[1].sales, 50);
        assert!((comp[1].percentage - 22.222).abs() < 0.01);
    }

    #[test]
    fn test_composition_percentages_sum_to_hundred() {
        let lines = fixture();
        let total = Decimal::from(225);
        let sum: f64 = product_composition(&lines, total)
            .iter()
            .map(|e| e.percentage)
            .sum();
        assert!((sum - 100.0).abs() < 1e-9);
    }

    #[test]
    fn test_zero_total_gives_zero_percentages() {
        let lines = vec![line("2024-05-01", "A", None, 0.0)];
        let comp = product_composition(&lines, Decimal::ZERO);
        assert_eq!(comp[0].percentage, 0.0);
    }

    #[test]
    fn test_ties_keep_encounter_order() {
        let lines = vec![
            line("2024-05-01", "first", None, 50.0),
            line("2024-05-01", "second", None, 50.0),
            line("2024-05-01", "third", None, 80.0),
        ];
        let comp = product_composition(&lines, Decimal::from(180));
        assert_eq!(comp[0].name, "third");
        assert_eq!(comp[1].name, "first");
        assert_eq!(comp[2].name, "second");
    }

    #[test]
    fn test_grouping_is_exact_string_match() {
        // No case folding: "Latte" and "latte" are distinct groups
        let lines = vec![
            line("2024-05-01", "Latte", None, 10.0),
            line("2024-05-01", "latte", None, 20.0),
        ];
        let comp = product_composition(&lines, Decimal::from(30));
        assert_eq!(comp.len(), 2);
    }

    #[test]
    fn test_category_composition_uses_sentinel() {
        let lines = vec![
            line("2024-05-01", "A", Some("food"), 100.0),
            line("2024-05-01", "B", None, 40.0),
        ];
        let comp = category_composition(&lines, Decimal::from(140));
        assert_eq!(comp[0].name, "food");
        assert_eq!(comp[1].name, UNCATEGORIZED);
        assert_eq!(comp[1].sales, 40);
    }

    #[test]
    fn test_daily_series_ascending_and_summed() {
        let lines = fixture();
        let series = daily_series(&lines);
        assert_eq!(
            series,
            vec![
                DailySalesPoint {
                    date: "2024-05-01".to_string(),
                    sales: 150
                },
                DailySalesPoint {
                    date: "2024-05-02".to_string(),
                    sales: 75
                },
            ]
        );
    }

    #[test]
    fn test_daily_series_sum_matches_total() {
        let lines = fixture();
        let series_total: i64 = daily_series(&lines).iter().map(|p| p.sales).sum();
        assert_eq!(series_total, 225);
    }

    #[test]
    fn test_empty_input_yields_empty_breakdowns() {
        assert!(product_composition(&[], Decimal::ZERO).is_empty());
        assert!(category_composition(&[], Decimal::ZERO).is_empty());
        assert!(daily_series(&[]).is_empty());
    }
}
