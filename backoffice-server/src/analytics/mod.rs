//! Sales Analytics Aggregation Engine
//!
//! Reconciles the two independently-recorded sales sources (transaction
//! lines, register close-outs) into one period-scoped report with
//! composition breakdowns and a period-over-period comparison.
//!
//! The engine is a pure function of the fetched record sets: no state
//! between invocations, no retries, no partial results. Fetch failures
//! propagate to the caller untouched.
//!
//! # 模块结构
//!
//! - [`period`] - 期间边界计算
//! - [`reconcile`] - 双源对账
//! - [`composition`] - 构成比聚合
//! - [`comparison`] - 前期比较

pub mod comparison;
pub mod composition;
pub mod period;
pub mod reconcile;


pub use period::{PeriodBoundary, PeriodKind};

use chrono::NaiveDate;

use crate::db::repository::RepoResult;
use shared::models::{AnalyticsReport, RegisterCloseSummary, TransactionLine};

/// Boundary-scoped read access to the raw sales records.
///
/// The engine depends only on this port; the SurrealDB repositories
/// implement it in production and tests substitute in-memory fixtures.
#[allow(async_fn_in_trait)]
pub trait SalesRecordSource {
    async fn fetch_transaction_lines(
        &self,
        boundary: &PeriodBoundary,
        store_id: Option<i64>,
    ) -> RepoResult<Vec<TransactionLine>>;

    async fn fetch_register_closes(
        &self,
        boundary: &PeriodBoundary,
        store_id: Option<i64>,
    ) -> RepoResult<Vec<RegisterCloseSummary>>;
}

/// What period to aggregate over
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum ReportScope {
    /// Bucketed period around an anchor date; enables the previous-period
    /// comparison block
    Period { kind: PeriodKind, anchor: NaiveDate },
    /// Caller-supplied range used verbatim; no previous period exists, so
    /// the comparison block is omitted
    Explicit { start: NaiveDate, end: NaiveDate },
}

impl ReportScope {
    /// Current boundary plus the previous one when the scope defines it
    fn boundaries(&self) -> (PeriodBoundary, Option<(PeriodKind, PeriodBoundary)>) {
        match *self {
            ReportScope::Period { kind, anchor } => (
                PeriodBoundary::resolve(kind, anchor),
                Some((kind, PeriodBoundary::previous(kind, anchor))),
            ),
            ReportScope::Explicit { start, end } => (PeriodBoundary::explicit(start, end), None),
        }
    }
}

/// One report request: scope plus optional store filter
#[derive(Debug, Clone, Copy)]
pub struct ReportRequest {
    pub scope: ReportScope,
    /// When set, both record fetches are filtered to this store;
    /// otherwise all stores aggregate together
    pub store_id: Option<i64>,
}

/// Both fetches for one boundary, issued concurrently — they are mutually
/// independent reads.
async fn fetch_pair<S: SalesRecordSource>(
    source: &S,
    boundary: &PeriodBoundary,
    store_id: Option<i64>,
) -> RepoResult<(Vec<TransactionLine>, Vec<RegisterCloseSummary>)> {
    tokio::try_join!(
        source.fetch_transaction_lines(boundary, store_id),
        source.fetch_register_closes(boundary, store_id),
    )
}

/// Generate the full analytics report for one request.
///
/// Current- and previous-period fetches run concurrently; neither depends
/// on the other's result. When both current-period record sets come back
/// empty the canonical zeroed report is returned without touching the
/// arithmetic paths.
pub async fn generate_report<S: SalesRecordSource>(
    source: &S,
    request: &ReportRequest,
) -> RepoResult<AnalyticsReport> {
    let (current, previous) = request.scope.boundaries();

    let ((lines, closes), previous_records) = tokio::try_join!(
        fetch_pair(source, &current, request.store_id),
        async {
            match &previous {
                Some((kind, boundary)) => fetch_pair(source, boundary, request.store_id)
                    .await
                    .map(|pair| Some((*kind, pair))),
                None => Ok(None),
            }
        }
    )?;

    if lines.is_empty() && closes.is_empty() {
        return Ok(AnalyticsReport::empty());
    }

    let line_metrics = reconcile::SourceMetrics::from_lines(&lines);
    let close_metrics = reconcile::SourceMetrics::from_closes(&closes);
    let headline = reconcile::reconcile(&line_metrics, &close_metrics);

    // Composition shares are weighted against the transaction-line total,
    // not the reconciled one — the breakdowns come from that source alone
    let comparison_detail = previous_records.map(|(kind, (prev_lines, prev_closes))| {
        let prev = reconcile::reconcile(
            &reconcile::SourceMetrics::from_lines(&prev_lines),
            &reconcile::SourceMetrics::from_closes(&prev_closes),
        );
        comparison::period_comparison(kind, &headline, &prev)
    });

    Ok(AnalyticsReport {
        total_customers: headline.total_customers,
        average_customer_value: headline.average_customer_value,
        total_sales: headline.total_sales,
        purchase_rate: shared::models::PURCHASE_RATE_PLACEHOLDER,
        product_composition: composition::product_composition(&lines, line_metrics.total_sales),
        daily_sales: composition::daily_series(&lines),
        category_sales: composition::category_composition(&lines, line_metrics.total_sales),
        register_close_summary: reconcile::register_close_totals(&closes),
        comparison: reconcile::customer_count_comparison(&line_metrics, &close_metrics),
        comparison_detail,
    })
}
