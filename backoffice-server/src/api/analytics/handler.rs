//! Analytics API Handlers

use axum::{
    Json,
    extract::{Query, State},
};
use serde::Deserialize;

use crate::analytics::{self, PeriodKind, ReportRequest, ReportScope};
use crate::core::ServerState;
use crate::db::repository::SalesRecordRepository;
use crate::utils::{AppError, AppResult, time};
use shared::models::AnalyticsReport;

// ============================================================================
// Query Parameters
// ============================================================================

#[derive(Debug, Deserialize)]
pub struct SalesAnalyticsQuery {
    /// day | week | month | year (default: month)
    pub period: Option<String>,
    /// Anchor date for period bucketing; defaults to today in the
    /// business timezone
    #[serde(rename = "currentDate")]
    pub current_date: Option<String>,
    /// Explicit range start; must be paired with endDate
    #[serde(rename = "startDate")]
    pub start_date: Option<String>,
    /// Explicit range end; must be paired with startDate
    #[serde(rename = "endDate")]
    pub end_date: Option<String>,
    /// Restrict the report to one store
    #[serde(rename = "storeId")]
    pub store_id: Option<i64>,
}

/// Resolve the query parameters into a report scope.
///
/// An explicit range needs both ends and wins over the period parameters;
/// one end alone is a validation error rather than a silent fallback.
fn resolve_scope(query: &SalesAnalyticsQuery, tz: chrono_tz::Tz) -> AppResult<ReportScope> {
    match (query.start_date.as_deref(), query.end_date.as_deref()) {
        (Some(start), Some(end)) => {
            let start = time::parse_date(start)?;
            let end = time::parse_date(end)?;
            if start > end {
                return Err(AppError::validation(format!(
                    "startDate {} is after endDate {}",
                    start, end
                )));
            }
            Ok(ReportScope::Explicit { start, end })
        }
        (None, None) => {
            let kind = match query.period.as_deref() {
                Some(s) => s.parse::<PeriodKind>().map_err(AppError::validation)?,
                None => PeriodKind::default(),
            };
            let anchor = match query.current_date.as_deref() {
                Some(s) => time::parse_date(s)?,
                None => time::today(tz),
            };
            Ok(ReportScope::Period { kind, anchor })
        }
        _ => Err(AppError::validation(
            "startDate and endDate must be provided together",
        )),
    }
}

// ============================================================================
// Handlers
// ============================================================================

/// GET /api/analytics/sales - Period-scoped sales analytics report
pub async fn get_sales_analytics(
    State(state): State<ServerState>,
    Query(query): Query<SalesAnalyticsQuery>,
) -> AppResult<Json<AnalyticsReport>> {
    let scope = resolve_scope(&query, state.config.timezone)?;
    let request = ReportRequest {
        scope,
        store_id: query.store_id,
    };

    tracing::debug!(
        scope = ?request.scope,
        store_id = ?request.store_id,
        "Generating sales analytics report"
    );

    let source = SalesRecordRepository::new(state.get_db());
    let report = analytics::generate_report(&source, &request).await?;

    Ok(Json(report))
}

#[cfg(test)]
mod tests {
    use super::*;
    use chrono::NaiveDate;

    fn query(
        period: Option<&str>,
        current: Option<&str>,
        start: Option<&str>,
        end: Option<&str>,
    ) -> SalesAnalyticsQuery {
        SalesAnalyticsQuery {
            period: period.map(String::from),
            current_date: current.map(String::from),
            start_date: start.map(String::from),
            end_date: end.map(String::from),
            store_id: None,
        }
    }

    #[test]
    fn test_default_scope_is_month_of_today() {
        let scope = resolve_scope(&query(None, None, None, None), chrono_tz::UTC).unwrap();
        assert!(matches!(
            scope,
            ReportScope::Period {
                kind: PeriodKind::Month,
                ..
            }
        ));
    }

    #[test]
    fn test_period_with_anchor() {
        let scope =
            resolve_scope(&query(Some("week"), Some("2024-05-15"), None, None), chrono_tz::UTC)
                .unwrap();
        assert_eq!(
            scope,
            ReportScope::Period {
                kind: PeriodKind::Week,
                anchor: NaiveDate::from_ymd_opt(2024, 5, 15).unwrap(),
            }
        );
    }

    #[test]
    fn test_explicit_range_wins() {
        let scope = resolve_scope(
            &query(Some("month"), None, Some("2024-05-01"), Some("2024-05-10")),
            chrono_tz::UTC,
        )
        .unwrap();
        assert!(matches!(scope, ReportScope::Explicit { .. }));
    }

    #[test]
    fn test_half_open_range_is_rejected() {
        let res = resolve_scope(&query(None, None, Some("2024-05-01"), None), chrono_tz::UTC);
        assert!(matches!(res, Err(AppError::Validation(_))));
    }

    #[test]
    fn test_inverted_range_is_rejected() {
        let res = resolve_scope(
            &query(None, None, Some("2024-05-10"), Some("2024-05-01")),
            chrono_tz::UTC,
        );
        assert!(matches!(res, Err(AppError::Validation(_))));
    }

    #[test]
    fn test_unknown_period_is_rejected() {
        let res = resolve_scope(&query(Some("quarter"), None, None, None), chrono_tz::UTC);
        assert!(matches!(res, Err(AppError::Validation(_))));
    }
}
