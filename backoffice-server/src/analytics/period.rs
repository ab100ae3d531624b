//! Period Resolver
//!
//! Turns a period kind plus an anchor date into inclusive calendar-day
//! boundaries for the current period and the immediately preceding one.
//! Both record kinds bucket by calendar day, so a boundary is a pair of
//! `NaiveDate`s; repositories render them as canonical `YYYY-MM-DD` strings.

use std::str::FromStr;

use chrono::{Datelike, Days, Months, NaiveDate, Weekday};
use serde::{Deserialize, Serialize};

/// Report bucketing granularity
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum PeriodKind {
    Day,
    Week,
    #[default]
    Month,
    Year,
}

impl PeriodKind {
    /// Label for the period-over-period comparison block.
    ///
    /// Derived from the kind alone — never from the actual calendar
    /// distance between the two boundaries.
    pub fn comparison_label(&self) -> &'static str {
        match self {
            PeriodKind::Day => "day-over-day",
            PeriodKind::Week => "week-over-week",
            PeriodKind::Month => "month-over-month",
            PeriodKind::Year => "year-over-year",
        }
    }
}

impl FromStr for PeriodKind {
    type Err = String;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        match s {
            "day" => Ok(PeriodKind::Day),
            "week" => Ok(PeriodKind::Week),
            "month" => Ok(PeriodKind::Month),
            "year" => Ok(PeriodKind::Year),
            other => Err(format!(
                "Unknown period '{}', expected day|week|month|year",
                other
            )),
        }
    }
}

/// Inclusive `[start, end]` calendar-day boundary
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct PeriodBoundary {
    pub start: NaiveDate,
    pub end: NaiveDate,
}

impl PeriodBoundary {
    /// Boundary of the period containing `anchor`.
    ///
    /// Weeks start on Monday; months and years follow the calendar.
    pub fn resolve(kind: PeriodKind, anchor: NaiveDate) -> Self {
        match kind {
            PeriodKind::Day => Self {
                start: anchor,
                end: anchor,
            },
            PeriodKind::Week => {
                let week = anchor.week(Weekday::Mon);
                Self {
                    start: week.first_day(),
                    end: week.last_day(),
                }
            }
            PeriodKind::Month => {
                // Day 1 always exists; the fallbacks are unreachable in practice
                let start = anchor.with_day(1).unwrap_or(anchor);
                let end = start
                    .checked_add_months(Months::new(1))
                    .and_then(|next| next.pred_opt())
                    .unwrap_or(anchor);
                Self { start, end }
            }
            PeriodKind::Year => {
                let year = anchor.year();
                Self {
                    start: NaiveDate::from_ymd_opt(year, 1, 1).unwrap_or(anchor),
                    end: NaiveDate::from_ymd_opt(year, 12, 31).unwrap_or(anchor),
                }
            }
        }
    }

    /// Boundary of the period immediately before the one containing `anchor`.
    ///
    /// Shift-then-bucket: the anchor is moved back one unit with calendar
    /// arithmetic first, then bucketed. Subtracting a month from 2024-03-31
    /// clamps to 2024-02-29 before bucketing, so the previous month of any
    /// March date is all of February, never an invalid date.
    pub fn previous(kind: PeriodKind, anchor: NaiveDate) -> Self {
        let shifted = match kind {
            PeriodKind::Day => anchor.checked_sub_days(Days::new(1)),
            PeriodKind::Week => anchor.checked_sub_days(Days::new(7)),
            PeriodKind::Month => anchor.checked_sub_months(Months::new(1)),
            PeriodKind::Year => anchor.checked_sub_months(Months::new(12)),
        };
        Self::resolve(kind, shifted.unwrap_or(anchor))
    }

    /// Explicit caller-supplied range, used verbatim (no previous period)
    pub fn explicit(start: NaiveDate, end: NaiveDate) -> Self {
        Self { start, end }
    }

    pub fn start_string(&self) -> String {
        self.start.format("%Y-%m-%d").to_string()
    }

    pub fn end_string(&self) -> String {
        self.end.format("%Y-%m-%d").to_string()
    }
}
