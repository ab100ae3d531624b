//! 时间工具函数 — 业务时区转换
//!
//! 所有日期解析统一在 API handler 层完成，
//! repository 层只接收规范化的 `YYYY-MM-DD` 字符串。

use chrono::NaiveDate;
use chrono_tz::Tz;

use super::{AppError, AppResult};

/// 解析日期字符串 (YYYY-MM-DD)
pub fn parse_date(date: &str) -> AppResult<NaiveDate> {
    NaiveDate::parse_from_str(date, "%Y-%m-%d")
        .map_err(|_| AppError::validation(format!("Invalid date format: {}", date)))
}

/// 当前日历日期 (业务时区)
pub fn today(tz: Tz) -> NaiveDate {
    chrono::Utc::now().with_timezone(&tz).date_naive()
}

/// 日期 → 规范化 `YYYY-MM-DD` 字符串
///
/// 仓库层和聚合层都按这个形式分桶；字典序即时间序。
pub fn date_string(date: NaiveDate) -> String {
    date.format("%Y-%m-%d").to_string()
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_parse_date_valid() {
        let d = parse_date("2024-05-01").unwrap();
        assert_eq!(date_string(d), "2024-05-01");
    }

    #[test]
    fn test_parse_date_rejects_garbage() {
        assert!(parse_date("2024/05/01").is_err());
        assert!(parse_date("not-a-date").is_err());
        assert!(parse_date("2024-13-40").is_err());
    }
}
