//! 时间工具函数
//!
//! Dates typed into the filter bar are plain `YYYY-MM-DD`; order timestamps
//! are displayed in UTC.

use chrono::{DateTime, NaiveDate, Utc};

use super::{AppError, AppResult};

/// 解析日期字符串 (YYYY-MM-DD)
pub fn parse_date(date: &str) -> AppResult<NaiveDate> {
    NaiveDate::parse_from_str(date.trim(), "%Y-%m-%d")
        .map_err(|_| AppError::validation(format!("Invalid date format: {}", date)))
}

/// 解析可选日期: `-` 或空字符串表示不限
pub fn parse_optional_date(date: &str) -> AppResult<Option<NaiveDate>> {
    match date.trim() {
        "" | "-" => Ok(None),
        other => parse_date(other).map(Some),
    }
}

/// Order timestamp as shown in the table, e.g. `2025/07/15 16:11`
pub fn format_datetime(ts: &DateTime<Utc>) -> String {
    ts.format("%Y/%m/%d %H:%M").to_string()
}

#[cfg(test)]
mod tests {
    use super::*;
    use shared::ErrorCode;

    #[test]
    fn test_parse_date() {
        assert_eq!(
            parse_date("2025-07-15").unwrap(),
            NaiveDate::from_ymd_opt(2025, 7, 15).unwrap()
        );
        let err = parse_date("15/07/2025").unwrap_err();
        assert_eq!(err.code, ErrorCode::ValidationFailed);
    }

    #[test]
    fn test_parse_optional_date() {
        assert_eq!(parse_optional_date("-").unwrap(), None);
        assert_eq!(parse_optional_date("  ").unwrap(), None);
        assert!(parse_optional_date("2025-07-17").unwrap().is_some());
        assert!(parse_optional_date("tomorrow").is_err());
    }

    #[test]
    fn test_format_datetime() {
        let ts: DateTime<Utc> = "2025-07-17T12:27:00Z".parse().unwrap();
        assert_eq!(format_datetime(&ts), "2025/07/17 12:27");
    }
}
