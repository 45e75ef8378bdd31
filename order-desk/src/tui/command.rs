//! `:` command line of the terminal dashboard
//!
//! ```text
//! /search <text>          搜尋 (空白清除)
//! /platform <tag|all>     平台
//! /status <tag|all>       篩選列狀態
//! /date <from> <to>       日期區間 (YYYY-MM-DD, `-` 表示不限)
//! /amount <min> <max>     金額區間 (`-` 表示不限)
//! /clear                  清除所有篩選
//! /batch <key>            對已選訂單執行批次操作
//! /import                 手動匯入
//! /batch-edit             批次修改
//! /help
//! ```

use shared::order::{AmountRange, DateRange, Platform, StatusTag};

use crate::dashboard::BatchKind;
use crate::orders::money::try_decimal;
use crate::utils::time::parse_optional_date;
use crate::utils::{AppError, AppResult};

#[derive(Debug, Clone, PartialEq)]
pub enum Command {
    Search(Option<String>),
    Platform(Option<Platform>),
    Status(Option<StatusTag>),
    Date(DateRange),
    Amount(AmountRange),
    ClearFilters,
    Batch(BatchKind),
    Import,
    BatchEdit,
    Help,
}

pub const HELP: &[&str] = &[
    "/search <text>       - 搜尋訂單編號、客戶、物流單號",
    "/platform <tag|all>  - momo, shopee, official, offline, manual",
    "/status <tag|all>    - 篩選列狀態",
    "/date <from> <to>    - YYYY-MM-DD, '-' 表示不限",
    "/amount <min> <max>  - '-' 表示不限",
    "/clear               - 清除所有篩選",
    "/batch <key>         - confirm_ship, batch_ship, check, print, process_return, batch_edit",
    "/import              - 手動匯入",
    "/batch-edit          - 批次修改",
];

fn usage(text: &str) -> AppError {
    AppError::validation(format!("Usage: {text}"))
}

fn optional_tag<T: std::str::FromStr<Err = AppError>>(arg: &str) -> AppResult<Option<T>> {
    match arg {
        "all" | "-" => Ok(None),
        other => other.parse().map(Some),
    }
}

fn optional_amount(arg: &str) -> AppResult<Option<f64>> {
    if arg == "-" {
        return Ok(None);
    }
    arg.parse::<f64>()
        .ok()
        .filter(|amount| try_decimal(*amount).is_some())
        .map(Some)
        .ok_or_else(|| {
            AppError::validation(format!("Invalid amount: {arg}")).with_detail("value", arg)
        })
}

/// Parse one command line
pub fn parse_command(line: &str) -> AppResult<Command> {
    let line = line.trim();
    let (name, rest) = line.split_once(char::is_whitespace).unwrap_or((line, ""));
    let rest = rest.trim();
    let args: Vec<&str> = rest.split_whitespace().collect();

    match name {
        "/search" => Ok(Command::Search(
            (!rest.is_empty()).then(|| rest.to_string()),
        )),
        "/platform" => match args.as_slice() {
            [arg] => optional_tag(arg).map(Command::Platform),
            _ => Err(usage("/platform <tag|all>")),
        },
        "/status" => match args.as_slice() {
            [arg] => optional_tag(arg).map(Command::Status),
            _ => Err(usage("/status <tag|all>")),
        },
        "/date" => match args.as_slice() {
            [from, to] => Ok(Command::Date(DateRange::new(
                parse_optional_date(from)?,
                parse_optional_date(to)?,
            ))),
            _ => Err(usage("/date <from> <to>")),
        },
        "/amount" => match args.as_slice() {
            [min, max] => Ok(Command::Amount(AmountRange::new(
                optional_amount(min)?,
                optional_amount(max)?,
            ))),
            _ => Err(usage("/amount <min> <max>")),
        },
        "/clear" => Ok(Command::ClearFilters),
        "/batch" => match args.as_slice() {
            [key] => key.parse().map(Command::Batch),
            _ => Err(usage("/batch <key>")),
        },
        "/import" => Ok(Command::Import),
        "/batch-edit" => Ok(Command::BatchEdit),
        "/help" => Ok(Command::Help),
        other => Err(AppError::validation(format!("Unknown command: {other}"))),
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use chrono::NaiveDate;
    use shared::order::OrderStatus;

    #[test]
    fn test_parse_filters() {
        assert_eq!(
            parse_command("/search  王 小明 ").unwrap(),
            Command::Search(Some("王 小明".to_string()))
        );
        assert_eq!(parse_command("/search").unwrap(), Command::Search(None));
        assert_eq!(
            parse_command("/platform shopee").unwrap(),
            Command::Platform(Some(Platform::Shopee))
        );
        assert_eq!(parse_command("/platform all").unwrap(), Command::Platform(None));
        assert_eq!(
            parse_command("/status cancelled").unwrap(),
            Command::Status(Some(OrderStatus::Cancelled.into()))
        );
    }

    #[test]
    fn test_parse_ranges() {
        assert_eq!(
            parse_command("/date 2025-07-16 -").unwrap(),
            Command::Date(DateRange::new(NaiveDate::from_ymd_opt(2025, 7, 16), None))
        );
        assert_eq!(
            parse_command("/amount - 3000").unwrap(),
            Command::Amount(AmountRange::new(None, Some(3000.0)))
        );
        assert!(parse_command("/amount cheap -").is_err());
        assert!(parse_command("/amount - 1e30").is_err());
        assert!(parse_command("/amount NaN -").is_err());
        assert!(parse_command("/amount - inf").is_err());
        assert!(parse_command("/date 2025-13-01 -").is_err());
    }

    #[test]
    fn test_parse_actions() {
        assert_eq!(
            parse_command("/batch check").unwrap(),
            Command::Batch(BatchKind::Check)
        );
        assert_eq!(parse_command("/import").unwrap(), Command::Import);
        assert!(parse_command("/batch").is_err());
        assert!(parse_command("/frobnicate").is_err());
    }
}
