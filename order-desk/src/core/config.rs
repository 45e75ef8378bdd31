use shared::order::StatusFilter;

use crate::utils::{AppError, AppResult};

/// 看板配置
///
/// # 环境变量
///
/// | 环境变量 | 默认值 | 说明 |
/// |----------|--------|------|
/// | ORDERS_FILE | (内置样本) | 订单 JSON 文件 |
/// | LOG_LEVEL | info | 日志级别 |
/// | LOG_DIR | (无) | 日志目录，设置后按日滚动写文件 |
/// | TOAST_CAPACITY | 5 | 通知队列长度 |
/// | DEFAULT_STATUS | all | 启动时选中的状态 |
///
/// # 示例
///
/// ```ignore
/// ORDERS_FILE=fixtures/orders.json DEFAULT_STATUS=shipping cargo run
/// ```
#[derive(Debug, Clone)]
pub struct Config {
    /// 订单 JSON 文件，未设置时使用内置样本
    pub orders_file: Option<String>,
    /// 日志级别
    pub log_level: String,
    /// 日志目录
    pub log_dir: Option<String>,
    /// 通知队列长度
    pub toast_capacity: usize,
    /// 启动时选中的状态 tag (`all` 或状态 tag)
    pub default_status: String,
}

impl Config {
    /// 从环境变量加载配置
    ///
    /// 如果环境变量未设置，使用默认值
    pub fn from_env() -> Self {
        Self {
            orders_file: std::env::var("ORDERS_FILE").ok().filter(|v| !v.is_empty()),
            log_level: std::env::var("LOG_LEVEL").unwrap_or_else(|_| "info".into()),
            log_dir: std::env::var("LOG_DIR").ok().filter(|v| !v.is_empty()),
            toast_capacity: std::env::var("TOAST_CAPACITY")
                .ok()
                .and_then(|v| v.parse().ok())
                .unwrap_or(5),
            default_status: std::env::var("DEFAULT_STATUS").unwrap_or_else(|_| "all".into()),
        }
    }

    /// 校验配置
    pub fn validate(&self) -> AppResult<()> {
        if self.toast_capacity == 0 {
            return Err(AppError::config("TOAST_CAPACITY must be at least 1")
                .with_detail("field", "toast_capacity"));
        }
        self.initial_status()?;
        Ok(())
    }

    /// 启动时的状态筛选
    pub fn initial_status(&self) -> AppResult<StatusFilter> {
        self.default_status.parse().map_err(|e: AppError| {
            AppError::config(format!("DEFAULT_STATUS: {}", e.message))
                .with_detail("field", "default_status")
        })
    }
}

impl Default for Config {
    fn default() -> Self {
        Self {
            orders_file: None,
            log_level: "info".into(),
            log_dir: None,
            toast_capacity: 5,
            default_status: "all".into(),
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use shared::ErrorCode;
    use shared::order::{OrderStatus, StatusTag};

    #[test]
    fn test_default_config_is_valid() {
        let config = Config::default();
        assert!(config.validate().is_ok());
        assert_eq!(config.initial_status().unwrap(), StatusFilter::All);
    }

    #[test]
    fn test_zero_toast_capacity_rejected() {
        let config = Config {
            toast_capacity: 0,
            ..Default::default()
        };
        let err = config.validate().unwrap_err();
        assert_eq!(err.code, ErrorCode::ConfigError);
    }

    #[test]
    fn test_initial_status_parses_tag() {
        let config = Config {
            default_status: "ready_to_ship".into(),
            ..Default::default()
        };
        assert_eq!(
            config.initial_status().unwrap(),
            StatusFilter::Tag(StatusTag::Lifecycle(OrderStatus::ReadyToShip))
        );
    }

    #[test]
    fn test_bad_initial_status_rejected() {
        let config = Config {
            default_status: "lost".into(),
            ..Default::default()
        };
        let err = config.validate().unwrap_err();
        assert_eq!(err.code, ErrorCode::ConfigError);
        assert!(err.message.starts_with("DEFAULT_STATUS"));
    }
}
