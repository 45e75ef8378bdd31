//! 工具模块 - 通用工具函数和类型
//!
//! - [`AppError`] / [`AppResult`] (from shared::error)
//! - 日志、时间工具

pub mod logger;
pub mod time;

pub use shared::error::{AppError, AppResult, ErrorCategory, ErrorCode};
