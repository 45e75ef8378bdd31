//! Order desk - 電商訂單看板
//!
//! A filter/derivation engine over a fixed order collection, with a
//! reducer-style dashboard controller and a terminal front end.
//!
//! # 模块结构
//!
//! - [`core`] - 配置与启动环境
//! - [`orders`] - 订单筛选、统计、勾选、详情编辑、排序
//! - [`dashboard`] - 看板状态与动作
//! - [`notify`] - 通知 (toast)
//! - [`tui`] - 终端界面
//! - [`utils`] - 日志、时间、错误类型
//!
//! # 使用示例
//!
//! ```ignore
//! use order_desk::dashboard::{Dashboard, DashboardAction};
//! use order_desk::orders::seed_orders;
//! use shared::order::OrderStatus;
//!
//! let mut dashboard = Dashboard::new(seed_orders());
//! dashboard.dispatch(DashboardAction::click_status(OrderStatus::Shipping))?;
//! assert_eq!(dashboard.visible().len(), 1);
//! ```

pub mod core;
pub mod dashboard;
pub mod notify;
pub mod orders;
pub mod tui;
pub mod utils;

// Re-exports
pub use crate::core::{Config, load_dotenv, setup_environment};
pub use dashboard::{Dashboard, DashboardAction, DashboardState};
pub use notify::{Notification, NotificationSink, ToastQueue, TracingSink};
pub use utils::{AppError, AppResult};
