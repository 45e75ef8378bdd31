//! 核心模块 - 配置与启动环境
//!
//! - [`Config`] - 看板配置
//! - [`setup_environment`] - dotenv + 日志

pub mod config;

pub use config::Config;

/// 加载 `.env` 并初始化文件日志
///
/// Only used for headless runs; the terminal dashboard sets up its own log
/// panel subscriber.
pub fn setup_environment(config: &Config) {
    crate::utils::logger::init_logger_with_file(
        Some(&config.log_level),
        config.log_dir.as_deref(),
    );
}

/// 读取 `.env` (不存在时忽略)
pub fn load_dotenv() {
    if let Err(e) = dotenv::dotenv()
        && !e.not_found()
    {
        eprintln!("Failed to load .env: {}", e);
    }
}
