//! Page toolbar buttons

use tracing::info;

use crate::dashboard::traits::{DashboardContext, DashboardHandler};
use crate::notify::Notification;
use crate::utils::AppResult;

/// 手動匯入
#[derive(Debug, Clone)]
pub struct ManualImportAction;

impl DashboardHandler for ManualImportAction {
    fn handle(&self, _ctx: &mut DashboardContext<'_>) -> AppResult<Vec<Notification>> {
        info!("Manual import requested");
        Ok(vec![Notification::manual_import()])
    }
}

/// 批次修改
#[derive(Debug, Clone)]
pub struct BatchEditAction;

impl DashboardHandler for BatchEditAction {
    fn handle(&self, _ctx: &mut DashboardContext<'_>) -> AppResult<Vec<Notification>> {
        info!("Batch edit requested");
        Ok(vec![Notification::batch_edit()])
    }
}
