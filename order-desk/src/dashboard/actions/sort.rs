//! Table header sort

use tracing::debug;

use crate::dashboard::traits::{DashboardContext, DashboardHandler};
use crate::notify::Notification;
use crate::orders::SortField;
use crate::utils::AppResult;

/// Click a sortable column header
#[derive(Debug, Clone)]
pub struct ToggleSortAction {
    pub field: SortField,
}

impl DashboardHandler for ToggleSortAction {
    fn handle(&self, ctx: &mut DashboardContext<'_>) -> AppResult<Vec<Notification>> {
        ctx.state.sort.toggle(self.field);
        debug!(field = ?self.field, direction = ?ctx.state.sort.direction(), "Sort toggled");
        Ok(vec![])
    }
}

/// Keyboard sort key: next field, then back to collection order
#[derive(Debug, Clone)]
pub struct CycleSortAction;

impl DashboardHandler for CycleSortAction {
    fn handle(&self, ctx: &mut DashboardContext<'_>) -> AppResult<Vec<Notification>> {
        ctx.state.sort.cycle_field();
        debug!(field = ?ctx.state.sort.field(), "Sort cycled");
        Ok(vec![])
    }
}
