//! Filter bar changes

use shared::order::FilterOptions;
use tracing::debug;

use crate::dashboard::traits::{DashboardContext, DashboardHandler};
use crate::notify::Notification;
use crate::utils::AppResult;

/// Replace the filter bar state
///
/// The selection is kept as is, even for rows the new filters hide.
#[derive(Debug, Clone)]
pub struct ChangeFiltersAction {
    pub filters: FilterOptions,
}

impl DashboardHandler for ChangeFiltersAction {
    fn handle(&self, ctx: &mut DashboardContext<'_>) -> AppResult<Vec<Notification>> {
        debug!(filters = ?self.filters, "Filters changed");
        ctx.state.filters = self.filters.clone();
        Ok(vec![])
    }
}
