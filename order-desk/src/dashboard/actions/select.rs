//! Row selection

use tracing::debug;

use crate::dashboard::traits::{DashboardContext, DashboardHandler};
use crate::notify::Notification;
use crate::orders::visible_orders;
use crate::utils::AppResult;

/// Check or uncheck one row
#[derive(Debug, Clone)]
pub struct SelectOrderAction {
    pub order_id: String,
    pub selected: bool,
}

impl DashboardHandler for SelectOrderAction {
    fn handle(&self, ctx: &mut DashboardContext<'_>) -> AppResult<Vec<Notification>> {
        debug!(order_id = %self.order_id, selected = self.selected, "Select order");
        ctx.state.selection.set(&self.order_id, self.selected);
        Ok(vec![])
    }
}

/// Header checkbox: check every visible row, or clear
#[derive(Debug, Clone)]
pub struct SelectAllAction {
    pub selected: bool,
}

impl DashboardHandler for SelectAllAction {
    fn handle(&self, ctx: &mut DashboardContext<'_>) -> AppResult<Vec<Notification>> {
        if self.selected {
            let visible = visible_orders(ctx.orders, ctx.state.active_status, &ctx.state.filters);
            ctx.state
                .selection
                .select_all(visible.iter().map(|o| o.id.as_str()));
        } else {
            ctx.state.selection.clear();
        }
        debug!(selected = ctx.state.selection.len(), "Select all");
        Ok(vec![])
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::dashboard::state::DashboardState;
    use crate::orders::seed_orders;
    use shared::order::{FilterOptions, Platform};

    #[test]
    fn test_select_all_uses_visible_rows() {
        let orders = seed_orders();
        let mut state = DashboardState::default();
        state.filters = FilterOptions::default().with_platform(Platform::Shopee);

        let mut ctx = DashboardContext::new(&orders, &mut state);
        SelectAllAction { selected: true }.handle(&mut ctx).unwrap();
        assert_eq!(state.selection.ids(), ["2"]);

        let mut ctx = DashboardContext::new(&orders, &mut state);
        SelectAllAction { selected: false }.handle(&mut ctx).unwrap();
        assert!(state.selection.is_empty());
    }

    #[test]
    fn test_select_order_does_not_check_visibility() {
        let orders = seed_orders();
        let mut state = DashboardState::default();
        let mut ctx = DashboardContext::new(&orders, &mut state);
        SelectOrderAction {
            order_id: "missing".to_string(),
            selected: true,
        }
        .handle(&mut ctx)
        .unwrap();
        assert!(state.selection.contains("missing"));
    }
}
