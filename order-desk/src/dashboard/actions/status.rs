//! Status strip click

use shared::order::StatusTag;
use tracing::debug;

use crate::dashboard::traits::{DashboardContext, DashboardHandler};
use crate::notify::Notification;
use crate::utils::AppResult;

/// Click a status badge: select it, or return to `All` if it was active
///
/// The selection is cleared on every click.
#[derive(Debug, Clone)]
pub struct ClickStatusAction {
    pub tag: StatusTag,
}

impl DashboardHandler for ClickStatusAction {
    fn handle(&self, ctx: &mut DashboardContext<'_>) -> AppResult<Vec<Notification>> {
        let next = ctx.state.active_status.toggle(self.tag);
        debug!(tag = %self.tag.as_str(), ?next, "Status clicked");
        ctx.state.active_status = next;
        ctx.state.selection.clear();
        Ok(vec![])
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::dashboard::state::DashboardState;
    use crate::orders::seed_orders;
    use shared::order::{OrderStatus, StatusFilter};

    #[test]
    fn test_click_toggles_and_clears_selection() {
        let orders = seed_orders();
        let mut state = DashboardState::default();
        state.selection.set("1", true);

        let shipping: StatusTag = OrderStatus::Shipping.into();
        let action = ClickStatusAction { tag: shipping };
        let mut ctx = DashboardContext::new(&orders, &mut state);
        action.handle(&mut ctx).unwrap();
        assert_eq!(state.active_status, StatusFilter::Tag(shipping));
        assert!(state.selection.is_empty());

        let mut ctx = DashboardContext::new(&orders, &mut state);
        action.handle(&mut ctx).unwrap();
        assert_eq!(state.active_status, StatusFilter::All);
    }
}
