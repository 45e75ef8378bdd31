//! Batch actions on checked rows

use tracing::{info, warn};

use crate::dashboard::batch::BatchKind;
use crate::dashboard::traits::{DashboardContext, DashboardHandler};
use crate::notify::Notification;
use crate::utils::{AppError, AppResult, ErrorCode};

/// Run a batch action over the current selection
///
/// Only announces the action; no order is changed.
#[derive(Debug, Clone)]
pub struct RunBatchAction {
    pub kind: BatchKind,
}

impl DashboardHandler for RunBatchAction {
    fn handle(&self, ctx: &mut DashboardContext<'_>) -> AppResult<Vec<Notification>> {
        let selected = ctx.state.selection.len();
        if !BatchKind::offered(ctx.state.active_status, selected).contains(&self.kind) {
            warn!(key = self.kind.key(), selected, "Batch action not offered");
            return Err(AppError::with_message(
                ErrorCode::BatchActionUnavailable,
                format!("{} is not available here", self.kind.label()),
            )
            .with_detail("action", self.kind.key())
            .with_detail("selected", selected));
        }
        info!(key = self.kind.key(), selected, "Batch action");
        Ok(vec![Notification::batch_action(selected, self.kind.key())])
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::dashboard::state::DashboardState;
    use crate::orders::seed_orders;
    use shared::order::{OrderStatus, StatusFilter};

    #[test]
    fn test_batch_requires_selection() {
        let orders = seed_orders();
        let mut state = DashboardState::default();
        let mut ctx = DashboardContext::new(&orders, &mut state);
        let err = RunBatchAction {
            kind: BatchKind::BatchEdit,
        }
        .handle(&mut ctx)
        .unwrap_err();
        assert_eq!(err.code, ErrorCode::BatchActionUnavailable);
    }

    #[test]
    fn test_batch_action_must_match_status() {
        let orders = seed_orders();
        let mut state = DashboardState::with_status(StatusFilter::Tag(OrderStatus::Shipping.into()));
        state.selection.set("2", true);
        let mut ctx = DashboardContext::new(&orders, &mut state);

        assert!(
            RunBatchAction {
                kind: BatchKind::ConfirmShip
            }
            .handle(&mut ctx)
            .is_err()
        );
        let notes = RunBatchAction {
            kind: BatchKind::Print,
        }
        .handle(&mut ctx)
        .unwrap();
        assert_eq!(notes[0].description, "對 1 筆訂單執行 print 操作");
    }
}
