//! Dashboard controller
//!
//! A reducer over [`DashboardState`]: every user interaction is a
//! [`DashboardAction`], dispatched through [`Dashboard::dispatch`]. The
//! order collection is held separately and never mutated; visible rows and
//! tallies are derived from it on demand.

pub mod traits;

pub mod actions;
pub mod batch;
pub mod state;

use std::sync::Arc;

use shared::models::Order;
use shared::order::StatusCount;
use tracing::{debug, warn};

use crate::notify::Notification;
use crate::orders::{special_counts, status_counts, visible_orders};
use crate::utils::AppResult;

pub use actions::DashboardAction;
pub use batch::BatchKind;
pub use state::DashboardState;
pub use traits::{DashboardContext, DashboardHandler};

/// Orders plus the dashboard state over them
#[derive(Debug, Clone)]
pub struct Dashboard {
    orders: Arc<[Order]>,
    state: DashboardState,
}

impl Dashboard {
    pub fn new(orders: impl Into<Arc<[Order]>>) -> Self {
        Self::with_state(orders, DashboardState::default())
    }

    pub fn with_state(orders: impl Into<Arc<[Order]>>, state: DashboardState) -> Self {
        Self {
            orders: orders.into(),
            state,
        }
    }

    pub fn orders(&self) -> &[Order] {
        &self.orders
    }

    pub fn state(&self) -> &DashboardState {
        &self.state
    }

    /// Apply one action
    ///
    /// On error the state is unchanged and no notification is produced.
    pub fn dispatch(&mut self, action: DashboardAction) -> AppResult<Vec<Notification>> {
        let name = action.name();
        let mut ctx = DashboardContext::new(&self.orders, &mut self.state);
        match action.handle(&mut ctx) {
            Ok(notifications) => {
                debug!(action = name, notifications = notifications.len(), "Action applied");
                Ok(notifications)
            }
            Err(e) => {
                warn!(action = name, code = %e.code, "Action rejected: {}", e.message);
                Err(e)
            }
        }
    }

    /// Table rows: filtered, then sorted
    pub fn visible(&self) -> Vec<&Order> {
        let mut rows = visible_orders(&self.orders, self.state.active_status, &self.state.filters);
        self.state.sort.apply(&mut rows);
        rows
    }

    /// Ids of the table rows, in display order
    pub fn visible_ids(&self) -> Vec<&str> {
        self.visible().into_iter().map(|o| o.id.as_str()).collect()
    }

    /// Lifecycle tallies over the full collection
    pub fn counts(&self) -> Vec<StatusCount> {
        status_counts(&self.orders)
    }

    /// Special-bucket tallies over the full collection
    pub fn special_counts(&self) -> Vec<StatusCount> {
        special_counts(&self.orders)
    }

    /// Batch actions the toolbar currently offers
    pub fn offered_batch_actions(&self) -> Vec<BatchKind> {
        BatchKind::offered(self.state.active_status, self.state.selection.len())
    }

    /// Header checkbox state
    pub fn is_all_selected(&self) -> bool {
        self.state.selection.is_all_selected(&self.visible_ids())
    }
}
