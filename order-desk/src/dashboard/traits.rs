//! Reducer handler trait

use enum_dispatch::enum_dispatch;
use shared::models::Order;

use super::state::DashboardState;
use crate::notify::Notification;
use crate::orders::OrderEditor;
use crate::utils::{AppError, AppResult};

/// What an action sees: the read-only collection and the mutable state
pub struct DashboardContext<'a> {
    pub orders: &'a [Order],
    pub state: &'a mut DashboardState,
}

impl<'a> DashboardContext<'a> {
    pub fn new(orders: &'a [Order], state: &'a mut DashboardState) -> Self {
        Self { orders, state }
    }

    pub fn find_order(&self, order_id: &str) -> AppResult<&'a Order> {
        self.orders
            .iter()
            .find(|o| o.id == order_id)
            .ok_or_else(|| AppError::order_not_found(order_id))
    }

    pub fn editor_mut(&mut self) -> AppResult<&mut OrderEditor> {
        self.state
            .editor
            .as_mut()
            .ok_or_else(|| AppError::from(shared::ErrorCode::NoOrderOpen))
    }
}

/// One reducer transition
///
/// Handlers mutate `ctx.state` and return the notifications to show. On
/// error the state is left as it was.
#[enum_dispatch]
pub trait DashboardHandler {
    fn handle(&self, ctx: &mut DashboardContext<'_>) -> AppResult<Vec<Notification>>;
}
