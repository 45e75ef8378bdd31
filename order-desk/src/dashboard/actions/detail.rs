//! Detail panel: open, edit, save, cancel, close
//!
//! Saving never touches the shared collection. The saved record stays in
//! the open panel and is announced with a notification.

use tracing::{debug, info};

use crate::dashboard::traits::{DashboardContext, DashboardHandler};
use crate::notify::Notification;
use crate::orders::{EditField, EditorMode, OrderEditor};
use crate::utils::AppResult;

/// Open an order read-only
#[derive(Debug, Clone)]
pub struct ViewOrderAction {
    pub order_id: String,
}

impl DashboardHandler for ViewOrderAction {
    fn handle(&self, ctx: &mut DashboardContext<'_>) -> AppResult<Vec<Notification>> {
        let order = ctx.find_order(&self.order_id)?;
        ctx.state.editor = Some(OrderEditor::open(order, EditorMode::View));
        Ok(vec![])
    }
}

/// Open an order straight into edit mode
#[derive(Debug, Clone)]
pub struct EditOrderAction {
    pub order_id: String,
}

impl DashboardHandler for EditOrderAction {
    fn handle(&self, ctx: &mut DashboardContext<'_>) -> AppResult<Vec<Notification>> {
        let order = ctx.find_order(&self.order_id)?;
        ctx.state.editor = Some(OrderEditor::open(order, EditorMode::Edit));
        Ok(vec![])
    }
}

/// Switch the open panel from VIEW to EDIT
#[derive(Debug, Clone)]
pub struct BeginEditAction;

impl DashboardHandler for BeginEditAction {
    fn handle(&self, ctx: &mut DashboardContext<'_>) -> AppResult<Vec<Notification>> {
        ctx.editor_mut()?.begin_edit()?;
        Ok(vec![])
    }
}

/// Write one field of the edit buffer
#[derive(Debug, Clone)]
pub struct EditFieldAction {
    pub field: EditField,
    pub value: String,
}

impl DashboardHandler for EditFieldAction {
    fn handle(&self, ctx: &mut DashboardContext<'_>) -> AppResult<Vec<Notification>> {
        ctx.editor_mut()?.set_field(self.field, self.value.clone())?;
        debug!(field = ?self.field, "Field edited");
        Ok(vec![])
    }
}

#[derive(Debug, Clone)]
pub struct SaveOrderAction;

impl DashboardHandler for SaveOrderAction {
    fn handle(&self, ctx: &mut DashboardContext<'_>) -> AppResult<Vec<Notification>> {
        let saved = ctx.editor_mut()?.save()?;
        info!(order_number = %saved.order_number, "Order saved");
        Ok(vec![Notification::order_saved(&saved.order_number)])
    }
}

/// Leave EDIT, discarding the buffer
#[derive(Debug, Clone)]
pub struct CancelEditAction;

impl DashboardHandler for CancelEditAction {
    fn handle(&self, ctx: &mut DashboardContext<'_>) -> AppResult<Vec<Notification>> {
        ctx.editor_mut()?.cancel()?;
        Ok(vec![])
    }
}

/// Close the panel; unsaved edits are dropped
#[derive(Debug, Clone)]
pub struct CloseOrderAction;

impl DashboardHandler for CloseOrderAction {
    fn handle(&self, ctx: &mut DashboardContext<'_>) -> AppResult<Vec<Notification>> {
        if let Some(editor) = ctx.state.editor.take() {
            debug!(
                order_number = %editor.original().order_number,
                dirty = editor.is_dirty(),
                "Closing order"
            );
        }
        Ok(vec![])
    }
}
