//! Dashboard action implementations
//!
//! Each action implements the `DashboardHandler` trait and handles one user
//! interaction.

use enum_dispatch::enum_dispatch;
use shared::order::{FilterOptions, StatusTag};

use super::batch::BatchKind;
// enum_dispatch expands the handler signature here, so its types must be in scope
use super::traits::{DashboardContext, DashboardHandler};
use crate::notify::Notification;
use crate::orders::{EditField, SortField};
use crate::utils::AppResult;

mod batch;
mod detail;
mod filters;
mod select;
mod sort;
mod status;
mod toolbar;

pub use batch::RunBatchAction;
pub use detail::{
    BeginEditAction, CancelEditAction, CloseOrderAction, EditFieldAction, EditOrderAction,
    SaveOrderAction, ViewOrderAction,
};
pub use filters::ChangeFiltersAction;
pub use select::{SelectAllAction, SelectOrderAction};
pub use sort::{CycleSortAction, ToggleSortAction};
pub use status::ClickStatusAction;
pub use toolbar::{BatchEditAction, ManualImportAction};

/// DashboardAction enum - dispatches to concrete action implementations
///
/// Uses enum_dispatch for zero-cost static dispatch.
#[enum_dispatch(DashboardHandler)]
#[derive(Debug, Clone)]
pub enum DashboardAction {
    ClickStatus(ClickStatusAction),
    ChangeFilters(ChangeFiltersAction),
    SelectOrder(SelectOrderAction),
    SelectAll(SelectAllAction),
    ToggleSort(ToggleSortAction),
    CycleSort(CycleSortAction),
    ViewOrder(ViewOrderAction),
    EditOrder(EditOrderAction),
    BeginEdit(BeginEditAction),
    EditField(EditFieldAction),
    SaveOrder(SaveOrderAction),
    CancelEdit(CancelEditAction),
    CloseOrder(CloseOrderAction),
    RunBatch(RunBatchAction),
    ManualImport(ManualImportAction),
    BatchEdit(BatchEditAction),
}

impl DashboardAction {
    pub fn click_status(tag: impl Into<StatusTag>) -> Self {
        ClickStatusAction { tag: tag.into() }.into()
    }

    pub fn change_filters(filters: FilterOptions) -> Self {
        ChangeFiltersAction { filters }.into()
    }

    pub fn select_order(order_id: impl Into<String>, selected: bool) -> Self {
        SelectOrderAction {
            order_id: order_id.into(),
            selected,
        }
        .into()
    }

    pub fn select_all(selected: bool) -> Self {
        SelectAllAction { selected }.into()
    }

    pub fn toggle_sort(field: SortField) -> Self {
        ToggleSortAction { field }.into()
    }

    pub fn cycle_sort() -> Self {
        CycleSortAction.into()
    }

    pub fn view_order(order_id: impl Into<String>) -> Self {
        ViewOrderAction {
            order_id: order_id.into(),
        }
        .into()
    }

    pub fn edit_order(order_id: impl Into<String>) -> Self {
        EditOrderAction {
            order_id: order_id.into(),
        }
        .into()
    }

    pub fn edit_field(field: EditField, value: impl Into<String>) -> Self {
        EditFieldAction {
            field,
            value: value.into(),
        }
        .into()
    }

    pub fn begin_edit() -> Self {
        BeginEditAction.into()
    }

    pub fn save_order() -> Self {
        SaveOrderAction.into()
    }

    pub fn cancel_edit() -> Self {
        CancelEditAction.into()
    }

    pub fn close_order() -> Self {
        CloseOrderAction.into()
    }

    pub fn batch(kind: BatchKind) -> Self {
        RunBatchAction { kind }.into()
    }

    pub fn manual_import() -> Self {
        ManualImportAction.into()
    }

    pub fn batch_edit() -> Self {
        BatchEditAction.into()
    }

    /// Short name for logs
    pub fn name(&self) -> &'static str {
        match self {
            Self::ClickStatus(_) => "click_status",
            Self::ChangeFilters(_) => "change_filters",
            Self::SelectOrder(_) => "select_order",
            Self::SelectAll(_) => "select_all",
            Self::ToggleSort(_) => "toggle_sort",
            Self::CycleSort(_) => "cycle_sort",
            Self::ViewOrder(_) => "view_order",
            Self::EditOrder(_) => "edit_order",
            Self::BeginEdit(_) => "begin_edit",
            Self::EditField(_) => "edit_field",
            Self::SaveOrder(_) => "save_order",
            Self::CancelEdit(_) => "cancel_edit",
            Self::CloseOrder(_) => "close_order",
            Self::RunBatch(_) => "batch",
            Self::ManualImport(_) => "manual_import",
            Self::BatchEdit(_) => "batch_edit",
        }
    }
}

