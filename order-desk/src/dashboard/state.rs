//! Dashboard state
//!
//! Everything the user can change lives here. The order collection does not:
//! it is shared read-only and never part of the state.

use shared::order::{FilterOptions, StatusFilter};

use crate::orders::{OrderEditor, Selection, TableSort};

/// 看板状态
#[derive(Debug, Clone, Default, PartialEq)]
pub struct DashboardState {
    /// Status strip selection
    pub active_status: StatusFilter,
    /// Filter bar
    pub filters: FilterOptions,
    /// Checked rows
    pub selection: Selection,
    /// Table column sort
    pub sort: TableSort,
    /// Open detail panel, if any
    pub editor: Option<OrderEditor>,
}

impl DashboardState {
    pub fn with_status(active_status: StatusFilter) -> Self {
        Self {
            active_status,
            ..Self::default()
        }
    }
}
