//! Order detail panel: VIEW / EDIT modes
//!
//! The editor owns a copy of the record. Edits touch only the buffer; the
//! shared collection is never modified. `save` hands the buffer back to the
//! caller, which decides what to do with it.

use shared::models::Order;
use tracing::debug;

use crate::utils::{AppError, AppResult};

/// Detail panel mode
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
pub enum EditorMode {
    #[default]
    View,
    Edit,
}

/// Editable fields of the detail panel, in tab order
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum EditField {
    CustomerName,
    CustomerPhone,
    CustomerAddress,
    TrackingNumber,
    Notes,
}

impl EditField {
    pub const ALL: [EditField; 5] = [
        EditField::CustomerName,
        EditField::CustomerPhone,
        EditField::CustomerAddress,
        EditField::TrackingNumber,
        EditField::Notes,
    ];

    pub const fn label(&self) -> &'static str {
        match self {
            Self::CustomerName => "客戶名稱",
            Self::CustomerPhone => "電話",
            Self::CustomerAddress => "地址",
            Self::TrackingNumber => "物流單號",
            Self::Notes => "備註",
        }
    }

    /// Next field in tab order, wrapping
    pub fn next(self) -> Self {
        let idx = Self::ALL.iter().position(|f| *f == self).unwrap_or(0);
        Self::ALL[(idx + 1) % Self::ALL.len()]
    }

    /// Current value of this field on an order
    pub fn value<'a>(&self, order: &'a Order) -> &'a str {
        match self {
            Self::CustomerName => &order.customer_name,
            Self::CustomerPhone => order.customer_phone.as_deref().unwrap_or_default(),
            Self::CustomerAddress => order.customer_address.as_deref().unwrap_or_default(),
            Self::TrackingNumber => order.tracking_number.as_deref().unwrap_or_default(),
            Self::Notes => order.notes.as_deref().unwrap_or_default(),
        }
    }
}

/// Detail panel state for one order
#[derive(Debug, Clone, PartialEq)]
pub struct OrderEditor {
    original: Order,
    buffer: Order,
    mode: EditorMode,
}

fn optional(value: impl Into<String>) -> Option<String> {
    let value = value.into();
    if value.is_empty() { None } else { Some(value) }
}

impl OrderEditor {
    /// Open a copy of `order`; the buffer starts equal to the record
    pub fn open(order: &Order, mode: EditorMode) -> Self {
        debug!(order_number = %order.order_number, ?mode, "Opening order");
        Self {
            original: order.clone(),
            buffer: order.clone(),
            mode,
        }
    }

    pub fn mode(&self) -> EditorMode {
        self.mode
    }

    pub fn original(&self) -> &Order {
        &self.original
    }

    /// The record as the panel shows it: the original in View, the buffer in Edit
    pub fn displayed(&self) -> &Order {
        match self.mode {
            EditorMode::View => &self.original,
            EditorMode::Edit => &self.buffer,
        }
    }

    pub fn is_dirty(&self) -> bool {
        self.buffer != self.original
    }

    /// View → Edit
    pub fn begin_edit(&mut self) -> AppResult<()> {
        if self.mode == EditorMode::Edit {
            return Err(AppError::editor_state("Order is already being edited"));
        }
        self.buffer = self.original.clone();
        self.mode = EditorMode::Edit;
        Ok(())
    }

    /// Edit → View, returning the buffered record
    ///
    /// No validation is applied. The displayed record becomes the saved one.
    pub fn save(&mut self) -> AppResult<Order> {
        self.require_edit()?;
        self.original = self.buffer.clone();
        self.mode = EditorMode::View;
        Ok(self.buffer.clone())
    }

    /// Edit → View, discarding the buffer
    pub fn cancel(&mut self) -> AppResult<()> {
        self.require_edit()?;
        self.buffer = self.original.clone();
        self.mode = EditorMode::View;
        Ok(())
    }

    pub fn set_customer_name(&mut self, value: impl Into<String>) -> AppResult<()> {
        self.require_edit()?;
        self.buffer.customer_name = value.into();
        Ok(())
    }

    pub fn set_customer_phone(&mut self, value: impl Into<String>) -> AppResult<()> {
        self.require_edit()?;
        self.buffer.customer_phone = optional(value);
        Ok(())
    }

    pub fn set_customer_address(&mut self, value: impl Into<String>) -> AppResult<()> {
        self.require_edit()?;
        self.buffer.customer_address = optional(value);
        Ok(())
    }

    pub fn set_tracking_number(&mut self, value: impl Into<String>) -> AppResult<()> {
        self.require_edit()?;
        self.buffer.tracking_number = optional(value);
        Ok(())
    }

    pub fn set_notes(&mut self, value: impl Into<String>) -> AppResult<()> {
        self.require_edit()?;
        self.buffer.notes = optional(value);
        Ok(())
    }

    /// Set a field by name; used by the terminal input line
    pub fn set_field(&mut self, field: EditField, value: impl Into<String>) -> AppResult<()> {
        match field {
            EditField::CustomerName => self.set_customer_name(value),
            EditField::CustomerPhone => self.set_customer_phone(value),
            EditField::CustomerAddress => self.set_customer_address(value),
            EditField::TrackingNumber => self.set_tracking_number(value),
            EditField::Notes => self.set_notes(value),
        }
    }

    fn require_edit(&self) -> AppResult<()> {
        match self.mode {
            EditorMode::Edit => Ok(()),
            EditorMode::View => Err(AppError::editor_state("Order is not in edit mode")),
        }
    }
}
