//! Batch actions offered for the checked rows
//!
//! Which actions appear depends on the active status; `batch_edit` is
//! always offered. Nothing is offered while the selection is empty.

use std::fmt;
use std::str::FromStr;

use shared::order::{OrderStatus, StatusFilter, StatusTag};

use crate::utils::AppError;

#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum BatchKind {
    ConfirmShip,
    BatchShip,
    Check,
    Print,
    ProcessReturn,
    BatchEdit,
}

impl BatchKind {
    pub const ALL: [BatchKind; 6] = [
        BatchKind::ConfirmShip,
        BatchKind::BatchShip,
        BatchKind::Check,
        BatchKind::Print,
        BatchKind::ProcessReturn,
        BatchKind::BatchEdit,
    ];

    /// Action key reported in the batch notification
    pub const fn key(&self) -> &'static str {
        match self {
            Self::ConfirmShip => "confirm_ship",
            Self::BatchShip => "batch_ship",
            Self::Check => "check",
            Self::Print => "print",
            Self::ProcessReturn => "process_return",
            Self::BatchEdit => "batch_edit",
        }
    }

    pub const fn label(&self) -> &'static str {
        match self {
            Self::ConfirmShip => "確認出貨",
            Self::BatchShip => "批量出貨",
            Self::Check => "檢核",
            Self::Print => "列印出貨單",
            Self::ProcessReturn => "處理退貨",
            Self::BatchEdit => "批次編輯",
        }
    }

    pub const fn is_destructive(&self) -> bool {
        matches!(self, Self::ProcessReturn)
    }

    /// Actions for the active status, `batch_edit` last
    pub fn for_status(active: StatusFilter) -> Vec<BatchKind> {
        let mut kinds = match active {
            StatusFilter::Tag(StatusTag::Lifecycle(OrderStatus::ReadyToShip)) => {
                vec![Self::ConfirmShip, Self::BatchShip]
            }
            StatusFilter::Tag(StatusTag::Lifecycle(OrderStatus::Shipping)) => {
                vec![Self::Check, Self::Print]
            }
            StatusFilter::Tag(StatusTag::Lifecycle(OrderStatus::Cancelled)) => {
                vec![Self::ProcessReturn]
            }
            _ => Vec::new(),
        };
        kinds.push(Self::BatchEdit);
        kinds
    }

    /// What the toolbar shows for a selection of `selected` rows
    pub fn offered(active: StatusFilter, selected: usize) -> Vec<BatchKind> {
        if selected == 0 {
            Vec::new()
        } else {
            Self::for_status(active)
        }
    }
}

impl fmt::Display for BatchKind {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.key())
    }
}

impl FromStr for BatchKind {
    type Err = AppError;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        Self::ALL
            .into_iter()
            .find(|kind| kind.key() == s)
            .ok_or_else(|| AppError::invalid_format("batch action", s))
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn keys(kinds: &[BatchKind]) -> Vec<&'static str> {
        kinds.iter().map(|k| k.key()).collect()
    }

    #[test]
    fn test_actions_per_status() {
        let tag = |s: OrderStatus| StatusFilter::Tag(s.into());
        assert_eq!(
            keys(&BatchKind::for_status(tag(OrderStatus::ReadyToShip))),
            vec!["confirm_ship", "batch_ship", "batch_edit"]
        );
        assert_eq!(
            keys(&BatchKind::for_status(tag(OrderStatus::Shipping))),
            vec!["check", "print", "batch_edit"]
        );
        assert_eq!(
            keys(&BatchKind::for_status(tag(OrderStatus::Cancelled))),
            vec!["process_return", "batch_edit"]
        );
        assert_eq!(
            keys(&BatchKind::for_status(StatusFilter::All)),
            vec!["batch_edit"]
        );
    }

    #[test]
    fn test_nothing_offered_without_selection() {
        let active = StatusFilter::Tag(OrderStatus::ReadyToShip.into());
        assert!(BatchKind::offered(active, 0).is_empty());
        assert_eq!(BatchKind::offered(active, 1).len(), 3);
    }

    #[test]
    fn test_parse_key() {
        assert_eq!("print".parse::<BatchKind>().unwrap(), BatchKind::Print);
        assert!("ship_everything".parse::<BatchKind>().is_err());
    }
}
