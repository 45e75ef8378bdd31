//! Order status vocabulary
//!
//! Lifecycle statuses, the special triage buckets that sit beside them, and
//! the display metadata (label + severity) the dashboard renders for each.

use crate::error::AppError;
use serde::{Deserialize, Serialize};
use std::fmt;
use std::str::FromStr;

// ============================================================================
// Severity
// ============================================================================

/// Visual severity class of a status badge
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum Severity {
    Secondary,
    Warning,
    Processing,
    Success,
    Destructive,
}

// ============================================================================
// Lifecycle Status
// ============================================================================

/// 订单生命周期状态
///
/// `Unknown` absorbs tags this build does not recognize so that a fixture
/// with an unexpected status still loads. It belongs to no tally bucket.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum OrderStatus {
    /// 手動新增
    ManualAdd,
    /// 待付款
    PendingPayment,
    /// 預購訂單待處理
    PreorderPending,
    /// 一般訂單待處理
    GeneralPending,
    /// 追加中/缺貨中
    AddingStock,
    /// 可出貨
    ReadyToShip,
    /// 出貨中
    Shipping,
    /// 已出貨
    Shipped,
    /// 已完成
    Completed,
    /// 已取消
    Cancelled,
    #[serde(other)]
    Unknown,
}

impl OrderStatus {
    /// Every known status, in status-strip order
    pub const ALL: [OrderStatus; 10] = [
        OrderStatus::ManualAdd,
        OrderStatus::PendingPayment,
        OrderStatus::PreorderPending,
        OrderStatus::GeneralPending,
        OrderStatus::AddingStock,
        OrderStatus::ReadyToShip,
        OrderStatus::Shipping,
        OrderStatus::Shipped,
        OrderStatus::Completed,
        OrderStatus::Cancelled,
    ];

    pub const fn as_str(&self) -> &'static str {
        match self {
            Self::ManualAdd => "manual_add",
            Self::PendingPayment => "pending_payment",
            Self::PreorderPending => "preorder_pending",
            Self::GeneralPending => "general_pending",
            Self::AddingStock => "adding_stock",
            Self::ReadyToShip => "ready_to_ship",
            Self::Shipping => "shipping",
            Self::Shipped => "shipped",
            Self::Completed => "completed",
            Self::Cancelled => "cancelled",
            Self::Unknown => "unknown",
        }
    }

    pub const fn label(&self) -> &'static str {
        match self {
            Self::ManualAdd => "手動新增",
            Self::PendingPayment => "待付款",
            Self::PreorderPending => "預購訂單待處理",
            Self::GeneralPending => "一般訂單待處理",
            Self::AddingStock => "追加中",
            Self::ReadyToShip => "可出貨",
            Self::Shipping => "出貨中",
            Self::Shipped => "已出貨",
            Self::Completed => "已完成",
            Self::Cancelled => "已取消",
            Self::Unknown => "未知",
        }
    }

    pub const fn severity(&self) -> Severity {
        match self {
            Self::ManualAdd | Self::Unknown => Severity::Secondary,
            Self::PendingPayment | Self::AddingStock => Severity::Warning,
            Self::PreorderPending | Self::GeneralPending | Self::Shipping => Severity::Processing,
            Self::ReadyToShip | Self::Shipped | Self::Completed => Severity::Success,
            Self::Cancelled => Severity::Destructive,
        }
    }

    pub const fn is_known(&self) -> bool {
        !matches!(self, Self::Unknown)
    }
}

impl fmt::Display for OrderStatus {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.as_str())
    }
}

impl FromStr for OrderStatus {
    type Err = AppError;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        Self::ALL
            .into_iter()
            .find(|status| status.as_str() == s)
            .ok_or_else(|| AppError::invalid_format("order status", s))
    }
}

// ============================================================================
// Special Status
// ============================================================================

/// 特殊狀態 - triage buckets orthogonal to the lifecycle
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum SpecialStatus {
    /// 異常訂單區
    Abnormal,
    /// 收件資訊重覆
    DuplicateRecipient,
    /// 暫存區
    TemporaryHold,
}

impl SpecialStatus {
    pub const ALL: [SpecialStatus; 3] = [
        SpecialStatus::Abnormal,
        SpecialStatus::DuplicateRecipient,
        SpecialStatus::TemporaryHold,
    ];

    pub const fn as_str(&self) -> &'static str {
        match self {
            Self::Abnormal => "abnormal",
            Self::DuplicateRecipient => "duplicate_recipient",
            Self::TemporaryHold => "temporary_hold",
        }
    }

    pub const fn label(&self) -> &'static str {
        match self {
            Self::Abnormal => "異常訂單區",
            Self::DuplicateRecipient => "收件資訊重覆",
            Self::TemporaryHold => "暫存區",
        }
    }

    pub const fn severity(&self) -> Severity {
        match self {
            Self::Abnormal => Severity::Destructive,
            Self::DuplicateRecipient => Severity::Warning,
            Self::TemporaryHold => Severity::Secondary,
        }
    }
}

impl fmt::Display for SpecialStatus {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.as_str())
    }
}

impl FromStr for SpecialStatus {
    type Err = AppError;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        Self::ALL
            .into_iter()
            .find(|status| status.as_str() == s)
            .ok_or_else(|| AppError::invalid_format("special status", s))
    }
}

// ============================================================================
// Status Tag / Filter
// ============================================================================

/// Either a lifecycle status or a special bucket
///
/// Serialized as the bare snake_case tag (`"shipping"`, `"abnormal"`).
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(try_from = "String", into = "String")]
pub enum StatusTag {
    Lifecycle(OrderStatus),
    Special(SpecialStatus),
}

impl StatusTag {
    /// Every tag in strip order: lifecycle statuses first, then special buckets
    pub fn all() -> impl Iterator<Item = StatusTag> {
        OrderStatus::ALL
            .into_iter()
            .map(StatusTag::Lifecycle)
            .chain(SpecialStatus::ALL.into_iter().map(StatusTag::Special))
    }

    pub const fn as_str(&self) -> &'static str {
        match self {
            Self::Lifecycle(s) => s.as_str(),
            Self::Special(s) => s.as_str(),
        }
    }

    pub const fn label(&self) -> &'static str {
        match self {
            Self::Lifecycle(s) => s.label(),
            Self::Special(s) => s.label(),
        }
    }

    pub const fn severity(&self) -> Severity {
        match self {
            Self::Lifecycle(s) => s.severity(),
            Self::Special(s) => s.severity(),
        }
    }
}

impl From<OrderStatus> for StatusTag {
    fn from(status: OrderStatus) -> Self {
        Self::Lifecycle(status)
    }
}

impl From<SpecialStatus> for StatusTag {
    fn from(status: SpecialStatus) -> Self {
        Self::Special(status)
    }
}

impl fmt::Display for StatusTag {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.as_str())
    }
}

impl FromStr for StatusTag {
    type Err = AppError;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        StatusTag::all()
            .find(|tag| tag.as_str() == s)
            .ok_or_else(|| AppError::invalid_format("status", s))
    }
}

impl TryFrom<String> for StatusTag {
    type Error = AppError;

    fn try_from(value: String) -> Result<Self, Self::Error> {
        value.parse()
    }
}

impl From<StatusTag> for String {
    fn from(tag: StatusTag) -> Self {
        tag.as_str().to_string()
    }
}

/// The status strip selection: everything, or one tag
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Default)]
pub enum StatusFilter {
    #[default]
    All,
    Tag(StatusTag),
}

impl StatusFilter {
    /// Clicking the active tag again returns to `All`
    pub fn toggle(self, tag: StatusTag) -> Self {
        match self {
            Self::Tag(active) if active == tag => Self::All,
            _ => Self::Tag(tag),
        }
    }

    pub fn tag(&self) -> Option<StatusTag> {
        match self {
            Self::All => None,
            Self::Tag(tag) => Some(*tag),
        }
    }

    pub fn is_active(&self, tag: StatusTag) -> bool {
        *self == Self::Tag(tag)
    }
}

impl FromStr for StatusFilter {
    type Err = AppError;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        match s {
            "all" => Ok(Self::All),
            other => other.parse().map(Self::Tag),
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_status_serde_tags() {
        let json = serde_json::to_string(&OrderStatus::ReadyToShip).unwrap();
        assert_eq!(json, "\"ready_to_ship\"");

        let status: OrderStatus = serde_json::from_str("\"pending_payment\"").unwrap();
        assert_eq!(status, OrderStatus::PendingPayment);
    }

    #[test]
    fn test_unrecognized_status_becomes_unknown() {
        let status: OrderStatus = serde_json::from_str("\"returned_to_sender\"").unwrap();
        assert_eq!(status, OrderStatus::Unknown);
        assert!(!status.is_known());
        assert_eq!(status.label(), "未知");
        assert_eq!(status.severity(), Severity::Secondary);
    }

    #[test]
    fn test_labels_and_severity() {
        assert_eq!(OrderStatus::ReadyToShip.label(), "可出貨");
        assert_eq!(OrderStatus::Cancelled.severity(), Severity::Destructive);
        assert_eq!(OrderStatus::Shipping.severity(), Severity::Processing);
        assert_eq!(SpecialStatus::TemporaryHold.label(), "暫存區");
        assert_eq!(SpecialStatus::Abnormal.severity(), Severity::Destructive);
    }

    #[test]
    fn test_from_str() {
        assert_eq!("shipped".parse::<OrderStatus>().unwrap(), OrderStatus::Shipped);
        assert!("unknown".parse::<OrderStatus>().is_err());
        assert_eq!(
            "duplicate_recipient".parse::<StatusTag>().unwrap(),
            StatusTag::Special(SpecialStatus::DuplicateRecipient)
        );
        assert_eq!("all".parse::<StatusFilter>().unwrap(), StatusFilter::All);
        assert!("bogus".parse::<StatusFilter>().is_err());
    }

    #[test]
    fn test_status_tag_serde_is_flat() {
        let tag = StatusTag::Special(SpecialStatus::Abnormal);
        assert_eq!(serde_json::to_string(&tag).unwrap(), "\"abnormal\"");

        let tag: StatusTag = serde_json::from_str("\"completed\"").unwrap();
        assert_eq!(tag, StatusTag::Lifecycle(OrderStatus::Completed));

        assert!(serde_json::from_str::<StatusTag>("\"nope\"").is_err());
    }

    #[test]
    fn test_all_tags_in_strip_order() {
        let tags: Vec<StatusTag> = StatusTag::all().collect();
        assert_eq!(tags.len(), 13);
        assert_eq!(tags[0], StatusTag::Lifecycle(OrderStatus::ManualAdd));
        assert_eq!(tags[12], StatusTag::Special(SpecialStatus::TemporaryHold));
    }

    #[test]
    fn test_status_filter_toggle() {
        let shipping = StatusTag::from(OrderStatus::Shipping);
        let filter = StatusFilter::All.toggle(shipping);
        assert_eq!(filter, StatusFilter::Tag(shipping));
        assert!(filter.is_active(shipping));

        assert_eq!(filter.toggle(shipping), StatusFilter::All);

        let completed = StatusTag::from(OrderStatus::Completed);
        assert_eq!(filter.toggle(completed), StatusFilter::Tag(completed));
    }
}
