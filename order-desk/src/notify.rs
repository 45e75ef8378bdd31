//! Dashboard notifications (toasts)
//!
//! Reducer actions return [`Notification`]s instead of showing them; the
//! caller forwards them to a [`NotificationSink`].

use std::collections::VecDeque;

use serde::Serialize;
use tracing::info;

/// A transient user-facing message
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
pub struct Notification {
    pub title: String,
    pub description: String,
}

impl Notification {
    pub fn new(title: impl Into<String>, description: impl Into<String>) -> Self {
        Self {
            title: title.into(),
            description: description.into(),
        }
    }

    /// 訂單已更新
    pub fn order_saved(order_number: &str) -> Self {
        Self::new("訂單已更新", format!("訂單 {order_number} 已成功更新"))
    }

    /// 批次操作
    pub fn batch_action(selected: usize, key: &str) -> Self {
        Self::new("批次操作", format!("對 {selected} 筆訂單執行 {key} 操作"))
    }

    /// 手動匯入
    pub fn manual_import() -> Self {
        Self::new("手動匯入", "開啟手動匯入訂單功能")
    }

    /// 批次修改
    pub fn batch_edit() -> Self {
        Self::new("批次修改", "開啟批次修改訂單功能")
    }
}

/// Destination for dashboard notifications
pub trait NotificationSink {
    fn notify(&mut self, notification: Notification);

    fn notify_all(&mut self, notifications: Vec<Notification>) {
        for notification in notifications {
            self.notify(notification);
        }
    }
}

/// Bounded in-memory toast strip, newest first
#[derive(Debug, Clone)]
pub struct ToastQueue {
    capacity: usize,
    toasts: VecDeque<Notification>,
}

impl ToastQueue {
    /// `capacity` is clamped to at least one
    pub fn new(capacity: usize) -> Self {
        let capacity = capacity.max(1);
        Self {
            capacity,
            toasts: VecDeque::with_capacity(capacity),
        }
    }

    pub fn iter(&self) -> impl Iterator<Item = &Notification> {
        self.toasts.iter()
    }

    pub fn latest(&self) -> Option<&Notification> {
        self.toasts.front()
    }

    pub fn len(&self) -> usize {
        self.toasts.len()
    }

    pub fn is_empty(&self) -> bool {
        self.toasts.is_empty()
    }

    /// Drop the newest toast
    pub fn dismiss(&mut self) -> Option<Notification> {
        self.toasts.pop_front()
    }
}

impl NotificationSink for ToastQueue {
    fn notify(&mut self, notification: Notification) {
        info!(title = %notification.title, description = %notification.description, "Toast");
        self.toasts.push_front(notification);
        self.toasts.truncate(self.capacity);
    }
}

/// Logs notifications and keeps nothing; used by headless runs
#[derive(Debug, Default, Clone, Copy)]
pub struct TracingSink;

impl NotificationSink for TracingSink {
    fn notify(&mut self, notification: Notification) {
        info!(title = %notification.title, description = %notification.description, "Notification");
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_notification_texts() {
        let saved = Notification::order_saved("10053797");
        assert_eq!(saved.title, "訂單已更新");
        assert_eq!(saved.description, "訂單 10053797 已成功更新");

        let batch = Notification::batch_action(2, "confirm_ship");
        assert_eq!(batch.title, "批次操作");
        assert_eq!(batch.description, "對 2 筆訂單執行 confirm_ship 操作");
    }

    #[test]
    fn test_toast_queue_is_bounded_newest_first() {
        let mut queue = ToastQueue::new(2);
        queue.notify(Notification::new("a", ""));
        queue.notify(Notification::new("b", ""));
        queue.notify(Notification::new("c", ""));

        let titles: Vec<&str> = queue.iter().map(|n| n.title.as_str()).collect();
        assert_eq!(titles, vec!["c", "b"]);
        assert_eq!(queue.latest().map(|n| n.title.as_str()), Some("c"));
    }

    #[test]
    fn test_dismiss_and_zero_capacity() {
        let mut queue = ToastQueue::new(0);
        queue.notify_all(vec![Notification::manual_import(), Notification::batch_edit()]);
        assert_eq!(queue.len(), 1);
        assert_eq!(queue.dismiss(), Some(Notification::batch_edit()));
        assert!(queue.is_empty());
    }
}
