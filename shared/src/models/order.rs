//! Order Model
//!
//! Records are static: they are loaded once and never written back.
//! Field names serialize in camelCase to match the order fixtures.

use crate::order::{OrderStatus, Platform};
use chrono::{DateTime, NaiveDate, Utc};
use serde::{Deserialize, Serialize};

/// Order line item
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct OrderItem {
    pub id: String,
    pub product_code: String,
    pub product_name: String,
    pub quantity: i32,
    /// Unit price in currency unit
    pub price: f64,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub image_url: Option<String>,
}

/// Order entity
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct Order {
    pub id: String,
    pub order_number: String,
    pub platform: Platform,
    pub create_date: DateTime<Utc>,
    pub status: OrderStatus,
    pub customer_name: String,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub customer_phone: Option<String>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub customer_address: Option<String>,
    pub items: Vec<OrderItem>,
    /// Total amount in currency unit
    pub total_amount: f64,
    /// Total quantity across items
    pub quantity: i32,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub tracking_number: Option<String>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub notes: Option<String>,
    #[serde(default)]
    pub is_abnormal: bool,
    /// Parked in the temporary hold area (暫存區)
    #[serde(default)]
    pub is_on_hold: bool,
}

impl Order {
    /// UTC calendar day the order was created
    pub fn create_day(&self) -> NaiveDate {
        self.create_date.date_naive()
    }

    /// Normalized recipient identity used for duplicate detection
    ///
    /// Name, phone and address are trimmed and lowercased; missing phone or
    /// address compare as empty.
    pub fn recipient_key(&self) -> (String, String, String) {
        fn norm(s: Option<&str>) -> String {
            s.unwrap_or_default().trim().to_lowercase()
        }
        (
            norm(Some(&self.customer_name)),
            norm(self.customer_phone.as_deref()),
            norm(self.customer_address.as_deref()),
        )
    }
}
