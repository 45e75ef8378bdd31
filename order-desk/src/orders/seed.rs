//! Built-in sample orders
//!
//! Used when no `ORDERS_FILE` is configured.

use chrono::{DateTime, TimeZone, Utc};
use shared::models::{Order, OrderItem};
use shared::order::{OrderStatus, Platform};

fn at(y: i32, mo: u32, d: u32, h: u32, mi: u32) -> DateTime<Utc> {
    Utc.with_ymd_and_hms(y, mo, d, h, mi, 0)
        .single()
        .unwrap_or_default()
}

fn item(id: &str, code: &str, name: &str, quantity: i32, price: f64) -> OrderItem {
    OrderItem {
        id: id.to_string(),
        product_code: code.to_string(),
        product_name: name.to_string(),
        quantity,
        price,
        image_url: None,
    }
}

/// The three sample orders the dashboard starts with
pub fn seed_orders() -> Vec<Order> {
    vec![
        Order {
            id: "1".to_string(),
            order_number: "10053797".to_string(),
            platform: Platform::Momo,
            create_date: at(2025, 7, 15, 16, 11),
            status: OrderStatus::ReadyToShip,
            customer_name: "王小明".to_string(),
            customer_phone: Some("0912345678".to_string()),
            customer_address: Some("台北市信義區信義路五段7號".to_string()),
            items: vec![item(
                "1",
                "TS250715SA000N0",
                "小水族館長版衣-水第二階紫花型條紋褲",
                2,
                1015.0,
            )],
            total_amount: 2030.0,
            quantity: 2,
            tracking_number: Some("S56152".to_string()),
            notes: Some("請小心包裝".to_string()),
            is_abnormal: false,
            is_on_hold: false,
        },
        Order {
            id: "2".to_string(),
            order_number: "10053811".to_string(),
            platform: Platform::Shopee,
            create_date: at(2025, 7, 17, 12, 27),
            status: OrderStatus::Shipping,
            customer_name: "李美華".to_string(),
            customer_phone: Some("0923456789".to_string()),
            customer_address: Some("高雄市鼓山區美術東二路".to_string()),
            items: vec![item("2", "TS250717NA001C1", "粉嫩親膚透氣睡衣褲組", 3, 1780.0)],
            total_amount: 5340.0,
            quantity: 3,
            tracking_number: Some("R8106".to_string()),
            notes: None,
            is_abnormal: false,
            is_on_hold: false,
        },
        Order {
            id: "3".to_string(),
            order_number: "10053812".to_string(),
            platform: Platform::Official,
            create_date: at(2025, 7, 17, 13, 53),
            status: OrderStatus::Completed,
            customer_name: "張志明".to_string(),
            customer_phone: Some("0934567890".to_string()),
            customer_address: Some("台中市西屯區台灣大道三段".to_string()),
            items: vec![item("3", "TS250717PA002VP", "學生型條紋褲衣", 2, 625.0)],
            total_amount: 1250.0,
            quantity: 2,
            tracking_number: Some("S56151".to_string()),
            notes: Some("已完成配送".to_string()),
            is_abnormal: false,
            is_on_hold: false,
        },
    ]
}
