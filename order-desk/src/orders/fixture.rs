//! Order fixture loading
//!
//! A fixture is a JSON array of orders in the camelCase record layout.
//! Loading is read-only; the dashboard never writes orders back.

use std::collections::HashSet;
use std::path::Path;

use shared::models::Order;
use tracing::{info, warn};

use super::money::total_mismatch;
use super::seed::seed_orders;
use crate::core::Config;
use crate::utils::{AppError, AppResult, ErrorCode};

/// Parse a fixture document
pub fn parse_orders(json: &str) -> AppResult<Vec<Order>> {
    let orders: Vec<Order> = serde_json::from_str(json).map_err(|e| {
        AppError::with_message(ErrorCode::FixtureLoadFailed, format!("Invalid order JSON: {e}"))
            .with_detail("line", e.line())
    })?;
    check_orders(&orders)?;
    Ok(orders)
}

/// Read and parse a fixture file
pub fn load_orders(path: impl AsRef<Path>) -> AppResult<Vec<Order>> {
    let path = path.as_ref();
    let json = std::fs::read_to_string(path).map_err(|e| {
        AppError::with_message(
            ErrorCode::FixtureLoadFailed,
            format!("Cannot read {}: {e}", path.display()),
        )
        .with_detail("path", path.display().to_string())
    })?;
    let orders = parse_orders(&json)?;
    info!(path = %path.display(), count = orders.len(), "Loaded order fixture");
    Ok(orders)
}

/// Orders for the configured source: the fixture file, or the built-in seed
pub fn orders_from_config(config: &Config) -> AppResult<Vec<Order>> {
    match &config.orders_file {
        Some(path) => load_orders(path),
        None => {
            let orders = seed_orders();
            info!(count = orders.len(), "Using built-in sample orders");
            Ok(orders)
        }
    }
}

/// Ids must be unique; other inconsistencies only warn
fn check_orders(orders: &[Order]) -> AppResult<()> {
    let mut seen = HashSet::with_capacity(orders.len());
    for order in orders {
        if !seen.insert(order.id.as_str()) {
            return Err(AppError::new(ErrorCode::DuplicateOrderId).with_detail("order_id", order.id.clone()));
        }
        if !order.status.is_known() {
            warn!(order_number = %order.order_number, "Order has an unrecognized status");
        }
        if let Some(diff) = total_mismatch(order) {
            warn!(
                order_number = %order.order_number,
                total_amount = order.total_amount,
                diff,
                "Order total does not match its line items"
            );
        }
    }
    Ok(())
}
