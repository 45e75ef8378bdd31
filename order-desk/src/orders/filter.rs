//! Visible-row derivation
//!
//! `visible_orders` is a pure function of the full collection, the status
//! strip selection and the filter bar. It never reorders rows; sorting is a
//! separate presentation step (see [`super::sort`]).
//!
//! An order is visible when every clause holds:
//!
//! 1. the strip selection is `All`, or the order matches the selected tag
//! 2. the filter-bar status is unset, or the order matches it
//! 3. the platform is unset, or equal
//! 4. the search text is unset, or a case-insensitive substring of the order
//!    number, customer name or tracking number
//! 5. the creation day lies in the date range (inclusive, open bounds allowed)
//! 6. the total lies in the amount range (inclusive, open bounds allowed)

use std::collections::{HashMap, HashSet};

use shared::models::Order;
use shared::order::{FilterOptions, SpecialStatus, StatusFilter, StatusTag};
use tracing::trace;

use super::money::amount_in_range;

/// Ids of orders whose recipient (name, phone, address) appears on another order
pub fn duplicate_recipient_ids(orders: &[Order]) -> HashSet<&str> {
    let mut counts: HashMap<(String, String, String), usize> = HashMap::new();
    for order in orders {
        *counts.entry(order.recipient_key()).or_default() += 1;
    }
    orders
        .iter()
        .filter(|o| counts.get(&o.recipient_key()).is_some_and(|n| *n > 1))
        .map(|o| o.id.as_str())
        .collect()
}

/// Whether an order belongs under a status tag
///
/// `duplicates` must come from [`duplicate_recipient_ids`] over the full
/// collection; it is only consulted for the duplicate-recipient bucket.
pub fn matches_tag(order: &Order, tag: StatusTag, duplicates: &HashSet<&str>) -> bool {
    match tag {
        StatusTag::Lifecycle(status) => order.status == status,
        StatusTag::Special(SpecialStatus::Abnormal) => order.is_abnormal,
        StatusTag::Special(SpecialStatus::TemporaryHold) => order.is_on_hold,
        StatusTag::Special(SpecialStatus::DuplicateRecipient) => {
            duplicates.contains(order.id.as_str())
        }
    }
}

/// Case-insensitive match on order number, customer name or tracking number
///
/// `needle` must already be lowercase.
pub fn matches_query(order: &Order, needle: &str) -> bool {
    order.order_number.to_lowercase().contains(needle)
        || order.customer_name.to_lowercase().contains(needle)
        || order
            .tracking_number
            .as_deref()
            .is_some_and(|t| t.to_lowercase().contains(needle))
}

/// The rows of the order table, in collection order
pub fn visible_orders<'a>(
    orders: &'a [Order],
    active: StatusFilter,
    filters: &FilterOptions,
) -> Vec<&'a Order> {
    let tags: Vec<StatusTag> = active.tag().into_iter().chain(filters.status).collect();
    let needs_duplicates = tags
        .iter()
        .any(|t| *t == StatusTag::Special(SpecialStatus::DuplicateRecipient));
    let duplicates = if needs_duplicates {
        duplicate_recipient_ids(orders)
    } else {
        HashSet::new()
    };
    let needle = filters.query().map(str::to_lowercase);

    let visible: Vec<&Order> = orders
        .iter()
        .filter(|order| tags.iter().all(|tag| matches_tag(order, *tag, &duplicates)))
        .filter(|order| filters.platform.is_none_or(|p| order.platform == p))
        .filter(|order| needle.as_deref().is_none_or(|q| matches_query(order, q)))
        .filter(|order| {
            filters
                .date_range
                .is_none_or(|range| range.contains(order.create_day()))
        })
        .filter(|order| {
            filters
                .amount_range
                .is_none_or(|range| amount_in_range(order.total_amount, &range))
        })
        .collect();

    trace!(
        total = orders.len(),
        visible = visible.len(),
        active = ?active,
        "Derived visible orders"
    );
    visible
}
