//! Status strip tallies
//!
//! Counts always cover the full collection, never the filtered rows.

use shared::models::Order;
use shared::order::{OrderStatus, SpecialStatus, StatusCount, StatusTag};

use super::filter::{duplicate_recipient_ids, matches_tag};

/// One count per lifecycle status, in vocabulary order
///
/// Orders with an unrecognized status are counted nowhere.
pub fn status_counts(orders: &[Order]) -> Vec<StatusCount> {
    OrderStatus::ALL
        .iter()
        .map(|status| {
            let count = orders.iter().filter(|o| o.status == *status).count();
            StatusCount::new(*status, count)
        })
        .collect()
}

/// One count per special bucket (異常訂單區, 收件資訊重覆, 暫存區)
pub fn special_counts(orders: &[Order]) -> Vec<StatusCount> {
    let duplicates = duplicate_recipient_ids(orders);
    SpecialStatus::ALL
        .iter()
        .map(|special| {
            let tag = StatusTag::Special(*special);
            let count = orders
                .iter()
                .filter(|o| matches_tag(o, tag, &duplicates))
                .count();
            StatusCount::new(tag, count)
        })
        .collect()
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::orders::seed::seed_orders;

    fn count_of(counts: &[StatusCount], tag: impl Into<StatusTag>) -> usize {
        let tag = tag.into();
        counts
            .iter()
            .find(|c| c.status == tag)
            .map(|c| c.count)
            .unwrap()
    }

    #[test]
    fn test_seed_tallies() {
        let counts = status_counts(&seed_orders());
        assert_eq!(counts.len(), 10);
        for count in &counts {
            let expected = match count.status {
                StatusTag::Lifecycle(
                    OrderStatus::ReadyToShip | OrderStatus::Shipping | OrderStatus::Completed,
                ) => 1,
                _ => 0,
            };
            assert_eq!(count.count, expected, "{}", count.status.as_str());
        }
    }

    #[test]
    fn test_tallies_follow_vocabulary_order_with_labels() {
        let counts = status_counts(&seed_orders());
        let tags: Vec<StatusTag> = counts.iter().map(|c| c.status).collect();
        let expected: Vec<StatusTag> = OrderStatus::ALL.iter().map(|s| (*s).into()).collect();
        assert_eq!(tags, expected);
        assert_eq!(counts[5].label, "可出貨");
    }

    #[test]
    fn test_unknown_status_is_not_counted() {
        let mut orders = seed_orders();
        orders[0].status = OrderStatus::Unknown;
        let counts = status_counts(&orders);
        assert_eq!(counts.iter().map(|c| c.count).sum::<usize>(), 2);
    }

    #[test]
    fn test_special_counts_are_derived() {
        let mut orders = seed_orders();
        assert!(special_counts(&orders).iter().all(|c| c.count == 0));

        orders[0].is_abnormal = true;
        orders[1].is_abnormal = true;
        orders[2].is_on_hold = true;
        let mut twin = orders[2].clone();
        twin.id = "4".to_string();
        orders.push(twin);

        let counts = special_counts(&orders);
        assert_eq!(count_of(&counts, SpecialStatus::Abnormal), 2);
        assert_eq!(count_of(&counts, SpecialStatus::DuplicateRecipient), 2);
        assert_eq!(count_of(&counts, SpecialStatus::TemporaryHold), 2);
    }
}
