//! Table column sort
//!
//! Applied after derivation. Ties keep collection order.

use std::cmp::Ordering;

use shared::models::Order;

use super::money::to_decimal;

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum SortField {
    OrderNumber,
    CreateDate,
    TotalAmount,
}

impl SortField {
    pub const ALL: [SortField; 3] = [
        SortField::OrderNumber,
        SortField::CreateDate,
        SortField::TotalAmount,
    ];

    pub const fn label(&self) -> &'static str {
        match self {
            Self::OrderNumber => "訂單編號",
            Self::CreateDate => "建立日期",
            Self::TotalAmount => "總金額",
        }
    }

    fn compare(&self, a: &Order, b: &Order) -> Ordering {
        match self {
            Self::OrderNumber => a.order_number.cmp(&b.order_number),
            Self::CreateDate => a.create_date.cmp(&b.create_date),
            Self::TotalAmount => to_decimal(a.total_amount).cmp(&to_decimal(b.total_amount)),
        }
    }
}

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum SortDirection {
    Asc,
    Desc,
}

impl SortDirection {
    pub const fn flipped(self) -> Self {
        match self {
            Self::Asc => Self::Desc,
            Self::Desc => Self::Asc,
        }
    }

    pub const fn arrow(&self) -> &'static str {
        match self {
            Self::Asc => "↑",
            Self::Desc => "↓",
        }
    }
}

/// Active column sort; `None` keeps collection order
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
pub struct TableSort {
    active: Option<(SortField, SortDirection)>,
}

impl TableSort {
    pub fn field(&self) -> Option<SortField> {
        self.active.map(|(field, _)| field)
    }

    pub fn direction(&self) -> Option<SortDirection> {
        self.active.map(|(_, direction)| direction)
    }

    /// Same field flips direction; a new field starts descending
    pub fn toggle(&mut self, field: SortField) {
        self.active = match self.active {
            Some((current, direction)) if current == field => Some((field, direction.flipped())),
            _ => Some((field, SortDirection::Desc)),
        };
    }

    /// Column-header cycle for the keyboard: unsorted → each field → unsorted
    pub fn cycle_field(&mut self) {
        self.active = match self.field() {
            None => Some((SortField::ALL[0], SortDirection::Desc)),
            Some(field) => {
                let idx = SortField::ALL.iter().position(|f| *f == field).unwrap_or(0);
                SortField::ALL
                    .get(idx + 1)
                    .map(|next| (*next, SortDirection::Desc))
            }
        };
    }

    /// Sort rows in place (stable)
    pub fn apply(&self, rows: &mut [&Order]) {
        if let Some((field, direction)) = self.active {
            rows.sort_by(|a, b| {
                let ord = field.compare(a, b);
                match direction {
                    SortDirection::Asc => ord,
                    SortDirection::Desc => ord.reverse(),
                }
            });
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::orders::seed::seed_orders;

    fn sorted_ids(sort: &TableSort, orders: &[Order]) -> Vec<String> {
        let mut rows: Vec<&Order> = orders.iter().collect();
        sort.apply(&mut rows);
        rows.iter().map(|o| o.id.clone()).collect()
    }

    #[test]
    fn test_default_keeps_collection_order() {
        let orders = seed_orders();
        assert_eq!(sorted_ids(&TableSort::default(), &orders), vec!["1", "2", "3"]);
    }

    #[test]
    fn test_toggle_transitions() {
        let mut sort = TableSort::default();
        sort.toggle(SortField::TotalAmount);
        assert_eq!(sort.direction(), Some(SortDirection::Desc));
        sort.toggle(SortField::TotalAmount);
        assert_eq!(sort.direction(), Some(SortDirection::Asc));
        sort.toggle(SortField::CreateDate);
        assert_eq!(sort.field(), Some(SortField::CreateDate));
        assert_eq!(sort.direction(), Some(SortDirection::Desc));
    }

    #[test]
    fn test_apply_by_amount() {
        let orders = seed_orders();
        let mut sort = TableSort::default();
        sort.toggle(SortField::TotalAmount);
        assert_eq!(sorted_ids(&sort, &orders), vec!["2", "1", "3"]);
        sort.toggle(SortField::TotalAmount);
        assert_eq!(sorted_ids(&sort, &orders), vec!["3", "1", "2"]);
    }

    #[test]
    fn test_ties_keep_collection_order() {
        let mut orders = seed_orders();
        for order in &mut orders {
            order.total_amount = 100.0;
        }
        let mut sort = TableSort::default();
        sort.toggle(SortField::TotalAmount);
        assert_eq!(sorted_ids(&sort, &orders), vec!["1", "2", "3"]);
    }

    #[test]
    fn test_cycle_field_wraps_to_unsorted() {
        let mut sort = TableSort::default();
        let mut seen = Vec::new();
        for _ in 0..4 {
            sort.cycle_field();
            seen.push(sort.field());
        }
        assert_eq!(
            seen,
            vec![
                Some(SortField::OrderNumber),
                Some(SortField::CreateDate),
                Some(SortField::TotalAmount),
                None
            ]
        );
    }
}
