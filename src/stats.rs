//! Owner dashboard figures, derived on demand from an order snapshot.

use chrono::{Local, NaiveDate};

use crate::domain::Order;

#[derive(Debug, Clone, Copy, PartialEq)]
pub struct Stats {
    pub total_revenue: f64,
    pub orders_today: usize,
    /// Mean per-order estimate in minutes; 0 for an empty snapshot.
    pub average_wait_time: f64,
}

/// Aggregates `orders`, counting as "today" those created on `today` in local time.
pub fn compute_stats_on(orders: &[Order], today: NaiveDate) -> Stats {
    let total_revenue = orders.iter().map(|o| o.price).sum();
    let orders_today = orders
        .iter()
        .filter(|o| o.created_at.with_timezone(&Local).date_naive() == today)
        .count();
    let average_wait_time = if orders.is_empty() {
        0.0
    } else {
        let total: u64 = orders.iter().map(|o| u64::from(o.estimated_time)).sum();
        total as f64 / orders.len() as f64
    };

    Stats {
        total_revenue,
        orders_today,
        average_wait_time,
    }
}

/// Aggregates `orders` against the current local date.
pub fn compute_stats(orders: &[Order]) -> Stats {
    compute_stats_on(orders, Local::now().date_naive())
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::domain::{OrderDraft, OrderId, Station};
    use chrono::{Duration, Utc};

    #[test]
    fn empty_snapshot_is_all_zero() {
        assert_eq!(
            compute_stats(&[]),
            Stats {
                total_revenue: 0.0,
                orders_today: 0,
                average_wait_time: 0.0,
            }
        );
    }

    #[test]
    fn sums_revenue_and_averages_estimates() {
        let now = Utc::now();
        let orders: Vec<Order> = [(4.5, 15), (5.0, 12), (4.75, 0)]
            .into_iter()
            .enumerate()
            .map(|(i, (price, minutes))| {
                OrderDraft::new("Test", vec!["Crêpe".into()], price, minutes)
                    .unwrap()
                    .into_order(OrderId(i as u64 + 1), Station::FIRST, now)
            })
            .collect();

        let stats = compute_stats_on(&orders, now.with_timezone(&Local).date_naive());
        assert_eq!(stats.total_revenue, 14.25);
        assert_eq!(stats.orders_today, 3);
        assert_eq!(stats.average_wait_time, 9.0);
    }

    #[test]
    fn only_orders_from_today_are_counted() {
        let now = Utc::now();
        let draft = OrderDraft::new("Test", vec!["Crêpe".into()], 4.5, 10).unwrap();
        let orders = vec![
            draft.clone().into_order(OrderId(1), Station::FIRST, now - Duration::days(2)),
            draft.into_order(OrderId(2), Station::FIRST, now),
        ];
        let stats = compute_stats_on(&orders, now.with_timezone(&Local).date_naive());
        assert_eq!(stats.orders_today, 1);
    }
}
