//! The stand's demo data.

use crate::domain::{OrderDraft, OrderStatus};

/// The four orders the dashboards open with, and the status each should end up in.
///
/// Demo orders carry no price, so revenue starts at zero.
pub fn demo_orders() -> Vec<(OrderDraft, OrderStatus)> {
    let order = |customer: &str, items: &[&str], price: f64, minutes: u32| OrderDraft {
        customer_name: customer.to_string(),
        items: items.iter().map(|i| i.to_string()).collect(),
        price,
        estimated_time: minutes,
    };

    vec![
        (order("Anna Müller", &["Classic Nutella", "Banana"], 0.0, 15), OrderStatus::Queued),
        (order("Lars Schmidt", &["Savory Ham & Cheese"], 0.0, 12), OrderStatus::Queued),
        (order("Sophie Becker", &["Berry Delight"], 0.0, 5), OrderStatus::InProgress),
        (order("Max Weber", &["Green Tea Matcha"], 0.0, 0), OrderStatus::Ready),
    ]
}

/// Forward path from `queued` to `target`, so seeding works under any transition policy.
pub(crate) fn path_to(target: OrderStatus) -> &'static [OrderStatus] {
    match target {
        OrderStatus::Queued => &[],
        OrderStatus::InProgress => &[OrderStatus::InProgress],
        OrderStatus::Ready => &[OrderStatus::InProgress, OrderStatus::Ready],
    }
}
