//! Customer-facing queue position and wait estimate.

use crate::domain::{Order, OrderId};
use crate::error::OrderError;

/// Waits at or below this many minutes trigger the "almost ready" hint.
pub const FIVE_MINUTE_THRESHOLD: u64 = 5;

/// What the status checker shows a customer for one order.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct QueueStatus {
    pub orders_ahead: usize,
    /// Minutes.
    pub wait_time: u64,
    pub is_ready: bool,
    pub five_minute_warning: bool,
}

impl QueueStatus {
    fn ready() -> Self {
        Self {
            orders_ahead: 0,
            wait_time: 0,
            is_ready: true,
            five_minute_warning: false,
        }
    }
}

/// Computes the queue position of `id` within `orders` (insertion order).
///
/// Only unresolved orders count towards the position. The wait is the order's
/// own estimate scaled by its 1-based position; the estimates of the orders
/// ahead are not summed.
///
/// # Errors
/// Returns `NotFound` if no order in the snapshot has this id.
pub fn queue_status(orders: &[Order], id: OrderId) -> Result<QueueStatus, OrderError> {
    let order = orders
        .iter()
        .find(|o| o.id == id)
        .ok_or(OrderError::NotFound(id))?;

    let position = orders
        .iter()
        .filter(|o| o.status.is_unresolved())
        .position(|o| o.id == id);

    let Some(index) = position else {
        return Ok(QueueStatus::ready());
    };

    let wait_time = u64::from(order.estimated_time) * (index as u64 + 1);
    Ok(QueueStatus {
        orders_ahead: index,
        wait_time,
        is_ready: false,
        five_minute_warning: wait_time <= FIVE_MINUTE_THRESHOLD,
    })
}

/// Parses an order number typed by a customer.
///
/// Accepts an optional leading `+` and a decimal fraction, which is truncated
/// (`"3.7"` names order 3). Returns `None` for anything else; such input is
/// ignored rather than reported.
pub fn parse_order_number(input: &str) -> Option<OrderId> {
    let trimmed = input.trim();
    let unsigned = trimmed.strip_prefix('+').unwrap_or(trimmed);
    let (whole, fraction) = match unsigned.split_once('.') {
        Some((whole, fraction)) => (whole, fraction),
        None => (unsigned, ""),
    };
    let all_digits = |s: &str| s.bytes().all(|b| b.is_ascii_digit());
    if whole.is_empty() || !all_digits(whole) || !all_digits(fraction) {
        return None;
    }
    whole.parse::<u64>().ok().map(OrderId)
}
