//! The authoritative, insertion-ordered list of orders.

use chrono::{DateTime, Local, Utc};

use crate::domain::{Order, OrderDraft, OrderId, OrderStatus, Station};
use crate::error::OrderError;
use crate::policy::{LeastLoaded, StationAssigner, TransitionPolicy, Unconstrained};
use crate::queue::{self, QueueStatus};
use crate::stats::{self, Stats};

pub type Clock = Box<dyn Fn() -> DateTime<Utc> + Send + Sync>;

/// Owns every order for the lifetime of the process.
///
/// Orders are never removed, so `len() + 1` is always a fresh id.
pub struct OrderStore {
    orders: Vec<Order>,
    stations: Box<dyn StationAssigner>,
    transitions: Box<dyn TransitionPolicy>,
    clock: Clock,
}

impl OrderStore {
    pub fn new(stations: Box<dyn StationAssigner>, transitions: Box<dyn TransitionPolicy>) -> Self {
        Self {
            orders: Vec::new(),
            stations,
            transitions,
            clock: Box::new(Utc::now),
        }
    }

    /// Replaces the source of creation timestamps.
    pub fn with_clock(mut self, clock: impl Fn() -> DateTime<Utc> + Send + Sync + 'static) -> Self {
        self.clock = Box::new(clock);
        self
    }

    /// Validates `draft`, then appends it as a queued order.
    ///
    /// # Errors
    /// Returns `InvalidInput` if the draft fails validation.
    pub fn create_order(&mut self, draft: OrderDraft) -> Result<Order, OrderError> {
        draft.validate()?;
        let id = OrderId(self.orders.len() as u64 + 1);
        let station = self.stations.assign(&self.orders);
        let order = draft.into_order(id, station, (self.clock)());
        self.orders.push(order.clone());
        Ok(order)
    }

    /// Snapshot in insertion order.
    pub fn list_orders(&self) -> &[Order] {
        &self.orders
    }

    pub fn get(&self, id: OrderId) -> Option<&Order> {
        self.orders.iter().find(|o| o.id == id)
    }

    /// Writes a new status after the transition policy accepts it. No other field changes.
    ///
    /// # Errors
    /// Returns `NotFound` for an unknown id, or whatever the transition policy rejects with.
    pub fn update_status(&mut self, id: OrderId, status: OrderStatus) -> Result<Order, OrderError> {
        let order = self
            .orders
            .iter_mut()
            .find(|o| o.id == id)
            .ok_or(OrderError::NotFound(id))?;
        self.transitions.check(id, order.status, status)?;
        order.status = status;
        Ok(order.clone())
    }

    pub fn query_status(&self, id: OrderId) -> Result<QueueStatus, OrderError> {
        queue::queue_status(&self.orders, id)
    }

    /// Aggregates the store, taking "today" from the store's clock.
    pub fn stats(&self) -> Stats {
        let today = (self.clock)().with_timezone(&Local).date_naive();
        stats::compute_stats_on(&self.orders, today)
    }

    /// The kitchen view of one station, in insertion order.
    pub fn orders_at_station(&self, station: Station) -> Vec<Order> {
        self.orders
            .iter()
            .filter(|o| o.station == station)
            .cloned()
            .collect()
    }

    pub fn unresolved_orders(&self) -> Vec<Order> {
        self.orders
            .iter()
            .filter(|o| o.status.is_unresolved())
            .cloned()
            .collect()
    }

    pub fn len(&self) -> usize {
        self.orders.len()
    }

    pub fn is_empty(&self) -> bool {
        self.orders.is_empty()
    }
}

impl Default for OrderStore {
    fn default() -> Self {
        Self::new(Box::new(LeastLoaded), Box::new(Unconstrained))
    }
}
