use std::fmt;
use std::str::FromStr;

use chrono::{DateTime, Utc};

use crate::error::OrderError;

/// Preparation estimate used by the cashier flow when a draft does not name one.
pub const DEFAULT_ESTIMATED_MINUTES: u32 = 10;

/// Sequential order number, 1-based.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, PartialOrd, Ord)]
pub struct OrderId(pub u64);

impl fmt::Display for OrderId {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{}", self.0)
    }
}

/// Where an order is in its lifecycle.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum OrderStatus {
    Queued,
    InProgress,
    Ready,
}

impl OrderStatus {
    pub fn as_str(&self) -> &'static str {
        match self {
            OrderStatus::Queued => "queued",
            OrderStatus::InProgress => "in-progress",
            OrderStatus::Ready => "ready",
        }
    }

    /// Queued and in-progress orders still occupy a place in the queue.
    pub fn is_unresolved(&self) -> bool {
        !matches!(self, OrderStatus::Ready)
    }
}

impl fmt::Display for OrderStatus {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.as_str())
    }
}

impl FromStr for OrderStatus {
    type Err = OrderError;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        match s {
            "queued" => Ok(OrderStatus::Queued),
            "in-progress" => Ok(OrderStatus::InProgress),
            "ready" => Ok(OrderStatus::Ready),
            other => Err(OrderError::InvalidInput(format!("unknown status '{}'", other))),
        }
    }
}

/// One of the physical preparation points in the kitchen.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, PartialOrd, Ord)]
pub struct Station(u8);

impl Station {
    pub const COUNT: u8 = 3;
    pub const FIRST: Station = Station(1);

    pub fn all() -> impl Iterator<Item = Station> {
        (1..=Self::COUNT).map(Station)
    }

    pub fn number(&self) -> u8 {
        self.0
    }
}

impl TryFrom<u8> for Station {
    type Error = OrderError;

    fn try_from(value: u8) -> Result<Self, Self::Error> {
        if (1..=Self::COUNT).contains(&value) {
            Ok(Station(value))
        } else {
            Err(OrderError::InvalidInput(format!(
                "station must be between 1 and {}, got {}",
                Self::COUNT,
                value
            )))
        }
    }
}

impl fmt::Display for Station {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{}", self.0)
    }
}

/// A customer purchase in flight.
///
/// Only `status` changes after creation, and only through the order store.
#[derive(Debug, Clone, PartialEq)]
pub struct Order {
    pub id: OrderId,
    pub status: OrderStatus,
    pub customer_name: String,
    pub items: Vec<String>,
    pub price: f64,
    /// Base preparation estimate in minutes, not the cumulative wait.
    pub estimated_time: u32,
    pub station: Station,
    pub created_at: DateTime<Utc>,
}

/// Payload for creating a new order. The store assigns id, status, station and timestamp.
#[derive(Debug, Clone, PartialEq)]
pub struct OrderDraft {
    pub customer_name: String,
    pub items: Vec<String>,
    pub price: f64,
    pub estimated_time: u32,
}

impl OrderDraft {
    pub fn new(
        customer_name: impl Into<String>,
        items: Vec<String>,
        price: f64,
        estimated_time: u32,
    ) -> Result<Self, OrderError> {
        let draft = Self {
            customer_name: customer_name.into(),
            items,
            price,
            estimated_time,
        };
        draft.validate()?;
        Ok(draft)
    }

    /// Checks the invariants a draft must hold before it can become an order.
    ///
    /// # Errors
    /// Returns `InvalidInput` when the item list is empty, an item name is blank,
    /// or the price is negative or not finite.
    pub fn validate(&self) -> Result<(), OrderError> {
        if self.items.is_empty() {
            return Err(OrderError::InvalidInput("order has no items".to_string()));
        }
        if self.items.iter().any(|item| item.trim().is_empty()) {
            return Err(OrderError::InvalidInput("item name is blank".to_string()));
        }
        if !self.price.is_finite() || self.price < 0.0 {
            return Err(OrderError::InvalidInput(format!("invalid price {}", self.price)));
        }
        Ok(())
    }

    pub(crate) fn into_order(
        self,
        id: OrderId,
        station: Station,
        created_at: DateTime<Utc>,
    ) -> Order {
        Order {
            id,
            status: OrderStatus::Queued,
            customer_name: self.customer_name,
            items: self.items,
            price: self.price,
            estimated_time: self.estimated_time,
            station,
            created_at,
        }
    }
}
