//! Pluggable rules the order store consults when it creates or mutates orders.

use rand::rngs::StdRng;
use rand::{Rng, SeedableRng};

use crate::domain::{Order, OrderId, OrderStatus, Station};
use crate::error::OrderError;

// =============================================================================
// STATUS TRANSITIONS
// =============================================================================

/// Decides whether an order may move from one status to another.
pub trait TransitionPolicy: Send + Sync {
    fn check(&self, id: OrderId, from: OrderStatus, to: OrderStatus) -> Result<(), OrderError>;
}

/// Accepts every status change, including backwards moves and repeats.
///
/// This is how the stand's dashboards have always behaved.
#[derive(Debug, Clone, Copy, Default)]
pub struct Unconstrained;

impl TransitionPolicy for Unconstrained {
    fn check(&self, _id: OrderId, _from: OrderStatus, _to: OrderStatus) -> Result<(), OrderError> {
        Ok(())
    }
}

/// Strict state machine: `queued -> in-progress -> ready`, no skipping, nothing out of `ready`.
#[derive(Debug, Clone, Copy, Default)]
pub struct ForwardOnly;

impl TransitionPolicy for ForwardOnly {
    fn check(&self, id: OrderId, from: OrderStatus, to: OrderStatus) -> Result<(), OrderError> {
        match (from, to) {
            (OrderStatus::Queued, OrderStatus::InProgress)
            | (OrderStatus::InProgress, OrderStatus::Ready) => Ok(()),
            _ => Err(OrderError::InvalidTransition { id, from, to }),
        }
    }
}

/// Transition rule selected by configuration.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
pub enum TransitionMode {
    #[default]
    Unconstrained,
    ForwardOnly,
}

impl TransitionMode {
    pub fn build(self) -> Box<dyn TransitionPolicy> {
        match self {
            TransitionMode::Unconstrained => Box::new(Unconstrained),
            TransitionMode::ForwardOnly => Box::new(ForwardOnly),
        }
    }
}

// =============================================================================
// STATION ASSIGNMENT
// =============================================================================

/// Picks the station a new order is routed to, given the orders already in the store.
pub trait StationAssigner: Send {
    fn assign(&mut self, orders: &[Order]) -> Station;
}

/// Uniformly random station, ignoring load.
pub struct RandomStation {
    rng: StdRng,
}

impl RandomStation {
    pub fn new() -> Self {
        Self { rng: StdRng::from_entropy() }
    }

    pub fn seeded(seed: u64) -> Self {
        Self { rng: StdRng::seed_from_u64(seed) }
    }
}

impl Default for RandomStation {
    fn default() -> Self {
        Self::new()
    }
}

impl StationAssigner for RandomStation {
    fn assign(&mut self, _orders: &[Order]) -> Station {
        let number = self.rng.gen_range(1..=Station::COUNT);
        Station::try_from(number).unwrap_or(Station::FIRST)
    }
}

/// Cycles 1, 2, 3, 1, ... in creation order.
#[derive(Debug, Clone, Default)]
pub struct RoundRobin {
    next: u8,
}

impl StationAssigner for RoundRobin {
    fn assign(&mut self, _orders: &[Order]) -> Station {
        let number = self.next % Station::COUNT + 1;
        self.next = self.next.wrapping_add(1) % Station::COUNT;
        Station::try_from(number).unwrap_or(Station::FIRST)
    }
}

/// Station with the fewest unresolved orders; ties go to the lowest number.
#[derive(Debug, Clone, Copy, Default)]
pub struct LeastLoaded;

impl StationAssigner for LeastLoaded {
    fn assign(&mut self, orders: &[Order]) -> Station {
        Station::all()
            .min_by_key(|station| {
                orders
                    .iter()
                    .filter(|o| o.station == *station && o.status.is_unresolved())
                    .count()
            })
            .unwrap_or(Station::FIRST)
    }
}

/// Station assignment selected by configuration.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
pub enum StationPolicy {
    #[default]
    LeastLoaded,
    RoundRobin,
    Random,
}

impl StationPolicy {
    pub fn build(self) -> Box<dyn StationAssigner> {
        match self {
            StationPolicy::LeastLoaded => Box::new(LeastLoaded),
            StationPolicy::RoundRobin => Box::new(RoundRobin::default()),
            StationPolicy::Random => Box::new(RandomStation::new()),
        }
    }
}
