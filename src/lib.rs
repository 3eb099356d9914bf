//! Order lifecycle and queue model for a crêpe stand.
//!
//! Cashiers create orders, makers move them through `queued -> in-progress -> ready`,
//! customers ask how many orders are ahead of theirs, and the owner reads aggregate
//! figures. All state lives in one [`store::OrderStore`] owned by the
//! [`actors::OrderService`] task, which every [`clients::OrderClient`] talks to.

pub mod domain;
pub mod error;
pub mod policy;
pub mod store;
pub mod queue;
pub mod stats;
pub mod config;

pub mod actor_framework;
pub mod user_actor;
pub mod menu_actor;

pub mod messages;
pub mod actors;
pub mod clients;
pub mod app_system;

#[cfg(test)]
mod mock_framework;
#[cfg(test)]
mod integration_tests;

pub use app_system::{setup_tracing, CrepeSystem};
pub use config::Config;
pub use error::{MenuError, OrderError, SystemError, UserError};
