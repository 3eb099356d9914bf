use tokio::sync::oneshot;

use crate::domain::{Order, OrderDraft, OrderId, OrderStatus, Station};
use crate::error::OrderError;
use crate::queue::QueueStatus;
use crate::stats::Stats;

/// Generic type aliases for service communication
pub type ServiceResult<T, E> = std::result::Result<T, E>;
pub type ServiceResponse<T, E> = oneshot::Sender<ServiceResult<T, E>>;

/// Commands and queries handled by the order service, each with a oneshot responder.
#[derive(Debug)]
pub enum OrderRequest {
    CreateOrder {
        draft: OrderDraft,
        respond_to: ServiceResponse<Order, OrderError>,
    },
    GetOrder {
        id: OrderId,
        respond_to: ServiceResponse<Option<Order>, OrderError>,
    },
    ListOrders {
        respond_to: ServiceResponse<Vec<Order>, OrderError>,
    },
    UpdateStatus {
        id: OrderId,
        status: OrderStatus,
        respond_to: ServiceResponse<Order, OrderError>,
    },
    QueryStatus {
        id: OrderId,
        respond_to: ServiceResponse<QueueStatus, OrderError>,
    },
    ComputeStats {
        respond_to: ServiceResponse<Stats, OrderError>,
    },
    OrdersAtStation {
        station: Station,
        respond_to: ServiceResponse<Vec<Order>, OrderError>,
    },
    UnresolvedOrders {
        respond_to: ServiceResponse<Vec<Order>, OrderError>,
    },
    Shutdown,
}

/// Published by the order service after every successful mutation.
#[derive(Debug, Clone, PartialEq)]
pub enum OrderEvent {
    Created(Order),
    StatusChanged {
        id: OrderId,
        from: OrderStatus,
        to: OrderStatus,
    },
}

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum NotificationLevel {
    Success,
    Error,
}

/// Transient message for whoever is at the counter.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Notification {
    pub level: NotificationLevel,
    pub message: String,
}

impl Notification {
    pub fn success(message: impl Into<String>) -> Self {
        Self {
            level: NotificationLevel::Success,
            message: message.into(),
        }
    }

    pub fn error(message: impl Into<String>) -> Self {
        Self {
            level: NotificationLevel::Error,
            message: message.into(),
        }
    }
}

impl From<&OrderEvent> for Notification {
    fn from(event: &OrderEvent) -> Self {
        match event {
            OrderEvent::Created(order) => Notification::success(format!("Order #{} was added", order.id)),
            OrderEvent::StatusChanged { id, to, .. } => {
                Notification::success(format!("Order #{} was marked as \"{}\"", id, to))
            }
        }
    }
}

impl From<&OrderError> for Notification {
    fn from(error: &OrderError) -> Self {
        match error {
            OrderError::NotFound(_) => Notification::error("Order not found"),
            other => Notification::error(other.to_string()),
        }
    }
}
