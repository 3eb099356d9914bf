use tokio::sync::{broadcast, mpsc};
use tracing::{debug, info, instrument, warn};

use crate::clients::OrderClient;
use crate::domain::{Order, OrderDraft, OrderId, OrderStatus};
use crate::error::OrderError;
use crate::messages::{OrderEvent, OrderRequest, ServiceResponse};
use crate::queue::QueueStatus;
use crate::store::OrderStore;

/// Capacity of the change-notification channel; slow subscribers lag rather than block.
const EVENT_CAPACITY: usize = 64;

// =============================================================================
// ORDER SERVICE
// =============================================================================

/// Owns the `OrderStore` and applies every command in mailbox order,
/// so concurrent cashiers and makers never lose an update.
pub struct OrderService {
    receiver: mpsc::Receiver<OrderRequest>,
    events: broadcast::Sender<OrderEvent>,
    store: OrderStore,
}

impl OrderService {
    pub fn new(buffer_size: usize, store: OrderStore) -> (Self, OrderClient) {
        let (sender, receiver) = mpsc::channel(buffer_size);
        let (events, _) = broadcast::channel(EVENT_CAPACITY);
        let service = Self {
            receiver,
            events: events.clone(),
            store,
        };
        let client = OrderClient::new(sender, events);
        (service, client)
    }

    #[instrument(name = "order_service", skip(self))]
    pub async fn run(mut self) {
        info!("OrderService starting");
        while let Some(msg) = self.receiver.recv().await {
            match msg {
                OrderRequest::CreateOrder { draft, respond_to } => {
                    self.handle_create_order(draft, respond_to);
                }
                OrderRequest::GetOrder { id, respond_to } => {
                    let _ = respond_to.send(Ok(self.store.get(id).cloned()));
                }
                OrderRequest::ListOrders { respond_to } => {
                    let _ = respond_to.send(Ok(self.store.list_orders().to_vec()));
                }
                OrderRequest::UpdateStatus { id, status, respond_to } => {
                    self.handle_update_status(id, status, respond_to);
                }
                OrderRequest::QueryStatus { id, respond_to } => {
                    self.handle_query_status(id, respond_to);
                }
                OrderRequest::ComputeStats { respond_to } => {
                    let _ = respond_to.send(Ok(self.store.stats()));
                }
                OrderRequest::OrdersAtStation { station, respond_to } => {
                    let _ = respond_to.send(Ok(self.store.orders_at_station(station)));
                }
                OrderRequest::UnresolvedOrders { respond_to } => {
                    let _ = respond_to.send(Ok(self.store.unresolved_orders()));
                }
                OrderRequest::Shutdown => {
                    info!("OrderService shutting down");
                    break;
                }
            }
        }
        info!(orders = self.store.len(), "OrderService stopped");
    }

    #[instrument(fields(customer = %draft.customer_name, items = draft.items.len()), skip(self, draft, respond_to))]
    fn handle_create_order(&mut self, draft: OrderDraft, respond_to: ServiceResponse<Order, OrderError>) {
        debug!("Processing create_order request");
        match self.store.create_order(draft) {
            Ok(order) => {
                info!(order_id = %order.id, station = %order.station, "Order created successfully");
                self.publish(OrderEvent::Created(order.clone()));
                let _ = respond_to.send(Ok(order));
            }
            Err(e) => {
                warn!(error = %e, "Order rejected");
                let _ = respond_to.send(Err(e));
            }
        }
    }

    #[instrument(fields(order_id = %id, status = %status), skip(self, respond_to))]
    fn handle_update_status(
        &mut self,
        id: OrderId,
        status: OrderStatus,
        respond_to: ServiceResponse<Order, OrderError>,
    ) {
        debug!("Processing update_status request");
        let previous = self.store.get(id).map(|o| o.status);
        match self.store.update_status(id, status) {
            Ok(order) => {
                info!("Order status updated");
                if let Some(from) = previous {
                    self.publish(OrderEvent::StatusChanged { id, from, to: status });
                }
                let _ = respond_to.send(Ok(order));
            }
            Err(e) => {
                warn!(error = %e, "Status update rejected");
                let _ = respond_to.send(Err(e));
            }
        }
    }

    #[instrument(fields(order_id = %id), skip(self, respond_to))]
    fn handle_query_status(&self, id: OrderId, respond_to: ServiceResponse<QueueStatus, OrderError>) {
        debug!("Processing query_status request");
        let result = self.store.query_status(id);
        match &result {
            Ok(status) => debug!(
                orders_ahead = status.orders_ahead,
                wait_time = status.wait_time,
                is_ready = status.is_ready,
                "Queue status computed"
            ),
            Err(e) => debug!(error = %e, "Queue status unavailable"),
        }
        let _ = respond_to.send(result);
    }

    fn publish(&self, event: OrderEvent) {
        // No subscribers is fine.
        let _ = self.events.send(event);
    }
}
