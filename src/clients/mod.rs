use tokio::sync::{broadcast, mpsc, oneshot};
use tracing::{debug, instrument};

use crate::actor_framework::ResourceClient;
use crate::domain::{MenuItem, MenuItemCreate, Order, OrderDraft, OrderId, OrderStatus, Role, Station, User, UserCreate};
use crate::error::{MenuError, OrderError, UserError};
use crate::messages::{OrderEvent, OrderRequest};
use crate::queue::{parse_order_number, QueueStatus};
use crate::stats::Stats;

pub mod macros;

// =============================================================================
// Macro for message-enum clients
// =============================================================================

macro_rules! client_method {
    ($client:ty => fn $method:ident($($param:ident: $param_type:ty),*) -> $return_type:ty as $request:ident::$variant:ident, Error = $error_type:ty) => {
        impl $client {
            #[instrument(skip(self))]
            pub async fn $method(&self, $($param: $param_type),*) -> Result<$return_type, $error_type> {
                debug!("Sending request");
                let (respond_to, response) = oneshot::channel();
                self.sender.send($request::$variant {
                    $($param,)*
                    respond_to,
                }).await.map_err(|_| <$error_type>::ActorCommunicationError("Actor closed".to_string()))?;

                response.await.map_err(|_| <$error_type>::ActorCommunicationError("Actor dropped".to_string()))?
            }
        }
    };
}

// =============================================================================
// 1. Order Client
// =============================================================================

/// Handle to the order service. Cheap to clone; every clone talks to the same store.
#[derive(Clone)]
pub struct OrderClient {
    sender: mpsc::Sender<OrderRequest>,
    events: broadcast::Sender<OrderEvent>,
}

impl OrderClient {
    pub fn new(sender: mpsc::Sender<OrderRequest>, events: broadcast::Sender<OrderEvent>) -> Self {
        Self { sender, events }
    }

    /// Receives every `OrderEvent` published after this call.
    pub fn subscribe(&self) -> broadcast::Receiver<OrderEvent> {
        self.events.subscribe()
    }

    /// Customer status check from raw text input.
    ///
    /// Returns `Ok(None)` when the input is not an order number; nothing is sent to the service.
    #[instrument(skip(self))]
    pub async fn check_status(&self, input: &str) -> Result<Option<QueueStatus>, OrderError> {
        let Some(id) = parse_order_number(input) else {
            debug!("Ignoring non-numeric order number");
            return Ok(None);
        };
        self.query_status(id).await.map(Some)
    }

    #[instrument(skip(self))]
    pub async fn shutdown(&self) -> Result<(), OrderError> {
        debug!("Sending request");
        self.sender
            .send(OrderRequest::Shutdown)
            .await
            .map_err(|_| OrderError::ActorCommunicationError("Actor closed".to_string()))
    }
}

client_method!(OrderClient => fn create_order(draft: OrderDraft) -> Order as OrderRequest::CreateOrder, Error = OrderError);
client_method!(OrderClient => fn get_order(id: OrderId) -> Option<Order> as OrderRequest::GetOrder, Error = OrderError);
client_method!(OrderClient => fn list_orders() -> Vec<Order> as OrderRequest::ListOrders, Error = OrderError);
client_method!(OrderClient => fn update_status(id: OrderId, status: OrderStatus) -> Order as OrderRequest::UpdateStatus, Error = OrderError);
client_method!(OrderClient => fn query_status(id: OrderId) -> QueueStatus as OrderRequest::QueryStatus, Error = OrderError);
client_method!(OrderClient => fn compute_stats() -> Stats as OrderRequest::ComputeStats, Error = OrderError);
client_method!(OrderClient => fn orders_at_station(station: Station) -> Vec<Order> as OrderRequest::OrdersAtStation, Error = OrderError);
client_method!(OrderClient => fn unresolved_orders() -> Vec<Order> as OrderRequest::UnresolvedOrders, Error = OrderError);

// =============================================================================
// 2. User Client
// =============================================================================

#[derive(Clone)]
pub struct UserClient {
    inner: ResourceClient<User>,
}

crate::impl_basic_client!(UserClient, User, UserCreate, UserError, user);

impl UserClient {
    #[instrument(skip(self))]
    pub async fn users_with_role(&self, role: Role) -> Result<Vec<User>, UserError> {
        let users = self.list_users().await?;
        Ok(users.into_iter().filter(|u| u.role == role).collect())
    }
}

// =============================================================================
// 3. Menu Client
// =============================================================================

#[derive(Clone)]
pub struct MenuClient {
    inner: ResourceClient<MenuItem>,
}

crate::impl_basic_client!(MenuClient, MenuItem, MenuItemCreate, MenuError, menu_item);
