use std::sync::atomic::{AtomicU32, Ordering};
use std::sync::Arc;

use tracing::{error, info};

use crate::actor_framework::ResourceActor;
use crate::actors::OrderService;
use crate::app_system::seed::{demo_orders, path_to};
use crate::clients::{MenuClient, OrderClient, UserClient};
use crate::config::Config;
use crate::domain::{default_menu, default_staff, MenuItem, User};
use crate::error::SystemError;
use crate::store::OrderStore;

/// The running stand: one order service plus the staff and menu catalogs.
///
/// Responsible for starting up actors, wiring them together, and handling shutdown.
pub struct CrepeSystem {
    pub order_client: OrderClient,
    pub user_client: UserClient,
    pub menu_client: MenuClient,
    handles: Vec<tokio::task::JoinHandle<()>>,
}

impl CrepeSystem {
    /// Spawns the actors around an empty store built from `config`, then loads the catalogs and demo orders.
    pub async fn start(config: &Config) -> Result<Self, SystemError> {
        let store = OrderStore::new(
            config.station_policy.build(),
            config.transition_mode.build(),
        );
        let system = Self::with_store(config.mailbox_capacity, store);
        system.seed_catalogs().await?;
        if config.seed_demo {
            system.seed_demo_orders().await?;
        }
        Ok(system)
    }

    /// Spawns the actors around a caller-supplied store. Catalogs start empty.
    pub fn with_store(buffer_size: usize, store: OrderStore) -> Self {
        // 1. Staff catalog
        let user_id_counter = Arc::new(AtomicU32::new(1));
        let next_user_id = move || user_id_counter.fetch_add(1, Ordering::SeqCst);
        let (user_actor, user_resource_client) = ResourceActor::<User>::new(buffer_size, next_user_id);
        let user_client = UserClient::new(user_resource_client);
        let user_handle = tokio::spawn(user_actor.run());

        // 2. Menu catalog
        let menu_id_counter = Arc::new(AtomicU32::new(1));
        let next_menu_id = move || menu_id_counter.fetch_add(1, Ordering::SeqCst);
        let (menu_actor, menu_resource_client) = ResourceActor::<MenuItem>::new(buffer_size, next_menu_id);
        let menu_client = MenuClient::new(menu_resource_client);
        let menu_handle = tokio::spawn(menu_actor.run());

        // 3. Order service
        let (order_service, order_client) = OrderService::new(buffer_size, store);
        let order_handle = tokio::spawn(order_service.run());

        Self {
            order_client,
            user_client,
            menu_client,
            handles: vec![user_handle, menu_handle, order_handle],
        }
    }

    pub async fn seed_catalogs(&self) -> Result<(), SystemError> {
        for user in default_staff() {
            self.user_client.create_user(user).await?;
        }
        for item in default_menu() {
            self.menu_client.create_menu_item(item).await?;
        }
        info!("Reference data loaded");
        Ok(())
    }

    pub async fn seed_demo_orders(&self) -> Result<(), SystemError> {
        for (draft, target) in demo_orders() {
            let order = self.order_client.create_order(draft).await?;
            for status in path_to(target) {
                self.order_client.update_status(order.id, *status).await?;
            }
        }
        info!("Demo orders loaded");
        Ok(())
    }

    pub async fn shutdown(self) -> Result<(), SystemError> {
        info!("Shutting down system...");
        self.order_client.shutdown().await?;

        // Catalog actors stop once every client handle is dropped.
        drop(self.order_client);
        drop(self.user_client);
        drop(self.menu_client);

        for handle in self.handles {
            if let Err(e) = handle.await {
                error!("Actor task failed: {:?}", e);
                return Err(SystemError::TaskFailed(e.to_string()));
            }
        }

        info!("System shutdown complete.");
        Ok(())
    }
}
