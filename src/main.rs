use anyhow::Context;
use tracing::{info, warn, Instrument};

use crepe_queue::domain::{CustomCrepe, OrderDraft, OrderStatus, Role, Station};
use crepe_queue::messages::Notification;
use crepe_queue::{setup_tracing, Config, CrepeSystem};

#[tokio::main]
async fn main() -> anyhow::Result<()> {
    let config = Config::from_env().context("reading CREPE_* configuration")?;
    setup_tracing(&config.log_filter);

    info!(
        station_policy = ?config.station_policy,
        transitions = ?config.transition_mode,
        "Starting crêpe stand"
    );

    let system = CrepeSystem::start(&config).await.context("starting actors")?;
    let mut events = system.order_client.subscribe();

    // Cashier: one predefined crêpe and one custom creation
    let span = tracing::info_span!("cashier");
    async {
        let menu = system.menu_client.list_menu_items().await?;
        if let Some(item) = menu.iter().find(|i| i.name == "Tropical Dream") {
            let draft = OrderDraft::from_menu_item("Lena Hoffmann", item)?;
            let order = system.order_client.create_order(draft).await?;
            info!(order_id = %order.id, station = %order.station, "Predefined crêpe ordered");
        }

        let mut custom = CustomCrepe::new("Mango Matcha");
        custom.add_ingredient("Mango")?;
        custom.add_ingredient("Matcha-Pulver")?;
        let order = system.order_client.create_order(custom.into_draft("Jonas Wolf")?).await?;
        info!(order_id = %order.id, price = order.price, "Custom crêpe ordered");
        anyhow::Ok(())
    }
    .instrument(span)
    .await?;

    // Maker: work through station 1
    let span = tracing::info_span!("maker");
    async {
        let station = Station::FIRST;
        for order in system.order_client.orders_at_station(station).await? {
            if order.status == OrderStatus::Queued {
                system.order_client.update_status(order.id, OrderStatus::InProgress).await?;
            }
        }
        anyhow::Ok(())
    }
    .instrument(span)
    .await?;

    // Customer: status checks, including input that is ignored
    let span = tracing::info_span!("customer");
    async {
        for input in ["2", "4", "42", "abc"] {
            match system.order_client.check_status(input).await {
                Ok(Some(status)) => info!(
                    input,
                    orders_ahead = status.orders_ahead,
                    wait_time = status.wait_time,
                    is_ready = status.is_ready,
                    five_minute_warning = status.five_minute_warning,
                    "Status checked"
                ),
                Ok(None) => info!(input, "Not an order number"),
                Err(e) => warn!(input, notification = %Notification::from(&e).message, "Status check failed"),
            }
        }
        anyhow::Ok(())
    }
    .instrument(span)
    .await?;

    // Owner dashboard
    let stats = system.order_client.compute_stats().await?;
    let owners = system.user_client.users_with_role(Role::Owner).await?;
    info!(
        owner = owners.first().map(|u| u.name.as_str()).unwrap_or("-"),
        total_revenue = stats.total_revenue,
        orders_today = stats.orders_today,
        average_wait_time = stats.average_wait_time,
        "Dashboard"
    );

    while let Ok(event) = events.try_recv() {
        info!(notification = %Notification::from(&event).message, "Notification");
    }

    system.shutdown().await?;
    info!("Application completed successfully");
    Ok(())
}
