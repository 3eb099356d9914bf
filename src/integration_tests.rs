#[cfg(test)]
mod tests {
    use tokio::sync::broadcast::error::TryRecvError;

    use crate::app_system::CrepeSystem;
    use crate::config::Config;
    use crate::domain::{OrderDraft, OrderId, OrderStatus, Role, Station};
    use crate::error::OrderError;
    use crate::messages::OrderEvent;
    use crate::policy::{ForwardOnly, LeastLoaded, TransitionMode};
    use crate::store::OrderStore;

    async fn demo_system() -> CrepeSystem {
        CrepeSystem::start(&Config::default()).await.unwrap()
    }

    #[tokio::test]
    async fn test_demo_orders_open_the_queue() {
        let system = demo_system().await;
        let orders = system.order_client.list_orders().await.unwrap();

        let summary: Vec<(u64, OrderStatus, u32, u8)> = orders
            .iter()
            .map(|o| (o.id.0, o.status, o.estimated_time, o.station.number()))
            .collect();
        assert_eq!(
            summary,
            vec![
                (1, OrderStatus::Queued, 15, 1),
                (2, OrderStatus::Queued, 12, 2),
                (3, OrderStatus::InProgress, 5, 3),
                (4, OrderStatus::Ready, 0, 1),
            ]
        );

        system.shutdown().await.unwrap();
    }

    #[tokio::test]
    async fn test_query_status_scenarios() {
        let system = demo_system().await;
        let client = &system.order_client;

        let third = client.query_status(OrderId(3)).await.unwrap();
        assert_eq!(third.orders_ahead, 2);
        assert_eq!(third.wait_time, 15);
        assert!(!third.is_ready);
        assert!(!third.five_minute_warning);

        let fourth = client.query_status(OrderId(4)).await.unwrap();
        assert!(fourth.is_ready);
        assert_eq!(fourth.wait_time, 0);

        client.update_status(OrderId(1), OrderStatus::InProgress).await.unwrap();
        let first = client.query_status(OrderId(1)).await.unwrap();
        assert_eq!(first.orders_ahead, 0);
        assert_eq!(first.wait_time, 15);

        assert_eq!(
            client.query_status(OrderId(99)).await,
            Err(OrderError::NotFound(OrderId(99)))
        );

        system.shutdown().await.unwrap();
    }

    #[tokio::test]
    async fn test_update_status_leaves_other_fields_alone() {
        let system = demo_system().await;
        let client = &system.order_client;

        let before = client.get_order(OrderId(2)).await.unwrap().unwrap();
        client.update_status(OrderId(2), OrderStatus::Ready).await.unwrap();
        let after = client.get_order(OrderId(2)).await.unwrap().unwrap();

        assert_eq!(after.status, OrderStatus::Ready);
        assert_eq!(after.customer_name, before.customer_name);
        assert_eq!(after.items, before.items);
        assert_eq!(after.price, before.price);
        assert_eq!(after.station, before.station);
        assert_eq!(after.created_at, before.created_at);

        assert_eq!(
            client.update_status(OrderId(5), OrderStatus::Ready).await,
            Err(OrderError::NotFound(OrderId(5)))
        );

        system.shutdown().await.unwrap();
    }

    #[tokio::test]
    async fn test_concurrent_cashiers_get_distinct_ids() {
        let system = CrepeSystem::with_store(8, OrderStore::default());

        let mut tasks = Vec::new();
        for n in 0..20 {
            let client = system.order_client.clone();
            tasks.push(tokio::spawn(async move {
                let draft = OrderDraft::new(format!("Guest {}", n), vec!["Berry Delight".into()], 4.8, 10).unwrap();
                client.create_order(draft).await.unwrap().id.0
            }));
        }
        let mut ids = Vec::new();
        for task in tasks {
            ids.push(task.await.unwrap());
        }
        ids.sort_unstable();
        assert_eq!(ids, (1..=20).collect::<Vec<u64>>());

        let listed: Vec<u64> = system
            .order_client
            .list_orders()
            .await
            .unwrap()
            .iter()
            .map(|o| o.id.0)
            .collect();
        assert_eq!(listed, (1..=20).collect::<Vec<u64>>());

        system.shutdown().await.unwrap();
    }

    #[tokio::test]
    async fn test_subscribers_see_creations_and_status_changes() {
        let system = CrepeSystem::with_store(8, OrderStore::default());
        let mut events = system.order_client.subscribe();

        let draft = OrderDraft::new("Anna", vec!["Classic Nutella".into()], 4.5, 15).unwrap();
        let order = system.order_client.create_order(draft).await.unwrap();
        system
            .order_client
            .update_status(order.id, OrderStatus::InProgress)
            .await
            .unwrap();

        assert_eq!(events.recv().await.unwrap(), OrderEvent::Created(order.clone()));
        assert_eq!(
            events.recv().await.unwrap(),
            OrderEvent::StatusChanged {
                id: order.id,
                from: OrderStatus::Queued,
                to: OrderStatus::InProgress,
            }
        );

        // Rejected commands publish nothing.
        let _ = system.order_client.update_status(OrderId(42), OrderStatus::Ready).await;
        assert!(matches!(events.try_recv(), Err(TryRecvError::Empty)));

        system.shutdown().await.unwrap();
    }

    #[tokio::test]
    async fn test_forward_only_store_rejects_skips() {
        let store = OrderStore::new(Box::new(LeastLoaded), Box::new(ForwardOnly));
        let system = CrepeSystem::with_store(8, store);
        let draft = OrderDraft::new("Lars", vec!["Savory Ham & Cheese".into()], 5.0, 12).unwrap();
        let order = system.order_client.create_order(draft).await.unwrap();

        assert_eq!(
            system.order_client.update_status(order.id, OrderStatus::Ready).await,
            Err(OrderError::InvalidTransition {
                id: order.id,
                from: OrderStatus::Queued,
                to: OrderStatus::Ready,
            })
        );

        system.shutdown().await.unwrap();
    }

    #[tokio::test]
    async fn test_demo_seeding_works_under_forward_only() {
        let config = Config {
            transition_mode: TransitionMode::ForwardOnly,
            ..Config::default()
        };
        let system = CrepeSystem::start(&config).await.unwrap();
        let ready = system.order_client.get_order(OrderId(4)).await.unwrap().unwrap();
        assert_eq!(ready.status, OrderStatus::Ready);
        system.shutdown().await.unwrap();
    }

    #[tokio::test]
    async fn test_dashboard_views() {
        let system = demo_system().await;

        let stats = system.order_client.compute_stats().await.unwrap();
        assert_eq!(stats.total_revenue, 0.0);
        assert_eq!(stats.orders_today, 4);
        assert_eq!(stats.average_wait_time, 8.0);

        let station_one: Vec<u64> = system
            .order_client
            .orders_at_station(Station::FIRST)
            .await
            .unwrap()
            .iter()
            .map(|o| o.id.0)
            .collect();
        assert_eq!(station_one, vec![1, 4]);

        let unresolved = system.order_client.unresolved_orders().await.unwrap();
        assert_eq!(unresolved.len(), 3);

        let makers = system.user_client.users_with_role(Role::Maker).await.unwrap();
        assert_eq!(makers[0].name, "Mike Johnson");
        let menu = system.menu_client.list_menu_items().await.unwrap();
        assert_eq!(menu.len(), 5);
        assert_eq!(system.menu_client.get_menu_item(1).await.unwrap().name, "Classic Nutella");

        system.shutdown().await.unwrap();
    }

    #[tokio::test]
    async fn test_empty_store_stats_are_zero() {
        let config = Config {
            seed_demo: false,
            ..Config::default()
        };
        let system = CrepeSystem::start(&config).await.unwrap();
        let stats = system.order_client.compute_stats().await.unwrap();
        assert_eq!(stats.total_revenue, 0.0);
        assert_eq!(stats.orders_today, 0);
        assert_eq!(stats.average_wait_time, 0.0);
        system.shutdown().await.unwrap();
    }
}
