//! # Mock Framework
//!
//! Utilities for testing clients in isolation.
//!
//! Use [`create_mock_client`] for catalog clients or [`create_mock_order_client`] for the
//! order client, then answer the requests that arrive with the `expect_*` helpers.

use tokio::sync::{broadcast, mpsc, oneshot};

use crate::actor_framework::{Entity, FrameworkError, ResourceClient, ResourceRequest};
use crate::clients::OrderClient;
use crate::domain::OrderId;
use crate::error::OrderError;
use crate::messages::{OrderRequest, ServiceResponse};
use crate::queue::QueueStatus;

/// Creates a mock client and a receiver for asserting requests.
pub fn create_mock_client<T: Entity>(
    buffer_size: usize,
) -> (ResourceClient<T>, mpsc::Receiver<ResourceRequest<T>>) {
    let (sender, receiver) = mpsc::channel(buffer_size);
    (ResourceClient::new(sender), receiver)
}

/// Creates an `OrderClient` whose requests land on the returned receiver.
pub fn create_mock_order_client(buffer_size: usize) -> (OrderClient, mpsc::Receiver<OrderRequest>) {
    let (sender, receiver) = mpsc::channel(buffer_size);
    let (events, _) = broadcast::channel(4);
    (OrderClient::new(sender, events), receiver)
}

/// Helper to verify that the next message is a Create request
pub async fn expect_create<T: Entity>(
    receiver: &mut mpsc::Receiver<ResourceRequest<T>>,
) -> Option<(T::CreatePayload, oneshot::Sender<Result<T::Id, FrameworkError>>)> {
    match receiver.recv().await {
        Some(ResourceRequest::Create { payload, respond_to }) => Some((payload, respond_to)),
        _ => None,
    }
}

/// Helper to verify that the next message is a Get request
pub async fn expect_get<T: Entity>(
    receiver: &mut mpsc::Receiver<ResourceRequest<T>>,
) -> Option<(T::Id, oneshot::Sender<Result<Option<T>, FrameworkError>>)> {
    match receiver.recv().await {
        Some(ResourceRequest::Get { id, respond_to }) => Some((id, respond_to)),
        _ => None,
    }
}

/// Helper to verify that the next message is a List request
pub async fn expect_list<T: Entity>(
    receiver: &mut mpsc::Receiver<ResourceRequest<T>>,
) -> Option<oneshot::Sender<Result<Vec<T>, FrameworkError>>> {
    match receiver.recv().await {
        Some(ResourceRequest::List { respond_to }) => Some(respond_to),
        _ => None,
    }
}

/// Helper to verify that the next order message is a QueryStatus request
pub async fn expect_query_status(
    receiver: &mut mpsc::Receiver<OrderRequest>,
) -> Option<(OrderId, ServiceResponse<QueueStatus, OrderError>)> {
    match receiver.recv().await {
        Some(OrderRequest::QueryStatus { id, respond_to }) => Some((id, respond_to)),
        _ => None,
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::clients::UserClient;
    use crate::domain::{Role, User, UserCreate};
    use crate::error::UserError;

    fn staff(id: u32, name: &str, role: Role) -> User {
        User {
            id,
            name: name.to_string(),
            email: format!("{}@example.com", role),
            role,
        }
    }

    #[tokio::test]
    async fn test_mock_client() {
        let (inner, mut receiver) = create_mock_client::<User>(10);
        let client = UserClient::new(inner);

        let create_task = tokio::spawn(async move {
            let user = UserCreate::new("Test", "test@example.com", Role::Waiter);
            client.create_user(user).await
        });

        let (payload, responder) = expect_create(&mut receiver).await.expect("Expected Create request");
        assert_eq!(payload.name, "Test");
        responder.send(Ok(1)).unwrap();

        let result = create_task.await.unwrap();
        assert_eq!(result, Ok(1));
    }

    #[tokio::test]
    async fn test_missing_user_maps_to_not_found() {
        let (inner, mut receiver) = create_mock_client::<User>(10);
        let client = UserClient::new(inner);

        let get_task = tokio::spawn(async move { client.get_user(7).await });

        let (id, responder) = expect_get(&mut receiver).await.expect("Expected Get request");
        assert_eq!(id, 7);
        responder.send(Ok(None)).unwrap();

        assert_eq!(get_task.await.unwrap(), Err(UserError::NotFound(7)));
    }

    #[tokio::test]
    async fn test_users_with_role_filters_listing() {
        let (inner, mut receiver) = create_mock_client::<User>(10);
        let client = UserClient::new(inner);

        let task = tokio::spawn(async move { client.users_with_role(Role::Maker).await });

        let responder = expect_list(&mut receiver).await.expect("Expected List request");
        responder
            .send(Ok(vec![
                staff(1, "John Doe", Role::Owner),
                staff(3, "Mike Johnson", Role::Maker),
            ]))
            .unwrap();

        let makers = task.await.unwrap().unwrap();
        assert_eq!(makers.len(), 1);
        assert_eq!(makers[0].name, "Mike Johnson");
    }

    #[tokio::test]
    async fn test_rejected_create_maps_to_validation_error() {
        let (inner, mut receiver) = create_mock_client::<User>(10);
        let client = UserClient::new(inner);

        let task = tokio::spawn(async move {
            client.create_user(UserCreate::new("Nobody", "nope", Role::Admin)).await
        });

        let (_, responder) = expect_create(&mut receiver).await.expect("Expected Create request");
        responder.send(Err(FrameworkError::Rejected("invalid email 'nope'".into()))).unwrap();

        assert_eq!(
            task.await.unwrap(),
            Err(UserError::ValidationError("invalid email 'nope'".into()))
        );
    }

    #[tokio::test]
    async fn test_check_status_forwards_numeric_input_only() {
        let (client, mut receiver) = create_mock_order_client(10);

        assert_eq!(client.check_status("twelve").await, Ok(None));

        let task = tokio::spawn(async move { client.check_status(" 12 ").await });
        let (id, responder) = expect_query_status(&mut receiver).await.expect("Expected QueryStatus request");
        assert_eq!(id, OrderId(12));
        let status = QueueStatus {
            orders_ahead: 1,
            wait_time: 20,
            is_ready: false,
            five_minute_warning: false,
        };
        responder.send(Ok(status)).unwrap();

        assert_eq!(task.await.unwrap(), Ok(Some(status)));
    }
}
