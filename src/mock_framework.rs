//! # Mock Framework
//!
//! Utilities for testing services in isolation.
//!
//! Use [`create_mock_repository`] to get a store client and a receiver.
//! Then use helpers like [`expect_find_by_id`] or [`expect_save`] to answer
//! requests, and [`assert_idle`] to check that nothing else was sent.

use crate::actor_framework::{Entity, Response, StoreClient, StoreRequest};
use tokio::sync::mpsc;

/// Creates a mock repository and a receiver for asserting requests.
///
/// The returned [`StoreClient`] talks to a channel the test owns instead of
/// a running [`StoreActor`](crate::actor_framework::StoreActor), so the test
/// decides every reply and can prove that no write was attempted.
pub fn create_mock_repository<T: Entity>(buffer_size: usize) -> (StoreClient<T>, mpsc::Receiver<StoreRequest<T>>) {
    let (sender, receiver) = mpsc::channel(buffer_size);
    (StoreClient::new(sender), receiver)
}

/// Helper to verify that the next message is a Save request
pub async fn expect_save<T: Entity>(receiver: &mut mpsc::Receiver<StoreRequest<T>>) -> Option<(T, Response<T>)> {
    match receiver.recv().await {
        Some(StoreRequest::Save { entity, respond_to }) => Some((entity, respond_to)),
        _ => None,
    }
}

/// Helper to verify that the next message is a FindById request.
/// The flag is `true` when only active records may match.
pub async fn expect_find_by_id<T: Entity>(receiver: &mut mpsc::Receiver<StoreRequest<T>>) -> Option<(T::Id, bool, Response<Option<T>>)> {
    match receiver.recv().await {
        Some(StoreRequest::FindById { id, active_only, respond_to }) => Some((id, active_only, respond_to)),
        _ => None,
    }
}

/// Helper to verify that the next message is a FindAll request
pub async fn expect_find_all<T: Entity>(receiver: &mut mpsc::Receiver<StoreRequest<T>>) -> Option<(bool, Response<Vec<T>>)> {
    match receiver.recv().await {
        Some(StoreRequest::FindAll { active_only, respond_to }) => Some((active_only, respond_to)),
        _ => None,
    }
}

/// Helper to verify that the next message is a Search request
pub async fn expect_search<T: Entity>(receiver: &mut mpsc::Receiver<StoreRequest<T>>) -> Option<(String, Response<Vec<T>>)> {
    match receiver.recv().await {
        Some(StoreRequest::Search { keyword, respond_to }) => Some((keyword, respond_to)),
        _ => None,
    }
}

/// Panics if any request is still queued.
pub fn assert_idle<T: Entity>(receiver: &mut mpsc::Receiver<StoreRequest<T>>) {
    if let Ok(request) = receiver.try_recv() {
        panic!("Unexpected store request: {:?}", request);
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::domain::Product;
    use crate::product_actor::ProductRequest;
    use crate::repository::Repository;

    #[tokio::test]
    async fn test_mock_repository() {
        let (client, mut receiver) = create_mock_repository::<Product>(10);

        let save_task = tokio::spawn(async move {
            let product = Product::from_request(ProductRequest {
                name: "Test".into(),
                price: 1.0,
                description: String::new(),
                category: String::new(),
                image_url: String::new(),
                stock_quantity: 1,
            });
            client.save(product).await
        });

        let (mut entity, responder) = expect_save(&mut receiver).await.expect("Expected Save request");
        assert_eq!(entity.name, "Test");
        entity.assign_id(1);
        responder.send(Ok(entity)).unwrap();

        let saved = save_task.await.unwrap().unwrap();
        assert_eq!(saved.id, Some(1));
        assert_idle(&mut receiver);
    }
}
