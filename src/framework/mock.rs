//! # Mock Framework
//!
//! Utilities for testing clients without a running actor.
//!
//! [`create_mock_client`] hands back a real [`ResourceClient`] together with the receiving end of
//! its channel. The test plays the actor: it pulls the next request with one of the `expect_*`
//! helpers, asserts on the payload, and answers through the returned responder.
//!
//! ```rust,ignore
//! let (client, mut receiver) = create_mock_client::<Dish>(10);
//! let menu = MenuClient::new(client);
//!
//! let task = tokio::spawn(async move { menu.remove_dish(3).await });
//!
//! let (index, responder) = expect_delete(&mut receiver).await.expect("Expected Delete request");
//! assert_eq!(index, 3);
//! responder.send(Err(FrameworkError::OutOfRange { index, len: 2 })).unwrap();
//! ```

use crate::framework::{ActorEntity, FrameworkError, ResourceClient, ResourceRequest};
use tokio::sync::{mpsc, oneshot};

/// Responder half handed to the test for a single request.
pub type Responder<R> = oneshot::Sender<Result<R, FrameworkError>>;

/// Creates a client wired to a bare receiver instead of an actor.
pub fn create_mock_client<T: ActorEntity>(
    buffer_size: usize,
) -> (ResourceClient<T>, mpsc::Receiver<ResourceRequest<T>>) {
    let (sender, receiver) = mpsc::channel(buffer_size);
    (ResourceClient::new(sender), receiver)
}

/// Waits for the next request and returns it if it is a `Create`.
pub async fn expect_create<T: ActorEntity>(
    receiver: &mut mpsc::Receiver<ResourceRequest<T>>,
) -> Option<(T::Create, Responder<usize>)> {
    match receiver.recv().await {
        Some(ResourceRequest::Create { params, respond_to }) => Some((params, respond_to)),
        _ => None,
    }
}

/// Waits for the next request and returns it if it is a `List`.
pub async fn expect_list<T: ActorEntity>(
    receiver: &mut mpsc::Receiver<ResourceRequest<T>>,
) -> Option<Responder<Vec<T>>> {
    match receiver.recv().await {
        Some(ResourceRequest::List { respond_to }) => Some(respond_to),
        _ => None,
    }
}

/// Waits for the next request and returns it if it is an `Update`.
pub async fn expect_update<T: ActorEntity>(
    receiver: &mut mpsc::Receiver<ResourceRequest<T>>,
) -> Option<(usize, T::Update, Responder<T>)> {
    match receiver.recv().await {
        Some(ResourceRequest::Update {
            index,
            update,
            respond_to,
        }) => Some((index, update, respond_to)),
        _ => None,
    }
}

/// Waits for the next request and returns it if it is a `Delete`.
pub async fn expect_delete<T: ActorEntity>(
    receiver: &mut mpsc::Receiver<ResourceRequest<T>>,
) -> Option<(usize, Responder<T>)> {
    match receiver.recv().await {
        Some(ResourceRequest::Delete { index, respond_to }) => Some((index, respond_to)),
        _ => None,
    }
}
