//! # Generic Actor Server
//!
//! `ResourceActor` owns an ordered store of entities and processes requests one at a time.
//! It is the only place the store is touched, so no locking is needed.

use crate::framework::client::ResourceClient;
use crate::framework::entity::ActorEntity;
use crate::framework::error::FrameworkError;
use crate::framework::message::ResourceRequest;
use tokio::sync::mpsc;
use tracing::{debug, info, warn};

/// The generic actor that manages an ordered collection of entities.
///
/// # Usage Pattern
///
/// 1.  **Create**: `ResourceActor::new()` (or `with_entries()` to seed it) returns the actor and its client.
/// 2.  **Run**: spawn `actor.run()` on the runtime.
/// 3.  **Use**: call the client; dropping every client ends the loop.
///
/// ## Operations
///
/// * **Create**: builds the entity with `from_create_params`, pushes it, answers the new position.
/// * **Get** / **List**: answer clones; the store is never lent out.
/// * **Update**: runs `on_update` on the entity in place and answers the updated clone.
/// * **Delete**: runs `on_delete`, then removes the entity and answers it.
///
/// A position past the end yields [`FrameworkError::OutOfRange`] for Update and Delete.
pub struct ResourceActor<T: ActorEntity> {
    receiver: mpsc::Receiver<ResourceRequest<T>>,
    store: Vec<T>,
}

impl<T: ActorEntity> ResourceActor<T> {
    /// Creates an empty `ResourceActor` and its associated `ResourceClient`.
    ///
    /// `buffer_size` is the capacity of the request channel.
    pub fn new(buffer_size: usize) -> (Self, ResourceClient<T>) {
        Self::with_entries(buffer_size, Vec::new())
    }

    /// Creates a `ResourceActor` whose store starts with `entries`, in order.
    pub fn with_entries(buffer_size: usize, entries: Vec<T>) -> (Self, ResourceClient<T>) {
        let (sender, receiver) = mpsc::channel(buffer_size);
        let actor = Self {
            receiver,
            store: entries,
        };
        (actor, ResourceClient::new(sender))
    }

    /// Runs the actor's event loop, processing messages until the channel closes.
    pub async fn run(mut self) {
        let entity_type = std::any::type_name::<T>()
            .split("::")
            .last()
            .unwrap_or("Unknown");
        info!(entity_type, size = self.store.len(), "Actor started");

        while let Some(msg) = self.receiver.recv().await {
            match msg {
                ResourceRequest::Create { params, respond_to } => {
                    debug!(entity_type, ?params, "Create");
                    match T::from_create_params(params) {
                        Ok(item) => {
                            self.store.push(item);
                            let index = self.store.len() - 1;
                            info!(entity_type, index, size = self.store.len(), "Created");
                            let _ = respond_to.send(Ok(index));
                        }
                        Err(e) => {
                            warn!(entity_type, error = %e, "Create failed");
                            let _ = respond_to.send(Err(FrameworkError::EntityError(Box::new(e))));
                        }
                    }
                }
                ResourceRequest::Get { index, respond_to } => {
                    let item = self.store.get(index).cloned();
                    debug!(entity_type, index, found = item.is_some(), "Get");
                    let _ = respond_to.send(Ok(item));
                }
                ResourceRequest::List { respond_to } => {
                    debug!(entity_type, size = self.store.len(), "List");
                    let _ = respond_to.send(Ok(self.store.clone()));
                }
                ResourceRequest::Update {
                    index,
                    update,
                    respond_to,
                } => {
                    debug!(entity_type, index, ?update, "Update");
                    let len = self.store.len();
                    let Some(item) = self.store.get_mut(index) else {
                        warn!(entity_type, index, len, "Out of range");
                        let _ = respond_to.send(Err(FrameworkError::OutOfRange { index, len }));
                        continue;
                    };
                    if let Err(e) = item.on_update(update).await {
                        warn!(entity_type, index, error = %e, "Update failed");
                        let _ = respond_to.send(Err(FrameworkError::EntityError(Box::new(e))));
                        continue;
                    }
                    info!(entity_type, index, "Updated");
                    let _ = respond_to.send(Ok(item.clone()));
                }
                ResourceRequest::Delete { index, respond_to } => {
                    debug!(entity_type, index, "Delete");
                    let len = self.store.len();
                    let Some(item) = self.store.get(index) else {
                        warn!(entity_type, index, len, "Out of range");
                        let _ = respond_to.send(Err(FrameworkError::OutOfRange { index, len }));
                        continue;
                    };
                    if let Err(e) = item.on_delete().await {
                        warn!(entity_type, index, error = %e, "on_delete failed");
                        let _ = respond_to.send(Err(FrameworkError::EntityError(Box::new(e))));
                        continue;
                    }
                    let removed = self.store.remove(index);
                    info!(entity_type, index, size = self.store.len(), "Deleted");
                    let _ = respond_to.send(Ok(removed));
                }
            }
        }

        info!(entity_type, size = self.store.len(), "Shutdown");
    }
}
