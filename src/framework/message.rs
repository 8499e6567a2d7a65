//! # Generic Messages
//!
//! The request type exchanged between [`ResourceClient`](crate::framework::ResourceClient) and
//! [`ResourceActor`](crate::framework::ResourceActor).

use crate::framework::entity::ActorEntity;
use crate::framework::error::FrameworkError;
use tokio::sync::oneshot;

/// Type alias for the one-shot response channel used by actors.
pub type Response<T> = oneshot::Sender<Result<T, FrameworkError>>;

/// Message sent to the actor to request an operation on its ordered store.
///
/// Entries are addressed by their current 0-based position. Removing an entry shifts
/// every later entry down by one, exactly like `Vec::remove`.
///
/// - **Create**: appends a new entity built from [`ActorEntity::Create`], answers its position.
/// - **Get**: clone of the entity at a position, or `None`.
/// - **List**: clone of the whole store in order.
/// - **Update**: applies [`ActorEntity::Update`] through the `on_update` hook.
/// - **Delete**: removes the entity at a position and answers it.
#[derive(Debug)]
pub enum ResourceRequest<T: ActorEntity> {
    Create {
        params: T::Create,
        respond_to: Response<usize>,
    },
    Get {
        index: usize,
        respond_to: Response<Option<T>>,
    },
    List {
        respond_to: Response<Vec<T>>,
    },
    Update {
        index: usize,
        update: T::Update,
        respond_to: Response<T>,
    },
    Delete {
        index: usize,
        respond_to: Response<T>,
    },
}
