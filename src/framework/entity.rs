//! # ActorEntity Trait
//!
//! The `ActorEntity` trait is the contract a resource (a menu dish, for example) implements to be
//! kept in a [`ResourceActor`](crate::framework::ResourceActor). It names the DTOs used to create
//! and update the resource, the error type its hooks fail with, and the lifecycle hooks
//! (`from_create_params`, `on_update`, `on_delete`) the actor calls around each mutation.
//!
//! # Provided Methods (Hooks)
//! - [`ActorEntity::on_delete`] defaults to `Ok(())`.
//!
//! Validation belongs in the hooks: a hook that returns `Err` leaves the store untouched.

use async_trait::async_trait;
use std::fmt::Debug;

/// Trait that any resource entity must implement to be managed by `ResourceActor`.
///
/// # Associated Types
/// A `Dish` requires a `DishCreate` payload, and the compiler refuses anything else, so a
/// store can never receive a payload meant for another resource.
#[async_trait]
pub trait ActorEntity: Clone + Send + Sync + 'static {
    /// The data required to create a new instance (DTO).
    type Create: Send + Sync + Debug;

    /// The data required to update an existing instance.
    type Update: Send + Sync + Debug;

    /// The error type for this entity.
    ///
    /// # Error Granularity
    /// One enum per entity, shared by every hook. Clients recover it from
    /// [`FrameworkError::EntityError`](crate::framework::FrameworkError::EntityError) by downcasting.
    type Error: std::error::Error + Send + Sync + 'static;

    /// Construct the full entity from its creation payload.
    fn from_create_params(params: Self::Create) -> Result<Self, Self::Error>;

    /// Called when an update request is received.
    ///
    /// Implementations must validate before assigning so that a failed update
    /// leaves the entity exactly as it was.
    async fn on_update(&mut self, update: Self::Update) -> Result<(), Self::Error>;

    /// Called immediately before the entity is removed from the store.
    async fn on_delete(&self) -> Result<(), Self::Error> {
        Ok(())
    }
}
