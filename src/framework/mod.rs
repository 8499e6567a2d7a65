//! Generic resource framework.
//!
//! A single actor task owns an ordered store of entities; everything else talks to it
//! through a cloneable client.
//!
//! # Main Components
//!
//! - [`ActorEntity`] - Trait that resource types implement to be kept in a store
//! - [`ResourceActor`] - Generic actor that owns the store and applies requests in order
//! - [`ResourceClient`] - Typed async handle used to send requests
//! - [`FrameworkError`] - Plumbing errors (closed actor, out-of-range position, entity failure)
//!
//! # Testing
//!
//! See [`mock`] for utilities to test clients without spawning an actor.

pub mod actor;
pub mod client;
pub mod entity;
pub mod error;
pub mod message;
pub mod mock;

pub use actor::ResourceActor;
pub use client::ResourceClient;
pub use entity::ActorEntity;
pub use error::FrameworkError;
pub use message::{ResourceRequest, Response};
