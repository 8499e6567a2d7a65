//! # Framework Errors
//!
//! Errors raised by the store plumbing itself, as opposed to the entity hooks.

/// Errors that can occur within the resource framework.
#[derive(Debug, thiserror::Error)]
pub enum FrameworkError {
    #[error("Actor closed")]
    ActorClosed,
    #[error("Actor dropped response channel")]
    ActorDropped,
    #[error("Index {index} is out of range (store has {len} entries)")]
    OutOfRange { index: usize, len: usize },
    #[error("Entity error: {0}")]
    EntityError(Box<dyn std::error::Error + Send + Sync>),
}
