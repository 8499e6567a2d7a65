//! Error types for the dish store.

use thiserror::Error;

/// Errors that can occur during dish operations.
#[derive(Debug, Clone, Error, PartialEq)]
pub enum DishError {
    /// A price below zero (or not a number) was given to a constructor or setter.
    #[error("price cannot be negative: {0}")]
    InvalidPrice(f64),

    /// A category selector or category name that is not Soup, Main Dish or Dessert.
    #[error("unknown dish category: {0}")]
    UnknownCategory(String),

    /// A spiciness was supplied for a dish that is not a soup.
    #[error("spiciness only applies to soups, '{0}' is not a soup")]
    SpicinessNotApplicable(String),

    /// The requested menu position does not exist.
    #[error("dish number {index} does not exist (menu has {len} entries)")]
    OutOfRange { index: usize, len: usize },

    /// An error occurred while communicating with the dish actor.
    #[error("Actor communication error: {0}")]
    ActorCommunicationError(String),
}

impl From<String> for DishError {
    fn from(msg: String) -> Self {
        DishError::ActorCommunicationError(msg)
    }
}
