use crate::console::PromptError;
use crate::dish_actor::DishError;
use crate::storage::StorageError;
use thiserror::Error;

/// Errors surfaced by a Menu Editor operation.
#[derive(Debug, Error)]
pub enum EditorError {
    #[error(transparent)]
    Prompt(#[from] PromptError),

    #[error(transparent)]
    Dish(#[from] DishError),

    #[error(transparent)]
    Storage(#[from] StorageError),

    /// A dish number below zero.
    #[error("dish number {0} does not exist")]
    NegativeIndex(i64),
}

impl EditorError {
    /// Errors after which the editor cannot keep going: the console is gone or the
    /// dish actor stopped answering.
    pub fn is_fatal(&self) -> bool {
        matches!(
            self,
            EditorError::Prompt(
                PromptError::Closed | PromptError::Io(_) | PromptError::Readline(_)
            )
                | EditorError::Dish(DishError::ActorCommunicationError(_))
        )
    }
}
