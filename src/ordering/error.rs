use crate::console::PromptError;
use thiserror::Error;

#[derive(Debug, Error)]
pub enum OrderError {
    /// A 1-based dish number that is not on the menu.
    #[error("dish number {choice} is not on the menu (menu has {len} dishes)")]
    OutOfRange { choice: i64, len: usize },

    #[error(transparent)]
    Prompt(#[from] PromptError),
}
