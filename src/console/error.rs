use thiserror::Error;

/// Errors raised while prompting the user.
#[derive(Debug, Error)]
pub enum PromptError {
    /// The answer could not be parsed as the expected kind of value.
    #[error("invalid input '{input}', expected {expected}")]
    Format {
        input: String,
        expected: &'static str,
    },

    /// End of input: nobody is left to answer.
    #[error("input closed")]
    Closed,

    #[error("console I/O error: {0}")]
    Io(#[from] std::io::Error),

    #[error("terminal error: {0}")]
    Readline(#[from] rustyline::error::ReadlineError),
}
