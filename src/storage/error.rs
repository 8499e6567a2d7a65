//! Error types for reading and writing the menu file.

use std::path::PathBuf;
use thiserror::Error;

#[derive(Debug, Error)]
pub enum StorageError {
    /// The menu file does not exist yet.
    #[error("menu file '{}' has not been found", .0.display())]
    Missing(PathBuf),

    /// The file exists but could not be read or written.
    #[error("I/O error on menu file '{}': {source}", path.display())]
    Io {
        path: PathBuf,
        #[source]
        source: std::io::Error,
    },

    /// The file content is not a valid list of dish records.
    #[error("menu file '{}' is corrupt: {source}", path.display())]
    Parse {
        path: PathBuf,
        #[source]
        source: serde_json::Error,
    },

    /// The menu could not be turned into JSON.
    #[error("failed to serialize menu: {0}")]
    Serialize(#[from] serde_json::Error),
}
