use std::path::PathBuf;

use thiserror::Error;

/// Failures of the welcome configuration store and its persistence backends.
#[derive(Error, Debug)]
pub enum StoreError {
    /// The persisted document exists but cannot be parsed.
    ///
    /// Raised only by `WelcomeStore::load`. Startup recovers from it by falling back
    /// to an empty table, see `startup::open_welcome_store`.
    #[error("Welcome store at {location} is corrupt: {reason}")]
    Corrupt {
        /// Where the document was read from (file path or backend name)
        location: String,
        /// Parser diagnostic
        reason: String,
    },

    /// Reading, writing or renaming the backing file failed.
    #[error("Welcome store I/O error on {path}: {source}")]
    Io {
        /// Path that was being accessed
        path: PathBuf,
        /// The underlying I/O error
        #[source]
        source: std::io::Error,
    },

    /// The in-memory table could not be encoded.
    #[error("Failed to serialize welcome store: {0}")]
    Serialize(#[from] serde_json::Error),
}
