//! Error types produced by the record store.
//!
//! | Error | Raised by | Description |
//! |-------|-----------|-------------|
//! | [`Read`](StoreError::Read) | load | Durable document could not be read |
//! | [`Parse`](StoreError::Parse) | load | Document is not a valid `{"animals": [...]}` envelope |
//! | [`Serialize`](StoreError::Serialize) | save | Collection could not be encoded |
//! | [`Write`](StoreError::Write) | save | Document could not be written or replaced |
//! | [`Poisoned`](StoreError::Poisoned) | any | A writer panicked while holding the store lock |
//!
//! Validation failures are not errors here: [`validate_animal`](crate::validate_animal)
//! is a plain predicate and the HTTP layer decides how to report it.

use std::path::PathBuf;

use thiserror::Error;

#[derive(Debug, Error)]
pub enum StoreError {
    #[error("failed to read {path}: {source}")]
    Read {
        path: PathBuf,
        #[source]
        source: std::io::Error,
    },

    #[error("failed to parse {path}: {source}")]
    Parse {
        path: PathBuf,
        #[source]
        source: serde_json::Error,
    },

    #[error("failed to encode animal collection: {0}")]
    Serialize(#[from] serde_json::Error),

    #[error("failed to write {path}: {source}")]
    Write {
        path: PathBuf,
        #[source]
        source: std::io::Error,
    },

    #[error("animal store lock poisoned")]
    Poisoned,
}
