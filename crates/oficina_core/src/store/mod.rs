//! Persistent document storage entry points.
//!
//! # Responsibility
//! - Define the persisted document shape (counters + both collections).
//! - Provide the document store seam and its JSON file implementation.
//!
//! # Invariants
//! - The whole document is one atomic unit of storage; partial writes of a
//!   single collection do not exist.
//! - Loading never fails: an absent or unparseable location yields a fresh
//!   empty document so the process always starts.

use std::error::Error;
use std::fmt::{Display, Formatter};

pub mod document;
pub mod json_store;

pub use document::Document;
pub use json_store::{DocumentStore, JsonFileStore, MemoryStore};

pub type StoreResult<T> = Result<T, StoreError>;

/// Save-path error for document persistence.
///
/// Load has no error type on purpose; see [`DocumentStore::load`].
#[derive(Debug)]
pub enum StoreError {
    Io(std::io::Error),
    Serialize(serde_json::Error),
}

impl Display for StoreError {
    fn fmt(&self, f: &mut Formatter<'_>) -> std::fmt::Result {
        match self {
            Self::Io(err) => write!(f, "document write failed: {err}"),
            Self::Serialize(err) => write!(f, "document serialization failed: {err}"),
        }
    }
}

impl Error for StoreError {
    fn source(&self) -> Option<&(dyn Error + 'static)> {
        match self {
            Self::Io(err) => Some(err),
            Self::Serialize(err) => Some(err),
        }
    }
}

impl From<std::io::Error> for StoreError {
    fn from(value: std::io::Error) -> Self {
        Self::Io(value)
    }
}

impl From<serde_json::Error> for StoreError {
    fn from(value: serde_json::Error) -> Self {
        Self::Serialize(value)
    }
}
