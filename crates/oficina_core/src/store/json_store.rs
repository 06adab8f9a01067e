//! Document store seam and its JSON implementations.
//!
//! # Responsibility
//! - Load and save the whole document at a fixed location.
//! - Keep the repository testable without touching disk.
//!
//! # Invariants
//! - `load` is total: missing or corrupt content falls back to a fresh
//!   document and logs the fallback instead of propagating an error.
//! - `save` overwrites the whole location; last writer wins, no
//!   concurrent-writer protection.

use super::{Document, StoreResult};
use log::{info, warn};
use std::cell::RefCell;
use std::path::{Path, PathBuf};
use std::time::Instant;

/// Storage seam between the repository and the persisted document.
pub trait DocumentStore {
    /// Reads the document from the backing location.
    ///
    /// Never fails: an absent location or unparseable content yields
    /// `Document::default()`. Availability is deliberately chosen over
    /// strictness here; callers must not be able to turn a corrupt file
    /// into a startup failure.
    fn load(&self) -> Document;

    /// Overwrites the backing location with the full document.
    fn save(&self, doc: &Document) -> StoreResult<()>;
}

/// JSON file store at a fixed path.
pub struct JsonFileStore {
    path: PathBuf,
}

impl JsonFileStore {
    pub fn new(path: impl AsRef<Path>) -> Self {
        Self {
            path: path.as_ref().to_path_buf(),
        }
    }

    pub fn path(&self) -> &Path {
        &self.path
    }
}

impl DocumentStore for JsonFileStore {
    fn load(&self) -> Document {
        let started_at = Instant::now();

        let raw = match std::fs::read_to_string(&self.path) {
            Ok(raw) => raw,
            Err(err) => {
                info!(
                    "event=store_load module=store status=fresh path={} duration_ms={} reason={}",
                    self.path.display(),
                    started_at.elapsed().as_millis(),
                    err
                );
                return Document::default();
            }
        };

        match serde_json::from_str::<Document>(&raw) {
            Ok(doc) => {
                info!(
                    "event=store_load module=store status=ok path={} duration_ms={} clients={} orders={}",
                    self.path.display(),
                    started_at.elapsed().as_millis(),
                    doc.client_count(),
                    doc.order_count()
                );
                doc
            }
            Err(err) => {
                warn!(
                    "event=store_load module=store status=fallback path={} duration_ms={} error={}",
                    self.path.display(),
                    started_at.elapsed().as_millis(),
                    err
                );
                Document::default()
            }
        }
    }

    fn save(&self, doc: &Document) -> StoreResult<()> {
        let started_at = Instant::now();
        let serialized = serde_json::to_string_pretty(doc)?;
        std::fs::write(&self.path, serialized)?;
        info!(
            "event=store_save module=store status=ok path={} duration_ms={} clients={} orders={}",
            self.path.display(),
            started_at.elapsed().as_millis(),
            doc.client_count(),
            doc.order_count()
        );
        Ok(())
    }
}

/// In-memory store for tests and embedded use.
///
/// Counterpart of a file store with no disk behind it: `save` replaces the
/// held document, `load` clones it back out.
#[derive(Default)]
pub struct MemoryStore {
    doc: RefCell<Document>,
}

impl MemoryStore {
    pub fn new() -> Self {
        Self::default()
    }

    /// Pre-seeds the store with an existing document.
    pub fn with_document(doc: Document) -> Self {
        Self {
            doc: RefCell::new(doc),
        }
    }
}

impl DocumentStore for MemoryStore {
    fn load(&self) -> Document {
        self.doc.borrow().clone()
    }

    fn save(&self, doc: &Document) -> StoreResult<()> {
        *self.doc.borrow_mut() = doc.clone();
        Ok(())
    }
}
