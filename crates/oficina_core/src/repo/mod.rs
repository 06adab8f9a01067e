//! Repository layer over the in-memory document.
//!
//! # Responsibility
//! - Provide the only mutation entry points for clients and service orders.
//! - Enforce validation and referential-integrity checks before any write.
//!
//! # Invariants
//! - Every successful mutation is persisted through the store before the
//!   call returns; there is no write batching or deferred flush.
//! - Failed operations leave the document untouched.

pub mod workshop_repo;
