//! Domain model for repair-shop record keeping.
//!
//! # Responsibility
//! - Define canonical data structures for clients and service orders.
//! - Keep input normalization (trimming, enum defaults) at the model boundary.
//!
//! # Invariants
//! - Every record is identified by a stable sequential integer id.
//! - Ids are never reassigned or reused after deletion.

use std::error::Error;
use std::fmt::{Display, Formatter};

pub mod client;
pub mod order;

/// Validation error for draft input rejected before any mutation.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum ValidationError {
    /// Client name is empty after trimming.
    EmptyClientName,
    /// Service order description is empty after trimming.
    EmptyDescription,
}

impl Display for ValidationError {
    fn fmt(&self, f: &mut Formatter<'_>) -> std::fmt::Result {
        match self {
            Self::EmptyClientName => write!(f, "client name must not be empty"),
            Self::EmptyDescription => write!(f, "service order description must not be empty"),
        }
    }
}

impl Error for ValidationError {}
