//! Query/filter entry points.
//!
//! # Responsibility
//! - Expose read-only search APIs over the repository's document.
//! - Keep result ordering rules inside core.

pub mod filter;
