//! Core use-case services.
//!
//! # Responsibility
//! - Orchestrate repository and search calls into use-case level APIs.
//! - Own the derived-total calculation for service orders.

pub mod pricing;
pub mod workshop_service;
