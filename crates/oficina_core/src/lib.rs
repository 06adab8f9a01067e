//! Core domain logic for Oficina, a repair-shop record-keeping system.
//! This crate is the single source of truth for business invariants:
//! client/service-order CRUD, derived totals, filtering and persistence.

pub mod logging;
pub mod model;
pub mod repo;
pub mod search;
pub mod service;
pub mod store;

pub use logging::{default_log_level, init_logging, logging_status};
pub use model::client::{Client, ClientDraft};
pub use model::order::{OrderDraft, OrderStatus, Priority, ServiceOrder, TIMESTAMP_FORMAT};
pub use model::ValidationError;
pub use repo::workshop_repo::{RepoError, RepoResult, WorkshopRepository};
pub use search::filter::{
    client_name, search_clients, search_orders, OrderFilter, REMOVED_CLIENT_LABEL,
};
pub use service::pricing::{compute_total, parse_amount};
pub use service::workshop_service::{
    ClientSnapshot, DashboardSummary, OrderSheet, WorkshopService, RECENT_ORDERS_LIMIT,
};
pub use store::{Document, DocumentStore, JsonFileStore, MemoryStore, StoreError, StoreResult};

/// Minimal health-check API for early integration.
pub fn ping() -> &'static str {
    "pong"
}

/// Returns the core crate version.
pub fn core_version() -> &'static str {
    env!("CARGO_PKG_VERSION")
}
