//! Workshop use-case facade.
//!
//! # Responsibility
//! - Provide stable CRUD and search entry points for presentation callers.
//! - Derive the dashboard summary and the printable order sheet.
//!
//! # Invariants
//! - Service APIs never bypass repository validation/persistence contracts.
//! - Dashboard data is derived from the engine with empty filters; there is
//!   no separate aggregate state to drift out of sync.

use crate::model::client::{Client, ClientDraft};
use crate::model::order::{OrderDraft, OrderStatus, ServiceOrder};
use crate::repo::workshop_repo::{RepoError, RepoResult, WorkshopRepository};
use crate::search::filter::{search_clients, search_orders, OrderFilter, REMOVED_CLIENT_LABEL};
use crate::store::DocumentStore;

/// How many most-recent orders the dashboard shows.
pub const RECENT_ORDERS_LIMIT: usize = 8;

/// Aggregate view backing the landing page.
#[derive(Debug, Clone, PartialEq)]
pub struct DashboardSummary {
    pub client_count: usize,
    pub order_count: usize,
    /// Per-status order counts in `OrderStatus::ALL` order.
    pub status_counts: [(OrderStatus, usize); 4],
    /// Up to [`RECENT_ORDERS_LIMIT`] orders, most recently created first.
    pub recent_orders: Vec<ServiceOrder>,
}

/// Client contact snapshot for the printable order sheet.
///
/// Separate from [`Client`] so a dangling reference still renders: the name
/// falls back to the sentinel label and the contact fields stay empty.
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct ClientSnapshot {
    pub name: String,
    pub document: String,
    pub phone: String,
    pub email: String,
    pub address: String,
}

/// Everything the presentation layer needs to render one printable order.
#[derive(Debug, Clone, PartialEq)]
pub struct OrderSheet {
    pub order: ServiceOrder,
    pub client: ClientSnapshot,
}

/// Use-case facade over the repository and the query engine.
pub struct WorkshopService<S: DocumentStore> {
    repo: WorkshopRepository<S>,
}

impl<S: DocumentStore> WorkshopService<S> {
    /// Opens the service over a freshly loaded repository.
    pub fn open(store: S) -> Self {
        Self {
            repo: WorkshopRepository::open(store),
        }
    }

    /// Wraps an already-open repository.
    pub fn new(repo: WorkshopRepository<S>) -> Self {
        Self { repo }
    }

    pub fn repository(&self) -> &WorkshopRepository<S> {
        &self.repo
    }

    pub fn create_client(&mut self, draft: &ClientDraft) -> RepoResult<Client> {
        self.repo.create_client(draft)
    }

    pub fn update_client(&mut self, id: u64, draft: &ClientDraft) -> RepoResult<Client> {
        self.repo.update_client(id, draft)
    }

    pub fn delete_client(&mut self, id: u64) -> RepoResult<()> {
        self.repo.delete_client(id)
    }

    pub fn create_order(&mut self, draft: &OrderDraft) -> RepoResult<ServiceOrder> {
        self.repo.create_order(draft)
    }

    pub fn update_order(&mut self, id: u64, draft: &OrderDraft) -> RepoResult<ServiceOrder> {
        self.repo.update_order(id, draft)
    }

    pub fn delete_order(&mut self, id: u64) -> RepoResult<()> {
        self.repo.delete_order(id)
    }

    /// Free-text client search; see [`search_clients`].
    pub fn find_clients(&self, query: &str) -> Vec<&Client> {
        search_clients(self.repo.document(), query)
    }

    /// Combined order filtering; see [`search_orders`].
    pub fn find_orders(&self, filter: &OrderFilter) -> Vec<&ServiceOrder> {
        search_orders(self.repo.document(), filter)
    }

    /// Derives the dashboard aggregates from the current document.
    pub fn dashboard_summary(&self) -> DashboardSummary {
        let doc = self.repo.document();
        let all_orders = search_orders(doc, &OrderFilter::default());

        let status_counts = OrderStatus::ALL.map(|status| {
            let count = all_orders
                .iter()
                .filter(|order| order.status == status)
                .count();
            (status, count)
        });

        DashboardSummary {
            client_count: doc.client_count(),
            order_count: doc.order_count(),
            status_counts,
            recent_orders: all_orders
                .into_iter()
                .take(RECENT_ORDERS_LIMIT)
                .cloned()
                .collect(),
        }
    }

    /// Assembles the printable sheet for one order.
    ///
    /// A dangling client reference yields the sentinel name with empty
    /// contact fields rather than an error.
    pub fn order_sheet(&self, id: u64) -> RepoResult<OrderSheet> {
        let doc = self.repo.document();
        let order = doc.order(id).ok_or(RepoError::OrderNotFound(id))?;

        let client = match doc.client(order.client_id) {
            Some(client) => ClientSnapshot {
                name: client.name.clone(),
                document: client.document.clone(),
                phone: client.phone.clone(),
                email: client.email.clone(),
                address: client.address.clone(),
            },
            None => ClientSnapshot {
                name: REMOVED_CLIENT_LABEL.to_string(),
                ..ClientSnapshot::default()
            },
        };

        Ok(OrderSheet {
            order: order.clone(),
            client,
        })
    }
}
