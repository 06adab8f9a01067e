//! Client and service-order CRUD over the loaded document.
//!
//! # Responsibility
//! - Allocate sequential ids and apply drafts to the in-memory document.
//! - Persist the whole document after every mutation.
//!
//! # Invariants
//! - Ids are never reassigned or reused after deletion; the counters only
//!   move forward.
//! - A client with referencing orders cannot be deleted.
//! - Order `total` is recomputed from the monetary fields on every write.
//! - `created_at` is stamped once at order creation and never rewritten.

use crate::model::client::{Client, ClientDraft};
use crate::model::order::{created_at_stamp, OrderDraft, ServiceOrder};
use crate::model::ValidationError;
use crate::store::{Document, DocumentStore, StoreError};
use std::error::Error;
use std::fmt::{Display, Formatter};

pub type RepoResult<T> = Result<T, RepoError>;

/// Repository error for client and service-order operations.
#[derive(Debug)]
pub enum RepoError {
    Validation(ValidationError),
    ClientNotFound(u64),
    OrderNotFound(u64),
    /// Deletion blocked: service orders still reference the client.
    ClientHasOrders(u64),
    /// Order creation guard: there is no client to attach an order to.
    NoClients,
    Store(StoreError),
}

impl Display for RepoError {
    fn fmt(&self, f: &mut Formatter<'_>) -> std::fmt::Result {
        match self {
            Self::Validation(err) => write!(f, "{err}"),
            Self::ClientNotFound(id) => write!(f, "client not found: {id}"),
            Self::OrderNotFound(id) => write!(f, "service order not found: {id}"),
            Self::ClientHasOrders(id) => {
                write!(f, "client {id} still has service orders attached")
            }
            Self::NoClients => write!(f, "create a client before opening a service order"),
            Self::Store(err) => write!(f, "{err}"),
        }
    }
}

impl Error for RepoError {
    fn source(&self) -> Option<&(dyn Error + 'static)> {
        match self {
            Self::Validation(err) => Some(err),
            Self::Store(err) => Some(err),
            _ => None,
        }
    }
}

impl From<ValidationError> for RepoError {
    fn from(value: ValidationError) -> Self {
        Self::Validation(value)
    }
}

impl From<StoreError> for RepoError {
    fn from(value: StoreError) -> Self {
        Self::Store(value)
    }
}

/// Owns the in-memory document and the store it persists through.
///
/// This is the injectable replacement for the original module-global
/// dataset: each instance carries its own document, so tests and embedders
/// can run isolated copies side by side.
pub struct WorkshopRepository<S: DocumentStore> {
    store: S,
    doc: Document,
}

impl<S: DocumentStore> WorkshopRepository<S> {
    /// Loads the document from the store and holds it for the repository
    /// lifetime. Subsequent reads never go back to the store.
    pub fn open(store: S) -> Self {
        let doc = store.load();
        Self { store, doc }
    }

    /// Read surface for the query/filter engine.
    pub fn document(&self) -> &Document {
        &self.doc
    }

    pub fn get_client(&self, id: u64) -> Option<&Client> {
        self.doc.client(id)
    }

    pub fn get_order(&self, id: u64) -> Option<&ServiceOrder> {
        self.doc.order(id)
    }

    /// Creates a client from a draft and returns the stored record.
    pub fn create_client(&mut self, draft: &ClientDraft) -> RepoResult<Client> {
        draft.validate()?;

        let id = self.doc.next_client_id;
        let client = Client::from_draft(id, draft);
        self.doc.next_client_id += 1;
        self.doc
            .clients
            .insert(Document::key(id), client.clone());
        self.persist()?;
        Ok(client)
    }

    /// Overwrites a client's mutable fields in place.
    pub fn update_client(&mut self, id: u64, draft: &ClientDraft) -> RepoResult<Client> {
        draft.validate()?;

        let client = self
            .doc
            .clients
            .get_mut(&Document::key(id))
            .ok_or(RepoError::ClientNotFound(id))?;
        client.apply_draft(draft);
        let updated = client.clone();
        self.persist()?;
        Ok(updated)
    }

    /// Deletes a client unless any service order still references it.
    pub fn delete_client(&mut self, id: u64) -> RepoResult<()> {
        let key = Document::key(id);
        if !self.doc.clients.contains_key(&key) {
            return Err(RepoError::ClientNotFound(id));
        }
        if self.doc.client_has_orders(id) {
            return Err(RepoError::ClientHasOrders(id));
        }

        self.doc.clients.remove(&key);
        self.persist()
    }

    /// Creates a service order from a draft and returns the stored record.
    ///
    /// Fails with [`RepoError::NoClients`] when the client collection is
    /// empty. This is a usability guard steering the operator towards
    /// client creation first, not a referential check on `client_id`.
    pub fn create_order(&mut self, draft: &OrderDraft) -> RepoResult<ServiceOrder> {
        draft.validate()?;
        if self.doc.clients.is_empty() {
            return Err(RepoError::NoClients);
        }

        let id = self.doc.next_order_id;
        let order = ServiceOrder::from_draft(id, created_at_stamp(), draft);
        self.doc.next_order_id += 1;
        self.doc.orders.insert(Document::key(id), order.clone());
        self.persist()?;
        Ok(order)
    }

    /// Overwrites an order's mutable fields and recomputes its total.
    pub fn update_order(&mut self, id: u64, draft: &OrderDraft) -> RepoResult<ServiceOrder> {
        draft.validate()?;

        let order = self
            .doc
            .orders
            .get_mut(&Document::key(id))
            .ok_or(RepoError::OrderNotFound(id))?;
        order.apply_draft(draft);
        let updated = order.clone();
        self.persist()?;
        Ok(updated)
    }

    /// Removes a service order unconditionally.
    pub fn delete_order(&mut self, id: u64) -> RepoResult<()> {
        if self.doc.orders.remove(&Document::key(id)).is_none() {
            return Err(RepoError::OrderNotFound(id));
        }
        self.persist()
    }

    fn persist(&mut self) -> RepoResult<()> {
        self.store.save(&self.doc)?;
        Ok(())
    }
}
