//! Persisted document shape.
//!
//! # Responsibility
//! - Define the single serialized unit holding counters and collections.
//! - Provide id-keyed accessors over the string-keyed maps.
//!
//! # Invariants
//! - Map keys are the decimal string form of the record id, so the maps
//!   behave as sparse arrays tolerant of deletion gaps.
//! - `next_client_id` / `next_order_id` are persisted alongside the
//!   collections so id sequences survive process restarts.

use crate::model::client::Client;
use crate::model::order::ServiceOrder;
use serde::{Deserialize, Serialize};
use std::collections::BTreeMap;

/// The entire persisted dataset, treated as one atomic unit of storage.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct Document {
    pub next_client_id: u64,
    pub next_order_id: u64,
    pub clients: BTreeMap<String, Client>,
    pub orders: BTreeMap<String, ServiceOrder>,
}

impl Default for Document {
    /// Fresh empty document: both id counters start at 1.
    fn default() -> Self {
        Self {
            next_client_id: 1,
            next_order_id: 1,
            clients: BTreeMap::new(),
            orders: BTreeMap::new(),
        }
    }
}

impl Document {
    /// Decimal string map key for a record id.
    pub fn key(id: u64) -> String {
        id.to_string()
    }

    pub fn client(&self, id: u64) -> Option<&Client> {
        self.clients.get(&Self::key(id))
    }

    pub fn order(&self, id: u64) -> Option<&ServiceOrder> {
        self.orders.get(&Self::key(id))
    }

    pub fn client_count(&self) -> usize {
        self.clients.len()
    }

    pub fn order_count(&self) -> usize {
        self.orders.len()
    }

    /// Whether any service order still references the given client.
    pub fn client_has_orders(&self, client_id: u64) -> bool {
        self.orders.values().any(|order| order.client_id == client_id)
    }

    /// All orders in insertion order (ascending id).
    ///
    /// The map iterates its string keys lexicographically ("10" before "2"),
    /// so callers that care about insertion order must go through here.
    pub fn orders_by_id(&self) -> Vec<&ServiceOrder> {
        let mut orders: Vec<&ServiceOrder> = self.orders.values().collect();
        orders.sort_by_key(|order| order.id);
        orders
    }

    /// All clients in insertion order (ascending id).
    pub fn clients_by_id(&self) -> Vec<&Client> {
        let mut clients: Vec<&Client> = self.clients.values().collect();
        clients.sort_by_key(|client| client.id);
        clients
    }
}

#[cfg(test)]
mod tests {
    use super::Document;
    use crate::model::client::{Client, ClientDraft};

    #[test]
    fn default_document_starts_counters_at_one() {
        let doc = Document::default();
        assert_eq!(doc.next_client_id, 1);
        assert_eq!(doc.next_order_id, 1);
        assert!(doc.clients.is_empty());
        assert!(doc.orders.is_empty());
    }

    #[test]
    fn clients_by_id_orders_numerically_not_lexicographically() {
        let mut doc = Document::default();
        for id in [2u64, 10, 1] {
            let draft = ClientDraft {
                name: format!("client {id}"),
                ..ClientDraft::default()
            };
            doc.clients
                .insert(Document::key(id), Client::from_draft(id, &draft));
        }
        let ids: Vec<u64> = doc.clients_by_id().iter().map(|c| c.id).collect();
        assert_eq!(ids, vec![1, 2, 10]);
    }
}
