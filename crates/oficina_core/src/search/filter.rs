//! Substring search and equality filters over the document.
//!
//! # Responsibility
//! - Provide free-text client search and combined order filtering.
//! - Resolve client names for display, tolerating dangling references.
//!
//! # Invariants
//! - Text matching is case-insensitive via Unicode lowercasing.
//! - Absent filters are no-ops; provided filters are hard AND predicates.
//! - Client results sort by name ascending, case-insensitively.
//! - Order results sort by `created_at` descending, ties broken by
//!   insertion order (ascending id).

use crate::model::client::Client;
use crate::model::order::{OrderStatus, Priority, ServiceOrder};
use crate::store::Document;

/// Display label substituted when an order's client no longer exists.
pub const REMOVED_CLIENT_LABEL: &str = "Removed client";

/// Resolves a client id to its display name.
///
/// Returns [`REMOVED_CLIENT_LABEL`] for dangling references instead of
/// failing; a deleted client must never break order display or search.
pub fn client_name(doc: &Document, client_id: u64) -> &str {
    doc.client(client_id)
        .map_or(REMOVED_CLIENT_LABEL, |client| client.name.as_str())
}

/// Combined filter for service-order queries. All fields optional.
#[derive(Debug, Clone, Default)]
pub struct OrderFilter {
    /// Free-text needle matched against description, technician, notes and
    /// the resolved client name.
    pub text: Option<String>,
    pub status: Option<OrderStatus>,
    pub priority: Option<Priority>,
    pub client_id: Option<u64>,
}

/// Case-insensitive substring search over all client text fields.
///
/// A blank query matches every client.
pub fn search_clients<'doc>(doc: &'doc Document, query: &str) -> Vec<&'doc Client> {
    let needle = query.trim().to_lowercase();

    let mut hits: Vec<&Client> = doc
        .clients_by_id()
        .into_iter()
        .filter(|client| needle.is_empty() || client_haystack(client).contains(needle.as_str()))
        .collect();

    hits.sort_by_key(|client| client.name.to_lowercase());
    hits
}

/// Applies every provided filter as an AND predicate over all orders.
///
/// Results come back most recently created first; orders created in the
/// same minute keep their insertion order.
pub fn search_orders<'doc>(doc: &'doc Document, filter: &OrderFilter) -> Vec<&'doc ServiceOrder> {
    let needle = filter
        .text
        .as_deref()
        .map(|text| text.trim().to_lowercase())
        .filter(|text| !text.is_empty());

    let mut hits: Vec<&ServiceOrder> = doc
        .orders_by_id()
        .into_iter()
        .filter(|order| {
            if let Some(needle) = needle.as_deref() {
                if !order_haystack(doc, order).contains(needle) {
                    return false;
                }
            }
            if let Some(status) = filter.status {
                if order.status != status {
                    return false;
                }
            }
            if let Some(priority) = filter.priority {
                if order.priority != priority {
                    return false;
                }
            }
            if let Some(client_id) = filter.client_id {
                if order.client_id != client_id {
                    return false;
                }
            }
            true
        })
        .collect();

    // Stable sort over the id-ascending input keeps insertion order for
    // equal timestamps. The timestamp format sorts lexicographically.
    hits.sort_by(|a, b| b.created_at.cmp(&a.created_at));
    hits
}

fn client_haystack(client: &Client) -> String {
    [
        client.name.as_str(),
        client.phone.as_str(),
        client.email.as_str(),
        client.address.as_str(),
        client.document.as_str(),
        client.notes.as_str(),
    ]
    .join(" ")
    .to_lowercase()
}

fn order_haystack(doc: &Document, order: &ServiceOrder) -> String {
    [
        order.description.as_str(),
        order.technician.as_str(),
        order.notes.as_str(),
        client_name(doc, order.client_id),
    ]
    .join(" ")
    .to_lowercase()
}
