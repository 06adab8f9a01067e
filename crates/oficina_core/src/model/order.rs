//! Service order domain model.
//!
//! # Responsibility
//! - Define the canonical service order record and its draft input shape.
//! - Own the status/priority enums and their lenient string parsing.
//!
//! # Invariants
//! - `id` is stable and never reused for another order.
//! - `created_at` is stamped once at creation and never rewritten.
//! - `total` is always the calculator output for the current monetary
//!   fields; it is recomputed on every write and never user-set.
//! - Monetary fields keep the operator's raw text verbatim (comma or dot
//!   decimals, possibly invalid); parsing leniency lives in the calculator.

use crate::model::ValidationError;
use crate::service::pricing::compute_total;
use serde::{Deserialize, Serialize};

/// Minute-granularity local-time format used for `created_at`.
pub const TIMESTAMP_FORMAT: &str = "%Y-%m-%d %H:%M";

/// Lifecycle state of a service order.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum OrderStatus {
    Open,
    InProgress,
    Completed,
    Cancelled,
}

/// Urgency of a service order.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum Priority {
    Low,
    Medium,
    High,
    Critical,
}

impl OrderStatus {
    /// Every selectable status, in presentation order.
    pub const ALL: [Self; 4] = [Self::Open, Self::InProgress, Self::Completed, Self::Cancelled];

    pub fn as_str(self) -> &'static str {
        match self {
            Self::Open => "open",
            Self::InProgress => "in_progress",
            Self::Completed => "completed",
            Self::Cancelled => "cancelled",
        }
    }

    pub fn parse(value: &str) -> Option<Self> {
        match value {
            "open" => Some(Self::Open),
            "in_progress" => Some(Self::InProgress),
            "completed" => Some(Self::Completed),
            "cancelled" => Some(Self::Cancelled),
            _ => None,
        }
    }

    /// Lenient form-input parser: anything unknown normalizes to `Open`.
    pub fn parse_or_default(value: &str) -> Self {
        Self::parse(value.trim()).unwrap_or_default()
    }
}

impl Default for OrderStatus {
    fn default() -> Self {
        Self::Open
    }
}

impl Priority {
    /// Every selectable priority, in presentation order.
    pub const ALL: [Self; 4] = [Self::Low, Self::Medium, Self::High, Self::Critical];

    pub fn as_str(self) -> &'static str {
        match self {
            Self::Low => "low",
            Self::Medium => "medium",
            Self::High => "high",
            Self::Critical => "critical",
        }
    }

    pub fn parse(value: &str) -> Option<Self> {
        match value {
            "low" => Some(Self::Low),
            "medium" => Some(Self::Medium),
            "high" => Some(Self::High),
            "critical" => Some(Self::Critical),
            _ => None,
        }
    }

    /// Lenient form-input parser: anything unknown normalizes to `Medium`.
    pub fn parse_or_default(value: &str) -> Self {
        Self::parse(value.trim()).unwrap_or_default()
    }
}

impl Default for Priority {
    fn default() -> Self {
        Self::Medium
    }
}

/// Canonical service order record.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct ServiceOrder {
    /// Stable sequential id, allocated independently from client ids.
    pub id: u64,
    /// Referenced client id. May dangle after an out-of-band client
    /// deletion; display paths resolve it through a sentinel label.
    pub client_id: u64,
    /// Creation timestamp, `%Y-%m-%d %H:%M` local time, immutable.
    pub created_at: String,
    /// Free-form due date text; no date parsing is applied.
    pub due_at: String,
    pub status: OrderStatus,
    pub priority: Priority,
    /// Problem/service description, required and trimmed.
    pub description: String,
    pub technician: String,
    pub notes: String,
    /// Raw estimate text as entered. Zero means "use parts + labor".
    pub estimate: String,
    pub parts_cost: String,
    pub labor_cost: String,
    /// Derived charge, 2-decimal rounded. Never user-set.
    pub total: f64,
}

/// Draft input for creating or updating a service order.
#[derive(Debug, Clone, Default, PartialEq)]
pub struct OrderDraft {
    pub client_id: u64,
    pub due_at: String,
    pub status: OrderStatus,
    pub priority: Priority,
    pub description: String,
    pub technician: String,
    pub notes: String,
    pub estimate: String,
    pub parts_cost: String,
    pub labor_cost: String,
}

impl OrderDraft {
    /// Rejects drafts whose description is blank.
    pub fn validate(&self) -> Result<(), ValidationError> {
        if self.description.trim().is_empty() {
            return Err(ValidationError::EmptyDescription);
        }
        Ok(())
    }
}

impl ServiceOrder {
    /// Builds an order from a validated draft with a freshly stamped
    /// `created_at` and a recomputed `total`.
    pub fn from_draft(id: u64, created_at: String, draft: &OrderDraft) -> Self {
        Self {
            id,
            client_id: draft.client_id,
            created_at,
            due_at: draft.due_at.trim().to_string(),
            status: draft.status,
            priority: draft.priority,
            description: draft.description.trim().to_string(),
            technician: draft.technician.trim().to_string(),
            notes: draft.notes.trim().to_string(),
            estimate: draft.estimate.clone(),
            parts_cost: draft.parts_cost.clone(),
            labor_cost: draft.labor_cost.clone(),
            total: compute_total(&draft.estimate, &draft.parts_cost, &draft.labor_cost),
        }
    }

    /// Overwrites all mutable fields from a validated draft and recomputes
    /// `total`.
    ///
    /// `id` and `created_at` are never touched.
    pub fn apply_draft(&mut self, draft: &OrderDraft) {
        self.client_id = draft.client_id;
        self.due_at = draft.due_at.trim().to_string();
        self.status = draft.status;
        self.priority = draft.priority;
        self.description = draft.description.trim().to_string();
        self.technician = draft.technician.trim().to_string();
        self.notes = draft.notes.trim().to_string();
        self.estimate = draft.estimate.clone();
        self.parts_cost = draft.parts_cost.clone();
        self.labor_cost = draft.labor_cost.clone();
        self.total = compute_total(&self.estimate, &self.parts_cost, &self.labor_cost);
    }
}

/// Returns the current local time formatted for `created_at`.
pub(crate) fn created_at_stamp() -> String {
    chrono::Local::now().format(TIMESTAMP_FORMAT).to_string()
}

#[cfg(test)]
mod tests {
    use super::{OrderDraft, OrderStatus, Priority, ServiceOrder};
    use crate::model::ValidationError;

    #[test]
    fn status_parse_round_trips_all_variants() {
        for status in OrderStatus::ALL {
            assert_eq!(OrderStatus::parse(status.as_str()), Some(status));
        }
    }

    #[test]
    fn unknown_status_normalizes_to_open() {
        assert_eq!(OrderStatus::parse_or_default("archived"), OrderStatus::Open);
        assert_eq!(OrderStatus::parse_or_default(""), OrderStatus::Open);
    }

    #[test]
    fn unknown_priority_normalizes_to_medium() {
        assert_eq!(Priority::parse_or_default("urgent"), Priority::Medium);
        assert_eq!(Priority::parse_or_default(" high "), Priority::High);
    }

    #[test]
    fn validate_rejects_blank_description() {
        let draft = OrderDraft {
            description: "\t\n".to_string(),
            ..OrderDraft::default()
        };
        assert_eq!(draft.validate(), Err(ValidationError::EmptyDescription));
    }

    #[test]
    fn apply_draft_preserves_created_at_and_recomputes_total() {
        let draft = OrderDraft {
            client_id: 1,
            description: "screen swap".to_string(),
            parts_cost: "100".to_string(),
            labor_cost: "50".to_string(),
            ..OrderDraft::default()
        };
        let mut order = ServiceOrder::from_draft(1, "2025-01-02 10:30".to_string(), &draft);
        assert_eq!(order.total, 150.0);

        let updated = OrderDraft {
            estimate: "200".to_string(),
            ..draft
        };
        order.apply_draft(&updated);
        assert_eq!(order.created_at, "2025-01-02 10:30");
        assert_eq!(order.total, 200.0);
    }
}
