//! Client domain model.
//!
//! # Responsibility
//! - Define the canonical client record and its draft input shape.
//! - Normalize free-form contact fields on every write.
//!
//! # Invariants
//! - `id` is stable and never reused for another client.
//! - `name` is non-empty after trimming; all other fields may be empty.
//! - Optional fields are stored trimmed, with the empty string meaning absent.

use crate::model::ValidationError;
use serde::{Deserialize, Serialize};

/// Canonical client record.
///
/// Contact fields are kept as plain strings to match the persisted document
/// shape; the empty string stands for an absent value.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct Client {
    /// Stable sequential id, allocated by the repository.
    pub id: u64,
    /// Display name, required and trimmed.
    pub name: String,
    pub phone: String,
    pub email: String,
    pub address: String,
    /// Tax/ID number (CPF/CNPJ in the original deployment).
    pub document: String,
    pub notes: String,
}

/// Draft input for creating or updating a client.
///
/// Fields arrive as raw form text; trimming happens when the draft is
/// applied, not when it is constructed.
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct ClientDraft {
    pub name: String,
    pub phone: String,
    pub email: String,
    pub address: String,
    pub document: String,
    pub notes: String,
}

impl ClientDraft {
    /// Rejects drafts whose name is blank.
    pub fn validate(&self) -> Result<(), ValidationError> {
        if self.name.trim().is_empty() {
            return Err(ValidationError::EmptyClientName);
        }
        Ok(())
    }
}

impl Client {
    /// Builds a client from a validated draft, trimming every field.
    pub fn from_draft(id: u64, draft: &ClientDraft) -> Self {
        Self {
            id,
            name: draft.name.trim().to_string(),
            phone: draft.phone.trim().to_string(),
            email: draft.email.trim().to_string(),
            address: draft.address.trim().to_string(),
            document: draft.document.trim().to_string(),
            notes: draft.notes.trim().to_string(),
        }
    }

    /// Overwrites all mutable fields in place from a validated draft.
    ///
    /// `id` is never touched.
    pub fn apply_draft(&mut self, draft: &ClientDraft) {
        self.name = draft.name.trim().to_string();
        self.phone = draft.phone.trim().to_string();
        self.email = draft.email.trim().to_string();
        self.address = draft.address.trim().to_string();
        self.document = draft.document.trim().to_string();
        self.notes = draft.notes.trim().to_string();
    }
}

#[cfg(test)]
mod tests {
    use super::{Client, ClientDraft};
    use crate::model::ValidationError;

    #[test]
    fn validate_rejects_blank_name() {
        let draft = ClientDraft {
            name: "   ".to_string(),
            ..ClientDraft::default()
        };
        assert_eq!(draft.validate(), Err(ValidationError::EmptyClientName));
    }

    #[test]
    fn from_draft_trims_every_field() {
        let draft = ClientDraft {
            name: "  Ana Silva  ".to_string(),
            phone: " 555-0100 ".to_string(),
            email: " ana@example.com ".to_string(),
            address: "  Rua A, 1 ".to_string(),
            document: " 123.456.789-00 ".to_string(),
            notes: "  vip  ".to_string(),
        };
        let client = Client::from_draft(1, &draft);
        assert_eq!(client.name, "Ana Silva");
        assert_eq!(client.phone, "555-0100");
        assert_eq!(client.email, "ana@example.com");
        assert_eq!(client.address, "Rua A, 1");
        assert_eq!(client.document, "123.456.789-00");
        assert_eq!(client.notes, "vip");
    }

    #[test]
    fn apply_draft_keeps_id() {
        let mut client = Client::from_draft(
            7,
            &ClientDraft {
                name: "old".to_string(),
                ..ClientDraft::default()
            },
        );
        client.apply_draft(&ClientDraft {
            name: "new".to_string(),
            ..ClientDraft::default()
        });
        assert_eq!(client.id, 7);
        assert_eq!(client.name, "new");
    }
}
