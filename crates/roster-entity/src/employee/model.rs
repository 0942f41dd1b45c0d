//! Employee entity model.

use serde::{Deserialize, Serialize};
use sqlx::FromRow;

/// An employee record as stored in the `employees` table.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize, FromRow)]
#[serde(rename_all = "camelCase")]
pub struct Employee {
    /// Store-assigned identifier. Immutable once assigned.
    pub id: i64,
    /// Given name.
    pub first_name: String,
    /// Family name.
    pub last_name: String,
    /// Email address, unique across all employees (case-insensitive).
    pub email: String,
}

impl Employee {
    /// Build a stored employee from a draft and the id the store assigned.
    pub fn from_draft(id: i64, draft: EmployeeDraft) -> Self {
        Self {
            id,
            first_name: draft.first_name,
            last_name: draft.last_name,
            email: draft.email,
        }
    }

    /// Overwrite every mutable field with the draft's values. The id is kept.
    pub fn apply(&mut self, draft: EmployeeDraft) {
        self.first_name = draft.first_name;
        self.last_name = draft.last_name;
        self.email = draft.email;
    }

    /// The key used for email uniqueness comparisons.
    pub fn email_key(&self) -> String {
        email_key(&self.email)
    }
}

/// Data required to create a new employee. The store assigns the id.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct EmployeeDraft {
    /// Given name.
    pub first_name: String,
    /// Family name.
    pub last_name: String,
    /// Email address.
    pub email: String,
}

impl EmployeeDraft {
    /// Create a draft, trimming surrounding whitespace from every field.
    pub fn new(
        first_name: impl Into<String>,
        last_name: impl Into<String>,
        email: impl Into<String>,
    ) -> Self {
        Self {
            first_name: first_name.into().trim().to_string(),
            last_name: last_name.into().trim().to_string(),
            email: email.into().trim().to_string(),
        }
    }
}

/// Normalize an email for uniqueness comparisons.
///
/// Only ASCII letters are folded. This matches `LOWER(email COLLATE "C")`
/// in the PostgreSQL unique index, so both stores agree on what counts as
/// a duplicate.
pub fn email_key(email: &str) -> String {
    email.trim().to_ascii_lowercase()
}
