//! Request DTOs with validation.

use serde::{Deserialize, Deserializer, Serialize};
use validator::Validate;

use roster_entity::employee::EmployeeDraft;

/// Body of `POST /api/employees` and `PUT /api/employees/{id}`.
///
/// Any `id` in the body is ignored; the path or the store decides it.
/// Fields are trimmed while deserializing, so the rules below see the
/// values that will be stored.
#[derive(Debug, Clone, Serialize, Deserialize, Validate)]
#[serde(rename_all = "camelCase")]
pub struct EmployeeRequest {
    /// Given name.
    #[serde(deserialize_with = "trimmed")]
    #[validate(length(min = 1, max = 100, message = "First name is required"))]
    pub first_name: String,
    /// Family name.
    #[serde(deserialize_with = "trimmed")]
    #[validate(length(min = 1, max = 100, message = "Last name is required"))]
    pub last_name: String,
    /// Email address.
    #[serde(deserialize_with = "trimmed")]
    #[validate(
        email(message = "Email must be a valid address"),
        length(max = 255)
    )]
    pub email: String,
}

impl EmployeeRequest {
    /// Converts to the entity-layer draft, trimming each field.
    pub fn into_draft(self) -> EmployeeDraft {
        EmployeeDraft::new(self.first_name, self.last_name, self.email)
    }
}

fn trimmed<'de, D>(deserializer: D) -> Result<String, D::Error>
where
    D: Deserializer<'de>,
{
    let value = String::deserialize(deserializer)?;
    Ok(value.trim().to_string())
}

/// Query string of `GET /api/employees/search`.
#[derive(Debug, Clone, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct NameQuery {
    /// Exact first name.
    pub first_name: String,
    /// Exact last name.
    pub last_name: String,
}
