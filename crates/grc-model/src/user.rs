//! User record.

use crate::Role;
use chrono::{DateTime, Utc};
use serde::{Deserialize, Serialize};

/// A member of an organization.
///
/// `organization_id` is an advisory reference: nothing in this crate checks
/// that the organization exists. Referential integrity belongs to whatever
/// persists the record.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct User {
    pub id: String,
    pub email: String,
    pub first_name: String,
    pub last_name: String,
    /// Always a placeholder in fixtures, never a real credential.
    pub password_hash: String,
    pub role: Role,
    pub organization_id: String,
    pub permissions: Vec<String>,
    pub is_active: bool,
    pub email_verified: Option<DateTime<Utc>>,
    pub email_verification_token: Option<String>,
    pub password_reset_token: Option<String>,
    pub password_reset_expires: Option<DateTime<Utc>>,
    pub last_login_at: Option<DateTime<Utc>>,
    pub avatar: Option<String>,
    pub created_at: DateTime<Utc>,
    pub updated_at: DateTime<Utc>,
}

impl User {
    /// Display name as shown in the dashboard header.
    #[must_use]
    pub fn full_name(&self) -> String {
        format!("{} {}", self.first_name, self.last_name)
    }
}
