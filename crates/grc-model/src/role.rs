//! Access role tag for a user.

use serde::{Deserialize, Serialize};
use std::fmt;
use std::str::FromStr;

/// Closed set of user roles. Serialized in screaming snake case
/// (`"RISK_MANAGER"`), matching the database enum.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "SCREAMING_SNAKE_CASE")]
pub enum Role {
    User,
    Admin,
    RiskManager,
    Auditor,
}

/// Error returned when a string does not name a known role.
#[derive(Debug, thiserror::Error)]
#[error("unknown role: '{value}'")]
pub struct ParseRoleError {
    value: String,
}

impl Role {
    pub const ALL: [Self; 4] = [Self::User, Self::Admin, Self::RiskManager, Self::Auditor];

    /// Return the wire name of the role.
    #[must_use]
    pub const fn as_str(self) -> &'static str {
        match self {
            Self::User => "USER",
            Self::Admin => "ADMIN",
            Self::RiskManager => "RISK_MANAGER",
            Self::Auditor => "AUDITOR",
        }
    }
}

impl FromStr for Role {
    type Err = ParseRoleError;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        let normalized = s.trim().replace('-', "_");
        Self::ALL
            .into_iter()
            .find(|role| role.as_str().eq_ignore_ascii_case(&normalized))
            .ok_or_else(|| ParseRoleError {
                value: s.to_string(),
            })
    }
}

impl fmt::Display for Role {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.as_str())
    }
}
