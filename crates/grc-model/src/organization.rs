//! Organization record and its nested settings.

use crate::Plan;
use chrono::{DateTime, Utc};
use serde::{Deserialize, Serialize};

/// A tenant of the GRC platform.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct Organization {
    pub id: String,
    pub name: String,
    /// Used as a lookup key, so it should be unique within a run.
    pub domain: String,
    pub settings: OrganizationSettings,
    pub plan: Plan,
    /// Billing-customer reference. `None` means "no billing customer yet".
    pub stripe_customer_id: Option<String>,
    pub is_active: bool,
    pub created_at: DateTime<Utc>,
    pub updated_at: DateTime<Utc>,
}

/// Per-organization preferences and policy flags.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct OrganizationSettings {
    pub timezone: String,
    pub date_format: String,
    /// ISO 4217 code.
    pub currency: String,
    /// Edge length of the likelihood x impact matrix (5 means 5x5).
    pub risk_matrix_size: u8,
    pub require_approval_for_risk_changes: bool,
    pub enable_audit_log: bool,
    pub enforce_mfa: bool,
    pub features: Option<Features>,
    pub limits: Option<Limits>,
}

/// Plan-gated product features.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct Features {
    pub ai_analysis: bool,
    pub advanced_reporting: bool,
    pub custom_frameworks: bool,
    pub api_access: bool,
    pub sso: bool,
}

impl Features {
    /// The feature bundle a plan ships with.
    #[must_use]
    pub const fn for_plan(plan: Plan) -> Self {
        match plan {
            Plan::Free => Self {
                ai_analysis: false,
                advanced_reporting: false,
                custom_frameworks: false,
                api_access: false,
                sso: false,
            },
            Plan::Pro => Self {
                ai_analysis: true,
                advanced_reporting: true,
                custom_frameworks: false,
                api_access: true,
                sso: false,
            },
            Plan::Enterprise => Self {
                ai_analysis: true,
                advanced_reporting: true,
                custom_frameworks: true,
                api_access: true,
                sso: true,
            },
        }
    }
}

/// Plan-gated quotas. `None` means unlimited.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct Limits {
    pub users: Option<u32>,
    pub risks: Option<u32>,
    pub frameworks: Option<u32>,
    pub storage_gb: Option<u32>,
}

impl Limits {
    /// The quotas a plan ships with.
    #[must_use]
    pub const fn for_plan(plan: Plan) -> Self {
        match plan {
            Plan::Free => Self {
                users: Some(5),
                risks: Some(50),
                frameworks: Some(2),
                storage_gb: Some(1),
            },
            Plan::Pro => Self {
                users: Some(50),
                risks: Some(1000),
                frameworks: Some(10),
                storage_gb: Some(100),
            },
            Plan::Enterprise => Self::unlimited(),
        }
    }

    #[must_use]
    pub const fn unlimited() -> Self {
        Self {
            users: None,
            risks: None,
            frameworks: None,
            storage_gb: None,
        }
    }
}
