//! Seed datasets: a handful of organizations, each staffed with users.
//!
//! The output is plain data for a seed script to persist (or for a test to
//! inspect). Nothing here touches a database.

use crate::error::{batch_size, FixtureError};
use crate::{Fixtures, OrganizationFactory, UserFactory};
use grc_model::{Organization, Plan, User};
use serde::{Deserialize, Serialize};

/// Plans assigned to seeded organizations, in rotation.
const PLAN_ROTATION: [Plan; 3] = [Plan::Enterprise, Plan::Pro, Plan::Free];

/// How many records a seed run produces.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct SeedPlan {
    pub organizations: usize,
    pub users_per_organization: usize,
}

/// Everything a seed run produced, organizations first.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct SeedDataset {
    pub organizations: Vec<Organization>,
    pub users: Vec<User>,
}

impl SeedPlan {
    #[must_use]
    pub const fn new(organizations: usize, users_per_organization: usize) -> Self {
        Self {
            organizations,
            users_per_organization,
        }
    }

    /// Build a plan from signed counts.
    ///
    /// # Errors
    ///
    /// Returns [`FixtureError::NegativeBatchSize`] if either count is negative.
    pub fn from_counts(organizations: i64, users_per_organization: i64) -> Result<Self, FixtureError> {
        Ok(Self::new(
            batch_size(organizations)?,
            batch_size(users_per_organization)?,
        ))
    }

    /// Generate the dataset.
    ///
    /// Organizations rotate through enterprise, pro and free. Within each
    /// organization the first user is an admin, the second a risk manager,
    /// the third an auditor, and the rest plain users.
    #[must_use]
    pub fn build(&self, fixtures: &mut Fixtures) -> SeedDataset {
        let organizations: Vec<Organization> = PLAN_ROTATION
            .iter()
            .cycle()
            .take(self.organizations)
            .map(|plan| OrganizationFactory::for_plan(*plan).create(fixtures))
            .collect();

        let mut users = Vec::with_capacity(self.organizations * self.users_per_organization);
        for org in &organizations {
            for slot in 0..self.users_per_organization {
                let user = staff_factory(slot)
                    .with_organization_id(&org.id)
                    .create(fixtures);
                users.push(user);
            }
        }

        tracing::debug!(
            organizations = organizations.len(),
            users = users.len(),
            "built seed dataset"
        );

        SeedDataset {
            organizations,
            users,
        }
    }
}

const fn staff_factory(slot: usize) -> UserFactory {
    match slot {
        0 => UserFactory::admin(),
        1 => UserFactory::risk_manager(),
        2 => UserFactory::auditor(),
        _ => UserFactory::new(),
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use grc_model::Role;

    #[test]
    fn empty_plan_builds_empty_dataset() {
        let mut fixtures = Fixtures::new();
        let dataset = SeedPlan::new(0, 5).build(&mut fixtures);
        assert!(dataset.organizations.is_empty());
        assert!(dataset.users.is_empty());
    }

    #[test]
    fn plans_rotate() {
        let mut fixtures = Fixtures::new();
        let dataset = SeedPlan::new(4, 0).build(&mut fixtures);
        let plans: Vec<Plan> = dataset.organizations.iter().map(|o| o.plan).collect();
        assert_eq!(
            plans,
            vec![Plan::Enterprise, Plan::Pro, Plan::Free, Plan::Enterprise]
        );
    }

    #[test]
    fn staff_roles_fill_in_order() {
        let roles: Vec<Role> = (0..5)
            .map(|slot| staff_factory(slot).create(&mut Fixtures::new()).role)
            .collect();
        assert_eq!(
            roles,
            vec![Role::Admin, Role::RiskManager, Role::Auditor, Role::User, Role::User]
        );
    }

    #[test]
    fn from_counts_rejects_negative() {
        assert!(SeedPlan::from_counts(-1, 2).is_err());
        assert!(SeedPlan::from_counts(2, -1).is_err());
        assert_eq!(SeedPlan::from_counts(2, 0).expect("valid"), SeedPlan::new(2, 0));
    }
}
