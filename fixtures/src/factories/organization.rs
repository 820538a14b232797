//! Organization factory.

use crate::config::OrganizationConfig;
use crate::Fixtures;
use chrono::{DateTime, Utc};
use grc_model::{Features, Limits, Organization, OrganizationSettings, Plan};

/// Builder for organization fixtures with sensible defaults.
///
/// Every `with_*` call is an override; anything left unset is filled in by
/// [`OrganizationFactory::create`] from the context's config and the
/// organization sequence.
///
/// # Examples
///
/// ```rust
/// use grc_fixtures::{Fixtures, OrganizationFactory};
/// use grc_model::Plan;
///
/// let mut fixtures = Fixtures::new();
///
/// // Create with all defaults
/// let org = OrganizationFactory::new().create(&mut fixtures);
/// assert_eq!(org.id, "org-1");
///
/// // Start from a plan variant and customize specific fields
/// let org = OrganizationFactory::enterprise()
///     .with_name("Acme Corp")
///     .create(&mut fixtures);
/// assert_eq!(org.plan, Plan::Enterprise);
/// ```
#[derive(Debug, Clone, Default)]
#[must_use]
pub struct OrganizationFactory {
    id: Option<String>,
    name: Option<String>,
    domain: Option<String>,
    settings: Option<OrganizationSettings>,
    features: Option<Features>,
    limits: Option<Limits>,
    plan: Option<Plan>,
    stripe_customer_id: Option<Option<String>>,
    is_active: Option<bool>,
    created_at: Option<DateTime<Utc>>,
    updated_at: Option<DateTime<Utc>>,
}

impl OrganizationFactory {
    /// Create a new factory with no overrides.
    pub fn new() -> Self {
        Self::default()
    }

    /// Start from the bundle a plan ships with: the plan tag plus its
    /// feature and limit sub-objects.
    pub fn for_plan(plan: Plan) -> Self {
        Self::new()
            .with_plan(plan)
            .with_features(Features::for_plan(plan))
            .with_limits(Limits::for_plan(plan))
    }

    pub fn enterprise() -> Self {
        Self::for_plan(Plan::Enterprise)
    }

    pub fn pro() -> Self {
        Self::for_plan(Plan::Pro)
    }

    pub fn free() -> Self {
        Self::for_plan(Plan::Free)
    }

    /// A deactivated organization (cancelled or suspended tenant).
    pub fn inactive() -> Self {
        Self::new().with_active(false)
    }

    pub fn with_id(mut self, id: &str) -> Self {
        self.id = Some(id.to_string());
        self
    }

    pub fn with_name(mut self, name: &str) -> Self {
        self.name = Some(name.to_string());
        self
    }

    pub fn with_domain(mut self, domain: &str) -> Self {
        self.domain = Some(domain.to_string());
        self
    }

    /// Replace the whole settings object.
    ///
    /// Clears earlier feature/limit overrides, so a later
    /// [`with_features`](Self::with_features) or
    /// [`with_limits`](Self::with_limits) still applies on top.
    pub fn with_settings(mut self, settings: OrganizationSettings) -> Self {
        self.settings = Some(settings);
        self.features = None;
        self.limits = None;
        self
    }

    pub fn with_features(mut self, features: Features) -> Self {
        self.features = Some(features);
        self
    }

    pub fn with_limits(mut self, limits: Limits) -> Self {
        self.limits = Some(limits);
        self
    }

    pub fn with_plan(mut self, plan: Plan) -> Self {
        self.plan = Some(plan);
        self
    }

    pub fn with_stripe_customer_id(mut self, customer_id: Option<&str>) -> Self {
        self.stripe_customer_id = Some(customer_id.map(str::to_string));
        self
    }

    pub fn with_active(mut self, is_active: bool) -> Self {
        self.is_active = Some(is_active);
        self
    }

    pub fn with_created_at(mut self, at: DateTime<Utc>) -> Self {
        self.created_at = Some(at);
        self
    }

    pub fn with_updated_at(mut self, at: DateTime<Utc>) -> Self {
        self.updated_at = Some(at);
        self
    }

    /// Build the organization, taking one value from the organization
    /// sequence for the id, name and domain defaults.
    #[must_use]
    pub fn create(self, fixtures: &mut Fixtures) -> Organization {
        let n = fixtures.organizations.next();
        let now = fixtures.now();
        let config = fixtures.config();

        let mut settings = self
            .settings
            .unwrap_or_else(|| default_settings(&config.organization));
        if let Some(features) = self.features {
            settings.features = Some(features);
        }
        if let Some(limits) = self.limits {
            settings.limits = Some(limits);
        }

        let org = Organization {
            id: self.id.unwrap_or_else(|| format!("org-{n}")),
            name: self
                .name
                .unwrap_or_else(|| format!("Test Organization {n}")),
            domain: self.domain.unwrap_or_else(|| {
                format!("org-{n}.{}", config.identity.organization_domain_suffix)
            }),
            settings,
            plan: self.plan.unwrap_or(config.organization.default_plan),
            stripe_customer_id: self.stripe_customer_id.unwrap_or(None),
            is_active: self.is_active.unwrap_or(true),
            created_at: self.created_at.unwrap_or(now),
            updated_at: self.updated_at.unwrap_or(now),
        };

        tracing::debug!(id = %org.id, plan = %org.plan, "built organization fixture");
        org
    }

    /// Build `count` organizations from the same overrides.
    ///
    /// Ids stay distinct through the sequence unless an id override is set,
    /// in which case every record shares it.
    #[must_use]
    pub fn create_batch(&self, fixtures: &mut Fixtures, count: usize) -> Vec<Organization> {
        tracing::debug!(count, "building organization batch");
        (0..count)
            .map(|_| self.clone().create(fixtures))
            .collect()
    }
}

/// Settings every organization starts from before plan overrides.
fn default_settings(config: &OrganizationConfig) -> OrganizationSettings {
    OrganizationSettings {
        timezone: config.timezone.clone(),
        date_format: config.date_format.clone(),
        currency: config.currency.clone(),
        risk_matrix_size: config.risk_matrix_size,
        require_approval_for_risk_changes: true,
        enable_audit_log: true,
        enforce_mfa: false,
        features: None,
        limits: None,
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn defaults_come_from_config() {
        let mut fixtures = Fixtures::new();
        let org = OrganizationFactory::new().create(&mut fixtures);
        assert_eq!(org.plan, Plan::Pro);
        assert_eq!(org.settings.timezone, "UTC");
        assert_eq!(org.settings.currency, "USD");
        assert_eq!(org.settings.risk_matrix_size, 5);
        assert!(org.settings.features.is_none());
        assert!(org.settings.limits.is_none());
        assert!(org.stripe_customer_id.is_none());
        assert!(org.is_active);
    }

    #[test]
    fn one_allocation_feeds_every_default() {
        let mut fixtures = Fixtures::new();
        fixtures.organizations.next();
        let org = OrganizationFactory::new().create(&mut fixtures);
        assert_eq!(org.id, "org-2");
        assert_eq!(org.name, "Test Organization 2");
        assert_eq!(org.domain, "org-2.example.org");
    }

    #[test]
    fn with_settings_clears_variant_bundle() {
        let mut fixtures = Fixtures::new();
        let settings = default_settings(&fixtures.config().organization);
        let org = OrganizationFactory::enterprise()
            .with_settings(settings)
            .create(&mut fixtures);
        assert_eq!(org.plan, Plan::Enterprise);
        assert!(org.settings.features.is_none());
    }

    #[test]
    fn features_apply_over_replaced_settings() {
        let mut fixtures = Fixtures::new();
        let settings = default_settings(&fixtures.config().organization);
        let org = OrganizationFactory::new()
            .with_settings(settings)
            .with_features(Features::for_plan(Plan::Enterprise))
            .create(&mut fixtures);
        assert_eq!(org.settings.features, Some(Features::for_plan(Plan::Enterprise)));
        assert!(org.settings.limits.is_none());
    }
}
