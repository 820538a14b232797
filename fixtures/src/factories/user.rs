//! User factory.

use crate::Fixtures;
use chrono::{DateTime, Utc};
use grc_model::{Role, User};

/// Seconds since the epoch for 2024-01-01T00:00:00Z, the fixed
/// `email_verified` default.
const VERIFIED_AT_SECS: i64 = 1_704_067_200;

/// Fixed verification timestamp given to users built without one.
#[must_use]
pub fn default_verified_at() -> DateTime<Utc> {
    DateTime::from_timestamp(VERIFIED_AT_SECS, 0).unwrap_or_default()
}

/// Builder for user fixtures with sensible defaults.
///
/// # Examples
///
/// ```rust
/// use grc_fixtures::{Fixtures, UserFactory};
/// use grc_model::Role;
///
/// let mut fixtures = Fixtures::new();
///
/// let user = UserFactory::new().create(&mut fixtures);
/// assert_eq!(user.email, "user1@example.com");
///
/// let admin = UserFactory::admin()
///     .with_organization_id("org-9")
///     .create(&mut fixtures);
/// assert_eq!(admin.role, Role::Admin);
/// assert_eq!(admin.email, "admin2@example.com");
/// ```
#[derive(Debug, Clone)]
#[must_use]
pub struct UserFactory {
    id: Option<String>,
    email: Option<String>,
    first_name: Option<String>,
    last_name: Option<String>,
    password_hash: Option<String>,
    role: Option<Role>,
    organization_id: Option<String>,
    permissions: Option<Vec<String>>,
    is_active: Option<bool>,
    email_verified: Option<Option<DateTime<Utc>>>,
    email_verification_token: Option<Option<String>>,
    password_reset_token: Option<Option<String>>,
    password_reset_expires: Option<Option<DateTime<Utc>>>,
    last_login_at: Option<Option<DateTime<Utc>>>,
    avatar: Option<Option<String>>,
    created_at: Option<DateTime<Utc>>,
    updated_at: Option<DateTime<Utc>>,
    /// Local part of the default email, before the sequence number.
    email_prefix: &'static str,
    /// Default a `verify-<n>` token when no token override is set.
    pending_verification: bool,
}

impl UserFactory {
    /// Create a new factory with no overrides.
    pub const fn new() -> Self {
        Self {
            id: None,
            email: None,
            first_name: None,
            last_name: None,
            password_hash: None,
            role: None,
            organization_id: None,
            permissions: None,
            is_active: None,
            email_verified: None,
            email_verification_token: None,
            password_reset_token: None,
            password_reset_expires: None,
            last_login_at: None,
            avatar: None,
            created_at: None,
            updated_at: None,
            email_prefix: "user",
            pending_verification: false,
        }
    }

    const fn for_role(role: Role, email_prefix: &'static str) -> Self {
        let mut factory = Self::new();
        factory.role = Some(role);
        factory.email_prefix = email_prefix;
        factory
    }

    pub const fn admin() -> Self {
        Self::for_role(Role::Admin, "admin")
    }

    pub const fn risk_manager() -> Self {
        Self::for_role(Role::RiskManager, "risk.manager")
    }

    pub const fn auditor() -> Self {
        Self::for_role(Role::Auditor, "auditor")
    }

    /// A user who signed up but never confirmed their email: no
    /// `email_verified` timestamp and an outstanding `verify-<n>` token.
    pub const fn unverified() -> Self {
        let mut factory = Self::new();
        factory.email_verified = Some(None);
        factory.pending_verification = true;
        factory
    }

    pub const fn inactive() -> Self {
        let mut factory = Self::new();
        factory.is_active = Some(false);
        factory
    }

    pub fn with_id(mut self, id: &str) -> Self {
        self.id = Some(id.to_string());
        self
    }

    /// Set a specific email. Not validated.
    pub fn with_email(mut self, email: &str) -> Self {
        self.email = Some(email.to_string());
        self
    }

    pub fn with_first_name(mut self, first_name: &str) -> Self {
        self.first_name = Some(first_name.to_string());
        self
    }

    pub fn with_last_name(mut self, last_name: &str) -> Self {
        self.last_name = Some(last_name.to_string());
        self
    }

    pub fn with_password_hash(mut self, password_hash: &str) -> Self {
        self.password_hash = Some(password_hash.to_string());
        self
    }

    pub const fn with_role(mut self, role: Role) -> Self {
        self.role = Some(role);
        self
    }

    /// Point the user at an organization. The organization is not looked up.
    pub fn with_organization_id(mut self, organization_id: &str) -> Self {
        self.organization_id = Some(organization_id.to_string());
        self
    }

    pub fn with_permissions<I, S>(mut self, permissions: I) -> Self
    where
        I: IntoIterator<Item = S>,
        S: Into<String>,
    {
        self.permissions = Some(permissions.into_iter().map(Into::into).collect());
        self
    }

    pub const fn with_active(mut self, is_active: bool) -> Self {
        self.is_active = Some(is_active);
        self
    }

    pub const fn with_email_verified(mut self, at: Option<DateTime<Utc>>) -> Self {
        self.email_verified = Some(at);
        self
    }

    pub fn with_email_verification_token(mut self, token: Option<&str>) -> Self {
        self.email_verification_token = Some(token.map(str::to_string));
        self
    }

    pub fn with_password_reset(mut self, token: &str, expires: DateTime<Utc>) -> Self {
        self.password_reset_token = Some(Some(token.to_string()));
        self.password_reset_expires = Some(Some(expires));
        self
    }

    pub const fn with_last_login_at(mut self, at: Option<DateTime<Utc>>) -> Self {
        self.last_login_at = Some(at);
        self
    }

    pub fn with_avatar(mut self, avatar: Option<&str>) -> Self {
        self.avatar = Some(avatar.map(str::to_string));
        self
    }

    pub const fn with_created_at(mut self, at: DateTime<Utc>) -> Self {
        self.created_at = Some(at);
        self
    }

    pub const fn with_updated_at(mut self, at: DateTime<Utc>) -> Self {
        self.updated_at = Some(at);
        self
    }

    /// Build the user, taking one value from the user sequence for the id,
    /// email and name defaults.
    #[must_use]
    pub fn create(self, fixtures: &mut Fixtures) -> User {
        let n = fixtures.users.next();
        let now = fixtures.now();
        let identity = &fixtures.config().identity;

        let email_verification_token = self.email_verification_token.unwrap_or_else(|| {
            self.pending_verification
                .then(|| format!("verify-{n}"))
        });

        let user = User {
            id: self.id.unwrap_or_else(|| format!("user-{n}")),
            email: self.email.unwrap_or_else(|| {
                format!("{}{n}@{}", self.email_prefix, identity.email_domain)
            }),
            first_name: self.first_name.unwrap_or_else(|| "Test".to_string()),
            last_name: self.last_name.unwrap_or_else(|| format!("User {n}")),
            password_hash: self
                .password_hash
                .unwrap_or_else(|| identity.password_hash.clone()),
            role: self.role.unwrap_or(Role::User),
            organization_id: self
                .organization_id
                .unwrap_or_else(|| identity.default_organization_id.clone()),
            permissions: self.permissions.unwrap_or_default(),
            is_active: self.is_active.unwrap_or(true),
            email_verified: self
                .email_verified
                .unwrap_or_else(|| Some(default_verified_at())),
            email_verification_token,
            password_reset_token: self.password_reset_token.unwrap_or(None),
            password_reset_expires: self.password_reset_expires.unwrap_or(None),
            last_login_at: self.last_login_at.unwrap_or(None),
            avatar: self.avatar.unwrap_or(None),
            created_at: self.created_at.unwrap_or(now),
            updated_at: self.updated_at.unwrap_or(now),
        };

        tracing::debug!(id = %user.id, role = %user.role, organization_id = %user.organization_id, "built user fixture");
        user
    }

    /// Build `count` users from the same overrides.
    #[must_use]
    pub fn create_batch(&self, fixtures: &mut Fixtures, count: usize) -> Vec<User> {
        tracing::debug!(count, "building user batch");
        (0..count)
            .map(|_| self.clone().create(fixtures))
            .collect()
    }

    /// Build `count` users that all reference `organization_id`.
    ///
    /// The reference is advisory; a missing organization is not an error.
    #[must_use]
    pub fn create_for_organization(
        self,
        fixtures: &mut Fixtures,
        organization_id: &str,
        count: usize,
    ) -> Vec<User> {
        self.with_organization_id(organization_id)
            .create_batch(fixtures, count)
    }
}

impl Default for UserFactory {
    fn default() -> Self {
        Self::new()
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn default_verified_at_is_new_year_2024() {
        assert_eq!(
            default_verified_at().to_rfc3339(),
            "2024-01-01T00:00:00+00:00"
        );
    }

    #[test]
    fn role_variants_set_role_and_email_prefix() {
        let cases = [
            (UserFactory::admin(), Role::Admin, "admin1@example.com"),
            (UserFactory::risk_manager(), Role::RiskManager, "risk.manager1@example.com"),
            (UserFactory::auditor(), Role::Auditor, "auditor1@example.com"),
        ];

        for (factory, role, email) in cases {
            let mut fixtures = Fixtures::new();
            let user = factory.create(&mut fixtures);
            assert_eq!(user.role, role);
            assert_eq!(user.email, email);
            assert_eq!(user.id, "user-1");
        }
    }

    #[test]
    fn unverified_variant_issues_token_from_sequence() {
        let mut fixtures = Fixtures::new();
        fixtures.users.next();
        let user = UserFactory::unverified().create(&mut fixtures);
        assert!(user.email_verified.is_none());
        assert_eq!(user.email_verification_token.as_deref(), Some("verify-2"));
    }

    #[test]
    fn unverified_token_override_wins() {
        let mut fixtures = Fixtures::new();
        let user = UserFactory::unverified()
            .with_email_verification_token(None)
            .create(&mut fixtures);
        assert!(user.email_verification_token.is_none());
    }

    #[test]
    fn password_reset_sets_token_and_expiry_together() {
        let mut fixtures = Fixtures::new();
        let expires = default_verified_at();
        let user = UserFactory::new()
            .with_password_reset("reset-abc", expires)
            .create(&mut fixtures);
        assert_eq!(user.password_reset_token.as_deref(), Some("reset-abc"));
        assert_eq!(user.password_reset_expires, Some(expires));
    }
}
