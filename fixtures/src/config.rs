use figment::{
    providers::{Env, Format, Serialized, Yaml},
    Figment,
};
use grc_model::Plan;
use serde::{Deserialize, Serialize};

/// Fixture generator configuration loaded from multiple sources.
///
/// Configuration is loaded in priority order (lowest to highest):
/// 1. Struct defaults
/// 2. fixtures.yaml file (if exists)
/// 3. Environment variables with GRC_ prefix (always wins)
#[derive(Debug, Clone, Default, Deserialize, Serialize)]
pub struct FixtureConfig {
    #[serde(default)]
    pub identity: IdentityConfig,
    #[serde(default)]
    pub organization: OrganizationConfig,
    #[serde(default)]
    pub logging: LoggingConfig,
}

#[derive(Debug, Clone, Deserialize, Serialize)]
pub struct IdentityConfig {
    /// Domain used for generated user emails (`user1@<email_domain>`).
    #[serde(default = "default_email_domain")]
    pub email_domain: String,

    /// Suffix used for generated organization domains (`org-1.<suffix>`).
    #[serde(default = "default_organization_domain_suffix")]
    pub organization_domain_suffix: String,

    /// Placeholder stored in every generated user's `password_hash`.
    /// It has the shape of a bcrypt hash but matches no password.
    #[serde(default = "default_password_hash")]
    pub password_hash: String,

    /// Organization reference given to users built without one.
    #[serde(default = "default_organization_id")]
    pub default_organization_id: String,
}

#[derive(Debug, Clone, Deserialize, Serialize)]
pub struct OrganizationConfig {
    /// Plan given to organizations built by the base builder.
    #[serde(default = "default_plan")]
    pub default_plan: Plan,

    /// IANA timezone name.
    #[serde(default = "default_timezone")]
    pub timezone: String,

    #[serde(default = "default_date_format")]
    pub date_format: String,

    /// ISO 4217 currency code.
    #[serde(default = "default_currency")]
    pub currency: String,

    /// Risk matrix edge length (3 to 10).
    #[serde(default = "default_risk_matrix_size")]
    pub risk_matrix_size: u8,
}

#[derive(Debug, Clone, Deserialize, Serialize)]
pub struct LoggingConfig {
    /// Log level filter (trace, debug, info, warn, error).
    #[serde(default = "default_log_level")]
    pub level: String,
}

fn default_email_domain() -> String {
    "example.com".to_string()
}

fn default_organization_domain_suffix() -> String {
    "example.org".to_string()
}

fn default_password_hash() -> String {
    "$2b$10$fixturefixturefixturefuJ0a4kq3ZqN3ZkYwXH1y2fWn4o6Lh8e".to_string()
}

fn default_organization_id() -> String {
    "org-1".to_string()
}

// These functions cannot be const because serde uses function pointers for defaults
#[allow(clippy::missing_const_for_fn)]
fn default_plan() -> Plan {
    Plan::Pro
}

fn default_timezone() -> String {
    "UTC".to_string()
}

fn default_date_format() -> String {
    "MM/DD/YYYY".to_string()
}

fn default_currency() -> String {
    "USD".to_string()
}

#[allow(clippy::missing_const_for_fn)]
fn default_risk_matrix_size() -> u8 {
    5
}

fn default_log_level() -> String {
    "info".to_string()
}

impl Default for IdentityConfig {
    fn default() -> Self {
        Self {
            email_domain: default_email_domain(),
            organization_domain_suffix: default_organization_domain_suffix(),
            password_hash: default_password_hash(),
            default_organization_id: default_organization_id(),
        }
    }
}

impl Default for OrganizationConfig {
    fn default() -> Self {
        Self {
            default_plan: default_plan(),
            timezone: default_timezone(),
            date_format: default_date_format(),
            currency: default_currency(),
            risk_matrix_size: default_risk_matrix_size(),
        }
    }
}

impl Default for LoggingConfig {
    fn default() -> Self {
        Self {
            level: default_log_level(),
        }
    }
}

/// Configuration loading and validation errors.
#[derive(Debug, thiserror::Error)]
pub enum ConfigError {
    #[error("Configuration error: {0}")]
    Figment(#[from] Box<figment::Error>),

    #[error("Validation error: {0}")]
    Validation(String),
}

impl From<figment::Error> for ConfigError {
    fn from(err: figment::Error) -> Self {
        Self::Figment(Box::new(err))
    }
}

impl FixtureConfig {
    /// Load configuration from all sources.
    ///
    /// Sources are merged in priority order:
    /// 1. Struct defaults (lowest)
    /// 2. fixtures.yaml file (if exists)
    /// 3. Environment variables with GRC_ prefix (highest)
    ///
    /// # Errors
    /// Returns an error if configuration cannot be loaded or is invalid.
    pub fn load() -> Result<Self, ConfigError> {
        Self::load_from("fixtures.yaml")
    }

    /// Load configuration with a custom YAML file path.
    ///
    /// # Errors
    /// Returns an error if configuration cannot be loaded or is invalid.
    pub fn load_from(yaml_path: &str) -> Result<Self, ConfigError> {
        let config: Self = Figment::new()
            .merge(Serialized::defaults(Self::default()))
            .merge(Yaml::file(yaml_path))
            .merge(Env::prefixed("GRC_").split("__"))
            .extract()?;

        config.validate()?;
        Ok(config)
    }

    /// Validate configuration values.
    ///
    /// # Errors
    /// Returns an error if any configuration value is invalid.
    pub fn validate(&self) -> Result<(), ConfigError> {
        let identity = &self.identity;

        if identity.email_domain.is_empty() || identity.email_domain.contains('@') {
            return Err(ConfigError::Validation(format!(
                "identity.email_domain must be a bare domain, got: '{}'",
                identity.email_domain
            )));
        }

        if identity.organization_domain_suffix.is_empty() {
            return Err(ConfigError::Validation(
                "identity.organization_domain_suffix cannot be empty".into(),
            ));
        }

        if identity.password_hash.is_empty() {
            return Err(ConfigError::Validation(
                "identity.password_hash cannot be empty".into(),
            ));
        }

        if identity.default_organization_id.is_empty() {
            return Err(ConfigError::Validation(
                "identity.default_organization_id cannot be empty".into(),
            ));
        }

        let organization = &self.organization;

        if !(3..=10).contains(&organization.risk_matrix_size) {
            return Err(ConfigError::Validation(format!(
                "organization.risk_matrix_size must be between 3 and 10, got: {}",
                organization.risk_matrix_size
            )));
        }

        // ISO 4217 codes are three uppercase letters
        let currency = &organization.currency;
        if currency.len() != 3 || !currency.bytes().all(|b| b.is_ascii_uppercase()) {
            return Err(ConfigError::Validation(format!(
                "organization.currency must be a three-letter ISO 4217 code, got: '{currency}'"
            )));
        }

        Ok(())
    }
}
