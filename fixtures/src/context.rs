//! Fixture context: the allocators, config and clock a test run shares.

use crate::config::FixtureConfig;
use crate::sequence::Sequence;
use chrono::{DateTime, Utc};

/// Source of "now" for default timestamps.
pub type Clock = fn() -> DateTime<Utc>;

/// State shared by every factory call in one test run.
///
/// Construct one per test (or per suite root) and pass it by `&mut` to the
/// factories. Organization and user allocations are tracked separately, so
/// building one kind never shifts the other's numbering.
#[derive(Debug, Clone)]
pub struct Fixtures {
    pub organizations: Sequence,
    pub users: Sequence,
    config: FixtureConfig,
    clock: Clock,
}

impl Fixtures {
    /// Create a context with default configuration and the system clock.
    #[must_use]
    pub fn new() -> Self {
        Self::with_config(FixtureConfig::default())
    }

    #[must_use]
    pub fn with_config(config: FixtureConfig) -> Self {
        Self {
            organizations: Sequence::new(),
            users: Sequence::new(),
            config,
            clock: Utc::now,
        }
    }

    /// Replace the clock used for default timestamps.
    #[must_use]
    pub fn with_clock(mut self, clock: Clock) -> Self {
        self.clock = clock;
        self
    }

    #[must_use]
    pub const fn config(&self) -> &FixtureConfig {
        &self.config
    }

    #[must_use]
    pub fn now(&self) -> DateTime<Utc> {
        (self.clock)()
    }

    /// Rewind both allocators so the next records are `org-1` and `user-1`.
    pub fn reset(&mut self) {
        self.organizations.reset();
        self.users.reset();
        tracing::debug!("fixture sequences reset");
    }
}

impl Default for Fixtures {
    fn default() -> Self {
        Self::new()
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use chrono::TimeZone;

    fn fixed_clock() -> DateTime<Utc> {
        Utc.with_ymd_and_hms(2025, 6, 1, 12, 0, 0).unwrap()
    }

    #[test]
    fn with_clock_pins_now() {
        let fixtures = Fixtures::new().with_clock(fixed_clock);
        assert_eq!(fixtures.now(), fixed_clock());
        assert_eq!(fixtures.now(), fixtures.now());
    }

    #[test]
    fn reset_rewinds_both_sequences() {
        let mut fixtures = Fixtures::new();
        fixtures.organizations.next();
        fixtures.users.next();
        fixtures.users.next();
        fixtures.reset();
        assert_eq!(fixtures.organizations.peek(), 1);
        assert_eq!(fixtures.users.peek(), 1);
    }

    #[test]
    fn with_config_keeps_config() {
        let mut config = FixtureConfig::default();
        config.identity.email_domain = "grc.test".into();
        let fixtures = Fixtures::with_config(config);
        assert_eq!(fixtures.config().identity.email_domain, "grc.test");
    }
}
