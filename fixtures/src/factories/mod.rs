//! Factories that turn sparse overrides into complete records.
//!
//! # Usage
//!
//! ```rust
//! use grc_fixtures::{Fixtures, OrganizationFactory, UserFactory};
//!
//! let mut fixtures = Fixtures::new();
//! let org = OrganizationFactory::enterprise().create(&mut fixtures);
//! let team = UserFactory::new().create_for_organization(&mut fixtures, &org.id, 3);
//! assert_eq!(team.len(), 3);
//! ```

mod organization;
mod user;

pub use organization::OrganizationFactory;
pub use user::{default_verified_at, UserFactory};
