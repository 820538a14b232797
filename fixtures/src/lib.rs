#![deny(
    clippy::expect_used,
    clippy::panic,
    clippy::print_stdout,
    clippy::todo,
    clippy::unimplemented,
    clippy::unwrap_used
)]
#![cfg_attr(test, allow(clippy::expect_used, clippy::unwrap_used))]

//! Deterministic Organization and User fixtures for the GRC platform.
//!
//! A [`Fixtures`] context owns one [`Sequence`] per entity kind. Factories
//! borrow it mutably, take one number from the matching sequence, and fill
//! every field the caller did not override.

pub mod config;
pub mod context;
pub mod error;
pub mod factories;
pub mod seed;
pub mod sequence;

pub use config::{ConfigError, FixtureConfig};
pub use context::{Clock, Fixtures};
pub use error::{batch_size, FixtureError};
pub use factories::{OrganizationFactory, UserFactory};
pub use seed::{SeedDataset, SeedPlan};
pub use sequence::Sequence;
