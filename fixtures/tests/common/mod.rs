//! Common test utilities for integration tests.
//!
//! - [`fixed_clock`] - pin default timestamps so records compare equal
//! - [`pinned_fixtures`] - a fresh context using the fixed clock

#![allow(dead_code)]

use chrono::{DateTime, TimeZone, Utc};
use grc_fixtures::Fixtures;

/// 2025-06-01T12:00:00Z, used wherever a test needs a stable "now".
pub fn fixed_clock() -> DateTime<Utc> {
    Utc.with_ymd_and_hms(2025, 6, 1, 12, 0, 0)
        .single()
        .expect("valid timestamp")
}

/// A fresh context whose default timestamps are [`fixed_clock`].
pub fn pinned_fixtures() -> Fixtures {
    Fixtures::new().with_clock(fixed_clock)
}
