//! Record types for the GRC platform's fixture generator.
//!
//! These are plain, detached values: nothing here talks to a database or
//! validates relationships between records. The serialized form uses
//! camelCase field names so the JSON matches what the web front-end and seed
//! scripts consume.

mod organization;
pub use organization::{Features, Limits, Organization, OrganizationSettings};

mod plan;
pub use plan::{ParsePlanError, Plan};

mod role;
pub use role::{ParseRoleError, Role};

mod user;
pub use user::User;
