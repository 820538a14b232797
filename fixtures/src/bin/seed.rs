//! Generate a seed dataset and print it as JSON.
//!
//! Usage: `cargo run --bin grc-seed -- --organizations 3 --users-per-org 5 > seed.json`

#![deny(
    clippy::expect_used,
    clippy::panic,
    clippy::todo,
    clippy::unimplemented,
    clippy::unwrap_used
)]
#![allow(clippy::print_stdout)]

use clap::Parser;
use grc_fixtures::{FixtureConfig, Fixtures, SeedPlan};
use tracing_subscriber::EnvFilter;

#[derive(Debug, Parser)]
#[command(name = "grc-seed", version, about = "Generate GRC seed fixtures as JSON")]
struct Args {
    /// Number of organizations to generate.
    #[arg(long, default_value_t = 3, allow_negative_numbers = true)]
    organizations: i64,

    /// Users generated per organization (admin, risk manager, auditor, then plain users).
    #[arg(long = "users-per-org", default_value_t = 5, allow_negative_numbers = true)]
    users_per_org: i64,

    /// YAML config file, merged under GRC_ environment overrides.
    #[arg(long, default_value = "fixtures.yaml")]
    config: String,

    /// Pretty-print the JSON output.
    #[arg(long)]
    pretty: bool,
}

fn main() -> Result<(), anyhow::Error> {
    let args = Args::parse();

    // Load and validate configuration first (fail-fast)
    let config = FixtureConfig::load_from(&args.config).map_err(|e| anyhow::anyhow!("{e}"))?;

    // Logs go to stderr so stdout stays valid JSON
    let filter = EnvFilter::try_from_default_env()
        .unwrap_or_else(|_| EnvFilter::new(&config.logging.level));
    tracing_subscriber::fmt()
        .with_env_filter(filter)
        .with_writer(std::io::stderr)
        .init();

    let plan = SeedPlan::from_counts(args.organizations, args.users_per_org)?;
    tracing::info!(
        organizations = plan.organizations,
        users_per_organization = plan.users_per_organization,
        "generating seed dataset"
    );

    let mut fixtures = Fixtures::with_config(config);
    let dataset = plan.build(&mut fixtures);

    let json = if args.pretty {
        serde_json::to_string_pretty(&dataset)?
    } else {
        serde_json::to_string(&dataset)?
    };
    println!("{json}");

    tracing::info!(
        organizations = dataset.organizations.len(),
        users = dataset.users.len(),
        "seed dataset written"
    );
    Ok(())
}
