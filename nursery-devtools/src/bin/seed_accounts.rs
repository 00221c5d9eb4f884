//! Creates (or refreshes) the demo parent and nursery owner accounts and the
//! demo nursery. Safe to run repeatedly.

use std::io::Write;

use nursery_devtools::fixtures::DemoData;
use nursery_devtools::services::seeder::{seed_demo_data, SeedReport};
use nursery_shared::clients::db::create_pool;
use nursery_shared::config::{load_dotenv, DatabaseConfig};
use nursery_shared::errors::AppResult;
use nursery_shared::telemetry::init_tracing;

fn run(config: &DatabaseConfig) -> AppResult<SeedReport> {
    let pool = create_pool(config)?;
    let mut conn = pool.get()?;
    seed_demo_data(&mut *conn, &DemoData::default())
}

fn main() -> anyhow::Result<()> {
    load_dotenv()?;
    init_tracing("seed-accounts");

    let config = DatabaseConfig::load()?;
    let mut out = std::io::stdout().lock();
    writeln!(out, "Adding test accounts...")?;

    // The pool is dropped inside `run`, on success and failure alike.
    match run(&config) {
        Ok(report) => report.write_to(&mut out)?,
        Err(e) => {
            tracing::error!(code = %e.code(), error = %e, db = %config.redacted_target(), "seeding failed");
            writeln!(out, "Error adding test accounts: {e}")?;
        }
    }
    Ok(())
}
