//! Compares the stored password digest of the demo parent account with the
//! digest of the demo password.

use std::io::Write;

use nursery_devtools::fixtures::{DEMO_PASSWORD, PARENT_EMAIL};
use nursery_devtools::services::login_checker::{check_login, LoginCheckReport};
use nursery_shared::clients::db::create_pool;
use nursery_shared::config::{load_dotenv, DatabaseConfig};
use nursery_shared::errors::AppResult;
use nursery_shared::telemetry::init_tracing;

fn run(config: &DatabaseConfig) -> AppResult<LoginCheckReport> {
    let pool = create_pool(config)?;
    let mut conn = pool.get()?;
    check_login(&mut *conn, PARENT_EMAIL, DEMO_PASSWORD)
}

fn main() -> anyhow::Result<()> {
    load_dotenv()?;
    init_tracing("check-login");

    let config = DatabaseConfig::load()?;
    let mut out = std::io::stdout().lock();

    match run(&config) {
        Ok(report) => report.write_to(&mut out)?,
        Err(e) => {
            tracing::error!(code = %e.code(), error = %e, db = %config.redacted_target(), "login check failed");
            writeln!(out, "Error: {e}")?;
        }
    }
    Ok(())
}
