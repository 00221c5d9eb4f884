use diesel::pg::PgConnection;
use diesel::r2d2::{ConnectionManager, Pool};

use crate::config::DatabaseConfig;
use crate::errors::AppResult;

pub type DbPool = Pool<ConnectionManager<PgConnection>>;

/// Connections go back to the pool when dropped and are closed with it.
pub fn create_pool(config: &DatabaseConfig) -> AppResult<DbPool> {
    let manager = ConnectionManager::<PgConnection>::new(config.database_url());
    let pool = Pool::builder()
        .max_size(config.pool_size.max(1))
        .min_idle(Some(0))
        .test_on_check_out(true)
        .build(manager)?;

    tracing::debug!(target_db = %config.redacted_target(), "database connection pool created");
    Ok(pool)
}
