//! Database pool setup and migrations.

use sqlx::postgres::PgPoolOptions;
use sqlx::{Pool, Postgres};

/// A type alias for the database connection pool, used throughout the
/// application for the shared connection state.
pub type DbPool = Pool<Postgres>;

pub async fn connect(database_url: &str) -> Result<DbPool, sqlx::Error> {
    PgPoolOptions::new()
        .max_connections(8)
        .connect(database_url)
        .await
}

/// Applies any pending migrations from the `migrations/` directory.
pub async fn run_migrations(pool: &DbPool) -> Result<(), sqlx::migrate::MigrateError> {
    sqlx::migrate!("./migrations").run(pool).await
}
