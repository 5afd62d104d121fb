use sqlx::postgres::PgPoolOptions;
use sqlx::PgPool;
use std::time::Duration;

// Every request runs exactly one short statement, so a small pool covers
// the service; a request waits only when all connections are checked out.
const MAX_CONNECTIONS: u32 = 5;
const ACQUIRE_TIMEOUT: Duration = Duration::from_secs(10);

pub async fn create_pool(database_url: &str) -> Result<PgPool, sqlx::Error> {
    PgPoolOptions::new()
        .max_connections(MAX_CONNECTIONS)
        .acquire_timeout(ACQUIRE_TIMEOUT)
        .connect(database_url)
        .await
}
