use sea_orm::DatabaseConnection;

use crate::{config::DatabaseConfig, db::connection, services::ServiceContext};

/// A private in-memory SQLite database with the schema synced.
pub async fn memory_db() -> anyhow::Result<DatabaseConnection> {
    connection::connect(&DatabaseConfig::in_memory_sqlite()).await
}

/// In-memory database loaded with the demo dataset.
pub async fn seeded_db() -> anyhow::Result<(DatabaseConnection, ServiceContext)> {
    let db = memory_db().await?;
    let services = ServiceContext::new(&db);
    services.seed_demo().await?;
    Ok((db, services))
}
