use sea_orm::DatabaseConnection;
use tracing::info;

use super::providers;
use crate::config::DatabaseConfig;

pub const ENTITY_REGISTRY: &str = "softuni_hr::db::entities::*";

pub async fn connect(cfg: &DatabaseConfig) -> anyhow::Result<DatabaseConnection> {
    let db = providers::default_registry()?.connect(cfg).await?;
    sync_schema(&db).await?;
    Ok(db)
}

/// Creates any missing tables, columns and foreign keys from the entity
/// definitions.
pub async fn sync_schema(db: &DatabaseConnection) -> anyhow::Result<()> {
    info!("syncing database schema from entities");
    db.get_schema_registry(ENTITY_REGISTRY).sync(db).await?;
    Ok(())
}
