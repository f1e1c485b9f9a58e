/**
 * Store Selection
 *
 * Picks the store from the configuration: PostgreSQL when a database URL is
 * set, otherwise the in-memory store. Without a database the server still
 * starts, but nothing outlives the process.
 *
 * A configured database that cannot be reached is an error. Silently
 * falling back to memory there would lose writes.
 */

use std::sync::Arc;

use crate::backend::store::{MemoryStore, PgStore, Store, StoreResult};
use crate::shared::AppConfig;

/// Connect the store described by `config`
///
/// For PostgreSQL this also runs pending migrations.
pub async fn load_store(config: &AppConfig) -> StoreResult<Arc<dyn Store>> {
    let Some(database_url) = config.database_url.as_deref() else {
        tracing::warn!("DATABASE_URL not set. Using in-memory store; data will not persist.");
        return Ok(Arc::new(MemoryStore::new()));
    };

    let store = PgStore::connect(database_url).await.map_err(|e| {
        tracing::error!("Failed to create database connection pool: {}", e);
        e
    })?;

    store.migrate().await.map_err(|e| {
        tracing::error!("Failed to run database migrations: {}", e);
        e
    })?;

    Ok(Arc::new(store))
}
