/**
 * Server Initialization
 *
 * This module wires configuration, store and router together.
 *
 * # Initialization Process
 *
 * 1. Load the store (PostgreSQL or in-memory)
 * 2. Derive the JWT keys from the configuration
 * 3. Create and configure the router
 */

use axum::Router;

use crate::backend::routes::router::create_router;
use crate::backend::server::config::load_store;
use crate::backend::server::state::AppState;
use crate::backend::store::StoreResult;
use crate::shared::AppConfig;

/// Build the application for `config`
pub async fn create_app(config: AppConfig) -> StoreResult<Router<()>> {
    tracing::info!("Initializing Yatube backend server");

    let store = load_store(&config).await?;
    let app_state = AppState::new(store, config);

    let app = create_router(app_state);
    tracing::info!("Router configured");

    Ok(app)
}
