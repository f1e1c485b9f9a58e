/**
 * Application State Management
 *
 * This module defines the application state structure and implements
 * the necessary `FromRef` traits for Axum state extraction.
 *
 * # Architecture
 *
 * The `AppState` struct serves as the central state container for the
 * application, holding:
 * - The store (`Arc<dyn Store>`, PostgreSQL or in-memory)
 * - JWT signing keys
 * - The loaded configuration
 *
 * # State Extraction
 *
 * The `FromRef` implementations allow handlers to extract only the part of
 * the state they need:
 *
 * ```rust
 * use std::sync::Arc;
 * use axum::extract::State;
 * use yatube::backend::store::Store;
 *
 * async fn handler(State(store): State<Arc<dyn Store>>) {
 *     let _groups = store.list_groups().await;
 * }
 * ```
 */

use axum::extract::FromRef;
use std::sync::Arc;

use crate::backend::auth::sessions::JwtKeys;
use crate::backend::store::Store;
use crate::shared::AppConfig;

#[derive(Clone)]
pub struct AppState {
    pub store: Arc<dyn Store>,

    pub keys: Arc<JwtKeys>,

    pub config: Arc<AppConfig>,
}

impl AppState {
    pub fn new(store: Arc<dyn Store>, config: AppConfig) -> Self {
        Self {
            store,
            keys: Arc::new(JwtKeys::from_config(&config)),
            config: Arc::new(config),
        }
    }
}

impl FromRef<AppState> for Arc<dyn Store> {
    fn from_ref(app_state: &AppState) -> Self {
        app_state.store.clone()
    }
}

impl FromRef<AppState> for Arc<JwtKeys> {
    fn from_ref(app_state: &AppState) -> Self {
        app_state.keys.clone()
    }
}

impl FromRef<AppState> for Arc<AppConfig> {
    fn from_ref(app_state: &AppState) -> Self {
        app_state.config.clone()
    }
}
