//! Test server over the in-memory store
//!
//! Builds the full router (middleware included) the way the binary does,
//! but with a `MemoryStore`, a fixed JWT secret and the cheapest bcrypt cost.

use std::sync::Arc;

use axum_test::TestServer;
use yatube::backend::groups::register_group;
use yatube::backend::routes::create_router;
use yatube::backend::server::AppState;
use yatube::backend::store::MemoryStore;
use yatube::shared::{AppConfig, Group, NewGroup};

pub const TEST_JWT_SECRET: &str = "integration-test-secret";

pub struct TestApp {
    pub server: TestServer,
    /// Direct handle on the store, for seeding data the API cannot create
    pub store: Arc<MemoryStore>,
}

pub fn test_config() -> AppConfig {
    AppConfig::builder()
        .jwt_secret(TEST_JWT_SECRET)
        .bcrypt_cost(4)
        .build()
        .expect("Failed to build test config")
}

/// Start a fresh application with an empty store
pub fn spawn_app() -> TestApp {
    let store = Arc::new(MemoryStore::new());
    let state = AppState::new(store.clone(), test_config());
    let server = TestServer::new(create_router(state)).expect("Failed to start test server");
    TestApp { server, store }
}

impl TestApp {
    /// Create a group directly in the store
    pub async fn create_group(&self, slug: &str) -> Group {
        let group = NewGroup::new(format!("Group {}", slug), slug, "Test group");
        register_group(self.store.as_ref(), group)
            .await
            .expect("Failed to create group")
    }
}
