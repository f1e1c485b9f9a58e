//! PostgreSQL test fixtures
//!
//! Tests using these helpers only run when `DATABASE_URL` points at a
//! PostgreSQL database; otherwise they return early. Tests share the
//! database, so every fixture gets a unique name instead of truncating tables.

use uuid::Uuid;
use yatube::backend::auth::users::NewUser;
use yatube::backend::follow::UserRef;
use yatube::backend::store::{PgStore, UserStore};

/// Connect to `DATABASE_URL` and run migrations, or `None` when it is unset
pub async fn create_test_store() -> Option<PgStore> {
    let Ok(database_url) = std::env::var("DATABASE_URL") else {
        eprintln!("DATABASE_URL not set, skipping PostgreSQL test");
        return None;
    };

    let store = PgStore::connect(&database_url)
        .await
        .expect("Failed to connect to test database");
    store.migrate().await.expect("Failed to run migrations");
    Some(store)
}

/// A short random suffix for fixture names
pub fn unique_suffix() -> String {
    Uuid::new_v4().simple().to_string()[..12].to_string()
}

/// Insert a user straight into the store
pub async fn create_pg_user(store: &PgStore, username: &str) -> UserRef {
    store
        .create_user(NewUser {
            username: username.to_string(),
            email: None,
            password_hash: "unused".to_string(),
        })
        .await
        .expect("Failed to create user")
        .into()
}
