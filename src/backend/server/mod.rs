//! Server Module
//!
//! Initialization and configuration of the Axum HTTP server.
//!
//! # Architecture
//!
//! - **`state`** - `AppState` and its `FromRef` implementations
//! - **`config`** - Store selection from `AppConfig`
//! - **`init`** - App creation
//!
//! # Module Structure
//!
//! ```text
//! server/
//! ├── mod.rs          - Module exports and documentation
//! ├── state.rs        - AppState and FromRef implementations
//! ├── config.rs       - Store loading (PostgreSQL or memory)
//! └── init.rs         - Server initialization and app creation
//! ```
//!
//! # Example
//!
//! ```rust,no_run
//! use yatube::backend::server::create_app;
//! use yatube::shared::AppConfig;
//!
//! # async fn example() -> Result<(), Box<dyn std::error::Error>> {
//! let config = AppConfig::load()?;
//! let app = create_app(config).await?;
//! # Ok(())
//! # }
//! ```

pub mod state;

pub mod config;

pub mod init;

// Re-export commonly used types
pub use state::AppState;
pub use init::create_app;
