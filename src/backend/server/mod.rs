//! Server Module
//!
//! Initialization and configuration of the Axum HTTP server.
//!
//! # Architecture
//!
//! - **`state`** - `AppState` and its `FromRef` implementations
//! - **`config`** - Environment configuration and database loading
//! - **`init`** - App creation
//!
//! # Initialization Flow
//!
//! 1. **Configuration Loading**: `ServerConfig::from_env`
//! 2. **Database**: open the SQLite pool and run migrations
//! 3. **State Creation**: pool and password hasher
//! 4. **Router Creation**: routes, session layer, current-user resolver
//!
//! # Example
//!
//! ```rust,no_run
//! use tinyblog::backend::server::{config::ServerConfig, create_app};
//!
//! # async fn example() -> Result<(), tinyblog::backend::BackendError> {
//! let app = create_app(&ServerConfig::from_env()).await?;
//! # Ok(())
//! # }
//! ```

/// Application state
pub mod state;

/// Configuration loading
pub mod config;

/// Server initialization
pub mod init;

pub use config::ServerConfig;
pub use init::create_app;
pub use state::AppState;
