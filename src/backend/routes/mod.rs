//! Route Configuration Module
//!
//! This module configures all HTTP routes for the backend server.
//!
//! # Architecture
//!
//! - **`paths`** - URL constants shared by routes, redirects and pages
//! - **`router`** - Main router creation and layer assembly
//! - **`auth_routes`** - Registration, login, logout and current user
//!
//! # Module Structure
//!
//! ```text
//! routes/
//! ├── mod.rs          - Module exports and documentation
//! ├── paths.rs        - URL constants
//! ├── router.rs       - Main router creation
//! └── auth_routes.rs  - Authentication routes
//! ```
//!
//! # Example
//!
//! ```rust,no_run
//! use tinyblog::backend::routes::create_router;
//! use tinyblog::backend::server::{config::load_database, AppState, ServerConfig};
//! use tinyblog::backend::auth::PasswordHasher;
//!
//! # async fn example() -> Result<(), tinyblog::backend::BackendError> {
//! let config = ServerConfig::from_env();
//! let pool = load_database(&config.database_url).await?;
//! let router = create_router(AppState::new(pool, PasswordHasher::default()), &config);
//! # Ok(())
//! # }
//! ```

/// URL constants
pub mod paths;

/// Main router creation
pub mod router;

/// Authentication routes
pub mod auth_routes;

pub use router::create_router;
