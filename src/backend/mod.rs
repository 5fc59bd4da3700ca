//! Backend Module
//!
//! This module contains all server-side code for tinyblog: the Axum router,
//! the authentication views and the middleware that resolves the logged-in
//! user for every request.
//!
//! # Architecture
//!
//! The backend is organized into focused submodules:
//!
//! - **`server`** - Configuration, database loading, application state, app creation
//! - **`routes`** - HTTP route configuration and router assembly
//! - **`auth`** - Users, password hashing, sessions and the auth handlers
//! - **`middleware`** - Current-user resolver and the login-required guard
//! - **`views`** - HTML pages (index, login and register forms)
//! - **`error`** - Backend error types and their HTTP conversion
//!
//! # Module Structure
//!
//! ```text
//! backend/
//! ├── mod.rs          - Module exports and documentation
//! ├── server/         - Configuration, state and initialization
//! ├── routes/         - Route configuration
//! ├── auth/           - Authentication
//! ├── middleware/     - Request middleware
//! ├── views/          - HTML rendering
//! └── error/          - Error types
//! ```
//!
//! # State Management
//!
//! `AppState` holds only immutable handles (the SQLite pool and the password
//! hasher), so it is cloned freely into every handler. The only per-request
//! state is the `CurrentUser` value stored in the request extensions.

/// Server setup and configuration
pub mod server;

/// Route configuration
pub mod routes;

/// Backend error types
pub mod error;

/// Authentication and user management
pub mod auth;

/// Middleware for request processing
pub mod middleware;

/// HTML pages
pub mod views;

/// Re-export commonly used types
pub use error::{AuthError, BackendError};
pub use server::create_app;
pub use server::state::AppState;
