//! Middleware Module
//!
//! Request middleware for the backend server.
//!
//! - **`auth`** - Resolves the logged-in user for every request and guards
//!   login-only routes
//!
//! # Example
//!
//! ```rust,no_run
//! use axum::{middleware, routing::get, Router};
//! use tinyblog::backend::middleware::login_required;
//! use tinyblog::backend::AppState;
//!
//! async fn create_post() -> &'static str { "new post" }
//!
//! let protected: Router<AppState> = Router::new()
//!     .route("/create", get(create_post))
//!     .route_layer(middleware::from_fn(login_required));
//! ```

pub mod auth;

pub use auth::{load_logged_in_user, login_required, CurrentUser};
