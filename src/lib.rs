//! tinyblog - Main Library
//!
//! tinyblog is a small blog server built on Axum. This crate contains the
//! authentication layer every other view depends on: account registration,
//! password login, logout, and the per-request "current user" that gates
//! login-only pages.
//!
//! # Overview
//!
//! - Users are stored in a single SQLite table (`user`) accessed via `sqlx`
//! - Passwords are hashed with bcrypt on the blocking thread pool
//! - Logins are tracked in a server-side session (`tower-sessions`) keyed by
//!   a browser-session cookie holding nothing but an opaque id
//! - Before every request the logged-in user is resolved from the session and
//!   attached to the request as [`backend::middleware::CurrentUser`]
//!
//! # Usage
//!
//! ```rust,no_run
//! use tinyblog::backend::server::{config::ServerConfig, init::create_app};
//!
//! # async fn example() -> Result<(), tinyblog::backend::BackendError> {
//! let config = ServerConfig::from_env();
//! let app = create_app(&config).await?;
//! // Serve `app` with axum::serve
//! # Ok(())
//! # }
//! ```
//!
//! # Error Handling
//!
//! User mistakes (missing fields, taken usernames, bad credentials) are
//! [`backend::error::AuthError`] values rendered back onto the form that
//! caused them. Everything else is a [`backend::BackendError`] and becomes
//! a generic 500 response.

/// Backend server-side code
pub mod backend;
