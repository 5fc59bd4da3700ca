//! Backend Error Module
//!
//! This module defines the error types used by the backend server.
//!
//! # Architecture
//!
//! - **`types`** - Error type definitions and constructors
//! - **`conversion`** - `IntoResponse` for fatal errors
//!
//! # Error Types
//!
//! - `AuthError` - Mistakes made by the person filling in a form: missing
//!   fields, a taken username, unknown username or wrong password. These are
//!   shown on the form that produced them and never treated as faults.
//! - `BackendError` - Everything that stops a request from being served:
//!   database, password hashing, session store or configuration failures.
//!   `BackendError::Auth` carries an `AuthError` up to the handler boundary.
//!
//! # HTTP Response Conversion
//!
//! `BackendError` implements `IntoResponse`, so handlers and middleware can
//! return it directly. Internal details are logged and replaced by a generic
//! message in the response body.

/// Error type definitions
pub mod types;

/// Error conversion implementations
pub mod conversion;

// Re-export commonly used types
pub use types::{AuthError, BackendError};
