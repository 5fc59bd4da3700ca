//! Authentication Handlers Module
//!
//! HTTP handlers for the `/auth` routes.
//!
//! # Module Structure
//!
//! ```text
//! handlers/
//! ├── mod.rs      - Module exports and documentation
//! ├── types.rs    - Form and response types
//! ├── register.rs - Registration form and submission
//! ├── login.rs    - Login form and submission
//! ├── logout.rs   - Logout
//! └── me.rs       - Current user as JSON
//! ```
//!
//! # Handlers
//!
//! - **`register_form`** / **`register`** - GET/POST /auth/register
//! - **`login_form`** / **`login`** - GET/POST /auth/login
//! - **`logout`** - GET /auth/logout
//! - **`get_me`** - GET /auth/me (login required)

/// Request and response types
pub mod types;

/// Registration handlers
pub mod register;

/// Login handlers
pub mod login;

/// Logout handler
pub mod logout;

/// Get current user handler
pub mod me;

// Re-export commonly used types
pub use types::{CredentialsForm, UserResponse};

// Re-export handlers
pub use login::{login, login_form};
pub use logout::logout;
pub use me::get_me;
pub use register::{register, register_form};
