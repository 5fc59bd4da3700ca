//! Authentication Module
//!
//! This module handles user registration, login and logout, and resolves the
//! logged-in user from the session.
//!
//! # Architecture
//!
//! - **`users`** - User data model and database operations
//! - **`password`** - bcrypt hashing and verification
//! - **`sessions`** - Session layer and the session's `user_id` entry
//! - **`service`** - Register, authenticate and current-user resolution
//! - **`handlers`** - HTTP handlers for the `/auth` routes
//!
//! # Module Structure
//!
//! ```text
//! auth/
//! ├── mod.rs          - Module exports and documentation
//! ├── users.rs        - User model and database operations
//! ├── password.rs     - Password hashing
//! ├── sessions.rs     - Session management
//! ├── service.rs      - Auth service
//! └── handlers/       - HTTP handlers
//! ```
//!
//! # Authentication Flow
//!
//! 1. **Register**: username + password → user created → redirect to login
//! 2. **Login**: username + password → credentials verified → session holds
//!    the user id → redirect to index
//! 3. **Every request**: session user id → user loaded → `CurrentUser`
//! 4. **Logout**: session deleted → redirect to index
//!
//! # Security
//!
//! - Passwords are hashed using bcrypt before storage
//! - The browser only holds an opaque session id; the user id stays on the server
//! - The session id is rotated on login

/// User data model and database operations
pub mod users;

/// Password hashing
pub mod password;

/// Session management
pub mod sessions;

/// Register, authenticate and current-user resolution
pub mod service;

/// HTTP handlers for authentication endpoints
pub mod handlers;

// Re-export commonly used types and handlers
pub use handlers::{get_me, login, login_form, logout, register, register_form};
pub use handlers::{CredentialsForm, UserResponse};
pub use password::PasswordHasher;
pub use service::AuthService;
pub use users::User;
