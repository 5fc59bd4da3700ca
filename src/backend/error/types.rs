/**
 * Backend Error Types
 *
 * This module defines the error types used in handlers, the auth service and
 * middleware.
 *
 * # Error Categories
 *
 * ## Auth Errors
 *
 * Recoverable, user-facing failures. The `Display` text of each variant is
 * the exact message shown on the form:
 * - `Validation` - a required field was empty or the password is too long
 * - `Conflict` - the username is already registered
 * - `UnknownUsername` / `WrongPassword` - login rejected
 *
 * ## Backend Errors
 *
 * Fatal for the current request:
 * - Database errors (store unreachable, query failure)
 * - Password hashing errors (malformed stored hash, bad cost)
 * - Session store errors
 * - Blocking task failures
 */

use axum::http::StatusCode;
use thiserror::Error;

/// User-facing authentication failures
#[derive(Debug, Error, Clone, PartialEq, Eq)]
pub enum AuthError {
    /// A form field was missing or out of bounds
    #[error("{message}")]
    Validation {
        /// The form field that failed validation
        field: &'static str,
        /// Human-readable error message
        message: String,
    },

    /// The username is already taken
    #[error("User {username} is already registered.")]
    Conflict {
        /// The username that was submitted
        username: String,
    },

    /// No user with this username exists
    #[error("Incorrect username.")]
    UnknownUsername,

    /// The password does not match the stored hash
    #[error("Incorrect password.")]
    WrongPassword,
}

impl AuthError {
    /// Create a validation error for a required field
    pub fn required(field: &'static str, label: &str) -> Self {
        Self::Validation {
            field,
            message: format!("{} is required.", label),
        }
    }

    /// Create a conflict error for a taken username
    pub fn conflict(username: impl Into<String>) -> Self {
        Self::Conflict {
            username: username.into(),
        }
    }

    /// Status code used when re-rendering the form with this error
    ///
    /// - `Validation` - 400 Bad Request
    /// - `Conflict` - 409 Conflict
    /// - `UnknownUsername` / `WrongPassword` - 401 Unauthorized
    pub fn status_code(&self) -> StatusCode {
        match self {
            Self::Validation { .. } => StatusCode::BAD_REQUEST,
            Self::Conflict { .. } => StatusCode::CONFLICT,
            Self::UnknownUsername | Self::WrongPassword => StatusCode::UNAUTHORIZED,
        }
    }
}

/// Backend-specific error types
///
/// Every variant except `Auth` ends the request with a 5xx response.
#[derive(Debug, Error)]
pub enum BackendError {
    /// Recoverable authentication failure, rendered by the handler
    #[error(transparent)]
    Auth(#[from] AuthError),

    /// Handler error with an explicit status code
    #[error("Handler error: {message}")]
    HandlerError {
        /// HTTP status code for this error
        status: StatusCode,
        /// Human-readable error message
        message: String,
    },

    /// Credential store failure
    #[error("Database error: {0}")]
    Database(#[from] sqlx::Error),

    /// Schema migration failure
    #[error("Migration error: {0}")]
    Migration(#[from] sqlx::migrate::MigrateError),

    /// Password hashing or verification failure
    #[error("Password hashing error: {0}")]
    PasswordHash(#[from] bcrypt::BcryptError),

    /// Session store failure
    #[error("Session error: {0}")]
    Session(#[from] tower_sessions::session::Error),

    /// A blocking task panicked or was cancelled
    #[error("Background task error: {0}")]
    Task(#[from] tokio::task::JoinError),

    /// Invalid server configuration
    #[error("Configuration error: {message}")]
    Config {
        /// Human-readable error message
        message: String,
    },
}

impl BackendError {
    /// Create a new handler error with a status code
    pub fn handler(status: StatusCode, message: impl Into<String>) -> Self {
        Self::HandlerError {
            status,
            message: message.into(),
        }
    }

    /// Create a new configuration error
    pub fn config(message: impl Into<String>) -> Self {
        Self::Config {
            message: message.into(),
        }
    }

    /// Get the HTTP status code for this error
    ///
    /// # Status Code Mapping
    ///
    /// - `Auth` - Uses the auth error's status code
    /// - `HandlerError` - Uses the status code from the error
    /// - `Database` - 503 Service Unavailable when the pool cannot hand out
    ///   a connection, 500 otherwise
    /// - Everything else - 500 Internal Server Error
    pub fn status_code(&self) -> StatusCode {
        match self {
            Self::Auth(err) => err.status_code(),
            Self::HandlerError { status, .. } => *status,
            Self::Database(sqlx::Error::PoolTimedOut | sqlx::Error::PoolClosed) => {
                StatusCode::SERVICE_UNAVAILABLE
            }
            Self::Database(_)
            | Self::Migration(_)
            | Self::PasswordHash(_)
            | Self::Session(_)
            | Self::Task(_)
            | Self::Config { .. } => StatusCode::INTERNAL_SERVER_ERROR,
        }
    }

    /// Get the message safe to show to a client
    ///
    /// Internal failures collapse to a generic message; the details only go
    /// to the log.
    pub fn message(&self) -> String {
        match self {
            Self::Auth(err) => err.to_string(),
            Self::HandlerError { message, .. } => message.clone(),
            Self::Database(sqlx::Error::PoolTimedOut | sqlx::Error::PoolClosed) => {
                "Service unavailable".to_string()
            }
            _ => "Internal server error".to_string(),
        }
    }
}
