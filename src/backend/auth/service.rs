/**
 * Auth Service
 *
 * Registration, credential checks and current-user resolution, independent
 * of HTTP. Handlers translate the results into redirects and forms.
 *
 * # Registration Process
 *
 * 1. Reject an empty username, then an empty or over-long password
 * 2. Hash the password with bcrypt
 * 3. Insert the row; the UNIQUE constraint on `username` decides conflicts
 *
 * # Login Process
 *
 * 1. Look up the user by username
 * 2. Verify the password against the stored hash
 *
 * Unknown usernames and wrong passwords are reported separately.
 */

use sqlx::SqlitePool;
use tower_sessions::Session;

use crate::backend::auth::password::{PasswordHasher, MAX_PASSWORD_BYTES};
use crate::backend::auth::sessions::session_user_id;
use crate::backend::auth::users::{create_user, get_user_by_id, get_user_by_username, User};
use crate::backend::error::{AuthError, BackendError};

/// Check that both credentials were supplied
///
/// The username is checked first, so a form with both fields empty reports
/// the missing username. Passwords bcrypt cannot hash whole are refused.
pub fn validate_credentials(username: &str, password: &str) -> Result<(), AuthError> {
    if username.is_empty() {
        return Err(AuthError::required("username", "Username"));
    }
    if password.is_empty() {
        return Err(AuthError::required("password", "Password"));
    }
    if password.len() > MAX_PASSWORD_BYTES {
        return Err(AuthError::Validation {
            field: "password",
            message: format!("Password must be at most {} bytes.", MAX_PASSWORD_BYTES),
        });
    }
    Ok(())
}

/// Credential store plus password hasher
#[derive(Debug, Clone)]
pub struct AuthService {
    pool: SqlitePool,
    hasher: PasswordHasher,
}

impl AuthService {
    pub fn new(pool: SqlitePool, hasher: PasswordHasher) -> Self {
        Self { pool, hasher }
    }

    pub fn pool(&self) -> &SqlitePool {
        &self.pool
    }

    /// Create an account
    ///
    /// # Errors
    ///
    /// * `AuthError::Validation` - empty username or password
    /// * `AuthError::Conflict` - username already registered
    /// * Any other `BackendError` - store or hasher failure
    pub async fn register(&self, username: &str, password: &str) -> Result<User, BackendError> {
        validate_credentials(username, password)?;

        let password_hash = self.hasher.hash(password).await?;

        match create_user(&self.pool, username, &password_hash).await {
            Ok(user) => Ok(user),
            Err(sqlx::Error::Database(db_err)) if db_err.is_unique_violation() => {
                Err(AuthError::conflict(username).into())
            }
            Err(e) => Err(e.into()),
        }
    }

    /// Check a username/password pair
    ///
    /// # Errors
    ///
    /// * `AuthError::UnknownUsername` - no such user
    /// * `AuthError::WrongPassword` - the password does not match
    /// * Any other `BackendError` - store or hasher failure
    pub async fn authenticate(&self, username: &str, password: &str) -> Result<User, BackendError> {
        let user = get_user_by_username(&self.pool, username)
            .await?
            .ok_or(AuthError::UnknownUsername)?;

        if !self.hasher.verify(password, &user.password_hash).await? {
            return Err(AuthError::WrongPassword.into());
        }

        Ok(user)
    }

    /// Resolve the logged-in user for a session
    ///
    /// A session pointing at a user that no longer exists resolves to `None`.
    pub async fn current_user(&self, session: &Session) -> Result<Option<User>, BackendError> {
        let Some(user_id) = session_user_id(session).await? else {
            return Ok(None);
        };

        let user = get_user_by_id(&self.pool, user_id).await?;
        if user.is_none() {
            tracing::debug!("Session refers to missing user {}", user_id);
        }
        Ok(user)
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::backend::auth::password::MIN_COST;
    use crate::backend::auth::sessions::start_session;
    use crate::backend::server::config::load_database;
    use assert_matches::assert_matches;
    use std::sync::Arc;
    use tower_sessions::MemoryStore;

    async fn service() -> AuthService {
        let pool = load_database("sqlite::memory:").await.unwrap();
        AuthService::new(pool, PasswordHasher::new(MIN_COST))
    }

    async fn count_users(service: &AuthService, username: &str) -> i64 {
        sqlx::query_scalar("SELECT COUNT(*) FROM user WHERE username = ?1")
            .bind(username)
            .fetch_one(service.pool())
            .await
            .unwrap()
    }

    fn new_session() -> Session {
        Session::new(None, Arc::new(MemoryStore::default()), None)
    }

    #[test]
    fn test_validate_credentials() {
        assert_eq!(validate_credentials("alice", "secret"), Ok(()));
        assert_matches!(
            validate_credentials("", "secret"),
            Err(AuthError::Validation { field: "username", .. })
        );
        assert_matches!(
            validate_credentials("alice", ""),
            Err(AuthError::Validation { field: "password", .. })
        );
        assert_matches!(
            validate_credentials("", ""),
            Err(AuthError::Validation { field: "username", .. })
        );
        assert_eq!(validate_credentials("alice", &"p".repeat(MAX_PASSWORD_BYTES)), Ok(()));
        assert_matches!(
            validate_credentials("alice", &"p".repeat(MAX_PASSWORD_BYTES + 1)),
            Err(AuthError::Validation { field: "password", .. })
        );
    }

    #[tokio::test]
    async fn test_register_rejects_empty_fields_without_insert() {
        let service = service().await;

        let err = service.register("", "secret").await.unwrap_err();
        assert_eq!(err.to_string(), "Username is required.");

        let err = service.register("alice", "").await.unwrap_err();
        assert_eq!(err.to_string(), "Password is required.");

        let total: i64 = sqlx::query_scalar("SELECT COUNT(*) FROM user")
            .fetch_one(service.pool())
            .await
            .unwrap();
        assert_eq!(total, 0);
    }

    #[tokio::test]
    async fn test_register_stores_hash_not_password() {
        let service = service().await;

        let user = service.register("alice", "secret").await.unwrap();
        assert_eq!(user.username, "alice");
        assert_ne!(user.password_hash, "secret");
    }

    #[tokio::test]
    async fn test_register_twice_conflicts_and_keeps_first() {
        let service = service().await;

        service.register("bob", "x").await.unwrap();
        let err = service.register("bob", "y").await.unwrap_err();

        assert_matches!(err, BackendError::Auth(AuthError::Conflict { ref username }) if username == "bob");
        assert_eq!(err.to_string(), "User bob is already registered.");
        assert_eq!(count_users(&service, "bob").await, 1);

        assert!(service.authenticate("bob", "x").await.is_ok());
        assert_matches!(
            service.authenticate("bob", "y").await,
            Err(BackendError::Auth(AuthError::WrongPassword))
        );
    }

    #[tokio::test]
    async fn test_authenticate_success() {
        let service = service().await;
        let registered = service.register("alice", "secret").await.unwrap();

        let user = service.authenticate("alice", "secret").await.unwrap();
        assert_eq!(user, registered);
    }

    #[tokio::test]
    async fn test_authenticate_unknown_username() {
        let service = service().await;
        service.register("alice", "secret").await.unwrap();

        let err = service.authenticate("mallory", "secret").await.unwrap_err();
        assert_eq!(err.to_string(), "Incorrect username.");
    }

    #[tokio::test]
    async fn test_authenticate_wrong_password() {
        let service = service().await;
        service.register("alice", "secret").await.unwrap();

        let err = service.authenticate("alice", "guess").await.unwrap_err();
        assert_eq!(err.to_string(), "Incorrect password.");
    }

    #[tokio::test]
    async fn test_register_rejects_password_longer_than_bcrypt_limit() {
        let service = service().await;
        let long = format!("{}x", "a".repeat(MAX_PASSWORD_BYTES));

        let err = service.register("carol", &long).await.unwrap_err();
        assert_matches!(err, BackendError::Auth(AuthError::Validation { field: "password", .. }));
        assert_eq!(count_users(&service, "carol").await, 0);
    }

    #[tokio::test]
    async fn test_authenticate_compares_whole_password() {
        let service = service().await;
        let prefix = "a".repeat(MAX_PASSWORD_BYTES);
        service.register("carol", &prefix).await.unwrap();

        assert!(service.authenticate("carol", &prefix).await.is_ok());
        assert_matches!(
            service.authenticate("carol", &format!("{prefix}y")).await,
            Err(BackendError::Auth(AuthError::WrongPassword))
        );
        assert_matches!(
            service.authenticate("carol", &prefix[..MAX_PASSWORD_BYTES - 1]).await,
            Err(BackendError::Auth(AuthError::WrongPassword))
        );
    }

    #[tokio::test]
    async fn test_current_user_resolution() {
        let service = service().await;
        let alice = service.register("alice", "secret").await.unwrap();
        let session = new_session();

        assert_eq!(service.current_user(&session).await.unwrap(), None);

        start_session(&session, alice.id).await.unwrap();
        assert_eq!(service.current_user(&session).await.unwrap(), Some(alice));
    }

    #[tokio::test]
    async fn test_current_user_for_deleted_row_is_none() {
        let service = service().await;
        let alice = service.register("alice", "secret").await.unwrap();
        let session = new_session();
        start_session(&session, alice.id).await.unwrap();

        sqlx::query("DELETE FROM user WHERE id = ?1")
            .bind(alice.id)
            .execute(service.pool())
            .await
            .unwrap();

        assert_eq!(service.current_user(&session).await.unwrap(), None);
    }
}
