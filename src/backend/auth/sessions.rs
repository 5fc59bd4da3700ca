/**
 * Session Management
 *
 * Logins are tracked in a server-side session. The browser only holds an
 * opaque session id cookie; the session record stores the logged-in user's
 * id under `SESSION_USER_ID_KEY` and nothing else.
 *
 * # Lifetime
 *
 * The cookie has no `Max-Age`, so it lives for one browser session. Logging
 * in rotates the session id, logging out deletes the record.
 *
 * Records live in the `tower_sessions` table of the credential database.
 * Sessions abandoned without a logout are removed by a periodic sweep once
 * their server-side expiry has passed.
 */

use std::time::Duration;

use tokio::task::JoinHandle;
use tower_sessions::session_store::{self, ExpiredDeletion, SessionStore};
use tower_sessions::{cookie::SameSite, Expiry, Session, SessionManagerLayer};
use tower_sessions_sqlx_store::SqliteStore;

use crate::backend::error::BackendError;

/// Key for storing the user ID in the session
pub const SESSION_USER_ID_KEY: &str = "user_id";

/// Name of the session cookie
pub const SESSION_COOKIE_NAME: &str = "tinyblog_session";

/// Interval between sweeps of expired session records
pub const EXPIRED_SESSION_SWEEP_INTERVAL: Duration = Duration::from_secs(60);

/// Build the session layer over `store`
///
/// # Arguments
/// * `store` - Where session records are kept
/// * `secure` - Whether the cookie carries the `Secure` attribute (HTTPS only)
pub fn session_layer<S>(store: S, secure: bool) -> SessionManagerLayer<S>
where
    S: SessionStore + Clone,
{
    SessionManagerLayer::new(store)
        .with_name(SESSION_COOKIE_NAME)
        .with_secure(secure)
        .with_same_site(SameSite::Lax)
        .with_expiry(Expiry::OnSessionEnd)
}

/// Delete expired session records every `period` until the runtime shuts down
pub fn spawn_expired_session_cleanup(
    store: SqliteStore,
    period: Duration,
) -> JoinHandle<Result<(), session_store::Error>> {
    tokio::task::spawn(async move {
        let result = store.continuously_delete_expired(period).await;
        if let Err(ref e) = result {
            tracing::error!("Expired session cleanup stopped: {}", e);
        }
        result
    })
}

/// Read the logged-in user's id from the session
pub async fn session_user_id(session: &Session) -> Result<Option<i64>, BackendError> {
    Ok(session.get::<i64>(SESSION_USER_ID_KEY).await?)
}

/// Start a fresh session for `user_id`
///
/// Anything stored by an earlier session is dropped and the session id is
/// rotated before the user id is written.
pub async fn start_session(session: &Session, user_id: i64) -> Result<(), BackendError> {
    session.clear().await;
    session.cycle_id().await?;
    session.insert(SESSION_USER_ID_KEY, user_id).await?;
    Ok(())
}

/// Delete the session, its stored data and its cookie
pub async fn end_session(session: &Session) -> Result<(), BackendError> {
    session.flush().await?;
    Ok(())
}
