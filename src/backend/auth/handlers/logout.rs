/**
 * Logout Handler
 *
 * `GET /auth/logout` deletes the session and redirects to the index. It
 * works the same with or without a logged-in user.
 */

use axum::response::Response;
use tower_sessions::Session;

use crate::backend::auth::sessions::end_session;
use crate::backend::error::BackendError;
use crate::backend::middleware::CurrentUser;
use crate::backend::routes::paths;
use crate::backend::views::redirect;

/// `GET /auth/logout` - delete the session and go back to the index
pub async fn logout(current: CurrentUser, session: Session) -> Result<Response, BackendError> {
    end_session(&session).await?;

    if let Some(user) = current.user() {
        tracing::info!("User logged out: {} (id {})", user.username, user.id);
    }

    Ok(redirect(paths::INDEX))
}
