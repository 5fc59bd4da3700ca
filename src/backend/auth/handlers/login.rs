/**
 * Login Handlers
 *
 * `GET /auth/login` shows the form, `POST /auth/login` checks the
 * credentials.
 *
 * # Authentication Process
 *
 * 1. Look up the user by username
 * 2. Verify the password with bcrypt
 * 3. Start a fresh session holding the user id
 * 4. Redirect to the index
 *
 * A failed attempt re-renders the form with a 401 status and leaves the
 * session untouched.
 */

use axum::{
    extract::State,
    response::{Html, IntoResponse, Response},
    Form,
};
use tower_sessions::Session;

use crate::backend::auth::handlers::types::CredentialsForm;
use crate::backend::auth::service::AuthService;
use crate::backend::auth::sessions::start_session;
use crate::backend::error::BackendError;
use crate::backend::middleware::CurrentUser;
use crate::backend::routes::paths;
use crate::backend::views::{redirect, render_login_page};

/// Login form
pub async fn login_form(current: CurrentUser) -> Html<String> {
    Html(render_login_page(current.user(), None, ""))
}

/// Login submission
pub async fn login(
    State(auth): State<AuthService>,
    current: CurrentUser,
    session: Session,
    Form(form): Form<CredentialsForm>,
) -> Result<Response, BackendError> {
    match auth.authenticate(&form.username, &form.password).await {
        Ok(user) => {
            start_session(&session, user.id).await?;
            tracing::info!("User logged in: {} (id {})", user.username, user.id);
            Ok(redirect(paths::INDEX))
        }
        Err(BackendError::Auth(err)) => {
            tracing::warn!("Login rejected for '{}': {}", form.username, err);
            let page = render_login_page(current.user(), Some(&err.to_string()), &form.username);
            Ok((err.status_code(), Html(page)).into_response())
        }
        Err(e) => Err(e),
    }
}
