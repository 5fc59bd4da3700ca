/**
 * Register Handlers
 *
 * `GET /auth/register` shows the form, `POST /auth/register` creates the
 * account.
 *
 * # Registration Process
 *
 * 1. Validate that username and password are non-empty
 * 2. Hash the password and insert the user
 * 3. Redirect to the login page
 *
 * Validation failures and taken usernames re-render the form with the
 * message and a 400 or 409 status.
 */

use axum::{
    extract::State,
    response::{Html, IntoResponse, Response},
    Form,
};

use crate::backend::auth::handlers::types::CredentialsForm;
use crate::backend::auth::service::AuthService;
use crate::backend::error::BackendError;
use crate::backend::middleware::CurrentUser;
use crate::backend::routes::paths;
use crate::backend::views::{redirect, render_register_page};

/// Registration form
pub async fn register_form(current: CurrentUser) -> Html<String> {
    Html(render_register_page(current.user(), None, ""))
}

/// Registration submission
///
/// # Errors
///
/// Only store and hasher failures propagate (as 500); user mistakes are
/// rendered onto the form.
pub async fn register(
    State(auth): State<AuthService>,
    current: CurrentUser,
    Form(form): Form<CredentialsForm>,
) -> Result<Response, BackendError> {
    match auth.register(&form.username, &form.password).await {
        Ok(user) => {
            tracing::info!("User registered: {} (id {})", user.username, user.id);
            Ok(redirect(paths::LOGIN))
        }
        Err(BackendError::Auth(err)) => {
            tracing::warn!("Registration rejected for '{}': {}", form.username, err);
            let page = render_register_page(current.user(), Some(&err.to_string()), &form.username);
            Ok((err.status_code(), Html(page)).into_response())
        }
        Err(e) => Err(e),
    }
}
