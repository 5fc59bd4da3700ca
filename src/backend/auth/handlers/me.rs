/**
 * Get Current User Handler
 *
 * `GET /auth/me` returns the logged-in user as JSON. The route sits behind
 * `login_required`, so anonymous visitors are redirected to the login page
 * before this handler runs.
 *
 * # Example Response
 *
 * ```json
 * {
 *   "id": 1,
 *   "username": "alice"
 * }
 * ```
 */

use axum::{http::StatusCode, response::Json};

use crate::backend::auth::handlers::types::UserResponse;
use crate::backend::error::BackendError;
use crate::backend::middleware::CurrentUser;

/// Get current user handler
///
/// # Errors
///
/// * `401 Unauthorized` - If mounted without the login guard and nobody is
///   logged in
pub async fn get_me(current: CurrentUser) -> Result<Json<UserResponse>, BackendError> {
    let user = current
        .user()
        .ok_or_else(|| BackendError::handler(StatusCode::UNAUTHORIZED, "Not logged in"))?;

    Ok(Json(UserResponse::from(user)))
}
