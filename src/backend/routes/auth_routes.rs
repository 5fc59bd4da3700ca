/**
 * Authentication Routes
 *
 * # Routes
 *
 * - `GET  /auth/register` - Registration form
 * - `POST /auth/register` - Create an account, then redirect to login
 * - `GET  /auth/login`    - Login form
 * - `POST /auth/login`    - Start a session, then redirect to the index
 * - `GET  /auth/logout`   - End the session, then redirect to the index
 * - `GET  /auth/me`       - Current user as JSON (login required)
 */

use axum::{middleware, routing::get, Router};

use crate::backend::auth::{get_me, login, login_form, logout, register, register_form};
use crate::backend::middleware::login_required;
use crate::backend::routes::paths;
use crate::backend::server::state::AppState;

/// Configure authentication routes
///
/// The form routes are public. Routes in the protected group sit behind
/// `login_required` and redirect anonymous visitors to the login page.
pub fn configure_auth_routes(router: Router<AppState>) -> Router<AppState> {
    let protected = Router::new()
        .route(paths::ME, get(get_me))
        .route_layer(middleware::from_fn(login_required));

    router
        .route(paths::REGISTER, get(register_form).post(register))
        .route(paths::LOGIN, get(login_form).post(login))
        .route(paths::LOGOUT, get(logout))
        .merge(protected)
}
