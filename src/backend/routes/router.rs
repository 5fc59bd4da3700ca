/**
 * Router Configuration
 *
 * This module combines all route configurations into a single Axum router
 * and installs the request layers.
 *
 * # Layer Order
 *
 * From the outside in:
 * 1. `TraceLayer` - request/response logging
 * 2. Session layer - loads the session named by the cookie from SQLite
 * 3. `load_logged_in_user` - resolves `CurrentUser` from the session
 *
 * The session layer has to wrap the resolver, which reads the session.
 */

use axum::{
    http::StatusCode,
    middleware,
    response::{Html, IntoResponse},
    routing::get,
    Router,
};
use tower::ServiceBuilder;
use tower_http::{services::ServeDir, trace::TraceLayer};
use tower_sessions_sqlx_store::SqliteStore;

use crate::backend::auth::sessions::session_layer;
use crate::backend::middleware::{load_logged_in_user, CurrentUser};
use crate::backend::routes::auth_routes::configure_auth_routes;
use crate::backend::routes::paths;
use crate::backend::server::config::ServerConfig;
use crate::backend::server::state::AppState;
use crate::backend::views::render_index_page;

/// Create the Axum router with all routes configured
///
/// # Routes
///
/// - `GET /` - Index page
/// - `/auth/*` - Registration, login, logout and current user
/// - `/static/*` - Files from `config.static_dir`
/// - Anything else - 404
pub fn create_router(app_state: AppState, config: &ServerConfig) -> Router<()> {
    let router = Router::new().route(paths::INDEX, get(index));

    let router = configure_auth_routes(router);

    let router = router.nest_service(paths::STATIC, ServeDir::new(&config.static_dir));

    let router = router.fallback(not_found);

    let session_store = SqliteStore::new(app_state.db_pool.clone());

    router
        .layer(
            ServiceBuilder::new()
                .layer(TraceLayer::new_for_http())
                .layer(session_layer(session_store, config.session_cookie_secure))
                .layer(middleware::from_fn_with_state(
                    app_state.clone(),
                    load_logged_in_user,
                )),
        )
        .with_state(app_state)
}

async fn index(current: CurrentUser) -> Html<String> {
    Html(render_index_page(current.user()))
}

async fn not_found() -> impl IntoResponse {
    (StatusCode::NOT_FOUND, "404 Not Found")
}
