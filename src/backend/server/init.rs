/**
 * Server Initialization
 *
 * # Initialization Process
 *
 * 1. Open the credential store and apply migrations
 * 2. Start the sweep of expired session records
 * 3. Build `AppState` (pool + password hasher)
 * 4. Create the router with the session layer and current-user resolver
 */

use axum::Router;
use tower_sessions_sqlx_store::SqliteStore;

use crate::backend::auth::password::PasswordHasher;
use crate::backend::auth::sessions::{spawn_expired_session_cleanup, EXPIRED_SESSION_SWEEP_INTERVAL};
use crate::backend::error::BackendError;
use crate::backend::routes::router::create_router;
use crate::backend::server::config::{load_database, ServerConfig};
use crate::backend::server::state::AppState;

/// Create and configure the Axum application
///
/// # Errors
///
/// Fails when the database cannot be opened or migrated.
pub async fn create_app(config: &ServerConfig) -> Result<Router<()>, BackendError> {
    tracing::info!("Initializing tinyblog backend server");

    let db_pool = load_database(&config.database_url).await?;

    // Detached: runs for as long as the runtime that serves the app
    spawn_expired_session_cleanup(
        SqliteStore::new(db_pool.clone()),
        EXPIRED_SESSION_SWEEP_INTERVAL,
    );

    let app_state = AppState::new(db_pool, PasswordHasher::new(config.bcrypt_cost));

    let app = create_router(app_state, config);
    tracing::info!("Router configured");

    Ok(app)
}
