/**
 * Application State Management
 *
 * `AppState` is the state shared by every handler: the SQLite pool and the
 * password hasher. Both are cheap to clone and immutable, so no locking is
 * involved.
 *
 * # State Extraction
 *
 * The `FromRef` implementations let handlers extract just the part they
 * need, e.g. `State<AuthService>` or `State<SqlitePool>`, instead of the
 * whole `AppState`.
 */

use axum::extract::FromRef;
use sqlx::SqlitePool;

use crate::backend::auth::password::PasswordHasher;
use crate::backend::auth::service::AuthService;

/// Application state
///
/// # Fields
///
/// * `db_pool` - Credential store connection pool
/// * `hasher` - Password hasher configured with the bcrypt cost
#[derive(Clone, Debug)]
pub struct AppState {
    pub db_pool: SqlitePool,
    pub hasher: PasswordHasher,
}

impl AppState {
    pub fn new(db_pool: SqlitePool, hasher: PasswordHasher) -> Self {
        Self { db_pool, hasher }
    }
}

impl FromRef<AppState> for SqlitePool {
    fn from_ref(state: &AppState) -> Self {
        state.db_pool.clone()
    }
}

impl FromRef<AppState> for PasswordHasher {
    fn from_ref(state: &AppState) -> Self {
        state.hasher
    }
}

impl FromRef<AppState> for AuthService {
    fn from_ref(state: &AppState) -> Self {
        AuthService::new(state.db_pool.clone(), state.hasher)
    }
}
