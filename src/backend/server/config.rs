/**
 * Server Configuration
 *
 * This module loads the server configuration from environment variables and
 * opens the credential store.
 *
 * # Configuration Sources
 *
 * | Variable                | Default                    |
 * |-------------------------|----------------------------|
 * | `DATABASE_URL`          | `sqlite://tinyblog.sqlite` |
 * | `SERVER_HOST`           | `0.0.0.0`                  |
 * | `SERVER_PORT`           | `3000`                     |
 * | `BCRYPT_COST`           | `12`                       |
 * | `SESSION_COOKIE_SECURE` | `false`                    |
 * | `STATIC_DIR`            | `static`                   |
 *
 * # Error Handling
 *
 * Unparseable values are logged and replaced by their default. A database
 * that cannot be opened or migrated is an error: the server cannot do
 * anything useful without it.
 */

use std::net::{IpAddr, Ipv4Addr, SocketAddr};
use std::path::PathBuf;
use std::str::FromStr;
use std::time::Duration;

use sqlx::migrate::Migrator;
use sqlx::sqlite::{SqliteConnectOptions, SqlitePoolOptions};
use sqlx::SqlitePool;
use tower_sessions_sqlx_store::SqliteStore;

use crate::backend::auth::password::{MAX_COST, MIN_COST};
use crate::backend::error::BackendError;

/// Default SQLite database, created next to the working directory
pub const DEFAULT_DATABASE_URL: &str = "sqlite://tinyblog.sqlite";

/// Default listening port
pub const DEFAULT_PORT: u16 = 3000;

/// Embedded schema migrations (`migrations/`)
pub static MIGRATOR: Migrator = sqlx::migrate!();

/// Server configuration
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct ServerConfig {
    pub database_url: String,
    pub host: IpAddr,
    pub port: u16,
    pub bcrypt_cost: u32,
    pub session_cookie_secure: bool,
    pub static_dir: PathBuf,
}

impl Default for ServerConfig {
    fn default() -> Self {
        Self {
            database_url: DEFAULT_DATABASE_URL.to_string(),
            host: IpAddr::V4(Ipv4Addr::UNSPECIFIED),
            port: DEFAULT_PORT,
            bcrypt_cost: bcrypt::DEFAULT_COST,
            session_cookie_secure: false,
            static_dir: PathBuf::from("static"),
        }
    }
}

impl ServerConfig {
    /// Load configuration from the process environment
    pub fn from_env() -> Self {
        Self::from_lookup(|key| std::env::var(key).ok())
    }

    /// Load configuration from an arbitrary key lookup
    pub fn from_lookup(lookup: impl Fn(&str) -> Option<String>) -> Self {
        let defaults = Self::default();

        let bcrypt_cost = parse_or(&lookup, "BCRYPT_COST", defaults.bcrypt_cost);
        let bcrypt_cost = if (MIN_COST..=MAX_COST).contains(&bcrypt_cost) {
            bcrypt_cost
        } else {
            tracing::warn!(
                "BCRYPT_COST={} is outside {}..={}, using {}",
                bcrypt_cost,
                MIN_COST,
                MAX_COST,
                defaults.bcrypt_cost
            );
            defaults.bcrypt_cost
        };

        Self {
            database_url: lookup("DATABASE_URL").unwrap_or(defaults.database_url),
            host: parse_or(&lookup, "SERVER_HOST", defaults.host),
            port: parse_or(&lookup, "SERVER_PORT", defaults.port),
            bcrypt_cost,
            session_cookie_secure: parse_or(
                &lookup,
                "SESSION_COOKIE_SECURE",
                defaults.session_cookie_secure,
            ),
            static_dir: lookup("STATIC_DIR")
                .map(PathBuf::from)
                .unwrap_or(defaults.static_dir),
        }
    }

    /// Address the server listens on
    pub fn socket_addr(&self) -> SocketAddr {
        SocketAddr::new(self.host, self.port)
    }
}

fn parse_or<T>(lookup: &impl Fn(&str) -> Option<String>, key: &str, default: T) -> T
where
    T: FromStr + std::fmt::Display,
{
    match lookup(key) {
        None => default,
        Some(raw) => raw.trim().parse().unwrap_or_else(|_| {
            tracing::warn!("Invalid {}={:?}, using {}", key, raw, default);
            default
        }),
    }
}

/// Open the SQLite pool and apply migrations
///
/// This function:
/// 1. Parses the SQLite URL, creating the database file if missing
/// 2. Creates the connection pool
/// 3. Runs the embedded migrations
/// 4. Creates the session table
///
/// An in-memory URL (`sqlite::memory:`) gets a single long-lived connection,
/// since every new connection would otherwise see its own empty database.
pub async fn load_database(database_url: &str) -> Result<SqlitePool, BackendError> {
    tracing::info!("Connecting to database...");

    let options = SqliteConnectOptions::from_str(database_url)?.create_if_missing(true);

    let in_memory = database_url.contains(":memory:") || database_url.contains("mode=memory");
    let pool_options = if in_memory {
        SqlitePoolOptions::new()
            .max_connections(1)
            .idle_timeout(None::<Duration>)
            .max_lifetime(None::<Duration>)
    } else {
        SqlitePoolOptions::new().max_connections(5)
    };

    let pool = pool_options.connect_with(options).await.map_err(|e| {
        tracing::error!("Failed to create database connection pool: {:?}", e);
        e
    })?;
    tracing::info!("Database connection pool created successfully");

    MIGRATOR.run(&pool).await?;
    SqliteStore::new(pool.clone()).migrate().await?;
    tracing::info!("Database migrations completed successfully");

    Ok(pool)
}

#[cfg(test)]
mod tests {
    use super::*;
    use pretty_assertions::assert_eq;
    use std::collections::HashMap;

    fn lookup_from(pairs: &[(&str, &str)]) -> impl Fn(&str) -> Option<String> {
        let map: HashMap<String, String> = pairs
            .iter()
            .map(|(k, v)| (k.to_string(), v.to_string()))
            .collect();
        move |key| map.get(key).cloned()
    }

    #[test]
    fn test_defaults() {
        let config = ServerConfig::from_lookup(lookup_from(&[]));
        assert_eq!(config, ServerConfig::default());
        assert_eq!(config.socket_addr().to_string(), "0.0.0.0:3000");
    }

    #[test]
    fn test_overrides() {
        let config = ServerConfig::from_lookup(lookup_from(&[
            ("DATABASE_URL", "sqlite::memory:"),
            ("SERVER_HOST", "127.0.0.1"),
            ("SERVER_PORT", "8080"),
            ("BCRYPT_COST", "4"),
            ("SESSION_COOKIE_SECURE", "true"),
            ("STATIC_DIR", "/srv/static"),
        ]));

        assert_eq!(config.database_url, "sqlite::memory:");
        assert_eq!(config.socket_addr().to_string(), "127.0.0.1:8080");
        assert_eq!(config.bcrypt_cost, 4);
        assert!(config.session_cookie_secure);
        assert_eq!(config.static_dir, PathBuf::from("/srv/static"));
    }

    #[test]
    fn test_invalid_values_fall_back() {
        let config = ServerConfig::from_lookup(lookup_from(&[
            ("SERVER_PORT", "not-a-port"),
            ("BCRYPT_COST", "99"),
            ("SESSION_COOKIE_SECURE", "maybe"),
        ]));

        assert_eq!(config.port, DEFAULT_PORT);
        assert_eq!(config.bcrypt_cost, bcrypt::DEFAULT_COST);
        assert!(!config.session_cookie_secure);
    }

    #[tokio::test]
    async fn test_load_in_memory_database_runs_migrations() {
        let pool = load_database("sqlite::memory:").await.unwrap();

        let tables: i64 = sqlx::query_scalar(
            "SELECT COUNT(*) FROM sqlite_master WHERE type = 'table' AND name = 'user'",
        )
        .fetch_one(&pool)
        .await
        .unwrap();
        assert_eq!(tables, 1);

        let session_tables: i64 = sqlx::query_scalar(
            "SELECT COUNT(*) FROM sqlite_master WHERE type = 'table' AND name = 'tower_sessions'",
        )
        .fetch_one(&pool)
        .await
        .unwrap();
        assert_eq!(session_tables, 1);
    }

    #[tokio::test]
    async fn test_load_database_unreachable_path() {
        let result = load_database("sqlite:///definitely/missing/dir/tinyblog.sqlite").await;
        assert!(result.is_err());
    }
}
