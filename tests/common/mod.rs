//! Common test utilities and helpers
//!
//! Each test gets its own in-memory database and a `TestServer` that keeps
//! cookies between requests, so a test behaves like one browser.

#![allow(dead_code)]

use axum_test::TestServer;
use serde::Serialize;
use sqlx::SqlitePool;
use tinyblog::backend::auth::password::{PasswordHasher, MIN_COST};
use tinyblog::backend::routes::create_router;
use tinyblog::backend::server::{config::load_database, AppState, ServerConfig};

/// Form body accepted by the register and login routes
#[derive(Serialize)]
pub struct Credentials<'a> {
    pub username: &'a str,
    pub password: &'a str,
}

pub fn credentials<'a>(username: &'a str, password: &'a str) -> Credentials<'a> {
    Credentials { username, password }
}

/// A running app over a private database
pub struct TestApp {
    pub server: TestServer,
    pub pool: SqlitePool,
}

impl TestApp {
    pub async fn new() -> Self {
        let config = ServerConfig {
            database_url: "sqlite::memory:".to_string(),
            bcrypt_cost: MIN_COST,
            ..ServerConfig::default()
        };

        let pool = load_database(&config.database_url)
            .await
            .expect("Failed to open test database");
        let state = AppState::new(pool.clone(), PasswordHasher::new(config.bcrypt_cost));
        let router = create_router(state, &config);

        let server = TestServer::builder()
            .save_cookies()
            .build(router)
            .expect("Failed to build test server");

        Self { server, pool }
    }

    pub async fn user_count(&self) -> i64 {
        sqlx::query_scalar("SELECT COUNT(*) FROM user")
            .fetch_one(&self.pool)
            .await
            .expect("Failed to count users")
    }

    pub async fn session_count(&self) -> i64 {
        sqlx::query_scalar("SELECT COUNT(*) FROM tower_sessions")
            .fetch_one(&self.pool)
            .await
            .expect("Failed to count sessions")
    }

    /// Register through the HTTP form and expect success
    pub async fn register(&self, username: &str, password: &str) {
        self.server
            .post("/auth/register")
            .form(&credentials(username, password))
            .await
            .assert_status(axum::http::StatusCode::FOUND);
    }

    /// Log in through the HTTP form and expect success
    pub async fn login(&self, username: &str, password: &str) {
        self.server
            .post("/auth/login")
            .form(&credentials(username, password))
            .await
            .assert_status(axum::http::StatusCode::FOUND);
    }
}
