#![cfg(test)]
use std::path::Path;

use sea_orm::DatabaseConnection;
use models::db::{connect_and_migrate, DatabaseConfig};

use crate::auth::AuthConfig;

/// Fresh in-memory database for the current test, schema applied.
pub async fn get_db() -> Result<DatabaseConnection, anyhow::Error> {
    connect_and_migrate(&DatabaseConfig::in_memory()).await
}

/// File-backed SQLite under `dir` with a multi-connection pool, so
/// concurrent writers really contend for the database lock.
pub async fn get_file_db(dir: &Path) -> Result<DatabaseConnection, anyhow::Error> {
    let cfg = DatabaseConfig {
        url: format!("sqlite://{}?mode=rwc", dir.join("hr.db").display()),
        max_connections: 10,
        min_connections: 1,
        ..DatabaseConfig::in_memory()
    };
    connect_and_migrate(&cfg).await
}

/// Minimum Argon2 cost so hashing does not dominate test time.
pub fn fast_auth_config() -> AuthConfig {
    AuthConfig { memory_kib: 8, iterations: 1, parallelism: 1 }
}
