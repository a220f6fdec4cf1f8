//! Database primitives shared by the server binary and the store layer.

use std::time::Duration;

use sea_orm::{ConnectOptions, ConnectionTrait, Database, DatabaseConnection, DbErr};
use thiserror::Error;
use tracing::info;

/// Shared connection pool alias.
pub type DbPool = DatabaseConnection;

#[derive(Debug, Error)]
pub enum DbError {
    #[error("database url missing (set {0})")]
    MissingUrl(String),
    #[error("failed to connect to database: {0}")]
    Connect(#[from] DbErr),
}

pub type DbResult<T> = Result<T, DbError>;

const DEFAULT_URL_KEY: &str = "DATABASE_URL";
const DEFAULT_MAX_CONNECTIONS: u32 = 10;

/// Environment-driven connection settings.
#[derive(Clone, Debug)]
pub struct DatabaseSettings {
    env_key: String,
    max_connections: u32,
}

impl Default for DatabaseSettings {
    fn default() -> Self {
        Self::new(DEFAULT_URL_KEY)
    }
}

impl DatabaseSettings {
    pub fn new(env_key: impl Into<String>) -> Self {
        Self {
            env_key: env_key.into(),
            max_connections: DEFAULT_MAX_CONNECTIONS,
        }
    }

    /// Reads `DB_MAX_CONNECTIONS` on top of the defaults; the URL itself is
    /// resolved lazily in [`DatabaseSettings::database_url`].
    pub fn from_env() -> Self {
        let max_connections = std::env::var("DB_MAX_CONNECTIONS")
            .ok()
            .and_then(|v| v.parse::<u32>().ok())
            .filter(|v| *v > 0)
            .unwrap_or(DEFAULT_MAX_CONNECTIONS);
        Self::default().with_max_connections(max_connections)
    }

    pub fn with_max_connections(mut self, max_connections: u32) -> Self {
        self.max_connections = max_connections;
        self
    }

    pub fn max_connections(&self) -> u32 {
        self.max_connections
    }

    pub fn database_url(&self) -> DbResult<String> {
        std::env::var(&self.env_key).map_err(|_| DbError::MissingUrl(self.env_key.clone()))
    }
}

/// Open a pool using the configured URL.
pub async fn connect(settings: &DatabaseSettings) -> DbResult<DbPool> {
    let url = settings.database_url()?;
    connect_url(&url, settings.max_connections).await
}

pub async fn connect_url(url: &str, max_connections: u32) -> DbResult<DbPool> {
    let mut options = ConnectOptions::new(url.to_string());
    options
        .max_connections(max_connections)
        .connect_timeout(Duration::from_secs(10))
        .sqlx_logging(false);
    let pool = Database::connect(options).await?;
    info!(backend = ?pool.get_database_backend(), "database pool ready");
    Ok(pool)
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn missing_url_names_the_variable() {
        let settings = DatabaseSettings::new("EMPLOYEES_TEST_UNSET_DATABASE_URL");
        let err = settings.database_url().unwrap_err();
        assert!(matches!(err, DbError::MissingUrl(ref key) if key == "EMPLOYEES_TEST_UNSET_DATABASE_URL"));
        assert_eq!(
            err.to_string(),
            "database url missing (set EMPLOYEES_TEST_UNSET_DATABASE_URL)"
        );
    }

    #[test]
    fn defaults_to_ten_connections() {
        assert_eq!(DatabaseSettings::default().max_connections(), 10);
        assert_eq!(
            DatabaseSettings::default()
                .with_max_connections(3)
                .max_connections(),
            3
        );
    }

    #[tokio::test]
    async fn connects_to_in_memory_sqlite() {
        let pool = connect_url("sqlite::memory:", 1).await.unwrap();
        assert_eq!(
            pool.get_database_backend(),
            sea_orm::DatabaseBackend::Sqlite
        );
    }
}
