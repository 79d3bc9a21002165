use crate::core::{AppError, Result};
use sqlx::postgres::{PgPool, PgPoolOptions};
use std::env;
use std::time::Duration;

#[derive(Debug, Clone)]
pub struct DatabaseConfig {
    pub url: String,
    pub pool_size: u32,
    pub max_connections: u32,
}

impl DatabaseConfig {
    pub fn from_env() -> Result<Self> {
        // DB_CONN is the legacy name still used by older deployments
        let url = env::var("DATABASE_URL")
            .or_else(|_| env::var("DB_CONN"))
            .map_err(|_| AppError::Configuration("DATABASE_URL not set".to_string()))?;

        Ok(DatabaseConfig {
            url,
            pool_size: env::var("DATABASE_POOL_SIZE")
                .unwrap_or_else(|_| "2".to_string())
                .parse()
                .map_err(|_| {
                    AppError::Configuration("Invalid DATABASE_POOL_SIZE".to_string())
                })?,
            max_connections: env::var("DATABASE_MAX_CONNECTIONS")
                .unwrap_or_else(|_| "10".to_string())
                .parse()
                .map_err(|_| {
                    AppError::Configuration("Invalid DATABASE_MAX_CONNECTIONS".to_string())
                })?,
        })
    }

    /// Create a Postgres connection pool
    pub async fn create_pool(&self) -> Result<PgPool> {
        let pool = PgPoolOptions::new()
            .max_connections(self.max_connections)
            .min_connections(self.pool_size)
            .acquire_timeout(Duration::from_secs(30))
            .idle_timeout(Duration::from_secs(600)) // 10 minutes
            .max_lifetime(Duration::from_secs(1800)) // 30 minutes
            .test_before_acquire(true)
            .connect(&self.url)
            .await?;

        Ok(pool)
    }
}
