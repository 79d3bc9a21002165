use crate::core::{AppError, Result};
use std::env;
use std::str::FromStr;
use std::time::Duration;

pub mod database;
pub mod server;

pub use database::DatabaseConfig;
pub use server::ServerConfig;

/// Main application configuration
#[derive(Debug, Clone)]
pub struct Config {
    pub app: AppConfig,
    pub database: DatabaseConfig,
    pub server: ServerConfig,
    pub report: ReportConfig,
}

#[derive(Debug, Clone)]
pub struct AppConfig {
    pub env: String,
    pub log_level: String,
    pub log_format: LogFormat,
}

/// Output format of the tracing subscriber
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum LogFormat {
    Text,
    Json,
}

impl FromStr for LogFormat {
    type Err = AppError;

    fn from_str(s: &str) -> Result<Self> {
        match s.to_lowercase().as_str() {
            "text" | "pretty" => Ok(LogFormat::Text),
            "json" => Ok(LogFormat::Json),
            other => Err(AppError::Configuration(format!("Invalid LOG_FORMAT: {}", other))),
        }
    }
}

#[derive(Debug, Clone)]
pub struct ReportConfig {
    /// Upper bound on a single report aggregation (both store reads)
    pub timeout: Duration,
}

impl Default for ReportConfig {
    fn default() -> Self {
        Self {
            timeout: Duration::from_secs(30),
        }
    }
}

impl Config {
    /// Load configuration from environment variables
    pub fn from_env() -> Result<Self> {
        // Load .env file if present
        dotenvy::dotenv().ok();

        let config = Config {
            app: AppConfig {
                env: env::var("APP_ENV").unwrap_or_else(|_| "development".to_string()),
                log_level: env::var("LOG_LEVEL").unwrap_or_else(|_| "info".to_string()),
                log_format: env::var("LOG_FORMAT")
                    .unwrap_or_else(|_| "text".to_string())
                    .parse()?,
            },
            database: DatabaseConfig::from_env()?,
            server: ServerConfig::from_env()?,
            report: ReportConfig {
                timeout: Duration::from_secs(
                    env::var("REPORT_TIMEOUT_SECS")
                        .unwrap_or_else(|_| "30".to_string())
                        .parse()
                        .map_err(|_| {
                            AppError::Configuration("Invalid REPORT_TIMEOUT_SECS".to_string())
                        })?,
                ),
            },
        };

        Ok(config)
    }

    /// Validate configuration
    pub fn validate(&self) -> Result<()> {
        if self.database.max_connections == 0 {
            return Err(AppError::Configuration(
                "Database max connections must be greater than 0".to_string(),
            ));
        }

        if self.database.pool_size > self.database.max_connections {
            return Err(AppError::Configuration(format!(
                "Database pool size ({}) exceeds max connections ({})",
                self.database.pool_size, self.database.max_connections
            )));
        }

        if self.server.workers == 0 {
            return Err(AppError::Configuration(
                "Server workers must be greater than 0".to_string(),
            ));
        }

        if self.report.timeout.is_zero() {
            return Err(AppError::Configuration(
                "Report timeout must be greater than 0".to_string(),
            ));
        }

        Ok(())
    }
}
