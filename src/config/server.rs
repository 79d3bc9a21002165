use crate::core::{AppError, Result};
use std::env;

/// Server configuration for HTTP server
#[derive(Debug, Clone)]
pub struct ServerConfig {
    pub host: String,
    pub port: u16,
    pub workers: usize,
}

impl ServerConfig {
    pub fn new(host: String, port: u16) -> Self {
        Self {
            host,
            port,
            workers: num_cpus::get() * 2, // 2x CPU cores for I/O-bound workload
        }
    }

    pub fn from_env() -> Result<Self> {
        let host = env::var("HOST").unwrap_or_else(|_| "0.0.0.0".to_string());
        let port = env::var("PORT")
            .unwrap_or_else(|_| "8080".to_string())
            .parse()
            .map_err(|_| AppError::Configuration("Invalid PORT".to_string()))?;

        let mut config = Self::new(host, port);
        if let Ok(workers) = env::var("SERVER_WORKERS") {
            config.workers = workers
                .parse()
                .map_err(|_| AppError::Configuration("Invalid SERVER_WORKERS".to_string()))?;
        }

        Ok(config)
    }

    pub fn bind_address(&self) -> String {
        format!("{}:{}", self.host, self.port)
    }
}
