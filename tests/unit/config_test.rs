use std::time::Duration;

use kasir_api::config::{
    AppConfig, Config, DatabaseConfig, LogFormat, ReportConfig, ServerConfig,
};

fn valid_config() -> Config {
    Config {
        app: AppConfig {
            env: "test".to_string(),
            log_level: "debug".to_string(),
            log_format: LogFormat::Text,
        },
        database: DatabaseConfig {
            url: "postgres://localhost/kasir_test".to_string(),
            pool_size: 2,
            max_connections: 10,
        },
        server: ServerConfig::new("127.0.0.1".to_string(), 8080),
        report: ReportConfig::default(),
    }
}

#[test]
fn test_valid_config_passes() {
    assert!(valid_config().validate().is_ok());
}

#[test]
fn test_default_report_timeout() {
    assert_eq!(ReportConfig::default().timeout, Duration::from_secs(30));
}

#[test]
fn test_zero_report_timeout_rejected() {
    let mut config = valid_config();
    config.report.timeout = Duration::ZERO;
    assert!(config.validate().is_err());
}

#[test]
fn test_pool_larger_than_max_rejected() {
    let mut config = valid_config();
    config.database.pool_size = 20;
    config.database.max_connections = 5;

    let err = config.validate().unwrap_err();
    assert!(err.to_string().contains("exceeds max connections"));
}

#[test]
fn test_zero_workers_rejected() {
    let mut config = valid_config();
    config.server.workers = 0;
    assert!(config.validate().is_err());
}

#[test]
fn test_log_format_parsing() {
    assert_eq!("json".parse::<LogFormat>().unwrap(), LogFormat::Json);
    assert_eq!("JSON".parse::<LogFormat>().unwrap(), LogFormat::Json);
    assert_eq!("text".parse::<LogFormat>().unwrap(), LogFormat::Text);
    assert!("xml".parse::<LogFormat>().is_err());
}

// Only this test touches the process environment.
#[test]
fn test_from_env_reads_legacy_names() {
    std::env::remove_var("DATABASE_URL");
    std::env::set_var("DB_CONN", "postgres://legacy/kasir");
    std::env::set_var("PORT", "9090");
    std::env::set_var("REPORT_TIMEOUT_SECS", "7");
    std::env::set_var("LOG_FORMAT", "json");

    let config = Config::from_env().expect("config should load");

    assert_eq!(config.database.url, "postgres://legacy/kasir");
    assert_eq!(config.server.port, 9090);
    assert_eq!(config.report.timeout, Duration::from_secs(7));
    assert_eq!(config.app.log_format, LogFormat::Json);
}
