use actix_web::{web, App, HttpServer};
use anyhow::Context;
use kasir_api::app::{self, AppServices};
use kasir_api::config::{Config, LogFormat};
use kasir_api::middleware::RequestId;
use tracing_subscriber::{layer::SubscriberExt, util::SubscriberInitExt, EnvFilter};

#[actix_web::main]
async fn main() -> anyhow::Result<()> {
    // Load configuration
    let config = Config::from_env().context("Failed to load configuration")?;
    config.validate().context("Configuration validation failed")?;

    init_tracing(&config);

    tracing::info!("Starting Kasir API");
    tracing::info!("Environment: {}", config.app.env);
    tracing::info!("Server binding to: {}", config.server.bind_address());

    // Create database connection pool
    let db_pool = config
        .database
        .create_pool()
        .await
        .context("Failed to create database pool")?;

    tracing::info!(
        "Database pool initialized ({} connections)",
        config.database.max_connections
    );

    sqlx::migrate!("./migrations")
        .run(&db_pool)
        .await
        .context("Failed to run database migrations")?;

    tracing::info!("Database migrations applied");

    let services = AppServices::from_pool(db_pool.clone(), &config);

    // Start HTTP server
    let bind_address = config.server.bind_address();
    let server = HttpServer::new(move || {
        let services = services.clone();
        App::new()
            .wrap(RequestId)
            .app_data(web::Data::new(db_pool.clone()))
            .configure(|cfg| services.register(cfg))
            .configure(app::configure)
    })
    .workers(config.server.workers)
    .bind(&bind_address)
    .with_context(|| format!("Failed to bind {}", bind_address))?
    .run();

    tracing::info!("Server started at http://{}", bind_address);

    server.await.context("HTTP server error")
}

fn init_tracing(config: &Config) {
    let filter = EnvFilter::try_from_default_env().unwrap_or_else(|_| {
        format!("kasir_api={},actix_web=info", config.app.log_level).into()
    });

    let registry = tracing_subscriber::registry().with(filter);
    match config.app.log_format {
        LogFormat::Json => registry.with(tracing_subscriber::fmt::layer().json()).init(),
        LogFormat::Text => registry.with(tracing_subscriber::fmt::layer()).init(),
    }
}
