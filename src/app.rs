//! Application wiring shared by the binary and the HTTP tests.

use std::sync::Arc;

use actix_web::web;
use sqlx::PgPool;

use crate::config::Config;
use crate::core::{Clock, LocalClock};
use crate::middleware::{json_error_handler, path_error_handler, query_error_handler};
use crate::modules::categories::{CategoryService, PgCategoryRepository};
use crate::modules::products::{PgProductRepository, ProductService};
use crate::modules::reports::{PgReportRepository, ReportService};
use crate::modules::{categories, health, products, reports};

/// Services registered as app data, one instance per process
#[derive(Clone)]
pub struct AppServices {
    pub reports: Arc<ReportService>,
    pub products: Arc<ProductService>,
    pub categories: Arc<CategoryService>,
}

impl AppServices {
    /// Build Postgres-backed services using the local wall clock
    pub fn from_pool(pool: PgPool, config: &Config) -> Self {
        let clock: Arc<dyn Clock> = Arc::new(LocalClock);

        Self {
            reports: Arc::new(ReportService::new(
                Arc::new(PgReportRepository::new(pool.clone())),
                clock,
                config.report.timeout,
            )),
            products: Arc::new(ProductService::new(Arc::new(PgProductRepository::new(
                pool.clone(),
            )))),
            categories: Arc::new(CategoryService::new(Arc::new(PgCategoryRepository::new(
                pool,
            )))),
        }
    }

    /// Register every service as `web::Data<Arc<_>>`
    pub fn register(&self, cfg: &mut web::ServiceConfig) {
        cfg.app_data(web::Data::new(self.reports.clone()))
            .app_data(web::Data::new(self.products.clone()))
            .app_data(web::Data::new(self.categories.clone()));
    }
}

/// Extractor error handlers plus all module routes
pub fn configure(cfg: &mut web::ServiceConfig) {
    cfg.app_data(web::JsonConfig::default().error_handler(json_error_handler))
        .app_data(web::PathConfig::default().error_handler(path_error_handler))
        .app_data(web::QueryConfig::default().error_handler(query_error_handler))
        .configure(health::configure)
        .configure(categories::configure)
        .configure(products::configure)
        .configure(reports::configure);
}
