use actix_web::{web, HttpResponse, Responder};
use serde::{Deserialize, Serialize};
use sqlx::PgPool;

use crate::middleware::method_not_allowed;

/// Liveness response
#[derive(Debug, Serialize, Deserialize)]
pub struct HealthResponse {
    pub status: String,
    pub message: String,
}

/// Readiness probe response structure
#[derive(Debug, Serialize, Deserialize)]
pub struct ReadinessResponse {
    pub ready: bool,
    pub database: bool,
    pub timestamp: String,
}

/// GET /health - Liveness probe
/// Does not touch the database
pub async fn health_check() -> impl Responder {
    HttpResponse::Ok().json(HealthResponse {
        status: "OK".to_string(),
        message: "server is running well".to_string(),
    })
}

/// GET /ready - Readiness probe
/// Returns 503 until the database answers
pub async fn readiness_check(pool: web::Data<PgPool>) -> impl Responder {
    let database = match sqlx::query("SELECT 1").execute(pool.get_ref()).await {
        Ok(_) => true,
        Err(e) => {
            tracing::error!(error = %e, "Database readiness check failed");
            false
        }
    };

    let response = ReadinessResponse {
        ready: database,
        database,
        timestamp: chrono::Utc::now().to_rfc3339(),
    };

    if response.ready {
        HttpResponse::Ok().json(response)
    } else {
        HttpResponse::ServiceUnavailable().json(response)
    }
}

/// Configure health check routes
pub fn configure(cfg: &mut web::ServiceConfig) {
    cfg.service(
        web::resource("/health")
            .route(web::get().to(health_check))
            .default_service(web::to(method_not_allowed)),
    )
    .service(
        web::resource("/ready")
            .route(web::get().to(readiness_check))
            .default_service(web::to(method_not_allowed)),
    );
}
