use std::sync::Arc;

use actix_web::{web, HttpResponse};

use crate::core::AppError;
use crate::middleware::method_not_allowed;
use crate::modules::categories::models::CategoryPayload;
use crate::modules::categories::services::CategoryService;

/// GET /api/category
pub async fn list_categories(
    service: web::Data<Arc<CategoryService>>,
) -> Result<HttpResponse, AppError> {
    let categories = service.list().await?;
    Ok(HttpResponse::Ok().json(categories))
}

/// POST /api/category
pub async fn create_category(
    service: web::Data<Arc<CategoryService>>,
    payload: web::Json<CategoryPayload>,
) -> Result<HttpResponse, AppError> {
    let category = service.create(payload.into_inner()).await?;
    Ok(HttpResponse::Created().json(category))
}

/// GET /api/category/{id}
pub async fn get_category(
    service: web::Data<Arc<CategoryService>>,
    path: web::Path<i64>,
) -> Result<HttpResponse, AppError> {
    let category = service.get(path.into_inner()).await?;
    Ok(HttpResponse::Ok().json(category))
}

/// PUT /api/category/{id}
pub async fn update_category(
    service: web::Data<Arc<CategoryService>>,
    path: web::Path<i64>,
    payload: web::Json<CategoryPayload>,
) -> Result<HttpResponse, AppError> {
    let category = service
        .update(path.into_inner(), payload.into_inner())
        .await?;
    Ok(HttpResponse::Ok().json(category))
}

/// DELETE /api/category/{id}
pub async fn delete_category(
    service: web::Data<Arc<CategoryService>>,
    path: web::Path<i64>,
) -> Result<HttpResponse, AppError> {
    service.delete(path.into_inner()).await?;
    Ok(HttpResponse::Ok().json(serde_json::json!({
        "message": "Category deleted successfully"
    })))
}

/// Configure category routes
pub fn configure(cfg: &mut web::ServiceConfig) {
    cfg.service(
        web::resource("/api/category")
            .route(web::get().to(list_categories))
            .route(web::post().to(create_category))
            .default_service(web::to(method_not_allowed)),
    )
    .service(
        web::resource("/api/category/{id}")
            .route(web::get().to(get_category))
            .route(web::put().to(update_category))
            .route(web::delete().to(delete_category))
            .default_service(web::to(method_not_allowed)),
    );
}
