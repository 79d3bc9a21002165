use std::sync::Arc;

use actix_web::{web, HttpResponse};

use crate::core::AppError;
use crate::middleware::method_not_allowed;
use crate::modules::products::models::{ProductFilter, ProductPayload};
use crate::modules::products::services::ProductService;

/// GET /api/products?name=
pub async fn list_products(
    service: web::Data<Arc<ProductService>>,
    query: web::Query<ProductFilter>,
) -> Result<HttpResponse, AppError> {
    let products = service.list(&query).await?;
    Ok(HttpResponse::Ok().json(products))
}

/// POST /api/products
pub async fn create_product(
    service: web::Data<Arc<ProductService>>,
    payload: web::Json<ProductPayload>,
) -> Result<HttpResponse, AppError> {
    let product = service.create(payload.into_inner()).await?;
    Ok(HttpResponse::Created().json(product))
}

/// GET /api/products/{id}
pub async fn get_product(
    service: web::Data<Arc<ProductService>>,
    path: web::Path<i64>,
) -> Result<HttpResponse, AppError> {
    let product = service.get(path.into_inner()).await?;
    Ok(HttpResponse::Ok().json(product))
}

/// PUT /api/products/{id}
pub async fn update_product(
    service: web::Data<Arc<ProductService>>,
    path: web::Path<i64>,
    payload: web::Json<ProductPayload>,
) -> Result<HttpResponse, AppError> {
    let product = service
        .update(path.into_inner(), payload.into_inner())
        .await?;
    Ok(HttpResponse::Ok().json(product))
}

/// DELETE /api/products/{id}
pub async fn delete_product(
    service: web::Data<Arc<ProductService>>,
    path: web::Path<i64>,
) -> Result<HttpResponse, AppError> {
    service.delete(path.into_inner()).await?;
    Ok(HttpResponse::Ok().json(serde_json::json!({
        "message": "Product deleted successfully"
    })))
}

/// Configure product routes
pub fn configure(cfg: &mut web::ServiceConfig) {
    cfg.service(
        web::resource("/api/products")
            .route(web::get().to(list_products))
            .route(web::post().to(create_product))
            .default_service(web::to(method_not_allowed)),
    )
    .service(
        web::resource("/api/products/{id}")
            .route(web::get().to(get_product))
            .route(web::put().to(update_product))
            .route(web::delete().to(delete_product))
            .default_service(web::to(method_not_allowed)),
    );
}
