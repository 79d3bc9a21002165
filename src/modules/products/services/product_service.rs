use std::sync::Arc;

use tracing::info;

use crate::core::{AppError, Result};
use crate::modules::products::models::{Product, ProductFilter, ProductPayload};
use crate::modules::products::repositories::ProductRepository;

pub struct ProductService {
    repo: Arc<dyn ProductRepository>,
}

impl ProductService {
    pub fn new(repo: Arc<dyn ProductRepository>) -> Self {
        Self { repo }
    }

    /// All products, or only those matching the name filter
    pub async fn list(&self, filter: &ProductFilter) -> Result<Vec<Product>> {
        match filter.name() {
            Some(name) => self.repo.search_by_name(name).await,
            None => self.repo.list().await,
        }
    }

    pub async fn create(&self, payload: ProductPayload) -> Result<Product> {
        payload.validate()?;
        let product = self.repo.create(payload.into_product(0)).await?;
        info!(product_id = product.id, name = %product.name, "Product created");
        Ok(product)
    }

    pub async fn get(&self, id: i64) -> Result<Product> {
        self.repo
            .find_by_id(id)
            .await?
            .ok_or_else(|| AppError::not_found("Product"))
    }

    pub async fn update(&self, id: i64, payload: ProductPayload) -> Result<Product> {
        payload.validate()?;
        self.repo
            .update(id, payload.into_product(id))
            .await?
            .ok_or_else(|| AppError::not_found("Product"))
    }

    pub async fn delete(&self, id: i64) -> Result<()> {
        if !self.repo.delete(id).await? {
            return Err(AppError::not_found("Product"));
        }
        info!(product_id = id, "Product deleted");
        Ok(())
    }
}
