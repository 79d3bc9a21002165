use std::sync::Arc;

use tracing::info;

use crate::core::traits::Repository;
use crate::core::{AppError, Result};
use crate::modules::categories::models::{Category, CategoryPayload};

pub struct CategoryService {
    repo: Arc<dyn Repository<Category, i64>>,
}

impl CategoryService {
    pub fn new(repo: Arc<dyn Repository<Category, i64>>) -> Self {
        Self { repo }
    }

    pub async fn list(&self) -> Result<Vec<Category>> {
        self.repo.list().await
    }

    pub async fn create(&self, payload: CategoryPayload) -> Result<Category> {
        payload.validate()?;
        let category = self.repo.create(payload.into_category(0)).await?;
        info!(category_id = category.id, name = %category.name, "Category created");
        Ok(category)
    }

    pub async fn get(&self, id: i64) -> Result<Category> {
        self.repo
            .find_by_id(id)
            .await?
            .ok_or_else(|| AppError::not_found("Category"))
    }

    pub async fn update(&self, id: i64, payload: CategoryPayload) -> Result<Category> {
        payload.validate()?;
        self.repo
            .update(id, payload.into_category(id))
            .await?
            .ok_or_else(|| AppError::not_found("Category"))
    }

    pub async fn delete(&self, id: i64) -> Result<()> {
        if !self.repo.delete(id).await? {
            return Err(AppError::not_found("Category"));
        }
        info!(category_id = id, "Category deleted");
        Ok(())
    }
}
