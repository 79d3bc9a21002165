use async_trait::async_trait;
use sqlx::PgPool;

use crate::core::traits::Repository;
use crate::core::Result;
use crate::modules::categories::models::Category;

/// Postgres-backed category storage
pub struct PgCategoryRepository {
    pool: PgPool,
}

impl PgCategoryRepository {
    pub fn new(pool: PgPool) -> Self {
        Self { pool }
    }
}

#[async_trait]
impl Repository<Category, i64> for PgCategoryRepository {
    async fn create(&self, entity: Category) -> Result<Category> {
        let created = sqlx::query_as::<_, Category>(
            r#"
            INSERT INTO category (name, description)
            VALUES ($1, $2)
            RETURNING id, name, description
            "#,
        )
        .bind(&entity.name)
        .bind(&entity.description)
        .fetch_one(&self.pool)
        .await?;

        Ok(created)
    }

    async fn find_by_id(&self, id: i64) -> Result<Option<Category>> {
        let category = sqlx::query_as::<_, Category>(
            "SELECT id, name, description FROM category WHERE id = $1",
        )
        .bind(id)
        .fetch_optional(&self.pool)
        .await?;

        Ok(category)
    }

    async fn update(&self, id: i64, entity: Category) -> Result<Option<Category>> {
        let updated = sqlx::query_as::<_, Category>(
            r#"
            UPDATE category SET name = $1, description = $2
            WHERE id = $3
            RETURNING id, name, description
            "#,
        )
        .bind(&entity.name)
        .bind(&entity.description)
        .bind(id)
        .fetch_optional(&self.pool)
        .await?;

        Ok(updated)
    }

    async fn delete(&self, id: i64) -> Result<bool> {
        let result = sqlx::query("DELETE FROM category WHERE id = $1")
            .bind(id)
            .execute(&self.pool)
            .await?;

        Ok(result.rows_affected() > 0)
    }

    async fn list(&self) -> Result<Vec<Category>> {
        let categories = sqlx::query_as::<_, Category>(
            "SELECT id, name, description FROM category ORDER BY id",
        )
        .fetch_all(&self.pool)
        .await?;

        Ok(categories)
    }
}
