use async_trait::async_trait;
use sqlx::PgPool;

use crate::core::traits::Repository;
use crate::core::{AppError, Result};
use crate::modules::products::models::Product;

/// Product storage: CRUD plus name search
#[async_trait]
pub trait ProductRepository: Repository<Product, i64> {
    /// Products whose name contains `name`, ignoring case
    async fn search_by_name(&self, name: &str) -> Result<Vec<Product>>;
}

pub struct PgProductRepository {
    pool: PgPool,
}

impl PgProductRepository {
    pub fn new(pool: PgPool) -> Self {
        Self { pool }
    }
}

/// An unknown category_id is a caller mistake, not a server fault
fn map_write_error(err: sqlx::Error, product: &Product) -> AppError {
    if let Some(db_err) = err.as_database_error() {
        if db_err.is_foreign_key_violation() {
            return AppError::validation(format!(
                "Category {} does not exist",
                product.category_id.unwrap_or_default()
            ));
        }
    }
    AppError::Storage(err)
}

#[async_trait]
impl Repository<Product, i64> for PgProductRepository {
    async fn create(&self, entity: Product) -> Result<Product> {
        sqlx::query_as::<_, Product>(
            r#"
            WITH inserted AS (
                INSERT INTO product (name, price, stock, category_id)
                VALUES ($1, $2, $3, $4)
                RETURNING id, name, price, stock, category_id
            )
            SELECT i.id, i.name, i.price, i.stock, i.category_id, c.name AS category_name
            FROM inserted i
            LEFT JOIN category c ON c.id = i.category_id
            "#,
        )
        .bind(&entity.name)
        .bind(entity.price)
        .bind(entity.stock)
        .bind(entity.category_id)
        .fetch_one(&self.pool)
        .await
        .map_err(|e| map_write_error(e, &entity))
    }

    async fn find_by_id(&self, id: i64) -> Result<Option<Product>> {
        let product = sqlx::query_as::<_, Product>(
            r#"
            SELECT p.id, p.name, p.price, p.stock, p.category_id, c.name AS category_name
            FROM product p
            LEFT JOIN category c ON c.id = p.category_id
            WHERE p.id = $1
            "#,
        )
        .bind(id)
        .fetch_optional(&self.pool)
        .await?;

        Ok(product)
    }

    async fn update(&self, id: i64, entity: Product) -> Result<Option<Product>> {
        sqlx::query_as::<_, Product>(
            r#"
            WITH updated AS (
                UPDATE product
                SET name = $1, price = $2, stock = $3, category_id = $4
                WHERE id = $5
                RETURNING id, name, price, stock, category_id
            )
            SELECT u.id, u.name, u.price, u.stock, u.category_id, c.name AS category_name
            FROM updated u
            LEFT JOIN category c ON c.id = u.category_id
            "#,
        )
        .bind(&entity.name)
        .bind(entity.price)
        .bind(entity.stock)
        .bind(entity.category_id)
        .bind(id)
        .fetch_optional(&self.pool)
        .await
        .map_err(|e| map_write_error(e, &entity))
    }

    async fn delete(&self, id: i64) -> Result<bool> {
        let result = sqlx::query("DELETE FROM product WHERE id = $1")
            .bind(id)
            .execute(&self.pool)
            .await?;

        Ok(result.rows_affected() > 0)
    }

    async fn list(&self) -> Result<Vec<Product>> {
        let products = sqlx::query_as::<_, Product>(
            r#"
            SELECT p.id, p.name, p.price, p.stock, p.category_id, c.name AS category_name
            FROM product p
            LEFT JOIN category c ON c.id = p.category_id
            ORDER BY p.id
            "#,
        )
        .fetch_all(&self.pool)
        .await?;

        Ok(products)
    }
}

#[async_trait]
impl ProductRepository for PgProductRepository {
    async fn search_by_name(&self, name: &str) -> Result<Vec<Product>> {
        let pattern = format!("%{}%", name);
        let products = sqlx::query_as::<_, Product>(
            r#"
            SELECT p.id, p.name, p.price, p.stock, p.category_id, c.name AS category_name
            FROM product p
            LEFT JOIN category c ON c.id = p.category_id
            WHERE p.name ILIKE $1
            ORDER BY p.id
            "#,
        )
        .bind(pattern)
        .fetch_all(&self.pool)
        .await?;

        Ok(products)
    }
}
