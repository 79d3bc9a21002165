use async_trait::async_trait;
use crate::core::Result;

/// Base repository trait for single-table CRUD.
/// Catalog repositories (products, categories) implement this for consistency.
#[async_trait]
pub trait Repository<T, ID>: Send + Sync {
    /// Insert a new entity, returning it with its generated ID
    async fn create(&self, entity: T) -> Result<T>;

    /// Find entity by ID
    async fn find_by_id(&self, id: ID) -> Result<Option<T>>;

    /// Overwrite an existing entity; `None` when no row matched
    async fn update(&self, id: ID, entity: T) -> Result<Option<T>>;

    /// Delete an entity by ID; `false` when no row matched
    async fn delete(&self, id: ID) -> Result<bool>;

    /// List all entities
    async fn list(&self) -> Result<Vec<T>>;
}
