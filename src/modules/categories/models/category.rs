use serde::{Deserialize, Serialize};

use crate::core::{AppError, Result};

/// Product category
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize, sqlx::FromRow)]
pub struct Category {
    pub id: i64,
    pub name: String,
    pub description: String,
}

/// Request body for creating or replacing a category
#[derive(Debug, Clone, Deserialize)]
pub struct CategoryPayload {
    pub name: String,
    #[serde(default)]
    pub description: String,
}

impl CategoryPayload {
    pub fn validate(&self) -> Result<()> {
        if self.name.trim().is_empty() {
            return Err(AppError::validation("Category name must not be empty"));
        }
        Ok(())
    }

    /// Build an unsaved category; the id is assigned by the store
    pub fn into_category(self, id: i64) -> Category {
        Category {
            id,
            name: self.name.trim().to_string(),
            description: self.description,
        }
    }
}
