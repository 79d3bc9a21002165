use serde::{Deserialize, Serialize};

use crate::core::{AppError, Result};

/// Sellable product; `category_name` is joined in on reads
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize, sqlx::FromRow)]
pub struct Product {
    pub id: i64,
    pub name: String,
    pub price: i64,
    pub stock: i32,
    pub category_id: Option<i64>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub category_name: Option<String>,
}

/// Request body for creating or replacing a product
#[derive(Debug, Clone, Deserialize)]
pub struct ProductPayload {
    pub name: String,
    pub price: i64,
    #[serde(default)]
    pub stock: i32,
    #[serde(default)]
    pub category_id: Option<i64>,
}

impl ProductPayload {
    pub fn validate(&self) -> Result<()> {
        if self.name.trim().is_empty() {
            return Err(AppError::validation("Product name must not be empty"));
        }
        if self.price < 0 {
            return Err(AppError::validation("Product price cannot be negative"));
        }
        if self.stock < 0 {
            return Err(AppError::validation("Product stock cannot be negative"));
        }
        Ok(())
    }

    pub fn into_product(self, id: i64) -> Product {
        Product {
            id,
            name: self.name.trim().to_string(),
            price: self.price,
            stock: self.stock,
            category_id: self.category_id,
            category_name: None,
        }
    }
}

/// Query parameters for listing products
#[derive(Debug, Default, Deserialize)]
pub struct ProductFilter {
    /// Case-insensitive substring match on the product name
    #[serde(default)]
    pub name: Option<String>,
}

impl ProductFilter {
    pub fn name(&self) -> Option<&str> {
        self.name.as_deref().map(str::trim).filter(|n| !n.is_empty())
    }
}
