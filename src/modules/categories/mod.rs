// Categories module

pub mod controllers;
pub mod models;
pub mod repositories;
pub mod services;

pub use controllers::configure;
pub use models::{Category, CategoryPayload};
pub use repositories::PgCategoryRepository;
pub use services::CategoryService;
