// Products module

pub mod controllers;
pub mod models;
pub mod repositories;
pub mod services;

pub use controllers::configure;
pub use models::{Product, ProductFilter, ProductPayload};
pub use repositories::{PgProductRepository, ProductRepository};
pub use services::ProductService;
