mod category_repository;

pub use category_repository::PgCategoryRepository;
