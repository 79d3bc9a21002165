mod category;

pub use category::{Category, CategoryPayload};
