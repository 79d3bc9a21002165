//! Kasir point-of-sale backend
//!
//! Product and category catalog endpoints plus a sales report that sums
//! revenue, counts transactions and picks the best-selling product over a
//! date window.

pub mod app;
pub mod config;
pub mod core;
pub mod middleware;
pub mod modules;

// Re-export commonly used types
pub use modules::categories;
pub use modules::products;
pub use modules::reports;
