pub mod controllers;
pub mod models;
pub mod repositories;
pub mod services;

pub use controllers::configure;
pub use models::{DateRange, Report, ReportPeriod, TopProduct};
pub use repositories::{PgReportRepository, ReportRepository};
pub use services::ReportService;
