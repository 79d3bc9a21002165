use std::sync::Arc;

use actix_web::{web, HttpResponse};
use tracing::error;

use crate::core::AppError;
use crate::middleware::method_not_allowed;
use crate::modules::reports::models::ReportPeriod;
use crate::modules::reports::services::ReportService;

/// Query parameters for the sales report endpoint
#[derive(Debug, Default, Clone, PartialEq, Eq)]
pub struct ReportQuery {
    /// Start of the window (inclusive, YYYY-MM-DD)
    pub start_date: Option<String>,
    /// End of the window (inclusive, YYYY-MM-DD)
    pub end_date: Option<String>,
}

impl ReportQuery {
    /// Pick `start_date` and `end_date` from raw query pairs.
    ///
    /// A repeated key keeps its first value; unknown keys are ignored.
    pub fn from_pairs(pairs: &[(String, String)]) -> Self {
        let first = |key: &str| {
            pairs
                .iter()
                .find(|(k, _)| k == key)
                .map(|(_, v)| v.clone())
        };

        Self {
            start_date: first("start_date"),
            end_date: first("end_date"),
        }
    }

    pub fn period(&self) -> ReportPeriod {
        ReportPeriod::from_params(self.start_date.as_deref(), self.end_date.as_deref())
    }
}

/// GET /report, GET /report/today
///
/// Sales summary for `start_date..=end_date` when both are given, otherwise
/// for the current day.
pub async fn get_report(
    service: web::Data<Arc<ReportService>>,
    query: web::Query<Vec<(String, String)>>,
) -> Result<HttpResponse, AppError> {
    let query = ReportQuery::from_pairs(&query);
    let report = service.resolve(query.period()).await.map_err(|e| {
        error!(error = %e, "Failed to generate sales report");
        AppError::internal(e.to_string())
    })?;

    Ok(HttpResponse::Ok().json(report))
}

/// Configure routes for reports module
pub fn configure_routes(cfg: &mut web::ServiceConfig) {
    for path in ["/report", "/report/today"] {
        cfg.service(
            web::resource(path)
                .route(web::get().to(get_report))
                .default_service(web::to(method_not_allowed)),
        );
    }
}
