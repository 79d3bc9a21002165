use std::sync::Arc;
use std::time::Duration;

use tracing::{debug, info};

use crate::core::{AppError, Clock, Result};
use crate::modules::reports::models::{DateRange, Report, ReportPeriod};
use crate::modules::reports::repositories::ReportRepository;

/// Builds sales reports from the transaction store.
///
/// Holds no state between calls; every report is computed fresh from the
/// store.
pub struct ReportService {
    report_repo: Arc<dyn ReportRepository>,
    clock: Arc<dyn Clock>,
    timeout: Duration,
}

impl ReportService {
    /// Create a new report service
    pub fn new(
        report_repo: Arc<dyn ReportRepository>,
        clock: Arc<dyn Clock>,
        timeout: Duration,
    ) -> Self {
        Self {
            report_repo,
            clock,
            timeout,
        }
    }

    /// Pick the range for `period` and aggregate it.
    ///
    /// `DefaultToday` is resolved against the service clock at call time.
    pub async fn resolve(&self, period: ReportPeriod) -> Result<Report> {
        let range = period.into_range(self.clock.today());
        debug!(
            start_date = %range.start_date,
            end_date = %range.end_date,
            "Resolved report range"
        );
        self.aggregate(&range).await
    }

    /// Compute revenue, transaction count and best seller for `range`.
    ///
    /// The two store reads run concurrently. The first failure cancels the
    /// other read and is returned as-is; there is no retry. An empty range is
    /// a zero-valued report, not an error.
    ///
    /// # Errors
    /// Storage errors from either read, or `Internal` if the reads do not
    /// finish within the configured timeout.
    pub async fn aggregate(&self, range: &DateRange) -> Result<Report> {
        let reads = async {
            tokio::try_join!(
                self.report_repo.sales_totals(range),
                self.report_repo.best_seller(range),
            )
        };

        let (totals, top_product) = tokio::time::timeout(self.timeout, reads)
            .await
            .map_err(|_| {
                AppError::internal(format!(
                    "Report aggregation timed out after {}s",
                    self.timeout.as_secs_f64()
                ))
            })??;

        let report = Report::new(totals, top_product);

        info!(
            start_date = %range.start_date,
            end_date = %range.end_date,
            total_revenue = report.total_revenue,
            transactions = report.total_transaction_count,
            top_product = %report.top_product.name,
            "Sales report generated"
        );

        Ok(report)
    }
}
