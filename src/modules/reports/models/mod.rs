mod report;
mod report_period;

pub use report::{DateRange, Report, SalesTotals, TopProduct};
pub use report_period::ReportPeriod;
