use chrono::NaiveDate;

use super::DateRange;

/// Which window a report request asks for, decided once from the query.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum ReportPeriod {
    /// Both bounds were supplied
    ExplicitRange { start: String, end: String },
    /// Anything else, including a single bound on its own
    DefaultToday,
}

impl ReportPeriod {
    /// Classify the raw `start_date` / `end_date` parameters.
    /// Empty strings count as absent.
    pub fn from_params(start: Option<&str>, end: Option<&str>) -> Self {
        match (non_empty(start), non_empty(end)) {
            (Some(start), Some(end)) => ReportPeriod::ExplicitRange {
                start: start.to_string(),
                end: end.to_string(),
            },
            _ => ReportPeriod::DefaultToday,
        }
    }

    /// Turn the period into a concrete range, using `today` for the default.
    pub fn into_range(self, today: NaiveDate) -> DateRange {
        match self {
            ReportPeriod::ExplicitRange { start, end } => DateRange::new(start, end),
            ReportPeriod::DefaultToday => DateRange::single_day(today),
        }
    }
}

fn non_empty(value: Option<&str>) -> Option<&str> {
    value.filter(|v| !v.is_empty())
}
