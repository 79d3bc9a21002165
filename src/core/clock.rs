use chrono::{Local, NaiveDate};

/// Source of the current calendar date.
///
/// Reports default to "today" when no explicit range is given; services take
/// a `Clock` so that default can be pinned in tests.
pub trait Clock: Send + Sync {
    fn today(&self) -> NaiveDate;
}

/// Process-local wall clock. Dates follow the host's local time zone.
#[derive(Debug, Clone, Copy, Default)]
pub struct LocalClock;

impl Clock for LocalClock {
    fn today(&self) -> NaiveDate {
        Local::now().date_naive()
    }
}

/// Clock pinned to a single date
#[derive(Debug, Clone, Copy)]
pub struct FixedClock(pub NaiveDate);

impl Clock for FixedClock {
    fn today(&self) -> NaiveDate {
        self.0
    }
}
