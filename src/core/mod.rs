pub mod clock;
pub mod error;
pub mod traits;

pub use clock::{Clock, FixedClock, LocalClock};
pub use error::{AppError, Result};
