//! Quarter/month period model and selection state.

pub mod types;

pub use types::{InvalidMonth, Month, Period, PeriodSelection, PeriodType, Quarter};
