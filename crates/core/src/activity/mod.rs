//! Budget activity (kegiatan) records and their store.

pub mod error;
pub mod store;
pub mod types;


pub use error::ActivityError;
pub use store::ActivityStore;
pub use types::{
    ActivityStatus, BudgetActivity, CreateActivityInput, MonthAmounts, QuarterAmounts,
    UpdateActivityInput,
};
