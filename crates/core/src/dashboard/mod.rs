//! Dashboard metric composition.
//!
//! This module assembles the figures the dashboard screen renders:
//! - Summary cards for the filtered record sets
//! - Breakdown of planned spending per field of activity
//! - Quarterly planning chart data

pub mod service;
pub mod types;

pub use service::DashboardService;
pub use types::{DashboardMetrics, FieldBreakdown, QuarterlyChart};
