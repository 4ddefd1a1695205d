//! Dashboard data types.

use rust_decimal::Decimal;
use serde::{Deserialize, Serialize};

use crate::report::{ActivitySummary, AllocationSummary};

/// Dashboard metrics response.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct DashboardMetrics {
    /// Label of the active period selection.
    pub period_label: String,
    /// Budget year the metrics cover.
    pub year: i32,
    /// Allocation summary cards.
    pub allocations: AllocationSummary,
    /// Activity summary cards.
    pub activities: ActivitySummary,
    /// Planned spending per field of activity (bidang).
    pub by_field: Vec<FieldBreakdown>,
    /// Quarterly planning chart data.
    pub quarterly_chart: QuarterlyChart,
}

/// Planned spending of one field of activity.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct FieldBreakdown {
    /// Field of activity name.
    pub field: String,
    /// Planned amount.
    pub amount: Decimal,
    /// Percentage of total planned spending.
    pub percent: Decimal,
}

/// Quarterly planning chart data.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct QuarterlyChart {
    /// Labels (TW1..TW4).
    pub labels: Vec<String>,
    /// Planned amount per quarter.
    pub planned: Vec<Decimal>,
}
