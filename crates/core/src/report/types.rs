//! Report data types.

use rust_decimal::Decimal;
use serde::{Deserialize, Serialize};

/// Summary figures over a set of allocation items.
#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
pub struct AllocationSummary {
    /// Sum of allocated amounts.
    pub total_allocated: Decimal,
    /// Sum of used amounts.
    pub total_used: Decimal,
    /// Allocated minus used.
    pub total_remaining: Decimal,
    /// Used over allocated, as a percentage; 0 when nothing is allocated.
    pub utilization_percent: Decimal,
}

/// Per-status record counts.
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq, Serialize, Deserialize)]
pub struct StatusCounts {
    /// Records in draft.
    pub draft: u32,
    /// Records submitted for review.
    pub submitted: u32,
    /// Approved records.
    pub approved: u32,
    /// Rejected records.
    pub rejected: u32,
}

/// Summary figures over a set of activity records.
#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
pub struct ActivitySummary {
    /// Number of records.
    pub total_count: u32,
    /// Counts per status.
    pub status_counts: StatusCounts,
    /// Sum of planned totals.
    pub total_planned: Decimal,
    /// Approved over total, as a percentage; 0 for an empty set.
    pub completion_percent: Decimal,
}
