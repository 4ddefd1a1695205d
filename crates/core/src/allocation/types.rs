//! Allocation data types.

use chrono::{DateTime, Utc};
use rkas_shared::types::AllocationId;
use rust_decimal::Decimal;
use serde::{Deserialize, Serialize};
use std::fmt;

use crate::period::Period;

/// Usage status classification of an allocation.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "kebab-case")]
pub enum AllocationStatus {
    /// Usage sits inside the healthy band.
    OnTrack,
    /// More than 95% of the allocation is used.
    OverBudget,
    /// Less than 50% of the allocation is used.
    UnderBudget,
}

impl AllocationStatus {
    /// Derives the status from used and allocated amounts.
    ///
    /// Thresholds: ratio above 0.95 is over-budget, below 0.50 is
    /// under-budget; both boundaries are inclusive to on-track. A zero
    /// allocation is on-track while nothing is used and over-budget as soon
    /// as anything is.
    #[must_use]
    pub fn from_usage(used: Decimal, allocated: Decimal) -> Self {
        if allocated.is_zero() {
            return if used.is_zero() {
                Self::OnTrack
            } else {
                Self::OverBudget
            };
        }

        let ratio = used / allocated;
        if ratio > Decimal::new(95, 2) {
            Self::OverBudget
        } else if ratio < Decimal::new(50, 2) {
            Self::UnderBudget
        } else {
            Self::OnTrack
        }
    }

    /// Returns the string representation of the status.
    #[must_use]
    pub const fn as_str(self) -> &'static str {
        match self {
            Self::OnTrack => "on-track",
            Self::OverBudget => "over-budget",
            Self::UnderBudget => "under-budget",
        }
    }
}

impl fmt::Display for AllocationStatus {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{}", self.as_str())
    }
}

/// One allocation line on the anggaran screen.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct BudgetAllocationItem {
    /// Allocation ID.
    pub id: AllocationId,
    /// Activity label.
    pub activity: String,
    /// Field of activity (bidang).
    pub field_of_activity: String,
    /// National education standard.
    pub standard: String,
    /// Allocated amount.
    pub allocated_budget: Decimal,
    /// Used (realized) amount.
    pub used_budget: Decimal,
    /// Derived: allocated minus used. Negative when overspent.
    pub remaining_budget: Decimal,
    /// Derived usage status, recomputed on every mutation.
    pub status: AllocationStatus,
    /// The period this allocation covers.
    pub period: Period,
    /// Budget year.
    pub year: i32,
    /// Owner name.
    pub responsible: String,
    /// Last mutation timestamp.
    pub last_updated: DateTime<Utc>,
}

/// Input for creating an allocation.
#[derive(Debug, Clone)]
pub struct CreateAllocationInput {
    /// Activity label.
    pub activity: String,
    /// Field of activity (bidang).
    pub field_of_activity: String,
    /// National education standard.
    pub standard: String,
    /// Allocated amount.
    pub allocated_budget: Decimal,
    /// Used (realized) amount.
    pub used_budget: Decimal,
    /// The period this allocation covers.
    pub period: Period,
    /// Budget year.
    pub year: i32,
    /// Owner name.
    pub responsible: String,
}

/// Input for partially updating an allocation.
#[derive(Debug, Clone, Default)]
pub struct UpdateAllocationInput {
    /// New activity label.
    pub activity: Option<String>,
    /// New field of activity.
    pub field_of_activity: Option<String>,
    /// New national education standard.
    pub standard: Option<String>,
    /// New allocated amount.
    pub allocated_budget: Option<Decimal>,
    /// New used amount.
    pub used_budget: Option<Decimal>,
    /// New period.
    pub period: Option<Period>,
    /// New budget year.
    pub year: Option<i32>,
    /// New owner name.
    pub responsible: Option<String>,
}
