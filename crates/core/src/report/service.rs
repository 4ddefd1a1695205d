//! Report aggregation service.
//!
//! Pure folds over already-filtered slices. Empty input yields a zeroed
//! summary, never an error: only the mutation paths in the stores raise.

use rust_decimal::Decimal;

use super::types::{ActivitySummary, AllocationSummary, StatusCounts};
use crate::activity::{ActivityStatus, BudgetActivity};
use crate::allocation::BudgetAllocationItem;

/// Service for folding record sets into summary figures.
pub struct ReportService;

impl ReportService {
    /// Sums allocation figures and derives the utilization percentage.
    #[must_use]
    pub fn summarize_allocations(items: &[BudgetAllocationItem]) -> AllocationSummary {
        let total_allocated: Decimal = items.iter().map(|item| item.allocated_budget).sum();
        let total_used: Decimal = items.iter().map(|item| item.used_budget).sum();

        AllocationSummary {
            total_allocated,
            total_used,
            total_remaining: total_allocated - total_used,
            utilization_percent: Self::percentage(total_used, total_allocated),
        }
    }

    /// Counts activities per status and sums planned totals.
    ///
    /// Completion means approval: the completion percentage is the approved
    /// share of the whole set.
    #[must_use]
    pub fn summarize_activities(records: &[BudgetActivity]) -> ActivitySummary {
        let mut status_counts = StatusCounts::default();
        let mut total_planned = Decimal::ZERO;

        for record in records {
            match record.status {
                ActivityStatus::Draft => status_counts.draft += 1,
                ActivityStatus::Submitted => status_counts.submitted += 1,
                ActivityStatus::Approved => status_counts.approved += 1,
                ActivityStatus::Rejected => status_counts.rejected += 1,
            }
            total_planned += record.total;
        }

        let total_count = u32::try_from(records.len()).unwrap_or(u32::MAX);

        ActivitySummary {
            total_count,
            status_counts,
            total_planned,
            completion_percent: Self::percentage(
                Decimal::from(status_counts.approved),
                Decimal::from(total_count),
            ),
        }
    }

    /// Share of `part` in `whole` as a percentage, rounded to two decimal
    /// places. Defined as exactly zero for a zero `whole`: never a division
    /// panic, never a non-finite value.
    #[must_use]
    pub fn percentage(part: Decimal, whole: Decimal) -> Decimal {
        if whole.is_zero() {
            Decimal::ZERO
        } else {
            (part / whole * Decimal::ONE_HUNDRED).round_dp(2)
        }
    }
}
