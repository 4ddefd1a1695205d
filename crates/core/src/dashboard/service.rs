//! Dashboard metric composition service.

use rust_decimal::Decimal;
use std::collections::BTreeMap;

use super::types::{DashboardMetrics, FieldBreakdown, QuarterlyChart};
use crate::activity::BudgetActivity;
use crate::allocation::BudgetAllocationItem;
use crate::period::{PeriodSelection, Quarter};
use crate::report::ReportService;

/// Service assembling dashboard metrics from pre-filtered record sets.
pub struct DashboardService;

impl DashboardService {
    /// Builds the full dashboard payload.
    ///
    /// Callers narrow both slices to the active period and year first; this
    /// function only folds what it is handed.
    #[must_use]
    pub fn build(
        selection: PeriodSelection,
        year: i32,
        activities: &[BudgetActivity],
        allocations: &[BudgetAllocationItem],
    ) -> DashboardMetrics {
        DashboardMetrics {
            period_label: selection.active_period().label(),
            year,
            allocations: ReportService::summarize_allocations(allocations),
            activities: ReportService::summarize_activities(activities),
            by_field: Self::field_breakdown(activities),
            quarterly_chart: Self::quarterly_chart(activities),
        }
    }

    /// Groups planned totals per field of activity, largest first.
    #[must_use]
    pub fn field_breakdown(activities: &[BudgetActivity]) -> Vec<FieldBreakdown> {
        let mut by_field: BTreeMap<&str, Decimal> = BTreeMap::new();
        for record in activities {
            *by_field
                .entry(record.field_of_activity.as_str())
                .or_default() += record.total;
        }

        let grand_total: Decimal = by_field.values().copied().sum();

        let mut breakdown: Vec<FieldBreakdown> = by_field
            .into_iter()
            .map(|(field, amount)| FieldBreakdown {
                field: field.to_string(),
                amount,
                percent: ReportService::percentage(amount, grand_total),
            })
            .collect();
        breakdown.sort_by(|a, b| b.amount.cmp(&a.amount));
        breakdown
    }

    /// Sums quarterly buckets across the activity set into chart data.
    #[must_use]
    pub fn quarterly_chart(activities: &[BudgetActivity]) -> QuarterlyChart {
        let labels = Quarter::ALL
            .into_iter()
            .map(|quarter| quarter.label().to_string())
            .collect();
        let planned = Quarter::ALL
            .into_iter()
            .map(|quarter| {
                activities
                    .iter()
                    .map(|record| record.quarter_amounts.get(quarter))
                    .sum()
            })
            .collect();

        QuarterlyChart { labels, planned }
    }
}
