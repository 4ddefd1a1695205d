//! Filter criteria for activity queries.
//!
//! Filtering is a pure function over a record slice: no input mutation,
//! deterministic output. All criteria must hold simultaneously (logical
//! AND); every absent criterion matches everything, which is also what the
//! UI "all" sentinel maps to.

use rust_decimal::Decimal;
use serde::{Deserialize, Serialize};

use crate::activity::{ActivityStatus, BudgetActivity};
use crate::period::{Period, Quarter};

/// Filter for activity record queries.
#[derive(Debug, Clone, Default, Serialize, Deserialize)]
pub struct ActivityFilter {
    /// Case-insensitive substring matched against the activity name, the
    /// field of activity, or the description.
    #[serde(default)]
    pub search: Option<String>,
    /// Exact status match; `None` is the "all" sentinel.
    #[serde(default)]
    pub status: Option<ActivityStatus>,
    /// Exact field-of-activity match; `None` is the "all" sentinel.
    #[serde(default)]
    pub field_of_activity: Option<String>,
    /// Exact budget-year match.
    #[serde(default)]
    pub year: Option<i32>,
    /// Period membership: the record's bucket for the selected quarter or
    /// month must be positive.
    #[serde(default)]
    pub period: Option<Period>,
}

impl ActivityFilter {
    /// Creates a new empty filter (matches everything).
    #[must_use]
    pub fn new() -> Self {
        Self::default()
    }

    /// Sets the free-text search criterion.
    #[must_use]
    pub fn with_search(mut self, search: impl Into<String>) -> Self {
        self.search = Some(search.into());
        self
    }

    /// Sets the status criterion.
    #[must_use]
    pub const fn with_status(mut self, status: ActivityStatus) -> Self {
        self.status = Some(status);
        self
    }

    /// Sets the field-of-activity criterion.
    #[must_use]
    pub fn with_field_of_activity(mut self, field: impl Into<String>) -> Self {
        self.field_of_activity = Some(field.into());
        self
    }

    /// Sets the budget-year criterion.
    #[must_use]
    pub const fn with_year(mut self, year: i32) -> Self {
        self.year = Some(year);
        self
    }

    /// Sets the period criterion.
    #[must_use]
    pub const fn with_period(mut self, period: Period) -> Self {
        self.period = Some(period);
        self
    }

    /// Returns true if the filter is empty (matches everything).
    #[must_use]
    pub fn is_empty(&self) -> bool {
        self.search.as_deref().is_none_or(str::is_empty)
            && self.status.is_none()
            && self.field_of_activity.is_none()
            && self.year.is_none()
            && self.period.is_none()
    }

    /// Tests a single record against all criteria.
    #[must_use]
    pub fn matches(&self, record: &BudgetActivity) -> bool {
        self.matches_search(record)
            && self.status.is_none_or(|status| record.status == status)
            && self
                .field_of_activity
                .as_deref()
                .is_none_or(|field| record.field_of_activity == field)
            && self.year.is_none_or(|year| record.year == year)
            && self.matches_period(record)
    }

    /// Filters a record slice, preserving order.
    #[must_use]
    pub fn apply(&self, records: &[BudgetActivity]) -> Vec<BudgetActivity> {
        records
            .iter()
            .filter(|record| self.matches(record))
            .cloned()
            .collect()
    }

    fn matches_search(&self, record: &BudgetActivity) -> bool {
        let Some(search) = self.search.as_deref() else {
            return true;
        };
        if search.is_empty() {
            return true;
        }
        let needle = search.to_lowercase();

        record.activity_name.to_lowercase().contains(&needle)
            || record.field_of_activity.to_lowercase().contains(&needle)
            || record
                .description
                .as_deref()
                .is_some_and(|description| description.to_lowercase().contains(&needle))
    }

    fn matches_period(&self, record: &BudgetActivity) -> bool {
        match self.period {
            None => true,
            Some(Period::Quarterly(quarter)) => {
                record.quarter_amounts.get(quarter) > Decimal::ZERO
            }
            Some(Period::Monthly(month)) => match &record.month_amounts {
                Some(months) => months.get(month) > Decimal::ZERO,
                // Without monthly buckets, fall back to the containing
                // quarter's bucket.
                None => record.quarter_amounts.get(Quarter::containing(month)) > Decimal::ZERO,
            },
        }
    }
}
