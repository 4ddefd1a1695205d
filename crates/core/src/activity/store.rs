//! In-memory activity record store.
//!
//! The store owns its collection and is passed by reference to whichever
//! component needs it; tests construct isolated stores per case. Persistence
//! through a remote backend is the store adapter crate's concern, not this
//! one's.

use chrono::Utc;
use rkas_shared::types::ActivityId;
use rust_decimal::Decimal;

use super::error::ActivityError;
use super::types::{
    ActivityStatus, BudgetActivity, CreateActivityInput, MonthAmounts, QuarterAmounts,
    UpdateActivityInput,
};

/// In-memory CRUD collection of budget activities.
///
/// Records keep insertion order; `list` returns a stable snapshot of that
/// order. Mutations recompute the derived `total` so it is never stale.
#[derive(Debug, Default)]
pub struct ActivityStore {
    records: Vec<BudgetActivity>,
}

impl ActivityStore {
    /// Creates an empty store.
    #[must_use]
    pub fn new() -> Self {
        Self::default()
    }

    /// All records in insertion order.
    #[must_use]
    pub fn list(&self) -> &[BudgetActivity] {
        &self.records
    }

    /// Number of records.
    #[must_use]
    pub fn len(&self) -> usize {
        self.records.len()
    }

    /// Returns true if the store holds no records.
    #[must_use]
    pub fn is_empty(&self) -> bool {
        self.records.is_empty()
    }

    /// Looks up a record by id.
    ///
    /// # Errors
    ///
    /// Returns `ActivityError::NotFound` for an unknown id.
    pub fn get(&self, id: ActivityId) -> Result<&BudgetActivity, ActivityError> {
        self.records
            .iter()
            .find(|record| record.id == id)
            .ok_or(ActivityError::NotFound(id))
    }

    /// Creates a new activity in `Draft` status.
    ///
    /// # Errors
    ///
    /// Returns a validation error if a required field is empty, any amount is
    /// negative, or nothing positive is planned.
    pub fn create(&mut self, input: CreateActivityInput) -> Result<BudgetActivity, ActivityError> {
        validate_create(&input)?;

        let now = Utc::now();
        let mut record = BudgetActivity {
            id: ActivityId::new(),
            activity_name: input.activity_name,
            description: input.description,
            field_of_activity: input.field_of_activity,
            standard: input.standard,
            funding_source: input.funding_source,
            year: input.year,
            status: ActivityStatus::Draft,
            quarter_amounts: input.quarter_amounts,
            month_amounts: input.month_amounts,
            total_override: input.total_override,
            total: Decimal::ZERO,
            created_at: now,
            updated_at: now,
        };
        record.total = record.computed_total();

        self.records.push(record.clone());
        Ok(record)
    }

    /// Merges a partial update into an existing activity.
    ///
    /// Recomputes the derived total whenever a bucket set or the override
    /// changed and stamps `updated_at`.
    ///
    /// # Errors
    ///
    /// Returns `NotFound` for an unknown id, or a validation error if the
    /// update empties a required field or introduces a negative amount.
    pub fn update(
        &mut self,
        id: ActivityId,
        input: UpdateActivityInput,
    ) -> Result<BudgetActivity, ActivityError> {
        validate_update(&input)?;

        let record = self
            .records
            .iter_mut()
            .find(|record| record.id == id)
            .ok_or(ActivityError::NotFound(id))?;

        if let Some(name) = input.activity_name {
            record.activity_name = name;
        }
        if let Some(description) = input.description {
            record.description = description;
        }
        if let Some(field) = input.field_of_activity {
            record.field_of_activity = field;
        }
        if let Some(standard) = input.standard {
            record.standard = standard;
        }
        if let Some(source) = input.funding_source {
            record.funding_source = source;
        }
        if let Some(year) = input.year {
            record.year = year;
        }
        if let Some(status) = input.status {
            record.status = status;
        }

        let amounts_changed = input.quarter_amounts.is_some()
            || input.month_amounts.is_some()
            || input.total_override.is_some();

        if let Some(quarters) = input.quarter_amounts {
            record.quarter_amounts = quarters;
        }
        if let Some(months) = input.month_amounts {
            record.month_amounts = months;
        }
        if let Some(total_override) = input.total_override {
            record.total_override = total_override;
        }

        if amounts_changed {
            record.total = record.computed_total();
        }
        record.updated_at = Utc::now();

        Ok(record.clone())
    }

    /// Deletes an activity by id.
    ///
    /// Deletion is NOT idempotent: callers are expected to confirm existence
    /// first, and a missing id is an error.
    ///
    /// # Errors
    ///
    /// Returns `NotFound` for an unknown id; the collection is unchanged.
    pub fn delete(&mut self, id: ActivityId) -> Result<(), ActivityError> {
        let position = self
            .records
            .iter()
            .position(|record| record.id == id)
            .ok_or(ActivityError::NotFound(id))?;
        self.records.remove(position);
        Ok(())
    }
}

fn validate_create(input: &CreateActivityInput) -> Result<(), ActivityError> {
    require_non_empty("activity_name", &input.activity_name)?;
    require_non_empty("field_of_activity", &input.field_of_activity)?;
    require_non_empty("funding_source", &input.funding_source)?;

    validate_amounts(
        &input.quarter_amounts,
        input.month_amounts.as_ref(),
        input.total_override,
    )?;

    let planned_something = input.total_override.is_some_and(|total| total > Decimal::ZERO)
        || input.quarter_amounts.sum() > Decimal::ZERO
        || input
            .month_amounts
            .as_ref()
            .is_some_and(|months| months.sum() > Decimal::ZERO);
    if !planned_something {
        return Err(ActivityError::NoPlannedAmount);
    }

    Ok(())
}

fn validate_update(input: &UpdateActivityInput) -> Result<(), ActivityError> {
    if let Some(name) = &input.activity_name {
        require_non_empty("activity_name", name)?;
    }
    if let Some(field) = &input.field_of_activity {
        require_non_empty("field_of_activity", field)?;
    }
    if let Some(source) = &input.funding_source {
        require_non_empty("funding_source", source)?;
    }

    if let Some(quarters) = &input.quarter_amounts {
        if let Some(quarter) = quarters.first_negative() {
            return Err(ActivityError::NegativeAmount {
                bucket: quarter.label().to_string(),
            });
        }
    }
    if let Some(Some(months)) = &input.month_amounts {
        if let Some(month) = months.first_negative() {
            return Err(ActivityError::NegativeAmount {
                bucket: month.name().to_string(),
            });
        }
    }
    if let Some(Some(total)) = input.total_override {
        if total.is_sign_negative() {
            return Err(ActivityError::NegativeOverride);
        }
    }

    Ok(())
}

fn validate_amounts(
    quarters: &QuarterAmounts,
    months: Option<&MonthAmounts>,
    total_override: Option<Decimal>,
) -> Result<(), ActivityError> {
    if let Some(quarter) = quarters.first_negative() {
        return Err(ActivityError::NegativeAmount {
            bucket: quarter.label().to_string(),
        });
    }
    if let Some(month) = months.and_then(MonthAmounts::first_negative) {
        return Err(ActivityError::NegativeAmount {
            bucket: month.name().to_string(),
        });
    }
    if total_override.is_some_and(|total| total.is_sign_negative()) {
        return Err(ActivityError::NegativeOverride);
    }
    Ok(())
}

fn require_non_empty(field: &'static str, value: &str) -> Result<(), ActivityError> {
    if value.trim().is_empty() {
        return Err(ActivityError::EmptyField(field));
    }
    Ok(())
}
