//! In-memory allocation store.

use chrono::Utc;
use rkas_shared::types::AllocationId;
use rust_decimal::Decimal;

use super::error::AllocationError;
use super::types::{
    AllocationStatus, BudgetAllocationItem, CreateAllocationInput, UpdateAllocationInput,
};

/// In-memory CRUD collection of budget allocation items.
///
/// `remaining_budget` and `status` are derived on every mutation, never
/// stored stale.
#[derive(Debug, Default)]
pub struct AllocationStore {
    records: Vec<BudgetAllocationItem>,
}

impl AllocationStore {
    /// Creates an empty store.
    #[must_use]
    pub fn new() -> Self {
        Self::default()
    }

    /// All records in insertion order.
    #[must_use]
    pub fn list(&self) -> &[BudgetAllocationItem] {
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
    /// Returns `AllocationError::NotFound` for an unknown id.
    pub fn get(&self, id: AllocationId) -> Result<&BudgetAllocationItem, AllocationError> {
        self.records
            .iter()
            .find(|record| record.id == id)
            .ok_or(AllocationError::NotFound(id))
    }

    /// Creates a new allocation with derived fields computed.
    ///
    /// # Errors
    ///
    /// Returns a validation error if the activity label or owner is empty,
    /// or an amount is negative.
    pub fn create(
        &mut self,
        input: CreateAllocationInput,
    ) -> Result<BudgetAllocationItem, AllocationError> {
        validate_create(&input)?;

        let record = BudgetAllocationItem {
            id: AllocationId::new(),
            activity: input.activity,
            field_of_activity: input.field_of_activity,
            standard: input.standard,
            remaining_budget: input.allocated_budget - input.used_budget,
            status: AllocationStatus::from_usage(input.used_budget, input.allocated_budget),
            allocated_budget: input.allocated_budget,
            used_budget: input.used_budget,
            period: input.period,
            year: input.year,
            responsible: input.responsible,
            last_updated: Utc::now(),
        };

        self.records.push(record.clone());
        Ok(record)
    }

    /// Merges a partial update and recomputes the derived fields.
    ///
    /// # Errors
    ///
    /// Returns `NotFound` for an unknown id, or a validation error for an
    /// emptied label or a negative amount.
    pub fn update(
        &mut self,
        id: AllocationId,
        input: UpdateAllocationInput,
    ) -> Result<BudgetAllocationItem, AllocationError> {
        validate_update(&input)?;

        let record = self
            .records
            .iter_mut()
            .find(|record| record.id == id)
            .ok_or(AllocationError::NotFound(id))?;

        if let Some(activity) = input.activity {
            record.activity = activity;
        }
        if let Some(field) = input.field_of_activity {
            record.field_of_activity = field;
        }
        if let Some(standard) = input.standard {
            record.standard = standard;
        }
        if let Some(allocated) = input.allocated_budget {
            record.allocated_budget = allocated;
        }
        if let Some(used) = input.used_budget {
            record.used_budget = used;
        }
        if let Some(period) = input.period {
            record.period = period;
        }
        if let Some(year) = input.year {
            record.year = year;
        }
        if let Some(responsible) = input.responsible {
            record.responsible = responsible;
        }

        record.remaining_budget = record.allocated_budget - record.used_budget;
        record.status = AllocationStatus::from_usage(record.used_budget, record.allocated_budget);
        record.last_updated = Utc::now();

        Ok(record.clone())
    }

    /// Deletes an allocation by id.
    ///
    /// # Errors
    ///
    /// Returns `NotFound` for an unknown id; the collection is unchanged.
    pub fn delete(&mut self, id: AllocationId) -> Result<(), AllocationError> {
        let position = self
            .records
            .iter()
            .position(|record| record.id == id)
            .ok_or(AllocationError::NotFound(id))?;
        self.records.remove(position);
        Ok(())
    }
}

fn validate_create(input: &CreateAllocationInput) -> Result<(), AllocationError> {
    require_non_empty("activity", &input.activity)?;
    require_non_empty("responsible", &input.responsible)?;
    require_non_negative("allocated_budget", input.allocated_budget)?;
    require_non_negative("used_budget", input.used_budget)?;
    Ok(())
}

fn validate_update(input: &UpdateAllocationInput) -> Result<(), AllocationError> {
    if let Some(activity) = &input.activity {
        require_non_empty("activity", activity)?;
    }
    if let Some(responsible) = &input.responsible {
        require_non_empty("responsible", responsible)?;
    }
    if let Some(allocated) = input.allocated_budget {
        require_non_negative("allocated_budget", allocated)?;
    }
    if let Some(used) = input.used_budget {
        require_non_negative("used_budget", used)?;
    }
    Ok(())
}

fn require_non_empty(field: &'static str, value: &str) -> Result<(), AllocationError> {
    if value.trim().is_empty() {
        return Err(AllocationError::EmptyField(field));
    }
    Ok(())
}

fn require_non_negative(field: &'static str, value: Decimal) -> Result<(), AllocationError> {
    if value.is_sign_negative() {
        return Err(AllocationError::NegativeAmount(field));
    }
    Ok(())
}
