//! Record trait binding domain types to collections.

use rkas_core::activity::BudgetActivity;
use rkas_core::allocation::BudgetAllocationItem;
use rkas_core::refdata::{
    AccountingCode, FieldOfActivity, FundingSource, LineItemComponent, NationalStandard,
    UserPreference,
};
use uuid::Uuid;

/// A record the data access layer can persist.
///
/// `unique_key` names the value a collection enforces uniqueness on (a
/// reference code or display name); records without one return `None` and
/// are only keyed by id.
pub trait StoredRecord: Clone + Send + Sync + 'static {
    /// The record's identifier as a raw UUID.
    fn record_id(&self) -> Uuid;

    /// The unique business key, if the collection has one.
    fn unique_key(&self) -> Option<&str> {
        None
    }
}

impl StoredRecord for BudgetActivity {
    fn record_id(&self) -> Uuid {
        self.id.into_inner()
    }
}

impl StoredRecord for BudgetAllocationItem {
    fn record_id(&self) -> Uuid {
        self.id.into_inner()
    }
}

impl StoredRecord for FundingSource {
    fn record_id(&self) -> Uuid {
        self.id.into_inner()
    }

    fn unique_key(&self) -> Option<&str> {
        Some(&self.code)
    }
}

impl StoredRecord for AccountingCode {
    fn record_id(&self) -> Uuid {
        self.id.into_inner()
    }

    fn unique_key(&self) -> Option<&str> {
        Some(&self.code)
    }
}

impl StoredRecord for LineItemComponent {
    fn record_id(&self) -> Uuid {
        self.id.into_inner()
    }

    fn unique_key(&self) -> Option<&str> {
        Some(&self.code)
    }
}

impl StoredRecord for FieldOfActivity {
    fn record_id(&self) -> Uuid {
        self.id.into_inner()
    }

    fn unique_key(&self) -> Option<&str> {
        Some(&self.name)
    }
}

impl StoredRecord for NationalStandard {
    fn record_id(&self) -> Uuid {
        self.id.into_inner()
    }

    fn unique_key(&self) -> Option<&str> {
        Some(&self.name)
    }
}

impl StoredRecord for UserPreference {
    fn record_id(&self) -> Uuid {
        self.id.into_inner()
    }

    /// One preference record per user.
    fn unique_key(&self) -> Option<&str> {
        Some(&self.owner)
    }
}
