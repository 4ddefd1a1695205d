//! In-memory adapter for the repository interface.
//!
//! Backs every collection with an `RwLock`ed vector. This is the binding
//! used by tests and local sessions; a remote adapter implements the same
//! [`Collection`] trait against a real datastore.

use async_trait::async_trait;
use tokio::sync::RwLock;
use tracing::info;
use uuid::Uuid;

use rkas_core::activity::BudgetActivity;
use rkas_core::allocation::BudgetAllocationItem;
use rkas_core::refdata::{
    AccountingCode, FieldOfActivity, FundingSource, LineItemComponent, NationalStandard,
    UserPreference,
};

use crate::access::Collection;
use crate::error::{StoreError, StoreResult};
use crate::record::StoredRecord;

/// One in-memory record collection.
#[derive(Debug)]
pub struct MemoryCollection<T> {
    name: &'static str,
    records: RwLock<Vec<T>>,
}

impl<T: StoredRecord> MemoryCollection<T> {
    /// Creates an empty collection with the given name.
    #[must_use]
    pub fn new(name: &'static str) -> Self {
        Self {
            name,
            records: RwLock::new(Vec::new()),
        }
    }

    /// The collection name, as used in log fields and error messages.
    #[must_use]
    pub const fn name(&self) -> &'static str {
        self.name
    }

    fn conflict(&self, key: &str) -> StoreError {
        StoreError::Conflict {
            collection: self.name,
            key: key.to_string(),
        }
    }

    fn not_found(&self, id: Uuid) -> StoreError {
        StoreError::NotFound {
            collection: self.name,
            id,
        }
    }
}

#[async_trait]
impl<T: StoredRecord> Collection<T> for MemoryCollection<T> {
    async fn list(&self) -> StoreResult<Vec<T>> {
        Ok(self.records.read().await.clone())
    }

    async fn get(&self, id: Uuid) -> StoreResult<T> {
        self.records
            .read()
            .await
            .iter()
            .find(|record| record.record_id() == id)
            .cloned()
            .ok_or_else(|| self.not_found(id))
    }

    async fn create(&self, record: T) -> StoreResult<T> {
        let mut records = self.records.write().await;

        if let Some(key) = record.unique_key() {
            if records
                .iter()
                .any(|existing| existing.unique_key() == Some(key))
            {
                return Err(self.conflict(key));
            }
        }

        info!(collection = self.name, id = %record.record_id(), "record created");
        records.push(record.clone());
        Ok(record)
    }

    async fn replace(&self, id: Uuid, record: T) -> StoreResult<T> {
        let mut records = self.records.write().await;

        if let Some(key) = record.unique_key() {
            if records
                .iter()
                .any(|existing| existing.record_id() != id && existing.unique_key() == Some(key))
            {
                return Err(self.conflict(key));
            }
        }

        let slot = records
            .iter_mut()
            .find(|existing| existing.record_id() == id)
            .ok_or_else(|| self.not_found(id))?;

        info!(collection = self.name, id = %id, "record replaced");
        *slot = record.clone();
        Ok(record)
    }

    async fn delete(&self, id: Uuid) -> StoreResult<()> {
        let mut records = self.records.write().await;
        let position = records
            .iter()
            .position(|existing| existing.record_id() == id)
            .ok_or_else(|| self.not_found(id))?;

        info!(collection = self.name, id = %id, "record deleted");
        records.remove(position);
        Ok(())
    }
}

/// The full set of collections the application persists.
///
/// Collection names follow the backend contract of the original
/// application.
#[derive(Debug)]
pub struct MemoryStore {
    /// Budget activities (kegiatan).
    pub activities: MemoryCollection<BudgetActivity>,
    /// Budget allocation items (anggaran).
    pub allocations: MemoryCollection<BudgetAllocationItem>,
    /// Fields of activity (bidang).
    pub fields_of_activity: MemoryCollection<FieldOfActivity>,
    /// National education standards (standar).
    pub standards: MemoryCollection<NationalStandard>,
    /// Funding sources (dana).
    pub funding_sources: MemoryCollection<FundingSource>,
    /// Accounting codes (rekening).
    pub accounting_codes: MemoryCollection<AccountingCode>,
    /// Line-item components (komponen).
    pub components: MemoryCollection<LineItemComponent>,
    /// Per-user period preferences.
    pub preferences: MemoryCollection<UserPreference>,
}

impl MemoryStore {
    /// Creates a store with all collections empty.
    #[must_use]
    pub fn new() -> Self {
        Self {
            activities: MemoryCollection::new("activities"),
            allocations: MemoryCollection::new("budget-allocation-items"),
            fields_of_activity: MemoryCollection::new("fields-of-activity"),
            standards: MemoryCollection::new("national-standards"),
            funding_sources: MemoryCollection::new("funding-sources"),
            accounting_codes: MemoryCollection::new("accounting-codes"),
            components: MemoryCollection::new("line-item-components"),
            preferences: MemoryCollection::new("user-preferences"),
        }
    }
}

impl Default for MemoryStore {
    fn default() -> Self {
        Self::new()
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use rkas_core::activity::{ActivityStatus, QuarterAmounts};
    use rkas_core::period::PeriodSelection;
    use rkas_shared::types::ActivityId;
    use rust_decimal::Decimal;
    use rust_decimal_macros::dec;

    fn activity(name: &str) -> BudgetActivity {
        let now = chrono::Utc::now();
        let quarters = QuarterAmounts::new(dec!(1_000), Decimal::ZERO, Decimal::ZERO, dec!(500));
        BudgetActivity {
            id: ActivityId::new(),
            activity_name: name.to_string(),
            description: None,
            field_of_activity: "Kurikulum".to_string(),
            standard: "Standar Isi".to_string(),
            funding_source: "BOS-01".to_string(),
            year: 2026,
            status: ActivityStatus::Draft,
            quarter_amounts: quarters,
            month_amounts: None,
            total_override: None,
            total: quarters.sum(),
            created_at: now,
            updated_at: now,
        }
    }

    #[tokio::test]
    async fn test_create_then_list_preserves_order() {
        let store = MemoryStore::new();
        let first = store.activities.create(activity("Pelatihan guru")).await.unwrap();
        let second = store.activities.create(activity("Lomba sains")).await.unwrap();

        let listed = store.activities.list().await.unwrap();
        assert_eq!(listed.len(), 2);
        assert_eq!(listed[0].id, first.id);
        assert_eq!(listed[1].id, second.id);
    }

    #[tokio::test]
    async fn test_get_unknown_id_is_not_found() {
        let store = MemoryStore::new();
        let result = store.activities.get(Uuid::now_v7()).await;
        assert!(matches!(result, Err(StoreError::NotFound { .. })));
    }

    #[tokio::test]
    async fn test_duplicate_code_conflicts_and_leaves_collection_unchanged() {
        let store = MemoryStore::new();
        store
            .funding_sources
            .create(FundingSource::new("BOS-01", "Bantuan Operasional", None).unwrap())
            .await
            .unwrap();

        let result = store
            .funding_sources
            .create(FundingSource::new("BOS-01", "Duplikat", None).unwrap())
            .await;

        match result {
            Err(StoreError::Conflict { collection, key }) => {
                assert_eq!(collection, "funding-sources");
                assert_eq!(key, "BOS-01");
            }
            other => panic!("expected Conflict, got {other:?}"),
        }
        assert_eq!(store.funding_sources.list().await.unwrap().len(), 1);
    }

    #[tokio::test]
    async fn test_replace_keeps_own_unique_key() {
        let store = MemoryStore::new();
        let source = store
            .funding_sources
            .create(FundingSource::new("BOP-02", "Bantuan Pemda", None).unwrap())
            .await
            .unwrap();

        // Renaming only the display name keeps the same code; that must not
        // conflict with itself.
        let mut renamed = source.clone();
        renamed.name = "Bantuan Operasional Pemda".to_string();
        let replaced = store
            .funding_sources
            .replace(source.record_id(), renamed)
            .await
            .unwrap();
        assert_eq!(replaced.name, "Bantuan Operasional Pemda");
    }

    #[tokio::test]
    async fn test_replace_into_foreign_key_conflicts() {
        let store = MemoryStore::new();
        store
            .standards
            .create(NationalStandard::new("Standar Isi").unwrap())
            .await
            .unwrap();
        let other = store
            .standards
            .create(NationalStandard::new("Standar Proses").unwrap())
            .await
            .unwrap();

        let mut stolen = other.clone();
        stolen.name = "Standar Isi".to_string();
        let result = store.standards.replace(other.record_id(), stolen).await;
        assert!(matches!(result, Err(StoreError::Conflict { .. })));
    }

    #[tokio::test]
    async fn test_delete_is_not_idempotent() {
        let store = MemoryStore::new();
        let record = store
            .components
            .create(LineItemComponent::new("5.1.02", "Bahan habis pakai").unwrap())
            .await
            .unwrap();

        store.components.delete(record.record_id()).await.unwrap();
        assert!(store.components.list().await.unwrap().is_empty());

        let result = store.components.delete(record.record_id()).await;
        assert!(matches!(result, Err(StoreError::NotFound { .. })));
    }

    #[tokio::test]
    async fn test_one_preference_per_user() {
        let store = MemoryStore::new();
        store
            .preferences
            .create(UserPreference::new("bendahara", PeriodSelection::default(), 2026).unwrap())
            .await
            .unwrap();

        let result = store
            .preferences
            .create(UserPreference::new("bendahara", PeriodSelection::default(), 2027).unwrap())
            .await;
        assert!(matches!(result, Err(StoreError::Conflict { .. })));
    }
}
