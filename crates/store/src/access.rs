//! Repository trait for record collections.

use async_trait::async_trait;
use uuid::Uuid;

use crate::error::StoreResult;
use crate::record::StoredRecord;

/// Async CRUD surface of one record collection.
///
/// Every operation is a single suspend point with no concurrent in-flight
/// mutations assumed against the same record: last write wins, there are no
/// transactions or optimistic-concurrency tokens at this level. A server
/// host wraps mutating calls in a datastore transaction; list and get stay
/// lock-free reads.
#[async_trait]
pub trait Collection<T: StoredRecord>: Send + Sync {
    /// All records, in a stable snapshot order.
    async fn list(&self) -> StoreResult<Vec<T>>;

    /// Looks up one record by id.
    async fn get(&self, id: Uuid) -> StoreResult<T>;

    /// Inserts a record, enforcing the collection's uniqueness constraint.
    async fn create(&self, record: T) -> StoreResult<T>;

    /// Replaces the record with the given id wholesale.
    async fn replace(&self, id: Uuid, record: T) -> StoreResult<T>;

    /// Removes a record by id. Not idempotent: an unknown id is an error.
    async fn delete(&self, id: Uuid) -> StoreResult<()>;
}
