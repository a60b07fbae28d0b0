use async_trait::async_trait;

use crate::error::StoreError;
use crate::model::{AssignmentChange, AssignmentKind, NewTaster, Taster};

/// Gateway to the authoritative taster collection.
///
/// Every method is one independent round trip; the contract has no batching,
/// no transactions spanning calls, and no retry. After a failed write the
/// caller must assume unknown remote state and re-fetch.
#[async_trait]
pub trait TasterStore: Send + Sync {
    /// Full roster, ordered by display code.
    async fn load_all(&self) -> Result<Vec<Taster>, StoreError>;

    /// Provision a new taster with empty assignments. Returns the stored
    /// record including its assigned id.
    async fn insert(&self, new: NewTaster) -> Result<Taster, StoreError>;

    /// Remove a taster record.
    async fn delete(&self, id: i32) -> Result<(), StoreError>;

    /// Patch a single assignment field of one taster.
    async fn update_assignment(
        &self,
        id: i32,
        change: AssignmentChange,
    ) -> Result<(), StoreError>;

    /// Unassign one dimension for every taster ("vaciar"). Update-all
    /// semantics; returns the number of affected records.
    async fn clear_assignments(&self, kind: AssignmentKind) -> Result<usize, StoreError>;

    /// Configured table count from the settings collection, if present.
    async fn load_table_count(&self) -> Result<Option<u32>, StoreError>;
}
