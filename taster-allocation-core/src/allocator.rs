//! Allocation mutator: validate against the freshest roster, write one
//! field, re-fetch. Failed writes are never retried; the store state is
//! unknown after a failure and a silent retry could double-apply.

use std::sync::Arc;

use crate::error::{AllocationError, StoreError};
use crate::model::{AssignmentChange, AssignmentKind, NewTaster, Taster};
use crate::roster::{Roster, RosterCache};
use crate::store::TasterStore;
use crate::validate::validate_assignment;

pub struct Allocator {
    store: Arc<dyn TasterStore>,
    cache: RosterCache,
}

impl Allocator {
    pub fn new(store: Arc<dyn TasterStore>) -> Self {
        Self {
            store,
            cache: RosterCache::new(),
        }
    }

    /// Current roster snapshot, fetching if the cache is stale.
    pub async fn roster(&mut self) -> Result<&Roster, AllocationError> {
        if self.cache.is_stale() {
            self.reload().await?;
        }
        Ok(self.cache.snapshot())
    }

    /// Unconditionally replace the snapshot with the store's view.
    pub async fn refresh(&mut self) -> Result<&Roster, AllocationError> {
        self.reload().await?;
        Ok(self.cache.snapshot())
    }

    /// Apply one assignment change to one taster.
    ///
    /// On conflict or store failure the cache is invalidated so the next
    /// read resynchronizes with the authoritative roster.
    pub async fn assign(
        &mut self,
        person_id: i32,
        change: AssignmentChange,
    ) -> Result<(), AllocationError> {
        self.reload().await?;
        if let Err(conflict) = validate_assignment(self.cache.snapshot(), person_id, &change) {
            self.cache.invalidate();
            tracing::debug!(person_id, with = %conflict.with, "assignment rejected");
            return Err(AllocationError::Conflict(conflict));
        }

        match self.store.update_assignment(person_id, change).await {
            Ok(()) => {
                self.reload().await?;
                Ok(())
            }
            Err(error) => {
                self.cache.invalidate();
                tracing::error!(person_id, %error, "assignment write failed");
                Err(error.into())
            }
        }
    }

    /// Unassign one dimension for everyone. Irreversible; callers are
    /// expected to confirm with the operator first.
    pub async fn clear_assignments(
        &mut self,
        kind: AssignmentKind,
    ) -> Result<usize, AllocationError> {
        match self.store.clear_assignments(kind).await {
            Ok(count) => {
                tracing::debug!(?kind, count, "bulk clear applied");
                self.reload().await?;
                Ok(count)
            }
            Err(error) => {
                self.cache.invalidate();
                tracing::error!(?kind, %error, "bulk clear failed");
                Err(error.into())
            }
        }
    }

    /// Provision a taster with empty assignments.
    pub async fn add_taster(&mut self, new: NewTaster) -> Result<Taster, AllocationError> {
        match self.store.insert(new).await {
            Ok(taster) => {
                self.reload().await?;
                Ok(taster)
            }
            Err(error) => {
                self.cache.invalidate();
                Err(error.into())
            }
        }
    }

    /// Remove a taster record, freeing all resources they held.
    pub async fn remove_taster(&mut self, person_id: i32) -> Result<(), AllocationError> {
        match self.store.delete(person_id).await {
            Ok(()) => {
                self.reload().await?;
                Ok(())
            }
            Err(error) => {
                self.cache.invalidate();
                Err(error.into())
            }
        }
    }

    async fn reload(&mut self) -> Result<(), StoreError> {
        match self.store.load_all().await {
            Ok(tasters) => {
                self.cache.replace(Roster::new(tasters));
                Ok(())
            }
            Err(error) => {
                self.cache.invalidate();
                Err(error)
            }
        }
    }
}
