//! In-memory taster store for tests and local development.

use async_trait::async_trait;
use taster_allocation_core::{
    AssignmentChange, AssignmentKind, NewTaster, StoreError, Taster, TasterStore,
};
use tokio::sync::RwLock;

#[derive(Default)]
struct MemoryInner {
    tasters: Vec<Taster>,
    next_id: i32,
    table_count: Option<u32>,
}

#[derive(Default)]
pub struct MemoryTasterStore {
    inner: RwLock<MemoryInner>,
}

impl MemoryTasterStore {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn with_table_count(table_count: u32) -> Self {
        Self {
            inner: RwLock::new(MemoryInner {
                table_count: Some(table_count),
                ..MemoryInner::default()
            }),
        }
    }

    pub async fn set_table_count(&self, table_count: Option<u32>) {
        self.inner.write().await.table_count = table_count;
    }
}

#[async_trait]
impl TasterStore for MemoryTasterStore {
    async fn load_all(&self) -> Result<Vec<Taster>, StoreError> {
        let inner = self.inner.read().await;
        let mut tasters = inner.tasters.clone();
        tasters.sort_by(|a, b| a.code.cmp(&b.code));
        Ok(tasters)
    }

    async fn insert(&self, new: NewTaster) -> Result<Taster, StoreError> {
        let mut inner = self.inner.write().await;
        inner.next_id += 1;
        let taster = Taster {
            id: inner.next_id,
            code: new.code,
            full_name: new.full_name,
            country: new.country,
            email: new.email,
            active: true,
            role: new.role,
            table: None,
            seat: None,
            device: None,
        };
        inner.tasters.push(taster.clone());
        Ok(taster)
    }

    async fn delete(&self, id: i32) -> Result<(), StoreError> {
        let mut inner = self.inner.write().await;
        let before = inner.tasters.len();
        inner.tasters.retain(|t| t.id != id);
        if inner.tasters.len() == before {
            return Err(StoreError::NotFound(id));
        }
        Ok(())
    }

    async fn update_assignment(
        &self,
        id: i32,
        change: AssignmentChange,
    ) -> Result<(), StoreError> {
        let mut inner = self.inner.write().await;
        let taster = inner
            .tasters
            .iter_mut()
            .find(|t| t.id == id)
            .ok_or(StoreError::NotFound(id))?;
        match change {
            AssignmentChange::Table(value) => taster.table = value,
            AssignmentChange::Seat(value) => taster.seat = value,
            AssignmentChange::Device(value) => taster.device = value,
        }
        Ok(())
    }

    async fn clear_assignments(&self, kind: AssignmentKind) -> Result<usize, StoreError> {
        let mut inner = self.inner.write().await;
        // update-all semantics, like the SQL adapter
        let affected = inner.tasters.len();
        for taster in &mut inner.tasters {
            match kind {
                AssignmentKind::Table => taster.table = None,
                AssignmentKind::Seat => taster.seat = None,
                AssignmentKind::Device => taster.device = None,
            }
        }
        Ok(affected)
    }

    async fn load_table_count(&self) -> Result<Option<u32>, StoreError> {
        Ok(self.inner.read().await.table_count)
    }
}
