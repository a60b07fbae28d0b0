//! Postgres-backed taster store.

use async_trait::async_trait;
use diesel::prelude::*;
use diesel_async::pooled_connection::deadpool::Pool;
use diesel_async::{AsyncPgConnection, RunQueryDsl};
use taster_allocation_core::{
    AssignmentChange, AssignmentKind, NewTaster, StoreError, Taster, TasterStore,
};

use crate::error::DatabaseError;
use crate::models::{NewTasterRow, SettingRow, TasterRow};
use crate::schema::{settings, tasters};

/// Key of the table-count row in the settings collection.
pub const TABLE_COUNT_KEY: &str = "table_count";

#[derive(Clone)]
pub struct PgTasterStore {
    pool: Pool<AsyncPgConnection>,
}

impl PgTasterStore {
    pub const fn new(pool: Pool<AsyncPgConnection>) -> Self {
        Self { pool }
    }

    async fn load_all_inner(&self) -> Result<Vec<Taster>, DatabaseError> {
        let mut connection = self.pool.get().await?;
        let rows: Vec<TasterRow> = tasters::table
            .select(TasterRow::as_select())
            .order(tasters::code.asc())
            .load(&mut connection)
            .await?;
        rows.into_iter().map(TryInto::try_into).collect()
    }

    async fn insert_inner(&self, new: NewTaster) -> Result<Taster, DatabaseError> {
        let mut connection = self.pool.get().await?;
        let row: TasterRow = diesel::insert_into(tasters::table)
            .values(NewTasterRow::from(new))
            .returning(TasterRow::as_returning())
            .get_result(&mut connection)
            .await?;
        row.try_into()
    }

    async fn delete_inner(&self, id: i32) -> Result<usize, DatabaseError> {
        let mut connection = self.pool.get().await?;
        Ok(diesel::delete(tasters::table.find(id))
            .execute(&mut connection)
            .await?)
    }

    async fn update_inner(
        &self,
        id: i32,
        change: AssignmentChange,
    ) -> Result<usize, DatabaseError> {
        let mut connection = self.pool.get().await?;
        let target = diesel::update(tasters::table.find(id));
        let affected = match change {
            AssignmentChange::Table(value) => {
                target
                    .set(tasters::table_number.eq(value.map(i32::from)))
                    .execute(&mut connection)
                    .await?
            }
            AssignmentChange::Seat(value) => {
                target
                    .set(tasters::seat.eq(value.map(i32::from)))
                    .execute(&mut connection)
                    .await?
            }
            AssignmentChange::Device(value) => {
                target
                    .set(tasters::device.eq(value.map(String::from)))
                    .execute(&mut connection)
                    .await?
            }
        };
        Ok(affected)
    }

    // The original client expressed "all rows" as `neq(impossible id)`; an
    // unqualified update carries the same update-all semantics here.
    async fn clear_inner(&self, kind: AssignmentKind) -> Result<usize, DatabaseError> {
        let mut connection = self.pool.get().await?;
        let target = diesel::update(tasters::table);
        let affected = match kind {
            AssignmentKind::Table => {
                target
                    .set(tasters::table_number.eq(None::<i32>))
                    .execute(&mut connection)
                    .await?
            }
            AssignmentKind::Seat => {
                target
                    .set(tasters::seat.eq(None::<i32>))
                    .execute(&mut connection)
                    .await?
            }
            AssignmentKind::Device => {
                target
                    .set(tasters::device.eq(None::<String>))
                    .execute(&mut connection)
                    .await?
            }
        };
        Ok(affected)
    }

    async fn table_count_inner(&self) -> Result<Option<u32>, DatabaseError> {
        let mut connection = self.pool.get().await?;
        let row: Option<SettingRow> = settings::table
            .find(TABLE_COUNT_KEY)
            .select(SettingRow::as_select())
            .first(&mut connection)
            .await
            .optional()?;
        Ok(row.and_then(|setting| setting.value.trim().parse().ok()))
    }
}

#[async_trait]
impl TasterStore for PgTasterStore {
    async fn load_all(&self) -> Result<Vec<Taster>, StoreError> {
        self.load_all_inner().await.map_err(Into::into)
    }

    async fn insert(&self, new: NewTaster) -> Result<Taster, StoreError> {
        self.insert_inner(new).await.map_err(Into::into)
    }

    async fn delete(&self, id: i32) -> Result<(), StoreError> {
        match self.delete_inner(id).await {
            Ok(0) => Err(StoreError::NotFound(id)),
            Ok(_) => Ok(()),
            Err(error) => Err(error.into()),
        }
    }

    async fn update_assignment(
        &self,
        id: i32,
        change: AssignmentChange,
    ) -> Result<(), StoreError> {
        match self.update_inner(id, change).await {
            Ok(0) => Err(StoreError::NotFound(id)),
            Ok(_) => Ok(()),
            Err(error) => Err(error.into()),
        }
    }

    async fn clear_assignments(&self, kind: AssignmentKind) -> Result<usize, StoreError> {
        self.clear_inner(kind).await.map_err(Into::into)
    }

    async fn load_table_count(&self) -> Result<Option<u32>, StoreError> {
        self.table_count_inner().await.map_err(Into::into)
    }
}
