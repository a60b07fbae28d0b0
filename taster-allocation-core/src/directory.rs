//! Resource directory: how many tables exist and which device slots are
//! assignable. Loading fails soft — the allocator stays usable with the
//! defaults when the settings collection is unreachable.

use crate::model::{DeviceId, DEVICE_SLOT_COUNT};
use crate::store::TasterStore;

pub const DEFAULT_TABLE_COUNT: u32 = 5;

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct Directory {
    table_count: u32,
}

impl Default for Directory {
    fn default() -> Self {
        Self {
            table_count: DEFAULT_TABLE_COUNT,
        }
    }
}

impl Directory {
    /// Read the configured table count from the store. Any failure, a
    /// missing row, or a zero count falls back to the defaults.
    pub async fn load(store: &dyn TasterStore) -> Self {
        match store.load_table_count().await {
            Ok(Some(count)) if count > 0 => Self { table_count: count },
            Ok(_) => {
                tracing::warn!("table count not configured, using default {DEFAULT_TABLE_COUNT}");
                Self::default()
            }
            Err(error) => {
                tracing::warn!(%error, "settings unavailable, using default table count");
                Self::default()
            }
        }
    }

    pub const fn with_table_count(table_count: u32) -> Self {
        Self { table_count }
    }

    pub const fn table_count(&self) -> u32 {
        self.table_count
    }

    /// The fixed tablet pool, `"1"` through `"25"`.
    pub fn device_slots(&self) -> Vec<DeviceId> {
        (1..=DEVICE_SLOT_COUNT).map(DeviceId::from).collect()
    }
}
