//! Seat, table and tablet allocation for competition tasters.
//!
//! The authoritative roster lives in a remote store reached through the
//! [`store::TasterStore`] contract; everything here works on advisory
//! snapshots of it. Validation is optimistic: it checks the freshest
//! snapshot, writes a single field, and re-fetches, accepting the
//! last-writer-wins race described in the concurrency notes of each module.

pub mod allocator;
pub mod directory;
pub mod error;
pub mod model;
pub mod options;
pub mod roster;
pub mod store;
pub mod summary;
pub mod validate;

pub use allocator::Allocator;
pub use directory::Directory;
pub use error::{AllocationError, Conflict, StoreError};
pub use model::{
    AssignmentChange, AssignmentKind, DeviceId, DomainError, NewTaster, Role, Seat, TableNumber,
    Taster, DEVICE_SLOT_COUNT, SEATS_PER_TABLE,
};
pub use roster::{Roster, RosterCache};
pub use store::TasterStore;
pub use summary::{summarize, OccupancySummary, TableOccupancy};
