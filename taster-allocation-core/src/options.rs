//! Selectable-option derivation for assignment editors.
//!
//! Pure functions of the roster. The excluded person's own current value is
//! never filtered out, so an editing UI always shows the current selection.

use crate::model::{DeviceId, Seat, TableNumber};
use crate::roster::Roster;

/// Seats still selectable at `table` when editing `person_id`.
pub fn available_seats(roster: &Roster, table: TableNumber, person_id: i32) -> Vec<Seat> {
    let taken: Vec<Seat> = roster
        .others(person_id)
        .filter(|other| other.active && other.table == Some(table))
        .filter_map(|other| other.seat)
        .collect();
    Seat::all().filter(|seat| !taken.contains(seat)).collect()
}

/// Device slots still selectable when editing `person_id`.
pub fn available_devices(
    roster: &Roster,
    slots: &[DeviceId],
    person_id: i32,
) -> Vec<DeviceId> {
    let taken: Vec<&DeviceId> = roster
        .others(person_id)
        .filter_map(|other| other.device.as_ref())
        .collect();
    slots
        .iter()
        .filter(|slot| !taken.contains(slot))
        .cloned()
        .collect()
}
