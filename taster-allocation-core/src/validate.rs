//! Conflict validation for proposed assignments.
//!
//! Validation runs against the freshest roster snapshot the caller holds.
//! A stale snapshot can let a conflicting write through (accepted race,
//! last writer wins); the inconsistency surfaces on the next re-fetch.

use crate::error::Conflict;
use crate::model::{AssignmentChange, Seat, TableNumber};
use crate::roster::Roster;

/// Check a proposed single-field change for `person_id` against the roster.
///
/// For table/seat changes the *effective* pair is checked: the dimension not
/// being changed keeps the person's current value. Unassigning (`None`)
/// never conflicts.
pub fn validate_assignment(
    roster: &Roster,
    person_id: i32,
    change: &AssignmentChange,
) -> Result<(), Conflict> {
    match change {
        AssignmentChange::Table(proposed) => {
            let current_seat = roster.get(person_id).and_then(|p| p.seat);
            check_pair(roster, person_id, *proposed, current_seat)
        }
        AssignmentChange::Seat(proposed) => {
            let current_table = roster.get(person_id).and_then(|p| p.table);
            check_pair(roster, person_id, current_table, *proposed)
        }
        AssignmentChange::Device(Some(proposed)) => roster
            .others(person_id)
            .find(|other| other.device.as_ref() == Some(proposed))
            .map_or(Ok(()), |other| {
                Err(Conflict {
                    with: other.full_name.clone(),
                })
            }),
        AssignmentChange::Device(None) => Ok(()),
    }
}

// Seat uniqueness only binds active tasters; device uniqueness binds all.
fn check_pair(
    roster: &Roster,
    person_id: i32,
    table: Option<TableNumber>,
    seat: Option<Seat>,
) -> Result<(), Conflict> {
    let (Some(table), Some(seat)) = (table, seat) else {
        return Ok(());
    };
    roster
        .others(person_id)
        .filter(|other| other.active)
        .find(|other| other.occupied_pair() == Some((table, seat)))
        .map_or(Ok(()), |other| {
            Err(Conflict {
                with: other.full_name.clone(),
            })
        })
}
