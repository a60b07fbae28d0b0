//! Roster snapshot and its staleness-tracking cache.
//!
//! The store owns the data; a [`Roster`] is only an advisory snapshot. The
//! cache is replaced wholesale after every mutation outcome, never merged,
//! so the local view lags the authoritative store by at most one round trip.

use crate::model::Taster;

/// Immutable snapshot of all taster records, ordered by display code.
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct Roster {
    tasters: Vec<Taster>,
}

impl Roster {
    pub fn new(mut tasters: Vec<Taster>) -> Self {
        tasters.sort_by(|a, b| a.code.cmp(&b.code));
        Self { tasters }
    }

    pub fn iter(&self) -> impl Iterator<Item = &Taster> {
        self.tasters.iter()
    }

    pub fn len(&self) -> usize {
        self.tasters.len()
    }

    pub fn is_empty(&self) -> bool {
        self.tasters.is_empty()
    }

    pub fn get(&self, id: i32) -> Option<&Taster> {
        self.tasters.iter().find(|t| t.id == id)
    }

    /// Everyone except the given id, for conflict scans.
    pub fn others(&self, excluded_id: i32) -> impl Iterator<Item = &Taster> {
        self.tasters.iter().filter(move |t| t.id != excluded_id)
    }
}

impl<'a> IntoIterator for &'a Roster {
    type IntoIter = std::slice::Iter<'a, Taster>;
    type Item = &'a Taster;

    fn into_iter(self) -> Self::IntoIter {
        self.tasters.iter()
    }
}

/// Read-through cache over the roster with an explicit invalidation
/// contract: `replace` after a confirmed read, `invalidate` after any
/// conflict or failed write.
#[derive(Debug, Default)]
pub struct RosterCache {
    snapshot: Roster,
    stale: bool,
}

impl RosterCache {
    pub fn new() -> Self {
        Self {
            snapshot: Roster::default(),
            // nothing fetched yet
            stale: true,
        }
    }

    pub const fn is_stale(&self) -> bool {
        self.stale
    }

    pub fn snapshot(&self) -> &Roster {
        &self.snapshot
    }

    pub fn replace(&mut self, roster: Roster) {
        self.snapshot = roster;
        self.stale = false;
    }

    pub fn invalidate(&mut self) {
        self.stale = true;
    }
}
