//! Derived occupancy views over a roster snapshot. Pure, no store access.

use crate::model::{Role, Seat, Taster};
use crate::roster::Roster;

#[derive(Debug, Clone, PartialEq, Eq)]
pub struct TableOccupancy {
    pub table: i32,
    /// Presiding taster first, then by display code.
    pub occupants: Vec<Taster>,
    pub occupied_seats: usize,
    /// Every one of the five seats is taken. Independent of the configured
    /// table count.
    pub is_complete: bool,
}

#[derive(Debug, Clone, PartialEq, Eq)]
pub struct OccupancySummary {
    pub tables: Vec<TableOccupancy>,
    pub complete_count: usize,
    pub partial_count: usize,
    pub empty_count: usize,
    pub assigned_devices: usize,
}

/// Summarize table occupancy for tables `1..=table_count`.
pub fn summarize(roster: &Roster, table_count: u32) -> OccupancySummary {
    let seats_per_table = Seat::all().count();
    let tables: Vec<TableOccupancy> = (1..=i64::from(table_count))
        .filter_map(|n| i32::try_from(n).ok())
        .map(|table| {
            let mut occupants: Vec<Taster> = roster
                .iter()
                .filter(|t| t.active && t.table.map(i32::from) == Some(table))
                .cloned()
                .collect();
            occupants.sort_by_key(|t| (t.role != Role::Presiding, t.code.clone()));
            let occupied_seats = occupants.iter().filter(|t| t.seat.is_some()).count();
            TableOccupancy {
                table,
                occupants,
                occupied_seats,
                is_complete: occupied_seats == seats_per_table,
            }
        })
        .collect();

    let complete_count = tables.iter().filter(|t| t.is_complete).count();
    let empty_count = tables.iter().filter(|t| t.occupants.is_empty()).count();
    let partial_count = tables.len() - complete_count - empty_count;
    let assigned_devices = roster.iter().filter(|t| t.device.is_some()).count();

    OccupancySummary {
        tables,
        complete_count,
        partial_count,
        empty_count,
        assigned_devices,
    }
}

#[cfg(test)]
mod tests {
    use super::summarize;
    use crate::model::{DeviceId, Role, Seat, TableNumber, Taster};
    use crate::roster::Roster;

    fn seated(id: i32, code: &str, table: i32, seat: i32) -> Taster {
        Taster {
            id,
            code: code.to_owned(),
            full_name: format!("Taster {code}"),
            country: "ES".to_owned(),
            email: format!("{code}@example.org"),
            active: true,
            role: Role::Ordinary,
            table: Some(TableNumber::new(table).unwrap()),
            seat: Some(Seat::new(seat).unwrap()),
            device: None,
        }
    }

    #[test]
    fn full_table_is_complete_until_someone_leaves() {
        let mut tasters: Vec<Taster> = (1..=5)
            .map(|s| seated(s, &format!("C-{s}"), 1, s))
            .collect();
        let summary = summarize(&Roster::new(tasters.clone()), 3);
        assert!(summary.tables[0].is_complete);
        assert_eq!(summary.tables[0].occupied_seats, 5);
        assert_eq!(summary.complete_count, 1);
        assert_eq!(summary.partial_count, 0);
        assert_eq!(summary.empty_count, 2);

        tasters.pop();
        let summary = summarize(&Roster::new(tasters), 3);
        assert!(!summary.tables[0].is_complete);
        assert_eq!(summary.tables[0].occupied_seats, 4);
        assert_eq!(summary.complete_count, 0);
        assert_eq!(summary.partial_count, 1);
    }

    #[test]
    fn all_tables_empty_after_clearing() {
        let summary = summarize(&Roster::default(), 5);
        assert_eq!(summary.empty_count, 5);
        assert_eq!(summary.complete_count, 0);
        assert_eq!(summary.partial_count, 0);
        assert_eq!(summary.tables.len(), 5);
    }

    #[test]
    fn presiding_taster_listed_first() {
        let mut president = seated(1, "C-9", 1, 3);
        president.role = Role::Presiding;
        let roster = Roster::new(vec![seated(2, "C-1", 1, 1), president, seated(3, "C-2", 1, 2)]);
        let summary = summarize(&roster, 1);
        let codes: Vec<&str> = summary.tables[0]
            .occupants
            .iter()
            .map(|t| t.code.as_str())
            .collect();
        assert_eq!(codes, vec!["C-9", "C-1", "C-2"]);
    }

    #[test]
    fn inactive_tasters_do_not_occupy() {
        let mut ghost = seated(1, "C-1", 1, 1);
        ghost.active = false;
        let summary = summarize(&Roster::new(vec![ghost]), 1);
        assert!(summary.tables[0].occupants.is_empty());
        assert_eq!(summary.tables[0].occupied_seats, 0);
    }

    #[test]
    fn device_count_tracks_assignments() {
        let mut one = seated(1, "C-1", 1, 1);
        one.device = Some(DeviceId::new("4").unwrap());
        let two = seated(2, "C-2", 1, 2);
        let summary = summarize(&Roster::new(vec![one, two]), 1);
        assert_eq!(summary.assigned_devices, 1);
    }
}
