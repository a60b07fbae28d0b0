//! Domain types for the tasting roster.
//!
//! The three assignment dimensions (table, seat, device) are newtypes whose
//! constructors enforce the representable domain, so an out-of-range value
//! can never reach the store.

use serde::{Deserialize, Serialize};

/// Every table has exactly five seats. This is deliberately independent of
/// the configured table count.
pub const SEATS_PER_TABLE: i32 = 5;

/// Tablet identifiers come from a fixed pool numbered 1..=25.
pub const DEVICE_SLOT_COUNT: u32 = 25;

#[derive(thiserror::Error, Debug, Clone, PartialEq, Eq)]
pub enum DomainError {
    #[error("seat {0} is outside 1..={SEATS_PER_TABLE}")]
    SeatOutOfRange(i32),
    #[error("table number {0} is not positive")]
    TableNumberOutOfRange(i32),
    #[error("device identifier is empty")]
    EmptyDeviceId,
}

/// Seat position at a table, 1..=5.
#[derive(Debug, Clone, Copy, PartialEq, Eq, PartialOrd, Ord, Hash, Serialize, Deserialize)]
#[serde(try_from = "i32", into = "i32")]
pub struct Seat(i32);

impl Seat {
    pub fn new(position: i32) -> Result<Self, DomainError> {
        if (1..=SEATS_PER_TABLE).contains(&position) {
            Ok(Self(position))
        } else {
            Err(DomainError::SeatOutOfRange(position))
        }
    }

    pub const fn get(self) -> i32 {
        self.0
    }

    /// All seats of a table, in position order.
    pub fn all() -> impl Iterator<Item = Self> {
        (1..=SEATS_PER_TABLE).map(Self)
    }
}

impl TryFrom<i32> for Seat {
    type Error = DomainError;

    fn try_from(value: i32) -> Result<Self, Self::Error> {
        Self::new(value)
    }
}

impl From<Seat> for i32 {
    fn from(value: Seat) -> Self {
        value.0
    }
}

impl core::fmt::Display for Seat {
    fn fmt(&self, f: &mut core::fmt::Formatter<'_>) -> core::fmt::Result {
        write!(f, "{}", self.0)
    }
}

/// Positive table number. Whether it refers to an existing table is decided
/// by the directory's table count, not here.
#[derive(Debug, Clone, Copy, PartialEq, Eq, PartialOrd, Ord, Hash, Serialize, Deserialize)]
#[serde(try_from = "i32", into = "i32")]
pub struct TableNumber(i32);

impl TableNumber {
    pub fn new(number: i32) -> Result<Self, DomainError> {
        if number > 0 {
            Ok(Self(number))
        } else {
            Err(DomainError::TableNumberOutOfRange(number))
        }
    }

    pub const fn get(self) -> i32 {
        self.0
    }
}

impl TryFrom<i32> for TableNumber {
    type Error = DomainError;

    fn try_from(value: i32) -> Result<Self, Self::Error> {
        Self::new(value)
    }
}

impl From<TableNumber> for i32 {
    fn from(value: TableNumber) -> Self {
        value.0
    }
}

impl core::fmt::Display for TableNumber {
    fn fmt(&self, f: &mut core::fmt::Formatter<'_>) -> core::fmt::Result {
        write!(f, "{}", self.0)
    }
}

/// Tablet identifier. Trimmed on construction; comparison is exact and
/// case-sensitive.
#[derive(Debug, Clone, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(try_from = "String", into = "String")]
pub struct DeviceId(String);

impl DeviceId {
    pub fn new(raw: &str) -> Result<Self, DomainError> {
        let trimmed = raw.trim();
        if trimmed.is_empty() {
            Err(DomainError::EmptyDeviceId)
        } else {
            Ok(Self(trimmed.to_owned()))
        }
    }

    pub fn as_str(&self) -> &str {
        &self.0
    }
}

impl TryFrom<String> for DeviceId {
    type Error = DomainError;

    fn try_from(value: String) -> Result<Self, Self::Error> {
        Self::new(&value)
    }
}

impl From<DeviceId> for String {
    fn from(value: DeviceId) -> Self {
        value.0
    }
}

impl From<u32> for DeviceId {
    fn from(slot: u32) -> Self {
        Self(slot.to_string())
    }
}

impl core::fmt::Display for DeviceId {
    fn fmt(&self, f: &mut core::fmt::Formatter<'_>) -> core::fmt::Result {
        f.write_str(&self.0)
    }
}

/// Role tag of a taster. Presiding tasters get distinguished display
/// treatment per table but no extra permissions here.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum Role {
    Ordinary,
    Presiding,
}

impl Role {
    pub const fn as_str(self) -> &'static str {
        match self {
            Self::Ordinary => "ordinary",
            Self::Presiding => "presiding",
        }
    }

    pub fn parse(raw: &str) -> Option<Self> {
        match raw {
            "ordinary" => Some(Self::Ordinary),
            "presiding" => Some(Self::Presiding),
            _ => None,
        }
    }
}

/// A judge on the roster, with up to three resource assignments.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct Taster {
    pub id: i32,
    /// Short display code, also the roster sort key.
    pub code: String,
    pub full_name: String,
    pub country: String,
    pub email: String,
    pub active: bool,
    pub role: Role,
    pub table: Option<TableNumber>,
    pub seat: Option<Seat>,
    pub device: Option<DeviceId>,
}

impl Taster {
    /// The (table, seat) pair this taster occupies, if fully assigned.
    pub fn occupied_pair(&self) -> Option<(TableNumber, Seat)> {
        self.table.zip(self.seat)
    }
}

/// Payload for provisioning a new taster. Assignments start empty.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct NewTaster {
    pub code: String,
    pub full_name: String,
    pub country: String,
    pub email: String,
    pub role: Role,
}

/// One proposed change to a single assignment dimension. `None` means
/// "unassign", which never conflicts with anything.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum AssignmentChange {
    Table(Option<TableNumber>),
    Seat(Option<Seat>),
    Device(Option<DeviceId>),
}

impl AssignmentChange {
    pub const fn kind(&self) -> AssignmentKind {
        match self {
            Self::Table(_) => AssignmentKind::Table,
            Self::Seat(_) => AssignmentKind::Seat,
            Self::Device(_) => AssignmentKind::Device,
        }
    }
}

/// An assignment dimension, used for bulk resets.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum AssignmentKind {
    Table,
    Seat,
    Device,
}
