use diesel::prelude::*;
use taster_allocation_core::{DeviceId, NewTaster, Role, Seat, TableNumber, Taster};

use crate::error::DatabaseError;
use crate::schema::{settings, tasters};

#[derive(Queryable, Selectable)]
#[diesel(table_name = tasters)]
#[diesel(check_for_backend(diesel::pg::Pg))]
pub struct TasterRow {
    pub id: i32,
    pub code: String,
    pub full_name: String,
    pub country: String,
    pub email: String,
    pub active: bool,
    pub role: String,
    pub table_number: Option<i32>,
    pub seat: Option<i32>,
    pub device: Option<String>,
}

impl TryFrom<TasterRow> for Taster {
    type Error = DatabaseError;

    fn try_from(row: TasterRow) -> Result<Self, Self::Error> {
        let Some(role) = Role::parse(&row.role) else {
            return Err(DatabaseError::UnknownRole(row.role));
        };
        Ok(Self {
            id: row.id,
            code: row.code,
            full_name: row.full_name,
            country: row.country,
            email: row.email,
            active: row.active,
            role,
            table: row.table_number.map(TableNumber::new).transpose()?,
            seat: row.seat.map(Seat::new).transpose()?,
            device: row.device.as_deref().map(DeviceId::new).transpose()?,
        })
    }
}

#[derive(Insertable)]
#[diesel(table_name = tasters)]
pub struct NewTasterRow {
    pub code: String,
    pub full_name: String,
    pub country: String,
    pub email: String,
    pub active: bool,
    pub role: String,
}

impl From<NewTaster> for NewTasterRow {
    fn from(new: NewTaster) -> Self {
        Self {
            code: new.code,
            full_name: new.full_name,
            country: new.country,
            email: new.email,
            active: true,
            role: new.role.as_str().to_owned(),
        }
    }
}

#[derive(Queryable, Selectable)]
#[diesel(table_name = settings)]
#[diesel(check_for_backend(diesel::pg::Pg))]
pub struct SettingRow {
    pub key: String,
    pub value: String,
}
