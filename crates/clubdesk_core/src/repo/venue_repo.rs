//! `Venues` table mapping.

use crate::model::venue::Venue;
use crate::repo::table::{optional_text_value, text_value, SqliteTableRepository, TableRecord};
use rusqlite::types::Value;
use rusqlite::Row;

pub type VenueRepository<'conn> = SqliteTableRepository<'conn, Venue>;

impl TableRecord for Venue {
    const TABLE: &'static str = "Venues";
    const ID_COLUMN: &'static str = "venue_id";
    const COLUMNS: &'static [&'static str] = &["venue_id", "venue_name", "location"];

    fn to_values(&self) -> Vec<Value> {
        vec![
            Value::Integer(self.id),
            text_value(&self.name),
            optional_text_value(self.location.as_deref()),
        ]
    }

    fn from_row(row: &Row<'_>) -> rusqlite::Result<Self> {
        Ok(Self {
            id: row.get("venue_id")?,
            name: row.get("venue_name")?,
            location: row.get("location")?,
        })
    }
}
