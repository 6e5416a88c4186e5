//! `Clubs` table mapping.

use crate::model::club::Club;
use crate::repo::table::{optional_text_value, text_value, SqliteTableRepository, TableRecord};
use rusqlite::types::Value;
use rusqlite::Row;

pub type ClubRepository<'conn> = SqliteTableRepository<'conn, Club>;

impl TableRecord for Club {
    const TABLE: &'static str = "Clubs";
    const ID_COLUMN: &'static str = "club_id";
    const COLUMNS: &'static [&'static str] = &["club_id", "club_name", "club_description"];

    fn to_values(&self) -> Vec<Value> {
        vec![
            Value::Integer(self.id),
            text_value(&self.name),
            optional_text_value(self.description.as_deref()),
        ]
    }

    fn from_row(row: &Row<'_>) -> rusqlite::Result<Self> {
        Ok(Self {
            id: row.get("club_id")?,
            name: row.get("club_name")?,
            description: row.get("club_description")?,
        })
    }
}
