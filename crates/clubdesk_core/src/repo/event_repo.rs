//! `Events` table mapping and event-specific queries.
//!
//! # Invariants
//! - `event_date` is stored as `YYYY-MM-DD` text, so text comparison is
//!   calendar comparison.

use crate::error::CoreResult;
use crate::model::event::Event;
use crate::model::EntityId;
use crate::repo::table::{
    date_value, optional_text_value, text_value, SqliteTableRepository, TableRecord,
};
use chrono::NaiveDate;
use rusqlite::types::Value;
use rusqlite::Row;

pub type EventRepository<'conn> = SqliteTableRepository<'conn, Event>;

impl TableRecord for Event {
    const TABLE: &'static str = "Events";
    const ID_COLUMN: &'static str = "event_id";
    const COLUMNS: &'static [&'static str] = &[
        "event_id",
        "event_name",
        "description",
        "club_id",
        "event_date",
        "venue_id",
    ];

    fn to_values(&self) -> Vec<Value> {
        vec![
            Value::Integer(self.id),
            text_value(&self.name),
            optional_text_value(self.description.as_deref()),
            Value::Integer(self.club_id),
            self.event_date.map_or(Value::Null, date_value),
            Value::Integer(self.venue_id),
        ]
    }

    fn from_row(row: &Row<'_>) -> rusqlite::Result<Self> {
        Ok(Self {
            id: row.get("event_id")?,
            name: row.get("event_name")?,
            description: row.get("description")?,
            club_id: row.get("club_id")?,
            event_date: row.get("event_date")?,
            venue_id: row.get("venue_id")?,
        })
    }
}

impl SqliteTableRepository<'_, Event> {
    pub fn list_by_club(&self, club_id: EntityId) -> CoreResult<Vec<Event>> {
        self.list_filtered("WHERE club_id = ?1", [club_id], || {
            format!("error finding events by club {club_id}")
        })
    }

    /// Events dated on/after `from`, ascending by date then id.
    pub fn list_from_date(&self, from: NaiveDate) -> CoreResult<Vec<Event>> {
        self.list_filtered(
            "WHERE event_date >= ?1 ORDER BY event_date ASC, event_id ASC",
            [date_value(from)],
            || "error finding upcoming events".to_string(),
        )
    }

    pub fn count_from_date(&self, from: NaiveDate) -> CoreResult<u64> {
        self.count_filtered("WHERE event_date >= ?1", [date_value(from)])
    }

    /// Events whose `club_id` names no existing club.
    pub fn list_without_club(&self) -> CoreResult<Vec<Event>> {
        self.list_filtered(
            "WHERE NOT EXISTS (SELECT 1 FROM Clubs c WHERE c.club_id = Events.club_id)",
            [],
            || "error finding events without club".to_string(),
        )
    }

    /// Events with a positive `venue_id` that names no existing venue.
    pub fn list_without_venue(&self) -> CoreResult<Vec<Event>> {
        self.list_filtered(
            "WHERE venue_id > 0
               AND NOT EXISTS (SELECT 1 FROM Venues v WHERE v.venue_id = Events.venue_id)",
            [],
            || "error finding events without venue".to_string(),
        )
    }
}
