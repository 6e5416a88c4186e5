//! Dashboard counters across all entity kinds.

use crate::error::CoreResult;
use crate::model::club::Club;
use crate::model::event::Event;
use crate::model::member::Member;
use crate::model::venue::Venue;
use crate::repo::table::SqliteTableRepository;
use crate::service::event_service::today;
use chrono::NaiveDate;
use rusqlite::Connection;
use serde::Serialize;

/// Row counts shown on the dashboard.
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq, Serialize)]
pub struct DashboardStats {
    pub clubs: u64,
    pub members: u64,
    pub events: u64,
    pub venues: u64,
    /// Events dated on/after the reference day.
    pub upcoming_events: u64,
}

pub struct StatsService<'conn> {
    conn: &'conn Connection,
}

impl<'conn> StatsService<'conn> {
    pub fn new(conn: &'conn Connection) -> Self {
        Self { conn }
    }

    /// Counts every table, using the local date for upcoming events.
    pub fn dashboard_stats(&self) -> CoreResult<DashboardStats> {
        self.dashboard_stats_on(today())
    }

    /// Counts every table with an explicit reference day.
    ///
    /// Each counter is its own statement; counters are not a snapshot.
    pub fn dashboard_stats_on(&self, today: NaiveDate) -> CoreResult<DashboardStats> {
        let events = SqliteTableRepository::<Event>::new(self.conn);
        Ok(DashboardStats {
            clubs: SqliteTableRepository::<Club>::new(self.conn).count()?,
            members: SqliteTableRepository::<Member>::new(self.conn).count()?,
            events: events.count()?,
            venues: SqliteTableRepository::<Venue>::new(self.conn).count()?,
            upcoming_events: events.count_from_date(today)?,
        })
    }
}
