//! Event-specific read queries.
//!
//! # Invariants
//! - Upcoming events are dated on/after the reference day and ordered
//!   ascending by date (ties by id).

use crate::error::CoreResult;
use crate::model::event::Event;
use crate::model::EntityId;
use crate::service::crud_service::EntityService;
use chrono::{Local, NaiveDate};

impl EntityService<'_, Event> {
    /// All events whose `club_id` equals `club_id`; empty when none.
    pub fn find_events_by_club(&self, club_id: EntityId) -> CoreResult<Vec<Event>> {
        self.repo().list_by_club(club_id)
    }

    /// Events dated today or later, using the local calendar date.
    pub fn find_upcoming_events(&self) -> CoreResult<Vec<Event>> {
        self.find_upcoming_events_from(today())
    }

    /// Events dated on/after `today`, ascending by date.
    pub fn find_upcoming_events_from(&self, today: NaiveDate) -> CoreResult<Vec<Event>> {
        self.repo().list_from_date(today)
    }
}

pub(crate) fn today() -> NaiveDate {
    Local::now().date_naive()
}
