//! Read-only report of dangling soft references.
//!
//! # Responsibility
//! - Surface members/events whose `club_id` or `venue_id` names no row.
//!
//! # Invariants
//! - Never modifies data; deleting a club or venue still leaves dependents
//!   in place. This report only makes the gap visible.
//! - `venue_id <= 0` means "no venue" and is not reported.

use crate::error::CoreResult;
use crate::model::event::Event;
use crate::model::member::Member;
use crate::model::{Entity, EntityId};
use crate::repo::table::SqliteTableRepository;
use rusqlite::Connection;
use serde::Serialize;

#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize)]
pub struct DanglingReferences {
    /// Member ids whose club no longer exists.
    pub members_without_club: Vec<EntityId>,
    /// Event ids whose club no longer exists.
    pub events_without_club: Vec<EntityId>,
    /// Event ids whose venue no longer exists.
    pub events_without_venue: Vec<EntityId>,
}

impl DanglingReferences {
    pub fn is_clean(&self) -> bool {
        self.members_without_club.is_empty()
            && self.events_without_club.is_empty()
            && self.events_without_venue.is_empty()
    }
}

pub struct IntegrityService<'conn> {
    conn: &'conn Connection,
}

impl<'conn> IntegrityService<'conn> {
    pub fn new(conn: &'conn Connection) -> Self {
        Self { conn }
    }

    pub fn find_dangling_references(&self) -> CoreResult<DanglingReferences> {
        let members = SqliteTableRepository::<Member>::new(self.conn);
        let events = SqliteTableRepository::<Event>::new(self.conn);
        Ok(DanglingReferences {
            members_without_club: ids(members.list_without_club()?),
            events_without_club: ids(events.list_without_club()?),
            events_without_venue: ids(events.list_without_venue()?),
        })
    }
}

fn ids<T: Entity>(records: Vec<T>) -> Vec<EntityId> {
    records.iter().map(Entity::id).collect()
}
