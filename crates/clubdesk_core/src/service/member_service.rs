//! Member-specific read queries.

use crate::error::CoreResult;
use crate::model::member::Member;
use crate::model::EntityId;
use crate::service::crud_service::EntityService;

impl EntityService<'_, Member> {
    /// All members whose `club_id` equals `club_id`; empty when none.
    pub fn find_members_by_club(&self, club_id: EntityId) -> CoreResult<Vec<Member>> {
        self.repo().list_by_club(club_id)
    }
}
