//! `ClubMembers` table mapping and member-specific queries.

use crate::error::CoreResult;
use crate::model::member::Member;
use crate::model::EntityId;
use crate::repo::table::{
    date_value, optional_text_value, text_value, SqliteTableRepository, TableRecord,
};
use rusqlite::types::Value;
use rusqlite::Row;

pub type MemberRepository<'conn> = SqliteTableRepository<'conn, Member>;

impl TableRecord for Member {
    const TABLE: &'static str = "ClubMembers";
    const ID_COLUMN: &'static str = "member_id";
    const COLUMNS: &'static [&'static str] = &[
        "member_id",
        "member_name",
        "email",
        "join_date",
        "club_id",
        "phone",
    ];

    fn to_values(&self) -> Vec<Value> {
        vec![
            Value::Integer(self.id),
            text_value(&self.name),
            text_value(&self.email),
            date_value(self.join_date),
            Value::Integer(self.club_id),
            optional_text_value(self.phone.as_deref()),
        ]
    }

    fn from_row(row: &Row<'_>) -> rusqlite::Result<Self> {
        Ok(Self {
            id: row.get("member_id")?,
            name: row.get("member_name")?,
            email: row.get("email")?,
            join_date: row.get("join_date")?,
            club_id: row.get("club_id")?,
            phone: row.get("phone")?,
        })
    }
}

impl SqliteTableRepository<'_, Member> {
    pub fn list_by_club(&self, club_id: EntityId) -> CoreResult<Vec<Member>> {
        self.list_filtered("WHERE club_id = ?1", [club_id], || {
            format!("error finding members by club {club_id}")
        })
    }

    /// Members whose `club_id` names no existing club.
    pub fn list_without_club(&self) -> CoreResult<Vec<Member>> {
        self.list_filtered(
            "WHERE NOT EXISTS (SELECT 1 FROM Clubs c WHERE c.club_id = ClubMembers.club_id)",
            [],
            || "error finding members without club".to_string(),
        )
    }
}
