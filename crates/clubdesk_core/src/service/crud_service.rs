//! Generic CRUD contract and its validating implementation.
//!
//! # Responsibility
//! - Define the uniform `CrudService` contract shared by every entity kind.
//! - Gate every write on `Entity::validate()` before touching the store.
//!
//! # Invariants
//! - An invalid entity yields `ErrorKind::Validation` and issues no statement.
//! - Missing rows are `None`/`false`, never errors.
//! - Services keep no state between calls besides the borrowed connection.

use crate::error::{CoreError, CoreResult, ErrorKind};
use crate::model::club::Club;
use crate::model::event::Event;
use crate::model::member::Member;
use crate::model::venue::Venue;
use crate::model::EntityId;
use crate::repo::table::{SqliteTableRepository, TableRecord};
use log::{debug, warn};
use rusqlite::Connection;

/// Uniform persistence contract over entity type `T` keyed by `Id`.
pub trait CrudService<T, Id> {
    /// Returns `None` when no row matches.
    fn find_by_id(&self, id: Id) -> CoreResult<Option<T>>;
    /// Returns an empty list for an empty table.
    fn find_all(&self) -> CoreResult<Vec<T>>;
    /// Inserts a valid entity and returns it as persisted.
    fn save(&self, entity: &T) -> CoreResult<T>;
    /// Returns `false` when the identifier does not exist.
    fn update(&self, entity: &T) -> CoreResult<bool>;
    /// Returns `false` when nothing matched.
    fn delete(&self, id: Id) -> CoreResult<bool>;
    fn count(&self) -> CoreResult<u64>;
}

/// `CrudService` implementation for any mapped entity kind.
pub struct EntityService<'conn, T> {
    repo: SqliteTableRepository<'conn, T>,
}

pub type ClubService<'conn> = EntityService<'conn, Club>;
pub type MemberService<'conn> = EntityService<'conn, Member>;
pub type EventService<'conn> = EntityService<'conn, Event>;
pub type VenueService<'conn> = EntityService<'conn, Venue>;

impl<'conn, T: TableRecord> EntityService<'conn, T> {
    /// Creates a service over a connection owned by the caller.
    pub fn new(conn: &'conn Connection) -> Self {
        Self {
            repo: SqliteTableRepository::new(conn),
        }
    }

    pub(crate) fn repo(&self) -> &SqliteTableRepository<'conn, T> {
        &self.repo
    }

    fn ensure_valid(&self, entity: &T, op: &'static str) -> CoreResult<()> {
        entity.validate().map_err(|err| {
            warn!(
                "event=entity_write module=service status=rejected op={op} kind={} id={} error_code=validation_failed",
                T::KIND,
                entity.id()
            );
            CoreError::with_cause(
                ErrorKind::Validation,
                format!("invalid {} data", T::KIND),
                err,
            )
        })
    }
}

impl<T: TableRecord> CrudService<T, EntityId> for EntityService<'_, T> {
    fn find_by_id(&self, id: EntityId) -> CoreResult<Option<T>> {
        self.repo.get(id)
    }

    fn find_all(&self) -> CoreResult<Vec<T>> {
        self.repo.list()
    }

    fn save(&self, entity: &T) -> CoreResult<T> {
        self.ensure_valid(entity, "save")?;

        let affected = self.repo.insert(entity)?;
        if affected == 0 {
            return Err(CoreError::storage(format!(
                "creating {} failed, no rows affected",
                T::KIND
            )));
        }

        debug!(
            "event=entity_write module=service status=ok op=save kind={} id={}",
            T::KIND,
            entity.id()
        );
        Ok(entity.clone())
    }

    fn update(&self, entity: &T) -> CoreResult<bool> {
        self.ensure_valid(entity, "update")?;

        let affected = self.repo.update(entity)?;
        debug!(
            "event=entity_write module=service status=ok op=update kind={} id={} affected={affected}",
            T::KIND,
            entity.id()
        );
        Ok(affected > 0)
    }

    fn delete(&self, id: EntityId) -> CoreResult<bool> {
        let affected = self.repo.delete(id)?;
        debug!(
            "event=entity_write module=service status=ok op=delete kind={} id={id} affected={affected}",
            T::KIND
        );
        Ok(affected > 0)
    }

    fn count(&self) -> CoreResult<u64> {
        self.repo.count()
    }
}
