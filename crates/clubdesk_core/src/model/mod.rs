//! Domain records for clubs, members, events and venues.
//!
//! # Responsibility
//! - Define the plain data shape of every entity kind.
//! - Provide pure self-validation consulted before every write.
//!
//! # Invariants
//! - Identity is the caller-assigned `id`; the store never generates it.
//! - `validate()` is side-effect free and performs no I/O.
//! - `club_id`/`venue_id` fields are soft references; nothing here checks
//!   that the referenced row exists.

use std::error::Error;
use std::fmt::{Debug, Display, Formatter};

pub mod club;
pub mod event;
pub mod member;
pub mod venue;

/// Caller-assigned positive identifier shared by all entity kinds.
pub type EntityId = i64;

/// Common contract of every persisted domain record.
pub trait Entity: Clone + Debug + Display {
    /// Lowercase kind label (`club|member|event|venue`).
    const KIND: &'static str;

    fn id(&self) -> EntityId;

    /// Checks the entity invariant and reports the first violated rule.
    fn validate(&self) -> Result<(), EntityValidationError>;

    /// Single gate consulted by services before any write.
    fn is_valid(&self) -> bool {
        self.validate().is_ok()
    }
}

/// Presentation helpers consumed by list/detail views.
pub trait Displayable {
    fn display_name(&self) -> &str;
    fn display_description(&self) -> String;
}

/// First violated entity rule found by `Entity::validate`.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum EntityValidationError {
    NonPositiveId { kind: &'static str, id: EntityId },
    EmptyName { kind: &'static str },
    InvalidEmail,
    InvalidPhone,
    NonPositiveClubId { kind: &'static str, club_id: EntityId },
    MissingEventDate,
}

impl Display for EntityValidationError {
    fn fmt(&self, f: &mut Formatter<'_>) -> std::fmt::Result {
        match self {
            Self::NonPositiveId { kind, id } => {
                write!(f, "{kind} id must be positive, got {id}")
            }
            Self::EmptyName { kind } => write!(f, "{kind} name must not be empty"),
            Self::InvalidEmail => write!(f, "member email is not well-formed"),
            Self::InvalidPhone => write!(f, "member phone must be empty or exactly 10 digits"),
            Self::NonPositiveClubId { kind, club_id } => {
                write!(f, "{kind} club id must be positive, got {club_id}")
            }
            Self::MissingEventDate => write!(f, "event date is required"),
        }
    }
}

impl Error for EntityValidationError {}

pub(crate) fn require_positive_id(
    kind: &'static str,
    id: EntityId,
) -> Result<(), EntityValidationError> {
    if id <= 0 {
        return Err(EntityValidationError::NonPositiveId { kind, id });
    }
    Ok(())
}

pub(crate) fn require_name(kind: &'static str, name: &str) -> Result<(), EntityValidationError> {
    if !crate::validation::is_not_empty(name) {
        return Err(EntityValidationError::EmptyName { kind });
    }
    Ok(())
}
