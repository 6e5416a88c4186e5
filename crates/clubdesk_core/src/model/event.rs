//! Event domain model.
//!
//! # Invariants
//! - An event belongs to a club (`club_id > 0`) and has a date.
//! - `venue_id` is an unchecked soft reference.

use super::{
    require_name, require_positive_id, Displayable, Entity, EntityId, EntityValidationError,
};
use crate::validation::format_date;
use chrono::NaiveDate;
use serde::{Deserialize, Serialize};
use std::fmt::{Display, Formatter};

#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct Event {
    pub id: EntityId,
    pub name: String,
    pub description: Option<String>,
    /// Soft reference to `Club::id`.
    pub club_id: EntityId,
    /// `None` only for drafts; such events never pass validation.
    pub event_date: Option<NaiveDate>,
    /// Soft reference to `Venue::id`.
    pub venue_id: EntityId,
}

impl Event {
    pub fn new(
        id: EntityId,
        name: impl Into<String>,
        club_id: EntityId,
        event_date: NaiveDate,
        venue_id: EntityId,
    ) -> Self {
        Self {
            id,
            name: name.into(),
            description: None,
            club_id,
            event_date: Some(event_date),
            venue_id,
        }
    }

    pub fn with_description(mut self, description: impl Into<String>) -> Self {
        self.description = Some(description.into());
        self
    }

    fn date_label(&self) -> Option<String> {
        self.event_date.map(format_date)
    }
}

impl Entity for Event {
    const KIND: &'static str = "event";

    fn id(&self) -> EntityId {
        self.id
    }

    fn validate(&self) -> Result<(), EntityValidationError> {
        require_positive_id(Self::KIND, self.id)?;
        require_name(Self::KIND, &self.name)?;
        if self.club_id <= 0 {
            return Err(EntityValidationError::NonPositiveClubId {
                kind: Self::KIND,
                club_id: self.club_id,
            });
        }
        if self.event_date.is_none() {
            return Err(EntityValidationError::MissingEventDate);
        }
        Ok(())
    }
}

impl Displayable for Event {
    fn display_name(&self) -> &str {
        &self.name
    }

    fn display_description(&self) -> String {
        let date = self.date_label().unwrap_or_else(|| "No date".to_string());
        match &self.description {
            Some(description) => format!("{description} ({date})"),
            None => format!("Event on {date}"),
        }
    }
}

impl Display for Event {
    fn fmt(&self, f: &mut Formatter<'_>) -> std::fmt::Result {
        let date = self.date_label().unwrap_or_else(|| "N/A".to_string());
        write!(f, "Event: {} - {} (Date: {date})", self.id, self.name)
    }
}
