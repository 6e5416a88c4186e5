//! Venue domain model.

use super::{
    require_name, require_positive_id, Displayable, Entity, EntityId, EntityValidationError,
};
use serde::{Deserialize, Serialize};
use std::fmt::{Display, Formatter};

/// A place where events are held; referenced by `Event::venue_id`.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct Venue {
    pub id: EntityId,
    pub name: String,
    pub location: Option<String>,
}

impl Venue {
    pub fn new(id: EntityId, name: impl Into<String>, location: Option<String>) -> Self {
        Self {
            id,
            name: name.into(),
            location,
        }
    }
}

impl Entity for Venue {
    const KIND: &'static str = "venue";

    fn id(&self) -> EntityId {
        self.id
    }

    fn validate(&self) -> Result<(), EntityValidationError> {
        require_positive_id(Self::KIND, self.id)?;
        require_name(Self::KIND, &self.name)
    }
}

impl Displayable for Venue {
    fn display_name(&self) -> &str {
        &self.name
    }

    fn display_description(&self) -> String {
        self.location
            .clone()
            .unwrap_or_else(|| "No location".to_string())
    }
}

impl Display for Venue {
    fn fmt(&self, f: &mut Formatter<'_>) -> std::fmt::Result {
        match &self.location {
            Some(location) => write!(f, "Venue: {} - {} ({location})", self.id, self.name),
            None => write!(f, "Venue: {} - {}", self.id, self.name),
        }
    }
}
