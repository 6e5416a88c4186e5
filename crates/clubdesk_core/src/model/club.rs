//! Club domain model.

use super::{
    require_name, require_positive_id, Displayable, Entity, EntityId, EntityValidationError,
};
use serde::{Deserialize, Serialize};
use std::fmt::{Display, Formatter};

/// A club; referenced by `Member::club_id` and `Event::club_id`.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct Club {
    pub id: EntityId,
    pub name: String,
    pub description: Option<String>,
}

impl Club {
    pub fn new(id: EntityId, name: impl Into<String>, description: Option<String>) -> Self {
        Self {
            id,
            name: name.into(),
            description,
        }
    }
}

impl Entity for Club {
    const KIND: &'static str = "club";

    fn id(&self) -> EntityId {
        self.id
    }

    fn validate(&self) -> Result<(), EntityValidationError> {
        require_positive_id(Self::KIND, self.id)?;
        require_name(Self::KIND, &self.name)
    }
}

impl Displayable for Club {
    fn display_name(&self) -> &str {
        &self.name
    }

    fn display_description(&self) -> String {
        self.description
            .clone()
            .unwrap_or_else(|| "No description available".to_string())
    }
}

impl Display for Club {
    fn fmt(&self, f: &mut Formatter<'_>) -> std::fmt::Result {
        write!(f, "Club: {} - {}", self.id, self.name)
    }
}
