//! Member domain model.
//!
//! # Invariants
//! - `email` must match the conventional `local@domain.tld` shape.
//! - `phone` is optional; when present and non-empty it is 10 digits.

use super::{
    require_name, require_positive_id, Displayable, Entity, EntityId, EntityValidationError,
};
use crate::validation::{is_valid_email, is_valid_phone};
use chrono::NaiveDate;
use serde::{Deserialize, Serialize};
use std::fmt::{Display, Formatter};

/// A club member; belongs to one club through `club_id`.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct Member {
    pub id: EntityId,
    pub name: String,
    pub email: String,
    pub join_date: NaiveDate,
    /// Soft reference to `Club::id`.
    pub club_id: EntityId,
    pub phone: Option<String>,
}

impl Member {
    pub fn new(
        id: EntityId,
        name: impl Into<String>,
        email: impl Into<String>,
        join_date: NaiveDate,
        club_id: EntityId,
    ) -> Self {
        Self {
            id,
            name: name.into(),
            email: email.into(),
            join_date,
            club_id,
            phone: None,
        }
    }

    pub fn with_phone(mut self, phone: impl Into<String>) -> Self {
        self.phone = Some(phone.into());
        self
    }
}

impl Entity for Member {
    const KIND: &'static str = "member";

    fn id(&self) -> EntityId {
        self.id
    }

    fn validate(&self) -> Result<(), EntityValidationError> {
        require_positive_id(Self::KIND, self.id)?;
        require_name(Self::KIND, &self.name)?;
        if !is_valid_email(&self.email) {
            return Err(EntityValidationError::InvalidEmail);
        }
        match self.phone.as_deref() {
            None | Some("") => Ok(()),
            Some(phone) if is_valid_phone(phone) => Ok(()),
            Some(_) => Err(EntityValidationError::InvalidPhone),
        }
    }
}

impl Displayable for Member {
    fn display_name(&self) -> &str {
        &self.name
    }

    fn display_description(&self) -> String {
        self.email.clone()
    }
}

impl Display for Member {
    fn fmt(&self, f: &mut Formatter<'_>) -> std::fmt::Result {
        write!(f, "Member: {} - {} ({})", self.id, self.name, self.email)
    }
}
