//! Many-to-many link records between people, estates and roles.

use crate::model::estate::EstateId;
use crate::model::person::PersonId;
use crate::model::validation::{require_date_order, require_text, ValidationError};
use chrono::NaiveDate;
use serde::{Deserialize, Serialize};

pub type RoleId = i64;

/// Ownership of an estate by a person.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
pub struct EstateOwner {
    pub estate_id: EstateId,
    pub owner_id: PersonId,
}

/// Employee assignment to an estate with an optional date range.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct EstateEmployee {
    pub estate_id: EstateId,
    pub person_id: PersonId,
    pub role_at_estate: Option<String>,
    pub assigned_from: Option<NaiveDate>,
    pub assigned_to: Option<NaiveDate>,
}

impl EstateEmployee {
    pub fn new(estate_id: EstateId, person_id: PersonId) -> Self {
        Self {
            estate_id,
            person_id,
            role_at_estate: None,
            assigned_from: None,
            assigned_to: None,
        }
    }

    pub fn validate(&self) -> Result<(), ValidationError> {
        require_date_order(
            "assigned_from",
            self.assigned_from,
            "assigned_to",
            self.assigned_to,
        )
    }
}

/// Named role such as owner, employee or client.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct Role {
    pub role_id: RoleId,
    pub name: String,
}

impl Role {
    pub fn validate(&self) -> Result<(), ValidationError> {
        require_text("name", &self.name)
    }
}

#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
pub struct PersonRole {
    pub person_id: PersonId,
    pub role_id: RoleId,
    pub assigned_date: Option<NaiveDate>,
}
