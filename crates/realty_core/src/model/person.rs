//! Person record. Roles (owner, employee, client) come from link tables.

use crate::model::validation::{require_text, ValidationError};
use chrono::NaiveDate;
use serde::{Deserialize, Serialize};

pub type PersonId = i64;

#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct Person {
    pub person_id: PersonId,
    pub surname: String,
    pub name: String,
    pub patronym: Option<String>,
    pub gender: Option<String>,
    pub birth_date: Option<NaiveDate>,
}

impl Person {
    pub fn new(person_id: PersonId, surname: impl Into<String>, name: impl Into<String>) -> Self {
        Self {
            person_id,
            surname: surname.into(),
            name: name.into(),
            patronym: None,
            gender: None,
            birth_date: None,
        }
    }

    pub fn validate(&self) -> Result<(), ValidationError> {
        require_text("surname", &self.surname)?;
        require_text("name", &self.name)
    }

    pub fn display_name(&self) -> String {
        format!("{} {}", self.surname, self.name)
    }
}
