//! Person reachability records: contact links, phones and emails.
//!
//! # Invariants
//! - `Phone::number` holds 5..=20 characters of digits and separators.
//! - `Email::address` has exactly one `@` and a dotted domain.

use crate::model::estate::EstateId;
use crate::model::person::PersonId;
use crate::model::validation::ValidationError;
use once_cell::sync::Lazy;
use regex::Regex;
use serde::{Deserialize, Serialize};

static PHONE_RE: Lazy<Regex> =
    Lazy::new(|| Regex::new(r"^\+?[0-9(][0-9 ()\-]{3,18}[0-9]$").expect("valid phone regex"));
static EMAIL_RE: Lazy<Regex> = Lazy::new(|| {
    Regex::new(r"^[^@\s]+@[^@\s]+\.[^@\s]+$").expect("valid email regex")
});

pub type ContactId = i64;

/// Inquiry link between a client, an employee and an estate.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
pub struct Contact {
    pub contact_id: ContactId,
    pub client_id: Option<PersonId>,
    pub employee_id: Option<PersonId>,
    pub estate_id: Option<EstateId>,
}

#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct Phone {
    pub number: String,
    pub person_id: PersonId,
    #[serde(rename = "type")]
    pub phone_type: Option<String>,
}

impl Phone {
    pub fn validate(&self) -> Result<(), ValidationError> {
        if self.number.chars().count() > 20 || !PHONE_RE.is_match(&self.number) {
            return Err(ValidationError::InvalidPhone(self.number.clone()));
        }
        Ok(())
    }
}

#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct Email {
    pub address: String,
    pub person_id: PersonId,
}

impl Email {
    pub fn validate(&self) -> Result<(), ValidationError> {
        if !EMAIL_RE.is_match(&self.address) {
            return Err(ValidationError::InvalidEmail(self.address.clone()));
        }
        Ok(())
    }
}
