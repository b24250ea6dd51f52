//! Estate listing record and its 1:1 specializations.
//!
//! # Responsibility
//! - Define the shared estate row and the apartment/house/office extensions.
//!
//! # Invariants
//! - A specialization row reuses its estate's `estate_id` as primary key.
//! - An estate carries at most one specialization.
//! - `price`, when present, is a validated [`Price`].

use crate::model::price::Price;
use crate::model::settlement::SettlementId;
use crate::model::validation::{
    require_non_negative, require_positive, require_text, ValidationError,
};
use serde::{Deserialize, Serialize};

pub type EstateId = i64;

/// Which extension table carries an estate's details.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum Specialization {
    Apartment,
    House,
    Office,
}

impl Specialization {
    pub const ALL: [Specialization; 3] = [Self::Apartment, Self::House, Self::Office];

    pub fn table(self) -> &'static str {
        match self {
            Self::Apartment => "apartment",
            Self::House => "house",
            Self::Office => "office",
        }
    }
}

#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct Estate {
    pub estate_id: EstateId,
    pub settlement_id: SettlementId,
    pub street: String,
    pub house_number: String,
    pub apartment_number: Option<String>,
    pub year_built: Option<i32>,
    pub transaction_type: String,
    pub price: Option<Price>,
    pub status: String,
}

impl Estate {
    /// Creates an estate without unit number, build year or price.
    pub fn new(
        estate_id: EstateId,
        settlement_id: SettlementId,
        street: impl Into<String>,
        house_number: impl Into<String>,
        transaction_type: impl Into<String>,
        status: impl Into<String>,
    ) -> Self {
        Self {
            estate_id,
            settlement_id,
            street: street.into(),
            house_number: house_number.into(),
            apartment_number: None,
            year_built: None,
            transaction_type: transaction_type.into(),
            price: None,
            status: status.into(),
        }
    }

    /// Validates and assigns a new price. The old price is kept on error.
    pub fn set_price(&mut self, value: f64) -> Result<(), ValidationError> {
        self.price = Some(Price::new(value)?);
        Ok(())
    }

    pub fn validate(&self) -> Result<(), ValidationError> {
        require_text("street", &self.street)?;
        require_text("house_number", &self.house_number)?;
        require_text("transaction_type", &self.transaction_type)?;
        require_text("status", &self.status)
    }
}

#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct Apartment {
    pub estate_id: EstateId,
    pub residential_complex_name: Option<String>,
    pub area: f64,
    pub kitchen_area: Option<f64>,
    pub rooms: i32,
    pub floor: i32,
    pub total_floors: i32,
    pub elevator: bool,
    pub balcony: bool,
}

impl Apartment {
    pub fn validate(&self) -> Result<(), ValidationError> {
        require_positive("area", self.area)?;
        if let Some(kitchen_area) = self.kitchen_area {
            require_non_negative("kitchen_area", kitchen_area)?;
        }
        require_non_negative("rooms", f64::from(self.rooms))?;
        validate_floor(self.floor, self.total_floors)
    }
}

#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct House {
    pub estate_id: EstateId,
    pub land_area: f64,
    pub floors: i32,
    pub rooms: i32,
    pub garage: bool,
    pub parking: bool,
    pub basement: bool,
    pub garden: bool,
    pub heating_type: String,
}

impl House {
    pub fn validate(&self) -> Result<(), ValidationError> {
        require_non_negative("land_area", self.land_area)?;
        require_positive("floors", f64::from(self.floors))?;
        require_non_negative("rooms", f64::from(self.rooms))?;
        require_text("heating_type", &self.heating_type)
    }
}

#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct Office {
    pub estate_id: EstateId,
    pub area: f64,
    pub floor: i32,
    pub total_floors: i32,
    pub openspace: bool,
    pub conference_rooms: i32,
    pub parking: bool,
    pub elevator: bool,
    pub security: Option<String>,
}

impl Office {
    pub fn validate(&self) -> Result<(), ValidationError> {
        require_positive("area", self.area)?;
        require_non_negative("conference_rooms", f64::from(self.conference_rooms))?;
        validate_floor(self.floor, self.total_floors)
    }
}

fn validate_floor(floor: i32, total_floors: i32) -> Result<(), ValidationError> {
    require_positive("total_floors", f64::from(total_floors))?;
    if floor > total_floors {
        return Err(ValidationError::FloorAboveTotal {
            floor,
            total_floors,
        });
    }
    Ok(())
}
