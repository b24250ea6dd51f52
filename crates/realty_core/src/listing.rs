//! Standalone listing model for commission and address presentation.
//!
//! # Responsibility
//! - Format listing addresses and compute agency commission per listing kind.
//! - Stay independent from storage; nothing here touches a connection.
//!
//! # Invariants
//! - A listing always holds a valid [`Price`]; `set_price` rejects bad input
//!   and keeps the previous value.
//! - Kind-specific behavior is a lookup on [`ListingKind`]; a live/work unit
//!   is one flat record, not a combination of two others.

use crate::model::estate::EstateId;
use crate::model::price::{Price, PriceError, CURRENCY_SUFFIX};
use crate::model::settlement::Settlement;
use crate::model::validation::{require_text, ValidationError};
use serde::{Deserialize, Serialize};

const MISSING_UNIT: &str = "N/A";

#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum ListingKind {
    Apartment,
    House,
    Office,
    /// Live/work unit carrying both apartment and office features.
    ApartmentOffice,
}

impl ListingKind {
    pub fn commission_rate(self) -> f64 {
        match self {
            Self::Apartment => 0.08,
            Self::House => 0.03,
            Self::Office => 0.05,
            Self::ApartmentOffice => 0.10,
        }
    }

    /// Whether the address includes a unit (apartment/office) number.
    pub fn has_unit(self) -> bool {
        !matches!(self, Self::House)
    }
}

/// Union of the apartment, house and office feature sets.
///
/// Fields irrelevant to a listing's kind stay `None`.
#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
pub struct ListingFeatures {
    pub residential_complex_name: Option<String>,
    pub area: Option<f64>,
    pub kitchen_area: Option<f64>,
    pub rooms: Option<i32>,
    pub floor: Option<i32>,
    pub total_floors: Option<i32>,
    pub elevator: Option<bool>,
    pub balcony: Option<bool>,
    pub land_area: Option<f64>,
    pub floors: Option<i32>,
    pub garage: Option<bool>,
    pub parking: Option<bool>,
    pub basement: Option<bool>,
    pub garden: Option<bool>,
    pub heating_type: Option<String>,
    pub openspace: Option<bool>,
    pub conference_rooms: Option<i32>,
    pub security: Option<String>,
}

#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct Listing {
    pub estate_id: EstateId,
    pub kind: ListingKind,
    pub settlement: Settlement,
    pub street: String,
    pub house_number: String,
    pub apartment_number: Option<String>,
    pub year_built: Option<i32>,
    pub transaction_type: String,
    pub status: String,
    pub features: ListingFeatures,
    price: Price,
}

impl Listing {
    /// Creates a listing with an empty feature set.
    ///
    /// # Errors
    /// - `Price` when `price` is not a positive finite number.
    /// - `EmptyField` when `street` or `house_number` is blank.
    pub fn new(
        estate_id: EstateId,
        kind: ListingKind,
        settlement: Settlement,
        street: impl Into<String>,
        house_number: impl Into<String>,
        price: f64,
    ) -> Result<Self, ValidationError> {
        let listing = Self {
            estate_id,
            kind,
            settlement,
            street: street.into(),
            house_number: house_number.into(),
            apartment_number: None,
            year_built: None,
            transaction_type: String::new(),
            status: String::new(),
            features: ListingFeatures::default(),
            price: Price::new(price)?,
        };
        require_text("street", &listing.street)?;
        require_text("house_number", &listing.house_number)?;
        Ok(listing)
    }

    pub fn with_unit(mut self, apartment_number: impl Into<String>) -> Self {
        self.apartment_number = Some(apartment_number.into());
        self
    }

    pub fn with_features(mut self, features: ListingFeatures) -> Self {
        self.features = features;
        self
    }

    pub fn price(&self) -> Price {
        self.price
    }

    pub fn set_price(&mut self, value: f64) -> Result<(), PriceError> {
        self.price = Price::new(value)?;
        Ok(())
    }

    pub fn commission(&self) -> f64 {
        self.price.value() * self.kind.commission_rate()
    }

    /// Commission rendered like a price, e.g. `9600.00 ₴`.
    pub fn commission_display(&self) -> String {
        format!("{:.2} {CURRENCY_SUFFIX}", self.commission())
    }

    pub fn address(&self) -> String {
        let mut address = String::new();
        if self.kind == ListingKind::ApartmentOffice {
            address.push_str("Live/Work: ");
        }
        address.push_str(&format!("{}, {} ST, ", self.house_number, self.street));
        if self.kind.has_unit() {
            let unit = self.apartment_number.as_deref().unwrap_or(MISSING_UNIT);
            address.push_str(&format!("APT: {unit}, "));
        }
        address.push_str(&self.settlement.full_info());
        address
    }
}
