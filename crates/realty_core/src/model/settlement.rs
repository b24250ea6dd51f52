//! Settlement record and its administrative type.
//!
//! # Invariants
//! - `settlement_type` is always one of [`SettlementType::ALL`].
//! - Stored and serialized form of the type is its Ukrainian label.

use crate::model::validation::{require_text, ValidationError};
use serde::{Deserialize, Serialize};
use std::fmt::{Display, Formatter};
use std::str::FromStr;

pub type SettlementId = i64;

/// Fixed administrative kinds a settlement can have.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(try_from = "String", into = "String")]
pub enum SettlementType {
    City,
    UrbanTypeSettlement,
    Village,
    RaionCenter,
    OblastCenter,
}

impl SettlementType {
    pub const ALL: [SettlementType; 5] = [
        Self::City,
        Self::UrbanTypeSettlement,
        Self::Village,
        Self::RaionCenter,
        Self::OblastCenter,
    ];

    /// Canonical label persisted in `settlement.settlement_type`.
    pub fn label(self) -> &'static str {
        match self {
            Self::City => "Місто",
            Self::UrbanTypeSettlement => "Селище міського типу",
            Self::Village => "Село",
            Self::RaionCenter => "Районний центр",
            Self::OblastCenter => "Обласний центр",
        }
    }

    pub fn english_name(self) -> &'static str {
        match self {
            Self::City => "City",
            Self::UrbanTypeSettlement => "Urban-type settlement",
            Self::Village => "Village",
            Self::RaionCenter => "Raion center",
            Self::OblastCenter => "Oblast center",
        }
    }

    pub fn is_valid(value: &str) -> bool {
        value.parse::<Self>().is_ok()
    }
}

impl Display for SettlementType {
    fn fmt(&self, f: &mut Formatter<'_>) -> std::fmt::Result {
        f.write_str(self.label())
    }
}

impl FromStr for SettlementType {
    type Err = ValidationError;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        let needle = s.trim().to_lowercase();
        Self::ALL
            .into_iter()
            .find(|kind| {
                kind.label().to_lowercase() == needle
                    || kind.english_name().to_lowercase() == needle
            })
            .ok_or_else(|| ValidationError::InvalidSettlementType(s.to_string()))
    }
}

impl TryFrom<String> for SettlementType {
    type Error = ValidationError;

    fn try_from(value: String) -> Result<Self, Self::Error> {
        value.parse()
    }
}

impl From<SettlementType> for String {
    fn from(value: SettlementType) -> Self {
        value.label().to_string()
    }
}

/// Administrative locality that estates belong to.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct Settlement {
    pub settlement_id: SettlementId,
    pub name: String,
    pub amalgamated_hromada: String,
    pub oblast: String,
    pub settlement_type: SettlementType,
}

impl Settlement {
    /// Builds a settlement from raw input, parsing the type label.
    ///
    /// # Errors
    /// - `InvalidSettlementType` when `settlement_type` is unknown.
    /// - `EmptyField` when `name` is blank.
    pub fn new(
        settlement_id: SettlementId,
        name: impl Into<String>,
        amalgamated_hromada: impl Into<String>,
        oblast: impl Into<String>,
        settlement_type: &str,
    ) -> Result<Self, ValidationError> {
        let settlement = Self {
            settlement_id,
            name: name.into(),
            amalgamated_hromada: amalgamated_hromada.into(),
            oblast: oblast.into(),
            settlement_type: settlement_type.parse()?,
        };
        settlement.validate()?;
        Ok(settlement)
    }

    pub fn validate(&self) -> Result<(), ValidationError> {
        require_text("name", &self.name)
    }

    /// Human-readable line such as `Обласний центр Львів, Львівська ОТГ, Львівська область`.
    pub fn full_info(&self) -> String {
        format!(
            "{} {}, {}, {}",
            self.settlement_type, self.name, self.amalgamated_hromada, self.oblast
        )
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn every_label_and_english_name_parses() {
        for kind in SettlementType::ALL {
            assert_eq!(kind.label().parse::<SettlementType>().unwrap(), kind);
            assert_eq!(
                kind.english_name()
                    .to_uppercase()
                    .parse::<SettlementType>()
                    .unwrap(),
                kind
            );
        }
    }

    #[test]
    fn unknown_type_is_rejected() {
        assert!(!SettlementType::is_valid("Станиця"));
        let err = Settlement::new(1, "Х", "Y", "Z", "Станиця").unwrap_err();
        assert_eq!(
            err,
            ValidationError::InvalidSettlementType("Станиця".to_string())
        );
    }

    #[test]
    fn full_info_uses_label() {
        let lviv = Settlement::new(
            10,
            "Львів",
            "Львівська ОТГ",
            "Львівська область",
            "Обласний центр",
        )
        .unwrap();
        assert_eq!(
            lviv.full_info(),
            "Обласний центр Львів, Львівська ОТГ, Львівська область"
        );
    }

    #[test]
    fn serializes_as_label() {
        let json = serde_json::to_string(&SettlementType::Village).unwrap();
        assert_eq!(json, "\"Село\"");
        assert!(serde_json::from_str::<SettlementType>("\"Хутір\"").is_err());
    }
}
