//! Positive monetary amount in hryvnia.
//!
//! # Invariants
//! - A `Price` is always finite and strictly greater than zero.
//! - Display form is two decimals followed by the currency sign.

use serde::{Deserialize, Serialize};
use std::error::Error;
use std::fmt::{Display, Formatter};
use std::str::FromStr;

pub const CURRENCY_SUFFIX: &str = "₴";

/// Rejection reasons for [`Price`] construction.
#[derive(Debug, Clone, PartialEq)]
pub enum PriceError {
    /// Input is not a finite number (unparseable text, NaN, infinity).
    NotANumber(String),
    /// Input is zero or negative.
    NotPositive(f64),
}

impl Display for PriceError {
    fn fmt(&self, f: &mut Formatter<'_>) -> std::fmt::Result {
        match self {
            Self::NotANumber(raw) => write!(f, "price is not a number: `{raw}`"),
            Self::NotPositive(value) => write!(f, "price must be greater than 0, got {value}"),
        }
    }
}

impl Error for PriceError {}

/// Listing or estate price. Only constructible through validation.
#[derive(Debug, Clone, Copy, PartialEq, PartialOrd, Serialize, Deserialize)]
#[serde(try_from = "f64", into = "f64")]
pub struct Price(f64);

impl Price {
    pub fn new(value: f64) -> Result<Self, PriceError> {
        if !value.is_finite() {
            return Err(PriceError::NotANumber(value.to_string()));
        }
        if value <= 0.0 {
            return Err(PriceError::NotPositive(value));
        }
        Ok(Self(value))
    }

    /// Parses free-form user input such as `"120000"` or `" 99.5 "`.
    pub fn parse(raw: &str) -> Result<Self, PriceError> {
        let value = raw
            .trim()
            .parse::<f64>()
            .map_err(|_| PriceError::NotANumber(raw.to_string()))?;
        Self::new(value)
    }

    pub fn value(self) -> f64 {
        self.0
    }
}

impl Display for Price {
    fn fmt(&self, f: &mut Formatter<'_>) -> std::fmt::Result {
        write!(f, "{:.2} {CURRENCY_SUFFIX}", self.0)
    }
}

impl FromStr for Price {
    type Err = PriceError;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        Self::parse(s)
    }
}

impl TryFrom<f64> for Price {
    type Error = PriceError;

    fn try_from(value: f64) -> Result<Self, Self::Error> {
        Self::new(value)
    }
}

impl From<Price> for f64 {
    fn from(value: Price) -> Self {
        value.0
    }
}

#[cfg(test)]
mod tests {
    use super::{Price, PriceError};

    #[test]
    fn accepts_positive_and_renders_two_decimals_with_currency() {
        let price = Price::new(120000.0).unwrap();
        assert_eq!(price.to_string(), "120000.00 ₴");
        assert_eq!(Price::new(99.999).unwrap().to_string(), "100.00 ₴");
    }

    #[test]
    fn rejects_zero_and_negative() {
        assert_eq!(Price::new(0.0), Err(PriceError::NotPositive(0.0)));
        assert_eq!(Price::new(-15.0), Err(PriceError::NotPositive(-15.0)));
    }

    #[test]
    fn rejects_non_numeric_input() {
        assert!(matches!(
            Price::parse("one hundred"),
            Err(PriceError::NotANumber(_))
        ));
        assert!(matches!(
            Price::new(f64::NAN),
            Err(PriceError::NotANumber(_))
        ));
        assert!(matches!(
            Price::new(f64::INFINITY),
            Err(PriceError::NotANumber(_))
        ));
        assert_eq!(Price::parse(" 350000 ").unwrap().value(), 350000.0);
    }

    #[test]
    fn serde_goes_through_validation() {
        let price: Price = serde_json::from_str("80000.5").unwrap();
        assert_eq!(price.value(), 80000.5);
        assert!(serde_json::from_str::<Price>("-1").is_err());
        assert_eq!(serde_json::to_string(&price).unwrap(), "80000.5");
    }
}
