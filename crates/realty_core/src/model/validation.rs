//! Field-level validation errors shared by every record.
//!
//! # Responsibility
//! - Describe why a record cannot be constructed or persisted.
//! - Stay storage-agnostic so the listing model can reuse it.

use crate::model::price::PriceError;
use std::error::Error;
use std::fmt::{Display, Formatter};

/// Reason a record failed validation before reaching storage.
#[derive(Debug, Clone, PartialEq)]
pub enum ValidationError {
    /// Required text field is empty or whitespace-only.
    EmptyField { field: &'static str },
    /// Settlement type is not one of the fixed administrative kinds.
    InvalidSettlementType(String),
    /// Price failed the positive-number constructor.
    Price(PriceError),
    /// Numeric field must not be negative.
    Negative { field: &'static str, value: f64 },
    /// Numeric field must be strictly greater than zero.
    NotPositive { field: &'static str, value: f64 },
    /// Numeric field fell outside its inclusive bounds.
    OutOfRange {
        field: &'static str,
        value: f64,
        min: f64,
        max: f64,
    },
    /// A range ends before it starts.
    DateOrder {
        start_field: &'static str,
        end_field: &'static str,
    },
    /// Floor number exceeds the building height.
    FloorAboveTotal { floor: i32, total_floors: i32 },
    InvalidEmail(String),
    InvalidPhone(String),
    /// Estate already carries another specialization row.
    DuplicateSpecialization {
        estate_id: i64,
        existing: &'static str,
    },
}

impl Display for ValidationError {
    fn fmt(&self, f: &mut Formatter<'_>) -> std::fmt::Result {
        match self {
            Self::EmptyField { field } => write!(f, "`{field}` must not be empty"),
            Self::InvalidSettlementType(value) => write!(
                f,
                "invalid settlement type `{value}`; expected one of: {}",
                crate::model::settlement::SettlementType::ALL
                    .iter()
                    .map(|kind| kind.label())
                    .collect::<Vec<_>>()
                    .join(", ")
            ),
            Self::Price(err) => write!(f, "{err}"),
            Self::Negative { field, value } => {
                write!(f, "`{field}` must not be negative, got {value}")
            }
            Self::NotPositive { field, value } => {
                write!(f, "`{field}` must be greater than 0, got {value}")
            }
            Self::OutOfRange {
                field,
                value,
                min,
                max,
            } => write!(f, "`{field}` must be within {min}..={max}, got {value}"),
            Self::DateOrder {
                start_field,
                end_field,
            } => write!(f, "`{end_field}` must not be earlier than `{start_field}`"),
            Self::FloorAboveTotal {
                floor,
                total_floors,
            } => write!(
                f,
                "floor {floor} is above the building's {total_floors} floors"
            ),
            Self::InvalidEmail(value) => write!(f, "invalid email address `{value}`"),
            Self::InvalidPhone(value) => write!(f, "invalid phone number `{value}`"),
            Self::DuplicateSpecialization {
                estate_id,
                existing,
            } => write!(
                f,
                "estate {estate_id} already has a `{existing}` specialization"
            ),
        }
    }
}

impl Error for ValidationError {
    fn source(&self) -> Option<&(dyn Error + 'static)> {
        match self {
            Self::Price(err) => Some(err),
            _ => None,
        }
    }
}

impl From<PriceError> for ValidationError {
    fn from(value: PriceError) -> Self {
        Self::Price(value)
    }
}

pub(crate) fn require_text(field: &'static str, value: &str) -> Result<(), ValidationError> {
    if value.trim().is_empty() {
        return Err(ValidationError::EmptyField { field });
    }
    Ok(())
}

pub(crate) fn require_positive(field: &'static str, value: f64) -> Result<(), ValidationError> {
    if value.is_nan() || value <= 0.0 {
        return Err(ValidationError::NotPositive { field, value });
    }
    Ok(())
}

pub(crate) fn require_non_negative(
    field: &'static str,
    value: f64,
) -> Result<(), ValidationError> {
    if value.is_nan() || value < 0.0 {
        return Err(ValidationError::Negative { field, value });
    }
    Ok(())
}

pub(crate) fn require_date_order(
    start_field: &'static str,
    start: Option<chrono::NaiveDate>,
    end_field: &'static str,
    end: Option<chrono::NaiveDate>,
) -> Result<(), ValidationError> {
    if let (Some(start), Some(end)) = (start, end) {
        if end < start {
            return Err(ValidationError::DateOrder {
                start_field,
                end_field,
            });
        }
    }
    Ok(())
}
