//! Brokerage contract between an employee and a client over one estate.
//!
//! # Invariants
//! - `date_signed` is always set.
//! - `end_date >= start_date` when both are set.
//! - `fee_percentage` lies in `0..=100`; `payment_amount` is non-negative.

use crate::model::estate::EstateId;
use crate::model::person::PersonId;
use crate::model::validation::{
    require_date_order, require_non_negative, require_text, ValidationError,
};
use chrono::NaiveDate;
use serde::{Deserialize, Serialize};

pub type ContractId = i64;

#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct Contract {
    pub contract_id: ContractId,
    pub estate_id: EstateId,
    pub employee_id: Option<PersonId>,
    pub client_id: Option<PersonId>,
    pub contract_type: String,
    pub date_signed: NaiveDate,
    pub start_date: Option<NaiveDate>,
    pub end_date: Option<NaiveDate>,
    pub payment_amount: Option<f64>,
    pub fee_percentage: Option<f64>,
    pub terms: Option<String>,
}

impl Contract {
    pub fn new(
        contract_id: ContractId,
        estate_id: EstateId,
        contract_type: impl Into<String>,
        date_signed: NaiveDate,
    ) -> Self {
        Self {
            contract_id,
            estate_id,
            employee_id: None,
            client_id: None,
            contract_type: contract_type.into(),
            date_signed,
            start_date: None,
            end_date: None,
            payment_amount: None,
            fee_percentage: None,
            terms: None,
        }
    }

    pub fn validate(&self) -> Result<(), ValidationError> {
        require_text("contract_type", &self.contract_type)?;
        require_date_order("start_date", self.start_date, "end_date", self.end_date)?;
        if let Some(amount) = self.payment_amount {
            require_non_negative("payment_amount", amount)?;
        }
        if let Some(fee) = self.fee_percentage {
            if fee.is_nan() || !(0.0..=100.0).contains(&fee) {
                return Err(ValidationError::OutOfRange {
                    field: "fee_percentage",
                    value: fee,
                    min: 0.0,
                    max: 100.0,
                });
            }
        }
        Ok(())
    }

    /// Agency fee in currency units, when both amount and percentage are known.
    pub fn fee_amount(&self) -> Option<f64> {
        Some(self.payment_amount? * self.fee_percentage? / 100.0)
    }
}
