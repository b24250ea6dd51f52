//! Contract aggregate queries.
//!
//! # Invariants
//! - Months are reported as the first day of the calendar month of `date_signed`.

use crate::model::contract::Contract;
use crate::repo::sqlite::SqliteRepository;
use crate::repo::RepoResult;
use chrono::NaiveDate;
use rusqlite::params;
use serde::{Deserialize, Serialize};

#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct MonthlyRevenue {
    pub month: NaiveDate,
    /// `None` when every contract of the month lacks a payment amount.
    pub total_revenue: Option<f64>,
    pub total_deals: i64,
}

pub trait ContractQueries {
    /// Sums payments and counts deals per signing month, oldest first.
    fn monthly_revenue_stream(&self) -> RepoResult<Vec<MonthlyRevenue>>;

    /// Counts contracts whose payment is strictly above `amount`.
    fn count_with_payment_above(&self, amount: f64) -> RepoResult<i64>;
}

impl ContractQueries for SqliteRepository<'_, Contract> {
    fn monthly_revenue_stream(&self) -> RepoResult<Vec<MonthlyRevenue>> {
        let mut stmt = self.conn().prepare(
            "SELECT
                strftime('%Y-%m-01', date_signed) AS month,
                SUM(payment_amount) AS total_revenue,
                COUNT(contract_id) AS total_deals
             FROM contract
             GROUP BY month
             ORDER BY month ASC;",
        )?;

        let rows = stmt.query_map([], |row| {
            Ok(MonthlyRevenue {
                month: row.get("month")?,
                total_revenue: row.get("total_revenue")?,
                total_deals: row.get("total_deals")?,
            })
        })?;

        let months = rows.collect::<Result<Vec<_>, _>>()?;
        Ok(months)
    }

    fn count_with_payment_above(&self, amount: f64) -> RepoResult<i64> {
        let count = self.conn().query_row(
            "SELECT COUNT(*) FROM contract WHERE payment_amount > ?1;",
            params![amount],
            |row| row.get(0),
        )?;
        Ok(count)
    }
}
