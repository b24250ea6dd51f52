//! Person aggregate queries: employee revenue and owner assets.
//!
//! # Invariants
//! - Descending rankings break ties by `person_id` ascending.

use crate::model::person::{Person, PersonId};
use crate::repo::sqlite::SqliteRepository;
use crate::repo::RepoResult;
use rusqlite::params;
use serde::{Deserialize, Serialize};

/// Default minimum asset total for [`PersonQueries::top_owners`].
pub const DEFAULT_OWNER_THRESHOLD: f64 = 0.0;

#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct EmployeeRevenue {
    pub person_id: PersonId,
    pub surname: String,
    pub name: String,
    /// `None` when none of the employee's contracts carry a payment.
    pub total_sales_volume: Option<f64>,
    pub deals_closed: i64,
}

#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct OwnerAssets {
    pub person_id: PersonId,
    pub name: String,
    pub surname: String,
    pub total_assets: f64,
}

pub trait PersonQueries {
    /// Ranks employees with at least one contract by payment volume.
    fn top_revenue_employees(&self) -> RepoResult<Vec<EmployeeRevenue>>;

    /// Ranks owners by the summed price of their estates.
    ///
    /// Owners whose estates have no price at all are excluded.
    fn top_owners(&self, threshold: f64) -> RepoResult<Vec<OwnerAssets>>;
}

impl PersonQueries for SqliteRepository<'_, Person> {
    fn top_revenue_employees(&self) -> RepoResult<Vec<EmployeeRevenue>> {
        let mut stmt = self.conn().prepare(
            "SELECT
                p.person_id AS person_id,
                p.surname AS surname,
                p.name AS name,
                SUM(c.payment_amount) AS total_sales_volume,
                COUNT(c.contract_id) AS deals_closed
             FROM person p
             JOIN contract c ON c.employee_id = p.person_id
             GROUP BY p.person_id
             ORDER BY total_sales_volume DESC, p.person_id ASC;",
        )?;

        let rows = stmt.query_map([], |row| {
            Ok(EmployeeRevenue {
                person_id: row.get("person_id")?,
                surname: row.get("surname")?,
                name: row.get("name")?,
                total_sales_volume: row.get("total_sales_volume")?,
                deals_closed: row.get("deals_closed")?,
            })
        })?;

        let employees = rows.collect::<Result<Vec<_>, _>>()?;
        Ok(employees)
    }

    fn top_owners(&self, threshold: f64) -> RepoResult<Vec<OwnerAssets>> {
        let mut stmt = self.conn().prepare(
            "SELECT
                p.person_id AS person_id,
                p.name AS name,
                p.surname AS surname,
                SUM(e.price) AS total_assets
             FROM person p
             JOIN estate_owner eo ON eo.owner_id = p.person_id
             JOIN estate e ON e.estate_id = eo.estate_id
             GROUP BY p.person_id
             HAVING SUM(e.price) >= ?1
             ORDER BY total_assets DESC, p.person_id ASC;",
        )?;

        let rows = stmt.query_map(params![threshold], |row| {
            Ok(OwnerAssets {
                person_id: row.get("person_id")?,
                name: row.get("name")?,
                surname: row.get("surname")?,
                total_assets: row.get("total_assets")?,
            })
        })?;

        let owners = rows.collect::<Result<Vec<_>, _>>()?;
        Ok(owners)
    }
}
