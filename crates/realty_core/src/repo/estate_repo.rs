//! Estate aggregate queries.

use crate::model::estate::Estate;
use crate::repo::sqlite::SqliteRepository;
use crate::repo::RepoResult;
use serde::{Deserialize, Serialize};

/// One cell of the settlement × transaction-type price matrix.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct PriceMatrixRow {
    pub settlement_name: String,
    pub transaction_type: String,
    pub avg_price: Option<f64>,
    pub max_price: Option<f64>,
    pub inventory_count: i64,
}

pub trait EstateQueries {
    /// Groups estates by settlement name and transaction type.
    ///
    /// Ordered by settlement name, then transaction type.
    fn price_matrix(&self) -> RepoResult<Vec<PriceMatrixRow>>;
}

impl EstateQueries for SqliteRepository<'_, Estate> {
    fn price_matrix(&self) -> RepoResult<Vec<PriceMatrixRow>> {
        let mut stmt = self.conn().prepare(
            "SELECT
                s.name AS settlement_name,
                e.transaction_type AS transaction_type,
                AVG(e.price) AS avg_price,
                MAX(e.price) AS max_price,
                COUNT(e.estate_id) AS inventory_count
             FROM estate e
             JOIN settlement s ON s.settlement_id = e.settlement_id
             GROUP BY s.name, e.transaction_type
             ORDER BY s.name ASC, e.transaction_type ASC;",
        )?;

        let rows = stmt.query_map([], |row| {
            Ok(PriceMatrixRow {
                settlement_name: row.get("settlement_name")?,
                transaction_type: row.get("transaction_type")?,
                avg_price: row.get("avg_price")?,
                max_price: row.get("max_price")?,
                inventory_count: row.get("inventory_count")?,
            })
        })?;

        let cells = rows.collect::<Result<Vec<_>, _>>()?;
        Ok(cells)
    }
}
