//! Settlement aggregate queries: demand hot spots and market prices.
//!
//! # Invariants
//! - Every settlement participates through `LEFT JOIN`, so zero counts are
//!   visible when a threshold admits them.
//! - Count rankings break ties by `settlement_id` ascending.

use crate::model::settlement::{Settlement, SettlementId};
use crate::repo::sqlite::SqliteRepository;
use crate::repo::RepoResult;
use rusqlite::params;
use serde::{Deserialize, Serialize};

/// Default minimum estate count for [`SettlementQueries::hot_settlements`].
pub const DEFAULT_HOT_SETTLEMENT_THRESHOLD: i64 = 1;

#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct HotSettlement {
    pub settlement_id: SettlementId,
    pub name: String,
    pub number_of_estates: i64,
}

#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct MarketAnalysisRow {
    pub settlement_id: SettlementId,
    pub name: String,
    pub avg_house_price: Option<f64>,
    pub avg_apartment_price: Option<f64>,
}

#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct EstateCountRow {
    pub settlement_id: SettlementId,
    pub name: String,
    pub oblast: String,
    pub estate_count: i64,
}

pub trait SettlementQueries {
    /// Settlements with at least `threshold` estates, busiest first.
    fn hot_settlements(&self, threshold: i64) -> RepoResult<Vec<HotSettlement>>;

    /// Average house and apartment price per settlement, by settlement id.
    fn market_analysis(&self) -> RepoResult<Vec<MarketAnalysisRow>>;

    /// Estate count for every settlement, by settlement id.
    fn estate_count_by_settlement(&self) -> RepoResult<Vec<EstateCountRow>>;
}

impl SettlementQueries for SqliteRepository<'_, Settlement> {
    fn hot_settlements(&self, threshold: i64) -> RepoResult<Vec<HotSettlement>> {
        let mut stmt = self.conn().prepare(
            "SELECT
                s.settlement_id AS settlement_id,
                s.name AS name,
                COUNT(e.estate_id) AS number_of_estates
             FROM settlement s
             LEFT JOIN estate e ON e.settlement_id = s.settlement_id
             GROUP BY s.settlement_id
             HAVING COUNT(e.estate_id) >= ?1
             ORDER BY number_of_estates DESC, s.settlement_id ASC;",
        )?;

        let rows = stmt.query_map(params![threshold], |row| {
            Ok(HotSettlement {
                settlement_id: row.get("settlement_id")?,
                name: row.get("name")?,
                number_of_estates: row.get("number_of_estates")?,
            })
        })?;

        let hot = rows.collect::<Result<Vec<_>, _>>()?;
        Ok(hot)
    }

    fn market_analysis(&self) -> RepoResult<Vec<MarketAnalysisRow>> {
        let mut stmt = self.conn().prepare(
            "SELECT
                s.settlement_id AS settlement_id,
                s.name AS name,
                AVG(CASE WHEN h.estate_id IS NOT NULL THEN e.price END) AS avg_house_price,
                AVG(CASE WHEN a.estate_id IS NOT NULL THEN e.price END) AS avg_apartment_price
             FROM settlement s
             LEFT JOIN estate e ON e.settlement_id = s.settlement_id
             LEFT JOIN house h ON h.estate_id = e.estate_id
             LEFT JOIN apartment a ON a.estate_id = e.estate_id
             GROUP BY s.settlement_id
             ORDER BY s.settlement_id ASC;",
        )?;

        let rows = stmt.query_map([], |row| {
            Ok(MarketAnalysisRow {
                settlement_id: row.get("settlement_id")?,
                name: row.get("name")?,
                avg_house_price: row.get("avg_house_price")?,
                avg_apartment_price: row.get("avg_apartment_price")?,
            })
        })?;

        let markets = rows.collect::<Result<Vec<_>, _>>()?;
        Ok(markets)
    }

    fn estate_count_by_settlement(&self) -> RepoResult<Vec<EstateCountRow>> {
        let mut stmt = self.conn().prepare(
            "SELECT
                s.settlement_id AS settlement_id,
                s.name AS name,
                s.oblast AS oblast,
                COUNT(e.estate_id) AS estate_count
             FROM settlement s
             LEFT JOIN estate e ON e.settlement_id = s.settlement_id
             GROUP BY s.settlement_id
             ORDER BY s.settlement_id ASC;",
        )?;

        let rows = stmt.query_map([], |row| {
            Ok(EstateCountRow {
                settlement_id: row.get("settlement_id")?,
                name: row.get("name")?,
                oblast: row.get("oblast")?,
                estate_count: row.get("estate_count")?,
            })
        })?;

        let counts = rows.collect::<Result<Vec<_>, _>>()?;
        Ok(counts)
    }
}
