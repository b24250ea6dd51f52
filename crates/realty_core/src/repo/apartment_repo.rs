//! Apartment aggregate queries.

use crate::model::estate::Apartment;
use crate::repo::sqlite::SqliteRepository;
use crate::repo::RepoResult;
use serde::{Deserialize, Serialize};

/// Supply and price statistics for one room count.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct RoomStats {
    pub rooms: i32,
    /// `None` when no apartment in the group has a price.
    pub avg_price: Option<f64>,
    pub max_price: Option<f64>,
    pub supply_count: i64,
}

pub trait ApartmentQueries {
    /// Groups apartments by room count, ordered by rooms ascending.
    fn stats_by_rooms(&self) -> RepoResult<Vec<RoomStats>>;
}

impl ApartmentQueries for SqliteRepository<'_, Apartment> {
    fn stats_by_rooms(&self) -> RepoResult<Vec<RoomStats>> {
        let mut stmt = self.conn().prepare(
            "SELECT
                a.rooms AS rooms,
                AVG(e.price) AS avg_price,
                MAX(e.price) AS max_price,
                COUNT(a.estate_id) AS supply_count
             FROM apartment a
             JOIN estate e ON e.estate_id = a.estate_id
             GROUP BY a.rooms
             ORDER BY a.rooms ASC;",
        )?;

        let rows = stmt.query_map([], |row| {
            Ok(RoomStats {
                rooms: row.get("rooms")?,
                avg_price: row.get("avg_price")?,
                max_price: row.get("max_price")?,
                supply_count: row.get("supply_count")?,
            })
        })?;

        let stats = rows.collect::<Result<Vec<_>, _>>()?;
        Ok(stats)
    }
}
