//! Core data layer for the real-estate brokerage.
//! Records, SQLite repositories, the unit of work and reporting live here;
//! front ends only compose these pieces.

pub mod config;
pub mod db;
pub mod listing;
pub mod logging;
pub mod model;
pub mod repo;
pub mod service;
pub mod uow;

pub use config::{ConfigError, RealtyConfig};
pub use db::{open_db, open_db_in_memory, open_existing_db, DbError, DbResult};
pub use listing::{Listing, ListingFeatures, ListingKind};
pub use logging::{default_log_level, init_logging, logging_status, LoggingError};
pub use model::price::{Price, PriceError};
pub use model::settlement::{Settlement, SettlementType};
pub use model::validation::ValidationError;
pub use repo::apartment_repo::ApartmentQueries;
pub use repo::contract_repo::ContractQueries;
pub use repo::estate_repo::EstateQueries;
pub use repo::person_repo::PersonQueries;
pub use repo::settlement_repo::SettlementQueries;
pub use repo::{Record, RepoError, RepoResult, Repository};
pub use service::analytics::{AnalyticsService, DashboardSnapshot, Report, ReportKind, UnknownReport};
pub use service::benchmark::{BenchmarkError, BenchmarkResult, BenchmarkService};
pub use uow::UnitOfWork;

/// Returns the core crate version.
pub fn core_version() -> &'static str {
    env!("CARGO_PKG_VERSION")
}

#[cfg(test)]
mod tests {
    use super::core_version;

    #[test]
    fn version_is_not_empty() {
        assert!(!core_version().is_empty());
    }
}
