//! Read-only analytics over the unit of work.
//!
//! # Responsibility
//! - Name every aggregate query so dashboards and CLIs can select one.
//! - Bundle all aggregates into one serializable dashboard snapshot.
//!
//! # Invariants
//! - No method writes; each report is one aggregate statement.
//! - Reports run with the default thresholds of their query.

use crate::repo::apartment_repo::{ApartmentQueries, RoomStats};
use crate::repo::contract_repo::{ContractQueries, MonthlyRevenue};
use crate::repo::estate_repo::{EstateQueries, PriceMatrixRow};
use crate::repo::person_repo::{
    EmployeeRevenue, OwnerAssets, PersonQueries, DEFAULT_OWNER_THRESHOLD,
};
use crate::repo::settlement_repo::{
    EstateCountRow, HotSettlement, MarketAnalysisRow, SettlementQueries,
    DEFAULT_HOT_SETTLEMENT_THRESHOLD,
};
use crate::repo::RepoResult;
use crate::uow::UnitOfWork;
use chrono::{DateTime, Utc};
use log::debug;
use serde::{Deserialize, Serialize};
use std::error::Error;
use std::fmt::{Display, Formatter};
use std::str::FromStr;
use std::time::Instant;

#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum ReportKind {
    HotSettlements,
    TopEmployees,
    TopOwners,
    MarketAnalysis,
    MonthlyRevenue,
    RoomStats,
    PriceMatrix,
    EstateCounts,
}

impl ReportKind {
    pub const ALL: [ReportKind; 8] = [
        Self::HotSettlements,
        Self::TopEmployees,
        Self::TopOwners,
        Self::MarketAnalysis,
        Self::MonthlyRevenue,
        Self::RoomStats,
        Self::PriceMatrix,
        Self::EstateCounts,
    ];

    pub fn as_str(self) -> &'static str {
        match self {
            Self::HotSettlements => "hot_settlements",
            Self::TopEmployees => "top_employees",
            Self::TopOwners => "top_owners",
            Self::MarketAnalysis => "market_analysis",
            Self::MonthlyRevenue => "monthly_revenue",
            Self::RoomStats => "room_stats",
            Self::PriceMatrix => "price_matrix",
            Self::EstateCounts => "estate_counts",
        }
    }
}

impl Display for ReportKind {
    fn fmt(&self, f: &mut Formatter<'_>) -> std::fmt::Result {
        f.write_str(self.as_str())
    }
}

#[derive(Debug, Clone, PartialEq, Eq)]
pub struct UnknownReport(pub String);

impl Display for UnknownReport {
    fn fmt(&self, f: &mut Formatter<'_>) -> std::fmt::Result {
        write!(
            f,
            "unknown report `{}`; expected one of: {}",
            self.0,
            ReportKind::ALL
                .iter()
                .map(|kind| kind.as_str())
                .collect::<Vec<_>>()
                .join("|")
        )
    }
}

impl Error for UnknownReport {}

impl FromStr for ReportKind {
    type Err = UnknownReport;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        let normalized = s.trim().to_ascii_lowercase().replace('-', "_");
        Self::ALL
            .into_iter()
            .find(|kind| kind.as_str() == normalized)
            .ok_or_else(|| UnknownReport(s.to_string()))
    }
}

/// Rows of a single report, tagged with the report name when serialized.
#[derive(Debug, Clone, PartialEq, Serialize)]
#[serde(tag = "report", content = "rows", rename_all = "snake_case")]
pub enum Report {
    HotSettlements(Vec<HotSettlement>),
    TopEmployees(Vec<EmployeeRevenue>),
    TopOwners(Vec<OwnerAssets>),
    MarketAnalysis(Vec<MarketAnalysisRow>),
    MonthlyRevenue(Vec<MonthlyRevenue>),
    RoomStats(Vec<RoomStats>),
    PriceMatrix(Vec<PriceMatrixRow>),
    EstateCounts(Vec<EstateCountRow>),
}

impl Report {
    pub fn kind(&self) -> ReportKind {
        match self {
            Self::HotSettlements(_) => ReportKind::HotSettlements,
            Self::TopEmployees(_) => ReportKind::TopEmployees,
            Self::TopOwners(_) => ReportKind::TopOwners,
            Self::MarketAnalysis(_) => ReportKind::MarketAnalysis,
            Self::MonthlyRevenue(_) => ReportKind::MonthlyRevenue,
            Self::RoomStats(_) => ReportKind::RoomStats,
            Self::PriceMatrix(_) => ReportKind::PriceMatrix,
            Self::EstateCounts(_) => ReportKind::EstateCounts,
        }
    }

    pub fn row_count(&self) -> usize {
        match self {
            Self::HotSettlements(rows) => rows.len(),
            Self::TopEmployees(rows) => rows.len(),
            Self::TopOwners(rows) => rows.len(),
            Self::MarketAnalysis(rows) => rows.len(),
            Self::MonthlyRevenue(rows) => rows.len(),
            Self::RoomStats(rows) => rows.len(),
            Self::PriceMatrix(rows) => rows.len(),
            Self::EstateCounts(rows) => rows.len(),
        }
    }
}

/// Every dashboard chart's data at one point in time.
#[derive(Debug, Clone, PartialEq, Serialize)]
pub struct DashboardSnapshot {
    pub generated_at: DateTime<Utc>,
    pub hot_settlements: Vec<HotSettlement>,
    pub top_employees: Vec<EmployeeRevenue>,
    pub top_owners: Vec<OwnerAssets>,
    pub market_analysis: Vec<MarketAnalysisRow>,
    pub monthly_revenue: Vec<MonthlyRevenue>,
    pub room_stats: Vec<RoomStats>,
    pub price_matrix: Vec<PriceMatrixRow>,
    pub estate_counts: Vec<EstateCountRow>,
}

pub struct AnalyticsService<'uow, 'conn> {
    uow: &'uow UnitOfWork<'conn>,
}

impl<'uow, 'conn> AnalyticsService<'uow, 'conn> {
    pub fn new(uow: &'uow UnitOfWork<'conn>) -> Self {
        Self { uow }
    }

    /// Runs one named report with its default threshold.
    pub fn report(&self, kind: ReportKind) -> RepoResult<Report> {
        let started_at = Instant::now();
        let report = match kind {
            ReportKind::HotSettlements => Report::HotSettlements(
                self.uow
                    .settlements
                    .hot_settlements(DEFAULT_HOT_SETTLEMENT_THRESHOLD)?,
            ),
            ReportKind::TopEmployees => {
                Report::TopEmployees(self.uow.people.top_revenue_employees()?)
            }
            ReportKind::TopOwners => {
                Report::TopOwners(self.uow.people.top_owners(DEFAULT_OWNER_THRESHOLD)?)
            }
            ReportKind::MarketAnalysis => {
                Report::MarketAnalysis(self.uow.settlements.market_analysis()?)
            }
            ReportKind::MonthlyRevenue => {
                Report::MonthlyRevenue(self.uow.contracts.monthly_revenue_stream()?)
            }
            ReportKind::RoomStats => Report::RoomStats(self.uow.apartments.stats_by_rooms()?),
            ReportKind::PriceMatrix => Report::PriceMatrix(self.uow.estates.price_matrix()?),
            ReportKind::EstateCounts => {
                Report::EstateCounts(self.uow.settlements.estate_count_by_settlement()?)
            }
        };

        debug!(
            "event=report_run module=analytics report={} rows={} duration_ms={}",
            kind,
            report.row_count(),
            started_at.elapsed().as_millis()
        );
        Ok(report)
    }

    /// Runs every report once.
    pub fn dashboard(&self) -> RepoResult<DashboardSnapshot> {
        Ok(DashboardSnapshot {
            generated_at: Utc::now(),
            hot_settlements: self
                .uow
                .settlements
                .hot_settlements(DEFAULT_HOT_SETTLEMENT_THRESHOLD)?,
            top_employees: self.uow.people.top_revenue_employees()?,
            top_owners: self.uow.people.top_owners(DEFAULT_OWNER_THRESHOLD)?,
            market_analysis: self.uow.settlements.market_analysis()?,
            monthly_revenue: self.uow.contracts.monthly_revenue_stream()?,
            room_stats: self.uow.apartments.stats_by_rooms()?,
            price_matrix: self.uow.estates.price_matrix()?,
            estate_counts: self.uow.settlements.estate_count_by_settlement()?,
        })
    }
}

#[cfg(test)]
mod tests {
    use super::{ReportKind, UnknownReport};

    #[test]
    fn report_kind_round_trips_through_its_name() {
        for kind in ReportKind::ALL {
            assert_eq!(kind.to_string().parse::<ReportKind>().unwrap(), kind);
        }
        assert_eq!(
            "Hot-Settlements".parse::<ReportKind>().unwrap(),
            ReportKind::HotSettlements
        );
    }

    #[test]
    fn unknown_report_lists_choices() {
        let err = "sales_funnel".parse::<ReportKind>().unwrap_err();
        assert_eq!(err, UnknownReport("sales_funnel".to_string()));
        assert!(err.to_string().contains("room_stats"));
    }
}
