//! Read-throughput benchmark over repeated contract count queries.
//!
//! # Responsibility
//! - Time `count_with_payment_above` sequentially and across worker pools.
//! - Report duration and requests-per-second per worker count.
//!
//! # Invariants
//! - Every worker opens its own connection; only the query ticket counter is
//!   shared between threads.
//! - A failed query is logged and counted as a zero result; it never aborts
//!   the run.

use crate::db::{open_existing_db, DbError};
use crate::model::contract::Contract;
use crate::repo::contract_repo::ContractQueries;
use crate::repo::SqliteRepository;
use log::{info, warn};
use rusqlite::Connection;
use serde::{Deserialize, Serialize};
use std::error::Error;
use std::fmt::{Display, Formatter};
use std::path::{Path, PathBuf};
use std::sync::atomic::{AtomicU32, Ordering};
use std::thread;
use std::time::{Duration, Instant};

pub const DEFAULT_QUERY_COUNT: u32 = 100;
pub const DEFAULT_PAYMENT_FLOOR: f64 = 5000.0;
pub const WORKER_OPTIONS: [usize; 7] = [1, 2, 4, 8, 16, 32, 64];

#[derive(Debug)]
pub enum BenchmarkError {
    InvalidQueryCount,
    InvalidWorkerCount,
    WorkerPanicked { worker: usize },
    Db(DbError),
}

impl Display for BenchmarkError {
    fn fmt(&self, f: &mut Formatter<'_>) -> std::fmt::Result {
        match self {
            Self::InvalidQueryCount => write!(f, "benchmark query count must be greater than 0"),
            Self::InvalidWorkerCount => write!(f, "benchmark worker count must be greater than 0"),
            Self::WorkerPanicked { worker } => write!(f, "benchmark worker {worker} panicked"),
            Self::Db(err) => write!(f, "{err}"),
        }
    }
}

impl Error for BenchmarkError {
    fn source(&self) -> Option<&(dyn Error + 'static)> {
        match self {
            Self::Db(err) => Some(err),
            _ => None,
        }
    }
}

impl From<DbError> for BenchmarkError {
    fn from(value: DbError) -> Self {
        Self::Db(value)
    }
}

/// Throughput measured for one worker count.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct BenchmarkResult {
    pub workers: usize,
    /// Wall-clock seconds, rounded to 4 decimals.
    pub duration_secs: f64,
    /// Queries per second, rounded to 2 decimals.
    pub rps: f64,
}

/// Benchmark runner bound to one database file.
///
/// In-memory databases cannot be shared across connections, so a file path
/// is required.
pub struct BenchmarkService {
    db_path: PathBuf,
    query_count: u32,
    payment_floor: f64,
}

impl BenchmarkService {
    pub fn new(db_path: impl AsRef<Path>, query_count: u32) -> Result<Self, BenchmarkError> {
        if query_count == 0 {
            return Err(BenchmarkError::InvalidQueryCount);
        }
        let db_path = db_path.as_ref();
        if !db_path.is_file() {
            return Err(DbError::MissingDatabase(db_path.to_path_buf()).into());
        }
        Ok(Self {
            db_path: db_path.to_path_buf(),
            query_count,
            payment_floor: DEFAULT_PAYMENT_FLOOR,
        })
    }

    pub fn with_payment_floor(mut self, payment_floor: f64) -> Self {
        self.payment_floor = payment_floor;
        self
    }

    pub fn query_count(&self) -> u32 {
        self.query_count
    }

    /// Runs every query on one connection, one after another.
    pub fn run_sync(&self) -> Result<Duration, BenchmarkError> {
        let conn = open_existing_db(&self.db_path)?;
        let started_at = Instant::now();
        for _ in 0..self.query_count {
            self.single_query(&conn);
        }
        let elapsed = started_at.elapsed();

        info!(
            "event=bench_run module=benchmark mode=sync queries={} duration_ms={}",
            self.query_count,
            elapsed.as_millis()
        );
        Ok(elapsed)
    }

    /// Spreads the queries over `workers` threads pulling from a shared ticket counter.
    pub fn run_multithreaded(&self, workers: usize) -> Result<Duration, BenchmarkError> {
        if workers == 0 {
            return Err(BenchmarkError::InvalidWorkerCount);
        }
        // Migrations run here, before workers race to open the file.
        drop(open_existing_db(&self.db_path)?);

        let next_ticket = AtomicU32::new(0);
        let started_at = Instant::now();
        let outcomes = thread::scope(|scope| {
            let handles = (0..workers)
                .map(|worker| {
                    let next_ticket = &next_ticket;
                    let handle = scope.spawn(move || -> Result<u32, DbError> {
                        let conn = open_existing_db(&self.db_path)?;
                        let mut served = 0;
                        while next_ticket.fetch_add(1, Ordering::Relaxed) < self.query_count {
                            self.single_query(&conn);
                            served += 1;
                        }
                        Ok(served)
                    });
                    (worker, handle)
                })
                .collect::<Vec<_>>();

            handles
                .into_iter()
                .map(|(worker, handle)| {
                    handle
                        .join()
                        .map_err(|_| BenchmarkError::WorkerPanicked { worker })
                })
                .collect::<Vec<_>>()
        });
        let elapsed = started_at.elapsed();

        for outcome in outcomes {
            outcome??;
        }

        info!(
            "event=bench_run module=benchmark mode=threads workers={} queries={} duration_ms={}",
            workers,
            self.query_count,
            elapsed.as_millis()
        );
        Ok(elapsed)
    }

    /// Measures every entry of [`WORKER_OPTIONS`].
    pub fn run_experiment(&self) -> Result<Vec<BenchmarkResult>, BenchmarkError> {
        self.run_experiment_with(&WORKER_OPTIONS)
    }

    pub fn run_experiment_with(
        &self,
        worker_options: &[usize],
    ) -> Result<Vec<BenchmarkResult>, BenchmarkError> {
        worker_options
            .iter()
            .map(|&workers| {
                let duration = self.run_multithreaded(workers)?;
                Ok(summarize(workers, self.query_count, duration))
            })
            .collect()
    }

    fn single_query(&self, conn: &Connection) -> i64 {
        let contracts = SqliteRepository::<Contract>::new(conn);
        match contracts.count_with_payment_above(self.payment_floor) {
            Ok(count) => count,
            Err(err) => {
                warn!("event=bench_query module=benchmark status=error error={err}");
                0
            }
        }
    }
}

fn summarize(workers: usize, query_count: u32, duration: Duration) -> BenchmarkResult {
    let secs = duration.as_secs_f64();
    let rps = if secs > 0.0 {
        f64::from(query_count) / secs
    } else {
        0.0
    };
    BenchmarkResult {
        workers,
        duration_secs: round_to(secs, 4),
        rps: round_to(rps, 2),
    }
}

fn round_to(value: f64, decimals: i32) -> f64 {
    let factor = 10f64.powi(decimals);
    (value * factor).round() / factor
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn summarize_rounds_duration_and_rate() {
        let result = summarize(4, 100, Duration::from_millis(1234));
        assert_eq!(result.workers, 4);
        assert_eq!(result.duration_secs, 1.234);
        assert_eq!(result.rps, 81.04);
    }

    #[test]
    fn zero_queries_are_rejected() {
        assert!(matches!(
            BenchmarkService::new("unused.db", 0),
            Err(BenchmarkError::InvalidQueryCount)
        ));
    }
}
