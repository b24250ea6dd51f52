//! Environment-driven runtime configuration.
//!
//! # Responsibility
//! - Resolve database location, logging and benchmark settings.
//! - Load an optional `.env` file before reading the process environment.
//!
//! # Invariants
//! - Missing variables fall back to documented defaults.
//! - Malformed numeric values are reported, never silently replaced.

use crate::logging::default_log_level;
use crate::service::benchmark::DEFAULT_QUERY_COUNT;
use std::env;
use std::error::Error;
use std::fmt::{Display, Formatter};
use std::path::PathBuf;

pub const DB_PATH_VAR: &str = "REALTY_DB_PATH";
pub const LOG_LEVEL_VAR: &str = "REALTY_LOG_LEVEL";
pub const LOG_DIR_VAR: &str = "REALTY_LOG_DIR";
pub const BENCH_QUERIES_VAR: &str = "REALTY_BENCH_QUERIES";

const DEFAULT_DB_PATH: &str = "realty.db";

#[derive(Debug, Clone, PartialEq, Eq)]
pub struct RealtyConfig {
    pub db_path: PathBuf,
    pub log_level: String,
    /// File logging is disabled when unset.
    pub log_dir: Option<PathBuf>,
    pub bench_queries: u32,
}

impl RealtyConfig {
    pub fn load() -> Result<Self, ConfigError> {
        dotenvy::dotenv().ok();
        Self::from_env()
    }

    /// Reads the process environment only, skipping `.env` discovery.
    pub fn from_env() -> Result<Self, ConfigError> {
        let db_path = env::var(DB_PATH_VAR)
            .ok()
            .filter(|value| !value.trim().is_empty())
            .unwrap_or_else(|| DEFAULT_DB_PATH.to_string());

        let log_level =
            env::var(LOG_LEVEL_VAR).unwrap_or_else(|_| default_log_level().to_string());

        let log_dir = env::var(LOG_DIR_VAR)
            .ok()
            .filter(|value| !value.trim().is_empty())
            .map(PathBuf::from);

        let bench_queries = match env::var(BENCH_QUERIES_VAR) {
            Ok(raw) => raw
                .trim()
                .parse::<u32>()
                .ok()
                .filter(|count| *count > 0)
                .ok_or(ConfigError::InvalidBenchQueries(raw))?,
            Err(_) => DEFAULT_QUERY_COUNT,
        };

        Ok(Self {
            db_path: PathBuf::from(db_path),
            log_level,
            log_dir,
            bench_queries,
        })
    }
}

#[derive(Debug, Clone, PartialEq, Eq)]
pub enum ConfigError {
    InvalidBenchQueries(String),
}

impl Display for ConfigError {
    fn fmt(&self, f: &mut Formatter<'_>) -> std::fmt::Result {
        match self {
            Self::InvalidBenchQueries(raw) => write!(
                f,
                "{BENCH_QUERIES_VAR} must be a positive integer, got `{raw}`"
            ),
        }
    }
}

impl Error for ConfigError {}
