//! Command-line front end for the brokerage core.
//!
//! # Responsibility
//! - Resolve configuration, open the database and dispatch one command.
//! - Print machine-readable JSON on stdout; failures go to stderr.

use clap::{Args, Parser, Subcommand};
use log::info;
use realty_core::service::benchmark::WORKER_OPTIONS;
use realty_core::{
    core_version, init_logging, open_existing_db, AnalyticsService, BenchmarkError,
    BenchmarkService, ConfigError, DbError, LoggingError, RealtyConfig, RepoError, ReportKind,
    UnitOfWork,
};
use serde::Serialize;
use std::error::Error;
use std::fmt::{Display, Formatter};
use std::path::PathBuf;

#[derive(Parser, Debug)]
#[command(name = "realty", about = "Brokerage reporting and benchmarking", version)]
struct Cli {
    /// Database file; overrides REALTY_DB_PATH
    #[arg(long, global = true)]
    db: Option<PathBuf>,
    #[command(subcommand)]
    command: Command,
}

#[derive(Subcommand, Debug)]
enum Command {
    /// Print the core library version
    Version,
    /// Print one analytics report as JSON
    Report {
        /// One of hot_settlements, top_employees, top_owners, market_analysis,
        /// monthly_revenue, room_stats, price_matrix, estate_counts
        kind: ReportKind,
    },
    /// Print every report in one JSON snapshot
    Dashboard,
    /// Time concurrent read queries for a range of worker counts
    Bench(BenchArgs),
}

#[derive(Args, Debug)]
struct BenchArgs {
    /// Queries per run; overrides REALTY_BENCH_QUERIES
    #[arg(long)]
    queries: Option<u32>,
    /// Worker counts to try (defaults to 1,2,4,...,64)
    #[arg(long, value_delimiter = ',')]
    workers: Vec<usize>,
}

#[derive(Debug)]
enum CliError {
    Config(ConfigError),
    Logging(LoggingError),
    Db(DbError),
    Repo(RepoError),
    Benchmark(BenchmarkError),
    Output(serde_json::Error),
}

impl Display for CliError {
    fn fmt(&self, f: &mut Formatter<'_>) -> std::fmt::Result {
        match self {
            Self::Config(err) => write!(f, "configuration: {err}"),
            Self::Logging(err) => write!(f, "logging: {err}"),
            Self::Db(err) => write!(f, "database: {err}"),
            Self::Repo(err) => write!(f, "query: {err}"),
            Self::Benchmark(err) => write!(f, "benchmark: {err}"),
            Self::Output(err) => write!(f, "output: {err}"),
        }
    }
}

impl Error for CliError {
    fn source(&self) -> Option<&(dyn Error + 'static)> {
        match self {
            Self::Config(err) => Some(err),
            Self::Logging(err) => Some(err),
            Self::Db(err) => Some(err),
            Self::Repo(err) => Some(err),
            Self::Benchmark(err) => Some(err),
            Self::Output(err) => Some(err),
        }
    }
}

impl From<ConfigError> for CliError {
    fn from(value: ConfigError) -> Self {
        Self::Config(value)
    }
}

impl From<LoggingError> for CliError {
    fn from(value: LoggingError) -> Self {
        Self::Logging(value)
    }
}

impl From<DbError> for CliError {
    fn from(value: DbError) -> Self {
        Self::Db(value)
    }
}

impl From<RepoError> for CliError {
    fn from(value: RepoError) -> Self {
        Self::Repo(value)
    }
}

impl From<BenchmarkError> for CliError {
    fn from(value: BenchmarkError) -> Self {
        Self::Benchmark(value)
    }
}

impl From<serde_json::Error> for CliError {
    fn from(value: serde_json::Error) -> Self {
        Self::Output(value)
    }
}

fn main() {
    if let Err(err) = run(Cli::parse()) {
        eprintln!("error: {err}");
        std::process::exit(1);
    }
}

fn run(cli: Cli) -> Result<(), CliError> {
    let mut config = RealtyConfig::load()?;
    if let Some(db) = cli.db {
        config.db_path = db;
    }
    if let Some(log_dir) = &config.log_dir {
        init_logging(&config.log_level, log_dir)?;
    }

    match cli.command {
        Command::Version => {
            println!("realty_core version={}", core_version());
            Ok(())
        }
        Command::Report { kind } => {
            let conn = open_existing_db(&config.db_path)?;
            let uow = UnitOfWork::new(&conn);
            let report = AnalyticsService::new(&uow).report(kind)?;
            print_json(&report)
        }
        Command::Dashboard => {
            let conn = open_existing_db(&config.db_path)?;
            let uow = UnitOfWork::new(&conn);
            let snapshot = AnalyticsService::new(&uow).dashboard()?;
            print_json(&snapshot)
        }
        Command::Bench(args) => {
            let queries = args.queries.unwrap_or(config.bench_queries);
            let workers = if args.workers.is_empty() {
                WORKER_OPTIONS.to_vec()
            } else {
                args.workers
            };
            info!(
                "event=cli_bench module=cli queries={} worker_runs={}",
                queries,
                workers.len()
            );
            let results = BenchmarkService::new(&config.db_path, queries)?
                .run_experiment_with(&workers)?;
            print_json(&results)
        }
    }
}

fn print_json<T: Serialize>(value: &T) -> Result<(), CliError> {
    println!("{}", serde_json::to_string_pretty(value)?);
    Ok(())
}
