mod common;

use common::seed_market;
use realty_core::db::open_db;
use realty_core::service::benchmark::DEFAULT_QUERY_COUNT;
use realty_core::{BenchmarkError, BenchmarkService, DbError, UnitOfWork};

fn seeded_db() -> (tempfile::TempDir, std::path::PathBuf) {
    let dir = tempfile::tempdir().unwrap();
    let path = dir.path().join("bench.db");
    let conn = open_db(&path).unwrap();
    seed_market(&UnitOfWork::new(&conn));
    (dir, path)
}

#[test]
fn zero_queries_are_rejected() {
    let (_dir, path) = seeded_db();

    assert!(matches!(
        BenchmarkService::new(&path, 0),
        Err(BenchmarkError::InvalidQueryCount)
    ));
}

#[test]
fn missing_database_file_is_rejected() {
    let dir = tempfile::tempdir().unwrap();
    let path = dir.path().join("nowhere.db");

    assert!(matches!(
        BenchmarkService::new(&path, 10),
        Err(BenchmarkError::Db(DbError::MissingDatabase(_)))
    ));
    assert!(!path.exists());
}

#[test]
fn sync_run_completes_every_query() {
    let (_dir, path) = seeded_db();
    let service = BenchmarkService::new(&path, DEFAULT_QUERY_COUNT).unwrap();

    let elapsed = service.run_sync().unwrap();
    assert!(elapsed.as_nanos() > 0);
}

#[test]
fn zero_workers_are_rejected() {
    let (_dir, path) = seeded_db();
    let service = BenchmarkService::new(&path, 10).unwrap();

    assert!(matches!(
        service.run_multithreaded(0),
        Err(BenchmarkError::InvalidWorkerCount)
    ));
}

#[test]
fn experiment_reports_one_result_per_worker_count() {
    let (_dir, path) = seeded_db();
    let service = BenchmarkService::new(&path, 20).unwrap();

    let results = service.run_experiment_with(&[1, 2, 4]).unwrap();

    let workers = results.iter().map(|r| r.workers).collect::<Vec<_>>();
    assert_eq!(workers, vec![1, 2, 4]);
    for result in &results {
        assert!(result.duration_secs >= 0.0);
        assert!(result.rps >= 0.0);
    }
}
