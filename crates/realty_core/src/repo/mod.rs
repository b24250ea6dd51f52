//! Repository layer: uniform CRUD plus per-entity aggregate queries.
//!
//! # Responsibility
//! - Define the storage-agnostic [`Repository`] contract shared by every record.
//! - Isolate SQLite query details from services and callers.
//!
//! # Invariants
//! - Writes call `Record::validate()` before any SQL mutation.
//! - Lookups by key report absence as `None`, never as an error.
//! - Each call is one statement round trip; there is no implicit transaction
//!   spanning several calls.

use crate::db::DbError;
use crate::model::validation::ValidationError;
use std::error::Error;
use std::fmt::{Display, Formatter};

pub mod apartment_repo;
pub mod contract_repo;
pub mod estate_repo;
pub mod person_repo;
pub mod record;
mod records;
pub mod settlement_repo;
pub mod sqlite;

pub use record::Record;
pub use records::{
    ApartmentRepository, ContactRepository, ContractRepository, EmailRepository,
    EstateEmployeeRepository, EstateOwnerRepository, EstateRepository, HouseRepository,
    OfficeRepository, PersonRepository, PersonRoleRepository, PhoneRepository, RoleRepository,
    SettlementRepository,
};
pub use sqlite::SqliteRepository;

pub type RepoResult<T> = Result<T, RepoError>;

/// Repository error for record persistence and aggregate queries.
#[derive(Debug)]
pub enum RepoError {
    /// Record was rejected before reaching storage.
    Validation(ValidationError),
    /// Driver, constraint or schema failure reported by SQLite.
    Db(DbError),
    /// Persisted row can no longer be mapped to a valid record.
    InvalidData(String),
}

impl Display for RepoError {
    fn fmt(&self, f: &mut Formatter<'_>) -> std::fmt::Result {
        match self {
            Self::Validation(err) => write!(f, "{err}"),
            Self::Db(err) => write!(f, "{err}"),
            Self::InvalidData(message) => write!(f, "invalid persisted data: {message}"),
        }
    }
}

impl Error for RepoError {
    fn source(&self) -> Option<&(dyn Error + 'static)> {
        match self {
            Self::Validation(err) => Some(err),
            Self::Db(err) => Some(err),
            Self::InvalidData(_) => None,
        }
    }
}

impl From<ValidationError> for RepoError {
    fn from(value: ValidationError) -> Self {
        Self::Validation(value)
    }
}

impl From<DbError> for RepoError {
    fn from(value: DbError) -> Self {
        Self::Db(value)
    }
}

impl From<rusqlite::Error> for RepoError {
    fn from(value: rusqlite::Error) -> Self {
        Self::Db(DbError::Sqlite(value))
    }
}

/// CRUD contract implemented once per record type.
///
/// The storage binding is injected by the implementor (see
/// [`SqliteRepository::new`]); callers only see records and keys.
pub trait Repository<T: Record> {
    /// Returns every record ordered by primary key.
    fn get_all(&self) -> RepoResult<Vec<T>>;

    /// Returns the record with `id`, or `None` when absent.
    fn get_by_id(&self, id: &T::Key) -> RepoResult<Option<T>>;

    /// Validates and inserts `record`, returning it as persisted.
    fn create(&self, record: &T) -> RepoResult<T>;

    /// Loads `id`, lets `apply` overwrite fields, validates and persists.
    ///
    /// # Contract
    /// - Returns `Ok(None)` and writes nothing when `id` does not exist.
    /// - Key columns are never rewritten, even if `apply` touches them.
    fn update<F>(&self, id: &T::Key, apply: F) -> RepoResult<Option<T>>
    where
        F: FnOnce(&mut T);

    /// Deletes `id`. Deleting a missing key is a no-op.
    fn delete(&self, id: &T::Key) -> RepoResult<()>;
}
