//! Unit of work: one repository per record type over a shared connection.
//!
//! # Responsibility
//! - Act as the single access point a request or CLI command works through.
//!
//! # Invariants
//! - All repositories borrow the same connection.
//! - No cross-repository transaction: each call commits on its own.

use crate::repo::{
    ApartmentRepository, ContactRepository, ContractRepository, EmailRepository,
    EstateEmployeeRepository, EstateOwnerRepository, EstateRepository, HouseRepository,
    OfficeRepository, PersonRepository, PersonRoleRepository, PhoneRepository, RoleRepository,
    SettlementRepository, SqliteRepository,
};
use rusqlite::Connection;

pub struct UnitOfWork<'conn> {
    conn: &'conn Connection,
    pub apartments: ApartmentRepository<'conn>,
    pub contacts: ContactRepository<'conn>,
    pub contracts: ContractRepository<'conn>,
    pub emails: EmailRepository<'conn>,
    pub estates: EstateRepository<'conn>,
    pub estate_employees: EstateEmployeeRepository<'conn>,
    pub estate_owners: EstateOwnerRepository<'conn>,
    pub houses: HouseRepository<'conn>,
    pub offices: OfficeRepository<'conn>,
    pub people: PersonRepository<'conn>,
    pub person_roles: PersonRoleRepository<'conn>,
    pub phones: PhoneRepository<'conn>,
    pub roles: RoleRepository<'conn>,
    pub settlements: SettlementRepository<'conn>,
}

impl<'conn> UnitOfWork<'conn> {
    /// Builds every repository over `conn`, which must already be migrated.
    pub fn new(conn: &'conn Connection) -> Self {
        Self {
            conn,
            apartments: SqliteRepository::new(conn),
            contacts: SqliteRepository::new(conn),
            contracts: SqliteRepository::new(conn),
            emails: SqliteRepository::new(conn),
            estates: SqliteRepository::new(conn),
            estate_employees: SqliteRepository::new(conn),
            estate_owners: SqliteRepository::new(conn),
            houses: SqliteRepository::new(conn),
            offices: SqliteRepository::new(conn),
            people: SqliteRepository::new(conn),
            person_roles: SqliteRepository::new(conn),
            phones: SqliteRepository::new(conn),
            roles: SqliteRepository::new(conn),
            settlements: SqliteRepository::new(conn),
        }
    }

    pub fn connection(&self) -> &'conn Connection {
        self.conn
    }
}
