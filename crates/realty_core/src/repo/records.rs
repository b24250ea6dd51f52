//! Table mappings for every brokerage record.
//!
//! # Invariants
//! - Column lists mirror `db/migrations` exactly.
//! - Row parsing rejects values the domain types cannot represent
//!   (`InvalidData`) instead of masking them.

use crate::model::contact::{Contact, Email, Phone};
use crate::model::contract::Contract;
use crate::model::estate::{Apartment, Estate, EstateId, House, Office, Specialization};
use crate::model::link::{EstateEmployee, EstateOwner, PersonRole, Role, RoleId};
use crate::model::person::{Person, PersonId};
use crate::model::price::Price;
use crate::model::settlement::{Settlement, SettlementType};
use crate::model::validation::ValidationError;
use crate::repo::record::{
    date, flag, int, opt_date, opt_int, opt_real, opt_text, real, text, Record,
};
use crate::repo::sqlite::SqliteRepository;
use crate::repo::{RepoError, RepoResult};
use rusqlite::types::Value;
use rusqlite::{params, Connection, Row};

pub type SettlementRepository<'conn> = SqliteRepository<'conn, Settlement>;
pub type PersonRepository<'conn> = SqliteRepository<'conn, Person>;
pub type EstateRepository<'conn> = SqliteRepository<'conn, Estate>;
pub type ApartmentRepository<'conn> = SqliteRepository<'conn, Apartment>;
pub type HouseRepository<'conn> = SqliteRepository<'conn, House>;
pub type OfficeRepository<'conn> = SqliteRepository<'conn, Office>;
pub type ContractRepository<'conn> = SqliteRepository<'conn, Contract>;
pub type EstateOwnerRepository<'conn> = SqliteRepository<'conn, EstateOwner>;
pub type EstateEmployeeRepository<'conn> = SqliteRepository<'conn, EstateEmployee>;
pub type RoleRepository<'conn> = SqliteRepository<'conn, Role>;
pub type PersonRoleRepository<'conn> = SqliteRepository<'conn, PersonRole>;
pub type ContactRepository<'conn> = SqliteRepository<'conn, Contact>;
pub type PhoneRepository<'conn> = SqliteRepository<'conn, Phone>;
pub type EmailRepository<'conn> = SqliteRepository<'conn, Email>;

impl Record for Settlement {
    type Key = i64;

    const TABLE: &'static str = "settlement";
    const KEY_COLUMNS: &'static [&'static str] = &["settlement_id"];
    const COLUMNS: &'static [&'static str] =
        &["name", "amalgamated_hromada", "oblast", "settlement_type"];

    fn key(&self) -> Self::Key {
        self.settlement_id
    }

    fn key_values(key: &Self::Key) -> Vec<Value> {
        vec![int(*key)]
    }

    fn column_values(&self) -> Vec<Value> {
        vec![
            text(&self.name),
            text(&self.amalgamated_hromada),
            text(&self.oblast),
            text(self.settlement_type.label()),
        ]
    }

    fn from_row(row: &Row<'_>) -> RepoResult<Self> {
        let type_text: String = row.get("settlement_type")?;
        let settlement_type = type_text.parse::<SettlementType>().map_err(|_| {
            RepoError::InvalidData(format!(
                "invalid settlement type `{type_text}` in settlement.settlement_type"
            ))
        })?;

        Ok(Self {
            settlement_id: row.get("settlement_id")?,
            name: row.get("name")?,
            amalgamated_hromada: row.get("amalgamated_hromada")?,
            oblast: row.get("oblast")?,
            settlement_type,
        })
    }

    fn validate(&self) -> Result<(), ValidationError> {
        Settlement::validate(self)
    }
}

impl Record for Person {
    type Key = PersonId;

    const TABLE: &'static str = "person";
    const KEY_COLUMNS: &'static [&'static str] = &["person_id"];
    const COLUMNS: &'static [&'static str] =
        &["surname", "name", "patronym", "gender", "birth_date"];

    fn key(&self) -> Self::Key {
        self.person_id
    }

    fn key_values(key: &Self::Key) -> Vec<Value> {
        vec![int(*key)]
    }

    fn column_values(&self) -> Vec<Value> {
        vec![
            text(&self.surname),
            text(&self.name),
            opt_text(self.patronym.as_deref()),
            opt_text(self.gender.as_deref()),
            opt_date(self.birth_date),
        ]
    }

    fn from_row(row: &Row<'_>) -> RepoResult<Self> {
        Ok(Self {
            person_id: row.get("person_id")?,
            surname: row.get("surname")?,
            name: row.get("name")?,
            patronym: row.get("patronym")?,
            gender: row.get("gender")?,
            birth_date: row.get("birth_date")?,
        })
    }

    fn validate(&self) -> Result<(), ValidationError> {
        Person::validate(self)
    }
}

impl Record for Estate {
    type Key = EstateId;

    const TABLE: &'static str = "estate";
    const KEY_COLUMNS: &'static [&'static str] = &["estate_id"];
    const COLUMNS: &'static [&'static str] = &[
        "settlement_id",
        "street",
        "house_number",
        "apartment_number",
        "year_built",
        "transaction_type",
        "price",
        "status",
    ];

    fn key(&self) -> Self::Key {
        self.estate_id
    }

    fn key_values(key: &Self::Key) -> Vec<Value> {
        vec![int(*key)]
    }

    fn column_values(&self) -> Vec<Value> {
        vec![
            int(self.settlement_id),
            text(&self.street),
            text(&self.house_number),
            opt_text(self.apartment_number.as_deref()),
            opt_int(self.year_built),
            text(&self.transaction_type),
            opt_real(self.price.map(Price::value)),
            text(&self.status),
        ]
    }

    fn from_row(row: &Row<'_>) -> RepoResult<Self> {
        let price = match row.get::<_, Option<f64>>("price")? {
            Some(value) => Some(Price::new(value).map_err(|err| {
                RepoError::InvalidData(format!("{err} in estate.price"))
            })?),
            None => None,
        };

        Ok(Self {
            estate_id: row.get("estate_id")?,
            settlement_id: row.get("settlement_id")?,
            street: row.get("street")?,
            house_number: row.get("house_number")?,
            apartment_number: row.get("apartment_number")?,
            year_built: row.get("year_built")?,
            transaction_type: row.get("transaction_type")?,
            price,
            status: row.get("status")?,
        })
    }

    fn validate(&self) -> Result<(), ValidationError> {
        Estate::validate(self)
    }
}

impl Record for Apartment {
    type Key = EstateId;

    const TABLE: &'static str = "apartment";
    const KEY_COLUMNS: &'static [&'static str] = &["estate_id"];
    const COLUMNS: &'static [&'static str] = &[
        "residential_complex_name",
        "area",
        "kitchen_area",
        "rooms",
        "floor",
        "total_floors",
        "elevator",
        "balcony",
    ];

    fn key(&self) -> Self::Key {
        self.estate_id
    }

    fn key_values(key: &Self::Key) -> Vec<Value> {
        vec![int(*key)]
    }

    fn column_values(&self) -> Vec<Value> {
        vec![
            opt_text(self.residential_complex_name.as_deref()),
            real(self.area),
            opt_real(self.kitchen_area),
            int(self.rooms),
            int(self.floor),
            int(self.total_floors),
            flag(self.elevator),
            flag(self.balcony),
        ]
    }

    fn from_row(row: &Row<'_>) -> RepoResult<Self> {
        Ok(Self {
            estate_id: row.get("estate_id")?,
            residential_complex_name: row.get("residential_complex_name")?,
            area: row.get("area")?,
            kitchen_area: row.get("kitchen_area")?,
            rooms: row.get("rooms")?,
            floor: row.get("floor")?,
            total_floors: row.get("total_floors")?,
            elevator: row.get("elevator")?,
            balcony: row.get("balcony")?,
        })
    }

    fn validate(&self) -> Result<(), ValidationError> {
        Apartment::validate(self)
    }

    fn check_insert(&self, conn: &Connection) -> RepoResult<()> {
        ensure_single_specialization(conn, self.estate_id)
    }
}

impl Record for House {
    type Key = EstateId;

    const TABLE: &'static str = "house";
    const KEY_COLUMNS: &'static [&'static str] = &["estate_id"];
    const COLUMNS: &'static [&'static str] = &[
        "land_area",
        "floors",
        "rooms",
        "garage",
        "parking",
        "basement",
        "garden",
        "heating_type",
    ];

    fn key(&self) -> Self::Key {
        self.estate_id
    }

    fn key_values(key: &Self::Key) -> Vec<Value> {
        vec![int(*key)]
    }

    fn column_values(&self) -> Vec<Value> {
        vec![
            real(self.land_area),
            int(self.floors),
            int(self.rooms),
            flag(self.garage),
            flag(self.parking),
            flag(self.basement),
            flag(self.garden),
            text(&self.heating_type),
        ]
    }

    fn from_row(row: &Row<'_>) -> RepoResult<Self> {
        Ok(Self {
            estate_id: row.get("estate_id")?,
            land_area: row.get("land_area")?,
            floors: row.get("floors")?,
            rooms: row.get("rooms")?,
            garage: row.get("garage")?,
            parking: row.get("parking")?,
            basement: row.get("basement")?,
            garden: row.get("garden")?,
            heating_type: row.get("heating_type")?,
        })
    }

    fn validate(&self) -> Result<(), ValidationError> {
        House::validate(self)
    }

    fn check_insert(&self, conn: &Connection) -> RepoResult<()> {
        ensure_single_specialization(conn, self.estate_id)
    }
}

impl Record for Office {
    type Key = EstateId;

    const TABLE: &'static str = "office";
    const KEY_COLUMNS: &'static [&'static str] = &["estate_id"];
    const COLUMNS: &'static [&'static str] = &[
        "area",
        "floor",
        "total_floors",
        "openspace",
        "conference_rooms",
        "parking",
        "elevator",
        "security",
    ];

    fn key(&self) -> Self::Key {
        self.estate_id
    }

    fn key_values(key: &Self::Key) -> Vec<Value> {
        vec![int(*key)]
    }

    fn column_values(&self) -> Vec<Value> {
        vec![
            real(self.area),
            int(self.floor),
            int(self.total_floors),
            flag(self.openspace),
            int(self.conference_rooms),
            flag(self.parking),
            flag(self.elevator),
            opt_text(self.security.as_deref()),
        ]
    }

    fn from_row(row: &Row<'_>) -> RepoResult<Self> {
        Ok(Self {
            estate_id: row.get("estate_id")?,
            area: row.get("area")?,
            floor: row.get("floor")?,
            total_floors: row.get("total_floors")?,
            openspace: row.get("openspace")?,
            conference_rooms: row.get("conference_rooms")?,
            parking: row.get("parking")?,
            elevator: row.get("elevator")?,
            security: row.get("security")?,
        })
    }

    fn validate(&self) -> Result<(), ValidationError> {
        Office::validate(self)
    }

    fn check_insert(&self, conn: &Connection) -> RepoResult<()> {
        ensure_single_specialization(conn, self.estate_id)
    }
}

impl Record for Contract {
    type Key = i64;

    const TABLE: &'static str = "contract";
    const KEY_COLUMNS: &'static [&'static str] = &["contract_id"];
    const COLUMNS: &'static [&'static str] = &[
        "estate_id",
        "employee_id",
        "client_id",
        "contract_type",
        "date_signed",
        "start_date",
        "end_date",
        "payment_amount",
        "fee_percentage",
        "terms",
    ];

    fn key(&self) -> Self::Key {
        self.contract_id
    }

    fn key_values(key: &Self::Key) -> Vec<Value> {
        vec![int(*key)]
    }

    fn column_values(&self) -> Vec<Value> {
        vec![
            int(self.estate_id),
            opt_int(self.employee_id),
            opt_int(self.client_id),
            text(&self.contract_type),
            date(self.date_signed),
            opt_date(self.start_date),
            opt_date(self.end_date),
            opt_real(self.payment_amount),
            opt_real(self.fee_percentage),
            opt_text(self.terms.as_deref()),
        ]
    }

    fn from_row(row: &Row<'_>) -> RepoResult<Self> {
        Ok(Self {
            contract_id: row.get("contract_id")?,
            estate_id: row.get("estate_id")?,
            employee_id: row.get("employee_id")?,
            client_id: row.get("client_id")?,
            contract_type: row.get("contract_type")?,
            date_signed: row.get("date_signed")?,
            start_date: row.get("start_date")?,
            end_date: row.get("end_date")?,
            payment_amount: row.get("payment_amount")?,
            fee_percentage: row.get("fee_percentage")?,
            terms: row.get("terms")?,
        })
    }

    fn validate(&self) -> Result<(), ValidationError> {
        Contract::validate(self)
    }
}

impl Record for EstateOwner {
    type Key = (EstateId, PersonId);

    const TABLE: &'static str = "estate_owner";
    const KEY_COLUMNS: &'static [&'static str] = &["estate_id", "owner_id"];
    const COLUMNS: &'static [&'static str] = &[];

    fn key(&self) -> Self::Key {
        (self.estate_id, self.owner_id)
    }

    fn key_values(key: &Self::Key) -> Vec<Value> {
        vec![int(key.0), int(key.1)]
    }

    fn column_values(&self) -> Vec<Value> {
        Vec::new()
    }

    fn from_row(row: &Row<'_>) -> RepoResult<Self> {
        Ok(Self {
            estate_id: row.get("estate_id")?,
            owner_id: row.get("owner_id")?,
        })
    }
}

impl Record for EstateEmployee {
    type Key = (EstateId, PersonId);

    const TABLE: &'static str = "estate_employee";
    const KEY_COLUMNS: &'static [&'static str] = &["estate_id", "person_id"];
    const COLUMNS: &'static [&'static str] = &["role_at_estate", "assigned_from", "assigned_to"];

    fn key(&self) -> Self::Key {
        (self.estate_id, self.person_id)
    }

    fn key_values(key: &Self::Key) -> Vec<Value> {
        vec![int(key.0), int(key.1)]
    }

    fn column_values(&self) -> Vec<Value> {
        vec![
            opt_text(self.role_at_estate.as_deref()),
            opt_date(self.assigned_from),
            opt_date(self.assigned_to),
        ]
    }

    fn from_row(row: &Row<'_>) -> RepoResult<Self> {
        Ok(Self {
            estate_id: row.get("estate_id")?,
            person_id: row.get("person_id")?,
            role_at_estate: row.get("role_at_estate")?,
            assigned_from: row.get("assigned_from")?,
            assigned_to: row.get("assigned_to")?,
        })
    }

    fn validate(&self) -> Result<(), ValidationError> {
        EstateEmployee::validate(self)
    }
}

impl Record for Role {
    type Key = RoleId;

    const TABLE: &'static str = "role";
    const KEY_COLUMNS: &'static [&'static str] = &["role_id"];
    const COLUMNS: &'static [&'static str] = &["name"];

    fn key(&self) -> Self::Key {
        self.role_id
    }

    fn key_values(key: &Self::Key) -> Vec<Value> {
        vec![int(*key)]
    }

    fn column_values(&self) -> Vec<Value> {
        vec![text(&self.name)]
    }

    fn from_row(row: &Row<'_>) -> RepoResult<Self> {
        Ok(Self {
            role_id: row.get("role_id")?,
            name: row.get("name")?,
        })
    }

    fn validate(&self) -> Result<(), ValidationError> {
        Role::validate(self)
    }
}

impl Record for PersonRole {
    type Key = (PersonId, RoleId);

    const TABLE: &'static str = "person_role";
    const KEY_COLUMNS: &'static [&'static str] = &["person_id", "role_id"];
    const COLUMNS: &'static [&'static str] = &["assigned_date"];

    fn key(&self) -> Self::Key {
        (self.person_id, self.role_id)
    }

    fn key_values(key: &Self::Key) -> Vec<Value> {
        vec![int(key.0), int(key.1)]
    }

    fn column_values(&self) -> Vec<Value> {
        vec![opt_date(self.assigned_date)]
    }

    fn from_row(row: &Row<'_>) -> RepoResult<Self> {
        Ok(Self {
            person_id: row.get("person_id")?,
            role_id: row.get("role_id")?,
            assigned_date: row.get("assigned_date")?,
        })
    }
}

impl Record for Contact {
    type Key = i64;

    const TABLE: &'static str = "contact";
    const KEY_COLUMNS: &'static [&'static str] = &["contact_id"];
    const COLUMNS: &'static [&'static str] = &["client_id", "employee_id", "estate_id"];

    fn key(&self) -> Self::Key {
        self.contact_id
    }

    fn key_values(key: &Self::Key) -> Vec<Value> {
        vec![int(*key)]
    }

    fn column_values(&self) -> Vec<Value> {
        vec![
            opt_int(self.client_id),
            opt_int(self.employee_id),
            opt_int(self.estate_id),
        ]
    }

    fn from_row(row: &Row<'_>) -> RepoResult<Self> {
        Ok(Self {
            contact_id: row.get("contact_id")?,
            client_id: row.get("client_id")?,
            employee_id: row.get("employee_id")?,
            estate_id: row.get("estate_id")?,
        })
    }
}

impl Record for Phone {
    type Key = String;

    const TABLE: &'static str = "phone";
    const KEY_COLUMNS: &'static [&'static str] = &["number"];
    const COLUMNS: &'static [&'static str] = &["person_id", "type"];

    fn key(&self) -> Self::Key {
        self.number.clone()
    }

    fn key_values(key: &Self::Key) -> Vec<Value> {
        vec![text(key)]
    }

    fn column_values(&self) -> Vec<Value> {
        vec![int(self.person_id), opt_text(self.phone_type.as_deref())]
    }

    fn from_row(row: &Row<'_>) -> RepoResult<Self> {
        Ok(Self {
            number: row.get("number")?,
            person_id: row.get("person_id")?,
            phone_type: row.get("type")?,
        })
    }

    fn validate(&self) -> Result<(), ValidationError> {
        Phone::validate(self)
    }
}

impl Record for Email {
    type Key = String;

    const TABLE: &'static str = "email";
    const KEY_COLUMNS: &'static [&'static str] = &["address"];
    const COLUMNS: &'static [&'static str] = &["person_id"];

    fn key(&self) -> Self::Key {
        self.address.clone()
    }

    fn key_values(key: &Self::Key) -> Vec<Value> {
        vec![text(key)]
    }

    fn column_values(&self) -> Vec<Value> {
        vec![int(self.person_id)]
    }

    fn from_row(row: &Row<'_>) -> RepoResult<Self> {
        Ok(Self {
            address: row.get("address")?,
            person_id: row.get("person_id")?,
        })
    }

    fn validate(&self) -> Result<(), ValidationError> {
        Email::validate(self)
    }
}

/// An estate carries at most one apartment, house or office row, including
/// a second row of the same kind.
fn ensure_single_specialization(conn: &Connection, estate_id: EstateId) -> RepoResult<()> {
    for existing in Specialization::ALL {
        let exists: i64 = conn.query_row(
            &format!(
                "SELECT EXISTS(SELECT 1 FROM {} WHERE estate_id = ?1);",
                existing.table()
            ),
            params![estate_id],
            |row| row.get(0),
        )?;
        if exists == 1 {
            return Err(ValidationError::DuplicateSpecialization {
                estate_id,
                existing: existing.table(),
            }
            .into());
        }
    }
    Ok(())
}
