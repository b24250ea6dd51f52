#![allow(dead_code)]

use chrono::NaiveDate;
use realty_core::model::contract::Contract;
use realty_core::model::estate::{Apartment, Estate, House, Office};
use realty_core::model::link::EstateOwner;
use realty_core::model::person::Person;
use realty_core::{Repository, Settlement, UnitOfWork};

pub fn date(year: i32, month: u32, day: u32) -> NaiveDate {
    NaiveDate::from_ymd_opt(year, month, day).unwrap()
}

pub fn settlement(id: i64, name: &str, kind: &str) -> Settlement {
    Settlement::new(
        id,
        name,
        format!("{name} hromada"),
        format!("{name} oblast"),
        kind,
    )
    .unwrap()
}

pub fn estate(id: i64, settlement_id: i64, price: Option<f64>) -> Estate {
    let mut estate = Estate::new(
        id,
        settlement_id,
        "Shevchenka",
        id.to_string(),
        "sale",
        "active",
    );
    if let Some(price) = price {
        estate.set_price(price).unwrap();
    }
    estate
}

pub fn apartment(estate_id: i64, rooms: i32) -> Apartment {
    Apartment {
        estate_id,
        residential_complex_name: Some("Green Park".to_string()),
        area: 54.5,
        kitchen_area: Some(9.0),
        rooms,
        floor: 3,
        total_floors: 9,
        elevator: true,
        balcony: false,
    }
}

pub fn house(estate_id: i64) -> House {
    House {
        estate_id,
        land_area: 600.0,
        floors: 2,
        rooms: 5,
        garage: true,
        parking: true,
        basement: false,
        garden: true,
        heating_type: "gas".to_string(),
    }
}

pub fn office(estate_id: i64) -> Office {
    Office {
        estate_id,
        area: 120.0,
        floor: 2,
        total_floors: 5,
        openspace: true,
        conference_rooms: 1,
        parking: false,
        elevator: true,
        security: Some("24/7".to_string()),
    }
}

pub fn contract(
    id: i64,
    estate_id: i64,
    employee_id: Option<i64>,
    signed: NaiveDate,
    payment: Option<f64>,
) -> Contract {
    let mut contract = Contract::new(id, estate_id, "sale", signed);
    contract.employee_id = employee_id;
    contract.payment_amount = payment;
    contract
}

/// Lviv with two apartments and a house; Odesa with one priced house.
///
/// People 1 and 2 own estates; person 3 is an agent on two contracts.
pub fn seed_market(uow: &UnitOfWork<'_>) {
    uow.settlements
        .create(&settlement(1, "Lviv", "Обласний центр"))
        .unwrap();
    uow.settlements
        .create(&settlement(2, "Odesa", "Oblast center"))
        .unwrap();
    uow.settlements
        .create(&settlement(3, "Vynnyky", "Місто"))
        .unwrap();

    uow.estates.create(&estate(10, 1, Some(100_000.0))).unwrap();
    uow.estates.create(&estate(11, 1, Some(150_000.0))).unwrap();
    uow.estates.create(&estate(12, 1, Some(300_000.0))).unwrap();
    uow.estates.create(&estate(20, 2, Some(250_000.0))).unwrap();

    uow.apartments.create(&apartment(10, 2)).unwrap();
    uow.apartments.create(&apartment(11, 3)).unwrap();
    uow.houses.create(&house(12)).unwrap();
    uow.houses.create(&house(20)).unwrap();

    for (id, surname, name) in [(1, "Koval", "Olena"), (2, "Melnyk", "Taras"), (3, "Bondar", "Iryna")] {
        uow.people.create(&Person::new(id, surname, name)).unwrap();
    }

    uow.estate_owners
        .create(&EstateOwner { estate_id: 10, owner_id: 1 })
        .unwrap();
    uow.estate_owners
        .create(&EstateOwner { estate_id: 12, owner_id: 1 })
        .unwrap();
    uow.estate_owners
        .create(&EstateOwner { estate_id: 20, owner_id: 2 })
        .unwrap();

    uow.contracts
        .create(&contract(100, 10, Some(3), date(2024, 3, 5), Some(4_000.0)))
        .unwrap();
    uow.contracts
        .create(&contract(101, 12, Some(3), date(2024, 3, 28), Some(9_000.0)))
        .unwrap();
    uow.contracts
        .create(&contract(102, 20, Some(2), date(2024, 5, 1), Some(6_000.0)))
        .unwrap();
}
