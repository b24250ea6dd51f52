mod common;

use common::{apartment, contract, date, estate, seed_market, settlement};
use realty_core::db::open_db_in_memory;
use realty_core::model::link::EstateOwner;
use realty_core::model::person::Person;
use realty_core::repo::settlement_repo::DEFAULT_HOT_SETTLEMENT_THRESHOLD;
use realty_core::{
    ApartmentQueries, ContractQueries, EstateQueries, PersonQueries, Repository,
    SettlementQueries, UnitOfWork,
};

fn approx(actual: Option<f64>, expected: f64) {
    let actual = actual.expect("aggregate should be present");
    assert!(
        (actual - expected).abs() < 1e-6,
        "expected {expected}, got {actual}"
    );
}

#[test]
fn lviv_room_stats_cover_apartments_only() {
    let conn = open_db_in_memory().unwrap();
    let uow = UnitOfWork::new(&conn);
    seed_market(&uow);

    let stats = uow.apartments.stats_by_rooms().unwrap();

    assert_eq!(stats.len(), 2);
    assert_eq!(stats[0].rooms, 2);
    assert_eq!(stats[0].supply_count, 1);
    approx(stats[0].avg_price, 100_000.0);
    assert_eq!(stats[1].rooms, 3);
    approx(stats[1].max_price, 150_000.0);
}

#[test]
fn room_stats_group_equal_room_counts() {
    let conn = open_db_in_memory().unwrap();
    let uow = UnitOfWork::new(&conn);
    uow.settlements
        .create(&settlement(1, "Lviv", "Обласний центр"))
        .unwrap();
    uow.estates.create(&estate(1, 1, Some(80_000.0))).unwrap();
    uow.estates.create(&estate(2, 1, Some(120_000.0))).unwrap();
    uow.estates.create(&estate(3, 1, None)).unwrap();
    uow.apartments.create(&apartment(1, 2)).unwrap();
    uow.apartments.create(&apartment(2, 2)).unwrap();
    uow.apartments.create(&apartment(3, 2)).unwrap();

    let stats = uow.apartments.stats_by_rooms().unwrap();

    assert_eq!(stats.len(), 1);
    assert_eq!(stats[0].supply_count, 3);
    approx(stats[0].avg_price, 100_000.0);
    approx(stats[0].max_price, 120_000.0);
}

#[test]
fn hot_settlements_respect_threshold_and_order() {
    let conn = open_db_in_memory().unwrap();
    let uow = UnitOfWork::new(&conn);
    seed_market(&uow);

    let hot = uow
        .settlements
        .hot_settlements(DEFAULT_HOT_SETTLEMENT_THRESHOLD)
        .unwrap();
    let summary = hot
        .iter()
        .map(|row| (row.name.as_str(), row.number_of_estates))
        .collect::<Vec<_>>();
    assert_eq!(summary, vec![("Lviv", 3), ("Odesa", 1)]);

    let busy = uow.settlements.hot_settlements(2).unwrap();
    assert_eq!(busy.len(), 1);
    assert_eq!(busy[0].settlement_id, 1);

    let all = uow.settlements.hot_settlements(0).unwrap();
    assert_eq!(all.last().unwrap().name, "Vynnyky");
    assert_eq!(all.last().unwrap().number_of_estates, 0);
}

#[test]
fn hot_settlement_ties_break_by_id() {
    let conn = open_db_in_memory().unwrap();
    let uow = UnitOfWork::new(&conn);
    uow.settlements.create(&settlement(7, "Stryi", "Місто")).unwrap();
    uow.settlements.create(&settlement(4, "Sambir", "Місто")).unwrap();
    uow.estates.create(&estate(1, 7, None)).unwrap();
    uow.estates.create(&estate(2, 4, None)).unwrap();

    let ids = uow
        .settlements
        .hot_settlements(1)
        .unwrap()
        .into_iter()
        .map(|row| row.settlement_id)
        .collect::<Vec<_>>();
    assert_eq!(ids, vec![4, 7]);
}

#[test]
fn market_analysis_averages_by_specialization() {
    let conn = open_db_in_memory().unwrap();
    let uow = UnitOfWork::new(&conn);
    seed_market(&uow);

    let rows = uow.settlements.market_analysis().unwrap();

    assert_eq!(rows.len(), 3);
    approx(rows[0].avg_house_price, 300_000.0);
    approx(rows[0].avg_apartment_price, 125_000.0);
    approx(rows[1].avg_house_price, 250_000.0);
    assert_eq!(rows[1].avg_apartment_price, None);
    assert_eq!(rows[2].avg_house_price, None);
    assert_eq!(rows[2].avg_apartment_price, None);
}

#[test]
fn estate_counts_include_empty_settlements() {
    let conn = open_db_in_memory().unwrap();
    let uow = UnitOfWork::new(&conn);
    seed_market(&uow);

    let counts = uow
        .settlements
        .estate_count_by_settlement()
        .unwrap()
        .into_iter()
        .map(|row| (row.settlement_id, row.estate_count))
        .collect::<Vec<_>>();
    assert_eq!(counts, vec![(1, 3), (2, 1), (3, 0)]);
}

#[test]
fn price_matrix_groups_by_settlement_and_transaction() {
    let conn = open_db_in_memory().unwrap();
    let uow = UnitOfWork::new(&conn);
    seed_market(&uow);
    let mut rental = estate(13, 1, Some(900.0));
    rental.transaction_type = "rent".to_string();
    uow.estates.create(&rental).unwrap();

    let matrix = uow.estates.price_matrix().unwrap();
    let cells = matrix
        .iter()
        .map(|row| {
            (
                row.settlement_name.as_str(),
                row.transaction_type.as_str(),
                row.inventory_count,
            )
        })
        .collect::<Vec<_>>();

    assert_eq!(
        cells,
        vec![("Lviv", "rent", 1), ("Lviv", "sale", 3), ("Odesa", "sale", 1)]
    );
    approx(matrix[1].max_price, 300_000.0);
}

#[test]
fn top_employees_rank_by_sales_volume() {
    let conn = open_db_in_memory().unwrap();
    let uow = UnitOfWork::new(&conn);
    seed_market(&uow);

    let ranking = uow.people.top_revenue_employees().unwrap();

    assert_eq!(ranking.len(), 2);
    assert_eq!(ranking[0].person_id, 3);
    assert_eq!(ranking[0].deals_closed, 2);
    approx(ranking[0].total_sales_volume, 13_000.0);
    assert_eq!(ranking[1].person_id, 2);
}

#[test]
fn top_owners_apply_asset_threshold() {
    let conn = open_db_in_memory().unwrap();
    let uow = UnitOfWork::new(&conn);
    seed_market(&uow);

    let owners = uow.people.top_owners(0.0).unwrap();
    let totals = owners
        .iter()
        .map(|row| (row.person_id, row.total_assets))
        .collect::<Vec<_>>();
    assert_eq!(totals, vec![(1, 400_000.0), (2, 250_000.0)]);

    let wealthy = uow.people.top_owners(300_000.0).unwrap();
    assert_eq!(wealthy.len(), 1);
    assert_eq!(wealthy[0].surname, "Koval");
}

#[test]
fn monthly_revenue_buckets_by_signing_month() {
    let conn = open_db_in_memory().unwrap();
    let uow = UnitOfWork::new(&conn);
    seed_market(&uow);

    let months = uow.contracts.monthly_revenue_stream().unwrap();

    assert_eq!(months.len(), 2);
    assert_eq!(months[0].month, date(2024, 3, 1));
    assert_eq!(months[0].total_deals, 2);
    approx(months[0].total_revenue, 13_000.0);
    assert_eq!(months[1].month, date(2024, 5, 1));
}

#[test]
fn count_with_payment_above_is_strict() {
    let conn = open_db_in_memory().unwrap();
    let uow = UnitOfWork::new(&conn);
    seed_market(&uow);

    assert_eq!(uow.contracts.count_with_payment_above(5_000.0).unwrap(), 2);
    assert_eq!(uow.contracts.count_with_payment_above(6_000.0).unwrap(), 1);
}

#[test]
fn aggregates_on_empty_database_are_empty() {
    let conn = open_db_in_memory().unwrap();
    let uow = UnitOfWork::new(&conn);

    assert!(uow.apartments.stats_by_rooms().unwrap().is_empty());
    assert!(uow.settlements.hot_settlements(1).unwrap().is_empty());
    assert!(uow.people.top_owners(0.0).unwrap().is_empty());
    assert!(uow.contracts.monthly_revenue_stream().unwrap().is_empty());
    assert!(uow.estates.price_matrix().unwrap().is_empty());
}

/// People 9 and 3 end up with identical totals; 9 is inserted first.
fn seed_equal_people(uow: &UnitOfWork<'_>) {
    uow.settlements
        .create(&settlement(1, "Lviv", "Обласний центр"))
        .unwrap();
    uow.people.create(&Person::new(9, "Tkachenko", "Petro")).unwrap();
    uow.people.create(&Person::new(3, "Bondar", "Iryna")).unwrap();
    uow.estates.create(&estate(1, 1, Some(200_000.0))).unwrap();
    uow.estates.create(&estate(2, 1, Some(200_000.0))).unwrap();
    uow.estate_owners
        .create(&EstateOwner { estate_id: 1, owner_id: 9 })
        .unwrap();
    uow.estate_owners
        .create(&EstateOwner { estate_id: 2, owner_id: 3 })
        .unwrap();
    uow.contracts
        .create(&contract(1, 1, Some(9), date(2024, 1, 10), Some(7_500.0)))
        .unwrap();
    uow.contracts
        .create(&contract(2, 2, Some(3), date(2024, 1, 12), Some(7_500.0)))
        .unwrap();
}

#[test]
fn employee_ranking_ties_break_by_person_id() {
    let conn = open_db_in_memory().unwrap();
    let uow = UnitOfWork::new(&conn);
    seed_equal_people(&uow);

    let ids = uow
        .people
        .top_revenue_employees()
        .unwrap()
        .into_iter()
        .map(|row| row.person_id)
        .collect::<Vec<_>>();
    assert_eq!(ids, vec![3, 9]);
}

#[test]
fn owner_ranking_ties_break_by_person_id() {
    let conn = open_db_in_memory().unwrap();
    let uow = UnitOfWork::new(&conn);
    seed_equal_people(&uow);

    let ids = uow
        .people
        .top_owners(0.0)
        .unwrap()
        .into_iter()
        .map(|row| row.person_id)
        .collect::<Vec<_>>();
    assert_eq!(ids, vec![3, 9]);
}
