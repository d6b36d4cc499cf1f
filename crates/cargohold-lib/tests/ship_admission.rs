mod common;

use cargohold_lib::{Error, Ship};

use common::{assert_mass, basic, cargo, demo_ship, gas_g456, liquid_l123, refrigerated_r789};

#[test]
fn third_container_exceeds_count_limit() {
    let mut ship = Ship::new("Tiny", 20.0, 2, 1_000_000.0).expect("valid ship");
    ship.load_container(basic("A", 10.0, 1.0)).unwrap();
    ship.load_container(basic("B", 10.0, 1.0)).unwrap();

    let err = ship
        .load_container(basic("C", 10.0, 1.0))
        .expect_err("third container exceeds count");
    match err {
        Error::CapacityExceeded {
            max_container_count,
            ..
        } => assert_eq!(max_container_count, 2),
        other => panic!("unexpected error: {:?}", other),
    }
    assert_eq!(ship.container_count(), 2);
}

#[test]
fn admission_counts_new_container_at_capacity() {
    let mut ship = Ship::new("Light", 20.0, 10, 1000.0).expect("valid ship");
    ship.load_container(basic("A", 300.0, 100.0)).unwrap();
    assert_mass(ship.total_weight(), 100.0);

    let empty = basic("B", 950.0, 0.0);
    assert_eq!(empty.current_cargo_mass(), 0.0);
    let err = ship
        .load_container(empty)
        .expect_err("capacity alone exceeds headroom");
    match err {
        Error::Overloaded {
            projected_weight,
            max_total_weight,
            ..
        } => {
            assert_mass(projected_weight, 1050.0);
            assert_mass(max_total_weight, 1000.0);
        }
        other => panic!("unexpected error: {:?}", other),
    }
    assert_eq!(ship.container_count(), 1);
}

#[test]
fn admission_allows_exact_fit() {
    let mut ship = Ship::new("Exact", 20.0, 10, 1000.0).expect("valid ship");
    ship.load_container(basic("A", 500.0, 100.0)).unwrap();
    ship.load_container(basic("B", 900.0, 0.0))
        .expect("100 + 900 equals the limit");
}

#[test]
fn admission_ignores_new_container_tare() {
    let mut ship = Ship::new("Light", 20.0, 5, 1000.0).expect("valid ship");
    let mut full = basic("F1", 1000.0, 200.0);
    full.load(&cargo("steel", 1000.0)).unwrap();

    ship.load_container(full).expect("capacity alone fits the limit");
    assert_mass(ship.total_weight(), 1200.0);
    assert!(ship.total_weight() > ship.max_total_weight());
}

#[test]
fn admission_ignores_refrigerated_cargo_over_capacity() {
    let mut ship = Ship::new("Cold", 20.0, 5, 2000.0).expect("valid ship");
    let mut reefer = refrigerated_r789();
    reefer.load(&cargo("meat", 5000.0)).unwrap();

    ship.load_container(reefer).expect("capacity 1200 fits the limit");
    assert_mass(ship.total_weight(), 5300.0);
}

#[test]
fn count_check_runs_before_weight_check() {
    let mut ship = Ship::new("Tiny", 20.0, 1, 100.0).expect("valid ship");
    ship.load_container(basic("A", 50.0, 10.0)).unwrap();
    let err = ship.load_container(basic("B", 5000.0, 10.0)).unwrap_err();
    assert!(matches!(err, Error::CapacityExceeded { .. }));
}

#[test]
fn ship_rejects_duplicate_serial() {
    let mut ship = demo_ship();
    ship.load_container(liquid_l123()).unwrap();
    let err = ship
        .load_container(liquid_l123())
        .expect_err("same serial twice");
    match err {
        Error::DuplicateSerial { serial_number, ship } => {
            assert_eq!(serial_number, "L123");
            assert_eq!(ship, "Ship1");
        }
        other => panic!("unexpected error: {:?}", other),
    }
    assert_eq!(ship.container_count(), 1);
}

#[test]
fn total_weight_sums_cargo_and_tare() {
    let mut ship = demo_ship();
    let mut liquid = liquid_l123();
    liquid.load(&cargo("milk", 700.0)).unwrap();
    let mut gas = gas_g456();
    gas.load(&cargo("helium", 300.0)).unwrap();

    ship.load_container(liquid).unwrap();
    ship.load_container(gas).unwrap();

    assert_mass(ship.total_weight(), 700.0 + 200.0 + 300.0 + 150.0);
    assert_mass(ship.remaining_weight(), 5000.0 - 1350.0);
}

#[test]
fn containers_keep_loading_order() {
    let mut ship = demo_ship();
    ship.load_container(refrigerated_r789()).unwrap();
    ship.load_container(liquid_l123()).unwrap();
    ship.load_container(gas_g456()).unwrap();

    let serials: Vec<&str> = ship.containers().iter().map(|c| c.serial_number()).collect();
    assert_eq!(serials, vec!["R789", "L123", "G456"]);
}

#[test]
fn unload_missing_container_is_noop() {
    let mut ship = demo_ship();
    ship.load_container(liquid_l123()).unwrap();
    let before = ship.clone();

    assert!(ship.unload_container("NOPE").is_none());
    assert_eq!(ship, before);
}

#[test]
fn unload_then_reload_restores_state() {
    let mut ship = demo_ship();
    let mut gas = gas_g456();
    gas.load(&cargo("helium", 400.0)).unwrap();
    ship.load_container(liquid_l123()).unwrap();
    ship.load_container(gas).unwrap();
    ship.load_container(refrigerated_r789()).unwrap();

    let weight_before = ship.total_weight();
    let mut serials_before: Vec<String> = ship
        .containers()
        .iter()
        .map(|c| c.serial_number().to_string())
        .collect();
    serials_before.sort();

    let removed = ship.unload_container("G456").expect("gas container on board");
    assert!(!ship.contains("G456"));
    ship.load_container(removed).expect("reload fits again");

    let mut serials_after: Vec<String> = ship
        .containers()
        .iter()
        .map(|c| c.serial_number().to_string())
        .collect();
    serials_after.sort();
    assert_eq!(serials_after, serials_before);
    assert_mass(ship.total_weight(), weight_before);
}

#[test]
fn summary_reflects_containers() {
    let mut ship = demo_ship();
    ship.load_container(liquid_l123()).unwrap();
    ship.load_container(refrigerated_r789()).unwrap();

    let summary = ship.summary();
    assert_eq!(summary.name, "Ship1");
    assert_eq!(summary.containers.len(), 2);
    assert_eq!(summary.containers[0].pressure, Some(5.0));
    assert_eq!(summary.containers[1].pressure, None);

    let json = serde_json::to_value(&summary).expect("summary serializes");
    assert_eq!(json["containers"][0]["container_type"], "liquid");
    assert!(json["containers"][1].get("pressure").is_none());
}

#[test]
fn rejects_invalid_ship_parameters() {
    assert!(matches!(
        Ship::new("", 10.0, 1, 100.0),
        Err(Error::InvalidShip { .. })
    ));
    assert!(matches!(
        Ship::new("S", -1.0, 1, 100.0),
        Err(Error::InvalidShip { .. })
    ));
    assert!(matches!(
        Ship::new("S", 10.0, 1, 0.0),
        Err(Error::InvalidShip { .. })
    ));
}
