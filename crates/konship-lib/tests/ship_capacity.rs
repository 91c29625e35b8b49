mod common;

use konship_lib::{Error, Registry, RegistryConfig, ShipSpec, WeightPolicy};

use common::{gas, liquid, recording_registry, refrigerated};

fn create_containers(registry: &mut Registry, count: usize) -> Vec<String> {
    (0..count)
        .map(|_| {
            registry
                .create_container(refrigerated())
                .expect("container")
                .serial_number()
                .to_string()
        })
        .collect()
}

#[test]
fn third_container_exceeds_capacity_of_two() {
    let mut registry = Registry::default();
    let ship = registry
        .create_ship(ShipSpec::new(18.5, 2, 100_000.0))
        .expect("ship")
        .serial_number()
        .to_string();
    let containers = create_containers(&mut registry, 3);

    registry
        .load_onto_ship(&containers[0], &ship)
        .expect("first fits");
    registry
        .load_onto_ship(&containers[1], &ship)
        .expect("second fits");
    let err = registry
        .load_onto_ship(&containers[2], &ship)
        .expect_err("third exceeds capacity");

    match err {
        Error::CapacityExceeded { ship: s, capacity } => {
            assert_eq!(s, ship.as_str());
            assert_eq!(capacity, 2);
        }
        other => panic!("unexpected error: {:?}", other),
    }

    let ship = registry.find_ship(&ship).expect("ship present");
    assert_eq!(ship.loaded_count(), 2);
    assert!(ship.is_full());
    assert_eq!(ship.loaded()[0], containers[0].as_str());
    assert_eq!(ship.loaded()[1], containers[1].as_str());
    assert!(registry.ship_of(&containers[2]).is_none());
}

#[test]
fn container_cannot_ride_two_ships() {
    let mut registry = Registry::default();
    let first = registry
        .create_ship(ShipSpec::new(10.0, 5, 100_000.0))
        .expect("ship")
        .serial_number()
        .to_string();
    let second = registry
        .create_ship(ShipSpec::new(12.0, 5, 100_000.0))
        .expect("ship")
        .serial_number()
        .to_string();
    let container = create_containers(&mut registry, 1).remove(0);

    registry
        .load_onto_ship(&container, &first)
        .expect("first load");
    let err = registry
        .load_onto_ship(&container, &second)
        .expect_err("already aboard the first ship");
    match err {
        Error::AlreadyLoaded { container: c, ship } => {
            assert_eq!(c, container.as_str());
            assert_eq!(ship, first.as_str());
        }
        other => panic!("unexpected error: {:?}", other),
    }
    assert_eq!(registry.find_ship(&second).expect("ship").loaded_count(), 0);
}

#[test]
fn removing_a_ship_frees_its_containers() {
    let mut registry = Registry::default();
    let first = registry
        .create_ship(ShipSpec::new(10.0, 1, 100_000.0))
        .expect("ship")
        .serial_number()
        .to_string();
    let second = registry
        .create_ship(ShipSpec::new(10.0, 1, 100_000.0))
        .expect("ship")
        .serial_number()
        .to_string();
    let container = create_containers(&mut registry, 1).remove(0);

    registry.load_onto_ship(&container, &first).expect("load");
    let removed = registry.remove_ship(&first).expect("remove");
    assert_eq!(removed.loaded_count(), 1);
    assert!(registry.find_ship(&first).is_err());
    assert_eq!(registry.containers().len(), 1);

    registry
        .load_onto_ship(&container, &second)
        .expect("container is free again");
    assert_eq!(
        registry.ship_of(&container).map(|s| s.serial_number().to_string()),
        Some(second)
    );
}

#[test]
fn unknown_serials_are_reported_before_loading() {
    let mut registry = Registry::default();
    let ship = registry
        .create_ship(ShipSpec::new(10.0, 1, 1000.0))
        .expect("ship")
        .serial_number()
        .to_string();

    let err = registry
        .load_onto_ship("KON-L-1", &ship)
        .expect_err("no containers exist");
    assert!(matches!(err, Error::ContainerNotFound { .. }));

    let container = create_containers(&mut registry, 1).remove(0);
    let err = registry
        .load_onto_ship(&container, "KON-S-9")
        .expect_err("no such ship");
    assert!(matches!(err, Error::ShipNotFound { .. }));
    assert!(registry.ship_of(&container).is_none());
}

#[test]
fn weight_capacity_is_only_flagged_when_unenforced() {
    let (mut registry, _notifier) = recording_registry(RegistryConfig::default());
    let ship = registry
        .create_ship(ShipSpec::new(10.0, 4, 500.0))
        .expect("ship")
        .serial_number()
        .to_string();
    let heavy = registry
        .create_container(gas())
        .expect("container")
        .serial_number()
        .to_string();
    registry.load_cargo(&heavy, 900.0).expect("cargo fits container");

    registry
        .load_onto_ship(&heavy, &ship)
        .expect("count-only policy loads overweight container");
    assert_eq!(registry.ship_cargo_mass(&ship).expect("mass"), 1000.0);
}

#[test]
fn weight_capacity_is_enforced_on_request() {
    let config = RegistryConfig {
        weight_policy: WeightPolicy::Enforced,
        ..RegistryConfig::default()
    };
    let (mut registry, _notifier) = recording_registry(config);
    let ship = registry
        .create_ship(ShipSpec::new(10.0, 4, 1000.0))
        .expect("ship")
        .serial_number()
        .to_string();
    let light = registry
        .create_container(liquid(false))
        .expect("container")
        .serial_number()
        .to_string();
    let heavy = registry
        .create_container(gas())
        .expect("container")
        .serial_number()
        .to_string();
    registry.load_cargo(&light, 400.0).expect("cargo");
    registry.load_cargo(&heavy, 600.0).expect("cargo");

    registry.load_onto_ship(&light, &ship).expect("500 of 1000");
    let err = registry
        .load_onto_ship(&heavy, &ship)
        .expect_err("1200 exceeds 1000");
    match err {
        Error::WeightCapacityExceeded {
            capacity,
            projected,
            ..
        } => {
            assert_eq!(capacity, 1000.0);
            assert_eq!(projected, 1200.0);
        }
        other => panic!("unexpected error: {:?}", other),
    }
    assert_eq!(registry.find_ship(&ship).expect("ship").loaded_count(), 1);
    assert_eq!(registry.ship_cargo_mass(&ship).expect("mass"), 500.0);
}

#[test]
fn capacity_is_checked_before_weight() {
    let config = RegistryConfig {
        weight_policy: WeightPolicy::Enforced,
        ..RegistryConfig::default()
    };
    let mut registry = Registry::new(config);
    let ship = registry
        .create_ship(ShipSpec::new(10.0, 0, 0.0))
        .expect("ship")
        .serial_number()
        .to_string();
    let container = create_containers(&mut registry, 1).remove(0);

    let err = registry
        .load_onto_ship(&container, &ship)
        .expect_err("no slots");
    assert!(matches!(err, Error::CapacityExceeded { capacity: 0, .. }));
}
