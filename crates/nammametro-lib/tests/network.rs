use nammametro_lib::{Error, MetroNetwork, MAX_STATIONS};

#[test]
fn connections_are_symmetric() {
    let mut network = MetroNetwork::new();
    network.add_station("Hebbal", "Blue").expect("under capacity");
    network
        .add_station("Kempapura", "Blue")
        .expect("under capacity");
    network.add_connection("Hebbal", "Kempapura", 1, 2.8);

    let forward = network.link(0, 1).expect("forward link");
    let backward = network.link(1, 0).expect("backward link");
    assert_eq!(forward.time, backward.time);
    assert_eq!(forward.fare, backward.fare);
}

#[test]
fn connection_to_unregistered_station_is_dropped() {
    let mut network = MetroNetwork::new();
    network.add_station("X", "Test").expect("under capacity");

    network.add_connection("X", "Y", 3, 2.0);
    network.add_connection("Y", "X", 3, 2.0);

    assert!(network.neighbours(0).is_empty());
    assert_eq!(network.station_count(), 1);
}

#[test]
fn station_capacity_is_enforced() {
    let mut network = MetroNetwork::new();
    for index in 0..MAX_STATIONS {
        network
            .add_station(&format!("Station {index}"), "Test")
            .expect("under capacity");
    }

    let error = network
        .add_station("One Too Many", "Test")
        .expect_err("over capacity");
    assert!(matches!(
        error,
        Error::CapacityExceeded {
            limit: MAX_STATIONS,
            ..
        }
    ));
    assert_eq!(network.station_count(), MAX_STATIONS);
}

#[test]
fn unknown_name_resolution_suggests_close_matches() {
    let mut network = MetroNetwork::new();
    network
        .add_station("Banashankari", "Green")
        .expect("under capacity");
    network
        .add_station("Bommasandra", "Yellow")
        .expect("under capacity");

    let error = network.resolve_station("Banashankar").expect_err("typo");
    let message = format!("{error}");
    assert!(message.contains("unknown station name: Banashankar"));
    assert!(message.contains("Did you mean"));
    assert!(message.contains("Banashankari"));
}
