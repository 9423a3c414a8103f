use inventory::{Flight, FlightInventory, ReservationError};

fn demo_inventory() -> FlightInventory {
    FlightInventory::new(vec![
        Flight::new("AA101", "New York", "Los Angeles", 100),
        Flight::new("AA102", "Chicago", "San Francisco", 150),
        Flight::new("AA103", "Miami", "Dallas", 120),
    ])
}

fn assert_invariant(inventory: &FlightInventory) {
    for flight in inventory.flights() {
        assert!(
            flight.available_seats <= flight.total_seats,
            "flight {} has {} available seats out of {}",
            flight.number,
            flight.available_seats,
            flight.total_seats
        );
    }
}

#[test]
fn test_seat_counts_stay_in_bounds_across_mixed_sequences() {
    let mut inventory = demo_inventory();

    // Alternate books and cancels, including over-cancellation and misses.
    let actions = [
        ("book", "AA101"),
        ("book", "AA101"),
        ("cancel", "AA102"),
        ("book", "AA103"),
        ("cancel", "AA101"),
        ("cancel", "AA101"),
        ("cancel", "AA101"),
        ("book", "ZZ999"),
        ("cancel", "ZZ999"),
        ("book", "AA102"),
    ];

    for (action, number) in actions {
        let _ = match action {
            "book" => inventory.book_seat(number),
            _ => inventory.cancel_booking(number),
        };
        assert_invariant(&inventory);
    }

    let aa101 = inventory.find_flight("AA101").expect("flight exists");
    assert_eq!(aa101.available_seats, 100);
    let aa102 = inventory.find_flight("AA102").expect("flight exists");
    assert_eq!(aa102.available_seats, 149);
    let aa103 = inventory.find_flight("AA103").expect("flight exists");
    assert_eq!(aa103.available_seats, 119);
}

#[test]
fn test_booking_lifecycle_for_a_single_flight() {
    let mut inventory = demo_inventory();

    inventory.book_seat("AA101").expect("booking succeeds");
    let flight = inventory.find_flight("AA101").expect("flight exists");
    assert_eq!(flight.available_seats, 99);

    let bookings = inventory.active_bookings();
    assert_eq!(bookings.len(), 1);
    assert_eq!(bookings[0].flight_number, "AA101");
    assert_eq!(bookings[0].source, "New York");
    assert_eq!(bookings[0].destination, "Los Angeles");
    assert_eq!(bookings[0].seats_booked, 1);

    inventory.cancel_booking("AA101").expect("cancel succeeds");
    let flight = inventory.find_flight("AA101").expect("flight exists");
    assert_eq!(flight.available_seats, 100);
    assert!(inventory.active_bookings().is_empty());
}

#[test]
fn test_exhausting_a_flight_then_releasing_it() {
    let mut inventory = FlightInventory::new(vec![Flight::new("AA900", "Lima", "Bogota", 3)]);

    for _ in 0..3 {
        inventory.book_seat("AA900").expect("booking succeeds");
    }
    assert_eq!(
        inventory.book_seat("AA900"),
        Err(ReservationError::NoSeatsAvailable("AA900".to_string()))
    );

    let bookings = inventory.active_bookings();
    assert_eq!(bookings[0].seats_booked, 3);

    for _ in 0..3 {
        inventory.cancel_booking("AA900").expect("cancel succeeds");
    }
    let flight = inventory.find_flight("AA900").expect("flight exists");
    assert_eq!(flight.available_seats, 3);
}
