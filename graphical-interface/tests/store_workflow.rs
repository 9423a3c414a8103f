use std::fs;
use std::path::Path;

use graphical_interface::db::{Provider, Store};
use inventory::{Flight, FlightInventory, ReservationError};
use logger::Logger;

// Drives the store exactly as the interface does, without any display.

#[test]
fn test_full_booking_workflow_without_a_display() {
    let mut store = Store::with_inventory(
        FlightInventory::new(vec![
            Flight::new("AA101", "New York", "Los Angeles", 100),
            Flight::new("AA102", "Chicago", "San Francisco", 150),
            Flight::new("AA103", "Miami", "Dallas", 120),
        ]),
        None,
    );

    // View Flights
    let flights = store.get_flights();
    assert_eq!(flights.len(), 3);
    assert_eq!(flights[0].available_seats, 100);

    // Book Flight
    store.book_seat("AA101").expect("booking succeeds");
    let flights = store.get_flights();
    assert_eq!(flights[0].available_seats, 99);

    // My Bookings
    let bookings = store.get_active_bookings();
    assert_eq!(bookings.len(), 1);
    assert_eq!(bookings[0].flight_number, "AA101");
    assert_eq!(bookings[0].source, "New York");
    assert_eq!(bookings[0].destination, "Los Angeles");
    assert_eq!(bookings[0].seats_booked, 1);

    // Cancel Booking
    store.cancel_booking("AA101").expect("cancel succeeds");
    assert_eq!(store.get_flights()[0].available_seats, 100);
    assert!(store.get_active_bookings().is_empty());

    // Unknown flight numbers are surfaced, never fatal.
    assert_eq!(
        store.book_seat("AA104"),
        Err(ReservationError::FlightNotFound("AA104".to_string()))
    );
    assert_eq!(
        store.cancel_booking("AA104"),
        Err(ReservationError::FlightNotFound("AA104".to_string()))
    );
}

#[test]
fn test_operations_are_logged() {
    let log_dir = Path::new("/tmp/test_store_workflow_logs");
    let logger = Logger::new(log_dir, "reservations").expect("Failed to create logger");

    let mut store = Store::with_inventory(
        FlightInventory::new(vec![Flight::new("AA900", "Lima", "Bogota", 1)]),
        Some(logger),
    );

    store.book_seat("AA900").expect("booking succeeds");
    let _ = store.book_seat("AA900");
    store.cancel_booking("AA900").expect("cancel succeeds");

    let log_contents =
        fs::read_to_string(log_dir.join("reservations.log")).expect("Failed to read log file");
    assert!(log_contents.contains("Booked one seat on flight AA900."));
    assert!(log_contents.contains("Booking on flight AA900 failed"));
    assert!(log_contents.contains("Cancelled one booking on flight AA900."));

    fs::remove_dir_all(log_dir).expect("Failed to remove test directory");
}
