use std::path::Path;

use inventory::{ActiveBooking, Flight, FlightInventory, ReservationError};
use logger::{Color, Logger};

const LOG_DIR: &str = "logs";

/// A trait that defines the required methods for a provider to manage the
/// seat inventory. The interface layer only talks to the inventory through
/// this trait, so widgets can be driven headlessly in tests.
pub trait Provider {
    fn get_flights(&mut self) -> Vec<Flight>;

    fn get_active_bookings(&mut self) -> Vec<ActiveBooking>;

    fn book_seat(&mut self, number: &str) -> Result<(), ReservationError>;

    fn cancel_booking(&mut self, number: &str) -> Result<(), ReservationError>;
}

/// Owns the in-memory flight inventory used by the graphical interface and
/// logs every booking operation. There is no persistence, the seeded
/// flights live for the lifetime of the process.
pub struct Store {
    inventory: FlightInventory,
    logger: Option<Logger>,
}

impl Default for Store {
    fn default() -> Self {
        Self::new()
    }
}

impl Store {
    /// Creates a store seeded with the demo flights, logging to
    /// `logs/reservations.log`.
    pub fn new() -> Self {
        let logger = match Logger::new(Path::new(LOG_DIR), "reservations") {
            Ok(logger) => Some(logger),
            Err(e) => {
                eprintln!("Failed to create logger: {}", e);
                None
            }
        };

        Self::with_inventory(
            FlightInventory::new(vec![
                Flight::new("AA101", "New York", "Los Angeles", 100),
                Flight::new("AA102", "Chicago", "San Francisco", 150),
                Flight::new("AA103", "Miami", "Dallas", 120),
            ]),
            logger,
        )
    }

    /// Creates a store over an arbitrary inventory. Passing no logger
    /// disables logging, which the tests use.
    pub fn with_inventory(inventory: FlightInventory, logger: Option<Logger>) -> Self {
        Self { inventory, logger }
    }

    fn log_info(&self, message: &str) {
        if let Some(logger) = &self.logger {
            let _ = logger.info(message, Color::Green, true);
        }
    }

    fn log_warn(&self, message: &str) {
        if let Some(logger) = &self.logger {
            let _ = logger.warn(message, true);
        }
    }
}

impl Provider for Store {
    fn get_flights(&mut self) -> Vec<Flight> {
        self.inventory.flights().to_vec()
    }

    fn get_active_bookings(&mut self) -> Vec<ActiveBooking> {
        self.inventory.active_bookings()
    }

    fn book_seat(&mut self, number: &str) -> Result<(), ReservationError> {
        match self.inventory.book_seat(number) {
            Ok(()) => {
                self.log_info(&format!("Booked one seat on flight {}.", number));
                Ok(())
            }
            Err(e) => {
                self.log_warn(&format!("Booking on flight {} failed: {}", number, e));
                Err(e)
            }
        }
    }

    fn cancel_booking(&mut self, number: &str) -> Result<(), ReservationError> {
        match self.inventory.cancel_booking(number) {
            Ok(()) => {
                self.log_info(&format!("Cancelled one booking on flight {}.", number));
                Ok(())
            }
            Err(e) => {
                self.log_warn(&format!("Cancellation on flight {} failed: {}", number, e));
                Err(e)
            }
        }
    }
}
