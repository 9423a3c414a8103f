use crate::{ActiveBooking, Flight, ReservationError};

/// Owns the fixed set of flights and provides bounds-checked seat-count
/// mutation. The set is created once and never grows or shrinks; flights
/// keep their insertion order.
#[derive(Debug, Default)]
pub struct FlightInventory {
    flights: Vec<Flight>,
}

impl FlightInventory {
    /// Creates an inventory from a fixed list of flights.
    pub fn new(flights: Vec<Flight>) -> Self {
        Self { flights }
    }

    /// All flights in insertion order.
    pub fn flights(&self) -> &[Flight] {
        &self.flights
    }

    /// Books one seat on the flight with the given number. The lookup is
    /// an exact string match, no partial matching or case normalization.
    pub fn book_seat(&mut self, number: &str) -> Result<(), ReservationError> {
        let flight = self
            .find_flight_mut(number)
            .ok_or_else(|| ReservationError::FlightNotFound(number.to_string()))?;

        if flight.book_seat() {
            Ok(())
        } else {
            Err(ReservationError::NoSeatsAvailable(number.to_string()))
        }
    }

    /// Releases one seat on the flight with the given number. Cancelling
    /// with every seat already available is a no-op that still succeeds.
    pub fn cancel_booking(&mut self, number: &str) -> Result<(), ReservationError> {
        let flight = self
            .find_flight_mut(number)
            .ok_or_else(|| ReservationError::FlightNotFound(number.to_string()))?;

        flight.cancel_booking();
        Ok(())
    }

    /// The flights with at least one seat booked, in insertion order.
    pub fn active_bookings(&self) -> Vec<ActiveBooking> {
        self.flights
            .iter()
            .filter(|flight| flight.total_seats > flight.available_seats)
            .map(|flight| ActiveBooking {
                flight_number: flight.number.clone(),
                source: flight.source.clone(),
                destination: flight.destination.clone(),
                seats_booked: flight.seats_booked(),
            })
            .collect()
    }

    pub fn find_flight(&self, number: &str) -> Option<&Flight> {
        self.flights.iter().find(|flight| flight.number == number)
    }

    fn find_flight_mut(&mut self, number: &str) -> Option<&mut Flight> {
        self.flights
            .iter_mut()
            .find(|flight| flight.number == number)
    }
}
