use std::fmt;

/// Represents the recoverable conditions a booking operation can hit.
#[derive(Debug, Clone, PartialEq)]
pub enum ReservationError {
    /// No flight matches the given flight number exactly.
    FlightNotFound(String),
    /// The flight exists but every seat is already taken.
    NoSeatsAvailable(String),
}

impl fmt::Display for ReservationError {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            ReservationError::FlightNotFound(number) => {
                write!(f, "Flight not found: {}", number)
            }
            ReservationError::NoSeatsAvailable(number) => {
                write!(f, "No available seats on flight {}", number)
            }
        }
    }
}

impl std::error::Error for ReservationError {}
