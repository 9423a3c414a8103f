/// Represents a flight with its route, total capacity and the seats
/// still available for booking.
#[derive(Debug, Clone, PartialEq)]
pub struct Flight {
    pub number: String,
    pub source: String,
    pub destination: String,
    pub total_seats: u32,
    pub available_seats: u32,
}

impl Flight {
    /// Creates a new flight with every seat available.
    pub fn new(number: &str, source: &str, destination: &str, total_seats: u32) -> Self {
        Self {
            number: number.to_string(),
            source: source.to_string(),
            destination: destination.to_string(),
            total_seats,
            available_seats: total_seats,
        }
    }

    /// Takes one seat if any is left. Returns whether the booking succeeded.
    pub fn book_seat(&mut self) -> bool {
        if self.available_seats > 0 {
            self.available_seats -= 1;
            true
        } else {
            false
        }
    }

    /// Releases one seat. Releasing beyond the total capacity is absorbed
    /// silently, a cancellation is not tied to a particular booking.
    pub fn cancel_booking(&mut self) {
        if self.available_seats < self.total_seats {
            self.available_seats += 1;
        }
    }

    pub fn seats_booked(&self) -> u32 {
        self.total_seats - self.available_seats
    }

    /// Formats the flight details as the multi-line text block shown by
    /// the graphical interface.
    pub fn info(&self) -> String {
        format!(
            "Flight Number: {}\nSource: {}\nDestination: {}\nTotal Seats: {}\nAvailable Seats: {}\n",
            self.number, self.source, self.destination, self.total_seats, self.available_seats
        )
    }
}
