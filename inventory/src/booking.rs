/// Summary of the seats currently booked on a flight. A booking is
/// implicit in the gap between total and available seats, there is no
/// per-reservation record.
#[derive(Debug, Clone, PartialEq)]
pub struct ActiveBooking {
    pub flight_number: String,
    pub source: String,
    pub destination: String,
    pub seats_booked: u32,
}

impl ActiveBooking {
    /// Formats the booking as the multi-line text block shown by the
    /// graphical interface.
    pub fn info(&self) -> String {
        format!(
            "Flight Number: {}\nSource: {}\nDestination: {}\nSeats Booked: {}\n",
            self.flight_number, self.source, self.destination, self.seats_booked
        )
    }
}
