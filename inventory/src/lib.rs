mod booking;
mod errors;
mod flight;
mod flight_inventory;

pub use booking::ActiveBooking;
pub use errors::ReservationError;
pub use flight::Flight;
pub use flight_inventory::FlightInventory;
