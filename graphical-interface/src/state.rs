use crate::db::Provider;
use inventory::{ActiveBooking, Flight};

/// Tracks the flight and booking lists to display. The cached lists are
/// refreshed through the provider after every mutation.
pub struct ViewState {
    pub flights: Vec<Flight>,
    pub bookings: Vec<ActiveBooking>,
}

impl ViewState {
    pub fn new(flights: Vec<Flight>, bookings: Vec<ActiveBooking>) -> Self {
        Self { flights, bookings }
    }

    pub fn update_flights<P: Provider>(&mut self, store: &mut P) {
        self.flights = store.get_flights();
    }

    pub fn update_bookings<P: Provider>(&mut self, store: &mut P) {
        self.bookings = store.get_active_bookings();
    }
}
