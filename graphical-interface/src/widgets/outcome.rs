use inventory::ReservationError;

/// The possible results of a booking or cancellation, each shown to the
/// user as a single modal message.
#[derive(Debug, Clone, PartialEq)]
pub enum OperationOutcome {
    Booked,
    NoSeatsAvailable,
    FlightNotFound,
    Cancelled,
}

impl OperationOutcome {
    pub fn from_booking(result: Result<(), ReservationError>) -> Self {
        match result {
            Ok(()) => OperationOutcome::Booked,
            Err(ReservationError::NoSeatsAvailable(_)) => OperationOutcome::NoSeatsAvailable,
            Err(ReservationError::FlightNotFound(_)) => OperationOutcome::FlightNotFound,
        }
    }

    pub fn from_cancellation(result: Result<(), ReservationError>) -> Self {
        match result {
            Ok(()) => OperationOutcome::Cancelled,
            Err(_) => OperationOutcome::FlightNotFound,
        }
    }

    pub fn message(&self) -> &str {
        match self {
            OperationOutcome::Booked => "Booking successful!",
            OperationOutcome::NoSeatsAvailable => "Sorry, no available seats on this flight.",
            OperationOutcome::FlightNotFound => "Flight not found.",
            OperationOutcome::Cancelled => "Booking canceled successfully!",
        }
    }

    fn is_success(&self) -> bool {
        matches!(self, OperationOutcome::Booked | OperationOutcome::Cancelled)
    }
}

/// A modal window showing the outcome of the last operation.
pub struct WidgetOutcome {
    outcome: OperationOutcome,
}

impl WidgetOutcome {
    pub fn new(outcome: OperationOutcome) -> Self {
        Self { outcome }
    }

    /// Shows the message window. Returns whether it should stay open.
    pub fn show(&mut self, ctx: &egui::Context) -> bool {
        let mut open = true;
        let mut should_close = false;

        let color = if self.outcome.is_success() {
            egui::Color32::from_rgb(0, 255, 0)
        } else {
            egui::Color32::from_rgb(255, 100, 100)
        };

        egui::Window::new("Message")
            .resizable(false)
            .collapsible(false)
            .open(&mut open)
            .anchor(egui::Align2::CENTER_CENTER, [0.0, 0.0])
            .show(ctx, |ui| {
                ui.label(
                    egui::RichText::new(self.outcome.message())
                        .size(16.0)
                        .color(color),
                );
                ui.add_space(10.0);
                ui.vertical_centered(|ui| {
                    if ui.button("OK").clicked() {
                        should_close = true;
                    }
                });
            });

        open && !should_close
    }
}
