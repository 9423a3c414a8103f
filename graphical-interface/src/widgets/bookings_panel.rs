use super::View;
use crate::state::ViewState;

const SEPARATOR: &str = "--------------------------------------";

/// Renders the active bookings as the text blocks of the original
/// bookings area.
pub struct WidgetBookingsPanel;

impl WidgetBookingsPanel {
    pub fn new() -> Self {
        Self
    }
}

impl View for WidgetBookingsPanel {
    fn ui(&mut self, ui: &mut egui::Ui, state: &ViewState) {
        if state.bookings.is_empty() {
            ui.label("No active bookings.");
            return;
        }

        for booking in &state.bookings {
            ui.label(
                egui::RichText::new(booking.info())
                    .color(egui::Color32::WHITE)
                    .size(14.0),
            );
            ui.label(SEPARATOR);
        }
    }
}
