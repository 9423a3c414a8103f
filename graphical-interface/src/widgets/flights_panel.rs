use super::View;
use crate::state::ViewState;
use inventory::Flight;

const SEPARATOR: &str = "--------------------------------------";

/// Renders every flight as the text blocks of the original flight
/// details area.
pub struct WidgetFlightsPanel;

impl WidgetFlightsPanel {
    pub fn new() -> Self {
        Self
    }

    fn flights_text(flights: &[Flight]) -> String {
        let mut text = String::new();
        for flight in flights {
            text.push_str(&flight.info());
            text.push_str(SEPARATOR);
            text.push('\n');
        }
        text
    }
}

impl View for WidgetFlightsPanel {
    fn ui(&mut self, ui: &mut egui::Ui, state: &ViewState) {
        ui.label(
            egui::RichText::new(Self::flights_text(&state.flights))
                .color(egui::Color32::WHITE)
                .size(14.0),
        );
    }
}
