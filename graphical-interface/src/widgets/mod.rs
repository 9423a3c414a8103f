mod booking_prompt;
mod bookings_panel;
mod flights_panel;
mod flights_table;
mod outcome;
pub use booking_prompt::{PromptAction, WidgetBookingPrompt};
pub use bookings_panel::WidgetBookingsPanel;
pub use flights_panel::WidgetFlightsPanel;
pub use flights_table::WidgetFlightsTable;
pub use outcome::{OperationOutcome, WidgetOutcome};

use crate::state::ViewState;

pub trait View {
    fn ui(&mut self, ui: &mut egui::Ui, state: &ViewState);
}
