use super::OperationOutcome;
use crate::db::Provider;

/// The operation a prompt submits when the user confirms.
#[derive(Debug, Clone, Copy, PartialEq)]
pub enum PromptAction {
    Book,
    Cancel,
}

impl PromptAction {
    fn title(&self) -> &'static str {
        match self {
            PromptAction::Book => "Book Flight",
            PromptAction::Cancel => "Cancel Booking",
        }
    }

    fn prompt(&self) -> &'static str {
        match self {
            PromptAction::Book => "Enter Flight Number to Book:",
            PromptAction::Cancel => "Enter Flight Number to Cancel:",
        }
    }
}

/// A window that asks for a flight number and submits a booking or a
/// cancellation. Any entry goes through the exact-match lookup, an empty
/// one is just a lookup miss. The outcome is left for the application to
/// pick up once the window closes.
pub struct WidgetBookingPrompt {
    action: PromptAction,
    is_open: bool,
    flight_number: String,
    pub outcome: Option<OperationOutcome>,
}

impl WidgetBookingPrompt {
    pub fn new(action: PromptAction) -> Self {
        Self {
            action,
            is_open: true,
            flight_number: String::new(),
            outcome: None,
        }
    }

    /// Widget interface for the flight-number prompt. Returns whether the
    /// window stays open.
    pub fn show<P: Provider>(&mut self, ctx: &egui::Context, store: &mut P) -> bool {
        let mut is_open = self.is_open;
        let mut should_close = false;

        egui::Window::new(self.action.title())
            .resizable(false)
            .collapsible(false)
            .open(&mut is_open)
            .anchor(egui::Align2::CENTER_CENTER, [0.0, 0.0])
            .show(ctx, |ui| {
                ui.vertical(|ui| {
                    ui.label(self.action.prompt());
                    ui.text_edit_singleline(&mut self.flight_number);

                    ui.add_space(5.0);
                    if ui.button("Submit").clicked() {
                        let outcome = match self.action {
                            PromptAction::Book => {
                                OperationOutcome::from_booking(store.book_seat(&self.flight_number))
                            }
                            PromptAction::Cancel => OperationOutcome::from_cancellation(
                                store.cancel_booking(&self.flight_number),
                            ),
                        };
                        self.outcome = Some(outcome);
                        should_close = true;
                    }
                });
            });

        self.is_open = is_open && !should_close;
        self.is_open
    }
}
