use crate::{
    db::{Provider, Store},
    state::ViewState,
    widgets::{
        PromptAction, View, WidgetBookingPrompt, WidgetBookingsPanel, WidgetFlightsPanel,
        WidgetFlightsTable, WidgetOutcome,
    },
};

/// The main application struct that manages the state and UI of the
/// reservation system.
///
/// `ReservationsApp` wires the action buttons, the flight and booking
/// panels and the prompt windows to the seat inventory behind the store.
/// It owns no booking logic itself.
pub struct ReservationsApp {
    store: Store,
    view_state: ViewState,
    show_flights: bool,
    show_bookings: bool,
    table_view: bool,
    flights_panel: WidgetFlightsPanel,
    flights_table: WidgetFlightsTable,
    bookings_panel: WidgetBookingsPanel,
    booking_prompt: Option<WidgetBookingPrompt>,
    outcome_widget: Option<WidgetOutcome>,
}

impl ReservationsApp {
    /// Creates a new `ReservationsApp` over a seeded store.
    pub fn new(mut store: Store) -> Self {
        let view_state = ViewState::new(store.get_flights(), store.get_active_bookings());

        Self {
            store,
            view_state,
            show_flights: false,
            show_bookings: false,
            table_view: false,
            flights_panel: WidgetFlightsPanel::new(),
            flights_table: WidgetFlightsTable::new(),
            bookings_panel: WidgetBookingsPanel::new(),
            booking_prompt: None,
            outcome_widget: None,
        }
    }
}

impl eframe::App for ReservationsApp {
    fn update(&mut self, ctx: &egui::Context, _frame: &mut eframe::Frame) {
        egui::TopBottomPanel::top("flight_details").show(ctx, |ui| {
            ui.add_space(5.0);
            ui.label(egui::RichText::new("Flights").strong().size(16.0));
            if self.show_flights {
                ui.checkbox(&mut self.table_view, "Table view");
                egui::ScrollArea::vertical()
                    .id_salt("flights_scroll")
                    .max_height(180.0)
                    .show(ui, |ui| {
                        if self.table_view {
                            self.flights_table.ui(ui, &self.view_state);
                        } else {
                            self.flights_panel.ui(ui, &self.view_state);
                        }
                    });
            } else {
                ui.label("Press \"View Flights\" to list the available flights.");
            }
            ui.add_space(5.0);
        });

        egui::TopBottomPanel::bottom("my_bookings").show(ctx, |ui| {
            ui.add_space(5.0);
            ui.label(egui::RichText::new("My Bookings").strong().size(16.0));
            if self.show_bookings {
                egui::ScrollArea::vertical()
                    .id_salt("bookings_scroll")
                    .max_height(120.0)
                    .show(ui, |ui| {
                        self.bookings_panel.ui(ui, &self.view_state);
                    });
            }
            ui.add_space(5.0);
        });

        egui::CentralPanel::default().show(ctx, |ui| {
            ui.add_space(10.0);
            ui.horizontal(|ui| {
                if ui.button("View Flights").clicked() {
                    self.view_state.update_flights(&mut self.store);
                    self.show_flights = true;
                }
                if ui.button("Book Flight").clicked() {
                    self.booking_prompt = Some(WidgetBookingPrompt::new(PromptAction::Book));
                }
                if ui.button("Cancel Booking").clicked() {
                    self.booking_prompt = Some(WidgetBookingPrompt::new(PromptAction::Cancel));
                }
                if ui.button("My Bookings").clicked() {
                    self.view_state.update_bookings(&mut self.store);
                    self.show_bookings = true;
                }
                if ui.button("Exit").clicked() {
                    ctx.send_viewport_cmd(egui::ViewportCommand::Close);
                }
            });
        });

        if let Some(mut widget) = self.booking_prompt.take() {
            if widget.show(ctx, &mut self.store) {
                self.booking_prompt = Some(widget);
            } else if let Some(outcome) = widget.outcome.take() {
                self.outcome_widget = Some(WidgetOutcome::new(outcome));
                self.view_state.update_flights(&mut self.store);
                self.view_state.update_bookings(&mut self.store);
            }
        }

        if let Some(widget) = &mut self.outcome_widget {
            if !widget.show(ctx) {
                self.outcome_widget = None;
            }
        }
    }
}
