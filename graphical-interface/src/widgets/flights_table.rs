use super::View;
use crate::state::ViewState;
use egui_extras::{Column, TableBuilder};

/// Renders every flight with its route and seat counts as a table.
pub struct WidgetFlightsTable;

impl WidgetFlightsTable {
    pub fn new() -> Self {
        Self
    }
}

impl View for WidgetFlightsTable {
    fn ui(&mut self, ui: &mut egui::Ui, state: &ViewState) {
        ui.group(|ui| {
            TableBuilder::new(ui)
                .striped(true)
                .cell_layout(egui::Layout::left_to_right(egui::Align::Center))
                .column(Column::remainder().at_least(70.0)) // Flight number column
                .column(Column::remainder().at_least(100.0)) // Source column
                .column(Column::remainder().at_least(100.0)) // Destination column
                .column(Column::remainder().at_least(60.0)) // Total seats column
                .column(Column::remainder().at_least(60.0)) // Available seats column
                .header(25.0, |mut header| {
                    for title in ["Flight", "Source", "Destination", "Total", "Available"] {
                        header.col(|ui| {
                            ui.strong(
                                egui::RichText::new(title)
                                    .color(egui::Color32::YELLOW)
                                    .size(16.0),
                            );
                        });
                    }
                })
                .body(|mut body| {
                    for flight in &state.flights {
                        body.row(20.0, |mut row| {
                            let cells = [
                                flight.number.clone(),
                                flight.source.clone(),
                                flight.destination.clone(),
                                flight.total_seats.to_string(),
                                flight.available_seats.to_string(),
                            ];
                            for cell in cells {
                                row.col(|ui| {
                                    ui.label(
                                        egui::RichText::new(cell)
                                            .color(egui::Color32::WHITE)
                                            .size(14.0),
                                    );
                                });
                            }
                        });
                    }
                });
        });
    }
}
