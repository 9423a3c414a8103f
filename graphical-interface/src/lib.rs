use db::Store;

mod app;
pub mod db;
mod state;
mod widgets;
use app::ReservationsApp;

pub fn run() -> Result<(), eframe::Error> {
    let options = eframe::NativeOptions {
        viewport: egui::ViewportBuilder::default().with_inner_size([600.0, 400.0]),
        ..Default::default()
    };

    eframe::run_native(
        "Airline Reservation System",
        options,
        Box::new(|_cc| Ok(Box::new(ReservationsApp::new(Store::new())))),
    )
}
