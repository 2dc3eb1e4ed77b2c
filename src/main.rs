mod app;
mod color;
mod data;
mod state;
mod ui;

use std::path::PathBuf;

use app::PointViewerApp;
use eframe::egui;

fn main() -> eframe::Result {
    env_logger::init();

    // Optional positional argument: a CSV file to load at startup.
    let initial_file = std::env::args().nth(1).map(PathBuf::from);

    let options = eframe::NativeOptions {
        viewport: egui::ViewportBuilder::default()
            .with_inner_size([1000.0, 700.0])
            .with_min_inner_size([500.0, 350.0]),
        ..Default::default()
    };

    eframe::run_native(
        "Point Viewer",
        options,
        Box::new(move |_cc| Ok(Box::new(PointViewerApp::new(initial_file)))),
    )
}
