use std::path::PathBuf;

use eframe::egui;

use crate::state::AppState;
use crate::ui::{panels, plot};

// ---------------------------------------------------------------------------
// eframe App implementation
// ---------------------------------------------------------------------------

pub struct PointViewerApp {
    pub state: AppState,
}

impl PointViewerApp {
    /// Create the app, optionally loading a file straight away.
    pub fn new(initial_file: Option<PathBuf>) -> Self {
        let mut state = AppState::default();
        if let Some(path) = initial_file {
            state.load_path(&path);
        }
        Self { state }
    }
}

impl Default for PointViewerApp {
    fn default() -> Self {
        Self::new(None)
    }
}

impl eframe::App for PointViewerApp {
    fn update(&mut self, ctx: &egui::Context, _frame: &mut eframe::Frame) {
        // ---- Top panel: menu bar ----
        egui::TopBottomPanel::top("top_bar").show(ctx, |ui| {
            panels::top_bar(ui, &mut self.state);
        });

        // ---- Left side panel: display options ----
        egui::SidePanel::left("options_panel")
            .default_width(200.0)
            .resizable(true)
            .show(ctx, |ui| {
                panels::side_panel(ui, &mut self.state);
            });

        // ---- Central panel: plot ----
        egui::CentralPanel::default().show(ctx, |ui| {
            plot::scatter_plot(ui, &self.state);
        });
    }
}
