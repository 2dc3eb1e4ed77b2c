use eframe::egui::{self, Color32, RichText, ScrollArea, Ui};

use crate::state::{AppState, Marker};

// ---------------------------------------------------------------------------
// Left side panel – display options and color group filters
// ---------------------------------------------------------------------------

/// Render the left options panel.
pub fn side_panel(ui: &mut Ui, state: &mut AppState) {
    ui.heading("Display");
    ui.separator();

    // ---- Marker selector ----
    ui.strong("Marker");
    egui::ComboBox::from_id_salt("marker")
        .selected_text(state.marker.to_string())
        .show_ui(ui, |ui: &mut Ui| {
            for marker in Marker::ALL {
                if ui
                    .selectable_label(state.marker == marker, marker.to_string())
                    .clicked()
                {
                    state.marker = marker;
                }
            }
        });

    // ---- Header toggle (re-parses the current file) ----
    let mut skip_header = state.parse_options.skip_header;
    if ui
        .checkbox(&mut skip_header, "First line is a header")
        .changed()
    {
        state.parse_options.skip_header = skip_header;
        state.reload();
    }
    ui.separator();

    let dataset = match &state.dataset {
        Some(ds) => ds,
        None => {
            ui.label("No dataset loaded.");
            return;
        }
    };

    // Clone the group set so we can mutate state inside the loop.
    let groups: Vec<_> = dataset.unique_colors().iter().copied().collect();

    // ---- Color group filters ----
    let n_selected = state.filters.len();
    let n_total = groups.len();
    ui.strong(format!("Color groups  ({n_selected}/{n_total})"));

    ui.horizontal(|ui: &mut Ui| {
        if ui.small_button("All").clicked() {
            state.select_all();
        }
        if ui.small_button("None").clicked() {
            state.select_none();
        }
    });

    ScrollArea::vertical()
        .auto_shrink([false, false])
        .show(ui, |ui: &mut Ui| {
            for key in groups {
                let is_selected = state.filters.contains(&key);

                // Color the label with the group's plot colour.
                let mut text = RichText::new(key.to_string());
                if let Some(cm) = &state.color_map {
                    text = text.color(cm.color_for(key));
                }

                let mut checked = is_selected;
                if ui.checkbox(&mut checked, text).changed() {
                    state.toggle_color_group(key);
                }
            }
        });
}

// ---------------------------------------------------------------------------
// Top bar
// ---------------------------------------------------------------------------

/// Render the top menu / toolbar.
pub fn top_bar(ui: &mut Ui, state: &mut AppState) {
    egui::menu::bar(ui, |ui: &mut Ui| {
        ui.menu_button("File", |ui: &mut Ui| {
            if ui.button("Open…").clicked() {
                open_file_dialog(state);
                ui.close_menu();
            }
        });

        ui.separator();

        if let Some(ds) = &state.dataset {
            ui.label(format!(
                "{} points loaded, {} visible",
                ds.len(),
                state.visible_indices.len()
            ));
        }

        if let Some(msg) = &state.status_message {
            ui.separator();
            ui.label(RichText::new(msg).color(Color32::RED));
        }
    });
}

// ---------------------------------------------------------------------------
// File dialog
// ---------------------------------------------------------------------------

pub fn open_file_dialog(state: &mut AppState) {
    let file = rfd::FileDialog::new()
        .set_title("Open point data")
        .add_filter("CSV", &["csv"])
        .pick_file();

    if let Some(path) = file {
        state.load_path(&path);
    }
}
