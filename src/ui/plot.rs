use std::collections::BTreeMap;

use eframe::egui::{Color32, Ui};
use egui_plot::{Legend, MarkerShape, Plot, PlotPoints, Points};

use crate::data::model::ColorKey;
use crate::state::{AppState, Marker};

// ---------------------------------------------------------------------------
// Scatter plot (central panel)
// ---------------------------------------------------------------------------

fn marker_shape(marker: Marker) -> MarkerShape {
    match marker {
        Marker::Dot => MarkerShape::Circle,
        Marker::Cross => MarkerShape::Cross,
    }
}

/// Render the scatter plot in the central panel.
pub fn scatter_plot(ui: &mut Ui, state: &AppState) {
    let dataset = match &state.dataset {
        Some(ds) => ds,
        None => {
            ui.centered_and_justified(|ui: &mut Ui| {
                ui.heading("Open a file to view points  (File → Open…)");
            });
            return;
        }
    };

    // Group visible points by color so each group becomes one legend entry.
    let mut groups: BTreeMap<ColorKey, Vec<[f64; 2]>> = BTreeMap::new();
    for &idx in &state.visible_indices {
        groups
            .entry(ColorKey(dataset.colors[idx]))
            .or_default()
            .push([dataset.x1s[idx], dataset.x2s[idx]]);
    }

    let shape = marker_shape(state.marker);

    Plot::new("scatter_plot")
        .legend(Legend::default())
        .x_axis_label("x1")
        .y_axis_label("x2")
        .allow_boxed_zoom(true)
        .allow_drag(true)
        .allow_scroll(true)
        .allow_zoom(true)
        .show(ui, |plot_ui| {
            for (key, coords) in groups {
                let color = state
                    .color_map
                    .as_ref()
                    .map(|cm| cm.color_for(key))
                    .unwrap_or(Color32::LIGHT_BLUE);

                let points: PlotPoints = coords.into();
                let series = Points::new(points)
                    .name(key.to_string())
                    .color(color)
                    .shape(shape)
                    .radius(3.0);

                plot_ui.points(series);
            }
        });
}
