use std::collections::{BTreeMap, BTreeSet};

use eframe::egui::Color32;
use palette::{Hsl, IntoColor, Srgb};

use crate::data::model::ColorKey;

// ---------------------------------------------------------------------------
// Color palette generator
// ---------------------------------------------------------------------------

/// Generates `n` visually distinct colours using evenly spaced hues.
pub fn generate_palette(n: usize) -> Vec<Color32> {
    if n == 0 {
        return Vec::new();
    }
    (0..n)
        .map(|i| {
            let hue = (i as f32 / n as f32) * 360.0;
            let hsl = Hsl::new(hue, 0.75, 0.55);
            let rgb: Srgb = hsl.into_color();
            Color32::from_rgb(
                (rgb.red * 255.0) as u8,
                (rgb.green * 255.0) as u8,
                (rgb.blue * 255.0) as u8,
            )
        })
        .collect()
}

// ---------------------------------------------------------------------------
// Color mapping: color scalar → Color32
// ---------------------------------------------------------------------------

/// Maps each distinct color scalar in a dataset to a distinct display colour.
#[derive(Debug, Clone)]
pub struct ColorMap {
    mapping: BTreeMap<ColorKey, Color32>,
    default_color: Color32,
}

impl ColorMap {
    /// Build a colour map from the dataset's unique color values.
    pub fn new(unique_colors: &BTreeSet<ColorKey>) -> Self {
        let palette = generate_palette(unique_colors.len());
        let mapping: BTreeMap<ColorKey, Color32> = unique_colors
            .iter()
            .copied()
            .zip(palette.into_iter())
            .collect();

        ColorMap {
            mapping,
            default_color: Color32::GRAY,
        }
    }

    /// Look up the display colour for a color scalar.
    pub fn color_for(&self, key: ColorKey) -> Color32 {
        self.mapping.get(&key).copied().unwrap_or(self.default_color)
    }

    /// Return the legend entries (group label → colour) for the UI.
    pub fn legend_entries(&self) -> Vec<(String, Color32)> {
        self.mapping
            .iter()
            .map(|(k, c)| (k.to_string(), *c))
            .collect()
    }
}
