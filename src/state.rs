use std::fmt;
use std::path::{Path, PathBuf};

use anyhow::Context;

use crate::color::ColorMap;
use crate::data::filter::{filtered_indices, init_filter_state, FilterState};
use crate::data::loader::{self, ParseOptions};
use crate::data::model::{ColorKey, PointDataset};

// ---------------------------------------------------------------------------
// Marker glyph
// ---------------------------------------------------------------------------

/// Scatter marker glyph. The two styles found in the wild for this data are
/// a dot and an X; both are offered as explicit configuration.
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq)]
pub enum Marker {
    #[default]
    Dot,
    Cross,
}

impl Marker {
    /// All marker choices, for UI selectors.
    pub const ALL: [Marker; 2] = [Marker::Dot, Marker::Cross];
}

impl fmt::Display for Marker {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Marker::Dot => write!(f, "Dot"),
            Marker::Cross => write!(f, "Cross"),
        }
    }
}

// ---------------------------------------------------------------------------
// Application state
// ---------------------------------------------------------------------------

/// The full UI state, independent of rendering.
pub struct AppState {
    /// Loaded dataset (None until a file is loaded).
    pub dataset: Option<PointDataset>,

    /// Path of the loaded file, kept so option changes can re-parse it.
    pub source_path: Option<PathBuf>,

    /// Parser configuration applied on (re)load.
    pub parse_options: ParseOptions,

    /// Scatter marker glyph.
    pub marker: Marker,

    /// Selected (visible) color groups.
    pub filters: FilterState,

    /// Indices of points passing the current filters (cached).
    pub visible_indices: Vec<usize>,

    /// Active colour map.
    pub color_map: Option<ColorMap>,

    /// Status / error message shown in the UI.
    pub status_message: Option<String>,

    /// Whether a file loading operation is in progress.
    pub loading: bool,
}

impl Default for AppState {
    fn default() -> Self {
        Self {
            dataset: None,
            source_path: None,
            parse_options: ParseOptions::default(),
            marker: Marker::default(),
            filters: FilterState::new(),
            visible_indices: Vec::new(),
            color_map: None,
            status_message: None,
            loading: false,
        }
    }
}

impl AppState {
    /// Parse `path` with the current options and install the result.
    /// Failures are logged and surfaced in the status line.
    pub fn load_path(&mut self, path: &Path) {
        self.loading = true;
        let result = loader::load_csv(path, self.parse_options)
            .with_context(|| format!("loading {}", path.display()));

        match result {
            Ok(dataset) => {
                log::info!(
                    "loaded {} points ({} color groups) from {}",
                    dataset.len(),
                    dataset.unique_colors().len(),
                    path.display()
                );
                self.source_path = Some(path.to_path_buf());
                self.set_dataset(dataset);
            }
            Err(e) => {
                log::error!("failed to load file: {e:#}");
                self.status_message = Some(format!("Error: {e:#}"));
                self.loading = false;
            }
        }
    }

    /// Re-parse the current file, e.g. after the header option changed.
    pub fn reload(&mut self) {
        if let Some(path) = self.source_path.clone() {
            self.load_path(&path);
        }
    }

    /// Ingest a newly loaded dataset, initialise filters and colours.
    pub fn set_dataset(&mut self, dataset: PointDataset) {
        self.filters = init_filter_state(&dataset);
        self.visible_indices = (0..dataset.len()).collect();
        self.color_map = Some(ColorMap::new(dataset.unique_colors()));

        self.dataset = Some(dataset);
        self.status_message = None;
        self.loading = false;
    }

    /// Recompute `visible_indices` after a filter change.
    pub fn refilter(&mut self) {
        if let Some(ds) = &self.dataset {
            self.visible_indices = filtered_indices(ds, &self.filters);
        }
    }

    /// Toggle a single color group's visibility.
    pub fn toggle_color_group(&mut self, key: ColorKey) {
        if !self.filters.remove(&key) {
            self.filters.insert(key);
        }
        self.refilter();
    }

    /// Show all color groups.
    pub fn select_all(&mut self) {
        if let Some(ds) = &self.dataset {
            self.filters = ds.unique_colors().clone();
            self.refilter();
        }
    }

    /// Hide all color groups.
    pub fn select_none(&mut self) {
        self.filters.clear();
        self.refilter();
    }
}
