/// UI layer: egui panels and the scatter plot.
pub mod panels;
pub mod plot;
