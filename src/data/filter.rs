use std::collections::BTreeSet;

use super::model::{ColorKey, PointDataset};

// ---------------------------------------------------------------------------
// Filter predicate: which color groups are visible
// ---------------------------------------------------------------------------

/// Selection state: the set of color groups currently shown.
/// An empty set means nothing is selected, so nothing is shown.
pub type FilterState = BTreeSet<ColorKey>;

/// Initialise a [`FilterState`] with every color group selected.
pub fn init_filter_state(dataset: &PointDataset) -> FilterState {
    dataset.unique_colors().clone()
}

/// Return indices of points whose color group is selected, in dataset order.
///
/// When every group is selected this is just `0..len` and the per-point
/// lookup is skipped.
pub fn filtered_indices(dataset: &PointDataset, filters: &FilterState) -> Vec<usize> {
    if filters.len() == dataset.unique_colors().len()
        && dataset.unique_colors().iter().all(|k| filters.contains(k))
    {
        return (0..dataset.len()).collect();
    }

    dataset
        .colors
        .iter()
        .enumerate()
        .filter(|(_, &c)| filters.contains(&ColorKey(c)))
        .map(|(i, _)| i)
        .collect()
}

#[cfg(test)]
mod tests {
    use super::*;

    fn dataset() -> PointDataset {
        PointDataset::from_columns(
            vec![0.0, 1.0, 2.0, 3.0],
            vec![0.0, 1.0, 2.0, 3.0],
            vec![0.0, 1.0, 0.0, 2.0],
        )
    }

    #[test]
    fn all_selected_shows_everything() {
        let ds = dataset();
        let filters = init_filter_state(&ds);
        assert_eq!(filtered_indices(&ds, &filters), vec![0, 1, 2, 3]);
    }

    #[test]
    fn empty_selection_hides_everything() {
        let ds = dataset();
        let filters = FilterState::new();
        assert!(filtered_indices(&ds, &filters).is_empty());
    }

    #[test]
    fn single_group_selection_keeps_dataset_order() {
        let ds = dataset();
        let mut filters = FilterState::new();
        filters.insert(ColorKey(0.0));
        assert_eq!(filtered_indices(&ds, &filters), vec![0, 2]);
    }
}
