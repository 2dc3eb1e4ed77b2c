use std::collections::BTreeSet;
use std::fmt;

// ---------------------------------------------------------------------------
// ColorKey – a color scalar usable as an ordered set/map key
// ---------------------------------------------------------------------------

/// A point's color scalar wrapped for use in `BTreeSet` / `BTreeMap`.
///
/// The raw column is `f64` (cluster tags arrive as floats), so ordering uses
/// `total_cmp` and hashing uses the bit pattern.
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct ColorKey(pub f64);

impl Eq for ColorKey {}

impl PartialOrd for ColorKey {
    fn partial_cmp(&self, other: &Self) -> Option<std::cmp::Ordering> {
        Some(self.cmp(other))
    }
}

impl Ord for ColorKey {
    fn cmp(&self, other: &Self) -> std::cmp::Ordering {
        self.0.total_cmp(&other.0)
    }
}

impl std::hash::Hash for ColorKey {
    fn hash<H: std::hash::Hasher>(&self, state: &mut H) {
        self.0.to_bits().hash(state);
    }
}

impl fmt::Display for ColorKey {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        // Cluster tags are whole numbers in practice; print them without a
        // fractional part so legend labels read "0", "1", ...
        if self.0.is_finite() && self.0.fract() == 0.0 {
            write!(f, "{:.0}", self.0)
        } else {
            write!(f, "{}", self.0)
        }
    }
}

// ---------------------------------------------------------------------------
// PointRecord – one parsed line
// ---------------------------------------------------------------------------

/// A single point (one line of the source file).
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct PointRecord {
    /// First coordinate.
    pub x1: f64,
    /// Second coordinate.
    pub x2: f64,
    /// Color scalar (typically a cluster tag).
    pub color: f64,
}

// ---------------------------------------------------------------------------
// PointDataset – the complete loaded dataset
// ---------------------------------------------------------------------------

/// The full parsed dataset: three index-aligned columns plus the sorted set
/// of distinct color values.
///
/// Element `i` of each column belongs to the same source line; the columns
/// always have equal length and keep the input file's line order.
#[derive(Debug, Clone, Default)]
pub struct PointDataset {
    /// First coordinates.
    pub x1s: Vec<f64>,
    /// Second coordinates – same length as `x1s`.
    pub x2s: Vec<f64>,
    /// Color scalars – same length as `x1s`.
    pub colors: Vec<f64>,
    /// Distinct color values, kept in sync with `colors`.
    unique_colors: BTreeSet<ColorKey>,
}

impl PointDataset {
    /// Creates a new empty dataset.
    pub fn new() -> Self {
        Self::default()
    }

    /// Creates an empty dataset with pre-allocated column capacity.
    pub fn with_capacity(capacity: usize) -> Self {
        Self {
            x1s: Vec::with_capacity(capacity),
            x2s: Vec::with_capacity(capacity),
            colors: Vec::with_capacity(capacity),
            unique_colors: BTreeSet::new(),
        }
    }

    /// Build a dataset from already-parsed columns.
    ///
    /// Panics if the columns are not the same length; callers own that
    /// invariant (the parser produces aligned columns by construction).
    pub fn from_columns(x1s: Vec<f64>, x2s: Vec<f64>, colors: Vec<f64>) -> Self {
        assert_eq!(x1s.len(), x2s.len(), "x1/x2 column length mismatch");
        assert_eq!(x1s.len(), colors.len(), "coordinate/color column length mismatch");

        let unique_colors = colors.iter().map(|&c| ColorKey(c)).collect();
        Self {
            x1s,
            x2s,
            colors,
            unique_colors,
        }
    }

    /// Appends a point to the dataset.
    #[inline]
    pub fn push(&mut self, x1: f64, x2: f64, color: f64) {
        self.x1s.push(x1);
        self.x2s.push(x2);
        self.colors.push(color);
        self.unique_colors.insert(ColorKey(color));
    }

    /// Number of points.
    #[inline]
    pub fn len(&self) -> usize {
        self.x1s.len()
    }

    /// Whether the dataset is empty.
    #[inline]
    pub fn is_empty(&self) -> bool {
        self.x1s.is_empty()
    }

    /// The point at index `i`, if in range.
    pub fn get(&self, i: usize) -> Option<PointRecord> {
        Some(PointRecord {
            x1: *self.x1s.get(i)?,
            x2: *self.x2s.get(i)?,
            color: *self.colors.get(i)?,
        })
    }

    /// Iterate over the points in line order.
    pub fn iter(&self) -> impl Iterator<Item = PointRecord> + '_ {
        self.x1s
            .iter()
            .zip(self.x2s.iter())
            .zip(self.colors.iter())
            .map(|((&x1, &x2), &color)| PointRecord { x1, x2, color })
    }

    /// Sorted set of distinct color values.
    pub fn unique_colors(&self) -> &BTreeSet<ColorKey> {
        &self.unique_colors
    }
}
