/// Data layer: core types, loading, writing, and filtering.
///
/// Architecture:
/// ```text
///       .csv
///        │
///        ▼
///   ┌──────────┐
///   │  loader   │  parse x1,x2,color lines → PointDataset
///   └──────────┘
///        │
///        ▼
///   ┌──────────────┐
///   │ PointDataset  │  aligned columns, unique-color index
///   └──────────────┘
///        │                      │
///        ▼                      ▼
///   ┌──────────┐          ┌──────────┐
///   │  filter   │          │  writer   │  dataset → .csv
///   └──────────┘          └──────────┘
/// ```

pub mod filter;
pub mod loader;
pub mod model;
pub mod writer;
