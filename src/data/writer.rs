use std::fs::{self, File};
use std::io::BufWriter;
use std::path::Path;

use thiserror::Error;

use super::model::PointDataset;

// ---------------------------------------------------------------------------
// Errors
// ---------------------------------------------------------------------------

/// Errors that can occur while writing point data.
#[derive(Error, Debug)]
pub enum WriteError {
    #[error("failed to create parent directories for '{path}': {source}")]
    CreateDirectory {
        path: String,
        #[source]
        source: std::io::Error,
    },

    #[error("failed to create file '{path}': {source}")]
    CreateFile {
        path: String,
        #[source]
        source: std::io::Error,
    },

    #[error("failed to write to file '{path}': {source}")]
    WriteFile {
        path: String,
        #[source]
        source: std::io::Error,
    },

    #[error("CSV write error for '{path}': {source}")]
    Csv {
        path: String,
        #[source]
        source: csv::Error,
    },
}

/// Result type for writer operations.
pub type Result<T> = std::result::Result<T, WriteError>;

// ---------------------------------------------------------------------------
// CSV writer
// ---------------------------------------------------------------------------

/// Write a dataset to a CSV file of `x1,x2,color` triples, one line per
/// point in dataset order. Parent directories are created if needed.
///
/// `header` optionally emits a column-name line before the data. Values use
/// Rust's shortest round-trip `f64` formatting, so re-parsing the file
/// (skipping the header if one was written) reproduces the dataset exactly.
pub fn write_points(
    path: &Path,
    dataset: &PointDataset,
    header: Option<[&str; 3]>,
) -> Result<()> {
    ensure_parent_dirs(path)?;

    let path_str = path.display().to_string();
    let file = File::create(path).map_err(|e| WriteError::CreateFile {
        path: path_str.clone(),
        source: e,
    })?;

    let mut writer = csv::WriterBuilder::new()
        .has_headers(false)
        .from_writer(BufWriter::new(file));

    let csv_err = |e: csv::Error| WriteError::Csv {
        path: path_str.clone(),
        source: e,
    };

    if let Some(names) = header {
        writer.write_record(names).map_err(csv_err)?;
    }

    for point in dataset.iter() {
        writer
            .write_record([
                point.x1.to_string(),
                point.x2.to_string(),
                point.color.to_string(),
            ])
            .map_err(csv_err)?;
    }

    writer.flush().map_err(|e| WriteError::WriteFile {
        path: path_str,
        source: e,
    })
}

/// Creates parent directories for a file path if they don't exist.
fn ensure_parent_dirs(path: &Path) -> Result<()> {
    if let Some(parent) = path.parent() {
        if !parent.as_os_str().is_empty() && !parent.exists() {
            fs::create_dir_all(parent).map_err(|e| WriteError::CreateDirectory {
                path: parent.display().to_string(),
                source: e,
            })?;
        }
    }
    Ok(())
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::data::loader::{load_csv, ParseOptions};
    use tempfile::tempdir;

    fn sample() -> PointDataset {
        PointDataset::from_columns(
            vec![1.0, 3.5, -0.25],
            vec![2.0, -1.2, 1e-3],
            vec![0.0, 1.0, 1.0],
        )
    }

    #[test]
    fn round_trip_preserves_values() {
        let dir = tempdir().unwrap();
        let path = dir.path().join("points.csv");
        let original = sample();

        write_points(&path, &original, None).unwrap();
        let reparsed = load_csv(&path, ParseOptions::default()).unwrap();

        assert_eq!(reparsed.x1s, original.x1s);
        assert_eq!(reparsed.x2s, original.x2s);
        assert_eq!(reparsed.colors, original.colors);
    }

    #[test]
    fn round_trip_with_header() {
        let dir = tempdir().unwrap();
        let path = dir.path().join("points.csv");
        let original = sample();

        write_points(&path, &original, Some(["x1", "x2", "color"])).unwrap();
        let reparsed = load_csv(
            &path,
            ParseOptions {
                skip_header: true,
                ..Default::default()
            },
        )
        .unwrap();

        assert_eq!(reparsed.len(), original.len());
        assert_eq!(reparsed.x1s, original.x1s);
    }

    #[test]
    fn creates_missing_parent_directories() {
        let dir = tempdir().unwrap();
        let path = dir.path().join("nested/deeper/points.csv");

        write_points(&path, &sample(), None).unwrap();
        assert!(path.exists());
    }

    #[test]
    fn empty_dataset_writes_empty_file() {
        let dir = tempdir().unwrap();
        let path = dir.path().join("empty.csv");

        write_points(&path, &PointDataset::new(), None).unwrap();
        let reparsed = load_csv(&path, ParseOptions::default()).unwrap();
        assert!(reparsed.is_empty());
    }
}
