use std::fs::File;
use std::io::{BufRead, BufReader};
use std::path::Path;
use std::time::Instant;

use thiserror::Error;

use super::model::PointDataset;

// ---------------------------------------------------------------------------
// Errors
// ---------------------------------------------------------------------------

/// Errors that can occur while loading point data.
#[derive(Error, Debug)]
pub enum LoadError {
    #[error("IO error: {0}")]
    Io(#[from] std::io::Error),

    #[error("line {line}: expected 3 comma-separated fields, found {found}")]
    FieldCount { line: usize, found: usize },

    #[error("line {line}, field {field}: '{token}' is not a valid number")]
    InvalidFloat {
        line: usize,
        field: usize,
        token: String,
    },
}

impl LoadError {
    /// Whether this error is a malformed record (as opposed to an I/O
    /// failure): the line violated the 3-field/float-parseable contract.
    pub fn is_malformed(&self) -> bool {
        matches!(
            self,
            LoadError::FieldCount { .. } | LoadError::InvalidFloat { .. }
        )
    }

    /// The 1-based source line a malformed record refers to. Counts
    /// physical lines, so a skipped header is line 1.
    pub fn line(&self) -> Option<usize> {
        match self {
            LoadError::Io(_) => None,
            LoadError::FieldCount { line, .. } | LoadError::InvalidFloat { line, .. } => {
                Some(*line)
            }
        }
    }
}

/// Result type for loader operations.
pub type Result<T> = std::result::Result<T, LoadError>;

// ---------------------------------------------------------------------------
// Options
// ---------------------------------------------------------------------------

/// Parser configuration.
///
/// Both header settings are legitimate: some producers write a header line,
/// some write raw data from the first line on. Neither is hardcoded here.
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq)]
pub struct ParseOptions {
    /// Treat the first line as a non-data header and discard it.
    pub skip_header: bool,
    /// Skip malformed lines (with a warning) instead of failing.
    /// The default is strict: the first bad line aborts the parse.
    pub lenient: bool,
}

// ---------------------------------------------------------------------------
// Parsing
// ---------------------------------------------------------------------------

/// Load a point dataset from a CSV file of `x1,x2,color` triples.
///
/// Opens the file, parses it with [`parse_points`], and logs the point
/// count and elapsed wall time at `debug` level.
pub fn load_csv<P: AsRef<Path>>(path: P, options: ParseOptions) -> Result<PointDataset> {
    let path = path.as_ref();
    let start = Instant::now();

    let file = File::open(path)?;
    let dataset = parse_points(BufReader::new(file), options)?;

    log::debug!(
        "parsed {} points from {} in {:.2?}",
        dataset.len(),
        path.display(),
        start.elapsed()
    );
    Ok(dataset)
}

/// Parse `x1,x2,color` lines from any buffered reader.
///
/// Each line must split on `','` into exactly 3 fields, each a valid `f64`
/// literal (decimal or scientific notation, surrounding whitespace is
/// tolerated). Zero data lines is valid and yields an empty dataset.
///
/// Line numbers in errors are 1-based physical line numbers; a skipped
/// header is line 1.
pub fn parse_points<R: BufRead>(reader: R, options: ParseOptions) -> Result<PointDataset> {
    let mut dataset = PointDataset::new();

    for (idx, line) in reader.lines().enumerate() {
        let line = line?;
        if options.skip_header && idx == 0 {
            continue;
        }

        match parse_line(&line, idx + 1) {
            Ok([x1, x2, color]) => dataset.push(x1, x2, color),
            Err(e) if options.lenient && e.is_malformed() => {
                log::warn!("skipping malformed record: {e}");
            }
            Err(e) => return Err(e),
        }
    }

    Ok(dataset)
}

/// Split one line into its three float fields.
fn parse_line(line: &str, line_no: usize) -> Result<[f64; 3]> {
    let tokens: Vec<&str> = line.split(',').collect();
    if tokens.len() != 3 {
        return Err(LoadError::FieldCount {
            line: line_no,
            found: tokens.len(),
        });
    }

    let mut values = [0.0f64; 3];
    for (i, token) in tokens.iter().enumerate() {
        let trimmed = token.trim();
        values[i] = trimmed.parse().map_err(|_| LoadError::InvalidFloat {
            line: line_no,
            field: i + 1,
            token: trimmed.to_string(),
        })?;
    }
    Ok(values)
}

#[cfg(test)]
mod tests {
    use super::*;
    use std::io::Write;
    use tempfile::NamedTempFile;

    fn parse(input: &str, options: ParseOptions) -> Result<PointDataset> {
        parse_points(input.as_bytes(), options)
    }

    #[test]
    fn parses_headered_file() {
        let input = "x1,x2,color\n1.0,2.0,0\n3.5,-1.2,1\n";
        let ds = parse(
            input,
            ParseOptions {
                skip_header: true,
                ..Default::default()
            },
        )
        .unwrap();

        assert_eq!(ds.x1s, vec![1.0, 3.5]);
        assert_eq!(ds.x2s, vec![2.0, -1.2]);
        assert_eq!(ds.colors, vec![0.0, 1.0]);
    }

    #[test]
    fn header_toggle_changes_record_count() {
        let input = "0.0,0.0,0\n1.0,1.0,1\n";
        let skipped = parse(
            input,
            ParseOptions {
                skip_header: true,
                ..Default::default()
            },
        )
        .unwrap();
        let kept = parse(input, ParseOptions::default()).unwrap();

        assert_eq!(skipped.len(), 1);
        assert_eq!(kept.len(), 2);
    }

    #[test]
    fn unskipped_header_fails_float_parsing_on_line_one() {
        let input = "x1,x2,color\n1.0,2.0,0\n";
        let err = parse(input, ParseOptions::default()).unwrap_err();

        assert!(err.is_malformed());
        assert_eq!(err.line(), Some(1));
        assert!(matches!(
            err,
            LoadError::InvalidFloat { field: 1, .. }
        ));
    }

    #[test]
    fn empty_input_yields_empty_dataset() {
        let ds = parse("", ParseOptions::default()).unwrap();
        assert!(ds.is_empty());

        // Header-only file with skipping: still valid, still empty.
        let ds = parse(
            "x1,x2,color\n",
            ParseOptions {
                skip_header: true,
                ..Default::default()
            },
        )
        .unwrap();
        assert!(ds.is_empty());
    }

    #[test]
    fn columns_stay_aligned_and_ordered() {
        let input = "1,10,0\n2,20,1\n3,30,0\n";
        let ds = parse(input, ParseOptions::default()).unwrap();

        assert_eq!(ds.x1s.len(), ds.x2s.len());
        assert_eq!(ds.x1s.len(), ds.colors.len());
        assert_eq!(ds.x1s, vec![1.0, 2.0, 3.0]);
        assert_eq!(ds.x2s, vec![10.0, 20.0, 30.0]);
    }

    #[test]
    fn short_line_reports_field_count_and_line() {
        let input = "1.0,2.0,0\n1.0,2.0\n";
        let err = parse(input, ParseOptions::default()).unwrap_err();

        match err {
            LoadError::FieldCount { line, found } => {
                assert_eq!(line, 2);
                assert_eq!(found, 2);
            }
            other => panic!("expected FieldCount, got {other:?}"),
        }
    }

    #[test]
    fn non_numeric_field_reports_line_and_field() {
        let input = "1.0,2.0,0\n1.0,abc,3.0\n";
        let err = parse(input, ParseOptions::default()).unwrap_err();

        match err {
            LoadError::InvalidFloat { line, field, token } => {
                assert_eq!(line, 2);
                assert_eq!(field, 2);
                assert_eq!(token, "abc");
            }
            other => panic!("expected InvalidFloat, got {other:?}"),
        }
    }

    #[test]
    fn accepts_scientific_notation_and_whitespace() {
        let input = "1e-3, 2.5E2 ,-0.0\n";
        let ds = parse(input, ParseOptions::default()).unwrap();

        assert_eq!(ds.x1s, vec![0.001]);
        assert_eq!(ds.x2s, vec![250.0]);
        assert_eq!(ds.colors, vec![-0.0]);
    }

    #[test]
    fn lenient_mode_skips_bad_lines() {
        let input = "1.0,2.0,0\nnot,a,line\n3.0,4.0,1\n5.0,6.0\n";
        let ds = parse(
            input,
            ParseOptions {
                lenient: true,
                ..Default::default()
            },
        )
        .unwrap();

        assert_eq!(ds.x1s, vec![1.0, 3.0]);
        assert_eq!(ds.colors, vec![0.0, 1.0]);
    }

    #[test]
    fn load_csv_reads_from_disk() -> Result<()> {
        let mut file = NamedTempFile::new().unwrap();
        writeln!(file, "x1,x2,color").unwrap();
        writeln!(file, "1.0,2.0,0").unwrap();
        writeln!(file, "3.5,-1.2,1").unwrap();
        file.flush().unwrap();

        let ds = load_csv(
            file.path(),
            ParseOptions {
                skip_header: true,
                ..Default::default()
            },
        )?;

        assert_eq!(ds.len(), 2);
        assert_eq!(ds.unique_colors().len(), 2);
        Ok(())
    }

    #[test]
    fn missing_file_is_io_error() {
        let err = load_csv("definitely/not/here.csv", ParseOptions::default()).unwrap_err();
        assert!(matches!(err, LoadError::Io(_)));
        assert!(!err.is_malformed());
        assert_eq!(err.line(), None);
    }
}
