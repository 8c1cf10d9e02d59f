//! Reading one sample's raw hysteresis curve.
//!
//! Sample files are plain text: one header line (ignored), then one line per
//! measurement with at least [`MIN_COLUMNS`] whitespace-separated columns.
//! Only two columns carry data this crate cares about; their positions are
//! fixed by the upstream simulation's output format and named here so they
//! are not bare literals scattered through the loader.

use std::fs;
use std::path::Path;

use crate::error::{DataError, Result};

/// 0-based column holding the magnetization reading.
pub const MAGNETIZATION_COLUMN: usize = 6;

/// 0-based column holding the applied-field reading.
pub const FIELD_COLUMN: usize = 9;

/// Minimum columns a data line must have for both readings to exist.
pub const MIN_COLUMNS: usize = FIELD_COLUMN + 1;

/// One sample's measured field/magnetization sequences, ascending in field.
#[derive(Debug, Clone)]
pub struct HysteresisCurve {
    pub field: Vec<f64>,
    pub magnetization: Vec<f64>,
}

impl HysteresisCurve {
    /// Reads and parses one sample file.
    ///
    /// The file stores the sweep in descending field order; both sequences
    /// are reversed on load so interpolation sees ascending knots.
    pub fn read(path: &Path) -> Result<HysteresisCurve> {
        let text = fs::read_to_string(path).map_err(|source| DataError::Io {
            path: path.to_path_buf(),
            source,
        })?;

        // First line is a header.
        let mut lines = text.lines();
        lines.next();

        let mut field = Vec::new();
        let mut magnetization = Vec::new();

        for (i, line) in lines.enumerate() {
            // 1-based line number in the file, counting the header.
            let line_no = i + 2;
            let cols: Vec<&str> = line.split_whitespace().collect();
            if cols.len() < MIN_COLUMNS {
                return Err(DataError::ShortLine {
                    path: path.to_path_buf(),
                    line: line_no,
                    expected: MIN_COLUMNS,
                    found: cols.len(),
                });
            }
            field.push(parse_column(cols[FIELD_COLUMN], path, line_no)?);
            magnetization.push(parse_column(cols[MAGNETIZATION_COLUMN], path, line_no)?);
        }

        if field.is_empty() {
            return Err(DataError::EmptySample {
                path: path.to_path_buf(),
            });
        }

        field.reverse();
        magnetization.reverse();

        Ok(HysteresisCurve { field, magnetization })
    }

    /// Divides every field value by the sample's anisotropy field, converting
    /// raw units into a scale comparable across samples.
    pub fn rescale_field(&mut self, anisotropy_field: f64) {
        for h in self.field.iter_mut() {
            *h /= anisotropy_field;
        }
    }

    pub fn len(&self) -> usize {
        self.field.len()
    }

    pub fn is_empty(&self) -> bool {
        self.field.is_empty()
    }
}

fn parse_column(token: &str, path: &Path, line_no: usize) -> Result<f64> {
    token.parse::<f64>().map_err(|_| DataError::BadNumber {
        path: path.to_path_buf(),
        line: line_no,
        token: token.to_string(),
    })
}

#[cfg(test)]
mod tests {
    use super::*;
    use std::io::Write;

    fn write_file(dir: &Path, name: &str, contents: &str) -> std::path::PathBuf {
        let path = dir.join(name);
        let mut f = fs::File::create(&path).unwrap();
        f.write_all(contents.as_bytes()).unwrap();
        path
    }

    #[test]
    fn reads_and_reverses_curve() {
        let dir = tempfile::tempdir().unwrap();
        let path = write_file(
            dir.path(),
            "sample.txt",
            "header line\n\
             0 0 0 0 0 0 1.2 0 0 5.0\n\
             0 0 0 0 0 0 0.4 0 0 -5.0\n",
        );
        let curve = HysteresisCurve::read(&path).unwrap();
        assert_eq!(curve.field, vec![-5.0, 5.0]);
        assert_eq!(curve.magnetization, vec![0.4, 1.2]);
    }

    #[test]
    fn rejects_short_line_with_location() {
        let dir = tempfile::tempdir().unwrap();
        let path = write_file(dir.path(), "bad.txt", "header\n1 2 3\n");
        match HysteresisCurve::read(&path).unwrap_err() {
            DataError::ShortLine { line, expected, found, .. } => {
                assert_eq!(line, 2);
                assert_eq!(expected, MIN_COLUMNS);
                assert_eq!(found, 3);
            }
            other => panic!("unexpected error: {other}"),
        }
    }

    #[test]
    fn rejects_header_only_file() {
        let dir = tempfile::tempdir().unwrap();
        let path = write_file(dir.path(), "empty.txt", "header only\n");
        assert!(matches!(
            HysteresisCurve::read(&path).unwrap_err(),
            DataError::EmptySample { .. }
        ));
    }

    #[test]
    fn rejects_non_numeric_reading() {
        let dir = tempfile::tempdir().unwrap();
        let path = write_file(
            dir.path(),
            "nan.txt",
            "header\n0 0 0 0 0 0 x 0 0 1.0\n",
        );
        match HysteresisCurve::read(&path).unwrap_err() {
            DataError::BadNumber { token, line, .. } => {
                assert_eq!(token, "x");
                assert_eq!(line, 2);
            }
            other => panic!("unexpected error: {other}"),
        }
    }

    #[test]
    fn rescale_divides_fields() {
        let mut curve = HysteresisCurve {
            field: vec![-4.0, 4.0],
            magnetization: vec![0.0, 1.0],
        };
        curve.rescale_field(2.0);
        assert_eq!(curve.field, vec![-2.0, 2.0]);
    }
}
