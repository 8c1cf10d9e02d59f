//! Shared error types for dataset construction.

use std::path::PathBuf;

use thiserror::Error;

/// Errors raised while turning a directory of measurement files into a
/// feature/target matrix pair.
///
/// Every variant names the offending file (and line, where one exists) so a
/// bad sample can be located without re-running under a debugger.  The
/// builder never skips a bad sample: a missing row would silently break the
/// row alignment between the two output matrices.
#[derive(Debug, Error)]
pub enum DataError {
    #[error("cannot read {}: {source}", .path.display())]
    Io {
        path: PathBuf,
        #[source]
        source: std::io::Error,
    },

    /// The sample directory is missing or holds no files.
    #[error("no sample files found in {}", .0.display())]
    EmptyDirectory(PathBuf),

    /// A filename did not encode exactly the expected number of numeric tokens.
    #[error("filename {name:?} encodes {found} numeric tokens, expected {expected}")]
    MalformedFilename {
        name: String,
        found: usize,
        expected: usize,
    },

    /// A sample file contains a header but no data lines.
    #[error("{}: no data lines after header", .path.display())]
    EmptySample { path: PathBuf },

    /// A data line has fewer whitespace-separated columns than the schema requires.
    #[error("{}:{line}: expected at least {expected} columns, found {found}", .path.display())]
    ShortLine {
        path: PathBuf,
        line: usize,
        expected: usize,
        found: usize,
    },

    /// A column that should hold a reading failed to parse as a float.
    #[error("{}:{line}: {token:?} is not a number", .path.display())]
    BadNumber {
        path: PathBuf,
        line: usize,
        token: String,
    },
}

pub type Result<T> = std::result::Result<T, DataError>;
