//! Readers for emitter lists produced by initial-state models.
//!
//! All files are whitespace-delimited text with one header line that is
//! skipped unconditionally. Blank lines are ignored.
//!
//! # File Formats
//!
//! ## QCD string list
//!
//! ```text
//! # norm  delta_E  tau_form  x_perp  y_perp  eta_s_left  eta_s_right  y_l  y_r
//! 1.0  2.5  0.62  0.31  -1.20  -0.85  1.40  -0.90  1.52
//! ```
//!
//! ## String-model parton list
//!
//! ```text
//! # tau  x  y  eta_s  rapidity
//! 0.58  0.12  -0.40  0.35  0.41
//! ```
//!
//! ## AMPT parton list
//!
//! ```text
//! 4521
//! 0.71  0.20  -0.35  0.12  1.85  0.40  -0.22  0.31
//! ```
//!
//! The header of the AMPT file carries the particle count; rows are
//! `t x y z E px py pz` in lab-frame coordinates.

mod ampt_reader;
mod string_reader;

use std::fs::File;
use std::io::{BufRead, BufReader};
use std::path::{Path, PathBuf};

use thiserror::Error;

pub use ampt_reader::{parse_ampt_partons, read_ampt_file};
pub use string_reader::{
    parse_baryon_partons, parse_strings, read_baryon_parton_file, read_string_file,
};

/// Error type for emitter file ingestion.
#[derive(Debug, Error)]
pub enum EmitterFileError {
    /// A required input file could not be opened
    #[error("Cannot open emitter file {}: {source}", path.display())]
    MissingFile {
        path: PathBuf,
        #[source]
        source: std::io::Error,
    },

    /// Read error after the file was opened
    #[error("I/O error reading {}: {source}", path.display())]
    Io {
        path: PathBuf,
        #[source]
        source: std::io::Error,
    },

    /// Row that cannot be decoded into a record
    #[error("Parse error in {} at line {line}: {message}", path.display())]
    Parse {
        path: PathBuf,
        line: usize,
        message: String,
    },
}

/// Records read from one emitter file.
#[derive(Clone, Debug, PartialEq)]
pub struct EmitterList<T> {
    /// Decoded records in file order
    pub records: Vec<T>,
    /// Latest formation/appearance time among `records`, 0 if empty
    pub max_formation_time: f64,
    /// Rows dropped as malformed or outside the forward light cone
    pub skipped: usize,
    /// Count announced by the file header, if any
    pub declared: Option<usize>,
}

impl<T> EmitterList<T> {
    fn new() -> Self {
        Self {
            records: Vec::new(),
            max_formation_time: 0.0,
            skipped: 0,
            declared: None,
        }
    }

    fn push(&mut self, record: T, formation_time: f64) {
        self.records.push(record);
        if formation_time > self.max_formation_time {
            self.max_formation_time = formation_time;
        }
    }

    /// Number of records.
    pub fn len(&self) -> usize {
        self.records.len()
    }

    /// Whether no record was read.
    pub fn is_empty(&self) -> bool {
        self.records.is_empty()
    }
}

/// Open a file that must exist.
fn open_required(path: &Path) -> Result<BufReader<File>, EmitterFileError> {
    File::open(path)
        .map(BufReader::new)
        .map_err(|source| EmitterFileError::MissingFile {
            path: path.to_path_buf(),
            source,
        })
}

/// Data rows of a reader: the header line comes back separately, blank rows
/// are dropped, and each row carries its 1-based line number.
fn data_rows<R: BufRead>(
    reader: R,
    path: &Path,
) -> Result<(String, Vec<(usize, String)>), EmitterFileError> {
    let mut header = String::new();
    let mut rows = Vec::new();

    for (idx, line) in reader.lines().enumerate() {
        let line = line.map_err(|source| EmitterFileError::Io {
            path: path.to_path_buf(),
            source,
        })?;
        if idx == 0 {
            header = line;
            continue;
        }
        if line.trim().is_empty() {
            continue;
        }
        rows.push((idx + 1, line));
    }

    Ok((header, rows))
}

/// Parse the first `N` whitespace-separated columns as floats.
///
/// Trailing columns are ignored.
fn parse_columns<const N: usize>(line: &str) -> Result<[f64; N], String> {
    let mut values = [0.0; N];
    let mut tokens = line.split_whitespace();
    for (i, value) in values.iter_mut().enumerate() {
        let token = tokens
            .next()
            .ok_or_else(|| format!("expected {N} columns, found {i}"))?;
        *value = token
            .parse()
            .map_err(|_| format!("invalid number '{token}' in column {}", i + 1))?;
    }
    Ok(values)
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_parse_columns() {
        let v: [f64; 3] = parse_columns("1.0  -2.5\t3e-1 extra").unwrap();
        assert_eq!(v, [1.0, -2.5, 0.3]);
    }

    #[test]
    fn test_parse_columns_short_row() {
        let err = parse_columns::<4>("1.0 2.0").unwrap_err();
        assert!(err.contains("expected 4 columns, found 2"));
    }

    #[test]
    fn test_parse_columns_bad_token() {
        let err = parse_columns::<2>("1.0 abc").unwrap_err();
        assert!(err.contains("'abc'"));
        assert!(err.contains("column 2"));
    }

    #[test]
    fn test_data_rows_skip_header_and_blanks() {
        let text = "1.0 2.0\n\n3.0 4.0\n   \n5.0 6.0\n";
        let (header, rows) = data_rows(text.as_bytes(), Path::new("mem")).unwrap();
        assert_eq!(header, "1.0 2.0");
        assert_eq!(rows.len(), 2);
        assert_eq!(rows[0], (3, "3.0 4.0".to_string()));
        assert_eq!(rows[1].0, 5);
    }

    #[test]
    fn test_missing_file() {
        let err = open_required(Path::new("/nonexistent/strings.dat")).unwrap_err();
        match &err {
            EmitterFileError::MissingFile { path, .. } => {
                assert_eq!(path, Path::new("/nonexistent/strings.dat"));
            }
            other => panic!("unexpected error: {other}"),
        }
        assert!(err.to_string().contains("/nonexistent/strings.dat"));
    }

    #[test]
    fn test_emitter_list_tracks_max() {
        let mut list = EmitterList::new();
        list.push(1, 0.4);
        list.push(2, 1.2);
        list.push(3, 0.9);
        assert_eq!(list.len(), 3);
        assert_eq!(list.max_formation_time, 1.2);
    }
}
