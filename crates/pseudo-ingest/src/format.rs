//! Table format detection from file extensions.

use std::fmt;
use std::path::Path;

use crate::error::{IngestError, Result};

/// On-disk table format.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum TableFormat {
    Csv,
    /// Parquet, written with gzip page compression.
    Parquet,
}

impl TableFormat {
    /// Detect the format from the (case-insensitive) file extension.
    ///
    /// `.gzip` is read as Parquet: the source datasets were gzip-compressed
    /// Parquet files named that way.
    pub fn from_path(path: &Path) -> Result<Self> {
        let extension = path
            .extension()
            .and_then(|ext| ext.to_str())
            .map(str::to_ascii_lowercase);
        match extension.as_deref() {
            Some("csv") => Ok(TableFormat::Csv),
            Some("parquet" | "pq" | "gzip") => Ok(TableFormat::Parquet),
            _ => Err(IngestError::UnsupportedFormat {
                path: path.to_path_buf(),
            }),
        }
    }
}

impl fmt::Display for TableFormat {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            TableFormat::Csv => write!(f, "csv"),
            TableFormat::Parquet => write!(f, "parquet"),
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_detects_known_extensions() {
        assert_eq!(TableFormat::from_path(Path::new("a.CSV")).unwrap(), TableFormat::Csv);
        for name in ["a.parquet", "a.pq", "pseudo_data.gzip"] {
            assert_eq!(TableFormat::from_path(Path::new(name)).unwrap(), TableFormat::Parquet);
        }
    }

    #[test]
    fn test_rejects_unknown_extensions() {
        for name in ["a.xlsx", "no_extension"] {
            assert!(matches!(
                TableFormat::from_path(Path::new(name)),
                Err(IngestError::UnsupportedFormat { .. })
            ));
        }
    }
}
