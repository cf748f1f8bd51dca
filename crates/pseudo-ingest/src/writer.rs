//! Writing DataFrames to CSV or Parquet.

use std::fs::{self, File};
use std::path::Path;

use polars::prelude::*;
use tracing::debug;

use crate::error::{IngestError, Result};
use crate::format::TableFormat;

/// Write `df` to `path`, creating parent directories as needed.
///
/// Parquet output uses gzip compression.
pub fn write_table(df: &mut DataFrame, path: &Path) -> Result<()> {
    let format = TableFormat::from_path(path)?;
    if let Some(parent) = path.parent().filter(|p| !p.as_os_str().is_empty()) {
        fs::create_dir_all(parent).map_err(|e| IngestError::FileWrite {
            path: parent.to_path_buf(),
            source: e,
        })?;
    }
    let mut file = File::create(path).map_err(|e| IngestError::FileWrite {
        path: path.to_path_buf(),
        source: e,
    })?;

    match format {
        TableFormat::Csv => {
            CsvWriter::new(&mut file).include_header(true).finish(df)?;
        }
        TableFormat::Parquet => {
            ParquetWriter::new(&mut file)
                .with_compression(ParquetCompression::Gzip(None))
                .finish(df)?;
        }
    }
    debug!(
        path = %path.display(),
        format = %format,
        rows = df.height(),
        "table written"
    );
    Ok(())
}
