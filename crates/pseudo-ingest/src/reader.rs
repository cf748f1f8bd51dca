//! Loading tables into Polars DataFrames.

use std::fs::File;
use std::path::Path;

use polars::prelude::*;
use tracing::debug;

use crate::error::{IngestError, Result};
use crate::format::TableFormat;

/// Rows used by the CSV reader to infer column types.
pub const INFER_SCHEMA_ROWS: usize = 100;

/// Read a CSV or Parquet file, chosen by extension.
pub fn read_table(path: &Path) -> Result<DataFrame> {
    let format = TableFormat::from_path(path)?;
    if !path.exists() {
        return Err(IngestError::FileNotFound {
            path: path.to_path_buf(),
        });
    }

    let df = match format {
        TableFormat::Csv => read_csv(path)?,
        TableFormat::Parquet => read_parquet(path)?,
    };
    debug!(
        path = %path.display(),
        format = %format,
        rows = df.height(),
        columns = df.width(),
        "table loaded"
    );
    Ok(df)
}

fn read_csv(path: &Path) -> Result<DataFrame> {
    let parse_error = |e: PolarsError| IngestError::Parse {
        path: path.to_path_buf(),
        message: e.to_string(),
    };
    CsvReadOptions::default()
        .with_has_header(true)
        .with_infer_schema_length(Some(INFER_SCHEMA_ROWS))
        .try_into_reader_with_file_path(Some(path.to_path_buf()))
        .map_err(parse_error)?
        .finish()
        .map_err(parse_error)
}

fn read_parquet(path: &Path) -> Result<DataFrame> {
    let file = File::open(path).map_err(|e| IngestError::FileRead {
        path: path.to_path_buf(),
        source: e,
    })?;
    ParquetReader::new(file)
        .finish()
        .map_err(|e| IngestError::Parse {
            path: path.to_path_buf(),
            message: e.to_string(),
        })
}
