//! Table I/O for the pseudonymization tools.
//!
//! Reads and writes CSV and Parquet files as Polars DataFrames. The format
//! is chosen by file extension.

mod error;
mod format;
mod reader;
mod writer;

// === Error Types ===
pub use error::{IngestError, Result};

// === Formats ===
pub use format::TableFormat;

// === Reading and Writing ===
pub use reader::{INFER_SCHEMA_ROWS, read_table};
pub use writer::write_table;
