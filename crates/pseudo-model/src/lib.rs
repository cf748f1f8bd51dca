//! Data model shared across the pseudonymization workspace.

pub mod error;
pub mod options;
pub mod semantic;
pub mod spec;

pub use error::{ModelError, Result};
pub use options::{
    AnonymizationMode, AnonymizerOptions, DEFAULT_MAX_RETRIES, DEFAULT_PARTITIONS,
    DEFAULT_SAMPLE_ROWS, Engine, Locale, SafeStrategy,
};
pub use semantic::SemanticType;
pub use spec::ColumnSpec;
