//! Column classification and DataFrame anonymization.
//!
//! - **classify**: keyword heuristics proposing a semantic type per column
//! - **anonymizer**: the [`Anonymizer`] orchestrating one mapper per column
//! - **report**: per-column and per-run statistics
//!
//! Two execution substrates share the same mapping semantics: a local one
//! walking the rows on the calling thread and a partitioned one spreading
//! the rows over a rayon worker pool.

pub mod anonymizer;
pub mod classify;
pub mod error;
mod local;
mod partitioned;
pub mod report;

pub use anonymizer::Anonymizer;
pub use classify::{classify, matching_types};
pub use error::{AnonymizeError, Result};
pub use report::{AnonymizationReport, ColumnReport};
