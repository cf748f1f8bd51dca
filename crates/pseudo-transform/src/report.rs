//! Summary of an anonymization run.

use std::collections::HashSet;
use std::time::Duration;

use polars::prelude::StringChunked;
use pseudo_model::{AnonymizationMode, ColumnSpec, Engine, SemanticType};
use serde::Serialize;

/// Outcome for one anonymized column.
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
pub struct ColumnReport {
    pub column: String,
    pub semantic_type: SemanticType,
    pub rows: usize,
    pub nulls: usize,
    pub distinct_originals: usize,
    pub distinct_replacements: usize,
}

impl ColumnReport {
    pub(crate) fn measure(
        spec: &ColumnSpec,
        originals: &StringChunked,
        replaced: &[Option<String>],
    ) -> Self {
        let distinct_originals = originals.iter().flatten().collect::<HashSet<_>>().len();
        let distinct_replacements = replaced.iter().flatten().collect::<HashSet<_>>().len();
        Self {
            column: spec.column.clone(),
            semantic_type: spec.semantic_type,
            rows: replaced.len(),
            nulls: originals.null_count(),
            distinct_originals,
            distinct_replacements,
        }
    }

    /// Non-null cells that received a replacement.
    pub fn replaced(&self) -> usize {
        self.rows - self.nulls
    }

    /// Whether two distinct originals share a replacement.
    pub fn has_collisions(&self) -> bool {
        self.distinct_replacements < self.distinct_originals
    }
}

/// Summary of a whole DataFrame run.
#[derive(Debug, Clone, Serialize)]
pub struct AnonymizationReport {
    pub mode: AnonymizationMode,
    pub engine: Engine,
    pub rows: usize,
    pub columns: Vec<ColumnReport>,
    pub duration: Duration,
}

impl AnonymizationReport {
    pub(crate) fn new(mode: AnonymizationMode, engine: Engine, rows: usize) -> Self {
        Self {
            mode,
            engine,
            rows,
            columns: Vec::new(),
            duration: Duration::ZERO,
        }
    }

    /// Total cells replaced across all columns.
    pub fn total_replaced(&self) -> usize {
        self.columns.iter().map(ColumnReport::replaced).sum()
    }

    pub fn column(&self, name: &str) -> Option<&ColumnReport> {
        self.columns.iter().find(|c| c.column == name)
    }

    pub fn is_empty(&self) -> bool {
        self.columns.is_empty()
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use polars::prelude::*;

    #[test]
    fn test_measure_counts_nulls_and_collisions() {
        let originals = StringChunked::from_slice_options(
            "Name".into(),
            &[Some("a"), None, Some("b"), Some("a")],
        );
        let x = Some("x".to_string());
        let replaced = vec![x.clone(), None, x.clone(), x];
        let spec = ColumnSpec::new("Name", SemanticType::Name);

        let report = ColumnReport::measure(&spec, &originals, &replaced);
        assert_eq!(report.rows, 4);
        assert_eq!(report.nulls, 1);
        assert_eq!(report.replaced(), 3);
        assert_eq!(report.distinct_originals, 2);
        assert_eq!(report.distinct_replacements, 1);
        assert!(report.has_collisions());
    }
}
