//! DataFrame anonymization orchestrator.

use std::time::Instant;

use polars::prelude::*;
use pseudo_generate::{GeneratorRegistry, column_rng};
use pseudo_model::{AnonymizerOptions, ColumnSpec, Engine};
use tracing::{debug, info, info_span, warn};

use crate::classify::classify;
use crate::error::{AnonymizeError, Result};
use crate::report::{AnonymizationReport, ColumnReport};
use crate::{local, partitioned};

/// Replaces identifying columns of a DataFrame with synthetic values.
///
/// Each column gets its own freshly built mapper, so equal originals map to
/// equal replacements within a column and nothing is shared across columns
/// or runs.
#[derive(Debug)]
pub struct Anonymizer {
    options: AnonymizerOptions,
    registry: GeneratorRegistry,
}

impl Anonymizer {
    /// Anonymizer using the default generators for the configured language.
    pub fn new(options: AnonymizerOptions) -> Self {
        let registry = GeneratorRegistry::with_defaults(options.language);
        Self { options, registry }
    }

    /// Anonymizer using a caller-provided generator registry.
    pub fn with_registry(options: AnonymizerOptions, registry: GeneratorRegistry) -> Self {
        Self { options, registry }
    }

    pub fn options(&self) -> &AnonymizerOptions {
        &self.options
    }

    pub fn registry(&self) -> &GeneratorRegistry {
        &self.registry
    }

    /// Decide which columns to anonymize and as what.
    ///
    /// Explicit specs must name existing columns. Without them the column
    /// names of the first `sample_rows` rows are classified. Either way the
    /// result holds at most one spec per column: when a column was matched
    /// more than once, the last match wins.
    pub fn resolve_specs(
        &self,
        df: &DataFrame,
        explicit: Option<&[ColumnSpec]>,
    ) -> Result<Vec<ColumnSpec>> {
        let specs = match explicit {
            Some(specs) => {
                for spec in specs {
                    if df.column(&spec.column).is_err() {
                        return Err(AnonymizeError::ColumnNotFound {
                            column: spec.column.clone(),
                        });
                    }
                }
                specs.to_vec()
            }
            None => {
                let sample = df.head(Some(self.options.sample_rows));
                debug!(
                    sample_rows = sample.height(),
                    columns = sample.width(),
                    "classifying columns"
                );
                classify(sample.get_column_names())
            }
        };
        Ok(keep_last_per_column(specs))
    }

    /// Anonymize `df`, returning the transformed frame and a run report.
    ///
    /// Columns without a spec are left untouched. Replaced columns become
    /// string columns; null cells stay null.
    ///
    /// # Errors
    ///
    /// Fails on the first column that cannot be anonymized; no partial
    /// result is returned.
    pub fn anonymize(
        &self,
        df: DataFrame,
        explicit: Option<&[ColumnSpec]>,
    ) -> Result<(DataFrame, AnonymizationReport)> {
        let started = Instant::now();
        let specs = self.resolve_specs(&df, explicit)?;
        let mut report = AnonymizationReport::new(self.options.mode, self.options.engine, df.height());
        info!(
            columns = specs.len(),
            rows = df.height(),
            mode = %self.options.mode,
            "anonymizing DataFrame"
        );

        let mut result = df;
        for spec in &specs {
            let (series, column_report) = self.anonymize_column(&result, spec)?;
            result.with_column(series)?;
            report.columns.push(column_report);
        }

        report.duration = started.elapsed();
        info!(
            columns = report.columns.len(),
            replaced = report.total_replaced(),
            duration_ms = report.duration.as_millis() as u64,
            "anonymization complete"
        );
        Ok((result, report))
    }

    /// Compute the replacement series for one column of `df`.
    pub fn anonymize_column(
        &self,
        df: &DataFrame,
        spec: &ColumnSpec,
    ) -> Result<(Series, ColumnReport)> {
        let span = info_span!(
            "anonymize_column",
            column = %spec.column,
            semantic_type = %spec.semantic_type
        );
        let _guard = span.enter();
        let started = Instant::now();

        let column = df
            .column(&spec.column)
            .map_err(|_| AnonymizeError::ColumnNotFound {
                column: spec.column.clone(),
            })?;
        let strings = column.cast(&DataType::String)?;
        let values = strings.str()?;

        let rng = column_rng(self.options.seed, &spec.column);
        let generator = self.registry.create(spec.semantic_type, rng)?;
        let replaced = match self.options.engine {
            Engine::Local => local::substitute(values, generator, &self.options),
            Engine::Partitioned => partitioned::substitute(values, generator, &self.options),
        }
        .map_err(|source| AnonymizeError::mapping(&spec.column, source))?;

        let report = ColumnReport::measure(spec, values, &replaced);
        if report.has_collisions() {
            debug!(
                distinct_originals = report.distinct_originals,
                distinct_replacements = report.distinct_replacements,
                "replacements collide"
            );
        }
        info!(
            rows = report.rows,
            nulls = report.nulls,
            distinct = report.distinct_originals,
            duration_ms = started.elapsed().as_millis() as u64,
            "column anonymized"
        );

        Ok((Series::new(spec.column.as_str().into(), replaced), report))
    }
}

/// Collapse specs to one per column, keeping the last semantic type and the
/// position of the first occurrence.
fn keep_last_per_column(specs: Vec<ColumnSpec>) -> Vec<ColumnSpec> {
    let mut resolved: Vec<ColumnSpec> = Vec::with_capacity(specs.len());
    for spec in specs {
        match resolved.iter_mut().find(|kept| kept.column == spec.column) {
            Some(kept) => {
                warn!(
                    column = %spec.column,
                    dropped = %kept.semantic_type,
                    kept = %spec.semantic_type,
                    "column matched several semantic types"
                );
                kept.semantic_type = spec.semantic_type;
            }
            None => resolved.push(spec),
        }
    }
    resolved
}
