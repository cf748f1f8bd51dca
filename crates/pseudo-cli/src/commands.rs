use std::path::{Path, PathBuf};

use anyhow::{Context, Result};
use comfy_table::Table;
use polars::prelude::*;
use pseudo_cli::config::{Overrides, RunConfig};
use pseudo_cli::generate::generate_dataset;
use pseudo_cli::logging::{log_data_enabled, redact_value};
use pseudo_ingest::{read_table, write_table};
use pseudo_model::SemanticType;
use pseudo_transform::{Anonymizer, AnonymizationReport};
use tracing::{debug, info, info_span};

use crate::cli::{AnonymizeArgs, GenerateArgs};
use crate::summary::apply_table_style;
use crate::types::{AnonymizeResult, GenerateResult};

pub fn run_types() {
    let mut table = Table::new();
    table.set_header(vec!["Type", "Keyword", "Description"]);
    apply_table_style(&mut table);
    for semantic_type in SemanticType::ALL {
        table.add_row(vec![
            semantic_type.as_str(),
            semantic_type.keyword(),
            semantic_type.description(),
        ]);
    }
    println!("{table}");
}

pub fn run_anonymize(args: &AnonymizeArgs) -> Result<AnonymizeResult> {
    let span = info_span!("anonymize", input = %args.input.display());
    let _guard = span.enter();

    let config = match &args.config {
        Some(path) => RunConfig::load(path)?,
        None => RunConfig::default(),
    }
    .with_overrides(overrides_from_args(args));
    debug!(?config, "run configuration");

    let df = read_table(&args.input)
        .with_context(|| format!("load {}", args.input.display()))?;
    let anonymizer = Anonymizer::new(config.options.clone());
    let (mut anonymized, report) = anonymizer
        .anonymize(df.clone(), config.explicit_columns())
        .with_context(|| format!("anonymize {}", args.input.display()))?;
    log_sample_substitutions(&df, &anonymized, &report);

    let output = if args.dry_run {
        info!("dry run, output not written");
        None
    } else {
        let path = args
            .output
            .clone()
            .unwrap_or_else(|| default_output_path(&args.input));
        write_table(&mut anonymized, &path)
            .with_context(|| format!("write {}", path.display()))?;
        info!(output = %path.display(), "output written");
        Some(path)
    };

    Ok(AnonymizeResult {
        input: args.input.clone(),
        output,
        report,
    })
}

pub fn run_generate(args: &GenerateArgs) -> Result<GenerateResult> {
    let mut df = generate_dataset(args.rows, args.seed, args.language)?;
    write_table(&mut df, &args.output)
        .with_context(|| format!("write {}", args.output.display()))?;
    Ok(GenerateResult {
        output: args.output.clone(),
        rows: df.height(),
        columns: df
            .get_column_names()
            .iter()
            .map(ToString::to_string)
            .collect(),
    })
}

fn overrides_from_args(args: &AnonymizeArgs) -> Overrides {
    Overrides {
        language: args.language,
        mode: args.mode.map(Into::into),
        safe_strategy: args.strategy.map(Into::into),
        engine: args.engine.map(Into::into),
        partitions: args.partitions,
        seed: args.seed,
        max_retries: args.max_retries,
        columns: args.columns.clone(),
    }
}

/// `people.csv` becomes `people_pseudo.csv` in the same directory.
fn default_output_path(input: &Path) -> PathBuf {
    let stem = input
        .file_stem()
        .map(|stem| stem.to_string_lossy().into_owned())
        .unwrap_or_else(|| "output".to_string());
    let file_name = match input.extension() {
        Some(ext) => format!("{stem}_pseudo.{}", ext.to_string_lossy()),
        None => format!("{stem}_pseudo"),
    };
    input.with_file_name(file_name)
}

/// Log the first substitution of every column at debug level.
fn log_sample_substitutions(
    original: &DataFrame,
    anonymized: &DataFrame,
    report: &AnonymizationReport,
) {
    if !tracing::enabled!(tracing::Level::DEBUG) {
        return;
    }
    for column in &report.columns {
        let Some((from, to)) = first_pair(original, anonymized, &column.column) else {
            continue;
        };
        debug!(
            column = %column.column,
            original = redact_value(&from),
            replacement = %to,
            redacted = !log_data_enabled(),
            "sample substitution"
        );
    }
}

fn first_pair(original: &DataFrame, anonymized: &DataFrame, column: &str) -> Option<(String, String)> {
    let from = original.column(column).ok()?.cast(&DataType::String).ok()?;
    let to = anonymized.column(column).ok()?;
    let (from, to) = (from.str().ok()?, to.str().ok()?);
    from.iter()
        .zip(to.iter())
        .find_map(|pair| match pair {
            (Some(from), Some(to)) => Some((from.to_string(), to.to_string())),
            _ => None,
        })
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_default_output_path() {
        assert_eq!(
            default_output_path(Path::new("/data/people.csv")),
            PathBuf::from("/data/people_pseudo.csv")
        );
        assert_eq!(
            default_output_path(Path::new("pseudo_data.gzip")),
            PathBuf::from("pseudo_data_pseudo.gzip")
        );
    }

    #[test]
    fn test_first_pair_skips_nulls() {
        let original = df! { "Name" => &[None, Some("Ann")] }.unwrap();
        let anonymized = df! { "Name" => &[None, Some("Zoe")] }.unwrap();
        assert_eq!(
            first_pair(&original, &anonymized, "Name"),
            Some(("Ann".to_string(), "Zoe".to_string()))
        );
        assert_eq!(first_pair(&original, &anonymized, "Email"), None);
    }
}
