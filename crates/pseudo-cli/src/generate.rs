//! Synthetic demo dataset.
//!
//! Every cell is a fresh draw from the column's generator, so the dataset is
//! reproducible for a seed. `Target` is a plain integer column that no
//! classifier keyword matches and that anonymization leaves untouched.

use anyhow::Result;
use polars::prelude::*;
use pseudo_generate::{GeneratorRegistry, ValueGenerator, column_rng};
use pseudo_model::{Locale, SemanticType};
use rand::Rng;
use tracing::info;

/// Sensitive columns of the demo dataset and the type each one holds.
pub const DEMO_COLUMNS: [(&str, SemanticType); 5] = [
    ("Name", SemanticType::Name),
    ("Credit_card", SemanticType::CreditCard),
    ("Telephone", SemanticType::PhoneNumber),
    ("Address", SemanticType::Address),
    ("date_time", SemanticType::DateTime),
];

/// Non-sensitive integer column.
pub const TARGET_COLUMN: &str = "Target";

/// Largest value drawn for [`TARGET_COLUMN`].
const TARGET_MAX: i64 = 9_999;

/// Build a demo DataFrame with `rows` rows.
pub fn generate_dataset(rows: usize, seed: Option<u64>, locale: Locale) -> Result<DataFrame> {
    let registry = GeneratorRegistry::with_defaults(locale);
    let mut columns = Vec::with_capacity(DEMO_COLUMNS.len() + 1);
    for (name, semantic_type) in DEMO_COLUMNS {
        let mut generator = registry.create(semantic_type, column_rng(seed, name))?;
        let values: Vec<String> = (0..rows).map(|_| generator.generate()).collect();
        columns.push(Series::new(name.into(), values).into_column());
    }

    let mut rng = column_rng(seed, TARGET_COLUMN);
    let targets: Vec<i64> = (0..rows)
        .map(|_| rng.random_range(0..=TARGET_MAX))
        .collect();
    // Target sits before date_time, as in the source datasets.
    columns.insert(
        DEMO_COLUMNS.len() - 1,
        Series::new(TARGET_COLUMN.into(), targets).into_column(),
    );

    let df = DataFrame::new(columns)?;
    info!(rows, columns = df.width(), "demo dataset generated");
    Ok(df)
}
