//! Demo dataset generation feeding a full anonymization run.

use std::collections::HashSet;

use polars::prelude::*;
use pseudo_cli::generate::{DEMO_COLUMNS, TARGET_COLUMN, generate_dataset};
use pseudo_ingest::{read_table, write_table};
use pseudo_model::{AnonymizerOptions, Locale};
use pseudo_transform::{Anonymizer, classify};
use tempfile::TempDir;

#[test]
fn sensitive_demo_columns_are_classified() {
    let df = generate_dataset(3, Some(1), Locale::En).unwrap();
    let specs: Vec<String> = classify(df.get_column_names())
        .iter()
        .map(ToString::to_string)
        .collect();
    insta::assert_snapshot!(specs.join("\n"), @r"
    Name=name
    Credit_card=creditcard
    Telephone=phone_number
    Address=address
    date_time=date_time
    ");
}

#[test]
fn demo_dataset_is_reproducible() {
    let first = generate_dataset(25, Some(7), Locale::FrFr).unwrap();
    let second = generate_dataset(25, Some(7), Locale::FrFr).unwrap();
    assert!(first.equals_missing(&second));
    assert_eq!(first.shape(), (25, DEMO_COLUMNS.len() + 1));
    assert_eq!(first.column("Name").unwrap().null_count(), 0);
}

#[test]
fn demo_dataset_has_an_integer_target_before_date_time() {
    let df = generate_dataset(40, Some(2), Locale::En).unwrap();
    let names: Vec<&str> = df.get_column_names().iter().map(|name| name.as_str()).collect();
    assert_eq!(
        names,
        vec!["Name", "Credit_card", "Telephone", "Address", "Target", "date_time"]
    );
    let target = df.column(TARGET_COLUMN).unwrap().i64().unwrap();
    assert!(target.iter().flatten().all(|value| (0..=9_999).contains(&value)));
}

#[test]
fn generated_file_anonymizes_end_to_end() {
    let dir = TempDir::new().unwrap();
    let input = dir.path().join("pseudo_data.gzip");
    let mut df = generate_dataset(50, Some(3), Locale::En).unwrap();
    write_table(&mut df, &input).unwrap();

    let loaded = read_table(&input).unwrap();
    let options = AnonymizerOptions::default().with_seed(Some(5));
    let (anonymized, report) = Anonymizer::new(options).anonymize(loaded.clone(), None).unwrap();

    assert_eq!(report.columns.len(), DEMO_COLUMNS.len());
    for column in &report.columns {
        assert_eq!(column.distinct_replacements, column.distinct_originals);
    }
    let before: HashSet<_> = loaded.column("Name").unwrap().str().unwrap().iter().collect();
    let after: Vec<_> = anonymized.column("Name").unwrap().str().unwrap().iter().collect();
    assert_eq!(after.len(), 50);
    assert!(after.iter().filter(|name| before.contains(*name)).count() < 50);

    // Unclassified columns pass through untouched.
    assert!(report.column(TARGET_COLUMN).is_none());
    assert_eq!(anonymized.column(TARGET_COLUMN).unwrap().dtype(), &DataType::Int64);
    let kept = anonymized.column(TARGET_COLUMN).unwrap().as_materialized_series();
    let original = loaded.column(TARGET_COLUMN).unwrap().as_materialized_series();
    assert!(kept.equals_missing(original));

    let output = dir.path().join("out/anonymized.csv");
    write_table(&mut anonymized.clone(), &output).unwrap();
    assert_eq!(read_table(&output).unwrap().height(), 50);
}
