//! End-to-end anonymization tests over both substrates.

use std::collections::{HashMap, HashSet};

use polars::prelude::*;
use pseudo_generate::{CyclicGenerator, GeneratorRegistry, GenerateError, from_fn};
use pseudo_map::MapError;
use pseudo_model::{
    AnonymizationMode, AnonymizerOptions, ColumnSpec, Engine, Locale, SafeStrategy, SemanticType,
};
use pseudo_transform::{AnonymizeError, Anonymizer};

fn strings(df: &DataFrame, column: &str) -> Vec<Option<String>> {
    df.column(column)
        .unwrap()
        .str()
        .unwrap()
        .iter()
        .map(|value| value.map(str::to_string))
        .collect()
}

fn seeded(seed: u64) -> AnonymizerOptions {
    AnonymizerOptions::default().with_seed(Some(seed))
}

fn counting_registry() -> GeneratorRegistry {
    GeneratorRegistry::empty().with(SemanticType::Name, |_| {
        let mut next = 0u64;
        Box::new(from_fn(move || {
            next += 1;
            format!("person-{next}")
        }))
    })
}

/// 600 rows cycling over 37 distinct names.
fn repeated_names() -> DataFrame {
    let names: Vec<String> = (0..600).map(|i| format!("original-{}", i % 37)).collect();
    df! { "Name" => names }.unwrap()
}

fn assert_consistent_and_injective(original: &[Option<String>], replaced: &[Option<String>]) {
    let mut mapping: HashMap<&String, &String> = HashMap::new();
    for (from, to) in original.iter().zip(replaced) {
        let (Some(from), Some(to)) = (from, to) else {
            assert_eq!(from.is_none(), to.is_none());
            continue;
        };
        assert_eq!(*mapping.entry(from).or_insert(to), to, "{from} mapped twice");
    }
    let distinct: HashSet<_> = mapping.values().collect();
    assert_eq!(distinct.len(), mapping.len());
}

#[test]
fn safe_mode_keeps_repeated_originals_equal() {
    let df = df! { "Name" => &["Alice", "Bob", "Alice", "Carol"] }.unwrap();
    for strategy in [SafeStrategy::Indexed, SafeStrategy::Streaming] {
        let anonymizer = Anonymizer::new(seeded(11).with_safe_strategy(strategy));
        let (result, report) = anonymizer.anonymize(df.clone(), None).unwrap();

        let names = strings(&result, "Name");
        assert_eq!(names[0], names[2]);
        let distinct: HashSet<_> = names.iter().flatten().collect();
        assert_eq!(distinct.len(), 3);
        assert!(!names.contains(&Some("Alice".to_string())));

        let column = report.column("Name").unwrap();
        assert_eq!(column.distinct_originals, 3);
        assert_eq!(column.distinct_replacements, 3);
    }
}

#[test]
fn multi_matched_column_is_anonymized_once_as_last_match() {
    let df = df! {
        "username_email" => &["a@x.org", "b@x.org"],
        "balance" => &[10, 20],
    }
    .unwrap();
    let (result, report) = Anonymizer::new(seeded(3)).anonymize(df, None).unwrap();

    assert_eq!(report.columns.len(), 1);
    assert_eq!(report.columns[0].semantic_type, SemanticType::Username);
    assert_eq!(result.column("balance").unwrap().dtype(), &DataType::Int32);
    assert_ne!(strings(&result, "username_email")[0].as_deref(), Some("a@x.org"));
}

#[test]
fn explicit_specs_override_classification() {
    let df = df! {
        "customer" => &["Ann", "Ben"],
        "Name" => &["kept", "kept"],
    }
    .unwrap();
    let specs = [ColumnSpec::new("customer", SemanticType::Name)];
    let (result, report) = Anonymizer::new(seeded(5))
        .anonymize(df, Some(&specs))
        .unwrap();

    assert_eq!(report.columns.len(), 1);
    assert_eq!(strings(&result, "Name"), vec![Some("kept".to_string()); 2]);
    assert_ne!(strings(&result, "customer")[0].as_deref(), Some("Ann"));
}

#[test]
fn explicit_spec_for_unknown_column_fails() {
    let df = df! { "Name" => &["Ann"] }.unwrap();
    let specs = [ColumnSpec::new("Email", SemanticType::Email)];
    let err = Anonymizer::new(seeded(1))
        .anonymize(df, Some(&specs))
        .unwrap_err();
    assert!(matches!(err, AnonymizeError::ColumnNotFound { .. }));
}

#[test]
fn missing_generator_fails_instead_of_skipping() {
    let df = df! { "Address" => &["1 Main St"] }.unwrap();
    let anonymizer = Anonymizer::with_registry(seeded(1), counting_registry());
    let err = anonymizer.anonymize(df, None).unwrap_err();
    assert!(matches!(
        err,
        AnonymizeError::Generate(GenerateError::UnknownSemanticType(SemanticType::Address))
    ));
}

#[test]
fn nulls_stay_null_and_numbers_become_strings() {
    let df = df! {
        "Name" => &[Some("Ann"), None, Some("Ann")],
        "phone" => &[Some(5551234i64), Some(5559876), None],
    }
    .unwrap();
    let (result, report) = Anonymizer::new(seeded(9)).anonymize(df, None).unwrap();

    let names = strings(&result, "Name");
    assert!(names[1].is_none());
    assert_eq!(names[0], names[2]);

    let phones = strings(&result, "phone");
    assert!(phones[0].is_some() && phones[1].is_some());
    assert!(phones[2].is_none());
    assert_eq!(report.column("phone").unwrap().nulls, 1);
    assert_eq!(report.total_replaced(), 4);
}

#[test]
fn value_space_of_one_separates_fast_from_safe() {
    let registry = || {
        GeneratorRegistry::empty().with(SemanticType::Name, |_| {
            Box::new(CyclicGenerator::new(vec!["X".to_string()]))
        })
    };
    let df = df! { "Name" => &["a", "b", "c"] }.unwrap();

    for engine in [Engine::Local, Engine::Partitioned] {
        let fast = Anonymizer::with_registry(
            AnonymizerOptions::fast().with_engine(engine).with_partitions(2),
            registry(),
        );
        let (result, report) = fast.anonymize(df.clone(), None).unwrap();
        assert_eq!(strings(&result, "Name"), vec![Some("X".to_string()); 3]);
        assert!(report.columns[0].has_collisions());

        let safe = Anonymizer::with_registry(
            AnonymizerOptions::default().with_engine(engine).with_partitions(2),
            registry(),
        );
        let err = safe.anonymize(df.clone(), None).unwrap_err();
        assert!(matches!(
            err,
            AnonymizeError::Mapping {
                source: MapError::PoolExhausted { .. },
                ..
            }
        ));
    }
}

#[test]
fn partitioned_engine_is_consistent_across_partitions() {
    let df = repeated_names();
    let original = strings(&df, "Name");
    for (mode, strategy) in [
        (AnonymizationMode::Safe, SafeStrategy::Indexed),
        (AnonymizationMode::Safe, SafeStrategy::Streaming),
    ] {
        let options = seeded(21)
            .with_mode(mode)
            .with_safe_strategy(strategy)
            .with_engine(Engine::Partitioned)
            .with_partitions(7);
        let (result, report) = Anonymizer::new(options).anonymize(df.clone(), None).unwrap();
        assert_consistent_and_injective(&original, &strings(&result, "Name"));
        assert_eq!(report.column("Name").unwrap().distinct_replacements, 37);
    }
}

#[test]
fn engines_agree_for_the_same_seed() {
    let df = repeated_names();
    for mode in [AnonymizationMode::Fast, AnonymizationMode::Safe] {
        let local = Anonymizer::with_registry(seeded(4).with_mode(mode), counting_registry());
        let partitioned = Anonymizer::with_registry(
            seeded(4)
                .with_mode(mode)
                .with_engine(Engine::Partitioned)
                .with_partitions(5),
            counting_registry(),
        );
        let (left, _) = local.anonymize(df.clone(), None).unwrap();
        let (right, _) = partitioned.anonymize(df.clone(), None).unwrap();
        assert_eq!(strings(&left, "Name"), strings(&right, "Name"));
    }
}

#[test]
fn seeded_runs_are_reproducible() {
    let df = df! {
        "Name" => &["Ann", "Ben", "Cid"],
        "iban" => &["x", "y", "z"],
    }
    .unwrap();
    let options = seeded(77).with_language(Locale::DeDe);
    let (first, _) = Anonymizer::new(options.clone()).anonymize(df.clone(), None).unwrap();
    let (second, _) = Anonymizer::new(options).anonymize(df.clone(), None).unwrap();
    assert_eq!(strings(&first, "Name"), strings(&second, "Name"));
    assert_eq!(strings(&first, "iban"), strings(&second, "iban"));

    let (other, _) = Anonymizer::new(seeded(78).with_language(Locale::DeDe))
        .anonymize(df, None)
        .unwrap();
    assert_ne!(strings(&first, "Name"), strings(&other, "Name"));
    for iban in strings(&first, "iban").into_iter().flatten() {
        assert!(iban.starts_with("DE"));
        assert!(pseudo_generate::is_valid_iban(&iban));
    }
}

#[test]
fn report_serializes_for_machine_output() {
    let df = df! { "Name" => &["Ann"] }.unwrap();
    let (_, report) = Anonymizer::new(seeded(2)).anonymize(df, None).unwrap();
    let json = serde_json::to_value(&report).unwrap();
    assert_eq!(json["columns"][0]["semantic_type"], "name");
    assert_eq!(json["columns"][0]["rows"], 1);
    assert_eq!(json["mode"], "safe");
}

mod properties {
    use super::*;
    use proptest::prelude::*;

    proptest! {
        #![proptest_config(ProptestConfig::with_cases(32))]

        #[test]
        fn partition_count_does_not_change_output(
            cells in prop::collection::vec(prop::option::weighted(0.9, 0u8..40), 0..300),
            partitions in 1usize..16,
        ) {
            let names: Vec<Option<String>> =
                cells.iter().map(|cell| cell.map(|v| format!("n{v}"))).collect();
            let df = df! { "Name" => names.clone() }.unwrap();

            let local = Anonymizer::with_registry(seeded(8), counting_registry());
            let partitioned = Anonymizer::with_registry(
                seeded(8).with_engine(Engine::Partitioned).with_partitions(partitions),
                counting_registry(),
            );
            let (left, _) = local.anonymize(df.clone(), None).unwrap();
            let (right, _) = partitioned.anonymize(df, None).unwrap();

            let replaced = strings(&right, "Name");
            prop_assert_eq!(strings(&left, "Name"), replaced.clone());
            assert_consistent_and_injective(&names, &replaced);
        }
    }
}
