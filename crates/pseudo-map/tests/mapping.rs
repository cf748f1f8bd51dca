//! Integration tests for the substitution mapping engine.

use std::cell::Cell;
use std::collections::HashSet;

use proptest::prelude::*;
use pseudo_generate::{CyclicGenerator, ValueGenerator, from_fn};
use pseudo_map::{
    FastMapper, MapError, Mapper, PooledMapper, SafeMapper, SubstitutionMapper, build_pool,
    checkpoint_interval, dictionary_encode,
};
use pseudo_model::AnonymizationMode;

/// Generator drawing from `space` distinct values with a simple LCG walk.
fn limited_generator(space: u64, seed: u64) -> impl ValueGenerator<Value = u64> {
    let mut state = seed;
    from_fn(move || {
        state = state
            .wrapping_mul(6_364_136_223_846_793_005)
            .wrapping_add(1_442_695_040_888_963_407);
        (state >> 33) % space
    })
}

fn counting_generator() -> impl ValueGenerator<Value = u64> {
    let mut next = 0u64;
    from_fn(move || {
        next += 1;
        next
    })
}

#[test]
fn value_space_of_one_fast_succeeds_safe_exhausts() {
    let originals = ["a", "b", "c"];

    let mut fast = FastMapper::new(CyclicGenerator::new(vec!["X".to_string()]));
    let replaced: Vec<String> = originals
        .iter()
        .map(|original| fast.get_or_create(original).unwrap())
        .collect();
    assert_eq!(replaced, vec!["X", "X", "X"]);

    let pooled = PooledMapper::build(
        originals.len(),
        CyclicGenerator::new(vec!["X".to_string()]),
    );
    assert!(matches!(pooled, Err(MapError::PoolExhausted { distinct: 1, .. })));

    let mut streaming =
        SafeMapper::with_max_retries(CyclicGenerator::new(vec!["X".to_string()]), Some(100));
    assert!(streaming.get_or_create(&"a").is_ok());
    assert!(matches!(
        streaming.get_or_create(&"b"),
        Err(MapError::RetryLimitExceeded { .. })
    ));
}

#[test]
fn pool_exhaustion_terminates_within_bounded_calls() {
    let n = 1_000;
    let k = 50;
    let calls = Cell::new(0usize);
    let mut inner = limited_generator(k, 3);
    let result = build_pool(
        n,
        from_fn(|| {
            calls.set(calls.get() + 1);
            inner.generate()
        }),
    );
    assert!(matches!(result, Err(MapError::PoolExhausted { .. })));
    // Every interval before exhaustion must add at least one new value.
    let bound = (k as usize + 1) * checkpoint_interval(n);
    assert!(calls.get() <= bound, "{} calls exceeded {bound}", calls.get());
}

#[test]
fn pool_exhaustion_error_advises_fast_mode() {
    let err = build_pool(20, CyclicGenerator::new(vec![1, 2])).unwrap_err();
    insta::assert_snapshot!(
        err.to_string(),
        @"not enough distinct values could be generated: wanted 21, got 2 after 4 attempts; use fast mode instead"
    );
}

#[test]
fn indexed_substitution_collapses_repeated_originals() {
    let column = vec![Some("Alice"), Some("Bob"), Some("Alice"), Some("Carol")];
    let encoding = dictionary_encode(column);
    let mapper = PooledMapper::build(encoding.cardinality(), counting_generator()).unwrap();
    let replaced = mapper.substitute(&encoding.codes);

    assert_eq!(replaced[0], replaced[2]);
    let distinct: HashSet<_> = replaced.iter().flatten().collect();
    assert_eq!(distinct.len(), 3);
}

#[test]
fn runtime_mapper_follows_requested_mode() {
    let mut safe: Mapper<&str, _> = Mapper::new(
        AnonymizationMode::Safe,
        CyclicGenerator::new(vec![1, 1, 2]),
        None,
    );
    assert_eq!(safe.get_or_create(&"a").unwrap(), 1);
    assert_eq!(safe.get_or_create(&"b").unwrap(), 2);

    let mut fast: Mapper<&str, _> = Mapper::new(
        AnonymizationMode::Fast,
        CyclicGenerator::new(vec![1, 1, 2]),
        None,
    );
    assert_eq!(fast.get_or_create(&"a").unwrap(), 1);
    assert_eq!(fast.get_or_create(&"b").unwrap(), 1);
    assert_eq!(fast.into_mapping().len(), 2);
}

proptest! {
    #[test]
    fn pool_has_exactly_n_plus_one_distinct_values(n in 0usize..2_000) {
        let pool = build_pool(n, counting_generator()).unwrap();
        prop_assert_eq!(pool.len(), n + 1);
        let distinct: HashSet<_> = pool.iter().collect();
        prop_assert_eq!(distinct.len(), n + 1);
    }

    #[test]
    fn mappers_are_functions(originals in prop::collection::vec(0u16..64, 1..200), seed in any::<u64>()) {
        let mut fast = FastMapper::new(limited_generator(16, seed));
        let mut safe = SafeMapper::new(limited_generator(1 << 20, seed));
        for original in &originals {
            let first_fast = fast.get_or_create(original).unwrap();
            let first_safe = safe.get_or_create(original).unwrap();
            prop_assert_eq!(fast.get_or_create(original).unwrap(), first_fast);
            prop_assert_eq!(safe.get_or_create(original).unwrap(), first_safe);
        }
    }

    #[test]
    fn safe_mapper_is_injective(originals in prop::collection::vec(0u32..500, 1..300), seed in any::<u64>()) {
        // A small value space forces frequent rejections.
        let mut safe = SafeMapper::new(limited_generator(600, seed));
        for original in &originals {
            safe.get_or_create(original).unwrap();
        }
        let distinct_originals: HashSet<_> = originals.iter().collect();
        let mapping = safe.into_mapping();
        let distinct_replacements: HashSet<_> = mapping.values().collect();
        prop_assert_eq!(mapping.len(), distinct_originals.len());
        prop_assert_eq!(distinct_replacements.len(), distinct_originals.len());
    }
}
