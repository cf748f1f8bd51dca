//! Stable substitution mappers.
//!
//! A mapper memoizes one replacement per original value for its whole
//! lifetime. [`FastMapper`] draws a single value on first sight and accepts
//! collisions between originals. [`SafeMapper`] rejection-samples until the
//! drawn value was never issued before, so its range is injective.

use std::collections::{HashMap, HashSet};
use std::fmt;
use std::hash::Hash;

use pseudo_generate::ValueGenerator;
use pseudo_model::AnonymizationMode;

use crate::error::{MapError, Result};

/// Maps original values to stable replacements.
pub trait SubstitutionMapper<K> {
    type Value;

    /// Return the replacement for `original`, generating it on first sight.
    fn get_or_create(&mut self, original: &K) -> Result<Self::Value>;

    /// Replacement already assigned to `original`, if any.
    fn get(&self, original: &K) -> Option<&Self::Value>;

    /// Number of originals seen so far.
    fn len(&self) -> usize;

    fn is_empty(&self) -> bool {
        self.len() == 0
    }
}

/// Memoizing mapper without a uniqueness guarantee.
#[derive(Debug, Clone)]
pub struct FastMapper<K, G: ValueGenerator> {
    generator: G,
    mapping: HashMap<K, G::Value>,
}

impl<K, G> FastMapper<K, G>
where
    K: Eq + Hash + Clone,
    G: ValueGenerator,
    G::Value: Clone,
{
    pub fn new(generator: G) -> Self {
        Self {
            generator,
            mapping: HashMap::new(),
        }
    }

    pub fn into_mapping(self) -> HashMap<K, G::Value> {
        self.mapping
    }
}

impl<K, G> SubstitutionMapper<K> for FastMapper<K, G>
where
    K: Eq + Hash + Clone,
    G: ValueGenerator,
    G::Value: Clone,
{
    type Value = G::Value;

    fn get_or_create(&mut self, original: &K) -> Result<G::Value> {
        if let Some(existing) = self.mapping.get(original) {
            return Ok(existing.clone());
        }
        let value = self.generator.generate();
        self.mapping.insert(original.clone(), value.clone());
        Ok(value)
    }

    fn get(&self, original: &K) -> Option<&G::Value> {
        self.mapping.get(original)
    }

    fn len(&self) -> usize {
        self.mapping.len()
    }
}

/// Memoizing mapper whose replacements never repeat.
///
/// Rejection sampling is unbounded unless a retry limit is set. Runs built
/// from [`AnonymizerOptions`](pseudo_model::AnonymizerOptions) default to a
/// limit of [`DEFAULT_MAX_RETRIES`](pseudo_model::DEFAULT_MAX_RETRIES) draws
/// per original so an exhausted generator fails instead of spinning; a
/// limit of `None` or `0` restores unbounded sampling.
#[derive(Debug, Clone)]
pub struct SafeMapper<K, G: ValueGenerator> {
    generator: G,
    mapping: HashMap<K, G::Value>,
    issued: HashSet<G::Value>,
    max_retries: Option<usize>,
}

impl<K, G> SafeMapper<K, G>
where
    K: Eq + Hash + Clone,
    G: ValueGenerator,
    G::Value: Eq + Hash + Clone,
{
    /// Safe mapper retrying without limit.
    pub fn new(generator: G) -> Self {
        Self::with_max_retries(generator, None)
    }

    /// Safe mapper giving up after `max_retries` draws for one original.
    /// `None` and `Some(0)` both retry without limit.
    pub fn with_max_retries(generator: G, max_retries: Option<usize>) -> Self {
        Self {
            generator,
            mapping: HashMap::new(),
            issued: HashSet::new(),
            max_retries: max_retries.filter(|&limit| limit > 0),
        }
    }

    /// Values handed out so far.
    pub fn issued(&self) -> &HashSet<G::Value> {
        &self.issued
    }

    pub fn into_mapping(self) -> HashMap<K, G::Value> {
        self.mapping
    }
}

impl<K, G> SubstitutionMapper<K> for SafeMapper<K, G>
where
    K: Eq + Hash + Clone,
    G: ValueGenerator,
    G::Value: Eq + Hash + Clone,
{
    type Value = G::Value;

    fn get_or_create(&mut self, original: &K) -> Result<G::Value> {
        if let Some(existing) = self.mapping.get(original) {
            return Ok(existing.clone());
        }
        let mut attempts = 0usize;
        let value = loop {
            let candidate = self.generator.generate();
            attempts += 1;
            if !self.issued.contains(&candidate) {
                break candidate;
            }
            if self.max_retries.is_some_and(|limit| attempts >= limit) {
                return Err(MapError::RetryLimitExceeded {
                    attempts,
                    issued: self.issued.len(),
                });
            }
        };
        self.issued.insert(value.clone());
        self.mapping.insert(original.clone(), value.clone());
        Ok(value)
    }

    fn get(&self, original: &K) -> Option<&G::Value> {
        self.mapping.get(original)
    }

    fn len(&self) -> usize {
        self.mapping.len()
    }
}

/// A fast or safe mapper chosen at runtime.
pub enum Mapper<K, G: ValueGenerator> {
    Fast(FastMapper<K, G>),
    Safe(SafeMapper<K, G>),
}

impl<K, G> fmt::Debug for Mapper<K, G>
where
    K: fmt::Debug,
    G: ValueGenerator + fmt::Debug,
    G::Value: fmt::Debug,
{
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Mapper::Fast(mapper) => f.debug_tuple("Fast").field(mapper).finish(),
            Mapper::Safe(mapper) => f.debug_tuple("Safe").field(mapper).finish(),
        }
    }
}

impl<K, G> Clone for Mapper<K, G>
where
    K: Clone,
    G: ValueGenerator + Clone,
    G::Value: Clone,
{
    fn clone(&self) -> Self {
        match self {
            Mapper::Fast(mapper) => Mapper::Fast(mapper.clone()),
            Mapper::Safe(mapper) => Mapper::Safe(mapper.clone()),
        }
    }
}

impl<K, G> Mapper<K, G>
where
    K: Eq + Hash + Clone,
    G: ValueGenerator,
    G::Value: Eq + Hash + Clone,
{
    pub fn new(mode: AnonymizationMode, generator: G, max_retries: Option<usize>) -> Self {
        match mode {
            AnonymizationMode::Fast => Mapper::Fast(FastMapper::new(generator)),
            AnonymizationMode::Safe => {
                Mapper::Safe(SafeMapper::with_max_retries(generator, max_retries))
            }
        }
    }

    pub fn mode(&self) -> AnonymizationMode {
        match self {
            Mapper::Fast(_) => AnonymizationMode::Fast,
            Mapper::Safe(_) => AnonymizationMode::Safe,
        }
    }

    pub fn into_mapping(self) -> HashMap<K, G::Value> {
        match self {
            Mapper::Fast(mapper) => mapper.into_mapping(),
            Mapper::Safe(mapper) => mapper.into_mapping(),
        }
    }
}

impl<K, G> SubstitutionMapper<K> for Mapper<K, G>
where
    K: Eq + Hash + Clone,
    G: ValueGenerator,
    G::Value: Eq + Hash + Clone,
{
    type Value = G::Value;

    fn get_or_create(&mut self, original: &K) -> Result<G::Value> {
        match self {
            Mapper::Fast(mapper) => mapper.get_or_create(original),
            Mapper::Safe(mapper) => mapper.get_or_create(original),
        }
    }

    fn get(&self, original: &K) -> Option<&G::Value> {
        match self {
            Mapper::Fast(mapper) => mapper.get(original),
            Mapper::Safe(mapper) => mapper.get(original),
        }
    }

    fn len(&self) -> usize {
        match self {
            Mapper::Fast(mapper) => mapper.len(),
            Mapper::Safe(mapper) => mapper.len(),
        }
    }
}
