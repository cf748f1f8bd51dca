//! Indexed safe-mode substitution.
//!
//! The column is first dictionary-encoded into integer codes `0..k`, then a
//! pool of exactly `k` distinct replacements is drawn up front and code `i`
//! maps to `pool[i]`. No rejection sampling happens at substitution time.

use std::collections::HashMap;
use std::hash::Hash;

use pseudo_generate::ValueGenerator;

use crate::error::Result;
use crate::pool::build_pool;

/// Dictionary encoding of a column with optional cells.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct DictionaryEncoding<K> {
    /// Per-row code into `dictionary`; `None` for missing cells.
    pub codes: Vec<Option<usize>>,
    /// Distinct values in first-seen order.
    pub dictionary: Vec<K>,
}

impl<K> DictionaryEncoding<K> {
    pub fn cardinality(&self) -> usize {
        self.dictionary.len()
    }
}

/// Assign codes to values in first-seen order.
pub fn dictionary_encode<I, K>(values: I) -> DictionaryEncoding<K>
where
    I: IntoIterator<Item = Option<K>>,
    K: Eq + Hash + Clone,
{
    let mut index: HashMap<K, usize> = HashMap::new();
    let mut dictionary = Vec::new();
    let codes = values
        .into_iter()
        .map(|value| {
            value.map(|value| {
                *index.entry(value).or_insert_with_key(|key| {
                    dictionary.push(key.clone());
                    dictionary.len() - 1
                })
            })
        })
        .collect();
    DictionaryEncoding { codes, dictionary }
}

/// Replacement table addressed by dictionary code.
#[derive(Debug, Clone)]
pub struct PooledMapper<V> {
    pool: Vec<V>,
}

impl<V> PooledMapper<V>
where
    V: Eq + Hash + Clone,
{
    /// Draw `cardinality` distinct replacements.
    ///
    /// The pool builder is asked for `cardinality - 1`, so its `+1` buffer
    /// lands exactly on the number of codes. An empty column needs no pool.
    ///
    /// # Errors
    ///
    /// Propagates [`MapError::PoolExhausted`](crate::MapError::PoolExhausted).
    pub fn build<G>(cardinality: usize, generator: G) -> Result<Self>
    where
        G: ValueGenerator<Value = V>,
    {
        if cardinality == 0 {
            return Ok(Self { pool: Vec::new() });
        }
        let pool = build_pool(cardinality - 1, generator)?;
        Ok(Self { pool })
    }

    /// Replacement for a dictionary code.
    pub fn get(&self, code: usize) -> Option<&V> {
        self.pool.get(code)
    }

    pub fn len(&self) -> usize {
        self.pool.len()
    }

    pub fn is_empty(&self) -> bool {
        self.pool.is_empty()
    }

    /// Map every code of an encoding to its replacement.
    pub fn substitute(&self, codes: &[Option<usize>]) -> Vec<Option<V>> {
        codes
            .iter()
            .map(|code| code.and_then(|code| self.get(code).cloned()))
            .collect()
    }

    /// Pair each dictionary value with its replacement.
    pub fn into_mapping<K>(self, dictionary: Vec<K>) -> HashMap<K, V>
    where
        K: Eq + Hash,
    {
        dictionary.into_iter().zip(self.pool).collect()
    }
}
