//! Partition-parallel substitution of one column.
//!
//! Rows are split into contiguous partitions. Each worker first collects
//! the distinct values of its partition. The coordinating thread merges
//! them in partition order and draws one frozen mapping, which the workers
//! then apply read-only. No mapper is ever shared between threads, so the
//! fast/safe guarantees hold across partition boundaries.

use std::collections::{HashMap, HashSet};

use polars::prelude::StringChunked;
use pseudo_generate::BoxedGenerator;
use pseudo_map::{Mapper, PooledMapper, Result, SubstitutionMapper};
use pseudo_model::{AnonymizationMode, AnonymizerOptions, SafeStrategy};
use rayon::prelude::*;
use tracing::debug;

/// Rows per partition so that `rows` split into at most `partitions` chunks.
pub(crate) fn partition_size(rows: usize, partitions: usize) -> usize {
    rows.div_ceil(partitions.max(1)).max(1)
}

pub(crate) fn substitute(
    values: &StringChunked,
    generator: BoxedGenerator,
    options: &AnonymizerOptions,
) -> Result<Vec<Option<String>>> {
    let cells: Vec<Option<&str>> = values.iter().collect();
    let chunk = partition_size(cells.len(), options.partitions);

    let partition_distinct: Vec<Vec<&str>> = cells
        .par_chunks(chunk)
        .map(|partition| {
            let mut seen = HashSet::new();
            partition
                .iter()
                .flatten()
                .copied()
                .filter(|value| seen.insert(*value))
                .collect()
        })
        .collect();

    let dictionary = merge_in_order(partition_distinct);
    debug!(
        partitions = cells.len().div_ceil(chunk),
        distinct = dictionary.len(),
        "merged partition dictionaries"
    );

    let mapping = freeze(dictionary, generator, options)?;

    let replaced: Vec<Vec<Option<String>>> = cells
        .par_chunks(chunk)
        .map(|partition| {
            partition
                .iter()
                .map(|cell| cell.and_then(|value| mapping.get(value).cloned()))
                .collect()
        })
        .collect();
    Ok(replaced.concat())
}

/// Union per-partition distinct values, keeping first-seen order.
fn merge_in_order(partitions: Vec<Vec<&str>>) -> Vec<&str> {
    let mut seen = HashSet::new();
    partitions
        .into_iter()
        .flatten()
        .filter(|value| seen.insert(*value))
        .collect()
}

/// Draw the replacement of every distinct value on the calling thread.
fn freeze<'a>(
    dictionary: Vec<&'a str>,
    generator: BoxedGenerator,
    options: &AnonymizerOptions,
) -> Result<HashMap<&'a str, String>> {
    if options.mode == AnonymizationMode::Safe && options.safe_strategy == SafeStrategy::Indexed {
        let pool = PooledMapper::build(dictionary.len(), generator)?;
        return Ok(pool.into_mapping(dictionary));
    }
    let mut mapper = Mapper::new(options.mode, generator, options.max_retries);
    for value in &dictionary {
        mapper.get_or_create(value)?;
    }
    Ok(mapper.into_mapping())
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_partition_size() {
        assert_eq!(partition_size(10, 3), 4);
        assert_eq!(partition_size(10, 10), 1);
        assert_eq!(partition_size(3, 8), 1);
        assert_eq!(partition_size(0, 8), 1);
        assert_eq!(partition_size(5, 0), 5);
    }

    #[test]
    fn test_merge_keeps_partition_order() {
        let merged = merge_in_order(vec![vec!["b", "a"], vec!["a", "c"], vec![], vec!["b", "d"]]);
        assert_eq!(merged, vec!["b", "a", "c", "d"]);
    }
}
