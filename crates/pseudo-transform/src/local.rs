//! Single-threaded substitution of one column.

use polars::prelude::StringChunked;
use pseudo_generate::BoxedGenerator;
use pseudo_map::{Mapper, PooledMapper, Result, SubstitutionMapper, dictionary_encode};
use pseudo_model::{AnonymizationMode, AnonymizerOptions, SafeStrategy};

/// Replace every non-null cell of `values` using one mapper for the column.
pub(crate) fn substitute(
    values: &StringChunked,
    generator: BoxedGenerator,
    options: &AnonymizerOptions,
) -> Result<Vec<Option<String>>> {
    if options.mode == AnonymizationMode::Safe && options.safe_strategy == SafeStrategy::Indexed {
        let encoding = dictionary_encode(values.iter());
        let pool = PooledMapper::build(encoding.cardinality(), generator)?;
        return Ok(pool.substitute(&encoding.codes));
    }

    let mut mapper = Mapper::new(options.mode, generator, options.max_retries);
    let mut replaced = Vec::with_capacity(values.len());
    for value in values.iter() {
        replaced.push(match value {
            Some(original) => Some(mapper.get_or_create(&original)?),
            None => None,
        });
    }
    Ok(replaced)
}
