//! Per-column random number generator seeding.

use rand::SeedableRng;
use rand_chacha::ChaCha8Rng;

/// Derive a column seed from a run seed and a column name (FNV-1a).
pub fn column_seed(seed: u64, column: &str) -> u64 {
    let mut hash = seed ^ 0xcbf2_9ce4_8422_2325;
    for byte in column.as_bytes() {
        hash ^= u64::from(*byte);
        hash = hash.wrapping_mul(0x0100_0000_01b3);
    }
    hash
}

/// RNG for one column: deterministic when a run seed is given, otherwise
/// seeded from the thread RNG.
pub fn column_rng(seed: Option<u64>, column: &str) -> ChaCha8Rng {
    match seed {
        Some(seed) => ChaCha8Rng::seed_from_u64(column_seed(seed, column)),
        None => ChaCha8Rng::from_rng(&mut rand::rng()),
    }
}
