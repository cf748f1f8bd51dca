//! Unique value pools with generator exhaustion detection.
//!
//! A pool collects distinct generated values until it holds `n + 1` of
//! them. Progress is checked every `floor(n / 10)` offers: if no new
//! distinct value arrived since the previous checkpoint the generator is
//! considered exhausted and the pool stops in [`PoolState::Exhausted`].
//! For `n < 10` the whole target `n + 1` acts as a single checkpoint
//! interval.

use std::collections::HashSet;
use std::hash::Hash;

use pseudo_generate::ValueGenerator;
use tracing::{debug, warn};

use crate::error::{MapError, Result};

/// Cardinality from which checkpoints are spaced at `n / 10`.
const CHECKPOINT_DIVISOR: usize = 10;

/// Lifecycle of a [`UniquePool`].
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum PoolState {
    /// Still accepting values.
    Sampling,
    /// Holds the requested number of distinct values.
    Converged,
    /// No progress between two checkpoints; terminal.
    Exhausted,
}

/// Offers between two progress checkpoints for a requested cardinality.
pub fn checkpoint_interval(n: usize) -> usize {
    if n >= CHECKPOINT_DIVISOR {
        n / CHECKPOINT_DIVISOR
    } else {
        n + 1
    }
}

/// Accumulates distinct values one offer at a time.
#[derive(Debug, Clone)]
pub struct UniquePool<V> {
    requested: usize,
    interval: usize,
    attempts: usize,
    checkpoint_distinct: usize,
    seen: HashSet<V>,
    values: Vec<V>,
    state: PoolState,
}

impl<V> UniquePool<V>
where
    V: Eq + Hash + Clone,
{
    /// Pool that converges at `n + 1` distinct values.
    pub fn new(n: usize) -> Self {
        Self {
            requested: n,
            interval: checkpoint_interval(n),
            attempts: 0,
            checkpoint_distinct: 0,
            seen: HashSet::with_capacity(n + 1),
            values: Vec::with_capacity(n + 1),
            state: PoolState::Sampling,
        }
    }

    /// Number of distinct values the pool converges at (`n + 1`).
    pub fn target(&self) -> usize {
        self.requested + 1
    }

    pub fn state(&self) -> PoolState {
        self.state
    }

    pub fn attempts(&self) -> usize {
        self.attempts
    }

    pub fn distinct(&self) -> usize {
        self.values.len()
    }

    /// Offer one generated value and return the resulting state.
    ///
    /// Offers made after the pool left [`PoolState::Sampling`] are ignored.
    pub fn offer(&mut self, value: V) -> PoolState {
        if self.state != PoolState::Sampling {
            return self.state;
        }
        self.attempts += 1;
        if self.seen.insert(value.clone()) {
            self.values.push(value);
        }
        if self.values.len() >= self.target() {
            self.state = PoolState::Converged;
        } else if self.attempts % self.interval == 0 {
            if self.values.len() == self.checkpoint_distinct {
                self.state = PoolState::Exhausted;
            } else {
                self.checkpoint_distinct = self.values.len();
            }
        }
        self.state
    }

    /// Error describing an exhausted pool.
    pub fn exhaustion_error(&self) -> MapError {
        MapError::PoolExhausted {
            requested: self.target(),
            distinct: self.values.len(),
            attempts: self.attempts,
        }
    }

    /// Values in generation order.
    pub fn values(&self) -> &[V] {
        &self.values
    }

    pub fn into_values(self) -> Vec<V> {
        self.values
    }
}

/// Draw exactly `n + 1` distinct values from `generator`.
///
/// # Errors
///
/// Returns [`MapError::PoolExhausted`] when the generator stops yielding
/// new values between two checkpoints.
pub fn build_pool<G>(n: usize, mut generator: G) -> Result<Vec<G::Value>>
where
    G: ValueGenerator,
    G::Value: Eq + Hash + Clone,
{
    let mut pool = UniquePool::new(n);
    loop {
        match pool.offer(generator.generate()) {
            PoolState::Sampling => {}
            PoolState::Converged => {
                debug!(
                    distinct = pool.distinct(),
                    attempts = pool.attempts(),
                    "value pool converged"
                );
                return Ok(pool.into_values());
            }
            PoolState::Exhausted => {
                warn!(
                    requested = pool.target(),
                    distinct = pool.distinct(),
                    attempts = pool.attempts(),
                    "value generator exhausted"
                );
                return Err(pool.exhaustion_error());
            }
        }
    }
}
