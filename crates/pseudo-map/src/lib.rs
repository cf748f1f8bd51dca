//! Value-substitution mapping engine.
//!
//! - **pool**: unique value pools with checkpoint-based exhaustion detection
//! - **mapper**: fast and safe memoizing mappers behind [`SubstitutionMapper`]
//! - **pooled**: dictionary encoding and pool-backed safe substitution

pub mod error;
pub mod mapper;
pub mod pool;
pub mod pooled;

pub use error::{MapError, Result};
pub use mapper::{FastMapper, Mapper, SafeMapper, SubstitutionMapper};
pub use pool::{PoolState, UniquePool, build_pool, checkpoint_interval};
pub use pooled::{DictionaryEncoding, PooledMapper, dictionary_encode};
