//! Synthetic value generation.
//!
//! - **generator**: the [`ValueGenerator`] trait and small adapters
//! - **faker**: `fake`-backed generators for every [`SemanticType`]
//! - **iban**: IBAN generation and validation
//! - **registry**: semantic type to generator factory bindings
//! - **seed**: per-column RNG seeding
//!
//! [`SemanticType`]: pseudo_model::SemanticType

pub mod error;
pub mod faker;
pub mod generator;
pub mod iban;
pub mod registry;
pub mod seed;

pub use error::{GenerateError, Result};
pub use faker::FakeValueGenerator;
pub use generator::{BoxedGenerator, CyclicGenerator, FnGenerator, ValueGenerator, from_fn};
pub use iban::{generate_iban, is_valid_iban};
pub use registry::{GeneratorFactory, GeneratorRegistry};
pub use seed::{column_rng, column_seed};
