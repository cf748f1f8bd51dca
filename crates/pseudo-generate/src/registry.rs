//! Registry binding semantic types to generator factories.

use std::collections::BTreeMap;
use std::fmt;

use pseudo_model::{Locale, SemanticType};
use rand_chacha::ChaCha8Rng;
use tracing::debug;

use crate::error::{GenerateError, Result};
use crate::faker::FakeValueGenerator;
use crate::generator::BoxedGenerator;

/// Builds a fresh generator for one column from that column's RNG.
pub type GeneratorFactory = Box<dyn Fn(ChaCha8Rng) -> BoxedGenerator + Send + Sync>;

/// Maps each semantic type to the factory producing its values.
pub struct GeneratorRegistry {
    factories: BTreeMap<SemanticType, GeneratorFactory>,
}

impl GeneratorRegistry {
    /// Registry with no factories.
    pub fn empty() -> Self {
        Self {
            factories: BTreeMap::new(),
        }
    }

    /// Registry with a fake-backed generator for every semantic type.
    pub fn with_defaults(locale: Locale) -> Self {
        let mut registry = Self::empty();
        for semantic_type in SemanticType::ALL {
            registry.register(semantic_type, move |rng| {
                Box::new(FakeValueGenerator::new(semantic_type, locale, rng))
            });
        }
        registry
    }

    /// Register or replace the factory for a semantic type.
    pub fn register<F>(&mut self, semantic_type: SemanticType, factory: F)
    where
        F: Fn(ChaCha8Rng) -> BoxedGenerator + Send + Sync + 'static,
    {
        self.factories.insert(semantic_type, Box::new(factory));
    }

    /// Builder form of [`register`](Self::register).
    #[must_use]
    pub fn with<F>(mut self, semantic_type: SemanticType, factory: F) -> Self
    where
        F: Fn(ChaCha8Rng) -> BoxedGenerator + Send + Sync + 'static,
    {
        self.register(semantic_type, factory);
        self
    }

    /// Remove the factory for a semantic type.
    pub fn unregister(&mut self, semantic_type: SemanticType) {
        self.factories.remove(&semantic_type);
    }

    pub fn contains(&self, semantic_type: SemanticType) -> bool {
        self.factories.contains_key(&semantic_type)
    }

    pub fn registered_types(&self) -> impl Iterator<Item = SemanticType> + '_ {
        self.factories.keys().copied()
    }

    /// Create a generator for `semantic_type`.
    ///
    /// # Errors
    ///
    /// Returns [`GenerateError::UnknownSemanticType`] when no factory is
    /// registered; callers must not skip the column silently.
    pub fn create(&self, semantic_type: SemanticType, rng: ChaCha8Rng) -> Result<BoxedGenerator> {
        let factory = self
            .factories
            .get(&semantic_type)
            .ok_or(GenerateError::UnknownSemanticType(semantic_type))?;
        debug!(semantic_type = %semantic_type, "creating value generator");
        Ok(factory(rng))
    }
}

impl Default for GeneratorRegistry {
    fn default() -> Self {
        Self::with_defaults(Locale::default())
    }
}

impl fmt::Debug for GeneratorRegistry {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.debug_struct("GeneratorRegistry")
            .field("types", &self.factories.keys().collect::<Vec<_>>())
            .finish()
    }
}
