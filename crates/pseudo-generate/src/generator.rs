//! The value generator abstraction.
//!
//! A generator produces one fresh value per call and keeps no memory of the
//! values it produced before. Uniqueness and memoization are the business of
//! the mappers built on top of it.

/// Produces a freshly generated value on each call.
pub trait ValueGenerator {
    type Value;

    fn generate(&mut self) -> Self::Value;
}

impl<G: ValueGenerator + ?Sized> ValueGenerator for Box<G> {
    type Value = G::Value;

    fn generate(&mut self) -> Self::Value {
        (**self).generate()
    }
}

impl<G: ValueGenerator + ?Sized> ValueGenerator for &mut G {
    type Value = G::Value;

    fn generate(&mut self) -> Self::Value {
        (**self).generate()
    }
}

/// Type-erased string generator handed out by the registry.
pub type BoxedGenerator = Box<dyn ValueGenerator<Value = String> + Send>;

/// Adapts a closure into a [`ValueGenerator`].
#[derive(Debug, Clone)]
pub struct FnGenerator<F>(pub F);

impl<F, V> ValueGenerator for FnGenerator<F>
where
    F: FnMut() -> V,
{
    type Value = V;

    fn generate(&mut self) -> V {
        (self.0)()
    }
}

/// Wrap a closure as a generator.
pub fn from_fn<F, V>(f: F) -> FnGenerator<F>
where
    F: FnMut() -> V,
{
    FnGenerator(f)
}

/// Generator that walks a fixed vocabulary in a cycle.
///
/// Useful to model a value space of known size.
#[derive(Debug, Clone)]
pub struct CyclicGenerator<V> {
    values: Vec<V>,
    next: usize,
}

impl<V: Clone> CyclicGenerator<V> {
    /// # Panics
    ///
    /// Panics if `values` is empty.
    pub fn new(values: Vec<V>) -> Self {
        assert!(!values.is_empty(), "cyclic generator needs at least one value");
        Self { values, next: 0 }
    }
}

impl<V: Clone> ValueGenerator for CyclicGenerator<V> {
    type Value = V;

    fn generate(&mut self) -> V {
        let value = self.values[self.next].clone();
        self.next = (self.next + 1) % self.values.len();
        value
    }
}
