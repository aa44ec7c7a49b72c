use crate::add_on::{AddOn, Decorated};
use crate::component::Component;
use crate::error::ChainBuildError;
use std::fmt;
use tracing::{debug, trace};

/// A type-erased decoration chain: one base component and zero or more add-ons around it.
///
/// Unlike nested [`Decorated`] values, a `Chain` has the same type no matter how many layers it
/// carries, so it can be assembled from data at runtime.
pub struct Chain {
    component: Box<dyn Component>,
    depth: usize,
}

impl Chain {
    pub fn new<C: Component + 'static>(base: C) -> Self {
        Self::from_boxed(Box::new(base))
    }

    pub fn builder() -> ChainBuilder {
        ChainBuilder::new()
    }

    fn from_boxed(component: Box<dyn Component>) -> Self {
        Self { component, depth: 0 }
    }

    /// wraps the whole chain in one more add-on
    #[must_use]
    pub fn wrap<A: AddOn + 'static>(self, add_on: A) -> Self {
        let depth = self.depth + 1;
        trace!(suffix = add_on.suffix(), price = add_on.price(), depth, "wrap chain");
        Self { component: Box::new(Decorated::new(self.component, add_on)), depth }
    }

    /// the number of add-ons around the base component
    pub fn depth(&self) -> usize {
        self.depth
    }
}

impl Component for Chain {
    #[inline]
    fn description(&self) -> String {
        self.component.description()
    }

    #[inline]
    fn price(&self) -> u64 {
        self.component.price()
    }
}

impl fmt::Debug for Chain {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.debug_struct("Chain")
            .field("description", &self.description())
            .field("price", &self.price())
            .field("depth", &self.depth)
            .finish()
    }
}

/// Collects a base component and an ordered list of add-ons; the first add-on is innermost.
#[derive(Default)]
pub struct ChainBuilder {
    base: Option<Box<dyn Component>>,
    add_ons: Vec<Box<dyn AddOn>>,
}

impl ChainBuilder {
    fn new() -> Self {
        Self::default()
    }

    #[must_use]
    pub fn base<C: Component + 'static>(mut self, base: C) -> Self {
        self.base = Some(Box::new(base));
        self
    }

    #[must_use]
    pub fn add_on<A: AddOn + 'static>(mut self, add_on: A) -> Self {
        self.add_ons.push(Box::new(add_on));
        self
    }

    pub fn build(self) -> Result<Chain, ChainBuildError> {
        let base = self.base.ok_or(ChainBuildError::MissingBase)?;
        let chain = self.add_ons.into_iter().fold(Chain::from_boxed(base), Chain::wrap);
        debug!(depth = chain.depth(), price = chain.price(), "chain built");
        Ok(chain)
    }
}

impl fmt::Debug for ChainBuilder {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.debug_struct("ChainBuilder")
            .field("has_base", &self.base.is_some())
            .field("add_ons", &self.add_ons.iter().map(|add_on| add_on.suffix()).collect::<Vec<_>>())
            .finish()
    }
}
