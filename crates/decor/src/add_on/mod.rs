//! Add-ons and the [`Decorated`] wrapper that attaches one to a component.

mod builtin;
mod custom;

pub use builtin::{ExternalHdd, Monitor, WithExternalHdd, WithMonitor};
pub use custom::CustomAddOn;

use crate::component::Component;

/// The fixed contribution an add-on makes to whatever it wraps.
pub trait AddOn {
    /// text appended after the wrapped component's description
    fn suffix(&self) -> &str;

    /// amount added to the wrapped component's price
    fn price(&self) -> u64;
}

impl<A: AddOn + ?Sized> AddOn for &A {
    #[inline]
    fn suffix(&self) -> &str {
        (**self).suffix()
    }

    #[inline]
    fn price(&self) -> u64 {
        (**self).price()
    }
}

impl<A: AddOn + ?Sized> AddOn for Box<A> {
    #[inline]
    fn suffix(&self) -> &str {
        (**self).suffix()
    }

    #[inline]
    fn price(&self) -> u64 {
        (**self).price()
    }
}

/// A component wrapped by exactly one add-on.
///
/// The inner component is owned and fixed at construction, so a chain of `Decorated` values is
/// always finite and ends in a single base component. Every query is answered by asking the
/// inner component first and then appending this layer's contribution, which means suffixes
/// appear innermost to outermost and the price is the plain sum of all layers.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Decorated<C, A> {
    inner: C,
    add_on: A,
}

impl<C: Component, A: AddOn> Decorated<C, A> {
    pub fn new(inner: C, add_on: A) -> Self {
        Self { inner, add_on }
    }

    pub fn inner(&self) -> &C {
        &self.inner
    }

    pub fn add_on(&self) -> &A {
        &self.add_on
    }

    /// removes this layer, returning the component it wrapped
    pub fn into_inner(self) -> C {
        self.inner
    }
}

impl<C: Component, A: AddOn> Component for Decorated<C, A> {
    fn description(&self) -> String {
        let mut description = self.inner.description();
        description.push_str(self.add_on.suffix());
        description
    }

    fn price(&self) -> u64 {
        // saturate instead of wrapping when a catalog carries absurd prices
        self.inner.price().saturating_add(self.add_on.price())
    }
}

#[cfg(test)]
mod tests {
    use super::{AddOn, CustomAddOn, Decorated};
    use crate::{Component, MockComponent};

    #[test]
    fn test_delegates_to_inner_once_per_call() {
        let mut inner = MockComponent::new();
        inner.expect_description().times(1).return_const("inner".to_string());
        inner.expect_price().times(1).return_const(100_u64);

        let decorated = Decorated::new(inner, CustomAddOn::new("case", " in a case", 40));

        assert_eq!(decorated.description(), "inner in a case");
        assert_eq!(decorated.price(), 140);
    }

    #[test]
    fn test_into_inner_strips_one_layer() {
        let mut inner = MockComponent::new();
        inner.expect_price().return_const(10_u64);

        let decorated = Decorated::new(inner, CustomAddOn::new("fan", " with a fan", 5));
        assert_eq!(decorated.add_on().suffix(), " with a fan");
        assert_eq!(decorated.inner().price(), 10);

        let inner = decorated.into_inner();
        assert_eq!(inner.price(), 10);
    }

    #[test]
    fn test_price_saturates() {
        let mut inner = MockComponent::new();
        inner.expect_price().return_const(u64::MAX);

        let decorated = Decorated::new(inner, CustomAddOn::new("gold", " plated in gold", 1));
        assert_eq!(decorated.price(), u64::MAX);
    }

    #[test]
    fn test_boxed_add_on() {
        let add_on: Box<dyn AddOn> = Box::new(CustomAddOn::new("ssd", " with an ssd", 120));
        assert_eq!(add_on.suffix(), " with an ssd");
        assert_eq!(AddOn::price(&add_on), 120);
    }
}
