//! Composable wrapping steps.
//!
//! A [`Decorator`] turns one value into another, usually by wrapping it. Add-ons such as
//! [`Monitor`](crate::Monitor) are decorators over any [`Component`](crate::Component), so a
//! sequence of upgrades can be described once and applied to many base components:
//!
//! ```
//! use micro_decor::decorator::{Decorator, DecoratorExt};
//! use micro_decor::{Brand, Component, Computer, ExternalHdd, Monitor};
//!
//! let upgrades = ExternalHdd.and_then(Monitor);
//!
//! let brand_a = upgrades.decorate(Computer::from_brand(Brand::A));
//! let brand_b = upgrades.decorate(Computer::from_brand(Brand::B));
//!
//! assert_eq!(brand_a.price(), 1780);
//! assert_eq!(brand_b.price(), 2980);
//! ```

mod decorator_composer;
mod decorator_fn;
mod identity;

pub use decorator_composer::DecoratorComposer;
pub use decorator_fn::{decorator_fn, DecoratorFn};
pub use identity::IdentityDecorator;

pub trait Decorator<In> {
    type Out;

    fn decorate(&self, raw: In) -> Self::Out;
}

/// Chaining helpers for decorators.
///
/// Most decorators accept many input types, so the helpers are not tied to a particular input:
/// the composed decorator is checked once it is applied.
pub trait DecoratorExt: Sized {
    /// `self` wraps first, `decorator` wraps the result
    fn and_then<D>(self, decorator: D) -> DecoratorComposer<Self, D> {
        DecoratorComposer::new(self, decorator)
    }

    /// `decorator` wraps first, `self` wraps the result
    fn compose<D>(self, decorator: D) -> DecoratorComposer<D, Self> {
        DecoratorComposer::new(decorator, self)
    }
}

impl<D1, D2> DecoratorExt for DecoratorComposer<D1, D2> {}
impl<F> DecoratorExt for DecoratorFn<F> {}
impl DecoratorExt for IdentityDecorator {}

#[cfg(test)]
mod tests {
    use super::{Decorator, DecoratorExt};
    use crate::{Brand, Component, Computer, ExternalHdd, Monitor};

    #[test]
    fn test_and_then() {
        let computer = ExternalHdd.and_then(Monitor).decorate(Computer::from_brand(Brand::A));

        assert_eq!(computer.description(), "Brand A Computer with an external hard drive and a 23 inch monitor");
        assert_eq!(computer.price(), 1780);
    }

    #[test]
    fn test_compose() {
        let computer = ExternalHdd.compose(Monitor).decorate(Computer::from_brand(Brand::A));

        assert_eq!(computer.description(), "Brand A Computer and a 23 inch monitor with an external hard drive");
        assert_eq!(computer.price(), 1780);
    }
}
