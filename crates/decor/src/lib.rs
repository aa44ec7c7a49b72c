//! Composable decorators over priced components
//!
//! A [`Component`] is anything that can describe itself and report a price. A base component,
//! such as a [`Computer`], sits at the center of a chain and every add-on wraps the component
//! below it, appending its own text to the description and adding its own delta to the price.
//! The wrapped component is never modified.
//!
//! Chains come in two flavors:
//!
//! - statically typed, where each layer is a [`Decorated`] value and the full chain is known at
//!   compile time (see [`Decorator`] and [`DecoratorExt`] for composing the wrapping steps)
//! - type-erased, where a [`Chain`] boxes its layers and can be assembled at runtime, either
//!   directly through a [`ChainBuilder`] or from a JSON [`Catalog`]
//!
//! # Example
//!
//! ```
//! use micro_decor::{Brand, Component, Computer, ExternalHdd, Monitor};
//!
//! let computer = Monitor::wrap(ExternalHdd::wrap(Computer::from_brand(Brand::A)));
//!
//! assert_eq!(computer.description(), "Brand A Computer with an external hard drive and a 23 inch monitor");
//! assert_eq!(computer.price(), 1780);
//! ```

mod add_on;
mod chain;
mod component;
mod computer;
mod error;

pub mod catalog;
pub mod decorator;

pub use add_on::{AddOn, CustomAddOn, Decorated, ExternalHdd, Monitor, WithExternalHdd, WithMonitor};
pub use catalog::Catalog;
pub use chain::{Chain, ChainBuilder};
pub use component::Component;
pub use computer::{Brand, Computer};
pub use decorator::{Decorator, DecoratorExt};
pub use error::{CatalogError, ChainBuildError};

#[cfg(test)]
pub use component::MockComponent;
