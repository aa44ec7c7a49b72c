use crate::add_on::{AddOn, Decorated};
use crate::component::Component;
use crate::decorator::{Decorator, DecoratorExt};
use serde::{Deserialize, Serialize};

/// An add-on whose name, suffix and price are only known at runtime, typically read from a
/// [`Catalog`](crate::Catalog).
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct CustomAddOn {
    name: String,
    suffix: String,
    price: u64,
}

impl CustomAddOn {
    pub fn new<N: Into<String>, S: Into<String>>(name: N, suffix: S, price: u64) -> Self {
        Self { name: name.into(), suffix: suffix.into(), price }
    }

    /// copies the contribution of another add-on under a new name
    pub fn from_add_on<N: Into<String>, A: AddOn>(name: N, add_on: &A) -> Self {
        Self::new(name, add_on.suffix(), add_on.price())
    }

    pub fn name(&self) -> &str {
        &self.name
    }
}

impl AddOn for CustomAddOn {
    fn suffix(&self) -> &str {
        &self.suffix
    }

    fn price(&self) -> u64 {
        self.price
    }
}

impl DecoratorExt for CustomAddOn {}

impl<C: Component> Decorator<C> for CustomAddOn {
    type Out = Decorated<C, CustomAddOn>;

    fn decorate(&self, raw: C) -> Self::Out {
        Decorated::new(raw, self.clone())
    }
}

#[cfg(test)]
mod tests {
    use super::CustomAddOn;
    use crate::decorator::Decorator;
    use crate::{AddOn, Brand, Component, Computer, Monitor};

    #[test]
    fn test_from_add_on() {
        let add_on = CustomAddOn::from_add_on("monitor", &Monitor);

        assert_eq!(add_on.name(), "monitor");
        assert_eq!(add_on.suffix(), Monitor::SUFFIX);
        assert_eq!(AddOn::price(&add_on), Monitor::PRICE);
    }

    #[test]
    fn test_decorate_reuses_add_on() {
        let keyboard = CustomAddOn::new("keyboard", " and a keyboard", 60);

        let brand_a = keyboard.decorate(Computer::from_brand(Brand::A));
        let brand_b = keyboard.decorate(Computer::from_brand(Brand::B));

        assert_eq!(brand_a.description(), "Brand A Computer and a keyboard");
        assert_eq!(brand_a.price(), 1060);
        assert_eq!(brand_b.price(), 2260);
    }
}
