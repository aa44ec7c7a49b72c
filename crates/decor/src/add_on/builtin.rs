use crate::add_on::{AddOn, Decorated};
use crate::component::Component;
use crate::decorator::{Decorator, DecoratorExt};

/// A component with an [`ExternalHdd`] attached.
pub type WithExternalHdd<C> = Decorated<C, ExternalHdd>;

/// A component with a [`Monitor`] attached.
pub type WithMonitor<C> = Decorated<C, Monitor>;

/// External storage add-on.
#[derive(Default, Copy, Clone, Debug, PartialEq, Eq)]
pub struct ExternalHdd;

impl ExternalHdd {
    pub const SUFFIX: &'static str = " with an external hard drive";
    pub const PRICE: u64 = 500;

    pub fn wrap<C: Component>(component: C) -> WithExternalHdd<C> {
        Decorated::new(component, ExternalHdd)
    }
}

impl AddOn for ExternalHdd {
    fn suffix(&self) -> &str {
        Self::SUFFIX
    }

    fn price(&self) -> u64 {
        Self::PRICE
    }
}

impl DecoratorExt for ExternalHdd {}

impl<C: Component> Decorator<C> for ExternalHdd {
    type Out = WithExternalHdd<C>;

    fn decorate(&self, raw: C) -> Self::Out {
        Self::wrap(raw)
    }
}

/// 23 inch monitor add-on.
#[derive(Default, Copy, Clone, Debug, PartialEq, Eq)]
pub struct Monitor;

impl Monitor {
    pub const SUFFIX: &'static str = " and a 23 inch monitor";
    pub const PRICE: u64 = 280;

    pub fn wrap<C: Component>(component: C) -> WithMonitor<C> {
        Decorated::new(component, Monitor)
    }
}

impl AddOn for Monitor {
    fn suffix(&self) -> &str {
        Self::SUFFIX
    }

    fn price(&self) -> u64 {
        Self::PRICE
    }
}

impl DecoratorExt for Monitor {}

impl<C: Component> Decorator<C> for Monitor {
    type Out = WithMonitor<C>;

    fn decorate(&self, raw: C) -> Self::Out {
        Self::wrap(raw)
    }
}

#[cfg(test)]
mod tests {
    use super::{ExternalHdd, Monitor};
    use crate::{Brand, Component, Computer};

    #[test]
    fn test_brand_a_with_monitor() {
        let computer = Monitor::wrap(Computer::from_brand(Brand::A));

        assert_eq!(computer.description(), "Brand A Computer and a 23 inch monitor");
        assert_eq!(computer.price(), 1280);
    }

    #[test]
    fn test_brand_b_with_monitor() {
        let computer = Monitor::wrap(Computer::from_brand(Brand::B));

        assert_eq!(computer.description(), "Brand B Computer and a 23 inch monitor");
        assert_eq!(computer.price(), 2480);
    }

    #[test]
    fn test_wrapping_order() {
        let hdd_first = Monitor::wrap(ExternalHdd::wrap(Computer::from_brand(Brand::A)));
        let monitor_first = ExternalHdd::wrap(Monitor::wrap(Computer::from_brand(Brand::A)));

        assert_eq!(hdd_first.description(), "Brand A Computer with an external hard drive and a 23 inch monitor");
        assert_eq!(monitor_first.description(), "Brand A Computer and a 23 inch monitor with an external hard drive");

        assert_eq!(hdd_first.price(), 1780);
        assert_eq!(monitor_first.price(), 1780);
    }

    #[test]
    fn test_repeated_layers() {
        let computer = Monitor::wrap(Monitor::wrap(Computer::from_brand(Brand::B)));

        assert_eq!(computer.description(), "Brand B Computer and a 23 inch monitor and a 23 inch monitor");
        assert_eq!(computer.price(), 2200 + 2 * Monitor::PRICE);
    }

    #[test]
    fn test_queries_are_idempotent() {
        let computer = ExternalHdd::wrap(Computer::from_brand(Brand::A));

        let description = computer.description();
        let price = computer.price();
        for _ in 0..3 {
            assert_eq!(computer.description(), description);
            assert_eq!(computer.price(), price);
        }
    }
}
