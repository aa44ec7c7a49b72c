/// The capability set shared by base components and every decorator wrapped around them.
///
/// Both operations are pure: calling them any number of times on the same value yields the same
/// result.
#[cfg_attr(test, mockall::automock)]
pub trait Component {
    /// the human readable description, innermost part first
    fn description(&self) -> String;

    /// the total price of this component including everything it wraps
    fn price(&self) -> u64;
}

impl<C: Component + ?Sized> Component for &C {
    #[inline]
    fn description(&self) -> String {
        (**self).description()
    }

    #[inline]
    fn price(&self) -> u64 {
        (**self).price()
    }
}

impl<C: Component + ?Sized> Component for Box<C> {
    #[inline]
    fn description(&self) -> String {
        (**self).description()
    }

    #[inline]
    fn price(&self) -> u64 {
        (**self).price()
    }
}

#[cfg(test)]
mod tests {
    use super::{Component, MockComponent};

    fn assert_is_component<C: Component>(_component: &C) {
        // no op
    }

    #[test]
    fn test_references_and_boxes_are_components() {
        let mut mock = MockComponent::new();
        mock.expect_description().return_const("mock".to_string());
        mock.expect_price().return_const(7_u64);

        assert_is_component(&&mock);

        let boxed: Box<dyn Component> = Box::new(mock);
        assert_is_component(&boxed);
        assert_eq!(boxed.description(), "mock");
        assert_eq!(boxed.price(), 7);
    }
}
