use crate::decorator::Decorator;

/// Leaves its input untouched; the neutral element for [`DecoratorComposer`](super::DecoratorComposer).
#[derive(Default, Clone, Copy, Debug)]
pub struct IdentityDecorator;

impl<In> Decorator<In> for IdentityDecorator {
    type Out = In;

    #[inline(always)]
    fn decorate(&self, raw: In) -> Self::Out {
        raw
    }
}
