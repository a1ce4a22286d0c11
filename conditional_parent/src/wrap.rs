/// A transform from a payload to a rendered node.
///
/// Implemented for every [`FnOnce`] taking the payload, so closures and function items can be
/// used directly, and for [`Identity`], the transform used when no fallback is given.
pub trait Wrap<T> {
    /// The node produced.
    type Output;

    /// Consumes the transform and the payload, producing a node.
    fn wrap(self, payload: T) -> Self::Output;
}

impl<T, F, O> Wrap<T> for F
where
    F: FnOnce(T) -> O,
{
    type Output = O;

    #[inline(always)]
    fn wrap(self, payload: T) -> Self::Output {
        self(payload)
    }
}

/// Returns the payload unchanged.
#[derive(Debug, Default, Clone, Copy, PartialEq, Eq, Hash)]
pub struct Identity;

impl<T> Wrap<T> for Identity {
    type Output = T;

    #[inline(always)]
    fn wrap(self, payload: T) -> Self::Output {
        payload
    }
}
