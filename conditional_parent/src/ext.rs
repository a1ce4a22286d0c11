use crate::{ConditionalParent, Wrap};
use either_of::Either;

/// Method-call form of [`ConditionalParent`], for call sites that already hold the payload.
///
/// ```rust
/// use conditional_parent::{Either, WrapIf};
///
/// let strong = |text: &'static str| format!("<strong>{text}</strong>");
///
/// assert_eq!("hi".wrap_if(true, strong), Either::Left("<strong>hi</strong>".to_string()));
/// assert_eq!("hi".wrap_if(false, strong), Either::Right("hi"));
/// ```
pub trait WrapIf: Sized {
    /// Wraps `self` with `parent` if `condition` is `true`, and leaves it unchanged otherwise.
    fn wrap_if<P>(self, condition: bool, parent: P) -> Either<P::Output, Self>
    where
        P: Wrap<Self>,
    {
        ConditionalParent::new(condition, self, parent).render()
    }

    /// Wraps `self` with `parent` if `condition` is `true`, and with `fallback` otherwise.
    fn wrap_if_else<P, F>(
        self,
        condition: bool,
        parent: P,
        fallback: F,
    ) -> Either<P::Output, F::Output>
    where
        P: Wrap<Self>,
        F: Wrap<Self>,
    {
        ConditionalParent::new(condition, self, parent)
            .fallback(fallback)
            .render()
    }
}

impl<T> WrapIf for T {}

#[test]
fn wrap_if_matches_component() {
    let double = |n: i32| n * 2;
    for condition in [true, false] {
        assert_eq!(
            3i32.wrap_if(condition, double),
            ConditionalParent::new(condition, 3, double).render()
        );
        assert_eq!(
            3i32.wrap_if_else(condition, double, i32::wrapping_neg),
            ConditionalParent::new(condition, 3, double)
                .fallback(i32::wrapping_neg)
                .render()
        );
    }
}
