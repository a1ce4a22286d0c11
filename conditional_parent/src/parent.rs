use crate::{logging::log_violation, ContractViolation, Identity, Payload, Wrap};
use either_of::Either;
use std::fmt;

/// Wraps a payload in a parent only when a condition holds.
///
/// This is a stateless component: it is constructed fresh on every render pass, rendered once,
/// and discarded. Rendering consumes it, so each transform runs at most once and the payload is
/// moved into whichever transform is chosen.
///
/// | `condition` | fallback given | output                      |
/// |-------------|----------------|-----------------------------|
/// | `true`      | either         | `Either::Left(parent(payload))`    |
/// | `false`     | yes            | `Either::Right(fallback(payload))` |
/// | `false`     | no             | `Either::Right(payload)`           |
///
/// Without a fallback, the fallback transform is [`Identity`], so all three cases go through the
/// same dispatch.
///
/// ```rust
/// use conditional_parent::ConditionalParent;
///
/// let label = |text: &'static str| format!("<label>{text}</label>");
/// let badge = |text: &'static str| format!("<span class=\"badge\">{text}</span>");
///
/// let view = ConditionalParent::new(false, "new", label).fallback(badge).render_node();
/// assert_eq!(view, "<span class=\"badge\">new</span>");
/// ```
#[derive(Clone, Copy)]
#[must_use = "a ConditionalParent does nothing until it is rendered"]
pub struct ConditionalParent<T, P, F = Identity> {
    condition: bool,
    payload: T,
    parent: P,
    fallback: F,
}

impl<T, P> ConditionalParent<T, P> {
    /// Creates a component that wraps `payload` with `parent` when `condition` is `true`, and
    /// passes it through unchanged otherwise.
    pub fn new(condition: bool, payload: T, parent: P) -> Self {
        Self {
            condition,
            payload,
            parent,
            fallback: Identity,
        }
    }
}

impl<T, P, F> ConditionalParent<T, P, F> {
    /// Replaces the transform applied when the condition is `false`.
    pub fn fallback<G>(self, fallback: G) -> ConditionalParent<T, P, G> {
        ConditionalParent {
            condition: self.condition,
            payload: self.payload,
            parent: self.parent,
            fallback,
        }
    }

    /// The condition this component was built with.
    pub fn condition(&self) -> bool {
        self.condition
    }

    /// The payload this component will pass to one of its transforms.
    pub fn payload(&self) -> &T {
        &self.payload
    }

    /// Runs exactly one of the transforms.
    ///
    /// `Left` holds the output of `parent`, `Right` the output of the fallback (or the payload
    /// itself if no fallback was given).
    #[cfg_attr(
        feature = "tracing",
        tracing::instrument(
            level = "trace",
            skip_all,
            fields(condition = self.condition)
        )
    )]
    pub fn render(self) -> Either<<P as Wrap<T>>::Output, <F as Wrap<T>>::Output>
    where
        P: Wrap<T>,
        F: Wrap<T>,
    {
        if self.condition {
            Either::Left(self.parent.wrap(self.payload))
        } else {
            Either::Right(self.fallback.wrap(self.payload))
        }
    }

    /// Renders, collapsing the output when both branches produce the same node type.
    ///
    /// With no fallback this requires the payload to already be that node type, so passing a
    /// [`Payload`] through unchanged is rejected at compile time. Use
    /// [`try_render`](ConditionalParent::try_render) for that case.
    pub fn render_node<N>(self) -> N
    where
        P: Wrap<T, Output = N>,
        F: Wrap<T, Output = N>,
    {
        match self.render() {
            Either::Left(node) | Either::Right(node) => node,
        }
    }
}

impl<N, P> ConditionalParent<Payload<N>, P, Identity>
where
    P: Wrap<Payload<N>, Output = N>,
{
    /// Renders a [`Payload`] that has no fallback.
    ///
    /// When the condition is `false` the payload is passed through, so it must hold exactly one
    /// node; anything else is reported as a [`ContractViolation`].
    #[track_caller]
    #[cfg_attr(
        feature = "tracing",
        tracing::instrument(
            level = "trace",
            skip_all,
            fields(condition = self.condition)
        )
    )]
    pub fn try_render(self) -> Result<N, ContractViolation> {
        match self.render() {
            Either::Left(node) => Ok(node),
            Either::Right(payload) => match payload.into_single() {
                Ok(node) => Ok(node),
                Err(violation) => {
                    log_violation(&violation);
                    Err(violation)
                }
            },
        }
    }
}

impl<T: fmt::Debug, P, F> fmt::Debug for ConditionalParent<T, P, F> {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.debug_struct("ConditionalParent")
            .field("condition", &self.condition)
            .field("payload", &self.payload)
            .finish_non_exhaustive()
    }
}

/// Renders a [`ConditionalParent`] in one call.
///
/// Pass [`Identity`] as `fallback` to leave the payload unchanged when `condition` is `false`.
///
/// ```rust
/// use conditional_parent::{conditional_parent, Either, Identity};
///
/// let out = conditional_parent(false, 7, |n: i32| n.to_string(), Identity);
/// assert_eq!(out, Either::Right(7));
/// ```
pub fn conditional_parent<T, P, F>(
    condition: bool,
    payload: T,
    parent: P,
    fallback: F,
) -> Either<P::Output, F::Output>
where
    P: Wrap<T>,
    F: Wrap<T>,
{
    ConditionalParent::new(condition, payload, parent)
        .fallback(fallback)
        .render()
}

#[cfg(test)]
mod tests {
    use super::ConditionalParent;
    use crate::{ContractViolation, Either, Payload};
    use std::cell::Cell;

    #[test]
    fn only_the_chosen_transform_runs() {
        let parent_calls = Cell::new(0);
        let fallback_calls = Cell::new(0);

        let render = |condition| {
            ConditionalParent::new(condition, 1, |n: i32| {
                parent_calls.set(parent_calls.get() + 1);
                n + 1
            })
            .fallback(|n: i32| {
                fallback_calls.set(fallback_calls.get() + 1);
                n - 1
            })
            .render_node()
        };

        assert_eq!(render(true), 2);
        assert_eq!((parent_calls.get(), fallback_calls.get()), (1, 0));
        assert_eq!(render(false), 0);
        assert_eq!((parent_calls.get(), fallback_calls.get()), (1, 1));
    }

    #[test]
    fn fallback_replaces_identity() {
        let parent = ConditionalParent::new(false, "x", |s: &str| s.len());
        assert_eq!(parent.render(), Either::Right("x"));

        let parent = ConditionalParent::new(false, "x", |s: &str| s.len())
            .fallback(|s: &str| s.repeat(2));
        assert_eq!(parent.render(), Either::Right("xx".to_string()));
    }

    #[test]
    fn accessors() {
        let parent = ConditionalParent::new(true, 5u8, |n: u8| n);
        assert!(parent.condition());
        assert_eq!(*parent.payload(), 5);
    }

    #[test]
    fn debug_shows_condition_and_payload() {
        let parent = ConditionalParent::new(true, "x", |s: &'static str| s);
        let debug = format!("{parent:?}");
        assert!(debug.contains("condition: true"), "{debug}");
        assert!(debug.contains("payload: \"x\""), "{debug}");
    }

    #[test]
    fn try_render_wraps_sequences_when_true() {
        let children = Payload::many(["a".to_string(), "b".to_string()]);
        let joined = ConditionalParent::new(true, children, |p: Payload<String>| {
            p.into_vec().concat()
        })
        .try_render();
        assert_eq!(joined, Ok("ab".to_string()));
    }

    #[test]
    fn try_render_rejects_sequences_when_false() {
        let joined = ConditionalParent::new(false, Payload::many([]), |p: Payload<String>| {
            p.into_vec().concat()
        })
        .try_render();
        assert_eq!(joined, Err(ContractViolation::NotSingle { len: 0 }));
    }
}
