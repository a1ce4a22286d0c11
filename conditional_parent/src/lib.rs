//! Conditionally wrap a piece of a view tree in a parent, without breaking the
//! declaration into an imperative branch.
//!
//! A [`ConditionalParent`] holds a boolean condition, a payload (the subtree), and one or two
//! transforms. Rendering it produces exactly one output:
//! 1. **Condition true**: the payload passed through the `parent` transform.
//! 2. **Condition false, fallback given**: the payload passed through the `fallback` transform.
//! 3. **Condition false, no fallback**: the payload itself, unchanged.
//!
//! ```rust
//! use conditional_parent::{ConditionalParent, Either};
//!
//! #[derive(Debug, Clone, PartialEq)]
//! enum Node {
//!     Text(&'static str),
//!     Link(Box<Node>),
//! }
//!
//! let linked = ConditionalParent::new(true, Node::Text("docs"), |n: Node| Node::Link(Box::new(n)))
//!     .render_node();
//! assert_eq!(linked, Node::Link(Box::new(Node::Text("docs"))));
//!
//! let plain = ConditionalParent::new(false, Node::Text("docs"), |n: Node| Node::Link(Box::new(n)))
//!     .render();
//! assert_eq!(plain, Either::Right(Node::Text("docs")));
//! ```
//!
//! The component is renderer-agnostic. When the two branches produce different types, the output
//! is an [`Either`], which Leptos' `tachys` renderer already knows how to mount, so the result can
//! be placed straight into a view.
//!
//! ## Payloads with more than one node
//! A subtree that may be one node or a list of nodes is modeled by [`Payload`]. Transforms receive
//! the whole [`Payload`]; only the pass-through branch needs a single node, and
//! [`ConditionalParent::try_render`] reports a [`ContractViolation`] when it doesn't get one.
//!
//! ```rust
//! use conditional_parent::{ConditionalParent, ContractViolation, Payload};
//!
//! let column = |children: Payload<String>| children.into_vec().join("\n");
//! let lines = || Payload::many(["a".to_string(), "b".to_string()]);
//!
//! let rendered = ConditionalParent::new(true, lines(), column).try_render();
//! assert_eq!(rendered, Ok("a\nb".to_string()));
//!
//! let rendered = ConditionalParent::new(false, lines(), column).try_render();
//! assert_eq!(rendered, Err(ContractViolation::NotSingle { len: 2 }));
//! ```

#![forbid(unsafe_code)]
#![deny(missing_docs)]

mod error;
mod ext;
mod logging;
mod parent;
mod payload;
mod wrap;

pub use either_of::Either;
pub use error::ContractViolation;
pub use ext::WrapIf;
pub use parent::{conditional_parent, ConditionalParent};
pub use payload::Payload;
pub use wrap::{Identity, Wrap};

/// Reexports the component, its payload type, and the extension trait.
pub mod prelude {
    pub use crate::{
        ConditionalParent, ContractViolation, Either, Payload, WrapIf,
    };
}

#[cfg(doctest)]
#[doc = include_str!("../../README.md")]
struct ReadmeDoctests;
