use thiserror::Error;

/// Misuse of a [`ConditionalParent`](crate::ConditionalParent) that can only be detected while
/// rendering.
///
/// These are programmer errors: nothing in this crate catches or retries them.
#[derive(Error, Debug, Clone, PartialEq, Eq)]
pub enum ContractViolation {
    /// The pass-through branch needed exactly one node, but the payload was a sequence of some
    /// other length.
    #[error(
        "expected a single node to pass through unwrapped, but the payload \
         holds {len} nodes; supply a fallback transform to handle sequences"
    )]
    NotSingle {
        /// Number of nodes in the payload.
        len: usize,
    },
}
