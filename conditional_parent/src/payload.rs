use crate::ContractViolation;
use std::slice;

/// A subtree that is either one node or an ordered sequence of nodes.
///
/// This is the payload type to use when a call site may hand a
/// [`ConditionalParent`](crate::ConditionalParent) either a single child or a list of children.
/// Payloads that are always a single node don't need it: any type can be a payload.
#[derive(Debug, Clone, PartialEq, Eq, Hash)]
pub enum Payload<N> {
    /// Exactly one node.
    Single(N),
    /// An ordered sequence of nodes, possibly empty.
    Many(Vec<N>),
}

impl<N> Payload<N> {
    /// Wraps a single node.
    pub fn single(node: N) -> Self {
        Payload::Single(node)
    }

    /// Collects a sequence of nodes, preserving their order.
    pub fn many(nodes: impl IntoIterator<Item = N>) -> Self {
        Payload::Many(nodes.into_iter().collect())
    }

    /// Whether this is [`Payload::Single`].
    pub fn is_single(&self) -> bool {
        matches!(self, Payload::Single(_))
    }

    /// Whether this is [`Payload::Many`], regardless of its length.
    pub fn is_many(&self) -> bool {
        matches!(self, Payload::Many(_))
    }

    /// The number of nodes held. A [`Payload::Single`] always holds one.
    pub fn len(&self) -> usize {
        match self {
            Payload::Single(_) => 1,
            Payload::Many(nodes) => nodes.len(),
        }
    }

    /// Whether no nodes are held. Only an empty [`Payload::Many`] is empty.
    pub fn is_empty(&self) -> bool {
        self.len() == 0
    }

    /// Views the nodes as a slice.
    pub fn as_slice(&self) -> &[N] {
        match self {
            Payload::Single(node) => slice::from_ref(node),
            Payload::Many(nodes) => nodes,
        }
    }

    /// Iterates over the nodes in order.
    pub fn iter(&self) -> slice::Iter<'_, N> {
        self.as_slice().iter()
    }

    /// Applies `f` to every node, keeping the shape of the payload.
    pub fn map<M>(self, mut f: impl FnMut(N) -> M) -> Payload<M> {
        match self {
            Payload::Single(node) => Payload::Single(f(node)),
            Payload::Many(nodes) => Payload::Many(nodes.into_iter().map(f).collect()),
        }
    }

    /// Flattens the payload into a list of nodes.
    pub fn into_vec(self) -> Vec<N> {
        match self {
            Payload::Single(node) => vec![node],
            Payload::Many(nodes) => nodes,
        }
    }

    /// Reduces the payload to one node.
    ///
    /// A [`Payload::Many`] holding exactly one node is accepted. Any other sequence is a
    /// [`ContractViolation::NotSingle`].
    pub fn into_single(self) -> Result<N, ContractViolation> {
        match self {
            Payload::Single(node) => Ok(node),
            Payload::Many(nodes) => {
                let len = nodes.len();
                let mut nodes = nodes.into_iter();
                match (nodes.next(), nodes.next()) {
                    (Some(node), None) => Ok(node),
                    _ => Err(ContractViolation::NotSingle { len }),
                }
            }
        }
    }
}

impl<N> From<Vec<N>> for Payload<N> {
    fn from(nodes: Vec<N>) -> Self {
        Payload::Many(nodes)
    }
}

impl<N> FromIterator<N> for Payload<N> {
    fn from_iter<I: IntoIterator<Item = N>>(iter: I) -> Self {
        Payload::many(iter)
    }
}

impl<N> IntoIterator for Payload<N> {
    type Item = N;
    type IntoIter = std::vec::IntoIter<N>;

    fn into_iter(self) -> Self::IntoIter {
        self.into_vec().into_iter()
    }
}

impl<'a, N> IntoIterator for &'a Payload<N> {
    type Item = &'a N;
    type IntoIter = slice::Iter<'a, N>;

    fn into_iter(self) -> Self::IntoIter {
        self.iter()
    }
}

#[cfg(test)]
mod tests {
    use super::Payload;
    use crate::ContractViolation;

    #[test]
    fn single_counts_as_one() {
        let payload = Payload::single('x');
        assert!(payload.is_single());
        assert!(!payload.is_many());
        assert_eq!(payload.len(), 1);
        assert!(!payload.is_empty());
        assert_eq!(payload.as_slice(), &['x']);
    }

    #[test]
    fn many_keeps_order() {
        let payload: Payload<_> = (1..=3).collect();
        assert!(payload.is_many());
        assert_eq!(payload.iter().copied().collect::<Vec<_>>(), [1, 2, 3]);
        assert_eq!(payload.map(|n| n * 10).into_vec(), [10, 20, 30]);
    }

    #[test]
    fn empty_sequence() {
        let payload = Payload::<u8>::many([]);
        assert!(payload.is_empty());
        assert_eq!(
            payload.into_single(),
            Err(ContractViolation::NotSingle { len: 0 })
        );
    }

    #[test]
    fn into_single() {
        assert_eq!(Payload::single("x").into_single(), Ok("x"));
        assert_eq!(Payload::from(vec!["x"]).into_single(), Ok("x"));
        assert_eq!(
            Payload::many(["x", "y"]).into_single(),
            Err(ContractViolation::NotSingle { len: 2 })
        );
    }

    #[test]
    fn map_keeps_shape() {
        assert_eq!(Payload::single(2).map(|n| n + 1), Payload::Single(3));
        assert_eq!(Payload::many([2]).map(|n| n + 1), Payload::Many(vec![3]));
    }

    #[test]
    fn borrowed_iteration() {
        let payload = Payload::many(["a", "b"]);
        let mut seen = Vec::new();
        for node in &payload {
            seen.push(*node);
        }
        assert_eq!(seen, ["a", "b"]);
        assert_eq!(payload.into_iter().rev().collect::<Vec<_>>(), ["b", "a"]);
    }
}
