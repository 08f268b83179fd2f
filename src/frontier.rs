/*!
# Frontier Queue

A [`Frontier`] holds all vertices discovered at one distance layer of the
search. It is append-only and forward-iterable in insertion order; nothing is
ever removed and nothing is deduplicated. Two frontiers exist per running
search: the layer being drained and the layer being built, swapping roles each
iteration.

We back it by a contiguous `Vec` rather than a linked structure: pushes are
amortized O(1), iteration is a cache-friendly slice walk, and the FIFO order
within a layer is preserved.
*/

use crate::node::Node;

/// Append-only sequence of vertices making up one distance layer.
///
/// Membership does not imply settledness: a vertex may appear because one of
/// its incoming edges is not yet exhausted, and the same vertex may appear
/// more than once. Both are expected and harmless.
///
/// # Example
/// ```
/// use upaths::prelude::*;
///
/// let mut layer = Frontier::new();
/// layer.push(3);
/// layer.push(1);
/// layer.push(3);
///
/// assert_eq!(layer.iter().collect::<Vec<Node>>(), vec![3, 1, 3]);
/// ```
#[derive(Debug, Clone, Default)]
pub struct Frontier {
    nodes: Vec<Node>,
}

impl Frontier {
    /// Creates an empty frontier
    pub fn new() -> Self {
        Self::default()
    }

    /// Creates an empty frontier with room for `cap` vertices
    pub fn with_capacity(cap: usize) -> Self {
        Self {
            nodes: Vec::with_capacity(cap),
        }
    }

    /// Appends a vertex to the end of the frontier
    pub fn push(&mut self, u: Node) {
        self.nodes.push(u);
    }

    /// Iterates over the frontier in insertion order
    pub fn iter(&self) -> impl Iterator<Item = Node> + '_ {
        self.nodes.iter().copied()
    }

    /// Number of (not necessarily distinct) vertices in the frontier
    pub fn len(&self) -> usize {
        self.nodes.len()
    }

    /// Returns *true* if no vertex was admitted to this frontier
    pub fn is_empty(&self) -> bool {
        self.nodes.is_empty()
    }

    /// Empties the frontier but keeps its allocation for the next layer
    pub fn clear(&mut self) {
        self.nodes.clear();
    }
}

impl<'a> IntoIterator for &'a Frontier {
    type Item = Node;
    type IntoIter = std::iter::Copied<std::slice::Iter<'a, Node>>;

    fn into_iter(self) -> Self::IntoIter {
        self.nodes.iter().copied()
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use itertools::Itertools;

    #[test]
    fn insertion_order() {
        let mut frontier = Frontier::new();
        assert!(frontier.is_empty());

        for u in [5, 2, 9, 2] {
            frontier.push(u);
        }

        assert_eq!(frontier.len(), 4);
        assert_eq!(frontier.iter().collect_vec(), vec![5, 2, 9, 2]);
        assert_eq!((&frontier).into_iter().collect_vec(), vec![5, 2, 9, 2]);
    }

    #[test]
    fn clear_keeps_nothing() {
        let mut frontier = Frontier::with_capacity(16);
        frontier.push(0);
        frontier.push(1);
        frontier.clear();

        assert!(frontier.is_empty());
        assert_eq!(frontier.iter().count(), 0);
    }
}
