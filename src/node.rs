/*!
# Node & Length Representation

We choose `Node = u32` as almost all use-cases involve less than `2^32` vertices.
This allows us to (1) save space by not using `usize` or `u64` and (2) use plain
index values as vertex references: the search only ever stores and compares them,
ownership of the vertices stays with the graph store.

Edge lengths default to `u64` which is enough to measure interplanetary
distances in inches without overflow.
*/

use std::num::NonZero;
use stream_bitset::bitset::BitSetImpl;

/// Nodes can be any unsigned integer from `0` to `Node::MAX - 1`
pub type Node = u32;

/// Node-Value that is considered invalid
pub const INVALID_NODE: Node = Node::MAX;

/// There can be at most `2^32 - 1` nodes in a graph!
pub type NumNodes = Node;

/// BitSet for Nodes
pub type NodeBitSet = BitSetImpl<Node>;

/// Default scalar for edge lengths and remaining-length counters
pub type EdgeLength = u64;

/// As `Option<Node>` uses additional bytes for padding, it can be inefficient
/// since we store one predecessor slot per vertex. This instead uses the
/// `NonZero`-Wrapper to assign a constant value (often)
#[derive(Debug, Clone, Copy, PartialEq, Eq, PartialOrd, Ord, Hash)]
#[repr(transparent)]
pub struct OptionalNodeImpl<const N: Node>(NonZero<Node>);

/// Often, `INVALID_NODE` is safe to pick as the `None`-Value
pub type OptionalNode = OptionalNodeImpl<INVALID_NODE>;

impl<const N: Node> OptionalNodeImpl<N> {
    /// Returns `Some(OptionalNodeImpl)` if `n != N` and `None` otherwise
    pub const fn new(n: Node) -> Option<Self> {
        match NonZero::new(n ^ N) {
            Some(inner) => Some(OptionalNodeImpl(inner)),
            None => None,
        }
    }

    /// Gets the underlying Node-Value
    pub const fn get(&self) -> Node {
        self.0.get() ^ N
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn optional_node_roundtrip() {
        assert!(OptionalNode::new(INVALID_NODE).is_none());
        for n in [0, 1, 42, INVALID_NODE - 1] {
            assert_eq!(OptionalNode::new(n).unwrap().get(), n);
        }
        assert_eq!(
            std::mem::size_of::<Option<OptionalNode>>(),
            std::mem::size_of::<Node>()
        );
    }
}
