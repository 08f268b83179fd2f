/*!
# Vertex Capability Contract

The search in [`crate::search`] never touches a graph store directly. Instead it
operates through [`PathGraph`], a minimal capability trait that any adjacency
representation can implement. Vertices are referenced by plain [`Node`] indices
into the implementing store, so predecessor back-references form a tree of
indices rather than an ownership cycle.

The contract deliberately fuses "is this edge's length satisfied yet" with the
act of consuming one unit of it ([`PathGraph::decrement_edge`]): the search
never reads a raw length value, so a store may keep lengths in any internal
form as long as an edge of length `n` reports exhaustion on the `n`-th call.
*/

use crate::node::*;

/// Capability contract every searchable graph store must satisfy.
///
/// All vertex arguments are indices into the implementing store. The search
/// only calls these operations with indices it was handed (the start node and
/// values returned by [`PathGraph::edge_target`]).
///
/// # Contract
/// - [`PathGraph::edge_count`] is stable for the duration of one search.
/// - Remaining edge lengths only ever decrease.
/// - A predecessor is assigned at most once per vertex per search; a second
///   assignment is a caller error (the search itself never performs one).
/// - The flags [`PathGraph::is_origin`] / [`PathGraph::is_destination`] are
///   never mutated while a search runs.
pub trait PathGraph {
    /// Number of edges pointing away from `u`
    fn edge_count(&self, u: Node) -> usize;

    /// The vertex at the end of the `i`-th edge out of `u`.
    ///
    /// # Panics
    /// Panics if `i >= self.edge_count(u)`.
    fn edge_target(&self, u: Node, i: usize) -> Node;

    /// Consumes one unit of the `i`-th edge's remaining length.
    ///
    /// Returns *true* if the remaining length was already at its minimum
    /// before this call, i.e. the edge is exhausted and its target is
    /// reachable at the current layer's distance. Returns *false* if more
    /// decrements are needed first.
    ///
    /// # Panics
    /// Panics if `i >= self.edge_count(u)`.
    fn decrement_edge(&mut self, u: Node, i: usize) -> bool;

    /// The predecessor assigned to `u`, or `None` if `u` has not been settled
    fn predecessor(&self, u: Node) -> Option<Node>;

    /// Returns *true* if a predecessor has been assigned to `u`
    fn has_predecessor(&self, u: Node) -> bool {
        self.predecessor(u).is_some()
    }

    /// Assigns (`Some`) or clears (`None`) the predecessor of `u`
    fn set_predecessor(&mut self, u: Node, pred: Option<Node>);

    /// Returns *true* if `u` is the destination of the search
    fn is_destination(&self, u: Node) -> bool;

    /// Returns *true* if `u` is the origin of the search
    fn is_origin(&self, u: Node) -> bool;
}
