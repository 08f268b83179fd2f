/*!
# Graph Stores

Two provided implementations of the [`PathGraph`] capability contract:

- [`AdjGraph`]: an arena-backed adjacency-list store that keeps the
  remaining-length counters and predecessor slots inline with the vertices.
  This is the fastest option when one search runs at a time; rerunning
  requires [`AdjGraph::reset_search`].
- [`ShadowSearch`]: a per-search view over a shared `&AdjGraph` that keeps all
  mutable search state in side tables keyed by `(vertex, edge index)`. Several
  logically independent searches can run over the same static topology without
  interfering, at the cost of hash lookups in the hot loop.

The search itself is store-agnostic; any other representation (matrix,
procedurally generated, ...) only needs to implement [`PathGraph`].
*/

use fxhash::FxHashMap;
use num::{PrimInt, Unsigned};
use smallvec::SmallVec;

use crate::{node::*, ops::PathGraph};

/// An outgoing edge: immutable target and length, plus the remaining-length
/// counter consumed by the search
#[derive(Debug, Clone, Copy)]
struct OutEdge<W> {
    target: Node,
    length: W,
    remaining: W,
}

#[derive(Debug, Clone)]
struct VertexData<W> {
    edges: SmallVec<[OutEdge<W>; 4]>,
    predecessor: Option<OptionalNode>,
    is_origin: bool,
    is_destination: bool,
}

impl<W> Default for VertexData<W> {
    fn default() -> Self {
        Self {
            edges: SmallVec::new(),
            predecessor: None,
            is_origin: false,
            is_destination: false,
        }
    }
}

/// Adjacency-list store over vertices `0..n` with integer edge lengths.
///
/// The vertex arena owns all vertices; predecessor back-references are plain
/// indices into it, so the predecessor chain forms a tree without ownership
/// ambiguity. The length scalar `W` can be any unsigned primitive; an edge of
/// length `0` behaves exactly like one of length `1` (a hop is never free).
///
/// # Example
/// ```
/// use upaths::prelude::*;
///
/// let mut g: AdjGraph = AdjGraph::new(2);
/// g.add_edge(0, 1, 4);
/// g.set_origin(0);
/// g.set_destination(1);
///
/// assert_eq!(g.find_path(0), Some(4));
/// ```
#[derive(Debug, Clone)]
pub struct AdjGraph<W = EdgeLength>
where
    W: PrimInt + Unsigned,
{
    vertices: Vec<VertexData<W>>,
    origin: Option<Node>,
    destination: Option<Node>,
}

impl<W> AdjGraph<W>
where
    W: PrimInt + Unsigned,
{
    /// Creates a graph with `n` vertices and no edges
    pub fn new(n: NumNodes) -> Self {
        Self {
            vertices: vec![VertexData::default(); n as usize],
            origin: None,
            destination: None,
        }
    }

    /// Creates a graph with `n` vertices from `(source, target, length)` triples.
    ///
    /// # Example
    /// ```
    /// use upaths::prelude::*;
    ///
    /// let g: AdjGraph = AdjGraph::from_edges(3, [(0, 1, 2), (1, 2, 5)]);
    /// assert_eq!(g.number_of_edges(), 2);
    /// ```
    pub fn from_edges<I>(n: NumNodes, edges: I) -> Self
    where
        I: IntoIterator<Item = (Node, Node, W)>,
    {
        let mut graph = Self::new(n);
        for (u, v, w) in edges {
            graph.add_edge(u, v, w);
        }
        graph
    }

    /// Appends an edge from `u` to `v` with the given length.
    ///
    /// # Panics
    /// Panics if `u` or `v` is not a vertex of the graph.
    pub fn add_edge(&mut self, u: Node, v: Node, length: W) {
        assert!((v as usize) < self.vertices.len());
        self.vertices[u as usize].edges.push(OutEdge {
            target: v,
            length,
            remaining: length,
        });
    }

    /// Returns the number of vertices
    pub fn number_of_nodes(&self) -> NumNodes {
        self.vertices.len() as NumNodes
    }

    /// Returns the number of vertices as usize
    pub fn len(&self) -> usize {
        self.vertices.len()
    }

    /// Returns *true* if the graph has no vertices
    pub fn is_empty(&self) -> bool {
        self.vertices.is_empty()
    }

    /// Returns the total number of edges
    pub fn number_of_edges(&self) -> usize {
        self.vertices.iter().map(|v| v.edges.len()).sum()
    }

    /// Returns an iterator over all vertices
    pub fn vertices(&self) -> impl Iterator<Item = Node> + '_ {
        0..self.number_of_nodes()
    }

    /// Returns the number of edges pointing away from `u`
    pub fn degree_of(&self, u: Node) -> NumNodes {
        self.vertices[u as usize].edges.len() as NumNodes
    }

    /// Returns the initial (immutable) length of the `i`-th edge out of `u`
    pub fn edge_length(&self, u: Node, i: usize) -> W {
        self.vertices[u as usize].edges[i].length
    }

    /// Flags `u` as the origin, unflagging a previously chosen one
    pub fn set_origin(&mut self, u: Node) {
        if let Some(old) = self.origin {
            self.vertices[old as usize].is_origin = false;
        }
        self.vertices[u as usize].is_origin = true;
        self.origin = Some(u);
    }

    /// Flags `u` as the destination, unflagging a previously chosen one
    pub fn set_destination(&mut self, u: Node) {
        if let Some(old) = self.destination {
            self.vertices[old as usize].is_destination = false;
        }
        self.vertices[u as usize].is_destination = true;
        self.destination = Some(u);
    }

    /// The vertex currently flagged as origin, if any
    pub fn origin(&self) -> Option<Node> {
        self.origin
    }

    /// The vertex currently flagged as destination, if any
    pub fn destination(&self) -> Option<Node> {
        self.destination
    }

    /// Restores all remaining-length counters and predecessor slots to their
    /// initial state so that a rerun reproduces the identical result.
    /// Adjacency and the origin/destination flags are untouched.
    pub fn reset_search(&mut self) {
        for vertex in &mut self.vertices {
            vertex.predecessor = None;
            for edge in &mut vertex.edges {
                edge.remaining = edge.length;
            }
        }
    }

    /// Returns the set of vertices that currently carry a predecessor
    pub fn settled_nodes(&self) -> NodeBitSet {
        let mut settled = NodeBitSet::new(self.number_of_nodes());
        for (u, vertex) in self.vertices.iter().enumerate() {
            if vertex.predecessor.is_some() {
                settled.set_bit(u as Node);
            }
        }
        settled
    }
}

impl<W> PathGraph for AdjGraph<W>
where
    W: PrimInt + Unsigned,
{
    fn edge_count(&self, u: Node) -> usize {
        self.vertices[u as usize].edges.len()
    }

    fn edge_target(&self, u: Node, i: usize) -> Node {
        self.vertices[u as usize].edges[i].target
    }

    fn decrement_edge(&mut self, u: Node, i: usize) -> bool {
        let edge = &mut self.vertices[u as usize].edges[i];
        if edge.remaining > W::one() {
            edge.remaining = edge.remaining - W::one();
            false
        } else {
            true
        }
    }

    fn predecessor(&self, u: Node) -> Option<Node> {
        self.vertices[u as usize].predecessor.map(|p| p.get())
    }

    fn set_predecessor(&mut self, u: Node, pred: Option<Node>) {
        self.vertices[u as usize].predecessor = pred.and_then(OptionalNode::new);
    }

    fn is_destination(&self, u: Node) -> bool {
        self.vertices[u as usize].is_destination
    }

    fn is_origin(&self, u: Node) -> bool {
        self.vertices[u as usize].is_origin
    }
}

/// A per-search view over a shared [`AdjGraph`] topology.
///
/// All mutable search state (remaining-length counters, predecessors) lives in
/// side tables inside the view, so any number of `ShadowSearch` instances can
/// search the same `&AdjGraph` at the same time without corrupting each other.
/// Origin and destination may be overridden per view, allowing endpoint pairs
/// that differ from the flags stored in the underlying graph.
///
/// # Example
/// ```
/// use upaths::prelude::*;
///
/// let g: AdjGraph = AdjGraph::from_edges(3, [(0, 1, 2), (1, 2, 2)]);
///
/// let mut near = ShadowSearch::new(&g).origin(0).destination(1);
/// let mut far = ShadowSearch::new(&g).origin(0).destination(2);
///
/// assert_eq!(near.find_path(0), Some(2));
/// assert_eq!(far.find_path(0), Some(4));
/// ```
pub struct ShadowSearch<'a, W = EdgeLength>
where
    W: PrimInt + Unsigned,
{
    graph: &'a AdjGraph<W>,
    remaining: FxHashMap<(Node, usize), W>,
    predecessors: FxHashMap<Node, Node>,
    origin: Option<Node>,
    destination: Option<Node>,
}

impl<'a, W> ShadowSearch<'a, W>
where
    W: PrimInt + Unsigned,
{
    /// Creates a fresh search view; endpoints default to the graph's flags
    pub fn new(graph: &'a AdjGraph<W>) -> Self {
        Self {
            graph,
            remaining: FxHashMap::default(),
            predecessors: FxHashMap::default(),
            origin: None,
            destination: None,
        }
    }

    /// Overrides the origin for this view only
    pub fn origin(mut self, u: Node) -> Self {
        self.origin = Some(u);
        self
    }

    /// Overrides the destination for this view only
    pub fn destination(mut self, u: Node) -> Self {
        self.destination = Some(u);
        self
    }
}

impl<W> PathGraph for ShadowSearch<'_, W>
where
    W: PrimInt + Unsigned,
{
    fn edge_count(&self, u: Node) -> usize {
        self.graph.edge_count(u)
    }

    fn edge_target(&self, u: Node, i: usize) -> Node {
        self.graph.edge_target(u, i)
    }

    fn decrement_edge(&mut self, u: Node, i: usize) -> bool {
        let graph = self.graph;
        let remaining = self
            .remaining
            .entry((u, i))
            .or_insert_with(|| graph.edge_length(u, i));

        if *remaining > W::one() {
            *remaining = *remaining - W::one();
            false
        } else {
            true
        }
    }

    fn predecessor(&self, u: Node) -> Option<Node> {
        self.predecessors.get(&u).copied()
    }

    fn set_predecessor(&mut self, u: Node, pred: Option<Node>) {
        match pred {
            Some(p) => {
                self.predecessors.insert(u, p);
            }
            None => {
                self.predecessors.remove(&u);
            }
        }
    }

    fn is_destination(&self, u: Node) -> bool {
        match self.destination {
            Some(d) => d == u,
            None => self.graph.is_destination(u),
        }
    }

    fn is_origin(&self, u: Node) -> bool {
        match self.origin {
            Some(o) => o == u,
            None => self.graph.is_origin(u),
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::search::ShortestPath;
    use itertools::Itertools;

    #[test]
    fn decrement_semantics() {
        let mut g: AdjGraph = AdjGraph::from_edges(2, [(0, 1, 3), (0, 1, 1), (0, 1, 0)]);

        // Length 3 needs two failing decrements before exhaustion
        assert!(!g.decrement_edge(0, 0));
        assert!(!g.decrement_edge(0, 0));
        assert!(g.decrement_edge(0, 0));
        // Exhausted edges stay exhausted
        assert!(g.decrement_edge(0, 0));

        // Lengths 1 and 0 are exhausted from the start
        assert!(g.decrement_edge(0, 1));
        assert!(g.decrement_edge(0, 2));
    }

    #[test]
    fn predecessor_slot() {
        let mut g: AdjGraph = AdjGraph::new(3);
        assert!(!g.has_predecessor(1));

        g.set_predecessor(1, Some(0));
        assert_eq!(g.predecessor(1), Some(0));
        assert_eq!(g.settled_nodes().iter_set_bits().collect_vec(), vec![1]);

        g.set_predecessor(1, None);
        assert!(!g.has_predecessor(1));
        assert_eq!(g.settled_nodes().cardinality(), 0);
    }

    #[test]
    fn endpoint_flags_move() {
        let mut g: AdjGraph = AdjGraph::new(3);
        g.set_origin(0);
        g.set_origin(2);
        g.set_destination(1);

        assert!(!g.is_origin(0));
        assert!(g.is_origin(2));
        assert!(g.is_destination(1));
        assert_eq!(g.origin(), Some(2));
        assert_eq!(g.destination(), Some(1));
    }

    #[test]
    fn reset_restores_counters() {
        let mut g: AdjGraph = AdjGraph::from_edges(2, [(0, 1, 4)]);
        assert!(!g.decrement_edge(0, 0));
        assert!(!g.decrement_edge(0, 0));

        g.reset_search();
        assert_eq!(g.edge_length(0, 0), 4);
        assert!(!g.decrement_edge(0, 0));
        assert!(!g.decrement_edge(0, 0));
        assert!(!g.decrement_edge(0, 0));
        assert!(g.decrement_edge(0, 0));
    }

    #[test]
    fn shadow_searches_share_topology() {
        let g: AdjGraph = AdjGraph::from_edges(4, [(0, 1, 2), (1, 2, 3), (2, 3, 1), (0, 3, 9)]);

        let mut a = ShadowSearch::new(&g).origin(0).destination(3);
        let mut b = ShadowSearch::new(&g).origin(1).destination(3);

        assert_eq!(a.find_path(0), Some(6));
        assert_eq!(b.find_path(1), Some(4));

        assert_eq!(a.path_from_origin(3), vec![0, 1, 2, 3]);
        assert_eq!(b.path_from_origin(3), vec![1, 2, 3]);

        // The shared graph was never mutated
        assert_eq!(g.settled_nodes().cardinality(), 0);
        let mut inplace = g.clone();
        inplace.set_origin(0);
        inplace.set_destination(3);
        assert_eq!(inplace.find_path(0), Some(6));
    }

    #[test]
    fn shadow_falls_back_to_graph_flags() {
        let mut g: AdjGraph = AdjGraph::from_edges(2, [(0, 1, 1)]);
        g.set_origin(0);
        g.set_destination(1);

        let mut view = ShadowSearch::new(&g);
        assert!(view.is_origin(0));
        assert!(view.is_destination(1));
        assert_eq!(view.find_path(0), Some(1));
    }
}
