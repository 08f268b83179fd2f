/*!
# Layered Path Search

Shortest paths on directed graphs with non-negative integer edge lengths,
without a priority queue. An edge of length `n` is treated as `n` consecutive
unit hops that are discovered incrementally: each layer of the search advances
the true shortest-path distance by exactly one unit and decrements every still
live edge on the frontier once.

The running time is `O(V + E * W)` where `W` is the maximum edge length, since
an edge is decremented once per layer until exhausted. This trades the
priority-queue overhead of Dijkstra's algorithm for an allocation-light layered
sweep, which pays off when `W` is small relative to the graph size.

All functionality is provided through the [`ShortestPath`] trait which is
implemented for every [`PathGraph`] store.
*/

use crate::{frontier::Frontier, node::Node, ops::PathGraph};

/// Iterator walking the predecessor chain left behind by a successful search,
/// from the destination back to (and including) the origin.
///
/// Created by [`ShortestPath::backtrack`].
pub struct Backtrack<'a, G>
where
    G: PathGraph,
{
    graph: &'a G,
    cur: Option<Node>,
}

impl<G> Iterator for Backtrack<'_, G>
where
    G: PathGraph,
{
    type Item = Node;

    fn next(&mut self) -> Option<Self::Item> {
        let u = self.cur?;
        self.cur = if self.graph.is_origin(u) {
            None
        } else {
            Some(
                self.graph
                    .predecessor(u)
                    .expect("backtrack requires a completed successful search"),
            )
        };
        Some(u)
    }
}

/// Provides the layered shortest-path search on every [`PathGraph`] store.
pub trait ShortestPath: PathGraph + Sized {
    /// Runs the layered search from `start` and returns the shortest-path
    /// distance to the vertex flagged as destination, or `None` if the
    /// frontier empties before the destination is discovered.
    ///
    /// On return, every vertex on the discovered path carries a predecessor
    /// assignment; use [`ShortestPath::backtrack`] or
    /// [`ShortestPath::path_from_origin`] to recover the path. The origin's
    /// sentinel self-predecessor is cleared again before returning, so
    /// [`PathGraph::has_predecessor`] reads "not yet visited" for it both
    /// before and after a search.
    ///
    /// The search exclusively mutates predecessor slots and remaining-length
    /// counters; adjacency structure is never touched. Exactly one search may
    /// run over a given store's mutable state at a time (see
    /// [`ShadowSearch`](crate::repr::ShadowSearch) for concurrent searches
    /// over shared topology).
    ///
    /// # Preconditions
    /// The destination check only fires on newly discovered vertices, never
    /// on `start` itself: calling this with `start` flagged as destination
    /// **does not terminate**. Check `is_destination(start)` first. This is a
    /// deliberate part of the contract inherited by graph traversals built on
    /// top of it, not an oversight.
    ///
    /// Counters and predecessors must be in their initial state; rerunning
    /// requires resetting them (e.g.
    /// [`AdjGraph::reset_search`](crate::repr::AdjGraph::reset_search)).
    ///
    /// # Example
    /// ```
    /// use upaths::prelude::*;
    ///
    /// // 0 --3--> 1 and 0 --1--> 2 --1--> 1: the detour wins
    /// let mut g: AdjGraph = AdjGraph::from_edges(3, [(0, 1, 3), (0, 2, 1), (2, 1, 1)]);
    /// g.set_origin(0);
    /// g.set_destination(1);
    ///
    /// assert_eq!(g.find_path(0), Some(2));
    /// assert_eq!(g.path_from_origin(1), vec![0, 2, 1]);
    /// ```
    fn find_path(&mut self, start: Node) -> Option<u64> {
        // The predecessor slot doubles as the settledness marker, so give the
        // origin a non-null sentinel pointing at itself. It is never read.
        self.set_predecessor(start, Some(start));

        let mut current = Frontier::new();
        let mut next = Frontier::new();
        current.push(start);

        // Each layer advances the path length by one unit
        let mut distance: u64 = 1;
        let found = 'layers: loop {
            if current.is_empty() {
                break false;
            }

            for cur in &current {
                let edges = self.edge_count(cur);
                let mut readmitted = false;

                for i in 0..edges {
                    let target = self.edge_target(cur, i);
                    if self.decrement_edge(cur, i) && !self.has_predecessor(target) {
                        // First writer wins: layer order makes this the
                        // shortest path to `target`
                        self.set_predecessor(target, Some(cur));
                        if self.is_destination(target) {
                            break 'layers true;
                        }
                        next.push(target);
                    } else if !readmitted {
                        // Keep `cur`'s unexhausted edges decrementing in
                        // later layers, but admit it at most once per layer
                        next.push(cur);
                        readmitted = true;
                    }
                }
            }

            std::mem::swap(&mut current, &mut next);
            next.clear();
            distance += 1;
        };

        // Undo the sentinel from the beginning
        self.set_predecessor(start, None);
        found.then_some(distance)
    }

    /// Walks the predecessor chain from `dest` back to the origin, yielding
    /// `dest` first and the vertex flagged [`PathGraph::is_origin`] last.
    ///
    /// Only meaningful after [`ShortestPath::find_path`] returned `Some` with
    /// `dest` as the discovered destination; the iterator panics if it runs
    /// into an unsettled vertex before reaching the origin.
    fn backtrack(&self, dest: Node) -> Backtrack<'_, Self> {
        Backtrack {
            graph: self,
            cur: Some(dest),
        }
    }

    /// The discovered path in forward order, from the origin up to `dest`.
    ///
    /// Convenience wrapper around [`ShortestPath::backtrack`]; the same
    /// preconditions apply.
    fn path_from_origin(&self, dest: Node) -> Vec<Node> {
        let mut path: Vec<Node> = self.backtrack(dest).collect();
        path.reverse();
        path
    }
}

impl<G> ShortestPath for G where G: PathGraph + Sized {}
