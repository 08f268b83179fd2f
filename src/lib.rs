/*!
`upaths` computes shortest paths between two vertices of a **directed** graph
whose edges carry **u**nsigned integer lengths — without a priority queue.

# Idea

Plain BFS finds shortest paths on unweighted graphs because every edge is one
hop. `upaths` generalizes this to integer lengths by treating an edge of length
`n` as `n` consecutive unit hops that are *discovered incrementally* rather
than materialized: every layer of the search decrements the remaining length of
each live edge once, and an edge only contributes a hop once its length is used
up. Each layer therefore advances the true shortest-path distance by exactly
one unit, and the first layer to discover the destination yields its distance.

The running time is `O(V + E * W)` for maximum edge length `W`, which beats
Dijkstra's `O((V + E) log V)` when lengths are small relative to the graph.

# Representation

The search is **graph-representation-agnostic**: it operates through the
capability contract [`PathGraph`](crate::ops::PathGraph) and references
vertices by plain `u32` indices. Any adjacency representation can implement
the contract; [`AdjGraph`](crate::repr::AdjGraph) is a provided
adjacency-list store and [`ShadowSearch`](crate::repr::ShadowSearch) a
side-table view for running several searches over one shared topology.

# Usage

```
use upaths::prelude::*;

let mut g: AdjGraph = AdjGraph::from_edges(3, [(0, 1, 3), (0, 2, 1), (2, 1, 1)]);
g.set_origin(0);
g.set_destination(1);

assert_eq!(g.find_path(0), Some(2));
assert_eq!(g.path_from_origin(1), vec![0, 2, 1]);
```

# When to use

You should only use this library if the following apply:
- Your edge lengths are non-negative integers, and small compared to the graph.
- One designated destination vertex per search suffices.
- You can guarantee the origin is never itself the destination — see the
  precondition on [`ShortestPath::find_path`](crate::search::ShortestPath::find_path).

In all other cases, a classical Dijkstra (e.g. from
[petgraph](https://crates.io/crates/petgraph)) is the safer default.
*/

pub mod frontier;
pub mod gens;
pub mod node;
pub mod ops;
pub mod repr;
pub mod search;
#[cfg(test)]
pub(crate) mod testing;

/// `upaths::prelude` includes the node definitions, the capability contract,
/// the provided graph stores and the search trait.
pub mod prelude {
    pub use super::{frontier::*, node::*, ops::*, repr::*, search::*};
}
