//! Crate-private test helpers.

use std::{cmp::Reverse, collections::BinaryHeap};

use crate::{node::*, ops::PathGraph, repr::AdjGraph};

/// Reference single-source shortest-path distances (textbook Dijkstra over a
/// binary heap) computed from the initial edge lengths, used to cross-check
/// the layered search. Mirrors its cost model: an edge of length `0` costs
/// one unit, a hop is never free.
pub(crate) fn reference_distances(graph: &AdjGraph<EdgeLength>, source: Node) -> Vec<Option<u64>> {
    let mut dist: Vec<Option<u64>> = vec![None; graph.len()];
    let mut done = NodeBitSet::new(graph.number_of_nodes());
    let mut heap = BinaryHeap::new();

    dist[source as usize] = Some(0);
    heap.push(Reverse((0u64, source)));

    while let Some(Reverse((d, u))) = heap.pop() {
        if done.get_bit(u) {
            continue;
        }
        done.set_bit(u);

        for i in 0..graph.edge_count(u) {
            let v = graph.edge_target(u, i);
            let next = d + graph.edge_length(u, i).max(1);

            if dist[v as usize].map_or(true, |old| next < old) {
                dist[v as usize] = Some(next);
                heap.push(Reverse((next, v)));
            }
        }
    }

    dist
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn reference_on_small_instance() {
        let g: AdjGraph = AdjGraph::from_edges(4, [(0, 1, 3), (0, 2, 1), (2, 1, 1), (1, 3, 2)]);
        let dists = reference_distances(&g, 0);

        assert_eq!(dists, vec![Some(0), Some(2), Some(1), Some(4)]);
    }
}
