/*!
# Minimum Spanning Trees

- **Prim**: grows a tree from node `0` with a min-heap of frontier edges. Only the
  component of `0` is spanned; other components are silently ignored.
- **Kruskal**: considers every edge once in ascending order of weight and keeps it if it
  connects two different components of a [`DisjointSetUnion`]. Yields a spanning forest
  on disconnected graphs.

Ties are broken by the endpoints of the edge, so both algorithms return the same tree for
matrix- and list-backed graphs. Both are meant for undirected graphs: on directed graphs
Prim only follows out-edges and Kruskal ignores edge orientation.
*/

use std::{cmp::Ordering, collections::BinaryHeap};

use itertools::Itertools;

use super::*;
use crate::utils::DisjointSetUnion;

/// Edges of a minimum spanning tree (or forest) and their total weight
#[derive(Debug, Clone, PartialEq, Default)]
pub struct SpanningTree {
    pub total_weight: Weight,
    pub edges: Vec<WeightedEdge>,
}

impl SpanningTree {
    /// Returns the number of tree edges
    pub fn number_of_edges(&self) -> usize {
        self.edges.len()
    }

    /// Returns *true* if the tree has no edges
    pub fn is_empty(&self) -> bool {
        self.edges.is_empty()
    }

    fn push(&mut self, edge: WeightedEdge) {
        self.total_weight += edge.weight();
        self.edges.push(edge);
    }
}

/// Total order on weighted edges: weight first, then source and destination
fn cmp_weight_then_endpoints(a: &WeightedEdge, b: &WeightedEdge) -> Ordering {
    a.cmp_by_weight(b).then_with(|| a.edge().cmp(&b.edge()))
}

/// Heap entry for Prim's algorithm; the cheapest edge is popped first
#[derive(Debug, Clone, Copy)]
struct Frontier(WeightedEdge);

impl PartialEq for Frontier {
    fn eq(&self, other: &Self) -> bool {
        self.cmp(other) == Ordering::Equal
    }
}

impl Eq for Frontier {}

impl Ord for Frontier {
    fn cmp(&self, other: &Self) -> Ordering {
        cmp_weight_then_endpoints(&other.0, &self.0)
    }
}

impl PartialOrd for Frontier {
    fn partial_cmp(&self, other: &Self) -> Option<Ordering> {
        Some(self.cmp(other))
    }
}

/// Spanning tree algorithms exposed as methods on graphs.
pub trait MinimumSpanningTree: WeightedAdjacency {
    /// Computes a minimum spanning tree of the component of node `0` with Prim's algorithm.
    /// Returns an empty tree for the empty graph.
    ///
    /// # Examples
    /// ```
    /// use wgraphs::{prelude::*, algo::*};
    ///
    /// let mut g = Graph::with_vertices(false, true, Representation::Matrix, 4);
    /// g.add_edges([(0, 1, 1.0), (1, 2, 2.0), (2, 3, 1.0), (3, 0, 4.0), (0, 2, 3.0)]);
    ///
    /// let mst = g.prim_mst();
    /// assert_eq!(mst.total_weight, 4.0);
    /// assert_eq!(mst.edges, vec![WeightedEdge(0, 1, 1.0), WeightedEdge(1, 2, 2.0), WeightedEdge(2, 3, 1.0)]);
    /// ```
    fn prim_mst(&self) -> SpanningTree {
        let mut tree = SpanningTree::default();
        if self.is_empty() {
            return tree;
        }

        let mut visited = self.vertex_bitset_unset();
        let mut heap: BinaryHeap<Frontier> = self.weighted_edges_of(0, false).map(Frontier).collect();
        visited.set_bit(0);

        while let Some(Frontier(edge)) = heap.pop() {
            let v = edge.destination();
            if visited.set_bit(v) {
                continue;
            }

            tree.push(edge);
            heap.extend(
                self.weighted_edges_of(v, false)
                    .filter(|e| !visited.get_bit(e.destination()))
                    .map(Frontier),
            );
        }

        tree
    }

    /// Computes a minimum spanning forest with Kruskal's algorithm.
    /// Edges of undirected graphs are reported normalized, i.e. `(u, v, w)` with `u <= v`.
    fn kruskal_mst(&self) -> SpanningTree {
        let mut dsu = DisjointSetUnion::new(self.number_of_nodes());
        let mut tree = SpanningTree::default();

        for edge in self
            .unique_weighted_edges()
            .filter(|e| !e.edge().is_loop())
            .sorted_by(cmp_weight_then_endpoints)
        {
            if dsu.union(edge.source(), edge.destination()) {
                tree.push(edge);
            }
        }

        tree
    }
}

impl<G> MinimumSpanningTree for G where G: WeightedAdjacency {}
