/*!
# Single-Source Shortest Paths

Dijkstra's algorithm over a binary heap. Only defined on weighted graphs; an unweighted
graph is refused with [`GraphError::NotWeighted`].

Every node is settled exactly once when it is popped from the heap. Negative weights are
**not** validated: the algorithm still terminates on them (even on negative cycles), but the
reported distances are not guaranteed to be shortest.
*/

use std::{cmp::Ordering, collections::BinaryHeap};

use tracing::warn;

use super::*;

/// Heap entry ordered such that the *smallest* distance is popped first
#[derive(Debug, Clone, Copy)]
struct State {
    distance: Weight,
    node: Node,
}

impl PartialEq for State {
    fn eq(&self, other: &Self) -> bool {
        self.cmp(other) == Ordering::Equal
    }
}

impl Eq for State {}

impl Ord for State {
    fn cmp(&self, other: &Self) -> Ordering {
        other
            .distance
            .total_cmp(&self.distance)
            .then_with(|| other.node.cmp(&self.node))
    }
}

impl PartialOrd for State {
    fn partial_cmp(&self, other: &Self) -> Option<Ordering> {
        Some(self.cmp(other))
    }
}

/// Result of a single-source shortest path computation
#[derive(Debug, Clone, PartialEq)]
pub struct ShortestPaths {
    source: Node,
    distances: Vec<Option<Weight>>,
    predecessors: Vec<Option<Node>>,
}

impl ShortestPaths {
    /// Returns the source node of the search
    pub fn source(&self) -> Node {
        self.source
    }

    /// Returns the distance from the source to `v` or `None` if `v` is unreachable.
    /// ** Panics if `v >= n` **
    pub fn distance_to(&self, v: Node) -> Option<Weight> {
        self.distances[v as usize]
    }

    /// Returns the predecessor of `v` on its shortest path.
    /// `None` for the source and for unreachable nodes.
    /// ** Panics if `v >= n` **
    pub fn predecessor_of(&self, v: Node) -> Option<Node> {
        self.predecessors[v as usize]
    }

    /// Returns the distances of all nodes, indexed by node
    pub fn distances(&self) -> &[Option<Weight>] {
        &self.distances
    }

    /// Returns *true* if `v` is reachable from the source
    /// ** Panics if `v >= n` **
    pub fn is_reachable(&self, v: Node) -> bool {
        self.distances[v as usize].is_some()
    }

    /// Reconstructs the path `source -> ... -> v` or returns `None` if `v` is unreachable.
    /// ** Panics if `v >= n` **
    pub fn path_to(&self, v: Node) -> Option<Vec<Node>> {
        self.distances[v as usize]?;

        let mut path = vec![v];
        let mut u = v;
        while let Some(p) = self.predecessors[u as usize] {
            path.push(p);
            u = p;
        }

        path.reverse();
        Some(path)
    }
}

/// Shortest path algorithms exposed as methods on graphs.
pub trait ShortestPath: WeightedAdjacency + LabelledGraph {
    /// Runs Dijkstra's algorithm from `source`.
    ///
    /// Returns [`GraphError::NotWeighted`] on unweighted graphs and
    /// [`GraphError::NodeOutOfRange`] if `source >= n`.
    ///
    /// # Examples
    /// ```
    /// use wgraphs::{prelude::*, algo::*};
    ///
    /// let mut g = Graph::with_vertices(true, true, Representation::List, 3);
    /// g.add_edges([(0, 1, 1.0), (1, 2, 2.0), (0, 2, 5.0)]);
    ///
    /// let paths = g.dijkstra(0).unwrap();
    /// assert_eq!(paths.distance_to(2), Some(3.0));
    /// assert_eq!(paths.path_to(2), Some(vec![0, 1, 2]));
    /// ```
    fn dijkstra(&self, source: Node) -> Result<ShortestPaths> {
        if !self.is_weighted() {
            warn!("Dijkstra requires a weighted graph; no distances computed");
            return Err(GraphError::NotWeighted);
        }
        let source = self.checked_node(source)?;

        let mut distances: Vec<Option<Weight>> = vec![None; self.len()];
        let mut predecessors = vec![None; self.len()];
        let mut settled = self.vertex_bitset_unset();
        let mut heap = BinaryHeap::new();

        distances[source as usize] = Some(0.0);
        heap.push(State {
            distance: 0.0,
            node: source,
        });

        while let Some(State { distance, node: u }) = heap.pop() {
            // stale entry
            if settled.set_bit(u) {
                continue;
            }

            for (v, w) in self.weighted_neighbors_of(u) {
                let candidate = distance + w;
                if !settled.get_bit(v) && distances[v as usize].is_none_or(|d| candidate < d) {
                    distances[v as usize] = Some(candidate);
                    predecessors[v as usize] = Some(u);
                    heap.push(State {
                        distance: candidate,
                        node: v,
                    });
                }
            }
        }

        Ok(ShortestPaths {
            source,
            distances,
            predecessors,
        })
    }

    /// Like [`ShortestPath::dijkstra`] but starts at the vertex carrying `label`
    fn dijkstra_from(&self, label: &str) -> Result<ShortestPaths> {
        let source = self.resolve_label(label)?;
        self.dijkstra(source)
    }
}

impl<G> ShortestPath for G where G: WeightedAdjacency + LabelledGraph {}
