use std::ops::Range;

use itertools::Itertools;

use crate::{error::*, *};

/// Provides getters pertaining to the node-size of a graph
pub trait GraphNodeOrder {
    /// Returns the number of nodes of the graph
    fn number_of_nodes(&self) -> NumNodes;

    /// Return the number of nodes as usize
    fn len(&self) -> usize {
        self.number_of_nodes() as usize
    }

    /// Returns an iterator over V.
    fn vertices(&self) -> Range<Node> {
        self.vertices_range()
    }

    /// Returns the range `0..n` of vertices.
    /// In contrast to `self.vertices()` in other graph libraries, the range does not
    /// borrow self and hence may be used where a mutable reference of self is needed.
    fn vertices_range(&self) -> Range<Node> {
        0..self.number_of_nodes()
    }

    /// Returns empty bitset with one entry per node
    fn vertex_bitset_unset(&self) -> NodeBitSet {
        NodeBitSet::new(self.number_of_nodes())
    }

    /// Returns *true* if `u` is a valid index, i.e. `u < n`
    fn contains_node(&self, u: Node) -> bool {
        u < self.number_of_nodes()
    }

    /// Returns `u` if it is a valid index and [`GraphError::NodeOutOfRange`] otherwise
    fn checked_node(&self, u: Node) -> Result<Node> {
        if self.contains_node(u) {
            Ok(u)
        } else {
            Err(GraphError::NodeOutOfRange {
                node: u,
                number_of_nodes: self.number_of_nodes(),
            })
        }
    }

    /// Returns *true* if the graph has no nodes (and thus no edges)
    fn is_empty(&self) -> bool {
        self.len() == 0
    }
}

/// Flags fixed at construction time
pub trait GraphType {
    /// Returns *true* if edges have an orientation
    fn is_directed(&self) -> bool;

    /// Returns *true* if edges carry their own weight.
    /// Unweighted graphs store [`UNIT_WEIGHT`] for every edge.
    fn is_weighted(&self) -> bool;

    /// Returns *true* if every edge is stored in both directions
    fn is_undirected(&self) -> bool {
        !self.is_directed()
    }
}

/// Provides getters pertaining to the edge-size of a graph
pub trait GraphEdgeOrder {
    /// Returns the number of edges of the graph.
    /// An undirected edge `{u, v}` is counted once.
    fn number_of_edges(&self) -> NumEdges;

    /// Returns *true* if the graph has no edges
    fn is_singleton_graph(&self) -> bool {
        self.number_of_edges() == 0
    }
}

/// Traits pertaining getters for neighborhoods & edges
pub trait AdjacencyList: GraphNodeOrder + Sized {
    /// Returns an iterator over the (out-)neighbors of a given vertex.
    /// The matrix representation yields them in ascending order, the list
    /// representation in insertion order.
    /// ** Panics if `u >= n` **
    fn neighbors_of(&self, u: Node) -> impl Iterator<Item = Node> + '_;

    /// Returns the number of (outgoing) neighbors of `u`
    /// ** Panics if `u >= n` **
    fn degree_of(&self, u: Node) -> NumNodes {
        self.neighbors_of(u).count() as NumNodes
    }

    /// Returns an iterator over the degrees of all vertices
    fn degrees(&self) -> impl Iterator<Item = NumNodes> + '_ {
        self.vertices().map(|u| self.degree_of(u))
    }

    /// Returns the maximum degree in the graph
    fn max_degree(&self) -> NumNodes {
        self.degrees().max().unwrap_or(0)
    }

    /// Returns an iterator over outgoing edges of a given vertex.
    /// If `only_normalized`, then only edges `(u, v)` with `u <= v` are considered.
    /// ** Panics if `u >= n` **
    fn edges_of(&self, u: Node, only_normalized: bool) -> impl Iterator<Item = Edge> + '_ {
        self.neighbors_of(u)
            .map(move |v| Edge(u, v))
            .filter(move |e| !only_normalized || e.is_normalized())
    }

    /// Returns an iterator over all edges in the graph.
    /// If `only_normalized`, then only edges `(u, v)` with `u <= v` are considered.
    fn edges(&self, only_normalized: bool) -> impl Iterator<Item = Edge> + '_ {
        self.vertices_range()
            .flat_map(move |u| self.edges_of(u, only_normalized))
    }

    /// Returns all edges in sorted order.
    fn ordered_edges(&self, only_normalized: bool) -> Vec<Edge> {
        self.edges(only_normalized).sorted().collect()
    }
}

/// Trait to test existence of certain structures in a graph.
pub trait AdjacencyTest: GraphNodeOrder {
    /// Returns *true* if the edge (u,v) exists in the graph.
    /// ** Panics if `u >= n || v >= n` **
    fn has_edge(&self, u: Node, v: Node) -> bool;

    /// Returns *true* if a self-loop (u,u) exists.
    /// ** Panics if `u >= n` **
    fn has_self_loop(&self, u: Node) -> bool {
        self.has_edge(u, u)
    }
}

/// Weighted view on the adjacency of a graph
pub trait WeightedAdjacency: AdjacencyList + GraphType {
    /// Returns the weight of edge `(u, v)` or [`NO_EDGE`] if it does not exist.
    /// ** Panics if `u >= n || v >= n` **
    fn edge_weight(&self, u: Node, v: Node) -> Weight;

    /// Returns an iterator over `(neighbor, weight)` pairs of a given vertex,
    /// in the same order as [`AdjacencyList::neighbors_of`].
    /// ** Panics if `u >= n` **
    fn weighted_neighbors_of(&self, u: Node) -> impl Iterator<Item = (Node, Weight)> + '_;

    /// Returns an iterator over the outgoing weighted edges of a given vertex.
    /// If `only_normalized`, then only edges `(u, v)` with `u <= v` are considered.
    /// ** Panics if `u >= n` **
    fn weighted_edges_of(
        &self,
        u: Node,
        only_normalized: bool,
    ) -> impl Iterator<Item = WeightedEdge> + '_ {
        self.weighted_neighbors_of(u)
            .filter(move |&(v, _)| !only_normalized || u <= v)
            .map(move |(v, w)| WeightedEdge(u, v, w))
    }

    /// Returns an iterator over all weighted edges in the graph.
    /// If `only_normalized`, then only edges `(u, v)` with `u <= v` are considered.
    fn weighted_edges(&self, only_normalized: bool) -> impl Iterator<Item = WeightedEdge> + '_ {
        self.vertices_range()
            .flat_map(move |u| self.weighted_edges_of(u, only_normalized))
    }

    /// Returns every edge exactly once: all entries for directed graphs and
    /// the normalized entries for undirected graphs.
    fn unique_weighted_edges(&self) -> impl Iterator<Item = WeightedEdge> + '_ {
        self.weighted_edges(self.is_undirected())
    }
}

/// Provides functions to insert/delete edges
pub trait GraphEdgeEditing: GraphNodeOrder {
    /// Adds the edge `(u, v)` with the given weight (ignored for unweighted graphs).
    /// For undirected graphs, `(v, u)` is written as well.
    /// Re-adding an existing edge overwrites its weight, adding weight [`NO_EDGE`] removes it.
    ///
    /// Returns *false* iff `u >= n || v >= n`.
    fn add_edge(&mut self, u: Node, v: Node, weight: Weight) -> bool;

    /// Adds all edges in the collection and returns the number of accepted edges
    fn add_edges(&mut self, edges: impl IntoIterator<Item = impl Into<WeightedEdge>>) -> usize {
        edges
            .into_iter()
            .map(|e| e.into())
            .filter(|&WeightedEdge(u, v, w)| self.add_edge(u, v, w))
            .count()
    }

    /// Removes the edge `(u, v)` (and `(v, u)` for undirected graphs).
    /// Removing an absent edge is a no-op.
    ///
    /// Returns *false* iff `u >= n || v >= n`.
    fn remove_edge(&mut self, u: Node, v: Node) -> bool;
}

/// Access to the label registry of a graph
pub trait LabelledGraph: GraphNodeOrder {
    /// Returns the index of the vertex carrying `label`
    fn vertex_index(&self, label: &str) -> Option<Node>;

    /// Returns the label of the vertex with index `u`
    fn vertex_label(&self, u: Node) -> Option<&str>;

    /// Like [`LabelledGraph::vertex_index`] but returns [`GraphError::UnknownLabel`]
    /// for unknown labels
    fn resolve_label(&self, label: &str) -> Result<Node> {
        self.vertex_index(label)
            .ok_or_else(|| GraphError::UnknownLabel(label.to_string()))
    }

    /// Returns the labels of all vertices in index order
    fn labels(&self) -> impl Iterator<Item = &str> + '_ {
        self.vertices_range().filter_map(|u| self.vertex_label(u))
    }
}

/// Directed mutation surface used for residual-graph arithmetic.
///
/// In contrast to [`GraphEdgeEditing`], these methods only ever touch the single
/// cell `(u, v)` (even for undirected graphs), ignore whether the graph is weighted
/// and allow weights to become negative.
pub trait ResidualCapacity: WeightedAdjacency {
    /// Returns the remaining capacity of `(u, v)`, i.e. its current weight.
    /// ** Panics if `u >= n || v >= n` **
    fn capacity(&self, u: Node, v: Node) -> Weight {
        self.edge_weight(u, v)
    }

    /// Adds `delta` to the weight of `(u, v)`, creating the entry if necessary.
    /// An entry whose weight reaches exactly [`NO_EDGE`] disappears.
    /// ** Panics if `u >= n || v >= n` **
    fn add_flow(&mut self, u: Node, v: Node, delta: Weight);
}
