/*!
# Graph Representation

A [`Graph`] consists of
- a [`LabelRegistry`] mapping unique string labels to dense indices `0..n`, and
- one of two weight storages selected by [`Representation`] at construction:
  - [`AdjMatrix`]: dense `n x n` matrix of weights,
  - [`AdjList`]: per-vertex list of `(destination, weight)` pairs.

Both storages answer every query identically; only the neighbor order differs
(ascending for the matrix, insertion order for the list).

## Conventions
- A weight of exactly [`NO_EDGE`] (`0.0`) means "no edge" in both storages.
  Adding an edge with weight `0.0` therefore removes it.
- Re-adding an existing edge overwrites its weight; parallel edges are never stored.
- Undirected edges are stored symmetrically as `(u, v)` and `(v, u)`.
- Removing a vertex compacts the indices: every index above it shifts down by one.
*/

use std::{fmt::Display, str::FromStr};

use itertools::Either;

use crate::{ops::*, *};

mod labels;
mod list;
mod matrix;

pub use labels::*;
pub use list::*;
pub use matrix::*;

/// Trait for the raw weight storages backing a [`Graph`].
///
/// Storages know nothing about directedness or labels; every method works on a
/// single directed cell `(u, v)`.
pub trait WeightStorage: Clone + Default {
    /// Returns the number of nodes in the storage
    fn number_of_nodes(&self) -> NumNodes;

    /// Appends a new isolated node with index `n`
    fn push_node(&mut self);

    /// Removes node `u` together with all its in- and out-going entries
    /// and shifts every larger index down by one.
    /// ** Panics if `u >= n` **
    fn remove_node(&mut self, u: Node);

    /// Sets the weight of `(u, v)`; [`NO_EDGE`] removes the entry.
    /// ** Panics if `u >= n || v >= n` **
    fn set_weight(&mut self, u: Node, v: Node, weight: Weight);

    /// Returns the weight of `(u, v)` or [`NO_EDGE`].
    /// ** Panics if `u >= n || v >= n` **
    fn weight(&self, u: Node, v: Node) -> Weight;

    /// Returns an iterator over all `(v, weight)` entries of `u`.
    /// ** Panics if `u >= n` **
    fn weighted_neighbors_of(&self, u: Node) -> impl Iterator<Item = (Node, Weight)> + '_;

    /// Returns an iterator over all neighbors of `u`
    /// ** Panics if `u >= n` **
    fn neighbors_of(&self, u: Node) -> impl Iterator<Item = Node> + '_ {
        self.weighted_neighbors_of(u).map(|(v, _)| v)
    }

    /// Returns *true* if `(u, v)` is stored
    /// ** Panics if `u >= n || v >= n` **
    fn has_edge(&self, u: Node, v: Node) -> bool {
        self.weight(u, v) != NO_EDGE
    }

    /// Returns the number of entries of `u`
    /// ** Panics if `u >= n` **
    fn degree_of(&self, u: Node) -> NumNodes {
        self.neighbors_of(u).count() as NumNodes
    }

    /// Adds `delta` to the weight of `(u, v)`
    /// ** Panics if `u >= n || v >= n` **
    fn add_to_weight(&mut self, u: Node, v: Node, delta: Weight) {
        let weight = self.weight(u, v) + delta;
        self.set_weight(u, v, weight);
    }
}

/// Selects the storage of a [`Graph`]
#[derive(Debug, Copy, Clone, PartialEq, Eq, Hash, Default)]
pub enum Representation {
    /// Dense adjacency matrix ([`AdjMatrix`])
    Matrix,
    /// Adjacency list ([`AdjList`])
    #[default]
    List,
}

impl Display for Representation {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        match self {
            Representation::Matrix => write!(f, "MATRIX"),
            Representation::List => write!(f, "LIST"),
        }
    }
}

impl FromStr for Representation {
    type Err = std::io::Error;

    fn from_str(s: &str) -> std::io::Result<Self> {
        match s.to_lowercase().as_str() {
            "matrix" => Ok(Representation::Matrix),
            "list" => Ok(Representation::List),
            _ => Err(std::io::Error::new(
                std::io::ErrorKind::InvalidInput,
                format!("Unknown Representation: {s}"),
            )),
        }
    }
}

#[derive(Debug, Clone)]
enum Storage {
    Matrix(AdjMatrix),
    List(AdjList),
}

/// Runs the same expression on whichever storage is active
macro_rules! dispatch {
    ($storage:expr, $s:ident => $body:expr) => {
        match $storage {
            Storage::Matrix($s) => $body,
            Storage::List($s) => $body,
        }
    };
}

/// Like `dispatch!` for expressions returning iterators of different types
macro_rules! dispatch_iter {
    ($storage:expr, $s:ident => $body:expr) => {
        match $storage {
            Storage::Matrix($s) => Either::Left($body),
            Storage::List($s) => Either::Right($body),
        }
    };
}

/// A labelled graph with a fixed storage [`Representation`].
///
/// Whether the graph is directed and/or weighted is fixed at construction.
/// Cloning a graph yields an independent deep copy.
///
/// # Examples
/// ```
/// use wgraphs::prelude::*;
///
/// let mut g = Graph::new(false, true, Representation::Matrix);
/// for label in ["A", "B", "C"] {
///     g.add_vertex(label);
/// }
/// g.add_edges([(0, 1, 5.5), (1, 2, -3.0), (2, 0, 2.0)]);
///
/// assert_eq!(g.edge_weight(0, 1), 5.5);
/// assert_eq!(g.edge_weight(1, 0), 5.5);
/// assert_eq!(g.vertex_index("C"), Some(2));
/// ```
#[derive(Debug, Clone)]
pub struct Graph {
    directed: bool,
    weighted: bool,
    labels: LabelRegistry,
    storage: Storage,
}

impl Graph {
    /// Creates an empty graph
    pub fn new(directed: bool, weighted: bool, representation: Representation) -> Self {
        let storage = match representation {
            Representation::Matrix => Storage::Matrix(AdjMatrix::default()),
            Representation::List => Storage::List(AdjList::default()),
        };

        Self {
            directed,
            weighted,
            labels: LabelRegistry::new(),
            storage,
        }
    }

    /// Creates a graph with `n` isolated vertices labelled `"0"` to `"n-1"`
    pub fn with_vertices(
        directed: bool,
        weighted: bool,
        representation: Representation,
        n: NumNodes,
    ) -> Self {
        let mut graph = Self::new(directed, weighted, representation);
        for u in 0..n {
            graph.add_vertex(u.to_string());
        }
        graph
    }

    /// Returns the storage representation
    pub fn representation(&self) -> Representation {
        match self.storage {
            Storage::Matrix(_) => Representation::Matrix,
            Storage::List(_) => Representation::List,
        }
    }

    /// Adds a new isolated vertex with index `n`.
    /// Returns *false* if the label is already present.
    pub fn add_vertex<S: Into<String>>(&mut self, label: S) -> bool {
        if self.labels.insert(label.into()).is_none() {
            return false;
        }

        dispatch!(&mut self.storage, s => s.push_node());
        true
    }

    /// Removes the vertex carrying `label` and all its edges.
    /// Every vertex with a larger index is shifted down by one.
    ///
    /// Returns *false* if the label is not present.
    pub fn remove_vertex(&mut self, label: &str) -> bool {
        let Some(u) = self.labels.remove(label) else {
            return false;
        };

        dispatch!(&mut self.storage, s => s.remove_node(u));
        true
    }

    /// Returns a reference to the label registry
    pub fn label_registry(&self) -> &LabelRegistry {
        &self.labels
    }

    /// The weight that is actually stored when `weight` is supplied to `add_edge`
    fn effective_weight(&self, weight: Weight) -> Weight {
        if self.weighted { weight } else { UNIT_WEIGHT }
    }
}

impl GraphType for Graph {
    fn is_directed(&self) -> bool {
        self.directed
    }

    fn is_weighted(&self) -> bool {
        self.weighted
    }
}

impl GraphNodeOrder for Graph {
    fn number_of_nodes(&self) -> NumNodes {
        self.labels.len() as NumNodes
    }
}

impl GraphEdgeOrder for Graph {
    fn number_of_edges(&self) -> NumEdges {
        self.edges(self.is_undirected()).count() as NumEdges
    }
}

impl AdjacencyList for Graph {
    fn neighbors_of(&self, u: Node) -> impl Iterator<Item = Node> + '_ {
        dispatch_iter!(&self.storage, s => s.neighbors_of(u))
    }

    fn degree_of(&self, u: Node) -> NumNodes {
        dispatch!(&self.storage, s => s.degree_of(u))
    }
}

impl AdjacencyTest for Graph {
    fn has_edge(&self, u: Node, v: Node) -> bool {
        dispatch!(&self.storage, s => s.has_edge(u, v))
    }
}

impl WeightedAdjacency for Graph {
    fn edge_weight(&self, u: Node, v: Node) -> Weight {
        dispatch!(&self.storage, s => s.weight(u, v))
    }

    fn weighted_neighbors_of(&self, u: Node) -> impl Iterator<Item = (Node, Weight)> + '_ {
        dispatch_iter!(&self.storage, s => s.weighted_neighbors_of(u))
    }
}

impl GraphEdgeEditing for Graph {
    fn add_edge(&mut self, u: Node, v: Node, weight: Weight) -> bool {
        if !self.contains_node(u) || !self.contains_node(v) {
            return false;
        }

        let weight = self.effective_weight(weight);
        let undirected = self.is_undirected();
        dispatch!(&mut self.storage, s => {
            s.set_weight(u, v, weight);
            if undirected {
                s.set_weight(v, u, weight);
            }
        });
        true
    }

    fn remove_edge(&mut self, u: Node, v: Node) -> bool {
        if !self.contains_node(u) || !self.contains_node(v) {
            return false;
        }

        let undirected = self.is_undirected();
        dispatch!(&mut self.storage, s => {
            s.set_weight(u, v, NO_EDGE);
            if undirected {
                s.set_weight(v, u, NO_EDGE);
            }
        });
        true
    }
}

impl LabelledGraph for Graph {
    fn vertex_index(&self, label: &str) -> Option<Node> {
        self.labels.index_of(label)
    }

    fn vertex_label(&self, u: Node) -> Option<&str> {
        self.labels.label_of(u)
    }

    fn labels(&self) -> impl Iterator<Item = &str> + '_ {
        self.labels.iter()
    }
}

impl ResidualCapacity for Graph {
    fn add_flow(&mut self, u: Node, v: Node, delta: Weight) {
        dispatch!(&mut self.storage, s => s.add_to_weight(u, v, delta));
    }
}


crate::testing::test_graph_ops!(directed_weighted, true, true);
crate::testing::test_graph_ops!(directed_unweighted, true, false);
crate::testing::test_graph_ops!(undirected_weighted, false, true);
crate::testing::test_graph_ops!(undirected_unweighted, false, false);
