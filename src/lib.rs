/*!
`wgraphs` is a small library of **w**eighted, labelled graphs and the classical
algorithms taught alongside them.

# Representation

Vertices carry unique string labels and are addressed internally by a dense index
`Node = u32` in the range `0..n`. Removing a vertex compacts the index space, i.e. every
larger index shifts down by one. Edges carry an `f64` weight; a weight of exactly `0.0`
means "no edge".

A [`Graph`](crate::repr::Graph) is either **directed** or **undirected** and either
**weighted** or **unweighted** (every edge has weight `1.0`). Both flags are fixed at
construction, as is the storage backend:

- [`Representation::Matrix`](crate::repr::Representation): a dense `n x n` weight matrix,
- [`Representation::List`](crate::repr::Representation): one `(destination, weight)` list per vertex.

Both backends answer every query identically; only the order in which neighbors are
reported differs.

# Design

Basic graph operations are traits in [`ops`]. Algorithms are traits with blanket
implementations on every graph providing the required operations, so they can be
called as methods (`graph.bfs(0)`, `graph.kruskal_mst()`, ...). Algorithms that need
configuration are plain structs configured with setters before being run
(`LocalSearch::new().iterations(100)`).

Mutations report failure via their `bool` return value; algorithm entry points validate
their arguments and return [`Result`].

# Usage

- [`prelude`] includes nodes, edges, the operation traits and the graph itself,
- [`algo`] includes traversal, shortest paths, coloring, maximum flow and spanning trees,
- [`io`] reads and writes graphs in a simple text format,
- [`utils`] includes the disjoint-set union used by Kruskal's algorithm.

In most use-cases, `use wgraphs::{prelude::*, algo::*};` suffices.
*/

pub mod algo;
pub mod edge;
pub mod error;
pub mod io;
pub mod node;
pub mod ops;
pub mod repr;
pub(crate) mod testing;
pub mod utils;

pub use edge::*;
pub use error::{GraphError, Result};
pub use node::*;

/// `wgraphs::prelude` includes definitions for nodes and edges, all basic graph operation traits as well as the graph itself.
pub mod prelude {
    pub use super::{edge::*, error::GraphError, node::*, ops::*, repr::*};
}
