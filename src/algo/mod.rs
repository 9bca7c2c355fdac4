/*!
# Graph Algorithms

This module provides the **graph algorithms** built on top of [`Graph`](crate::repr::Graph).
All algorithms are re-exported at the top level of this module, so you can simply do:
```rust
use wgraphs::algo::*;
```
and gain access to traversal, shortest paths, coloring, flow and spanning trees.
Traversals are provided as **iterators**, making it easy to consume results lazily.
*/

mod coloring;
mod network_flow;
mod shortest_path;
mod spanning_tree;
mod traversal;

use crate::{error::Result, prelude::*};

pub use coloring::*;
pub use network_flow::*;
pub use shortest_path::*;
pub use spanning_tree::*;
pub use traversal::*;
