/*!
# Node Representation

Vertices are addressed by a dense index `Node = u32` in `0..n`. Labels live in the
[`Graph`](crate::repr::Graph)'s registry; algorithms only ever see indices.

Indices are *not* stable: removing a vertex shifts every larger index down by one.
*/

use stream_bitset::bitset::BitSetImpl;

/// Nodes can be any unsigned integer from `0` to `Node::MAX - 1`
pub type Node = u32;

/// Node-Value that is considered invalid
pub const INVALID_NODE: Node = Node::MAX;

/// There can be at most `2^32 - 1` nodes in a graph!
pub type NumNodes = Node;

/// BitSet for Nodes
pub type NodeBitSet = BitSetImpl<Node>;

/// Edge weights (and residual capacities) are stored as `f64`.
///
/// A weight of exactly `0.0` is the sentinel for "no edge" in every representation.
pub type Weight = f64;

/// Sentinel weight for an absent edge
pub const NO_EDGE: Weight = 0.0;

/// Weight every edge of an unweighted graph carries
pub const UNIT_WEIGHT: Weight = 1.0;
