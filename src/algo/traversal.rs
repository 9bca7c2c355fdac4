/*!
Graph traversal algorithms.

This module provides:
- A generic frontier-based traversal iterator (`TraversalSearch`) which visits
  nodes in breadth-first order when driven by a queue.
- A depth-first iterator (`PreorderDFS`) that yields nodes in exactly the order
  of a recursive pre-order DFS while only using an explicit stack.
- A high-level `Traversal` trait that exposes both directly as methods on graphs,
  either by index or by vertex label.

All iterators are lazy and visit each node reachable from the start exactly once.
*/

use super::*;
use std::collections::VecDeque;

/// Abstraction for the traversal frontier data structure.
///
/// A `NodeSequencer` is responsible for storing the "to be visited"
/// nodes during a traversal. Different implementations determine
/// the traversal order:
///
/// - [`VecDeque`] -> queue semantics -> **BFS**
///
/// Pre-order DFS needs marking on pop instead of on push and is provided by [`PreorderDFS`].
pub trait NodeSequencer {
    /// Creates a new sequencer initialized with a single node.
    fn init(u: Node) -> Self;

    /// Pushes a node into the frontier.
    fn push(&mut self, u: Node);

    /// Removes and returns the next node from the frontier.
    fn pop(&mut self) -> Option<Node>;

    /// Returns the number of items currently in the frontier.
    fn cardinality(&self) -> usize;
}

impl NodeSequencer for VecDeque<Node> {
    fn init(u: Node) -> Self {
        Self::from(vec![u])
    }
    fn push(&mut self, u: Node) {
        self.push_back(u)
    }
    fn pop(&mut self) -> Option<Node> {
        self.pop_front()
    }
    fn cardinality(&self) -> usize {
        self.len()
    }
}

/// Generic traversal iterator.
///
/// Maintains an explicit frontier of nodes to visit and a bitset of discovered
/// nodes. A node is marked as discovered when it is pushed, so it enters the
/// frontier at most once.
pub struct TraversalSearch<'a, G, S>
where
    G: AdjacencyList,
    S: NodeSequencer,
{
    graph: &'a G,
    visited: NodeBitSet,
    sequencer: S,
    stop_at: Option<Node>,
}

/// A BFS traversal iterator over the graph, visiting nodes in
/// breadth-first order from a given starting node.
pub type BFS<'a, G> = TraversalSearch<'a, G, VecDeque<Node>>;

impl<'a, G, S> TraversalSearch<'a, G, S>
where
    G: AdjacencyList,
    S: NodeSequencer,
{
    /// Creates a new traversal iterator starting from `start`.
    /// ** Panics if `start >= n` **
    pub fn new(graph: &'a G, start: Node) -> Self {
        let mut visited = graph.vertex_bitset_unset();
        visited.set_bit(start);
        Self {
            graph,
            visited,
            sequencer: S::init(start),
            stop_at: None,
        }
    }

    /// Sets a stopper node. If this node is reached, the iterator returns it and afterwards only None.
    pub fn stop_at(mut self, stopper: Node) -> Self {
        self.stop_at = Some(stopper);
        self
    }
}

impl<G, S> Iterator for TraversalSearch<'_, G, S>
where
    G: AdjacencyList,
    S: NodeSequencer,
{
    type Item = Node;

    fn next(&mut self) -> Option<Self::Item> {
        let u = self.sequencer.pop()?;

        if self.stop_at == Some(u) {
            while self.sequencer.pop().is_some() {} // drop all
        } else {
            for v in self.graph.neighbors_of(u) {
                if !self.visited.set_bit(v) {
                    self.sequencer.push(v);
                }
            }
        }

        Some(u)
    }

    fn size_hint(&self) -> (usize, Option<usize>) {
        (
            self.sequencer.cardinality(),
            Some(self.graph.len() - self.visited.cardinality() as usize + self.sequencer.cardinality()),
        )
    }
}

/// Depth-first iterator yielding nodes in recursive pre-order.
///
/// Nodes are marked as visited when they are *popped*. Neighbors are pushed in
/// reverse so that the first neighbor is explored first, which reproduces the
/// order of the recursive formulation exactly. A node may therefore sit on the
/// stack more than once; stale copies are skipped.
pub struct PreorderDFS<'a, G>
where
    G: AdjacencyList,
{
    graph: &'a G,
    visited: NodeBitSet,
    stack: Vec<Node>,
    buffer: Vec<Node>,
}

impl<'a, G> PreorderDFS<'a, G>
where
    G: AdjacencyList,
{
    /// Creates a new DFS iterator starting from `start`.
    /// ** Panics if `start >= n` **
    pub fn new(graph: &'a G, start: Node) -> Self {
        assert!(graph.contains_node(start));
        Self {
            graph,
            visited: graph.vertex_bitset_unset(),
            stack: vec![start],
            buffer: Vec::new(),
        }
    }
}

impl<G> Iterator for PreorderDFS<'_, G>
where
    G: AdjacencyList,
{
    type Item = Node;

    fn next(&mut self) -> Option<Self::Item> {
        loop {
            let u = self.stack.pop()?;
            if self.visited.set_bit(u) {
                continue;
            }

            self.buffer.clear();
            self.buffer
                .extend(self.graph.neighbors_of(u).filter(|&v| !self.visited.get_bit(v)));
            self.stack.extend(self.buffer.drain(..).rev());

            return Some(u);
        }
    }
}

/// Traversal algorithms exposed as methods on graphs.
pub trait Traversal: AdjacencyList + LabelledGraph + Sized {
    /// Returns an iterator traversing nodes in breadth-first-search order
    /// ** Panics if `start >= n` **
    fn bfs(&self, start: Node) -> BFS<'_, Self> {
        BFS::new(self, start)
    }

    /// Returns an iterator traversing nodes in depth-first-search pre-order
    /// ** Panics if `start >= n` **
    fn dfs(&self, start: Node) -> PreorderDFS<'_, Self> {
        PreorderDFS::new(self, start)
    }

    /// Returns the BFS order starting at the vertex carrying `label`
    fn bfs_order_from(&self, label: &str) -> Result<Vec<Node>> {
        let start = self.resolve_label(label)?;
        Ok(self.bfs(start).collect())
    }

    /// Returns the DFS pre-order starting at the vertex carrying `label`
    fn dfs_order_from(&self, label: &str) -> Result<Vec<Node>> {
        let start = self.resolve_label(label)?;
        Ok(self.dfs(start).collect())
    }

    /// Returns *true* if there exists a (directed) path from `u` to `v`
    /// ** Panics if `u >= n || v >= n` **
    fn is_node_reachable(&self, u: Node, v: Node) -> bool {
        self.bfs(u).stop_at(v).any(|x| x == v)
    }
}

impl<G> Traversal for G where G: AdjacencyList + LabelledGraph + Sized {}
