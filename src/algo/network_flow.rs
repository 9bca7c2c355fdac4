/*!
# Maximum Flow

This module provides the **Ford-Fulkerson** method for computing a maximum `(s, t)`-flow
and a **local search** that tries to increase the maximum flow by reversing single edges.

## Residual network
Ford-Fulkerson works on a private clone of the input graph whose edge weights are
interpreted as remaining capacities. Pushing `f` units along `(u, v)` decreases the
capacity of `(u, v)` by `f` and increases (or creates) `(v, u)` by `f` via
[`ResidualCapacity::add_flow`]. For undirected graphs both directions start with the
full capacity of the edge.

Augmenting paths are found by a depth-first search (explicit stack) over edges with
strictly positive residual capacity. Edges with non-positive weight never carry flow.

## Local search
[`LocalSearch`] starts from the input network and repeatedly reverses a uniformly random
edge `(u, v, c)` into `(v, u, c)`. A perturbed network is kept only if its maximum flow is
strictly larger. The search is a heuristic: it only guarantees that the reported flow never
decreases.
*/

use itertools::Itertools;
use rand::Rng;
use tracing::debug;

use super::*;

/// Flow values are reported as integers.
///
/// Augmentations are summed as [`Weight`] and only the final total is truncated toward zero,
/// so two augmenting paths of `1.5` yield a flow of `3` rather than `2`.
pub type Flow = i64;

/// Default number of consecutive non-improving trials after which [`LocalSearch`] stops
pub const DEFAULT_STAGNATION_LIMIT: usize = 1000;

/// A single augmentation: the path `source -> ... -> sink` and the flow pushed along it
#[derive(Debug, Clone, PartialEq)]
pub struct AugmentingPath {
    pub nodes: Vec<Node>,
    pub bottleneck: Weight,
}

/// Ford-Fulkerson solver owning its residual network.
///
/// Iterating the solver performs one augmentation per step and yields the augmenting
/// path. The iterator terminates when the sink is no longer reachable in the residual
/// network, i.e. when the flow is maximum.
///
/// # Examples
/// ```
/// use wgraphs::{prelude::*, algo::*};
///
/// let mut g = Graph::with_vertices(true, true, Representation::Matrix, 4);
/// g.add_edges([(0, 1, 3.0), (0, 2, 2.0), (1, 2, 1.0), (1, 3, 2.0), (2, 3, 3.0)]);
///
/// let mut solver = FordFulkerson::new(&g, 0, 3).unwrap();
/// assert_eq!(solver.max_flow(), 5);
/// assert_eq!(solver.residual_network().capacity(0, 1), 0.0);
/// ```
pub struct FordFulkerson<G>
where
    G: ResidualCapacity,
{
    residual: G,
    source: Node,
    sink: Node,
    parent: Vec<Node>,
    total_flow: Weight,
}

impl<G> FordFulkerson<G>
where
    G: ResidualCapacity + Clone,
{
    /// Creates a new solver on a clone of `graph`.
    ///
    /// Returns [`GraphError::NodeOutOfRange`] if `source` or `sink` are not valid nodes.
    pub fn new(graph: &G, source: Node, sink: Node) -> Result<Self> {
        let source = graph.checked_node(source)?;
        let sink = graph.checked_node(sink)?;

        Ok(Self {
            residual: graph.clone(),
            source,
            sink,
            parent: vec![INVALID_NODE; graph.len()],
            total_flow: 0.0,
        })
    }
}

impl<G> FordFulkerson<G>
where
    G: ResidualCapacity,
{
    /// Searches an augmenting path and stores it in the parent array.
    /// Returns *true* if the sink was reached.
    ///
    /// Nodes are marked when popped and neighbors are pushed in reverse, so the search
    /// explores in the same order as a recursive DFS.
    fn dfs(&mut self) -> bool {
        let mut visited = self.residual.vertex_bitset_unset();
        let mut stack = vec![(self.source, self.source)];
        let mut buffer = Vec::new();

        while let Some((parent, u)) = stack.pop() {
            if visited.set_bit(u) {
                continue;
            }

            self.parent[u as usize] = parent;
            if u == self.sink {
                return true;
            }

            buffer.clear();
            buffer.extend(
                self.residual
                    .weighted_neighbors_of(u)
                    .filter(|&(v, c)| c > 0.0 && !visited.get_bit(v))
                    .map(|(v, _)| (u, v)),
            );
            stack.extend(buffer.drain(..).rev());
        }

        false
    }

    /// Runs the solver to completion and returns the value of a maximum flow
    pub fn max_flow(&mut self) -> Flow {
        self.by_ref().for_each(drop);
        self.total_flow as Flow
    }

    /// Returns the flow pushed so far (not truncated)
    pub fn total_flow(&self) -> Weight {
        self.total_flow
    }

    /// Returns the current residual network
    pub fn residual_network(&self) -> &G {
        &self.residual
    }

    /// Consumes the solver and returns the residual network
    pub fn into_residual_network(self) -> G {
        self.residual
    }
}

impl<G> Iterator for FordFulkerson<G>
where
    G: ResidualCapacity,
{
    type Item = AugmentingPath;

    fn next(&mut self) -> Option<Self::Item> {
        if self.source == self.sink || !self.dfs() {
            return None;
        }

        let mut nodes = vec![self.sink];
        let mut v = self.sink;
        while v != self.source {
            v = self.parent[v as usize];
            nodes.push(v);
        }
        nodes.reverse();

        let bottleneck = nodes
            .iter()
            .tuple_windows()
            .map(|(&u, &v)| self.residual.capacity(u, v))
            .fold(Weight::INFINITY, Weight::min);

        for (&u, &v) in nodes.iter().tuple_windows() {
            self.residual.add_flow(u, v, -bottleneck);
            self.residual.add_flow(v, u, bottleneck);
        }

        self.total_flow += bottleneck;
        debug!(
            bottleneck,
            length = nodes.len() - 1,
            total = self.total_flow,
            "augmenting path"
        );

        Some(AugmentingPath { nodes, bottleneck })
    }
}

/// Result of a [`LocalSearch`]
#[derive(Debug, Clone)]
pub struct FlowImprovement<G> {
    /// Maximum flow of the unmodified input network
    pub initial_flow: Flow,
    /// Best maximum flow found; never smaller than `initial_flow`
    pub best_flow: Flow,
    /// Network achieving `best_flow`
    pub network: G,
    /// Number of perturbations that were evaluated
    pub trials: usize,
}

impl<G> FlowImprovement<G> {
    /// Returns *true* if the local search found a strictly better network
    pub fn improved(&self) -> bool {
        self.best_flow > self.initial_flow
    }
}

/// Hill-climbing over single edge reversals.
///
/// # Examples
/// ```
/// use wgraphs::{prelude::*, algo::*};
/// use rand::SeedableRng;
/// use rand_pcg::Pcg64Mcg;
///
/// // 0 -> 1 <- 2: reversing (2, 1) opens the path 0 -> 1 -> 2
/// let mut g = Graph::with_vertices(true, true, Representation::List, 3);
/// g.add_edges([(0, 1, 4.0), (2, 1, 3.0)]);
///
/// let rng = &mut Pcg64Mcg::seed_from_u64(0);
/// let result = LocalSearch::new().iterations(100).run(&g, 0, 2, rng).unwrap();
/// assert_eq!(result.initial_flow, 0);
/// assert_eq!(result.best_flow, 3);
/// ```
#[derive(Debug, Clone, Copy)]
pub struct LocalSearch {
    iterations: usize,
    stagnation_limit: usize,
}

impl Default for LocalSearch {
    fn default() -> Self {
        Self {
            iterations: 100,
            stagnation_limit: DEFAULT_STAGNATION_LIMIT,
        }
    }
}

impl LocalSearch {
    /// Creates a local search with `100` iterations and the default stagnation limit
    pub fn new() -> Self {
        Self::default()
    }

    /// Sets the maximum number of perturbations tried
    pub fn iterations(mut self, iterations: usize) -> Self {
        self.iterations = iterations;
        self
    }

    /// Sets the number of consecutive non-improving perturbations after which the search stops
    pub fn stagnation_limit(mut self, stagnation_limit: usize) -> Self {
        self.stagnation_limit = stagnation_limit;
        self
    }

    /// Runs the local search on `graph`.
    ///
    /// Returns [`GraphError::NodeOutOfRange`] if `source` or `sink` are not valid nodes.
    pub fn run<G, R>(&self, graph: &G, source: Node, sink: Node, rng: &mut R) -> Result<FlowImprovement<G>>
    where
        G: ResidualCapacity + GraphEdgeEditing + Clone,
        R: Rng,
    {
        let initial_flow = FordFulkerson::new(graph, source, sink)?.max_flow();
        let mut best_flow = initial_flow;
        let mut best = graph.clone();
        let mut stagnation = 0;
        let mut trials = 0;

        for iteration in 0..self.iterations {
            let edges = best.unique_weighted_edges().collect_vec();
            if edges.is_empty() {
                break;
            }

            let WeightedEdge(u, v, c) = edges[rng.random_range(0..edges.len())];
            let mut candidate = best.clone();
            candidate.remove_edge(u, v);
            candidate.add_edge(v, u, c);

            let flow = FordFulkerson::new(&candidate, source, sink)?.max_flow();
            trials += 1;
            if flow > best_flow {
                debug!(iteration, from = best_flow, to = flow, "reversing ({u},{v}) improves flow");
                best_flow = flow;
                best = candidate;
                stagnation = 0;
            } else {
                stagnation += 1;
                if stagnation >= self.stagnation_limit {
                    break;
                }
            }
        }

        Ok(FlowImprovement {
            initial_flow,
            best_flow,
            network: best,
            trials,
        })
    }
}

/// Flow algorithms exposed as methods on graphs.
pub trait MaxFlow: ResidualCapacity + GraphEdgeEditing + LabelledGraph + Clone {
    /// Computes the value of a maximum `(source, sink)`-flow with Ford-Fulkerson.
    /// The graph itself is not modified. `source == sink` yields `0`.
    fn ford_fulkerson(&self, source: Node, sink: Node) -> Result<Flow> {
        Ok(FordFulkerson::new(self, source, sink)?.max_flow())
    }

    /// Like [`MaxFlow::ford_fulkerson`] but addresses source and sink by label
    fn ford_fulkerson_between(&self, source: &str, sink: &str) -> Result<Flow> {
        self.ford_fulkerson(self.resolve_label(source)?, self.resolve_label(sink)?)
    }

    /// Runs a [`LocalSearch`] with `iterations` trials and the default stagnation limit
    fn local_search<R: Rng>(
        &self,
        source: Node,
        sink: Node,
        iterations: usize,
        rng: &mut R,
    ) -> Result<FlowImprovement<Self>> {
        LocalSearch::new()
            .iterations(iterations)
            .run(self, source, sink, rng)
    }
}

impl<G> MaxFlow for G where G: ResidualCapacity + GraphEdgeEditing + LabelledGraph + Clone {}

#[cfg(test)]
mod tests {
    use super::*;
    use rand::SeedableRng;
    use rand_pcg::Pcg64Mcg;

    /// Minimum `(s, t)`-cut by enumerating all vertex subsets
    fn brute_force_min_cut(graph: &Graph, s: Node, t: Node) -> Weight {
        let n = graph.number_of_nodes();
        (0u32..(1 << n))
            .filter(|mask| (mask >> s) & 1 == 1 && (mask >> t) & 1 == 0)
            .map(|mask| {
                graph
                    .weighted_edges(false)
                    .filter(|&WeightedEdge(u, v, w)| {
                        w > 0.0 && (mask >> u) & 1 == 1 && (mask >> v) & 1 == 0
                    })
                    .map(|e| e.weight())
                    .sum::<Weight>()
            })
            .fold(Weight::INFINITY, Weight::min)
    }

    fn random_network(rng: &mut Pcg64Mcg, directed: bool, weighted: bool, repr: Representation) -> Graph {
        let n = rng.random_range(2..8);
        let mut graph = Graph::with_vertices(directed, weighted, repr, n);
        for _ in 0..rng.random_range(0..(3 * n)) {
            let u = rng.random_range(0..n);
            let v = rng.random_range(0..n);
            graph.add_edge(u, v, rng.random_range(1..10) as Weight);
        }
        graph
    }

    #[test]
    fn classic_network() {
        for repr in [Representation::Matrix, Representation::List] {
            let mut g = Graph::new(true, true, repr);
            for label in ["s", "a", "b", "c", "d", "t"] {
                g.add_vertex(label);
            }
            g.add_edges([
                (0, 1, 16.0),
                (0, 2, 13.0),
                (1, 2, 10.0),
                (2, 1, 4.0),
                (1, 3, 12.0),
                (3, 2, 9.0),
                (2, 4, 14.0),
                (4, 3, 7.0),
                (3, 5, 20.0),
                (4, 5, 4.0),
            ]);

            assert_eq!(g.ford_fulkerson(0, 5), Ok(23));
            assert_eq!(g.ford_fulkerson_between("s", "t"), Ok(23));
            assert_eq!(g.ford_fulkerson(5, 0), Ok(0));

            // input is untouched
            assert_eq!(g.edge_weight(0, 1), 16.0);
            assert!(!g.has_edge(1, 0));
        }
    }

    #[test]
    fn degenerate_arguments() {
        let mut g = Graph::with_vertices(true, true, Representation::List, 2);
        g.add_edge(0, 1, 2.0);

        assert_eq!(g.ford_fulkerson(0, 0), Ok(0));
        assert_eq!(
            g.ford_fulkerson(0, 2),
            Err(GraphError::NodeOutOfRange {
                node: 2,
                number_of_nodes: 2
            })
        );
        assert_eq!(
            g.ford_fulkerson_between("0", "x"),
            Err(GraphError::UnknownLabel("x".into()))
        );
    }

    #[test]
    fn fractional_flow_is_truncated() {
        let mut g = Graph::with_vertices(true, true, Representation::Matrix, 3);
        g.add_edges([(0, 1, 1.5), (0, 2, 1.25), (1, 2, 2.0)]);

        let mut solver = FordFulkerson::new(&g, 0, 2).unwrap();
        assert_eq!(solver.max_flow(), 2);
        assert_eq!(solver.total_flow(), 2.75);

        // two disjoint paths of 1.5 are summed before truncation
        let mut g = Graph::with_vertices(true, true, Representation::List, 4);
        g.add_edges([(0, 1, 1.5), (1, 3, 1.5), (0, 2, 1.5), (2, 3, 1.5)]);
        assert_eq!(g.ford_fulkerson(0, 3), Ok(3));
    }

    #[test]
    fn augmenting_paths_respect_residual_capacities() {
        let mut g = Graph::with_vertices(true, true, Representation::List, 4);
        g.add_edges([(0, 1, 1.0), (1, 3, 1.0), (0, 2, 1.0), (2, 3, 1.0), (1, 2, 1.0)]);

        let paths = FordFulkerson::new(&g, 0, 3).unwrap().collect_vec();
        assert_eq!(paths.len(), 2);
        for path in &paths {
            assert_eq!(path.nodes.first(), Some(&0));
            assert_eq!(path.nodes.last(), Some(&3));
            assert_eq!(path.bottleneck, 1.0);
        }
    }

    #[test]
    fn undirected_and_unweighted() {
        // unweighted: every edge has capacity 1, so the flow counts edge-disjoint paths
        let mut g = Graph::with_vertices(false, false, Representation::Matrix, 4);
        g.add_edges([(0, 1, 5.0), (0, 2, 5.0), (1, 3, 5.0), (2, 3, 5.0), (1, 2, 5.0)]);
        assert_eq!(g.ford_fulkerson(0, 3), Ok(2));
        assert_eq!(g.ford_fulkerson(3, 0), Ok(2));
    }

    #[test]
    fn matches_min_cut() {
        let rng = &mut Pcg64Mcg::seed_from_u64(21);

        for _ in 0..100 {
            let directed = rng.random_bool(0.7);
            let weighted = rng.random_bool(0.7);
            for repr in [Representation::Matrix, Representation::List] {
                let g = random_network(rng, directed, weighted, repr);
                let s = rng.random_range(0..g.number_of_nodes());
                let t = rng.random_range(0..g.number_of_nodes());
                if s == t {
                    continue;
                }

                let flow = g.ford_fulkerson(s, t).unwrap();
                assert_eq!(flow, brute_force_min_cut(&g, s, t) as Flow);
            }
        }
    }

    #[test]
    fn local_search_reverses_blocking_edge() {
        for repr in [Representation::Matrix, Representation::List] {
            let mut g = Graph::with_vertices(true, true, repr, 3);
            g.add_edges([(0, 1, 4.0), (2, 1, 3.0)]);

            let rng = &mut Pcg64Mcg::seed_from_u64(3);
            let result = g.local_search(0, 2, 200, rng).unwrap();

            assert_eq!(result.initial_flow, 0);
            assert_eq!(result.best_flow, 3);
            assert!(result.improved());
            assert!(result.network.has_edge(1, 2));
            assert_eq!(result.network.ford_fulkerson(0, 2), Ok(3));

            // input is untouched
            assert!(g.has_edge(2, 1));
        }
    }

    #[test]
    fn local_search_never_decreases() {
        let rng = &mut Pcg64Mcg::seed_from_u64(22);

        for _ in 0..30 {
            let g = random_network(rng, true, true, Representation::List);
            let n = g.number_of_nodes();
            let (s, t) = (0, n - 1);

            let result = LocalSearch::new()
                .iterations(50)
                .stagnation_limit(20)
                .run(&g, s, t, rng)
                .unwrap();

            assert_eq!(result.initial_flow, g.ford_fulkerson(s, t).unwrap());
            assert!(result.best_flow >= result.initial_flow);
            assert_eq!(result.network.ford_fulkerson(s, t), Ok(result.best_flow));
        }
    }

    #[test]
    fn local_search_stops_without_edges() {
        let g = Graph::with_vertices(true, true, Representation::Matrix, 3);
        let rng = &mut Pcg64Mcg::seed_from_u64(0);

        let result = g.local_search(0, 2, 1_000_000, rng).unwrap();
        assert_eq!(result.best_flow, 0);
        assert_eq!(result.trials, 0);
        assert!(!result.improved());
        assert!(g.local_search(0, 3, 10, rng).is_err());
    }

    #[test]
    fn local_search_stops_after_stagnation() {
        // every single reversal cuts the only path 0 -> 1 -> 2
        for repr in [Representation::Matrix, Representation::List] {
            let mut g = Graph::with_vertices(true, true, repr, 3);
            g.add_edges([(0, 1, 2.0), (1, 2, 1.0)]);
            let rng = &mut Pcg64Mcg::seed_from_u64(9);

            let result = LocalSearch::new()
                .iterations(10_000)
                .stagnation_limit(5)
                .run(&g, 0, 2, rng)
                .unwrap();
            assert_eq!(result.trials, 5);
            assert_eq!(result.best_flow, 1);
            assert!(!result.improved());

            let result = LocalSearch::new().iterations(3).run(&g, 0, 2, rng).unwrap();
            assert_eq!(result.trials, 3);

            let result = g.local_search(0, 2, 10_000, rng).unwrap();
            assert_eq!(result.trials, DEFAULT_STAGNATION_LIMIT);
        }
    }
}
