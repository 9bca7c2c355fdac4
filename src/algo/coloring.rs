/*!
# Vertex Coloring

Assigns colors to vertices such that no two adjacent vertices share a color.

Provided algorithms:
- **greedy**: vertices in index order, smallest free color,
- **Welsh-Powell**: greedy in order of descending degree (stable),
- **DSATUR**: repeatedly colors the vertex with the most distinct neighbor colors,
- **brute force**: exhaustive search for the smallest number of colors (tiny graphs only).

Adjacency for coloring purposes is *undirected*: `u` and `v` conflict if `(u, v)` or `(v, u)`
is stored. Self-loops are ignored. The degree used by Welsh-Powell and DSATUR is the number of
such conflicting vertices.

Colors in a [`VertexColoring`] start at `1`; `0` is reserved for "uncolored".
*/

use std::{cmp::Reverse, fmt::Display, str::FromStr};

use fxhash::FxHashSet;
use itertools::Itertools;

use super::*;

/// Color of a vertex; `0` means uncolored
pub type Color = u32;

/// Color value reserved for uncolored vertices
pub const UNCOLORED: Color = 0;

/// Result of a coloring algorithm
#[derive(Debug, Clone, PartialEq, Eq, Default)]
pub struct VertexColoring {
    number_of_colors: u32,
    colors: Vec<Color>,
}

impl VertexColoring {
    /// Builds a coloring from colors computed `0`-based
    fn from_zero_based(colors: Vec<Color>) -> Self {
        let number_of_colors = colors.iter().max().map_or(0, |&c| c + 1);
        Self {
            number_of_colors,
            colors: colors.into_iter().map(|c| c + 1).collect(),
        }
    }

    /// Returns the number of distinct colors used
    pub fn number_of_colors(&self) -> u32 {
        self.number_of_colors
    }

    /// Returns the colors of all vertices, indexed by vertex
    pub fn colors(&self) -> &[Color] {
        &self.colors
    }

    /// Returns the color of `u`
    /// ** Panics if `u >= n` **
    pub fn color_of(&self, u: Node) -> Color {
        self.colors[u as usize]
    }

    /// Consumes the coloring and returns the color vector
    pub fn into_colors(self) -> Vec<Color> {
        self.colors
    }

    /// Returns *true* if no two adjacent (distinct) vertices of `graph` share a color
    pub fn is_proper_for<G: AdjacencyList>(&self, graph: &G) -> bool {
        self.colors.len() == graph.len() && is_proper_coloring(graph, &self.colors)
    }
}

/// Returns *true* if for every stored edge `(u, v)` with `u != v` where both endpoints are
/// colored (i.e. not [`UNCOLORED`]), the colors differ.
/// ** Panics if `colors.len() < n` **
pub fn is_proper_coloring<G: AdjacencyList>(graph: &G, colors: &[Color]) -> bool {
    graph.vertices().all(|u| {
        let cu = colors[u as usize];
        cu == UNCOLORED
            || graph
                .neighbors_of(u)
                .all(|v| u == v || colors[v as usize] != cu)
    })
}

/// Selects one of the coloring algorithms
#[derive(Debug, Copy, Clone, PartialEq, Eq, Hash, Default)]
pub enum ColoringStrategy {
    Greedy,
    WelshPowell,
    #[default]
    Dsatur,
    BruteForce,
}

impl Display for ColoringStrategy {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        match self {
            ColoringStrategy::Greedy => write!(f, "greedy"),
            ColoringStrategy::WelshPowell => write!(f, "welsh-powell"),
            ColoringStrategy::Dsatur => write!(f, "dsatur"),
            ColoringStrategy::BruteForce => write!(f, "brute-force"),
        }
    }
}

impl FromStr for ColoringStrategy {
    type Err = std::io::Error;

    fn from_str(s: &str) -> std::io::Result<Self> {
        match s.to_lowercase().replace(['_', ' '], "-").as_str() {
            "greedy" => Ok(ColoringStrategy::Greedy),
            "welsh-powell" | "welshpowell" => Ok(ColoringStrategy::WelshPowell),
            "dsatur" => Ok(ColoringStrategy::Dsatur),
            "brute-force" | "bruteforce" => Ok(ColoringStrategy::BruteForce),
            _ => Err(std::io::Error::new(
                std::io::ErrorKind::InvalidInput,
                format!("Unknown ColoringStrategy: {s}"),
            )),
        }
    }
}

/// Computes for every vertex the sorted set of distinct vertices it conflicts with
fn conflict_neighborhoods<G: AdjacencyList>(graph: &G) -> Vec<Vec<Node>> {
    let mut nbs = vec![Vec::new(); graph.len()];
    for Edge(u, v) in graph.edges(false) {
        if u != v {
            nbs[u as usize].push(v);
            nbs[v as usize].push(u);
        }
    }

    for nb in &mut nbs {
        nb.sort_unstable();
        nb.dedup();
    }
    nbs
}

/// Returns the smallest color `c >= 0` for which `is_forbidden(c)` is *false*
fn smallest_free_color(is_forbidden: impl Fn(Color) -> bool) -> Color {
    let mut c = 0;
    while is_forbidden(c) {
        c += 1;
    }
    c
}

/// Colors vertices greedily in the given order; returns `0`-based colors
fn greedy_in_order(nbs: &[Vec<Node>], order: impl IntoIterator<Item = Node>) -> Vec<Color> {
    let mut colors: Vec<Option<Color>> = vec![None; nbs.len()];
    for u in order {
        let forbidden: FxHashSet<Color> = nbs[u as usize]
            .iter()
            .filter_map(|&v| colors[v as usize])
            .collect();
        colors[u as usize] = Some(smallest_free_color(|c| forbidden.contains(&c)));
    }

    colors.into_iter().map(|c| c.unwrap_or_default()).collect()
}

/// Coloring algorithms exposed as methods on graphs.
pub trait Coloring: AdjacencyList {
    /// Colors vertices in index order `0..n`, each with the smallest color not used by an
    /// already colored neighbor.
    ///
    /// # Examples
    /// ```
    /// use wgraphs::{prelude::*, algo::*};
    ///
    /// let mut g = Graph::with_vertices(false, false, Representation::Matrix, 3);
    /// g.add_edges([(0, 1, 1.0), (1, 2, 1.0), (2, 0, 1.0)]);
    ///
    /// let coloring = g.greedy_coloring();
    /// assert_eq!(coloring.number_of_colors(), 3);
    /// assert_eq!(coloring.colors(), &[1, 2, 3]);
    /// ```
    fn greedy_coloring(&self) -> VertexColoring {
        let nbs = conflict_neighborhoods(self);
        VertexColoring::from_zero_based(greedy_in_order(&nbs, self.vertices()))
    }

    /// Greedy coloring in order of descending degree; ties keep index order
    fn welsh_powell_coloring(&self) -> VertexColoring {
        let nbs = conflict_neighborhoods(self);
        let order = self
            .vertices()
            .sorted_by_key(|&u| Reverse(nbs[u as usize].len()));
        VertexColoring::from_zero_based(greedy_in_order(&nbs, order))
    }

    /// DSATUR: repeatedly picks the uncolored vertex with the highest saturation (number of
    /// distinct colors among its neighbors), ties broken by highest degree and then lowest
    /// index, and assigns it the smallest free color.
    fn dsatur_coloring(&self) -> VertexColoring {
        let nbs = conflict_neighborhoods(self);
        let mut saturation: Vec<FxHashSet<Color>> = vec![FxHashSet::default(); self.len()];
        let mut colors: Vec<Option<Color>> = vec![None; self.len()];

        loop {
            let Some(u) = self
                .vertices()
                .filter(|&u| colors[u as usize].is_none())
                .min_by_key(|&u| {
                    (
                        Reverse(saturation[u as usize].len()),
                        Reverse(nbs[u as usize].len()),
                    )
                })
            else {
                break;
            };

            let forbidden = &saturation[u as usize];
            let c = smallest_free_color(|c| forbidden.contains(&c));
            colors[u as usize] = Some(c);

            for &v in &nbs[u as usize] {
                saturation[v as usize].insert(c);
            }
        }

        VertexColoring::from_zero_based(colors.into_iter().map(|c| c.unwrap_or_default()).collect())
    }

    /// Finds a coloring with the minimum number of colors by trying `k = 1, 2, ..., n`
    /// colors and enumerating all `k^n` assignments in odometer order (the last vertex
    /// changes fastest). The first proper assignment is returned.
    ///
    /// Runs in exponential time; only use on tiny graphs.
    fn brute_force_coloring(&self) -> VertexColoring {
        let n = self.len();
        let conflicts = conflict_neighborhoods(self)
            .into_iter()
            .enumerate()
            .flat_map(|(u, nb)| {
                nb.into_iter()
                    .filter(move |&v| (u as Node) < v)
                    .map(move |v| (u, v as usize))
            })
            .collect_vec();
        let is_proper = |colors: &[Color]| conflicts.iter().all(|&(u, v)| colors[u] != colors[v]);

        for k in 1..=(n as Color) {
            let mut colors = vec![0; n];
            loop {
                if is_proper(&colors) {
                    return VertexColoring::from_zero_based(colors);
                }

                // advance the odometer
                let Some(idx) = colors.iter().rposition(|&c| c + 1 < k) else {
                    break;
                };
                colors[idx] += 1;
                colors[idx + 1..].fill(0);
            }
        }

        // only reached for the empty graph
        VertexColoring::from_zero_based(Vec::new())
    }

    /// Runs the selected coloring algorithm
    fn coloring_with(&self, strategy: ColoringStrategy) -> VertexColoring {
        match strategy {
            ColoringStrategy::Greedy => self.greedy_coloring(),
            ColoringStrategy::WelshPowell => self.welsh_powell_coloring(),
            ColoringStrategy::Dsatur => self.dsatur_coloring(),
            ColoringStrategy::BruteForce => self.brute_force_coloring(),
        }
    }
}

impl<G> Coloring for G where G: AdjacencyList {}

#[cfg(test)]
mod tests {
    use super::*;
    use rand::{Rng, SeedableRng};
    use rand_pcg::Pcg64Mcg;

    const STRATEGIES: [ColoringStrategy; 4] = [
        ColoringStrategy::Greedy,
        ColoringStrategy::WelshPowell,
        ColoringStrategy::Dsatur,
        ColoringStrategy::BruteForce,
    ];

    fn cycle(n: NumNodes, repr: Representation) -> Graph {
        let mut g = Graph::with_vertices(false, false, repr, n);
        g.add_edges((0..n).map(|u| (u, (u + 1) % n, 1.0)));
        g
    }

    #[test]
    fn empty_and_edgeless() {
        for repr in [Representation::Matrix, Representation::List] {
            let g = Graph::new(false, false, repr);
            for s in STRATEGIES {
                let coloring = g.coloring_with(s);
                assert_eq!(coloring.number_of_colors(), 0);
                assert!(coloring.colors().is_empty());
            }

            let g = Graph::with_vertices(false, false, repr, 4);
            for s in STRATEGIES {
                assert_eq!(g.coloring_with(s).colors(), &[1, 1, 1, 1]);
            }
        }
    }

    #[test]
    fn odd_and_even_cycles() {
        for repr in [Representation::Matrix, Representation::List] {
            assert_eq!(cycle(5, repr).brute_force_coloring().number_of_colors(), 3);
            assert_eq!(cycle(6, repr).brute_force_coloring().number_of_colors(), 2);
            assert_eq!(cycle(6, repr).dsatur_coloring().number_of_colors(), 2);
            assert_eq!(cycle(6, repr).greedy_coloring().colors(), &[1, 2, 1, 2, 1, 2]);
        }
    }

    #[test]
    fn brute_force_odometer_order() {
        // path 0 - 1 - 2: first proper 2-coloring in odometer order is (0, 1, 0)
        let mut g = Graph::with_vertices(false, false, Representation::List, 3);
        g.add_edges([(0, 1, 1.0), (1, 2, 1.0)]);
        assert_eq!(g.brute_force_coloring().colors(), &[1, 2, 1]);
    }

    #[test]
    fn welsh_powell_orders_by_degree() {
        // star with center 3 and a pendant path 0 - 4
        let mut g = Graph::with_vertices(false, false, Representation::Matrix, 5);
        g.add_edges([(3, 0, 1.0), (3, 1, 1.0), (3, 2, 1.0), (0, 4, 1.0)]);

        let coloring = g.welsh_powell_coloring();
        assert_eq!(coloring.color_of(3), 1);
        assert_eq!(coloring.colors(), &[2, 2, 2, 1, 1]);
    }

    #[test]
    fn dsatur_prefers_saturation() {
        // crown graph on 3 + 3 vertices with interleaved indices (a 6-cycle 0-3-4-1-2-5)
        for repr in [Representation::Matrix, Representation::List] {
            let mut g = Graph::with_vertices(false, false, repr, 6);
            g.add_edges([(0, 3, 1.0), (0, 5, 1.0), (2, 1, 1.0), (2, 5, 1.0), (4, 1, 1.0), (4, 3, 1.0)]);

            // all degrees are equal, so index order alone needs three colors
            assert_eq!(g.greedy_coloring().colors(), &[1, 1, 2, 2, 3, 3]);
            assert_eq!(g.welsh_powell_coloring().colors(), &[1, 1, 2, 2, 3, 3]);

            // 0, then 3 (saturated, lower index than 5), 4, 1, 2, 5
            let coloring = g.dsatur_coloring();
            assert_eq!(coloring.colors(), &[1, 2, 1, 2, 1, 2]);
            assert_eq!(coloring.number_of_colors(), 2);
        }
    }

    #[test]
    fn dsatur_breaks_ties_by_degree() {
        // triangle 0-1-3 with pendant 2 attached to the highest degree vertex 3
        for repr in [Representation::Matrix, Representation::List] {
            let mut g = Graph::with_vertices(false, false, repr, 4);
            g.add_edges([(3, 0, 1.0), (3, 1, 1.0), (3, 2, 1.0), (0, 1, 1.0)]);

            assert_eq!(g.greedy_coloring().colors(), &[1, 2, 1, 3]);

            // 3 first by degree, then 0 over 2 (same saturation, higher degree), then 1, 2
            assert_eq!(g.dsatur_coloring().colors(), &[2, 3, 2, 1]);
        }
    }

    #[test]
    fn directed_edges_conflict_both_ways() {
        let mut g = Graph::with_vertices(true, false, Representation::List, 3);
        g.add_edges([(0, 1, 1.0), (2, 1, 1.0), (1, 1, 1.0)]);

        for s in STRATEGIES {
            let coloring = g.coloring_with(s);
            assert!(coloring.is_proper_for(&g));
            assert_eq!(coloring.number_of_colors(), 2);
        }
    }

    #[test]
    fn strategy_from_str() {
        assert_eq!("DSATUR".parse::<ColoringStrategy>().unwrap(), ColoringStrategy::Dsatur);
        assert_eq!(
            "welsh_powell".parse::<ColoringStrategy>().unwrap(),
            ColoringStrategy::WelshPowell
        );
        assert!("random".parse::<ColoringStrategy>().is_err());
        for s in STRATEGIES {
            assert_eq!(s.to_string().parse::<ColoringStrategy>().unwrap(), s);
        }
    }

    #[test]
    fn improper_coloring_is_detected() {
        let g = cycle(4, Representation::Matrix);
        assert!(!is_proper_coloring(&g, &[1, 1, 2, 2]));
        assert!(is_proper_coloring(&g, &[1, 0, 1, 0]));
        assert!(!VertexColoring::from_zero_based(vec![0, 1, 0]).is_proper_for(&g));
    }

    #[test]
    fn random_graphs() {
        let rng = &mut Pcg64Mcg::seed_from_u64(11);

        for _ in 0..40 {
            let n = rng.random_range(1..8);
            let directed = rng.random_bool(0.3);
            let edges = (0..rng.random_range(0..(2 * n)))
                .map(|_| (rng.random_range(0..n), rng.random_range(0..n), 1.0))
                .collect_vec();

            let results = [Representation::Matrix, Representation::List].map(|repr| {
                let mut g = Graph::with_vertices(directed, false, repr, n);
                g.add_edges(edges.iter());

                let colorings = STRATEGIES.map(|s| g.coloring_with(s));
                for c in &colorings {
                    assert!(c.is_proper_for(&g));
                    assert_eq!(c.number_of_colors(), *c.colors().iter().max().unwrap());
                }

                let optimum = colorings[3].number_of_colors();
                assert!(colorings.iter().all(|c| optimum <= c.number_of_colors()));
                colorings
            });

            // neighbor order does not influence any algorithm
            assert_eq!(results[0], results[1]);
        }
    }
}
