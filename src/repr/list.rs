use itertools::Itertools;

use super::*;

/// Outgoing neighbors of a single vertex as `(destination, weight)` pairs in insertion order.
#[derive(Debug, Clone, Default)]
pub struct WeightedNeighborhood(pub Vec<(Node, Weight)>);

impl WeightedNeighborhood {
    /// Returns the position of the entry for `v`
    fn position_of(&self, v: Node) -> Option<usize> {
        self.0.iter().find_position(|&&(x, _)| x == v).map(|(pos, _)| pos)
    }

    /// Sets the weight of `v`, removing the entry if `weight == NO_EDGE`.
    /// An existing entry keeps its position.
    fn set(&mut self, v: Node, weight: Weight) {
        match (self.position_of(v), weight == NO_EDGE) {
            (Some(pos), true) => {
                // `remove` (not `swap_remove`) keeps the insertion order intact
                self.0.remove(pos);
            }
            (Some(pos), false) => self.0[pos].1 = weight,
            (None, true) => {}
            (None, false) => self.0.push((v, weight)),
        }
    }

    fn get(&self, v: Node) -> Option<Weight> {
        self.position_of(v).map(|pos| self.0[pos].1)
    }
}

/// Adjacency list: one [`WeightedNeighborhood`] per vertex.
///
/// Edge queries are `O(deg(u))`, neighborhood iteration is `O(deg(u))` and yields
/// neighbors in insertion order.
#[derive(Debug, Clone, Default)]
pub struct AdjList {
    nbs: Vec<WeightedNeighborhood>,
}

impl WeightStorage for AdjList {
    fn number_of_nodes(&self) -> NumNodes {
        self.nbs.len() as NumNodes
    }

    fn push_node(&mut self) {
        self.nbs.push(WeightedNeighborhood::default());
    }

    fn remove_node(&mut self, u: Node) {
        self.nbs.remove(u as usize);
        for nb in &mut self.nbs {
            nb.0.retain(|&(v, _)| v != u);
            for (v, _) in &mut nb.0 {
                if *v > u {
                    *v -= 1;
                }
            }
        }
    }

    fn set_weight(&mut self, u: Node, v: Node, weight: Weight) {
        self.nbs[u as usize].set(v, weight);
    }

    fn weight(&self, u: Node, v: Node) -> Weight {
        self.nbs[u as usize].get(v).unwrap_or(NO_EDGE)
    }

    fn has_edge(&self, u: Node, v: Node) -> bool {
        self.nbs[u as usize].position_of(v).is_some()
    }

    fn degree_of(&self, u: Node) -> NumNodes {
        self.nbs[u as usize].0.len() as NumNodes
    }

    fn weighted_neighbors_of(&self, u: Node) -> impl Iterator<Item = (Node, Weight)> + '_ {
        self.nbs[u as usize].0.iter().copied()
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn insertion_order_and_overwrite() {
        let mut l = AdjList::default();
        (0..4).for_each(|_| l.push_node());
        l.set_weight(0, 3, 1.0);
        l.set_weight(0, 1, 2.0);
        l.set_weight(0, 3, 5.0);

        assert_eq!(l.neighbors_of(0).collect_vec(), vec![3, 1]);
        assert_eq!(l.weight(0, 3), 5.0);
        assert_eq!(l.degree_of(0), 2);

        l.set_weight(0, 3, NO_EDGE);
        assert_eq!(l.neighbors_of(0).collect_vec(), vec![1]);
        assert_eq!(l.weight(0, 3), NO_EDGE);
    }

    #[test]
    fn remove_node_shifts_destinations() {
        let mut l = AdjList::default();
        (0..4).for_each(|_| l.push_node());
        l.set_weight(0, 1, 1.0);
        l.set_weight(0, 3, 2.0);
        l.set_weight(3, 2, 3.0);
        l.set_weight(2, 1, 4.0);

        l.remove_node(1);
        assert_eq!(l.number_of_nodes(), 3);
        assert_eq!(l.weighted_neighbors_of(0).collect_vec(), vec![(2, 2.0)]);
        assert_eq!(l.weighted_neighbors_of(2).collect_vec(), vec![(1, 3.0)]);
        assert_eq!(l.degree_of(1), 0);
    }
}
