use super::*;

/// Dense `n x n` weight matrix. A cell holding [`NO_EDGE`] means "no edge".
///
/// Edge queries are `O(1)`, neighborhood iteration is `O(n)` and always yields
/// neighbors in ascending order.
#[derive(Debug, Clone, Default)]
pub struct AdjMatrix {
    rows: Vec<Vec<Weight>>,
}

impl WeightStorage for AdjMatrix {
    fn number_of_nodes(&self) -> NumNodes {
        self.rows.len() as NumNodes
    }

    fn push_node(&mut self) {
        for row in &mut self.rows {
            row.push(NO_EDGE);
        }
        let n = self.rows.len() + 1;
        self.rows.push(vec![NO_EDGE; n]);
    }

    fn remove_node(&mut self, u: Node) {
        self.rows.remove(u as usize);
        for row in &mut self.rows {
            row.remove(u as usize);
        }
    }

    fn set_weight(&mut self, u: Node, v: Node, weight: Weight) {
        self.rows[u as usize][v as usize] = weight;
    }

    fn weight(&self, u: Node, v: Node) -> Weight {
        self.rows[u as usize][v as usize]
    }

    fn weighted_neighbors_of(&self, u: Node) -> impl Iterator<Item = (Node, Weight)> + '_ {
        self.rows[u as usize]
            .iter()
            .enumerate()
            .filter(|&(_, &w)| w != NO_EDGE)
            .map(|(v, &w)| (v as Node, w))
    }
}
