use std::fmt::{Debug, Display};

use crate::{Node, Weight};

/// An edge is defined by two nodes/endpoints.
/// Is is up to the user whether an Edge is directed or not.
#[derive(Copy, Clone, PartialEq, Eq, PartialOrd, Ord, Hash)]
pub struct Edge(pub Node, pub Node);

/// We limit the number of edges to `2^32 - 1`.
pub type NumEdges = u32;

impl Display for Edge {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        write!(f, "({},{})", self.0, self.1)
    }
}

impl Debug for Edge {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        <Self as Display>::fmt(self, f)
    }
}

impl Edge {
    /// Normalizes the edge such that the endpoint with smaller value comes first
    pub fn normalized(&self) -> Self {
        Edge(self.0.min(self.1), self.0.max(self.1))
    }

    /// Returns true if the endpoint with smaller index comes first
    pub fn is_normalized(&self) -> bool {
        self.0 <= self.1
    }

    /// Returns true if both endpoints are equal
    pub fn is_loop(&self) -> bool {
        self.0 == self.1
    }

    /// Reverses the edge by switching the endpoints
    pub fn reverse(&self) -> Self {
        Edge(self.1, self.0)
    }

    /// Attaches a weight to the edge
    pub fn with_weight(self, weight: Weight) -> WeightedEdge {
        WeightedEdge(self.0, self.1, weight)
    }
}

impl From<(Node, Node)> for Edge {
    fn from(value: (Node, Node)) -> Self {
        Edge(value.0, value.1)
    }
}

impl From<&(Node, Node)> for Edge {
    fn from(value: &(Node, Node)) -> Self {
        Edge(value.0, value.1)
    }
}

impl From<&Edge> for Edge {
    fn from(value: &Edge) -> Self {
        *value
    }
}

/// An edge `(source, destination, weight)`.
///
/// Weights are floats, so this type is only `PartialEq`. Sort with
/// [`WeightedEdge::cmp_by_weight`] which uses `f64::total_cmp`.
#[derive(Copy, Clone, PartialEq)]
pub struct WeightedEdge(pub Node, pub Node, pub Weight);

impl Display for WeightedEdge {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        write!(f, "({},{};{})", self.0, self.1, self.2)
    }
}

impl Debug for WeightedEdge {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        <Self as Display>::fmt(self, f)
    }
}

impl WeightedEdge {
    /// Returns the source endpoint
    pub fn source(&self) -> Node {
        self.0
    }

    /// Returns the destination endpoint
    pub fn destination(&self) -> Node {
        self.1
    }

    /// Returns the weight of the edge
    pub fn weight(&self) -> Weight {
        self.2
    }

    /// Drops the weight
    pub fn edge(&self) -> Edge {
        Edge(self.0, self.1)
    }

    /// Reverses the edge by switching the endpoints; the weight is kept
    pub fn reverse(&self) -> Self {
        WeightedEdge(self.1, self.0, self.2)
    }

    /// Total order on the weights only
    pub fn cmp_by_weight(&self, other: &Self) -> std::cmp::Ordering {
        self.2.total_cmp(&other.2)
    }
}

impl From<(Node, Node, Weight)> for WeightedEdge {
    fn from(value: (Node, Node, Weight)) -> Self {
        WeightedEdge(value.0, value.1, value.2)
    }
}

impl From<&(Node, Node, Weight)> for WeightedEdge {
    fn from(value: &(Node, Node, Weight)) -> Self {
        WeightedEdge(value.0, value.1, value.2)
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn normalize_and_reverse() {
        assert_eq!(Edge(3, 1).normalized(), Edge(1, 3));
        assert!(Edge(1, 3).is_normalized());
        assert!(Edge(2, 2).is_loop());
        assert_eq!(Edge(1, 3).reverse(), Edge(3, 1));
    }

    #[test]
    fn weighted_edge_accessors() {
        let e = WeightedEdge(0, 4, 2.5);
        assert_eq!(e.edge(), Edge(0, 4));
        assert_eq!(e.reverse(), WeightedEdge(4, 0, 2.5));
        assert_eq!(format!("{e}"), "(0,4;2.5)");

        let mut edges = vec![WeightedEdge(0, 1, 3.0), WeightedEdge(1, 2, -1.0), e];
        edges.sort_by(WeightedEdge::cmp_by_weight);
        assert_eq!(edges[0], WeightedEdge(1, 2, -1.0));
        assert_eq!(edges[2], WeightedEdge(0, 1, 3.0));
    }
}
