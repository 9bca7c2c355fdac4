/*!
# Disjoint Set Union

Union-find over the nodes `0..n` with path compression on `find`.
`union(a, b)` always attaches the root of `b` below the root of `a`; there is no
union-by-rank, which is fine for the small graphs this crate targets.
*/

use crate::*;

/// Disjoint set union (union-find) over `0..n`
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct DisjointSetUnion {
    parent: Vec<Node>,
    number_of_sets: NumNodes,
}

impl DisjointSetUnion {
    /// Creates `n` singleton sets
    pub fn new(n: NumNodes) -> Self {
        Self {
            parent: (0..n).collect(),
            number_of_sets: n,
        }
    }

    /// Returns the number of elements
    pub fn len(&self) -> usize {
        self.parent.len()
    }

    /// Returns *true* if there are no elements
    pub fn is_empty(&self) -> bool {
        self.parent.is_empty()
    }

    /// Returns the number of disjoint sets
    pub fn number_of_sets(&self) -> NumNodes {
        self.number_of_sets
    }

    /// Returns the representative of the set containing `x` and points every
    /// node on the way directly to it.
    /// ** Panics if `x >= n` **
    pub fn find(&mut self, x: Node) -> Node {
        let mut root = x;
        while self.parent[root as usize] != root {
            root = self.parent[root as usize];
        }

        let mut u = x;
        while u != root {
            let next = self.parent[u as usize];
            self.parent[u as usize] = root;
            u = next;
        }

        root
    }

    /// Merges the sets of `a` and `b`. Returns *false* if they were already the same set.
    /// ** Panics if `a >= n || b >= n` **
    pub fn union(&mut self, a: Node, b: Node) -> bool {
        let ra = self.find(a);
        let rb = self.find(b);
        if ra == rb {
            return false;
        }

        self.parent[rb as usize] = ra;
        self.number_of_sets -= 1;
        true
    }

    /// Returns *true* if `a` and `b` belong to the same set
    /// ** Panics if `a >= n || b >= n` **
    pub fn same_set(&mut self, a: Node, b: Node) -> bool {
        self.find(a) == self.find(b)
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn singletons() {
        let mut dsu = DisjointSetUnion::new(4);
        assert_eq!(dsu.len(), 4);
        assert_eq!(dsu.number_of_sets(), 4);
        for u in 0..4 {
            assert_eq!(dsu.find(u), u);
        }
        assert!(DisjointSetUnion::new(0).is_empty());
    }

    #[test]
    fn union_attaches_second_root() {
        let mut dsu = DisjointSetUnion::new(5);
        assert!(dsu.union(0, 1));
        assert!(dsu.union(2, 3));
        assert!(dsu.union(3, 1));
        assert!(!dsu.union(0, 2));

        assert_eq!(dsu.find(1), 2);
        assert_eq!(dsu.find(0), 2);
        assert!(dsu.same_set(0, 3));
        assert!(!dsu.same_set(0, 4));
        assert_eq!(dsu.number_of_sets(), 2);
    }

    #[test]
    fn path_compression() {
        let mut dsu = DisjointSetUnion::new(6);
        // chain 0 -> 1 -> 2 -> 3 -> 4 -> 5
        for u in 1..6 {
            dsu.union(u, u - 1);
        }
        assert_eq!(dsu.parent[0], 1);

        assert_eq!(dsu.find(0), 5);
        assert!(dsu.parent.iter().all(|&p| p == 5));
    }
}
