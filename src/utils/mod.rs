/*!
# Utilities

Provides helper structures used by the algorithms, currently the
[`DisjointSetUnion`](self::dsu::DisjointSetUnion) backing Kruskal's algorithm.
*/

pub mod dsu;

pub use dsu::DisjointSetUnion;
