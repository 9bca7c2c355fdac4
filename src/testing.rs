/// Generates tests that run identical operation sequences against a matrix- and a
/// list-backed [`Graph`](crate::repr::Graph) and compare every observable query.
///
/// Usage: `test_graph_ops!(module_name, directed, weighted);`
macro_rules! test_graph_ops {
    ($env:ident, $directed:literal, $weighted:literal) => {
        #[cfg(test)]
        mod $env {
            use crate::{ops::*, repr::*, *};
            use itertools::Itertools;
            use rand::{Rng, SeedableRng};
            use rand_pcg::Pcg64Mcg;

            /// Creates a matrix- and a list-graph, each with `n` vertices labelled `0..n`
            fn new_pair(n: NumNodes) -> [Graph; 2] {
                [Representation::Matrix, Representation::List]
                    .map(|r| Graph::with_vertices($directed, $weighted, r, n))
            }

            /// Random weight in `[-9, 9]`; every tenth weight on average is [`NO_EDGE`]
            fn random_weight<R: Rng>(rng: &mut R) -> Weight {
                if rng.random_bool(0.1) {
                    return NO_EDGE;
                }
                let w = rng.random_range(1..=9) as Weight;
                if rng.random_bool(0.2) { -w } else { w }
            }

            /// Edges as `(source label, destination label, weight)`, sorted by labels
            fn labelled_edges(graph: &Graph) -> Vec<(String, String, Weight)> {
                graph
                    .weighted_edges(false)
                    .map(|WeightedEdge(u, v, w)| {
                        (
                            graph.vertex_label(u).unwrap().to_string(),
                            graph.vertex_label(v).unwrap().to_string(),
                            w,
                        )
                    })
                    .sorted_by(|a, b| (&a.0, &a.1).cmp(&(&b.0, &b.1)))
                    .collect_vec()
            }

            fn assert_equivalent(a: &Graph, b: &Graph) {
                assert_eq!(a.number_of_nodes(), b.number_of_nodes());
                assert_eq!(a.labels().collect_vec(), b.labels().collect_vec());
                assert_eq!(a.number_of_edges(), b.number_of_edges());

                for u in a.vertices() {
                    let label = a.vertex_label(u).unwrap();
                    assert_eq!(a.vertex_index(label), Some(u));
                    assert_eq!(b.vertex_index(label), Some(u));

                    assert_eq!(a.degree_of(u), b.degree_of(u));
                    assert_eq!(
                        a.neighbors_of(u).sorted().collect_vec(),
                        b.neighbors_of(u).sorted().collect_vec()
                    );

                    for v in a.vertices() {
                        assert_eq!(a.has_edge(u, v), b.has_edge(u, v));
                        assert_eq!(a.edge_weight(u, v), b.edge_weight(u, v));

                        if !$directed {
                            assert_eq!(a.edge_weight(u, v), a.edge_weight(v, u));
                            assert_eq!(b.edge_weight(u, v), b.edge_weight(v, u));
                        }
                    }
                }
            }

            #[test]
            fn added_edges_read_back() {
                let rng = &mut Pcg64Mcg::seed_from_u64(3);

                for n in [5 as NumNodes, 10, 20] {
                    let mut graphs = new_pair(n);

                    for _ in 0..(n * 3) {
                        let u = rng.random_range(0..n);
                        let v = rng.random_range(0..n);
                        let w = random_weight(rng);
                        let expected = if $weighted { w } else { UNIT_WEIGHT };

                        for graph in &mut graphs {
                            assert!(graph.add_edge(u, v, w));
                            assert_eq!(graph.has_edge(u, v), expected != NO_EDGE);
                            assert_eq!(graph.edge_weight(u, v), expected);
                        }
                    }

                    assert_equivalent(&graphs[0], &graphs[1]);
                }
            }

            #[test]
            fn random_operations_agree() {
                let rng = &mut Pcg64Mcg::seed_from_u64(4);

                for n in [4 as NumNodes, 10, 25] {
                    let mut graphs = new_pair(n);
                    let mut next_label = n;

                    for _ in 0..(n * 20) {
                        let len = graphs[0].number_of_nodes();
                        let op = rng.random_range(0..20);

                        if len == 0 || op < 2 {
                            let label = next_label.to_string();
                            next_label += 1;
                            for graph in &mut graphs {
                                assert!(graph.add_vertex(label.as_str()));
                            }
                        } else if op < 4 {
                            let u = rng.random_range(0..len);
                            let label = graphs[0].vertex_label(u).unwrap().to_string();
                            for graph in &mut graphs {
                                assert!(graph.remove_vertex(&label));
                                assert_eq!(graph.vertex_index(&label), None);
                            }
                        } else if op < 8 {
                            // may hit an out-of-range index on purpose
                            let u = rng.random_range(0..len + 1);
                            let v = rng.random_range(0..len);
                            for graph in &mut graphs {
                                assert_eq!(graph.remove_edge(u, v), u < len);
                            }
                        } else {
                            let u = rng.random_range(0..len);
                            let v = rng.random_range(0..len + 1);
                            let w = random_weight(rng);
                            for graph in &mut graphs {
                                assert_eq!(graph.add_edge(u, v, w), v < len);
                            }
                        }

                        assert_equivalent(&graphs[0], &graphs[1]);
                    }
                }
            }

            #[test]
            fn vertex_removal_shifts_indices() {
                let rng = &mut Pcg64Mcg::seed_from_u64(5);

                for n in [3 as NumNodes, 8, 16] {
                    for _ in 0..10 {
                        let mut graphs = new_pair(n);
                        for _ in 0..(n * 2) {
                            let u = rng.random_range(0..n);
                            let v = rng.random_range(0..n);
                            let w = random_weight(rng);
                            graphs.iter_mut().for_each(|g| {
                                g.add_edge(u, v, w);
                            });
                        }

                        let removed = rng.random_range(0..n);
                        let removed_label = removed.to_string();

                        for graph in &mut graphs {
                            let mut expected = labelled_edges(graph);
                            expected.retain(|(a, b, _)| *a != removed_label && *b != removed_label);

                            assert!(graph.remove_vertex(&removed_label));
                            assert_eq!(graph.number_of_nodes(), n - 1);
                            assert_eq!(labelled_edges(graph), expected);

                            for old in (0..n).filter(|&u| u != removed) {
                                let new = if old < removed { old } else { old - 1 };
                                assert_eq!(graph.vertex_index(&old.to_string()), Some(new));
                            }

                            for u in graph.vertices() {
                                assert!(graph.neighbors_of(u).all(|v| v < n - 1));
                            }
                        }

                        assert_equivalent(&graphs[0], &graphs[1]);
                    }
                }
            }
        }
    };
}

pub(crate) use test_graph_ops;
