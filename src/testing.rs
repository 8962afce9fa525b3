/// Every graph representation should satisfy the same container contracts
macro_rules! test_graph_ops {
    ($env:ident, $graph:ident, ($($trait:ident),*)) => {
        #[cfg(test)]
        mod $env {
            use crate::{prelude::*, testing::test_graph_ops};
            use fxhash::FxHashMap;
            use itertools::Itertools;
            use rand::{Rng, SeedableRng};
            use rand_pcg::Pcg64Mcg;

            /// Creates a list of `m` random weighted edges for nodes `0..n`
            fn random_edges<R: Rng>(rng: &mut R, n: NumNodes, m: NumEdges) -> Vec<Edge> {
                (0..m)
                    .map(|_| {
                        let u = rng.random_range(0..n);
                        let v = rng.random_range(0..n);
                        let w: Weight = rng.random_range(1..100);
                        Edge(u, v, w)
                    })
                    .collect_vec()
            }

            $(
                test_graph_ops!($graph: $trait);
            )*
        }
    };
    ($graph:ident: GraphNew) => {
        #[test]
        fn graph_new() {
            for n in 1..50 {
                let graph = <$graph>::try_new(n).unwrap();

                assert_eq!(graph.number_of_nodes(), n);
                assert_eq!(graph.number_of_edges(), 0);
                assert_eq!(graph.vertices().collect_vec(), (0..n).collect_vec());

                for u in 0..n {
                    assert_eq!(graph.degree_of(u), 0);
                    assert!(graph.try_neighbors_of(u).unwrap().is_empty());
                }
            }

            assert_eq!(<$graph>::try_new(0).unwrap_err(), GraphError::ZeroCapacity);
        }
    };
    ($graph:ident: AdjacencyList) => {
        #[test]
        fn test_adjacency_list() {
            let rng = &mut Pcg64Mcg::seed_from_u64(3);

            for n in [10 as NumNodes, 20, 50] {
                for m in [n, n * 2, n * 5] {
                    let edges = random_edges(rng, n, m);
                    let graph = <$graph>::from_edges(n, edges.iter());

                    assert_eq!(graph.number_of_nodes(), n);
                    assert_eq!(graph.number_of_edges(), m);
                    assert_eq!(graph.edges(false).count(), 2 * m as usize);
                    assert_eq!(
                        (0..n).map(|u| graph.degree_of(u) as usize).sum::<usize>(),
                        2 * m as usize
                    );

                    // every inserted edge shows up from both sides; a loop
                    // stores both of its directions in the same list
                    let mut expected: FxHashMap<Edge, usize> = FxHashMap::default();
                    for e in &edges {
                        *expected.entry(e.normalized()).or_default() +=
                            if e.is_loop() { 2 } else { 1 };
                    }
                    let mut seen: FxHashMap<Edge, usize> = FxHashMap::default();
                    for e in graph.edges(true) {
                        *seen.entry(e).or_default() += 1;
                    }
                    assert_eq!(seen, expected);

                    for u in 0..n {
                        assert_eq!(
                            graph.degree_of(u) as usize,
                            graph.try_neighbors_of(u).unwrap().len()
                        );
                        for nb in graph.neighbors_of(u) {
                            assert!(graph.has_edge(nb.node, u));
                        }
                    }

                    assert_eq!(
                        graph.try_neighbors_of(n).unwrap_err(),
                        GraphError::VertexOutOfBounds { vertex: n, bound: n }
                    );
                }
            }
        }
    };
    ($graph:ident: GraphEdgeEditing) => {
        #[test]
        fn test_graph_edge_editing() {
            let rng = &mut Pcg64Mcg::seed_from_u64(5);

            for n in [10 as NumNodes, 20, 50] {
                let mut graph = <$graph>::try_new(n).unwrap();

                // pair-level mirror of the stored multiset
                let mut model: FxHashMap<(Node, Node), usize> = FxHashMap::default();
                let mut m = 0usize;

                for _ in 0..(n * 10) {
                    let u = rng.random_range(0..n);
                    let v = rng.random_range(0..n);
                    let pair = (u.min(v), u.max(v));

                    if rng.random_bool(0.6) {
                        let w: Weight = rng.random_range(1..100);
                        graph.try_add_edge(u, v, w).unwrap();
                        *model.entry(pair).or_default() += 1;
                        m += 1;
                    } else {
                        let existed = model.get(&pair).is_some_and(|c| *c > 0);
                        assert_eq!(graph.try_remove_edge(u, v).unwrap(), existed);
                        if existed {
                            *model.get_mut(&pair).unwrap() -= 1;
                            m -= 1;
                        }
                    }
                    assert_eq!(graph.number_of_edges() as usize, m);
                }

                // stored pairs still mirror the model
                let mut seen: FxHashMap<(Node, Node), usize> = FxHashMap::default();
                for Edge(u, v, _) in graph.edges(true) {
                    *seen.entry((u, v)).or_default() += 1;
                }
                for (pair, count) in seen.iter_mut() {
                    if pair.0 == pair.1 {
                        *count /= 2;
                    }
                }
                model.retain(|_, c| *c > 0);
                seen.retain(|_, c| *c > 0);
                assert_eq!(seen, model);

                // whatever remains is weight-symmetric
                for u in 0..n {
                    for nb in graph.neighbors_of(u) {
                        assert!(graph
                            .neighbors_of(nb.node)
                            .any(|b| b.node == u && b.weight == nb.weight));
                    }
                }
            }

            // failed validation leaves the graph untouched
            let mut graph = <$graph>::try_new(3).unwrap();
            graph.add_edge(0, 1, 7);
            assert_eq!(
                graph.try_add_edge(0, 3, 1).unwrap_err(),
                GraphError::VertexOutOfBounds { vertex: 3, bound: 3 }
            );
            assert_eq!(
                graph.try_remove_edge(3, 0).unwrap_err(),
                GraphError::VertexOutOfBounds { vertex: 3, bound: 3 }
            );
            assert_eq!(graph.number_of_edges(), 1);
            assert_eq!(graph.degree_of(0), 1);
        }
    };
}

pub(crate) use test_graph_ops;
